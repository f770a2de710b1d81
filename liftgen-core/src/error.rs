use thiserror::Error as ThisError;

use crate::catalogue::{Category, REQUIRED_EXERCISES};
use crate::store::models::UserId;

/// Console input that could not be turned into a command or value.
#[derive(Debug, ThisError, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("'{input}' is not a valid {field}")]
    NotANumber { field: &'static str, input: String },
    #[error("'{0}' is not a valid option")]
    UnknownCommand(String),
    #[error("'{0}' is not a known muscle group")]
    UnknownCategory(String),
    #[error("level {0} is out of range, expected 1, 2 or 3")]
    LevelOutOfRange(String),
}

impl InputError {
    pub fn not_a_number(field: &'static str, input: &str) -> Self {
        InputError::NotANumber {
            field,
            input: input.to_string(),
        }
    }
}

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed user file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("'{0}' is not a valid user id")]
    InvalidUserId(String),
    #[error("no user with id {0}")]
    UnknownUser(UserId),
    #[error("every user id is taken")]
    IdSpaceExhausted,
}

#[derive(Debug, ThisError, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkoutError {
    #[error("no exercises listed for {0}")]
    UnknownCategory(Category),
    #[error("{category} has only {available} exercises, {required} are needed", required = REQUIRED_EXERCISES)]
    InsufficientExercises { category: Category, available: usize },
}
