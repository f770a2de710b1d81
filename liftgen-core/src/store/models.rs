use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, StoreError};

/// Four-digit user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u16);

impl UserId {
    pub const MIN: u16 = 1000;
    pub const MAX: u16 = 9999;

    pub fn new(value: u16) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(UserId(value))
    }

    pub fn get(&self) -> u16 {
        self.0
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        UserId(rng.random_range(Self::MIN..=Self::MAX))
    }

    /// Every valid id, ascending.
    pub fn all() -> impl Iterator<Item = UserId> {
        (Self::MIN..=Self::MAX).map(UserId)
    }

    /// Strict parse used for keys read back from the user file.
    pub fn from_key(key: &str) -> Result<Self, StoreError> {
        key.parse::<u16>()
            .ok()
            .and_then(UserId::new)
            .filter(|id| id.to_string() == key)
            .ok_or_else(|| StoreError::InvalidUserId(key.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lenient parse used for ids typed at the login prompt.
impl FromStr for UserId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| InputError::not_a_number("user id", trimmed))?;
        u16::try_from(value)
            .ok()
            .and_then(UserId::new)
            .ok_or_else(|| InputError::not_a_number("user id", trimmed))
    }
}

/// A body measurement typed at a prompt. Only finite values are accepted, since
/// JSON has no representation for NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement(f64);

impl Measurement {
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl FromStr for Measurement {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Measurement)
            .ok_or_else(|| InputError::not_a_number("measurement", trimmed))
    }
}

/// What a user supplies when registering.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub history: Vec<String>,
}

impl From<UserProfile> for UserRecord {
    fn from(profile: UserProfile) -> Self {
        UserRecord {
            name: profile.name,
            age: profile.age,
            weight: profile.weight,
            height: profile.height,
            history: Vec::new(),
        }
    }
}

impl UserRecord {
    /// The last `n` history entries, oldest first.
    pub fn recent_history(&self, n: usize) -> &[String] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }
}
