//! The exercise catalogue: which exercises belong to which muscle group.
//!
//! The built-in catalogue is created once and shared read-only for the life of the
//! process. Custom catalogues can be built with [`Catalogue::new`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{InputError, WorkoutError};

/// Number of exercises in every generated workout.
pub const REQUIRED_EXERCISES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Push,
    Pull,
    Legs,
    Cardio,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Push,
        Category::Pull,
        Category::Legs,
        Category::Cardio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Push => "push",
            Category::Pull => "pull",
            Category::Legs => "legs",
            Category::Cardio => "cardio",
        }
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, Category::Cardio)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| InputError::UnknownCategory(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    groups: HashMap<Category, Vec<String>>,
}

static BUILTIN: LazyLock<Catalogue> = LazyLock::new(|| {
    Catalogue::new([
        (
            Category::Push,
            vec![
                "Bench Press",
                "Overhead Press",
                "Incline Dumbbell Press",
                "Tricep Pushdown",
                "Lateral Raises",
                "Chest Dips",
            ],
        ),
        (
            Category::Pull,
            vec![
                "Pull-Ups",
                "Bent Over Rows",
                "Lat Pulldowns",
                "Bicep Curls",
                "Face Pulls",
                "Seated Cable Rows",
            ],
        ),
        (
            Category::Legs,
            vec![
                "Squats",
                "Deadlifts (RDL)",
                "Leg Press",
                "Leg Curls",
                "Calf Raises",
                "Lunges",
            ],
        ),
        (
            Category::Cardio,
            vec![
                "Burpees",
                "Jumping Jacks",
                "High Knees",
                "Mountain Climbers",
                "Jump Squats",
                "Lunge Jumps",
            ],
        ),
    ])
});

impl Catalogue {
    pub fn new<I, N>(groups: impl IntoIterator<Item = (Category, I)>) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let groups = groups
            .into_iter()
            .map(|(category, names)| (category, names.into_iter().map(Into::into).collect()))
            .collect();
        Self { groups }
    }

    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Exercises for `category`, in catalogue order.
    pub fn exercises_for(&self, category: Category) -> Result<&[String], WorkoutError> {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .ok_or(WorkoutError::UnknownCategory(category))
    }

    /// Categories this catalogue has entries for, in menu order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.groups.contains_key(c))
            .collect()
    }
}
