//! Random workout generation and formatting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use log::debug;
use rand::Rng;
use rand::seq::index;

use crate::catalogue::{Catalogue, Category, REQUIRED_EXERCISES};
use crate::error::{InputError, WorkoutError};

const INTERVAL_SETS: u32 = 4;
const INTERVAL_BASE_SECONDS: u32 = 20;
const INTERVAL_REST_SECONDS: u32 = 30;
const STRENGTH_SETS: u32 = 3;
const STRENGTH_BASE_REPS: u32 = 8;

/// Difficulty level, always 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub const BEGINNER: Level = Level(1);
    pub const INTERMEDIATE: Level = Level(2);
    pub const ADVANCED: Level = Level(3);

    pub fn get(&self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<i64> for Level {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1..=3 => Ok(Level(value as u8)),
            _ => Err(InputError::LevelOutOfRange(value.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Level::try_from(value),
            // A whole number too large for i64 is still a number, just not a level.
            Err(_) if is_integer(trimmed) => Err(InputError::LevelOutOfRange(trimmed.to_string())),
            Err(_) => Err(InputError::not_a_number("level", trimmed)),
        }
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How every exercise in a workout is to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prescription {
    Intervals {
        sets: u32,
        seconds_on: u32,
        seconds_off: u32,
    },
    Strength {
        sets: u32,
        reps: u32,
    },
}

impl Prescription {
    pub fn for_workout(category: Category, level: Level) -> Self {
        if category.is_interval() {
            Prescription::Intervals {
                sets: INTERVAL_SETS,
                seconds_on: INTERVAL_BASE_SECONDS + level.get() * 10,
                seconds_off: INTERVAL_REST_SECONDS,
            }
        } else {
            Prescription::Strength {
                sets: STRENGTH_SETS,
                reps: STRENGTH_BASE_REPS + level.get() * 2,
            }
        }
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prescription::Intervals {
                sets,
                seconds_on,
                seconds_off,
            } => write!(f, "{} sets of {}s on, {}s off", sets, seconds_on, seconds_off),
            Prescription::Strength { sets, reps } => write!(f, "{} sets of {} reps", sets, reps),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub category: Category,
    pub level: Level,
    pub exercises: Vec<String>,
    pub prescription: Prescription,
}

impl Workout {
    /// One numbered line per exercise, in selection order.
    pub fn lines(&self) -> Vec<String> {
        self.exercises
            .iter()
            .enumerate()
            .map(|(idx, name)| format!("{}. {}: {}", idx + 1, name, self.prescription))
            .collect()
    }

    pub fn history_entry<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "[{}] Lvl {} {} workout: {}",
            at.format("%Y-%m-%d %H:%M"),
            self.level,
            self.category,
            self.exercises.join(", ")
        )
    }
}

/// Picks four distinct exercises for `category` at random.
pub fn generate_workout<R: Rng + ?Sized>(
    catalogue: &Catalogue,
    category: Category,
    level: Level,
    rng: &mut R,
) -> Result<Workout, WorkoutError> {
    let available = catalogue.exercises_for(category)?;
    if available.len() < REQUIRED_EXERCISES {
        return Err(WorkoutError::InsufficientExercises {
            category,
            available: available.len(),
        });
    }

    let exercises: Vec<String> = index::sample(rng, available.len(), REQUIRED_EXERCISES)
        .iter()
        .map(|i| available[i].clone())
        .collect();
    debug!("Generated lvl {} {} workout: {:?}", level, category, exercises);

    Ok(Workout {
        category,
        level,
        exercises,
        prescription: Prescription::for_workout(category, level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("1", Level::BEGINNER)]
    #[case(" 2 ", Level::INTERMEDIATE)]
    #[case("3", Level::ADVANCED)]
    fn parses_levels(#[case] input: &str, #[case] expected: Level) {
        assert_eq!(input.parse::<Level>(), Ok(expected));
    }

    #[rstest]
    #[case("0", InputError::LevelOutOfRange("0".into()))]
    #[case("4", InputError::LevelOutOfRange("4".into()))]
    #[case("-1", InputError::LevelOutOfRange("-1".into()))]
    #[case("99999999999999999999", InputError::LevelOutOfRange("99999999999999999999".into()))]
    #[case(" -99999999999999999999 ", InputError::LevelOutOfRange("-99999999999999999999".into()))]
    #[case("-", InputError::not_a_number("level", "-"))]
    #[case("two", InputError::not_a_number("level", "two"))]
    #[case("", InputError::not_a_number("level", ""))]
    fn rejects_bad_levels(#[case] input: &str, #[case] expected: InputError) {
        assert_eq!(input.parse::<Level>(), Err(expected));
    }

    #[rstest]
    #[case(Level::BEGINNER, 30)]
    #[case(Level::INTERMEDIATE, 40)]
    #[case(Level::ADVANCED, 50)]
    fn cardio_uses_intervals(#[case] level: Level, #[case] seconds_on: u32) {
        assert_eq!(
            Prescription::for_workout(Category::Cardio, level),
            Prescription::Intervals {
                sets: 4,
                seconds_on,
                seconds_off: 30
            }
        );
    }

    #[rstest]
    #[case(Category::Push, Level::BEGINNER, 10)]
    #[case(Category::Pull, Level::INTERMEDIATE, 12)]
    #[case(Category::Legs, Level::ADVANCED, 14)]
    fn strength_uses_reps(#[case] category: Category, #[case] level: Level, #[case] reps: u32) {
        assert_eq!(
            Prescription::for_workout(category, level),
            Prescription::Strength { sets: 3, reps }
        );
    }

    #[test]
    fn picks_four_distinct_exercises_from_the_group() {
        let catalogue = Catalogue::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for category in Category::ALL {
            let pool = catalogue.exercises_for(category).unwrap();
            for _ in 0..50 {
                let workout =
                    generate_workout(catalogue, category, Level::INTERMEDIATE, &mut rng).unwrap();
                let unique: HashSet<&String> = workout.exercises.iter().collect();
                assert_eq!(workout.exercises.len(), 4);
                assert_eq!(unique.len(), 4);
                assert!(workout.exercises.iter().all(|e| pool.contains(e)));
            }
        }
    }

    #[test]
    fn exactly_four_exercises_are_all_used() {
        let catalogue = Catalogue::new([(Category::Pull, vec!["A", "B", "C", "D"])]);
        let mut rng = StdRng::seed_from_u64(1);
        let workout =
            generate_workout(&catalogue, Category::Pull, Level::BEGINNER, &mut rng).unwrap();
        let mut names = workout.exercises.clone();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn too_few_exercises_is_an_error() {
        let catalogue = Catalogue::new([(Category::Legs, vec!["Squats", "Lunges", "Leg Press"])]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_workout(&catalogue, Category::Legs, Level::BEGINNER, &mut rng),
            Err(WorkoutError::InsufficientExercises {
                category: Category::Legs,
                available: 3
            })
        );
        assert_eq!(
            generate_workout(&catalogue, Category::Push, Level::BEGINNER, &mut rng),
            Err(WorkoutError::UnknownCategory(Category::Push))
        );
    }

    #[test]
    fn formats_lines_and_history_entry() {
        let workout = Workout {
            category: Category::Cardio,
            level: Level::ADVANCED,
            exercises: vec![
                "Burpees".into(),
                "High Knees".into(),
                "Jump Squats".into(),
                "Jumping Jacks".into(),
            ],
            prescription: Prescription::for_workout(Category::Cardio, Level::ADVANCED),
        };
        assert_eq!(
            workout.lines(),
            vec![
                "1. Burpees: 4 sets of 50s on, 30s off",
                "2. High Knees: 4 sets of 50s on, 30s off",
                "3. Jump Squats: 4 sets of 50s on, 30s off",
                "4. Jumping Jacks: 4 sets of 50s on, 30s off",
            ]
        );

        let at = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap()
            .and_utc();
        assert_eq!(
            workout.history_entry::<Utc>(&at),
            "[2025-03-09 07:05] Lvl 3 cardio workout: Burpees, High Knees, Jump Squats, Jumping Jacks"
        );
    }

    #[test]
    fn strength_lines_show_reps() {
        let workout = Workout {
            category: Category::Legs,
            level: Level::INTERMEDIATE,
            exercises: vec!["Squats".into(), "Lunges".into(), "Leg Press".into(), "Leg Curls".into()],
            prescription: Prescription::for_workout(Category::Legs, Level::INTERMEDIATE),
        };
        assert_eq!(workout.lines()[1], "2. Lunges: 3 sets of 12 reps");
    }
}
