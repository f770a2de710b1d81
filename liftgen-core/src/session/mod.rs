//! Session module driving the console conversation.
//!
//! This module provides the main `Session` struct that walks a user through
//! login or registration and then the workout menu, recording generated
//! workouts against the user store.

mod login;
mod session;
mod workout;

#[cfg(test)]
mod testing;

pub use session::{Session, SessionState};

/// History entries shown when a user logs in.
pub const RECENT_HISTORY: usize = 5;
