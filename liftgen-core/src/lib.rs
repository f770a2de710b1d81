pub mod catalogue;
pub mod error;
pub mod generator;
pub mod logging;
pub mod session;
pub mod store;

pub use catalogue::{Catalogue, Category};
pub use error::{InputError, StoreError, WorkoutError};
pub use generator::{Level, Prescription, Workout, generate_workout};
pub use session::{Session, SessionState};
pub use store::models::{UserId, UserProfile, UserRecord};
pub use store::{LoadStatus, UserStore};
