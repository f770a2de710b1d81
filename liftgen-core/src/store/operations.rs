use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::error::StoreError;
use crate::store::UserStore;
use crate::store::models::{UserId, UserProfile, UserRecord};

/// Random draws tried before falling back to picking from the free ids.
const MAX_RANDOM_DRAWS: usize = 64;

impl UserStore {
    /// Adds a new user under a random unused id and returns that id.
    pub fn register<R: Rng + ?Sized>(
        &mut self,
        profile: UserProfile,
        rng: &mut R,
    ) -> Result<UserId, StoreError> {
        let id = self.allocate_id(rng)?;
        debug!("Registering {} as user {}", profile.name, id);
        self.users.insert(id, UserRecord::from(profile));
        Ok(id)
    }

    fn allocate_id<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<UserId, StoreError> {
        for attempt in 1..=MAX_RANDOM_DRAWS {
            let candidate = UserId::random(rng);
            if !self.contains(candidate) {
                return Ok(candidate);
            }
            debug!("User id {} taken (attempt {})", candidate, attempt);
        }

        UserId::all()
            .filter(|id| !self.contains(*id))
            .choose(rng)
            .ok_or(StoreError::IdSpaceExhausted)
    }

    pub fn find(&self, id: UserId) -> Option<&UserRecord> {
        self.users.get(&id)
    }

    pub fn append_history(&mut self, id: UserId, entry: String) -> Result<(), StoreError> {
        let record = self
            .users
            .get_mut(&id)
            .ok_or(StoreError::UnknownUser(id))?;
        record.history.push(entry);
        Ok(())
    }
}
