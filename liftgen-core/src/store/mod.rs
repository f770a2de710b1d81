//! Flat-file user registry.
//!
//! The whole store lives in memory and is read from / written to a single JSON
//! object keyed by the decimal user id. There is no locking; the last process to
//! save wins.

pub mod models;
pub mod operations;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::StoreError;
use models::{UserId, UserRecord};

/// Default location of the user file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "users.json";

/// How [`UserStore::load`] arrived at the store it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { users: usize },
    FreshStart,
    Discarded { reason: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStore {
    users: BTreeMap<UserId, UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the store at `path`. A missing or unreadable file yields an empty
    /// store; the returned status says which case applied.
    pub async fn load(path: impl AsRef<Path>) -> (Self, LoadStatus) {
        let path = path.as_ref();
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No user file at {}, starting fresh", path.display());
                return (Self::new(), LoadStatus::FreshStart);
            }
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                return (
                    Self::new(),
                    LoadStatus::Discarded {
                        reason: StoreError::from(e).to_string(),
                    },
                );
            }
        };

        match Self::from_json(&contents) {
            Ok(store) => {
                info!("Loaded {} users from {}", store.len(), path.display());
                let users = store.len();
                (store, LoadStatus::Loaded { users })
            }
            Err(e) => {
                warn!("Discarding user file {}: {}", path.display(), e);
                (
                    Self::new(),
                    LoadStatus::Discarded {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// Overwrites `path` with the full store.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        tokio::fs::write(path, json).await?;
        info!("Saved {} users to {}", self.len(), path.display());
        Ok(())
    }

    pub fn from_json(contents: &str) -> Result<Self, StoreError> {
        let raw: BTreeMap<String, UserRecord> = serde_json::from_str(contents)?;
        let mut users = BTreeMap::new();
        for (key, record) in raw {
            let id = UserId::from_key(&key)?;
            debug!("Read user {} ({} history entries)", id, record.history.len());
            users.insert(id, record);
        }
        Ok(Self { users })
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        let raw: BTreeMap<String, &UserRecord> = self
            .users
            .iter()
            .map(|(id, record)| (id.to_string(), record))
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }
}
