use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::catalogue::Catalogue;
use crate::store::models::UserId;
use crate::store::{LoadStatus, UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingLoginChoice,
    /// `user` is `None` only for guest sessions.
    WorkoutMenu { user: Option<UserId> },
    Exited,
}

pub struct Session<'a, I, O> {
    pub(super) state: SessionState,
    pub(super) store: UserStore,
    /// `None` for guest sessions, which never touch the disk.
    pub(super) store_path: Option<PathBuf>,
    pub(super) catalogue: &'a Catalogue,
    pub(super) rng: StdRng,
    input: I,
    pub(super) output: O,
}

impl<'a, I, O> Session<'a, I, O>
where
    I: AsyncBufRead + Unpin,
    O: Write,
{
    /// Loads the store at `store_path` and starts at the login prompt.
    pub async fn open(
        store_path: impl Into<PathBuf>,
        catalogue: &'a Catalogue,
        input: I,
        mut output: O,
    ) -> Result<Self> {
        let store_path = store_path.into();
        let (store, status) = UserStore::load(&store_path).await;
        match status {
            LoadStatus::Loaded { users } => debug!("Session opened with {} users", users),
            LoadStatus::FreshStart => {
                writeln!(output, "No saved users found, starting fresh.")?;
            }
            LoadStatus::Discarded { reason } => {
                writeln!(
                    output,
                    "Saved users could not be read ({}); starting with an empty list.",
                    reason
                )?;
            }
        }

        Ok(Self {
            state: SessionState::AwaitingLoginChoice,
            store,
            store_path: Some(store_path),
            catalogue,
            rng: StdRng::from_os_rng(),
            input,
            output,
        })
    }

    /// A session that skips login and records nothing.
    pub fn guest(catalogue: &'a Catalogue, input: I, output: O) -> Self {
        Self {
            state: SessionState::WorkoutMenu { user: None },
            store: UserStore::new(),
            store_path: None,
            catalogue,
            rng: StdRng::from_os_rng(),
            input,
            output,
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Runs until the user quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "---  Welcome to the Workout Generator!  ---")?;

        loop {
            let next = match self.state {
                SessionState::AwaitingLoginChoice => self.login_step().await?,
                SessionState::WorkoutMenu { user } => self.menu_step(user).await?,
                SessionState::Exited => break,
            };
            if next != self.state {
                debug!("Session state {:?} -> {:?}", self.state, next);
            }
            self.state = next;
        }

        Ok(())
    }

    /// Prints `text` and reads one trimmed line. `None` means input ended.
    pub(super) async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", text)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until the answer parses as `T`.
    pub(super) async fn prompt_parsed<T: FromStr>(
        &mut self,
        text: &str,
        field: &str,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(text).await? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(
                    self.output,
                    "Error: '{}' is not a valid {}. Please try again.",
                    answer, field
                )?,
            }
        }
    }

    /// Saves the store (unless this is a guest session) and ends the session.
    pub(super) async fn exit(&mut self) -> Result<SessionState> {
        if let Some(path) = &self.store_path {
            if let Err(e) = self.store.save(path).await {
                warn!("Failed to save users to {}: {}", path.display(), e);
                writeln!(
                    self.output,
                    "Warning: could not save users to {}: {}",
                    path.display(),
                    e
                )?;
            }
        }
        Ok(SessionState::Exited)
    }
}
