//! Login and registration.

use std::io::Write;

use anyhow::Result;
use log::{debug, info};
use tokio::io::AsyncBufRead;

use crate::error::{InputError, StoreError};
use crate::session::{RECENT_HISTORY, Session, SessionState};
use crate::store::models::{Measurement, UserId, UserProfile};

impl<I, O> Session<'_, I, O>
where
    I: AsyncBufRead + Unpin,
    O: Write,
{
    pub(super) async fn login_step(&mut self) -> Result<SessionState> {
        let Some(choice) = self
            .prompt("\nDo you already have a user ID? (y/n, or 'quit')")
            .await?
        else {
            return self.exit().await;
        };

        match choice.to_lowercase().as_str() {
            "quit" => {
                writeln!(self.output, "Goodbye!")?;
                self.exit().await
            }
            "y" => self.login().await,
            "n" => self.register().await,
            _ => {
                writeln!(
                    self.output,
                    "Error: {}. Please enter 'y', 'n' or 'quit'.",
                    InputError::UnknownCommand(choice)
                )?;
                Ok(SessionState::AwaitingLoginChoice)
            }
        }
    }

    async fn login(&mut self) -> Result<SessionState> {
        let Some(answer) = self.prompt("Enter your user ID:").await? else {
            return self.exit().await;
        };

        let id = match answer.parse::<UserId>() {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "Error: {}.", e)?;
                return Ok(SessionState::AwaitingLoginChoice);
            }
        };

        let Some(record) = self.store.find(id) else {
            writeln!(self.output, "Error: {}.", StoreError::UnknownUser(id))?;
            return Ok(SessionState::AwaitingLoginChoice);
        };

        info!("User {} logged in", id);
        writeln!(self.output, "\nWelcome back, {}!", record.name)?;
        let recent = record.recent_history(RECENT_HISTORY);
        if recent.is_empty() {
            writeln!(self.output, "No workouts logged yet.")?;
        } else {
            writeln!(self.output, "Your last {} workouts:", recent.len())?;
            for entry in recent {
                writeln!(self.output, "  {}", entry)?;
            }
        }

        Ok(SessionState::WorkoutMenu { user: Some(id) })
    }

    async fn register(&mut self) -> Result<SessionState> {
        let Some(name) = self.prompt("What's your name?").await? else {
            return self.exit().await;
        };
        let Some(age) = self.prompt_parsed::<u32>("How old are you?", "age").await? else {
            return self.exit().await;
        };
        let Some(weight) = self
            .prompt_parsed::<Measurement>("What's your weight (kg)?", "weight")
            .await?
        else {
            return self.exit().await;
        };
        let Some(height) = self
            .prompt_parsed::<Measurement>("What's your height (cm)?", "height")
            .await?
        else {
            return self.exit().await;
        };

        let profile = UserProfile {
            name,
            age,
            weight: weight.get(),
            height: height.get(),
        };
        match self.store.register(profile, &mut self.rng) {
            Ok(id) => {
                debug!("Registered user {}", id);
                writeln!(
                    self.output,
                    "\nYou're registered! Your user ID is {}. Use it to log in next time.",
                    id
                )?;
                Ok(SessionState::WorkoutMenu { user: Some(id) })
            }
            Err(e) => {
                writeln!(self.output, "Error: could not register: {}.", e)?;
                Ok(SessionState::AwaitingLoginChoice)
            }
        }
    }
}
