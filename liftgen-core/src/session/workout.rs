//! The workout menu: pick a group and level, print and record a workout.

use std::io::Write;

use anyhow::Result;
use chrono::Local;
use log::warn;
use tokio::io::AsyncBufRead;

use crate::catalogue::Category;
use crate::error::InputError;
use crate::generator::{Level, generate_workout};
use crate::session::{Session, SessionState};
use crate::store::models::UserId;

impl<I, O> Session<'_, I, O>
where
    I: AsyncBufRead + Unpin,
    O: Write,
{
    fn menu_text(&self) -> String {
        let options: Vec<String> = self
            .catalogue
            .categories()
            .iter()
            .map(|c| format!("'{}'", c))
            .collect();
        format!(
            "\nWhat do you want to train?\nOptions: {}, or 'quit'",
            options.join(", ")
        )
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Hope you enjoyed your workout, see you next time! ⭐"
        )?;
        Ok(())
    }

    pub(super) async fn menu_step(&mut self, user: Option<UserId>) -> Result<SessionState> {
        let stay = SessionState::WorkoutMenu { user };
        let text = self.menu_text();
        let Some(choice) = self.prompt(&text).await? else {
            self.farewell()?;
            return self.exit().await;
        };

        if choice.eq_ignore_ascii_case("quit") {
            self.farewell()?;
            return self.exit().await;
        }

        let category = match choice.parse::<Category>() {
            Ok(category) if self.catalogue.categories().contains(&category) => category,
            Ok(_) => {
                writeln!(
                    self.output,
                    "Error: {}. Please try again.",
                    InputError::UnknownCategory(choice)
                )?;
                return Ok(stay);
            }
            Err(e) => {
                writeln!(self.output, "Error: {}. Please try again.", e)?;
                return Ok(stay);
            }
        };

        let Some(answer) = self
            .prompt(&format!(
                "Selected '{}'. What's your experience level?\n (1 for Beginner, 2 for Intermediate, 3 for Advanced)",
                category
            ))
            .await?
        else {
            self.farewell()?;
            return self.exit().await;
        };

        let level = match answer.parse::<Level>() {
            Ok(level) => level,
            Err(e) => {
                writeln!(self.output, "Error: {}. Please enter 1, 2, or 3.", e)?;
                return Ok(stay);
            }
        };

        self.run_workout(user, category, level)?;
        Ok(stay)
    }

    fn run_workout(&mut self, user: Option<UserId>, category: Category, level: Level) -> Result<()> {
        let workout = match generate_workout(self.catalogue, category, level, &mut self.rng) {
            Ok(workout) => workout,
            Err(e) => {
                writeln!(self.output, "Error: {}.", e)?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "\n...Generating a Lvl {} {} workout...",
            level, category
        )?;
        writeln!(self.output, "--- Here is your workout: ---")?;
        for line in workout.lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "-----------------------------------------------")?;

        if let Some(id) = user {
            let entry = workout.history_entry(&Local::now());
            if let Err(e) = self.store.append_history(id, entry) {
                warn!("Could not record workout for {}: {}", id, e);
            }
        }
        Ok(())
    }
}
