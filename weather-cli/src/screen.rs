use std::{future::Future, sync::Arc};

use anyhow::{Context, Result};
use cityweather_core::{BackgroundSelector, Commit, ViewState, WeatherViewController};
use inquire::{InquireError, Text};

use crate::render::{SEARCH_PLACEHOLDER, render_view};

/// Terminal front-end: prints every state the controller publishes.
pub struct Screen {
    controller: Arc<WeatherViewController>,
    backgrounds: BackgroundSelector,
}

impl Screen {
    pub fn new(controller: Arc<WeatherViewController>, backgrounds: BackgroundSelector) -> Self {
        Self { controller, backgrounds }
    }

    /// First show of the screen: fetch the default city.
    pub async fn mount(&self) -> Commit {
        let outcome = self.drive(async { Some(self.controller.mount().await) }).await;
        outcome.unwrap_or(Commit::Stale)
    }

    /// Mount, then keep prompting for cities until the user cancels (Esc / Ctrl-C).
    pub async fn run_interactive(&self) -> Result<()> {
        self.mount().await;

        loop {
            let initial = self.controller.query();
            let input = tokio::task::spawn_blocking(move || {
                Text::new(&format!("{SEARCH_PLACEHOLDER}:"))
                    .with_initial_value(&initial)
                    .prompt()
            })
            .await
            .context("Search prompt task failed")?;

            match input {
                Ok(text) => {
                    self.controller.set_query(text);
                    self.drive(self.controller.on_submit()).await;
                }
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    break;
                }
                Err(err) => return Err(err).context("Failed to read search input"),
            }
        }

        Ok(())
    }

    /// Run `action` to completion, printing each published state along the way.
    async fn drive<F>(&self, action: F) -> Option<Commit>
    where
        F: Future<Output = Option<Commit>>,
    {
        let mut rx = self.controller.subscribe();
        tokio::pin!(action);

        let outcome = loop {
            tokio::select! {
                outcome = &mut action => break outcome,
                changed = rx.changed() => {
                    if changed.is_err() {
                        break (&mut action).await;
                    }
                    let view = rx.borrow_and_update().clone();
                    self.print(&view);
                }
            }
        };

        if rx.has_changed().unwrap_or(false) {
            let view = rx.borrow_and_update().clone();
            self.print(&view);
        }

        outcome
    }

    fn print(&self, view: &ViewState) {
        println!("{}", render_view(view, &self.backgrounds, &self.controller.query()));
    }
}
