use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use cityweather_core::{
    BackgroundSelector, Config, WeatherViewController, config::API_KEY_ENV, provider_from_config,
};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::screen::Screen;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show the weather for a city once and exit.
    Show {
        /// City name, sent to the API as typed.
        city: String,
    },

    /// Interactive screen with a search prompt (the default).
    Screen {
        /// City to load first instead of the configured default.
        #[arg(long)]
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Screen { city: None }) {
            Command::Configure => configure(),
            Command::Show { city } => {
                if city.trim().is_empty() {
                    bail!("City name must not be empty");
                }
                let config = Config::load()?;
                build_screen(&config, Some(city))?.mount().await;
                Ok(())
            }
            Command::Screen { city } => {
                let config = Config::load()?;
                build_screen(&config, city)?.run_interactive().await
            }
        }
    }
}

fn build_screen(config: &Config, city: Option<String>) -> anyhow::Result<Screen> {
    let provider = provider_from_config(config)?;
    let backgrounds = BackgroundSelector::from_map(config.backgrounds.clone())
        .context("Invalid [backgrounds] table in config")?;

    let city = city.unwrap_or_else(|| config.default_city.clone());
    debug!(%city, base_url = %config.base_url, "starting weather screen");
    let controller = Arc::new(WeatherViewController::new(provider, city));

    Ok(Screen::new(controller, backgrounds))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key (leave empty to keep current):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !key.trim().is_empty() {
        config.api_key = Some(key.trim().to_string());
    }

    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.default_city = city.trim().to_string();
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    if config.api_key.is_none() {
        println!("No API key stored; set {API_KEY_ENV} before running `cityweather`.");
    }

    Ok(())
}
