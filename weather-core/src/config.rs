use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::background::DEFAULT_KEY;

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_CITY: &str = "Shanghai";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const MIN_TIMEOUT_SECS: u64 = 1;

/// Top-level configuration stored on disk.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather `appid`. Prefer the environment variable in deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// City fetched when the screen is first shown.
    #[serde(default = "default_city")]
    pub default_city: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout; values below one second are raised to one.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Example TOML:
    /// [backgrounds]
    /// Rain = "images/rainn.jpg"
    /// Default = "images/default.jpg"
    #[serde(default = "default_backgrounds")]
    pub backgrounds: BTreeMap<String, String>,
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

pub fn default_backgrounds() -> BTreeMap<String, String> {
    [
        ("Rain", "images/rainn.jpg"),
        ("Clear", "images/clean.jpg"),
        ("Clouds", "images/bulutlu.jpg"),
        (DEFAULT_KEY, "images/default.jpg"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_city: default_city(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            backgrounds: default_backgrounds(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The API key to use, with the environment taking precedence over the file.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.api_key_with_override(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_override(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: set {API_KEY_ENV} or run `cityweather configure`."
                )
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}
