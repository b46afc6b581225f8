//! Background asset lookup keyed on the weather condition label.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::{config::default_backgrounds, model::WeatherSnapshot};

/// Key every asset table must carry.
pub const DEFAULT_KEY: &str = "Default";

/// Stateless condition label -> asset identifier table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundSelector {
    assets: BTreeMap<String, String>,
    fallback: String,
}

impl BackgroundSelector {
    /// Build from a table loaded at startup. The table must have a `Default` entry.
    pub fn from_map(assets: BTreeMap<String, String>) -> Result<Self> {
        let Some(fallback) = assets.get(DEFAULT_KEY).cloned() else {
            bail!("Background table has no '{DEFAULT_KEY}' entry");
        };

        Ok(Self { assets, fallback })
    }

    /// Asset for the snapshot's condition. Labels match exactly, case included.
    pub fn select(&self, snapshot: Option<&WeatherSnapshot>) -> &str {
        snapshot
            .and_then(|s| s.condition.as_deref())
            .and_then(|label| self.assets.get(label))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for BackgroundSelector {
    fn default() -> Self {
        let assets = default_backgrounds();
        let fallback = assets[DEFAULT_KEY].clone();
        Self { assets, fallback }
    }
}
