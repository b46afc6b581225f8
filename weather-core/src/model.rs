use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the screen shows for one successful lookup.
///
/// Built once from a response and never mutated; a newer fetch replaces it
/// as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    /// Celsius, rounded half-up.
    pub temperature: i32,
    /// Primary condition label, e.g. "Rain" or "Clear".
    pub condition: Option<String>,
    pub description: String,
    pub humidity_pct: u8,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Map a decoded current-weather body onto the display model.
    pub fn from_current(body: CurrentWeather, fetched_at: DateTime<Utc>) -> Self {
        let primary = body.weather.into_iter().next();

        let (condition, description) = match primary {
            Some(entry) => (Some(entry.main), entry.description),
            None => (None, String::new()),
        };

        Self {
            city: body.name,
            temperature: round_half_up(body.main.temp),
            condition,
            description,
            humidity_pct: body.main.humidity,
            fetched_at,
        }
    }
}

/// Rounds `.5` towards positive infinity, so -2.5 becomes -2.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Body of `GET /weather`. Only the fields the screen needs are required.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub main: CurrentMain,
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub main: String,
    pub description: String,
}
