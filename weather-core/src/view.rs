use std::sync::Arc;

use crate::model::WeatherSnapshot;

/// Message shown for every failed lookup, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Aranan şehir bulunamadı veya bir bağlantı sorunu oluştu.";

/// What the screen currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing requested yet. Rendered like `Loading`.
    #[default]
    Idle,
    Loading,
    Ready(Arc<WeatherSnapshot>),
    Error(String),
}

impl ViewState {
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Idle | ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}
