//! Core library for the `cityweather` screen.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and its error taxonomy
//! - The view state and the controller that drives it from fetch results
//! - Background asset selection
//!
//! It is used by the `cityweather` CLI, but any front-end that can subscribe
//! to a `tokio::sync::watch` channel can render it.

pub mod background;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;

pub use background::BackgroundSelector;
pub use config::Config;
pub use controller::{Commit, WeatherViewController};
pub use error::FetchError;
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, provider_from_config};
pub use view::{FETCH_FAILED_MESSAGE, ViewState};
