//! Fetch orchestration for the weather screen.
//!
//! Each fetch takes a request token when it is issued. A completed fetch may
//! only publish its result while its token is still the latest one; older
//! results are dropped. Token bump and state write happen under the watch
//! channel's lock, so a reader never sees a state from a superseded fetch.

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    provider::WeatherProvider,
    view::{FETCH_FAILED_MESSAGE, ViewState},
};

/// Whether a finished fetch was allowed to update the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    /// A newer fetch was issued while this one was in flight.
    Stale,
}

#[derive(Debug)]
pub struct WeatherViewController {
    provider: Arc<dyn WeatherProvider>,
    default_city: String,
    query: Mutex<String>,
    issued: AtomicU64,
    state: watch::Sender<ViewState>,
}

impl WeatherViewController {
    /// The search box starts out holding `default_city`.
    pub fn new(provider: Arc<dyn WeatherProvider>, default_city: impl Into<String>) -> Self {
        let default_city = default_city.into();
        let (state, _) = watch::channel(ViewState::Idle);

        Self {
            provider,
            query: Mutex::new(default_city.clone()),
            default_city,
            issued: AtomicU64::new(0),
            state,
        }
    }

    /// Initial load: fetch the default city once.
    pub async fn mount(&self) -> Commit {
        let city = self.default_city.clone();
        self.fetch_weather(&city).await
    }

    /// Fetch `city` verbatim and publish the outcome if no newer fetch started.
    pub async fn fetch_weather(&self, city: &str) -> Commit {
        let token = self.begin();
        debug!(token, city, "fetch issued");

        let next = match self.provider.current(city).await {
            Ok(snapshot) => ViewState::Ready(Arc::new(snapshot)),
            Err(err) => {
                warn!(token, city, kind = err.kind(), error = %err, "weather fetch failed");
                ViewState::Error(FETCH_FAILED_MESSAGE.to_string())
            }
        };

        self.complete(token, next)
    }

    /// Submit the search box. Blank input is ignored.
    pub async fn on_submit(&self) -> Option<Commit> {
        let city = self.query().trim().to_string();
        if city.is_empty() {
            return None;
        }

        Some(self.fetch_weather(&city).await)
    }

    pub fn set_query(&self, text: impl Into<String>) {
        *self.query.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }

    pub fn query(&self) -> String {
        self.query.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn view(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that wakes on every published state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    fn begin(&self) -> u64 {
        let mut token = 0;
        self.state.send_modify(|view| {
            token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            *view = ViewState::Loading;
        });
        token
    }

    fn complete(&self, token: u64, next: ViewState) -> Commit {
        let mut commit = Commit::Stale;
        self.state.send_if_modified(|view| {
            if self.issued.load(Ordering::SeqCst) != token {
                return false;
            }
            *view = next;
            commit = Commit::Applied;
            true
        });

        match commit {
            Commit::Applied => info!(token, "view state updated"),
            Commit::Stale => debug!(token, "discarding stale weather response"),
        }
        commit
    }
}
