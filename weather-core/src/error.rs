use reqwest::StatusCode;
use thiserror::Error;

/// Why a single weather fetch failed.
///
/// The screen collapses all of these into one user-facing message; the
/// variants only exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather service failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request to weather service timed out")]
    Timeout,

    #[error("weather service responded with status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout => "timeout",
            FetchError::HttpStatus { .. } => "status",
            FetchError::Parse(_) => "parse",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err)
        }
    }
}
