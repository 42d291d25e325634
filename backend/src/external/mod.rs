//! Outbound API clients
//!
//! Each client wraps one third-party endpoint and returns a typed
//! [`FetchError`] on failure. Callers in the services layer log the failure
//! kind and fall back to the static Gujarat reference tables; no fetch
//! failure ever crosses the HTTP boundary.

pub mod mandi;
pub mod soil;
pub mod weather;

pub use mandi::MandiClient;
pub use soil::SoilClient;
pub use weather::WeatherClient;

use thiserror::Error;

/// Why an outbound fetch failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, timeout
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// 200 with a body that did not match the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The upstream answered but had nothing for the query
    #[error("no results for query")]
    NoResults,

    /// The API key is still the shipped placeholder; no call was attempted
    #[error("API key not configured")]
    KeyNotConfigured,
}

impl FetchError {
    /// Stable failure-kind label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Malformed(_) => "malformed",
            FetchError::NoResults => "no_results",
            FetchError::KeyNotConfigured => "key_not_configured",
        }
    }
}
