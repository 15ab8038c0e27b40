//! Configuration for the search client.

use std::env;
use std::time::Duration;

use tracing::info;

/// Default search service URL.
const DEFAULT_HOST: &str = "http://localhost:7700";

/// Default deadline for `wait_for_pending_update`.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default sleep between two status polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration for the search client.
///
/// Immutable once the client is built; concurrent callers share it freely.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the search service.
    pub host: String,
    /// API key sent as a credential header on every request, if set.
    pub api_key: Option<String>,
    /// Deadline for `wait_for_pending_update`.
    pub timeout: Duration,
    /// Sleep between two status polls.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientConfig {
    /// Create a config for the given host with default timings and no key.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the polling deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sleep between status polls.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Build a config from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_HOST`: search service URL (default: http://localhost:7700)
    /// - `SEARCH_API_KEY`: API key (default: none)
    pub fn from_env() -> Self {
        let host = env::var("SEARCH_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let api_key = env::var("SEARCH_API_KEY").ok();

        info!(
            host = %host,
            has_api_key = api_key.is_some(),
            "Loaded search client configuration"
        );

        Self {
            host,
            api_key,
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
