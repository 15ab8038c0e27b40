//! Client error taxonomy.
//!
//! Transport failures, API rejections, decode failures, and polling timeouts
//! are distinct kinds so callers can tell "service unreachable" apart from
//! "service slow" or "service said no". A failed update is NOT represented
//! here — `wait_for_pending_update` returns it as a regular status value.

use thiserror::Error;

/// Errors that can occur during search client operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Failed to reach the search service (connection refused, DNS, timeout
    /// of a single request).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-2xx status. Carries the server's own
    /// message when the error payload was parseable.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Server-provided message, or the raw body when not parseable.
        message: String,
    },

    /// A response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Polling exceeded its deadline without the update reaching a terminal
    /// state.
    #[error("Timed out after {elapsed_ms}ms waiting for update {update_id}")]
    Timeout {
        /// Identifier of the update that never completed.
        update_id: u64,
        /// Time spent polling before giving up, in milliseconds.
        elapsed_ms: u128,
    },
}

impl Error {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create an API error from a status code and server message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a polling timeout error.
    pub fn timeout(update_id: u64, elapsed_ms: u128) -> Self {
        Self::Timeout {
            update_id,
            elapsed_ms,
        }
    }
}
