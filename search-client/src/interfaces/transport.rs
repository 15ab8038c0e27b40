//! Transport trait definition.
//!
//! This module defines the abstract interface for one HTTP round trip against
//! the search service, allowing the client and index handles to be tested
//! against mock implementations.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Error;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Abstract interface for issuing requests against the search service.
///
/// One call performs exactly one network round trip: no retries, no caching.
/// Retry policy belongs to callers (notably the update poller).
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request and return the response body as raw JSON.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path relative to the configured host, including any query
    ///   string (e.g. `/indexes/movies/search?q=batman`)
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The decoded response body; `Value::Null` for empty
    ///   bodies (e.g. 204 responses)
    /// * `Err(Error::Connection)` - If the service could not be reached
    /// * `Err(Error::Api)` - If the service answered with a non-2xx status;
    ///   the server's error message is carried, never swallowed
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error>;
}
