//! Reqwest-backed transport.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::Error;
use crate::interfaces::{Method, Transport};

/// Credential header expected by the search service.
const API_KEY_HEADER: &str = "X-Meili-API-Key";

/// Upper bound on a single HTTP round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport implementation over reqwest.
///
/// Holds no mutable state; concurrent callers may share one instance.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Create a transport for the configured host.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpTransport)` - A new transport instance
    /// * `Err(Error::Connection)` - If the host URL is invalid or the HTTP
    ///   client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.host)
            .map_err(|e| Error::connection(format!("Invalid host URL '{}': {}", config.host, e)))?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.host.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = method.as_str(), url = %url, "Sending request");

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::connection(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::connection(e.to_string()))?;

        if !status.is_success() {
            // Surface the server's own message when the error payload parses.
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(text);
            error!(status = %status, message = %message, "Request failed");
            return Err(Error::api(status.as_u16(), message));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| Error::decode(format!("Invalid JSON in response body: {}", e)))
    }
}
