//! Search service client.
//!
//! This module provides the main entry point of the SDK. Application code
//! uses [`Client`] to manage indexes and to obtain [`Index`] handles for
//! document and search operations.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use crate::codec;
use crate::config::ClientConfig;
use crate::errors::Error;
use crate::http::HttpTransport;
use crate::index::Index;
use crate::interfaces::{Method, Transport};
use search_client_shared::IndexMetadata;

/// The main client for the search service.
///
/// Holds only immutable configuration and a shared transport; concurrent
/// callers may share one instance for independent operations.
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Client {
    /// Create a client with the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Client)` - A new client instance
    /// * `Err(Error::Connection)` - If the configured host URL is invalid
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;

        info!(host = %config.host, "Created search client");

        Ok(Self {
            transport: Arc::new(transport),
            config,
        })
    }

    /// Create a client over a custom transport.
    ///
    /// Used to inject mock transports in tests.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Get a handle bound to the given index uid.
    ///
    /// Cheap and purely local: no request is made and the index is not
    /// required to exist yet.
    pub fn index(&self, uid: impl Into<String>) -> Index {
        Index::new(
            uid.into(),
            Arc::clone(&self.transport),
            self.config.timeout,
            self.config.poll_interval,
        )
    }

    /// Create an index.
    ///
    /// # Arguments
    ///
    /// * `uid` - Unique identifier for the new index
    /// * `primary_key` - Attribute to use as the document primary key; when
    ///   `None` the service infers it from the first document batch
    pub async fn create_index(
        &self,
        uid: &str,
        primary_key: Option<&str>,
    ) -> Result<IndexMetadata, Error> {
        let mut body = serde_json::Map::new();
        body.insert("uid".to_string(), json!(uid));
        if let Some(primary_key) = primary_key {
            body.insert("primaryKey".to_string(), json!(primary_key));
        }

        let response = self
            .transport
            .request(Method::Post, "/indexes", Some(Value::Object(body)))
            .await?;

        info!(uid = %uid, "Created index");
        codec::decode(response)
    }

    /// Fetch metadata for one index.
    pub async fn get_index(&self, uid: &str) -> Result<IndexMetadata, Error> {
        let response = self
            .transport
            .request(Method::Get, &format!("/indexes/{}", uid), None)
            .await?;
        codec::decode(response)
    }

    /// List all indexes on the service.
    pub async fn list_indexes(&self) -> Result<Vec<IndexMetadata>, Error> {
        let response = self.transport.request(Method::Get, "/indexes", None).await?;
        codec::decode(response)
    }

    /// Delete an index and all of its documents.
    pub async fn delete_index(&self, uid: &str) -> Result<(), Error> {
        self.transport
            .request(Method::Delete, &format!("/indexes/{}", uid), None)
            .await?;

        info!(uid = %uid, "Deleted index");
        Ok(())
    }

    /// Check whether the search service is reachable and healthy.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The service answered the health endpoint
    /// * `Ok(false)` - The service answered with an error status
    /// * `Err(Error)` - The health check could not be executed at all
    pub async fn health(&self) -> Result<bool, Error> {
        match self.transport.request(Method::Get, "/health", None).await {
            Ok(_) => Ok(true),
            Err(Error::Api { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use serde_json::json;

    fn client_with(mock: MockTransport) -> Client {
        Client::with_transport(Arc::new(mock), ClientConfig::default())
    }

    #[tokio::test]
    async fn test_create_index_with_primary_key() {
        let mock = MockTransport::new();
        mock.push_ok(json!({ "uid": "movies", "primaryKey": "id" }));
        let requests = mock.requests();
        let client = client_with(mock);

        let meta = client.create_index("movies", Some("id")).await.unwrap();

        assert_eq!(meta.uid, "movies");
        assert_eq!(meta.primary_key.as_deref(), Some("id"));

        let recorded = requests.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, Method::Post);
        assert_eq!(recorded[0].path, "/indexes");
        assert_eq!(
            recorded[0].body,
            Some(json!({ "uid": "movies", "primaryKey": "id" }))
        );
    }

    #[tokio::test]
    async fn test_create_index_omits_unset_primary_key() {
        let mock = MockTransport::new();
        mock.push_ok(json!({ "uid": "movies" }));
        let requests = mock.requests();
        let client = client_with(mock);

        client.create_index("movies", None).await.unwrap();

        let recorded = requests.lock().unwrap();
        assert_eq!(recorded[0].body, Some(json!({ "uid": "movies" })));
    }

    #[tokio::test]
    async fn test_index_handle_makes_no_request() {
        let mock = MockTransport::new();
        let requests = mock.requests();
        let client = client_with(mock);

        let index = client.index("movies");

        assert_eq!(index.uid(), "movies");
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_indexes() {
        let mock = MockTransport::new();
        mock.push_ok(json!([
            { "uid": "movies", "primaryKey": "id" },
            { "uid": "books" }
        ]));
        let client = client_with(mock);

        let indexes = client.list_indexes().await.unwrap();

        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes[1].uid, "books");
        assert!(indexes[1].primary_key.is_none());
    }

    #[tokio::test]
    async fn test_delete_index_accepts_empty_body() {
        let mock = MockTransport::new();
        mock.push_ok(Value::Null);
        let requests = mock.requests();
        let client = client_with(mock);

        client.delete_index("movies").await.unwrap();

        let recorded = requests.lock().unwrap();
        assert_eq!(recorded[0].method, Method::Delete);
        assert_eq!(recorded[0].path, "/indexes/movies");
    }

    #[tokio::test]
    async fn test_health_maps_api_error_to_false() {
        let mock = MockTransport::new();
        mock.push_err(Error::api(503, "unavailable"));
        let client = client_with(mock);

        assert!(!client.health().await.unwrap());
    }

    #[tokio::test]
    async fn test_health_propagates_connection_error() {
        let mock = MockTransport::new();
        mock.push_err(Error::connection("connection refused"));
        let client = client_with(mock);

        assert!(matches!(
            client.health().await,
            Err(Error::Connection(_))
        ));
    }

    #[tokio::test]
    async fn test_api_error_carries_server_message() {
        let mock = MockTransport::new();
        mock.push_err(Error::api(400, "Index movies already exists"));
        let client = client_with(mock);

        let err = client.create_index("movies", None).await.unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Index movies already exists");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
