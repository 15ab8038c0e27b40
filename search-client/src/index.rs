//! Typed handle for one index.
//!
//! An [`Index`] composes the transport and codec to expose document
//! ingestion, update-status, and search operations against a single index
//! uid. Each method performs exactly one logical operation; nothing is
//! cached locally.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec;
use crate::errors::Error;
use crate::interfaces::{Method, Transport};
use crate::poller;
use search_client_shared::{SearchQuery, SearchResults, UpdateAck, UpdateStatus};

/// A handle bound to one index on the search service.
///
/// Obtained from [`crate::Client::index`]. Holds no mutable state; cloneable
/// across tasks.
#[derive(Clone)]
pub struct Index {
    uid: String,
    transport: Arc<dyn Transport>,
    timeout: Duration,
    poll_interval: Duration,
}

impl Index {
    pub(crate) fn new(
        uid: String,
        transport: Arc<dyn Transport>,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Self {
        Self {
            uid,
            transport,
            timeout,
            poll_interval,
        }
    }

    /// The uid this handle is bound to.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn documents_path(&self, primary_key: Option<&str>) -> String {
        match primary_key {
            Some(primary_key) => format!(
                "/indexes/{}/documents?primaryKey={}",
                self.uid,
                urlencoding::encode(primary_key)
            ),
            None => format!("/indexes/{}/documents", self.uid),
        }
    }

    /// Add or replace documents.
    ///
    /// Documents with a primary key already present in the index are
    /// replaced wholesale. The mutation is asynchronous: the returned update
    /// identifier can be passed to [`Index::wait_for_pending_update`].
    ///
    /// # Arguments
    ///
    /// * `documents` - The documents to add
    /// * `primary_key` - Attribute holding the primary key; only needed if
    ///   the index does not know its primary key yet
    pub async fn add_documents<T: Serialize>(
        &self,
        documents: &[T],
        primary_key: Option<&str>,
    ) -> Result<u64, Error> {
        let body = codec::encode(&documents)?;
        let response = self
            .transport
            .request(Method::Post, &self.documents_path(primary_key), Some(body))
            .await?;

        let ack: UpdateAck = codec::decode(response)?;
        debug!(uid = %self.uid, update_id = ack.update_id, "Documents accepted");
        Ok(ack.update_id)
    }

    /// Add or update documents.
    ///
    /// Unlike [`Index::add_documents`], existing documents are patched:
    /// attributes missing from the submitted document are kept.
    pub async fn update_documents<T: Serialize>(
        &self,
        documents: &[T],
        primary_key: Option<&str>,
    ) -> Result<u64, Error> {
        let body = codec::encode(&documents)?;
        let response = self
            .transport
            .request(Method::Put, &self.documents_path(primary_key), Some(body))
            .await?;

        let ack: UpdateAck = codec::decode(response)?;
        debug!(uid = %self.uid, update_id = ack.update_id, "Document updates accepted");
        Ok(ack.update_id)
    }

    /// Fetch one document by primary key.
    pub async fn get_document<T: DeserializeOwned>(&self, id: &str) -> Result<T, Error> {
        let path = format!(
            "/indexes/{}/documents/{}",
            self.uid,
            urlencoding::encode(id)
        );
        let response = self.transport.request(Method::Get, &path, None).await?;
        codec::decode(response)
    }

    /// Fetch documents in stored order.
    pub async fn get_documents<T: DeserializeOwned>(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<T>, Error> {
        let path = match limit {
            Some(limit) => format!("/indexes/{}/documents?limit={}", self.uid, limit),
            None => format!("/indexes/{}/documents", self.uid),
        };
        let response = self.transport.request(Method::Get, &path, None).await?;
        codec::decode(response)
    }

    /// Delete one document by primary key. Asynchronous, like all mutations.
    pub async fn delete_document(&self, id: &str) -> Result<u64, Error> {
        let path = format!(
            "/indexes/{}/documents/{}",
            self.uid,
            urlencoding::encode(id)
        );
        let response = self.transport.request(Method::Delete, &path, None).await?;

        let ack: UpdateAck = codec::decode(response)?;
        Ok(ack.update_id)
    }

    /// Delete all documents in the index.
    pub async fn delete_all_documents(&self) -> Result<u64, Error> {
        let response = self
            .transport
            .request(Method::Delete, &self.documents_path(None), None)
            .await?;

        let ack: UpdateAck = codec::decode(response)?;
        Ok(ack.update_id)
    }

    /// Fetch the status of one update.
    pub async fn get_update(&self, update_id: u64) -> Result<UpdateStatus, Error> {
        let path = format!("/indexes/{}/updates/{}", self.uid, update_id);
        let response = self.transport.request(Method::Get, &path, None).await?;
        codec::decode(response)
    }

    /// Fetch the status of every known update of this index.
    pub async fn get_updates(&self) -> Result<Vec<UpdateStatus>, Error> {
        let path = format!("/indexes/{}/updates", self.uid);
        let response = self.transport.request(Method::Get, &path, None).await?;
        codec::decode(response)
    }

    /// Block until the given update reaches a terminal state, using the
    /// client's configured timeout and poll interval.
    ///
    /// A failed update is returned as a regular [`UpdateStatus`] with its
    /// error detail attached; only exceeding the deadline is an error
    /// ([`Error::Timeout`]).
    pub async fn wait_for_pending_update(&self, update_id: u64) -> Result<UpdateStatus, Error> {
        self.wait_for_pending_update_with(update_id, self.timeout, self.poll_interval)
            .await
    }

    /// Like [`Index::wait_for_pending_update`] with explicit timings.
    pub async fn wait_for_pending_update_with(
        &self,
        update_id: u64,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<UpdateStatus, Error> {
        poller::wait_for_update(self, update_id, timeout, poll_interval).await
    }

    /// Run a search request. Only explicitly-set query fields go on the
    /// wire; everything else falls back to the service defaults.
    pub async fn search<T: DeserializeOwned>(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResults<T>, Error> {
        let body = codec::encode(query)?;
        let path = format!("/indexes/{}/search", self.uid);
        let response = self.transport.request(Method::Post, &path, Some(body)).await?;
        codec::decode(response)
    }

    /// Convenience bare-query search, equivalent to
    /// `search(&SearchQuery::new(query))` but issued over the GET endpoint.
    pub async fn search_query<T: DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<SearchResults<T>, Error> {
        let path = format!(
            "/indexes/{}/search?q={}",
            self.uid,
            urlencoding::encode(query)
        );
        let response = self.transport.request(Method::Get, &path, None).await?;
        codec::decode(response)
    }
}
