//! # Search Client
//!
//! Client SDK for the search service HTTP API: index management, document
//! ingestion, asynchronous update tracking, and search queries with
//! filtering, highlighting, and cropping.
//!
//! The heavy lifting (query parsing, ranking, tokenization) happens on the
//! service side. This crate builds the requests, waits for asynchronous
//! updates to land, and decodes the responses into typed models.
//!
//! ```no_run
//! use search_client::{Client, ClientConfig, SearchQuery};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), search_client::Error> {
//! let client = Client::new(ClientConfig::from_env())?;
//! let movies = client.index("movies");
//!
//! let update_id = movies
//!     .add_documents(&[json!({ "id": "155", "title": "The Dark Knight" })], Some("id"))
//!     .await?;
//! movies.wait_for_pending_update(update_id).await?;
//!
//! let results: search_client::SearchResults = movies
//!     .search(&SearchQuery::new("dark").with_limit(5))
//!     .await?;
//! println!("{} hits", results.nb_hits);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod index;
pub mod interfaces;

mod codec;
mod poller;

#[cfg(test)]
mod test_support;

pub use client::Client;
pub use config::ClientConfig;
pub use errors::Error;
pub use http::HttpTransport;
pub use index::Index;
pub use interfaces::{Method, Transport};

pub use search_client_shared::{
    IndexMetadata, MatchRange, SearchHit, SearchQuery, SearchResults, UpdateAck, UpdateState,
    UpdateStatus,
};
