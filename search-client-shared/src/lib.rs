//! # Search Client Shared
//!
//! Wire types exchanged with the search service: index metadata, update
//! (asynchronous task) statuses, and the search request/response models.
//!
//! These types carry no I/O. The `search-client` crate composes them with a
//! transport to build the actual SDK surface.

pub mod index;
pub mod search;
pub mod task;

pub use index::IndexMetadata;
pub use search::{MatchRange, SearchHit, SearchQuery, SearchResults};
pub use task::{UpdateAck, UpdateState, UpdateStatus};
