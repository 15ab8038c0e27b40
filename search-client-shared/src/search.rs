//! Search request and response models.
//!
//! [`SearchQuery`] captures every optional search parameter. Only fields that
//! were explicitly set are serialized; unset fields are omitted from the wire
//! payload entirely so the service applies its own defaults. This makes
//! `limit: Some(0)` (an explicit empty page) distinct from `limit: None`
//! (service default of 20).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Position of one query match inside an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    /// Byte offset of the match within the attribute value.
    pub start: usize,
    /// Byte length of the matched text.
    pub length: usize,
}

/// A search request against one index.
///
/// Build one with [`SearchQuery::new`] and the `with_*` setters:
///
/// ```
/// use search_client_shared::SearchQuery;
///
/// let query = SearchQuery::new("batman")
///     .with_limit(5)
///     .with_filters("release_date > 2000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Query text. `None` and the empty string both mean match-all
    /// (placeholder search).
    #[serde(rename = "q", default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Number of hits to skip. Service default: 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Maximum number of hits to return. Service default: 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Attributes to include in returned documents. Service default: all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_retrieve: Option<Vec<String>>,
    /// Attributes whose formatted value is cropped around the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_crop: Option<Vec<String>>,
    /// Crop window size in words. A no-op unless `attributes_to_crop` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_length: Option<usize>,
    /// Attributes whose formatted value wraps matches in `<em>` tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_highlight: Option<Vec<String>>,
    /// Boolean filter expression over document attributes. Passed through
    /// verbatim; syntax is evaluated and reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    /// Request match-position metadata (`_matchesInfo`) on each hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<bool>,
}

impl SearchQuery {
    /// Create a query with the given text and everything else unset.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Create a placeholder (match-all) query with no query text.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Set the number of hits to skip.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the maximum number of hits to return.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restrict returned documents to the given attributes.
    pub fn with_attributes_to_retrieve<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_retrieve = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Crop the formatted value of the given attributes around the match.
    pub fn with_attributes_to_crop<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_crop = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the crop window size in words.
    pub fn with_crop_length(mut self, crop_length: usize) -> Self {
        self.crop_length = Some(crop_length);
        self
    }

    /// Highlight matches in the formatted value of the given attributes.
    pub fn with_attributes_to_highlight<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_highlight = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the boolean filter expression.
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Request match-position metadata on each hit.
    pub fn with_matches(mut self, matches: bool) -> Self {
        self.matches = Some(matches);
        self
    }
}

/// One document returned by a search.
///
/// The document's own fields flatten into `document`; display post-processing
/// and match metadata, when requested, arrive alongside them under `_formatted`
/// and `_matchesInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct SearchHit<T> {
    /// The matched document.
    #[serde(flatten)]
    pub document: T,
    /// Cropped/highlighted variant of the document, present when the query
    /// asked for cropping or highlighting.
    #[serde(rename = "_formatted", default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<T>,
    /// Match positions per attribute, present when the query set
    /// `matches: true`.
    #[serde(rename = "_matchesInfo", default, skip_serializing_if = "Option::is_none")]
    pub matches_info: Option<HashMap<String, Vec<MatchRange>>>,
}

/// Response envelope for a search request.
///
/// `T` is the caller's document type; it defaults to [`serde_json::Value`]
/// for schemaless use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T = Value> {
    /// Matching documents, ordered by relevance. At most `limit` entries.
    pub hits: Vec<SearchHit<T>>,
    /// Number of hits skipped, echoed from the request.
    pub offset: usize,
    /// Page size applied by the service.
    pub limit: usize,
    /// Total number of matching documents, regardless of pagination.
    pub nb_hits: usize,
    /// Whether `nb_hits` is exact rather than an estimate.
    #[serde(default)]
    pub exhaustive_nb_hits: bool,
    /// Server-side processing time in milliseconds.
    #[serde(default)]
    pub processing_time_ms: u64,
    /// Query text echoed by the service.
    #[serde(default)]
    pub query: String,
}
