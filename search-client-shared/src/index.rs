//! Index metadata returned by the index management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing one index on the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetadata {
    /// Unique identifier of the index. Immutable once created.
    pub uid: String,
    /// Attribute used as the document primary key, if the index has one.
    /// Indexes created implicitly infer it from the first document batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    /// When the index was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the index was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full() {
        let meta: IndexMetadata = serde_json::from_value(json!({
            "uid": "movies",
            "primaryKey": "id",
            "createdAt": "2020-05-30T03:27:57.462Z",
            "updatedAt": "2020-05-30T03:27:58.100Z"
        }))
        .unwrap();

        assert_eq!(meta.uid, "movies");
        assert_eq!(meta.primary_key.as_deref(), Some("id"));
        assert!(meta.created_at.is_some());
    }

    #[test]
    fn test_decode_without_primary_key() {
        // primaryKey is null until inferred; null and absent decode the same.
        let from_null: IndexMetadata =
            serde_json::from_value(json!({ "uid": "movies", "primaryKey": null })).unwrap();
        let from_absent: IndexMetadata =
            serde_json::from_value(json!({ "uid": "movies" })).unwrap();

        assert_eq!(from_null, from_absent);
        assert!(from_null.primary_key.is_none());
    }
}
