//! Update (asynchronous task) status types.
//!
//! Every mutating call against an index is accepted asynchronously: the
//! service answers with an update identifier and processes the mutation in
//! the background. These types model the acknowledgement envelope and the
//! status record observed while polling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing state of an update.
///
/// Updates move `Enqueued -> Processing -> {Processed, Failed}`. The two
/// final states are terminal; the service never moves an update out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateState {
    /// Accepted but not yet picked up by the service.
    Enqueued,
    /// Currently being applied.
    Processing,
    /// Applied successfully.
    Processed,
    /// Processing failed; see [`UpdateStatus::error`] for the reason.
    Failed,
}

impl UpdateState {
    /// Whether this state is terminal (the update will not change again).
    pub fn is_terminal(&self) -> bool {
        matches!(self, UpdateState::Processed | UpdateState::Failed)
    }
}

/// Acknowledgement returned by mutating document calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    /// Identifier of the accepted update, unique and monotonically
    /// increasing per index.
    pub update_id: u64,
}

/// Status record for one asynchronous update.
///
/// Returned by `GET /indexes/{uid}/updates/{updateId}`. A failed update is a
/// regular value here, not an error: the client surfaces it and lets the
/// caller inspect [`UpdateStatus::error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    /// Identifier of the update.
    pub update_id: u64,
    /// Current processing state.
    #[serde(rename = "status")]
    pub state: UpdateState,
    /// Error detail, set when `state` is [`UpdateState::Failed`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the service accepted the update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enqueued_at: Option<DateTime<Utc>>,
    /// When the service finished the update (terminal states only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    /// Processing duration in seconds, reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl UpdateStatus {
    /// Whether the update has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_enqueued() {
        let status: UpdateStatus = serde_json::from_value(json!({
            "status": "enqueued",
            "updateId": 3,
            "enqueuedAt": "2020-05-30T03:27:57.462Z"
        }))
        .unwrap();

        assert_eq!(status.update_id, 3);
        assert_eq!(status.state, UpdateState::Enqueued);
        assert!(status.error.is_none());
        assert!(status.processed_at.is_none());
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_decode_processed_with_unknown_fields() {
        // The service attaches fields this client does not model (e.g. the
        // update type). They must be tolerated.
        let status: UpdateStatus = serde_json::from_value(json!({
            "status": "processed",
            "updateId": 7,
            "type": { "name": "DocumentsAddition", "number": 19 },
            "duration": 0.076,
            "enqueuedAt": "2020-05-30T03:27:57.462Z",
            "processedAt": "2020-05-30T03:27:57.538Z"
        }))
        .unwrap();

        assert_eq!(status.state, UpdateState::Processed);
        assert!(status.is_terminal());
        assert_eq!(status.duration, Some(0.076));
    }

    #[test]
    fn test_decode_failed_keeps_error_detail() {
        let status: UpdateStatus = serde_json::from_value(json!({
            "status": "failed",
            "updateId": 4,
            "error": "document id is missing",
            "enqueuedAt": "2020-05-30T03:27:57.462Z",
            "processedAt": "2020-05-30T03:27:57.500Z"
        }))
        .unwrap();

        assert_eq!(status.state, UpdateState::Failed);
        assert!(status.is_terminal());
        assert_eq!(status.error.as_deref(), Some("document id is missing"));
    }

    #[test]
    fn test_decode_ack() {
        let ack: UpdateAck = serde_json::from_value(json!({ "updateId": 12 })).unwrap();
        assert_eq!(ack.update_id, 12);
    }

    #[test]
    fn test_state_rejects_unknown_value() {
        let result: Result<UpdateState, _> = serde_json::from_value(json!("done"));
        assert!(result.is_err());
    }
}
