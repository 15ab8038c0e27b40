//! Update-status polling loop.
//!
//! Repeatedly fetches the status of one update until it reaches a terminal
//! state or the deadline elapses. The loop sleeps between polls (never
//! busy-loops) and retries only the status check, never the original
//! mutating operation. The caller-supplied deadline is the only
//! cancellation mechanism.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::errors::Error;
use crate::index::Index;
use search_client_shared::UpdateStatus;

/// Poll until the update is terminal or the deadline elapses.
///
/// The final sleep is clamped to the remaining budget, so the timeout fires
/// at the configured deadline rather than one interval late. A `Failed`
/// status is a regular return value; its error detail is for the caller to
/// interpret.
pub(crate) async fn wait_for_update(
    index: &Index,
    update_id: u64,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<UpdateStatus, Error> {
    let start = Instant::now();
    let deadline = start + timeout;

    loop {
        let status = index.get_update(update_id).await?;
        if status.is_terminal() {
            debug!(
                uid = %index.uid(),
                update_id,
                state = ?status.state,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Update reached terminal state"
            );
            return Ok(status);
        }

        let now = Instant::now();
        if now >= deadline {
            warn!(uid = %index.uid(), update_id, "Gave up waiting for update");
            return Err(Error::timeout(update_id, start.elapsed().as_millis()));
        }

        tokio::time::sleep(poll_interval.min(deadline - now)).await;
    }
}
