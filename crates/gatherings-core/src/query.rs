//! Status query use case.

use chrono::Utc;

use crate::error::SourceError;
use crate::source::LastEventSource;
use crate::status::{status_at, EventStatus};

/// Resolves the lifecycle status of a group's most recent event.
///
/// Stateless between calls: each `execute` performs exactly one source
/// lookup and samples the clock once. Concurrent calls need no
/// coordination.
pub struct LastEventStatusQuery<S> {
    source: S,
}

impl<S: LastEventSource> LastEventStatusQuery<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Look up the group's last event and derive its status as of now.
    ///
    /// A source failure is returned as-is -- no retry, no translation.
    pub async fn execute(&self, group_id: &str) -> Result<EventStatus, SourceError> {
        let last_event = self.source.load_last_event(group_id).await?;
        let status = status_at(last_event.as_ref(), Utc::now());
        tracing::debug!(group_id, %status, "resolved last-event status");
        Ok(status)
    }
}
