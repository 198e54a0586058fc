//! Lookup seam for a group's most recent event.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::event::GroupEvent;

/// Every event lookup backend implements this trait.
///
/// The backend owns the data (a remote store, a cache, a fixture); this
/// crate only asks it one question. Failures are returned as the backend
/// produced them and reach the caller of the status query unmodified.
#[async_trait]
pub trait LastEventSource: Send + Sync {
    /// Resolve the most recent event for `group_id`, or `None` if the
    /// group has never had one. `group_id` is opaque to this crate and is
    /// passed through untouched.
    async fn load_last_event(&self, group_id: &str) -> Result<Option<GroupEvent>, SourceError>;
}
