//! Lifecycle status derivation.
//!
//! An event moves through three phases on the wall clock:
//!
//! ```text
//! ──────── end_date ──────── end_date + review window ────────>
//!  Active |      InReview                | Done
//! ```
//!
//! Both cutoffs belong to the earlier phase: at exactly `end_date` the
//! event is still active, and at exactly the review deadline it is still
//! in review. A group with no event is done.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::GroupEvent;

/// Lifecycle phase of a group's most recent event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventStatus {
    /// The event has not ended yet.
    Active,
    /// The event has ended; its review window is still open.
    InReview,
    /// The review window has passed, or the group has no event.
    Done,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Active => write!(f, "active"),
            EventStatus::InReview => write!(f, "inReview"),
            EventStatus::Done => write!(f, "done"),
        }
    }
}

/// Derive the status of `last_event` as seen at `now`.
///
/// Pure function -- the caller samples the clock. Checks run in order:
/// absence, then the active cutoff, then the review deadline.
pub fn status_at(last_event: Option<&GroupEvent>, now: DateTime<Utc>) -> EventStatus {
    let Some(event) = last_event else {
        return EventStatus::Done;
    };
    if now <= event.end_date {
        EventStatus::Active
    } else if now <= event.review_deadline() {
        EventStatus::InReview
    } else {
        EventStatus::Done
    }
}
