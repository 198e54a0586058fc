//! The event record a group's status is derived from.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A group's most recent event: when it ends and how long its review
/// window runs afterwards.
///
/// Owned by the backing store; this crate only reads it. Both fields are
/// always present -- a group either has a complete event or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEvent {
    /// When the event's active period ends.
    pub end_date: DateTime<Utc>,
    /// Length of the post-end review window, in whole hours. Non-negative.
    pub review_duration_hours: i64,
}

impl GroupEvent {
    /// Build an event, rejecting negative review durations.
    ///
    /// A zero-hour window is valid: the review phase then covers only the
    /// end instant itself.
    pub fn new(
        end_date: DateTime<Utc>,
        review_duration_hours: i64,
    ) -> Result<Self, ValidationError> {
        if review_duration_hours < 0 {
            return Err(ValidationError::NegativeReviewDuration {
                hours: review_duration_hours,
            });
        }
        Ok(Self {
            end_date,
            review_duration_hours,
        })
    }

    /// The instant the review window closes.
    pub fn review_deadline(&self) -> DateTime<Utc> {
        self.end_date + Duration::hours(self.review_duration_hours)
    }
}
