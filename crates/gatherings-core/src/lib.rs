//! # Gatherings Core Library
//!
//! Core business logic for Gatherings: deriving the lifecycle status of a
//! group's most recent event. An event is `active` until its end instant,
//! `inReview` for a configured number of hours afterwards, and `done` once
//! the review window has passed -- or immediately, if the group has no
//! event at all.
//!
//! ## Architecture
//!
//! - **Status calculator**: a pure function over an optional event and an
//!   explicitly injected "current instant" -- no clock access, no state
//! - **Last-event source**: the async lookup seam a backing store
//!   implements; resolves zero or one event per group
//! - **Status query**: the use case wiring the two together, one source
//!   call per invocation
//!
//! ## Key Components
//!
//! - [`EventStatus`]: the three-phase lifecycle tag
//! - [`status_at`]: the derivation function
//! - [`GroupEvent`]: a group's most recent event record
//! - [`LastEventSource`]: trait for event lookup backends
//! - [`LastEventStatusQuery`]: the caller-facing use case

pub mod error;
pub mod event;
pub mod query;
pub mod source;
pub mod status;

pub use error::{SourceError, ValidationError};
pub use event::GroupEvent;
pub use query::LastEventStatusQuery;
pub use source::LastEventSource;
pub use status::{status_at, EventStatus};
