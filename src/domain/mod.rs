//! Domain types for revwatch
//!
//! This module contains the input snapshots the host hands over:
//! - Event / EventTimeline: comment history of a PR
//! - Comment: a fetched comment before it is tagged
//! - AssigneeSet: reviewers currently assigned

pub mod assignees;
pub mod event;

pub use assignees::AssigneeSet;
pub use event::{Comment, Event, EventKind, EventTimeline};
