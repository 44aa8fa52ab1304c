//! Activity monitoring for pull requests.
//!
//! This module provides:
//! - **NotificationPolicy**: window and reminder cap.
//! - **ActorClassifier**: pluggable human/automation predicate, with
//!   `BotRoster` as the configurable default.
//! - **ActivityMonitor**: decides whether a PR is still active.

mod classifier;
mod monitor;
mod policy;

pub use classifier::{ActorClassifier, ActorKind, BotRoster, classify};
pub use monitor::{ActivityMonitor, ActivityReport};
pub use policy::{DEFAULT_MAX_COUNT, DEFAULT_WINDOW_DAYS, NotificationPolicy};
