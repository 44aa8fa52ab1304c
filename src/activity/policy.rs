//! Notification policy for the inactivity check.
//!
//! A reminder is only due when nobody human touched the PR for a full
//! window, and it is capped so that a permanently stalled PR is not nagged
//! forever.

use chrono::Duration;

use crate::error::{Result, ReviewError};

/// Default window without human activity before a PR counts as stale.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;
/// Default number of events inside the window that stops further reminders.
pub const DEFAULT_MAX_COUNT: u32 = 5;

/// Window and cap governing when a reminder may be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPolicy {
    window: Duration,
    max_count: u32,
}

impl NotificationPolicy {
    /// Create a policy, rejecting an empty window or a zero cap.
    pub fn new(window: Duration, max_count: u32) -> Result<Self> {
        if window <= Duration::zero() {
            return Err(ReviewError::InvalidPolicy(format!(
                "window must be positive, got {}s",
                window.num_seconds()
            )));
        }
        if max_count == 0 {
            return Err(ReviewError::InvalidPolicy("max_count must be at least 1".to_string()));
        }
        Ok(Self { window, max_count })
    }

    /// Create a policy with a window expressed in whole days.
    pub fn days(days: i64, max_count: u32) -> Result<Self> {
        let window = Duration::try_days(days)
            .ok_or_else(|| ReviewError::InvalidPolicy(format!("window of {} days is out of range", days)))?;
        Self::new(window, max_count)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            window: Duration::days(DEFAULT_WINDOW_DAYS),
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}
