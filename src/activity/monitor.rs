//! Inactivity detection over a PR's event timeline.
//!
//! Two values are derived independently from the same timeline:
//! - the most recent *human* activity (automation never resets the clock)
//! - the number of *all* events inside the trailing window, which includes
//!   earlier reminders and enforces the cap

use chrono::{DateTime, Duration, Utc};

use crate::activity::classifier::{ActorClassifier, ActorKind, BotRoster, classify};
use crate::activity::policy::NotificationPolicy;
use crate::domain::EventTimeline;

/// Everything the monitor derived for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityReport {
    /// Most recent human event, or the PR creation time
    pub last_human_activity: DateTime<Utc>,
    /// Time since `last_human_activity`
    pub idle: Duration,
    /// Events of any actor inside the trailing window
    pub recent_events: usize,
    pub recently_touched: bool,
    pub cap_reached: bool,
}

impl ActivityReport {
    /// No reminder is due
    pub fn is_active(&self) -> bool {
        self.recently_touched || self.cap_reached
    }
}

/// Decides whether a PR still sees review activity.
#[derive(Debug, Clone)]
pub struct ActivityMonitor<C = BotRoster> {
    policy: NotificationPolicy,
    classifier: C,
}

impl<C: ActorClassifier> ActivityMonitor<C> {
    pub fn new(policy: NotificationPolicy, classifier: C) -> Self {
        Self { policy, classifier }
    }

    pub fn policy(&self) -> &NotificationPolicy {
        &self.policy
    }

    /// Timestamp of the latest human event, falling back to PR creation.
    ///
    /// Independent of event order.
    pub fn last_human_activity(&self, timeline: &EventTimeline) -> DateTime<Utc> {
        timeline
            .events
            .iter()
            .filter(|e| classify(&self.classifier, e.actor.as_deref()) == ActorKind::Human)
            .map(|e| e.created_at)
            .max()
            .unwrap_or(timeline.created_at)
    }

    /// Number of events, human or not, no older than the window at `now`.
    pub fn recent_event_count(&self, timeline: &EventTimeline, now: DateTime<Utc>) -> usize {
        timeline
            .events
            .iter()
            .filter(|e| now.signed_duration_since(e.created_at) <= self.policy.window())
            .count()
    }

    /// Derive the full report at evaluation time `now`.
    pub fn assess_at(&self, timeline: &EventTimeline, now: DateTime<Utc>) -> ActivityReport {
        let last_human_activity = self.last_human_activity(timeline);
        let idle = now.signed_duration_since(last_human_activity);
        let recent_events = self.recent_event_count(timeline, now);

        let report = ActivityReport {
            last_human_activity,
            idle,
            recent_events,
            recently_touched: idle <= self.policy.window(),
            cap_reached: recent_events >= self.policy.max_count() as usize,
        };

        tracing::debug!(
            last_human = %report.last_human_activity,
            idle_hours = report.idle.num_hours(),
            recent_events = report.recent_events,
            cap_reached = report.cap_reached,
            "Assessed review activity"
        );

        report
    }

    /// Whether the PR is active at `now`.
    pub fn is_active_at(&self, timeline: &EventTimeline, now: DateTime<Utc>) -> bool {
        self.assess_at(timeline, now).is_active()
    }

    /// Whether the PR is active right now.
    pub fn is_active(&self, timeline: &EventTimeline) -> bool {
        self.is_active_at(timeline, Utc::now())
    }
}

impl Default for ActivityMonitor<BotRoster> {
    fn default() -> Self {
        Self::new(NotificationPolicy::default(), BotRoster::default())
    }
}
