//! Per-PR evaluation of stalled reviews.
//!
//! The handler runs the cheap activity check first and only consults the
//! candidate pool once a PR is found inactive:
//! 1. skip anything that is not a PR or has no author
//! 2. build the timeline and ask the monitor whether the PR is active
//! 3. exclude the current assignees and draw a replacement
//! 4. compose the reminder and wrap it in the notifier's marker

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityMonitor, ActorClassifier, BotRoster};
use crate::domain::{AssigneeSet, Comment, EventTimeline};
use crate::error::{Result, ReviewError};
use crate::message::{DEFAULT_NOTIFIER, Notification, ReviewMessage, compose};
use crate::selector::{CandidatePool, ReviewerSelector};

/// Everything the host fetched about one PR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    pub number: u64,
    #[serde(default = "default_true")]
    pub is_pull_request: bool,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub review_comments: Vec<Comment>,
    #[serde(default)]
    pub assignees: AssigneeSet,
    /// Ownership-weighted candidates; the host may leave this out until the
    /// PR is known to be inactive
    #[serde(default)]
    pub candidates: Option<CandidatePool>,
}

fn default_true() -> bool {
    true
}

impl ReviewSnapshot {
    /// All comments of the PR as one timeline
    pub fn timeline(&self) -> EventTimeline {
        EventTimeline::new(self.created_at)
            .add_comments(&self.comments)
            .add_review_comments(&self.review_comments)
    }
}

/// Result of the activity and selection policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Decision {
    Active,
    Inactive { suggested: Option<String> },
}

/// Why a snapshot was not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotPullRequest,
    MissingAuthor,
}

/// What the host should do with a PR this cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Skipped { reason: SkipReason },
    Active,
    Nudge {
        decision: Decision,
        message: ReviewMessage,
        notification: Notification,
        /// Earlier reminders from this notifier found in the conversation
        prior_reminders: usize,
    },
}

impl Outcome {
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Outcome::Active => Some(Decision::Active),
            Outcome::Nudge { decision, .. } => Some(decision.clone()),
            Outcome::Skipped { .. } => None,
        }
    }

    /// Text to post, if any
    pub fn comment(&self) -> Option<String> {
        match self {
            Outcome::Nudge { notification, .. } => Some(notification.to_string()),
            _ => None,
        }
    }
}

/// Encourages PR authors to find a new reviewer once a review stalls.
#[derive(Debug, Clone)]
pub struct InactiveReviewHandler<C = BotRoster> {
    monitor: ActivityMonitor<C>,
    selector: ReviewerSelector,
    notifier: String,
}

impl<C: ActorClassifier> InactiveReviewHandler<C> {
    pub fn new(monitor: ActivityMonitor<C>) -> Self {
        Self {
            monitor,
            selector: ReviewerSelector::new(),
            notifier: DEFAULT_NOTIFIER.to_string(),
        }
    }

    /// Post reminders under a different name
    pub fn with_notifier(mut self, name: &str) -> Self {
        self.notifier = name.to_string();
        self
    }

    pub fn monitor(&self) -> &ActivityMonitor<C> {
        &self.monitor
    }

    pub fn notifier(&self) -> &str {
        &self.notifier
    }

    /// Evaluate now with the thread-local RNG.
    pub fn evaluate(&self, snapshot: &ReviewSnapshot) -> Result<Outcome> {
        self.evaluate_at(snapshot, Utc::now(), &mut rand::rng())
    }

    /// Evaluate at `now`, drawing the replacement from `rng`.
    pub fn evaluate_at<R: Rng>(&self, snapshot: &ReviewSnapshot, now: DateTime<Utc>, rng: &mut R) -> Result<Outcome> {
        if !snapshot.is_pull_request {
            return Ok(Outcome::Skipped {
                reason: SkipReason::NotPullRequest,
            });
        }
        if snapshot.author.as_deref().is_none_or(|a| a.trim().is_empty()) {
            return Ok(Outcome::Skipped {
                reason: SkipReason::MissingAuthor,
            });
        }

        let timeline = snapshot.timeline();
        let report = self.monitor.assess_at(&timeline, now);
        if report.is_active() {
            tracing::debug!(pr = snapshot.number, "PR is active, nothing to do");
            return Ok(Outcome::Active);
        }

        let candidates = snapshot
            .candidates
            .as_ref()
            .ok_or(ReviewError::MissingCandidates(snapshot.number))?;

        let suggested = self
            .selector
            .suggest_replacement_with(candidates, &snapshot.assignees, rng);
        let message = compose(&snapshot.assignees, suggested.as_deref());
        let notification = Notification::new(&self.notifier, message.to_string());

        let prior_reminders = snapshot
            .comments
            .iter()
            .filter_map(|c| c.body.as_deref())
            .filter(|body| Notification::is_marked(&self.notifier, body))
            .count();

        tracing::info!(
            pr = snapshot.number,
            idle_days = report.idle.num_days(),
            suggested = suggested.as_deref().unwrap_or("-"),
            prior_reminders,
            "PR review is inactive"
        );

        Ok(Outcome::Nudge {
            decision: Decision::Inactive { suggested },
            message,
            notification,
            prior_reminders,
        })
    }
}

impl Default for InactiveReviewHandler<BotRoster> {
    fn default() -> Self {
        Self::new(ActivityMonitor::default())
    }
}
