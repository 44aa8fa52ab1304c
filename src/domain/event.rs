//! Timeline event types for review activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where on the PR an event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Comment on the PR conversation
    IssueComment,
    /// Comment attached to a line of the diff
    ReviewComment,
}

/// A comment as fetched by the host, before it is tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Login of the author, absent for deleted ("ghost") accounts
    #[serde(default)]
    pub author: Option<String>,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// Comment text
    #[serde(default)]
    pub body: Option<String>,
}

impl Comment {
    /// Create a comment by `author` at `created_at`
    pub fn new(author: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            author: Some(author.to_string()),
            created_at,
            body: None,
        }
    }

    /// Attach a body
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }
}

/// A timestamped action on a PR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// Identity of whoever acted, if known
    pub actor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub body: Option<String>,
}

impl Event {
    /// Tag a fetched comment with the kind of event it represents
    pub fn from_comment(kind: EventKind, comment: &Comment) -> Self {
        Self {
            kind,
            actor: comment.author.clone(),
            created_at: comment.created_at,
            body: comment.body.clone(),
        }
    }

    /// Create an issue comment event
    pub fn issue_comment(actor: &str, created_at: DateTime<Utc>) -> Self {
        Self::from_comment(EventKind::IssueComment, &Comment::new(actor, created_at))
    }

    /// Create a review comment event
    pub fn review_comment(actor: &str, created_at: DateTime<Utc>) -> Self {
        Self::from_comment(EventKind::ReviewComment, &Comment::new(actor, created_at))
    }

    /// Create an event with no known actor
    pub fn anonymous(kind: EventKind, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            actor: None,
            created_at,
            body: None,
        }
    }
}

/// All events of a PR plus the time it was opened.
///
/// Events are kept in the order they were added; consumers must not rely on
/// them being sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTimeline {
    pub created_at: DateTime<Utc>,
    pub events: Vec<Event>,
}

impl EventTimeline {
    /// Create an empty timeline for a PR opened at `created_at`
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            events: Vec::new(),
        }
    }

    /// Add conversation comments
    pub fn add_comments<'a>(mut self, comments: impl IntoIterator<Item = &'a Comment>) -> Self {
        self.events.extend(
            comments
                .into_iter()
                .map(|c| Event::from_comment(EventKind::IssueComment, c)),
        );
        self
    }

    /// Add diff review comments
    pub fn add_review_comments<'a>(mut self, comments: impl IntoIterator<Item = &'a Comment>) -> Self {
        self.events.extend(
            comments
                .into_iter()
                .map(|c| Event::from_comment(EventKind::ReviewComment, c)),
        );
        self
    }

    /// Append a single event
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
