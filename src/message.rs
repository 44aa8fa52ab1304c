//! Reminder messages for stalled reviews.
//!
//! Exactly one variant applies: a PR without assignees always gets
//! `Expedite`, even when a replacement was found; otherwise the presence of a
//! replacement picks `Reassign` over `Ping`.

use std::fmt;

use serde::Serialize;

use crate::domain::AssigneeSet;

/// Name under which reminders are posted
pub const DEFAULT_NOTIFIER: &str = "INACTIVE-REVIEWER";

const HEADER: &str =
    "Sorry it is taking a long time for @{reviewer} to review your PR. This person may be on vacation or otherwise occupied. ";
const EXPEDITE: &str = "To expedite a review, please ";

/// Which reminder to post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ReviewMessage {
    /// Nobody is assigned yet
    Expedite { suggested: Option<String> },
    /// Assigned reviewer exists but there is nobody else to ask
    Ping { assignee: String },
    /// Swap the assigned reviewer for `replacement`
    Reassign { assignee: String, replacement: String },
}

/// Pick the message variant for the given assignees and replacement.
pub fn compose(assignees: &AssigneeSet, replacement: Option<&str>) -> ReviewMessage {
    let Some(assignee) = assignees.first() else {
        return ReviewMessage::Expedite {
            suggested: replacement.map(str::to_string),
        };
    };

    match replacement {
        None => ReviewMessage::Ping {
            assignee: assignee.to_string(),
        },
        Some(replacement) => ReviewMessage::Reassign {
            assignee: assignee.to_string(),
            replacement: replacement.to_string(),
        },
    }
}

fn header(reviewer: &str) -> String {
    HEADER.replace("{reviewer}", reviewer)
}

impl fmt::Display for ReviewMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewMessage::Expedite { suggested: Some(login) } => {
                write!(f, "{}`/assign @{}`.", EXPEDITE, login)
            }
            ReviewMessage::Expedite { suggested: None } => write!(f, "{}assign a reviewer.", EXPEDITE),
            ReviewMessage::Ping { assignee } => {
                write!(f, "{}{}ping them.", header(assignee), EXPEDITE)
            }
            ReviewMessage::Reassign { assignee, replacement } => write!(
                f,
                "{}{}`/assign @{}` and consider `/unassign @{}`.",
                header(assignee),
                EXPEDITE,
                replacement,
                assignee
            ),
        }
    }
}

/// A message as posted under the notifier's name.
///
/// Renders as `[NAME] message`, which is how earlier reminders are told
/// apart from other comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub name: String,
    pub body: String,
}

impl Notification {
    pub fn new(name: &str, body: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            body: body.into(),
        }
    }

    /// Whether `comment` was posted by the notifier called `name`.
    pub fn is_marked(name: &str, comment: &str) -> bool {
        comment
            .trim_start()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_prefix(name))
            .is_some_and(|rest| rest.starts_with(']'))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.name, self.body)
    }
}
