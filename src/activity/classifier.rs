//! Human/automation classification of event actors.
//!
//! Which logins belong to automation is deployment policy, so the monitor
//! takes the classifier as a parameter. `BotRoster` covers the common case of
//! a fixed deny list plus GitHub's app account suffix; any
//! `Fn(&str) -> bool` works as well.

use std::collections::HashSet;

/// Whether an actor is a person or automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Human,
    Bot,
}

/// Decides whether a login belongs to a human.
pub trait ActorClassifier: Send + Sync {
    fn is_human(&self, login: &str) -> bool;
}

impl<F> ActorClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_human(&self, login: &str) -> bool {
        self(login)
    }
}

/// Classify an optional actor. A missing identity is never human.
pub fn classify<C: ActorClassifier + ?Sized>(classifier: &C, actor: Option<&str>) -> ActorKind {
    match actor {
        Some(login) if !login.trim().is_empty() && classifier.is_human(login) => ActorKind::Human,
        _ => ActorKind::Bot,
    }
}

/// Deny list of known automation accounts.
///
/// Logins compare case-insensitively, as on GitHub.
#[derive(Debug, Clone, Default)]
pub struct BotRoster {
    bots: HashSet<String>,
    suffix: Option<String>,
}

impl BotRoster {
    /// Create a roster from a list of bot logins
    pub fn new<I, S>(bots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            bots: bots.into_iter().map(|b| b.as_ref().to_lowercase()).collect(),
            suffix: None,
        }
    }

    /// Also treat every login ending in `suffix` (e.g. `[bot]`) as automation
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = if suffix.is_empty() {
            None
        } else {
            Some(suffix.to_lowercase())
        };
        self
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty() && self.suffix.is_none()
    }
}

impl ActorClassifier for BotRoster {
    fn is_human(&self, login: &str) -> bool {
        let login = login.to_lowercase();
        if self.bots.contains(&login) {
            return false;
        }
        match &self.suffix {
            Some(suffix) => !login.ends_with(suffix.as_str()),
            None => true,
        }
    }
}
