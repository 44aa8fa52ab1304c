//! Reviewers currently assigned to a PR.

use serde::{Deserialize, Serialize};

/// Logins assigned to the PR, in the order the host reported them.
///
/// Order matters: messages always address the first assignee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssigneeSet(Vec<String>);

impl AssigneeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The assignee addressed by reminder messages
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, login: &str) -> bool {
        self.0.iter().any(|a| a == login)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AssigneeSet {
    /// Duplicates are dropped, first occurrence wins.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut logins: Vec<String> = Vec::new();
        for login in iter {
            let login = login.into();
            if !logins.contains(&login) {
                logins.push(login);
            }
        }
        Self(logins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_follows_input_order() {
        let assignees: AssigneeSet = ["carol", "alice"].into_iter().collect();
        assert_eq!(assignees.first(), Some("carol"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let assignees: AssigneeSet = ["alice", "bob", "alice"].into_iter().collect();
        assert_eq!(assignees.len(), 2);
        assert_eq!(assignees.iter().collect::<Vec<_>>(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_empty_set() {
        let assignees = AssigneeSet::new();
        assert!(assignees.is_empty());
        assert!(assignees.first().is_none());
        assert!(!assignees.contains("alice"));
    }

    #[test]
    fn test_deserializes_from_plain_list() {
        let assignees: AssigneeSet = serde_json::from_str(r#"["alice", "bob"]"#).unwrap();
        assert!(assignees.contains("bob"));
        assert_eq!(assignees.first(), Some("alice"));
    }
}
