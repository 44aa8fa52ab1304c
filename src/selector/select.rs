//! Replacement reviewer selection.
//!
//! The selector never touches the caller's pool: exclusion runs on a copy,
//! so concurrent evaluations sharing one pool cannot observe each other.

use rand::Rng;

use crate::domain::AssigneeSet;
use crate::selector::pool::CandidatePool;

/// Proposes a reviewer who is not already assigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewerSelector;

impl ReviewerSelector {
    pub fn new() -> Self {
        Self
    }

    /// Suggest a replacement using the thread-local RNG.
    pub fn suggest_replacement(&self, pool: &CandidatePool, assignees: &AssigneeSet) -> Option<String> {
        self.suggest_replacement_with(pool, assignees, &mut rand::rng())
    }

    /// Suggest a replacement drawing from `rng`.
    ///
    /// Returns `None` when nobody with positive weight is left once the
    /// current assignees are excluded.
    pub fn suggest_replacement_with<R: Rng>(
        &self,
        pool: &CandidatePool,
        assignees: &AssigneeSet,
        rng: &mut R,
    ) -> Option<String> {
        let remaining = pool.without(assignees);

        if !remaining.is_drawable() {
            tracing::debug!(
                candidates = pool.len(),
                assignees = assignees.len(),
                "No alternate reviewer available"
            );
            return None;
        }

        let pick = remaining.draw(rng).to_string();
        tracing::debug!(
            reviewer = %pick,
            remaining = remaining.len(),
            total_weight = remaining.total(),
            "Suggested replacement reviewer"
        );
        Some(pick)
    }
}
