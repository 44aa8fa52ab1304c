//! Weighted pool of candidate reviewers.

use std::collections::BTreeMap;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};

use crate::domain::AssigneeSet;
use crate::error::{Result, ReviewError};

/// Candidate reviewers with their ownership weight.
///
/// The running total always equals the sum of the entries. Entries are kept
/// in login order so that a seeded draw is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u64>", into = "BTreeMap<String, u64>")]
pub struct CandidatePool {
    weights: BTreeMap<String, u64>,
    total: u64,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from `(login, weight)` pairs. Later duplicates replace
    /// earlier ones.
    pub fn from_weights<I, S>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut pool = Self::new();
        for (login, weight) in weights {
            pool.insert(login.as_ref(), weight)?;
        }
        Ok(pool)
    }

    /// Insert or replace a candidate, keeping the total in step.
    ///
    /// Fails without changing the pool if the total would overflow.
    pub fn insert(&mut self, login: &str, weight: u64) -> Result<()> {
        let previous = self.weights.get(login).copied().unwrap_or(0);
        let total = (self.total - previous)
            .checked_add(weight)
            .ok_or_else(|| weight_overflow(login))?;
        self.weights.insert(login.to_string(), weight);
        self.total = total;
        Ok(())
    }

    /// Remove a candidate, returning its weight if it was present.
    pub fn remove(&mut self, login: &str) -> Option<u64> {
        let weight = self.weights.remove(login)?;
        self.total -= weight;
        Some(weight)
    }

    /// Copy of the pool without any of `assignees`.
    ///
    /// Unknown assignees are ignored.
    pub fn without(&self, assignees: &AssigneeSet) -> Self {
        let mut remaining = self.clone();
        if remaining.is_empty() || assignees.is_empty() {
            return remaining;
        }
        for login in assignees.iter() {
            if let Some(weight) = remaining.remove(login) {
                tracing::trace!(login, weight, "Excluded current assignee from candidates");
            }
        }
        remaining
    }

    pub fn weight(&self, login: &str) -> Option<u64> {
        self.weights.get(login).copied()
    }

    pub fn contains(&self, login: &str) -> bool {
        self.weights.contains_key(login)
    }

    /// Sum of all weights
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Whether a draw is possible at all
    pub fn is_drawable(&self) -> bool {
        self.total > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.weights.iter().map(|(login, w)| (login.as_str(), *w))
    }

    /// Draw one login with probability `weight / total`.
    ///
    /// Zero-weight entries are never drawn.
    ///
    /// # Panics
    ///
    /// Panics if the pool has no positive weight. Callers check
    /// [`is_drawable`](Self::is_drawable) first.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &str {
        assert!(self.total > 0, "draw from a candidate pool without positive weight");

        let index = match WeightedIndex::new(self.weights.values()) {
            Ok(index) => index,
            Err(e) => panic!("candidate weights rejected by sampler: {}", e),
        };
        match self.weights.keys().nth(index.sample(rng)) {
            Some(login) => login,
            None => unreachable!("sampled index outside the candidate pool"),
        }
    }
}

fn weight_overflow(login: &str) -> ReviewError {
    ReviewError::Snapshot(format!("candidate weights overflow at {}", login))
}

impl TryFrom<BTreeMap<String, u64>> for CandidatePool {
    type Error = ReviewError;

    fn try_from(weights: BTreeMap<String, u64>) -> Result<Self> {
        let mut total: u64 = 0;
        for (login, weight) in &weights {
            total = total.checked_add(*weight).ok_or_else(|| weight_overflow(login))?;
        }
        Ok(Self { weights, total })
    }
}

impl From<CandidatePool> for BTreeMap<String, u64> {
    fn from(pool: CandidatePool) -> Self {
        pool.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn abc() -> CandidatePool {
        CandidatePool::from_weights([("alice", 3), ("bob", 2), ("carol", 1)]).unwrap()
    }

    #[test]
    fn test_total_tracks_inserts_and_removals() {
        let mut pool = abc();
        assert_eq!(pool.total(), 6);

        pool.insert("bob", 5).unwrap();
        assert_eq!(pool.total(), 9);

        assert_eq!(pool.remove("alice"), Some(3));
        assert_eq!(pool.total(), 6);
        assert_eq!(pool.remove("alice"), None);
        assert_eq!(pool.total(), 6);
    }

    #[test]
    fn test_without_assignees() {
        let pool = abc();
        let assignees: AssigneeSet = ["alice"].into_iter().collect();

        let remaining = pool.without(&assignees);
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining.total(), 3);
        assert_eq!(remaining.weight("bob"), Some(2));
        assert_eq!(remaining.weight("carol"), Some(1));
        assert!(!remaining.contains("alice"));
    }

    #[test]
    fn test_without_leaves_original_untouched() {
        let pool = abc();
        let assignees: AssigneeSet = ["alice", "bob"].into_iter().collect();

        let _ = pool.without(&assignees);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.total(), 6);
    }

    #[test]
    fn test_without_ignores_unknown_assignees() {
        let pool = abc();
        let assignees: AssigneeSet = ["zed", "carol"].into_iter().collect();

        let remaining = pool.without(&assignees);
        assert_eq!(remaining.total(), 5);
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn test_without_total_matches_remaining_sum() {
        let pool = CandidatePool::from_weights([("a", 7), ("b", 0), ("c", 4), ("d", 9), ("e", 1)]).unwrap();
        let exclusions: [&[&str]; 4] = [&[], &["a"], &["b", "d"], &["a", "b", "c", "d", "e"]];

        for excluded in exclusions {
            let assignees: AssigneeSet = excluded.iter().copied().collect();
            let remaining = pool.without(&assignees);
            let expected: u64 = pool
                .iter()
                .filter(|(login, _)| !assignees.contains(login))
                .map(|(_, w)| w)
                .sum();
            assert_eq!(remaining.total(), expected);
        }
    }

    #[test]
    fn test_draw_never_picks_zero_weight() {
        let pool = CandidatePool::from_weights([("idle", 0), ("busy", 1), ("ghost", 0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            assert_eq!(pool.draw(&mut rng), "busy");
        }
    }

    #[test]
    fn test_draw_follows_weights() {
        let pool = CandidatePool::from_weights([("heavy", 9), ("light", 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(pool.draw(&mut rng)).or_insert(0) += 1;
        }

        let heavy = counts["heavy"];
        assert!((8_500..9_500).contains(&heavy), "heavy drawn {} times", heavy);
    }

    #[test]
    fn test_draw_equal_weights_reaches_everyone() {
        let pool = CandidatePool::from_weights([("a", 1), ("b", 1), ("c", 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..3_000 {
            *counts.entry(pool.draw(&mut rng)).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|c| (800..1_200).contains(c)), "{:?}", counts);
    }

    #[test]
    #[should_panic(expected = "without positive weight")]
    fn test_draw_empty_pool_panics() {
        let pool = CandidatePool::new();
        pool.draw(&mut StdRng::seed_from_u64(1));
    }

    #[test]
    #[should_panic(expected = "without positive weight")]
    fn test_draw_zero_total_panics() {
        let pool = CandidatePool::from_weights([("idle", 0)]).unwrap();
        pool.draw(&mut StdRng::seed_from_u64(1));
    }

    #[test]
    fn test_insert_overflow_leaves_pool_unchanged() {
        let mut pool = CandidatePool::from_weights([("a", u64::MAX)]).unwrap();

        let err = pool.insert("b", 1).unwrap_err();
        assert!(matches!(err, ReviewError::Snapshot(_)));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.total(), u64::MAX);

        pool.insert("a", 0).unwrap();
        pool.insert("b", u64::MAX).unwrap();
        assert_eq!(pool.total(), u64::MAX);
    }

    #[test]
    fn test_from_weights_rejects_overflow() {
        assert!(CandidatePool::from_weights([("a", u64::MAX), ("b", 2)]).is_err());
    }

    #[test]
    fn test_deserialize_rejects_overflowing_weights() {
        let err = serde_json::from_str::<CandidatePool>(r#"{"a": 18446744073709551615, "b": 1}"#).unwrap_err();
        assert!(err.to_string().contains("candidate weights overflow"), "{}", err);
    }

    #[test]
    fn test_deserialize_accepts_max_total() {
        let pool: CandidatePool = serde_json::from_str(r#"{"a": 18446744073709551614, "b": 1}"#).unwrap();
        assert_eq!(pool.total(), u64::MAX);
        assert!(pool.is_drawable());
    }

    #[test]
    fn test_deserialize_derives_total() {
        let pool: CandidatePool = serde_json::from_str(r#"{"alice": 3, "bob": 2}"#).unwrap();
        assert_eq!(pool.total(), 5);
        assert!(pool.is_drawable());
    }
}
