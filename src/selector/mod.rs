//! Reviewer selection for stalled reviews.
//!
//! This module provides:
//! - **CandidatePool**: weighted candidate reviewers with a running total.
//! - **ReviewerSelector**: excludes current assignees and draws one
//!   replacement, weighted by ownership.

mod pool;
mod select;

pub use pool::CandidatePool;
pub use select::ReviewerSelector;
