//! Error types for revwatch
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while evaluating a review
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Notification policy violates its invariants
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Inactive PR handed over without a candidate pool
    #[error("No candidate reviewers supplied for inactive PR #{0}")]
    MissingCandidates(u64),

    /// Snapshot could not be used as evaluation input
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for revwatch operations
pub type Result<T> = std::result::Result<T, ReviewError>;
