//! Revwatch - stalled pull-request review detection
//!
//! Revwatch decides whether a PR review has gone quiet and, if so, proposes
//! a replacement reviewer drawn from the PR's ownership-weighted candidates.

pub mod activity;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod message;
pub mod selector;

pub use error::{Result, ReviewError};
