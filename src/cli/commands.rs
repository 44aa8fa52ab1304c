//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - evaluate: run the inactivity check on a PR snapshot
//! - config: print the effective configuration

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Revwatch - nudges stalled pull-request reviews
#[derive(Parser, Debug)]
#[command(name = "revwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a PR snapshot (JSON) and print what should be posted
    Evaluate {
        /// Path to the snapshot file
        snapshot: PathBuf,

        /// Evaluation time (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Seed for the reviewer draw
        #[arg(long)]
        seed: Option<u64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}
