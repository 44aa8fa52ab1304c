//! CLI module for revwatch - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for evaluating review
//! snapshots and inspecting the effective configuration.

pub mod commands;

pub use commands::Cli;
