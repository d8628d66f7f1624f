// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! slomon - SLO reports for issue tracker snapshots.
//!
//! This crate provides the command-line layer of the `slo` tool on top of
//! [`slo_core`]: loading repository snapshots, resolving configuration, and
//! rendering evaluated items as text or JSON.
//!
//! # Main Components
//!
//! - [`Config`] - Thresholds and per-repository settings from `.slo/config.toml`
//! - [`report`] - Snapshot loading and per-repository evaluation
//! - [`Error`] - Error types for all operations
//!
//! # Evaluating a snapshot
//!
//! ```rust,ignore
//! use slomon::{config, report};
//!
//! let config = config::resolve(None)?;
//! let snapshot = report::load_snapshot(Path::new("repo.json"))?;
//! let now = snapshot.cached_at.unwrap_or_else(Utc::now);
//! let report = report::evaluate_snapshot(&snapshot, now, &config, None)?;
//! println!("{:?}", report.groups.summary());
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
mod schema;
pub mod timings;

pub mod config;
pub mod error;
pub mod report;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand, SnapshotArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Evaluate {
            input,
            category,
            output,
        } => commands::evaluate::run(&input, category.as_deref(), output),
        Command::Summary { input, output } => commands::summary::run(&input, output),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "slo", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
