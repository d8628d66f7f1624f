// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! reads snapshots.

use std::path::PathBuf;

use clap::Args;

/// Snapshot inputs and the evaluation instant.
#[derive(Args, Clone, Debug, Default)]
pub struct SnapshotArgs {
    /// Repository snapshot files (JSON)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Evaluate as of this instant (RFC 3339) instead of the snapshot's retrieval time
    #[arg(long, value_name = "TIME")]
    pub now: Option<String>,

    /// Config file to use instead of searching for .slo/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
