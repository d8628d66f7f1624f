// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::SnapshotArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "slo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Track how long issues and pull requests spend against their service-level objectives")]
#[command(
    long_about = "Track how long issues and pull requests spend against their service-level objectives.\n\n\
    Reads repository snapshots, replays each item's timeline to find the time that counts \
    against its SLO, and reports items by bucket."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate items and list them by SLO bucket
    #[command(after_help = colors::examples("\
Examples:
  slo evaluate repo.json                    List every bucket
  slo evaluate repo.json -o json            Per-repository JSON report
  slo evaluate a.json b.json -c urgent      Only urgent items
  slo evaluate repo.json --now 2023-01-10T12:00:00Z
                                            Evaluate as of a fixed instant"))]
    Evaluate {
        #[command(flatten)]
        input: SnapshotArgs,

        /// Only report items in this category (triage, urgent, soon, none)
        #[arg(long, short)]
        category: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Count items per SLO bucket
    #[command(after_help = colors::examples("\
Examples:
  slo summary repo.json                     Counts for one repository
  slo summary *.json -o json                Counts keyed by repository"))]
    Summary {
        #[command(flatten)]
        input: SnapshotArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for commands with JSON output
    ///
    /// Use these schemas to validate JSON output or generate type definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  slo schema evaluate    Output schema for 'slo evaluate -o json'
  slo schema summary     Output schema for 'slo summary -o json'")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'slo evaluate' JSON output
    Evaluate,
    /// Output JSON Schema for 'slo summary' JSON output
    Summary,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
