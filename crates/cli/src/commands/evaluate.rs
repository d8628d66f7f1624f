// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluate command: every item of every snapshot, listed by bucket.

use slo_core::SloCategory;

use super::{evaluation_time, load_inputs, Inputs};
use crate::cli::{OutputFormat, SnapshotArgs};
use crate::colors;
use crate::display::format_report;
use crate::error::Result;
use crate::report::{evaluate_snapshot, RepoReport};
use crate::schema::evaluate::{EvaluateOutputJson, RepoJson};

pub fn run(input: &SnapshotArgs, category: Option<&str>, output: OutputFormat) -> Result<()> {
    let only = category.map(str::parse::<SloCategory>).transpose()?;
    let inputs = load_inputs(input)?;
    let reports = crate::time_phase!("evaluate::reports", { build_reports(&inputs, only)? });
    println!("{}", render(&reports, output, colors::should_colorize())?);
    Ok(())
}

/// Evaluates each loaded snapshot, in input order.
pub fn build_reports(inputs: &Inputs, only: Option<SloCategory>) -> Result<Vec<RepoReport>> {
    inputs
        .snapshots
        .iter()
        .map(|snapshot| {
            let now = evaluation_time(inputs.now, snapshot);
            evaluate_snapshot(snapshot, now, &inputs.config, only)
        })
        .collect()
}

pub fn render(reports: &[RepoReport], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| format_report(r, color))
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => {
            let json = EvaluateOutputJson(reports.iter().map(RepoJson::from).collect());
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
