// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary command: bucket counts per repository.

use super::{evaluation_time, load_inputs, Inputs};
use crate::cli::{OutputFormat, SnapshotArgs};
use crate::display::format_summary;
use crate::error::Result;
use crate::report::evaluate_snapshot;
use crate::schema::summary::SummaryOutputJson;

pub fn run(input: &SnapshotArgs, output: OutputFormat) -> Result<()> {
    let inputs = load_inputs(input)?;
    let summary = crate::time_phase!("summary::count", { summarize(&inputs)? });
    println!("{}", render(&summary, output)?);
    Ok(())
}

/// Bucket counts keyed by repository. A repository given twice keeps the
/// counts of its last snapshot.
pub fn summarize(inputs: &Inputs) -> Result<SummaryOutputJson> {
    let mut out = SummaryOutputJson::default();
    for snapshot in &inputs.snapshots {
        let now = evaluation_time(inputs.now, snapshot);
        let report = evaluate_snapshot(snapshot, now, &inputs.config, None)?;
        if out.0.contains_key(&report.repo) {
            tracing::warn!(repo = %report.repo, "repository given more than once");
        }
        out.0.insert(report.repo, report.groups.summary().into());
    }
    Ok(out)
}

pub fn render(summary: &SummaryOutputJson, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let sections: Vec<String> = summary
                .0
                .iter()
                .map(|(repo, counts)| format_summary(repo, counts))
                .collect();
            Ok(sections.join("\n\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
