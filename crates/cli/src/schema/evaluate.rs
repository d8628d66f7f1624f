// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `slo evaluate` JSON output.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::{IssueJson, SummaryCounts};
use crate::display::Section;
use crate::report::RepoReport;

/// One repository's report.
#[derive(Debug, Clone, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoJson {
    /// Repository name with owner.
    pub repo: String,
    pub summary: RepoSummaryJson,
    /// Untriaged items, out-of-SLO first.
    pub triage: Vec<IssueJson>,
    pub urgent: Vec<IssueJson>,
    pub soon: Vec<IssueJson>,
    pub agenda: Vec<IssueJson>,
    pub needs_edits: Vec<IssueJson>,
    /// Items with no SLO.
    pub other: Vec<IssueJson>,
}

/// Bucket counts plus the retrieval time.
#[derive(Debug, Clone, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummaryJson {
    /// When the snapshot was retrieved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieved: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub counts: SummaryCounts,
}

/// JSON output structure for the evaluate command: one report per input
/// file, in argument order.
#[derive(Debug, Clone, Default, JsonSchema, Serialize)]
#[serde(transparent)]
pub struct EvaluateOutputJson(pub Vec<RepoJson>);

fn section_json(report: &RepoReport, section: Section) -> Vec<IssueJson> {
    let (violating, in_progress) = section.items(&report.groups);
    violating
        .iter()
        .map(|item| IssueJson::new(item, true))
        .chain(in_progress.iter().map(|item| IssueJson::new(item, false)))
        .collect()
}

impl From<&RepoReport> for RepoJson {
    fn from(report: &RepoReport) -> Self {
        RepoJson {
            repo: report.repo.clone(),
            summary: RepoSummaryJson {
                retrieved: report.retrieved,
                counts: report.groups.summary().into(),
            },
            triage: section_json(report, Section::Triage),
            urgent: section_json(report, Section::Urgent),
            soon: section_json(report, Section::Soon),
            agenda: section_json(report, Section::Agenda),
            needs_edits: section_json(report, Section::NeedsEdits),
            other: section_json(report, Section::Other),
        }
    }
}
