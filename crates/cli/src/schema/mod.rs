// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These are separate from the core types so that JSON field names and
//! documentation can follow the published report format. Both commands
//! serialize these types directly; `slo schema` derives JSON Schema
//! definitions from them via schemars.

use schemars::JsonSchema;
use serde::Serialize;
use slo_core::{AncillaryKind, SloSummary};

use crate::report::EvaluatedItem;

pub mod evaluate;
pub mod summary;

/// JSON representation of one evaluated item.
#[derive(Debug, Clone, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueJson {
    /// Stable item identifier.
    pub id: String,
    /// Link to the item, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub title: String,
    pub author: String,
    /// Labels currently applied, lowercased.
    pub labels: Vec<String>,
    /// SLO category the item was evaluated under.
    pub which_slo: String,
    /// Time counted against the SLO (ISO-8601 duration).
    pub slo_time_used: String,
    /// Time left before the SLO is exceeded; negative once overdue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_slo: Option<String>,
    /// True if the bucket this item is listed in is out of SLO.
    pub out_of_slo: bool,
    /// Time on the agenda, if the item is on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_agenda_for: Option<String>,
    /// Time waiting for edits, if the item needs them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needed_edits_for: Option<String>,
}

impl IssueJson {
    /// Create a new IssueJson from an evaluated item.
    pub fn new(item: &EvaluatedItem, out_of_slo: bool) -> Self {
        let status = &item.status;
        let timer = |kind| status.ancillary(kind).map(|t| t.time_used.to_string());
        IssueJson {
            id: item.id.clone(),
            url: item.url.clone(),
            title: item.title.clone(),
            author: item.author.clone(),
            labels: item.labels.clone(),
            which_slo: status.category.to_string(),
            slo_time_used: status.time_used.to_string(),
            until_slo: status.until_slo.map(|d| d.to_string()),
            out_of_slo,
            on_agenda_for: timer(AncillaryKind::Agenda),
            needed_edits_for: timer(AncillaryKind::NeedsEdits),
        }
    }
}

/// Bucket counts for one repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    pub triage_violations: usize,
    pub urgent_violations: usize,
    pub soon_violations: usize,
    pub agenda_violations: usize,
    pub needs_edits_violations: usize,
    /// Untriaged items still within their SLO.
    pub need_triage: usize,
    pub urgent: usize,
    pub soon: usize,
    pub agenda: usize,
    pub needs_edits: usize,
    /// Items with no SLO.
    pub other: usize,
}

impl From<SloSummary> for SummaryCounts {
    fn from(s: SloSummary) -> Self {
        SummaryCounts {
            triage_violations: s.triage_violations,
            urgent_violations: s.urgent_violations,
            soon_violations: s.soon_violations,
            agenda_violations: s.agenda_violations,
            needs_edits_violations: s.needs_edits_violations,
            need_triage: s.need_triage,
            urgent: s.urgent,
            soon: s.soon,
            agenda: s.agenda,
            needs_edits: s.needs_edits,
            other: s.other,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
