// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-item SLO status: time used against each applicable threshold.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ancillary::{ancillary_elapsed, AncillaryKind};
use crate::category::{classify, SloCategory};
use crate::clock::elapsed;
use crate::duration::SloDuration;
use crate::error::Result;
use crate::item::TrackedItem;

/// Default time allowed to triage a new item.
pub const TRIAGE_SLO_DAYS: i64 = 7;
/// Default time allowed to resolve an urgent item.
pub const URGENT_SLO_DAYS: i64 = 14;
/// Default time allowed to resolve a soon item.
pub const SOON_SLO_DAYS: i64 = 91;
/// Default time an item may stay on the agenda.
pub const AGENDA_SLO_DAYS: i64 = 35;
/// Default time an item may wait for edits.
pub const NEEDS_EDITS_SLO_DAYS: i64 = 14;

/// Maximum allowed time per category and ancillary kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SloThresholds {
    pub triage: SloDuration,
    pub urgent: SloDuration,
    pub soon: SloDuration,
    pub agenda: SloDuration,
    pub needs_edits: SloDuration,
}

impl Default for SloThresholds {
    fn default() -> Self {
        SloThresholds {
            triage: SloDuration::days(TRIAGE_SLO_DAYS),
            urgent: SloDuration::days(URGENT_SLO_DAYS),
            soon: SloDuration::days(SOON_SLO_DAYS),
            agenda: SloDuration::days(AGENDA_SLO_DAYS),
            needs_edits: SloDuration::days(NEEDS_EDITS_SLO_DAYS),
        }
    }
}

impl SloThresholds {
    /// The threshold for a category, or `None` for untracked items.
    pub fn for_category(&self, category: SloCategory) -> Option<SloDuration> {
        match category {
            SloCategory::Triage => Some(self.triage),
            SloCategory::Urgent => Some(self.urgent),
            SloCategory::Soon => Some(self.soon),
            SloCategory::None => None,
        }
    }

    pub fn for_ancillary(&self, kind: AncillaryKind) -> SloDuration {
        match kind {
            AncillaryKind::Agenda => self.agenda,
            AncillaryKind::NeedsEdits => self.needs_edits,
        }
    }
}

/// Time used against one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatus {
    pub time_used: SloDuration,
    /// Positive while time remains; negative by the amount overdue.
    pub until_slo: SloDuration,
    pub within_slo: bool,
}

impl TimerStatus {
    pub fn new(time_used: SloDuration, threshold: SloDuration) -> Self {
        let until_slo = threshold - time_used;
        TimerStatus {
            time_used,
            until_slo,
            within_slo: until_slo.is_positive(),
        }
    }
}

/// The evaluated SLO state of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SloStatus {
    pub category: SloCategory,
    pub time_used: SloDuration,
    /// Absent for items with no SLO.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_slo: Option<SloDuration>,
    pub within_slo: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ancillary: BTreeMap<AncillaryKind, TimerStatus>,
}

impl SloStatus {
    /// True if the primary category is out of SLO.
    pub fn is_violating(&self) -> bool {
        !self.within_slo
    }

    pub fn ancillary(&self, kind: AncillaryKind) -> Option<&TimerStatus> {
        self.ancillary.get(&kind)
    }
}

impl AsRef<SloStatus> for SloStatus {
    fn as_ref(&self) -> &SloStatus {
        self
    }
}

/// Combines accumulated times with thresholds.
///
/// Each ancillary timer is judged against its own threshold, regardless of
/// how the primary category is doing.
pub fn compose(
    category: SloCategory,
    time_used: SloDuration,
    ancillary: &BTreeMap<AncillaryKind, SloDuration>,
    thresholds: &SloThresholds,
) -> SloStatus {
    let (until_slo, within_slo) = match thresholds.for_category(category) {
        Some(threshold) => {
            let timer = TimerStatus::new(time_used, threshold);
            (Some(timer.until_slo), timer.within_slo)
        }
        None => (None, true),
    };
    let ancillary = ancillary
        .iter()
        .map(|(kind, used)| (*kind, TimerStatus::new(*used, thresholds.for_ancillary(*kind))))
        .collect();
    SloStatus {
        category,
        time_used,
        until_slo,
        within_slo,
        ancillary,
    }
}

/// Evaluates `item` under the category its labels select.
pub fn evaluate(
    item: &TrackedItem,
    now: DateTime<Utc>,
    thresholds: &SloThresholds,
) -> Result<SloStatus> {
    evaluate_as(item, now, classify(&item.labels, item.is_draft), thresholds)
}

/// Evaluates `item` under an explicitly chosen category.
///
/// # Errors
///
/// Fails if an ancillary label is applied without a matching add event.
pub fn evaluate_as(
    item: &TrackedItem,
    now: DateTime<Utc>,
    category: SloCategory,
    thresholds: &SloThresholds,
) -> Result<SloStatus> {
    let time_used = elapsed(item, now, category);
    let mut ancillary = BTreeMap::new();
    for kind in AncillaryKind::ALL {
        if let Some(used) = ancillary_elapsed(item, now, kind.label())? {
            ancillary.insert(kind, used);
        }
    }
    Ok(compose(category, time_used, &ancillary, thresholds))
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
