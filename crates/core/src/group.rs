// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Partitioning evaluated items into reportable buckets.
//!
//! Every item lands in exactly one primary bucket: the in-progress or
//! violating half of its category, or `other` when it has no SLO. Each
//! ancillary timer independently places the item in that kind's pair too,
//! so one item can appear in several buckets.

use serde::Serialize;

use crate::ancillary::AncillaryKind;
use crate::category::SloCategory;
use crate::duration::SloDuration;
use crate::status::SloStatus;

/// Items within and past one SLO, most time used first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPair<T> {
    pub in_progress: Vec<T>,
    pub violating: Vec<T>,
}

impl<T> Default for BucketPair<T> {
    fn default() -> Self {
        BucketPair {
            in_progress: Vec::new(),
            violating: Vec::new(),
        }
    }
}

impl<T> BucketPair<T> {
    fn push(&mut self, item: T, within_slo: bool) {
        if within_slo {
            self.in_progress.push(item);
        } else {
            self.violating.push(item);
        }
    }

    fn sort_by_time_used(&mut self, key: impl Fn(&T) -> Option<SloDuration>) {
        // Stable sort keeps input order among equal times.
        self.in_progress.sort_by(|a, b| key(b).cmp(&key(a)));
        self.violating.sort_by(|a, b| key(b).cmp(&key(a)));
    }

    pub fn len(&self) -> usize {
        self.in_progress.len() + self.violating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A collection of items partitioned by category and violation status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SloGroups<T> {
    pub triage: BucketPair<T>,
    pub urgent: BucketPair<T>,
    pub soon: BucketPair<T>,
    pub agenda: BucketPair<T>,
    pub needs_edits: BucketPair<T>,
    pub other: Vec<T>,
}

impl<T> Default for SloGroups<T> {
    fn default() -> Self {
        SloGroups {
            triage: BucketPair::default(),
            urgent: BucketPair::default(),
            soon: BucketPair::default(),
            agenda: BucketPair::default(),
            needs_edits: BucketPair::default(),
            other: Vec::new(),
        }
    }
}

impl<T> SloGroups<T> {
    /// The bucket pair for a tracked category; `None` for untracked items,
    /// which go to [`SloGroups::other`].
    pub fn category(&self, category: SloCategory) -> Option<&BucketPair<T>> {
        match category {
            SloCategory::Triage => Some(&self.triage),
            SloCategory::Urgent => Some(&self.urgent),
            SloCategory::Soon => Some(&self.soon),
            SloCategory::None => None,
        }
    }

    fn category_mut(&mut self, category: SloCategory) -> Option<&mut BucketPair<T>> {
        match category {
            SloCategory::Triage => Some(&mut self.triage),
            SloCategory::Urgent => Some(&mut self.urgent),
            SloCategory::Soon => Some(&mut self.soon),
            SloCategory::None => None,
        }
    }

    pub fn ancillary(&self, kind: AncillaryKind) -> &BucketPair<T> {
        match kind {
            AncillaryKind::Agenda => &self.agenda,
            AncillaryKind::NeedsEdits => &self.needs_edits,
        }
    }

    fn ancillary_mut(&mut self, kind: AncillaryKind) -> &mut BucketPair<T> {
        match kind {
            AncillaryKind::Agenda => &mut self.agenda,
            AncillaryKind::NeedsEdits => &mut self.needs_edits,
        }
    }

    /// Every bucket with its published name, in report order.
    pub fn buckets(&self) -> [(&'static str, &[T]); 11] {
        [
            ("triageViolations", self.triage.violating.as_slice()),
            ("needTriage", self.triage.in_progress.as_slice()),
            ("urgentViolations", self.urgent.violating.as_slice()),
            ("urgent", self.urgent.in_progress.as_slice()),
            ("soonViolations", self.soon.violating.as_slice()),
            ("soon", self.soon.in_progress.as_slice()),
            ("agendaViolations", self.agenda.violating.as_slice()),
            ("agenda", self.agenda.in_progress.as_slice()),
            ("needsEditsViolations", self.needs_edits.violating.as_slice()),
            ("needsEdits", self.needs_edits.in_progress.as_slice()),
            ("other", self.other.as_slice()),
        ]
    }

    /// Bucket sizes for publishing.
    pub fn summary(&self) -> SloSummary {
        SloSummary {
            triage_violations: self.triage.violating.len(),
            urgent_violations: self.urgent.violating.len(),
            soon_violations: self.soon.violating.len(),
            agenda_violations: self.agenda.violating.len(),
            needs_edits_violations: self.needs_edits.violating.len(),
            need_triage: self.triage.in_progress.len(),
            urgent: self.urgent.in_progress.len(),
            soon: self.soon.in_progress.len(),
            agenda: self.agenda.in_progress.len(),
            needs_edits: self.needs_edits.in_progress.len(),
            other: self.other.len(),
        }
    }
}

/// Bucket counts for one collection, as published to reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SloSummary {
    pub triage_violations: usize,
    pub urgent_violations: usize,
    pub soon_violations: usize,
    pub agenda_violations: usize,
    pub needs_edits_violations: usize,
    pub need_triage: usize,
    pub urgent: usize,
    pub soon: usize,
    pub agenda: usize,
    pub needs_edits: usize,
    pub other: usize,
}

/// Partitions `items` into buckets and sorts each by time used, descending.
///
/// Primary buckets sort by the primary time used; ancillary buckets by that
/// ancillary timer's time used.
pub fn group<T, I>(items: I) -> SloGroups<T>
where
    T: AsRef<SloStatus> + Clone,
    I: IntoIterator<Item = T>,
{
    let mut groups = SloGroups::default();
    for item in items {
        let status = item.as_ref();
        for (kind, timer) in &status.ancillary {
            let within = timer.within_slo;
            groups.ancillary_mut(*kind).push(item.clone(), within);
        }
        let (category, within) = (status.category, status.within_slo);
        match groups.category_mut(category) {
            Some(pair) => pair.push(item, within),
            None => groups.other.push(item),
        }
    }

    for category in SloCategory::TRACKED {
        if let Some(pair) = groups.category_mut(category) {
            pair.sort_by_time_used(|t| Some(t.as_ref().time_used));
        }
    }
    groups
        .other
        .sort_by(|a, b| b.as_ref().time_used.cmp(&a.as_ref().time_used));
    for kind in AncillaryKind::ALL {
        groups
            .ancillary_mut(kind)
            .sort_by_time_used(|t| t.as_ref().ancillary(kind).map(|timer| timer.time_used));
    }
    groups
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
