// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label names the SLO rules recognize, and a case-insensitive label set.
//!
//! Trackers differ in how they capitalize these labels (`Priority: Urgent`
//! vs `priority: urgent`), so every comparison goes through the lowercase
//! form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const PRIORITY_URGENT: &str = "priority: urgent";
pub const PRIORITY_SOON: &str = "priority: soon";
pub const PRIORITY_EVENTUALLY: &str = "priority: eventually";
pub const NEEDS_REPORTER_FEEDBACK: &str = "needs reporter feedback";
pub const AGENDA: &str = "agenda+";
pub const NEEDS_EDITS: &str = "needs edits";

/// Returns true if `label` is the feedback-request label.
pub fn is_needs_feedback(label: &str) -> bool {
    label.to_lowercase() == NEEDS_REPORTER_FEEDBACK
}

/// Returns whether a repository has adopted the priority labeling scheme.
///
/// Repositories adopt different subsets of the recognized labels, so only the
/// smallest subset that shows the repository isn't relying on a triage
/// heuristic is checked: the presence of `Priority: Eventually`.
pub fn has_slo_labeling_scheme<I, S>(repo_labels: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    repo_labels
        .into_iter()
        .any(|label| label.as_ref().to_lowercase() == PRIORITY_EVENTUALLY)
}

/// A set of label names, stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    pub fn new() -> Self {
        LabelSet(BTreeSet::new())
    }

    /// Adds a label. Returns false if it was already present.
    pub fn insert(&mut self, label: &str) -> bool {
        self.0.insert(label.to_lowercase())
    }

    /// Removes a label. Returns false if it was absent.
    pub fn remove(&mut self, label: &str) -> bool {
        self.0.remove(&label.to_lowercase())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(&label.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LabelSet(iter.into_iter().map(|s| s.as_ref().to_lowercase()).collect())
    }
}

impl From<Vec<String>> for LabelSet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<LabelSet> for Vec<String> {
    fn from(labels: LabelSet) -> Self {
        labels.0.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
