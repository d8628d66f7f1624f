// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SLO categories and the label rules that select them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::labels::{
    LabelSet, NEEDS_REPORTER_FEEDBACK, PRIORITY_EVENTUALLY, PRIORITY_SOON, PRIORITY_URGENT,
};

/// Which service-level objective an item is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SloCategory {
    /// Not yet prioritized. Applies to every item.
    Triage,
    /// Labeled `Priority: Urgent`.
    Urgent,
    /// Labeled `Priority: Soon`.
    #[serde(alias = "important")]
    Soon,
    /// Excluded from SLO tracking.
    None,
}

impl SloCategory {
    /// The categories that carry an SLO, in report order.
    pub const TRACKED: [SloCategory; 3] =
        [SloCategory::Triage, SloCategory::Urgent, SloCategory::Soon];

    pub fn as_str(&self) -> &'static str {
        match self {
            SloCategory::Triage => "triage",
            SloCategory::Urgent => "urgent",
            SloCategory::Soon => "soon",
            SloCategory::None => "none",
        }
    }

    /// Returns whether the SLO for `self` is in force given the active labels.
    ///
    /// Triage is always in force. An urgent label also satisfies the soon
    /// SLO, since urgent is the stricter commitment.
    pub fn applies_to(&self, active_labels: &LabelSet) -> bool {
        match self {
            SloCategory::Triage => true,
            SloCategory::Urgent => active_labels.contains(PRIORITY_URGENT),
            SloCategory::Soon => {
                active_labels.contains(PRIORITY_URGENT) || active_labels.contains(PRIORITY_SOON)
            }
            SloCategory::None => false,
        }
    }
}

impl fmt::Display for SloCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SloCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "triage" => Ok(SloCategory::Triage),
            "urgent" => Ok(SloCategory::Urgent),
            "soon" | "important" => Ok(SloCategory::Soon),
            "none" => Ok(SloCategory::None),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Derives an item's current category from its labels and draft state.
///
/// Drafts, items parked with `Priority: Eventually`, and items waiting on
/// reporter feedback have no SLO. Otherwise urgent beats soon, and anything
/// unprioritized still needs triage.
pub fn classify(labels: &LabelSet, is_draft: bool) -> SloCategory {
    if is_draft || labels.contains(PRIORITY_EVENTUALLY) || labels.contains(NEEDS_REPORTER_FEEDBACK)
    {
        return SloCategory::None;
    }
    if labels.contains(PRIORITY_URGENT) {
        return SloCategory::Urgent;
    }
    if labels.contains(PRIORITY_SOON) {
        return SloCategory::Soon;
    }
    SloCategory::Triage
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
