// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository snapshots: the items of one repository as retrieved at a
//! point in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::item::TrackedItem;
use crate::labels::has_slo_labeling_scheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSnapshot {
    /// Repository name with owner, e.g. `w3c/csswg-drafts`.
    pub repo: String,
    /// When the snapshot was retrieved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<DateTime<Utc>>,
    /// Every label defined in the repository.
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub items: Vec<TrackedItem>,
}

impl RepoSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this repository uses the priority labels.
    pub fn has_slo_labeling_scheme(&self) -> bool {
        has_slo_labeling_scheme(&self.labels)
    }

    /// Sorts every item's timeline by time. Returns the ids of items whose
    /// timelines were out of order.
    pub fn sort_timelines(&mut self) -> Vec<String> {
        self.items
            .iter_mut()
            .filter_map(|item| item.sort_timeline().then(|| item.id.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
