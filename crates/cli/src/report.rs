// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading repository snapshots and evaluating them into SLO reports.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use slo_core::{
    classify, evaluate_as, group, RepoSnapshot, SloCategory, SloGroups, SloStatus, TrackedItem,
};
use tracing::{debug, info, warn};

use crate::config::{Config, RepoConfig};
use crate::error::{Error, Result};

/// Reads a snapshot file and puts every timeline in time order.
pub fn load_snapshot(path: &Path) -> Result<RepoSnapshot> {
    let content = fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut snapshot: RepoSnapshot =
        serde_json::from_str(&content).map_err(|source| Error::SnapshotParse {
            path: path.to_path_buf(),
            source,
        })?;
    for id in snapshot.sort_timelines() {
        debug!(repo = %snapshot.repo, item = %id, "reordered timeline");
    }
    Ok(snapshot)
}

/// An item together with its evaluated status.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedItem {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub author: String,
    pub labels: Vec<String>,
    pub status: SloStatus,
}

impl AsRef<SloStatus> for EvaluatedItem {
    fn as_ref(&self) -> &SloStatus {
        &self.status
    }
}

/// One repository's evaluated and grouped items.
#[derive(Debug, Clone)]
pub struct RepoReport {
    pub repo: String,
    /// When the snapshot was retrieved, if recorded.
    pub retrieved: Option<DateTime<Utc>>,
    pub uses_labels: bool,
    pub groups: SloGroups<EvaluatedItem>,
}

/// Picks the category an item is evaluated under.
///
/// A repository without the priority labels may opt into treating any
/// labeled item as triaged.
pub fn categorize(item: &TrackedItem, uses_labels: bool, repo: RepoConfig) -> SloCategory {
    if !uses_labels && repo.any_label_triages && !item.labels.is_empty() {
        return SloCategory::None;
    }
    classify(&item.labels, item.is_draft)
}

/// Evaluates every item of a snapshot at `now` and groups the results.
///
/// With `only` set, items whose primary category differs are left out.
pub fn evaluate_snapshot(
    snapshot: &RepoSnapshot,
    now: DateTime<Utc>,
    config: &Config,
    only: Option<SloCategory>,
) -> Result<RepoReport> {
    let uses_labels = snapshot.has_slo_labeling_scheme();
    let repo_config = config.repo(&snapshot.repo);
    info!(repo = %snapshot.repo, items = snapshot.items.len(), "evaluating repository");
    if !uses_labels {
        warn!(repo = %snapshot.repo, "repository has no priority labels");
    }

    let mut evaluated = Vec::with_capacity(snapshot.items.len());
    for item in &snapshot.items {
        let category = categorize(item, uses_labels, repo_config);
        if only.is_some_and(|c| c != category) {
            continue;
        }
        let status = evaluate_as(item, now, category, &config.thresholds)?;
        debug!(
            item = %item.id,
            category = %status.category,
            time_used = %status.time_used,
            within_slo = status.within_slo,
            "evaluated item"
        );
        evaluated.push(EvaluatedItem {
            id: item.id.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
            author: item.author.clone(),
            labels: item.labels.iter().map(str::to_string).collect(),
            status,
        });
    }

    Ok(RepoReport {
        repo: snapshot.repo.clone(),
        retrieved: snapshot.cached_at,
        uses_labels,
        groups: group(evaluated),
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
