// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracked work items and the timeline events replayed against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels::LabelSet;

/// A state change recorded on an item's timeline.
///
/// Serialized with an internal `type` tag. Tags this version doesn't know
/// about deserialize to [`TimelineEvent::Unknown`] and are skipped during
/// replay, so newer producers don't break older consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimelineEvent {
    /// A label was added.
    #[serde(rename = "labeled")]
    LabelAdded { label: String, at: DateTime<Utc> },
    /// A label was removed.
    #[serde(rename = "unlabeled")]
    LabelRemoved { label: String, at: DateTime<Utc> },
    Closed { at: DateTime<Utc> },
    Reopened { at: DateTime<Utc> },
    ConvertedToDraft { at: DateTime<Utc> },
    ReadyForReview { at: DateTime<Utc> },
    /// Comment-like activity: a plain comment, a review, or the first comment
    /// of a review thread. `author` is absent for deleted accounts.
    #[serde(rename = "comment", alias = "review", alias = "reviewThread")]
    CommentAdded {
        at: DateTime<Utc>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl TimelineEvent {
    /// When the event happened, or `None` for unrecognized events.
    pub fn at(&self) -> Option<DateTime<Utc>> {
        match self {
            TimelineEvent::LabelAdded { at, .. }
            | TimelineEvent::LabelRemoved { at, .. }
            | TimelineEvent::Closed { at }
            | TimelineEvent::Reopened { at }
            | TimelineEvent::ConvertedToDraft { at }
            | TimelineEvent::ReadyForReview { at }
            | TimelineEvent::CommentAdded { at, .. } => Some(*at),
            TimelineEvent::Unknown => None,
        }
    }
}

/// An issue or change request as supplied by the retrieval side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItem {
    /// Stable identifier, usually the item's URL. Used in error reports.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Login of the item's author.
    #[serde(alias = "authorId")]
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_draft: bool,
    /// Labels currently applied.
    #[serde(default)]
    pub labels: LabelSet,
    /// State changes, ascending by time.
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

impl TrackedItem {
    /// Creates an undrafted item with no labels and an empty timeline.
    pub fn new(id: impl Into<String>, author: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        TrackedItem {
            id: id.into(),
            title: String::new(),
            url: None,
            author: author.into(),
            created_at,
            is_draft: false,
            labels: LabelSet::new(),
            timeline: Vec::new(),
        }
    }

    /// Returns true if the timeline is ascending by time.
    pub fn is_timeline_sorted(&self) -> bool {
        self.timeline.windows(2).all(|w| w[0].at() <= w[1].at())
    }

    /// Stable-sorts the timeline by time. Returns true if anything moved.
    ///
    /// Unrecognized events carry no time and sort first; replay ignores them.
    pub fn sort_timeline(&mut self) -> bool {
        if self.is_timeline_sorted() {
            return false;
        }
        self.timeline.sort_by_key(TimelineEvent::at);
        true
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
