// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timers for ancillary states tracked alongside the primary SLO.
//!
//! An ancillary state is marked by a single label. Its timer counts from the
//! most recent time that label was added, so an item that returns to the
//! agenda isn't late just because the previous visit took a while.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::duration::SloDuration;
use crate::error::{Error, Result};
use crate::item::{TimelineEvent, TrackedItem};
use crate::labels::{AGENDA, NEEDS_EDITS};

/// An ancillary state with its own marker label and threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AncillaryKind {
    /// Flagged for discussion at a recurring meeting (`Agenda+`).
    Agenda,
    /// Waiting on edits after review (`Needs Edits`).
    NeedsEdits,
}

impl AncillaryKind {
    pub const ALL: [AncillaryKind; 2] = [AncillaryKind::Agenda, AncillaryKind::NeedsEdits];

    /// The label whose presence puts an item in this state.
    pub fn label(&self) -> &'static str {
        match self {
            AncillaryKind::Agenda => AGENDA,
            AncillaryKind::NeedsEdits => NEEDS_EDITS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AncillaryKind::Agenda => "agenda",
            AncillaryKind::NeedsEdits => "needs_edits",
        }
    }
}

impl fmt::Display for AncillaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AncillaryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "agenda" => Ok(AncillaryKind::Agenda),
            "needs_edits" | "needs-edits" | "needsedits" => Ok(AncillaryKind::NeedsEdits),
            _ => Err(Error::InvalidAncillaryKind(s.to_string())),
        }
    }
}

/// Returns how long `item` has carried `label`, or `None` if it doesn't.
///
/// # Errors
///
/// Returns [`Error::MissingLabelEvent`] if the label is applied but the
/// timeline has no event adding it.
pub fn ancillary_elapsed(
    item: &TrackedItem,
    now: DateTime<Utc>,
    label: &str,
) -> Result<Option<SloDuration>> {
    if !item.labels.contains(label) {
        return Ok(None);
    }
    let wanted = label.to_lowercase();
    let added_at = item.timeline.iter().rev().find_map(|event| match event {
        TimelineEvent::LabelAdded { label, at } if label.to_lowercase() == wanted => Some(*at),
        _ => None,
    });
    match added_at {
        Some(at) => Ok(Some(SloDuration::between(at, now))),
        None => Err(Error::MissingLabelEvent {
            item: item.id.clone(),
            label: wanted,
        }),
    }
}

#[cfg(test)]
#[path = "ancillary_tests.rs"]
mod tests;
