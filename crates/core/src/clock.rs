// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The SLO clock: replays an item's timeline into time counted against a
//! target SLO.

use chrono::{DateTime, Utc};

use crate::category::SloCategory;
use crate::duration::SloDuration;
use crate::item::{TimelineEvent, TrackedItem};
use crate::labels::{is_needs_feedback, LabelSet};
use crate::pause::{PauseReason, Stopwatch};

/// Returns how much time since creation counts against `target`'s SLO.
///
/// Time stops while the item is a draft, closed, waiting on reporter
/// feedback, or lacks a label putting `target` in force. The timeline must be
/// ascending by time; unrecognized events are skipped. Items with no SLO
/// (`SloCategory::None`) use no time.
pub fn elapsed(item: &TrackedItem, now: DateTime<Utc>, target: SloCategory) -> SloDuration {
    if target == SloCategory::None {
        return SloDuration::zero();
    }

    let mut watch = Stopwatch::new(item.created_at);
    let mut active_labels = LabelSet::new();
    let mut draft_seen = false;

    if !target.applies_to(&active_labels) {
        watch.pause(PauseReason::NoApplicableLabel, item.created_at);
    }

    for event in &item.timeline {
        match event {
            TimelineEvent::ReadyForReview { at } => {
                // Becoming ready before any conversion to draft means the
                // item was opened as a draft, so nothing before this counts.
                if !draft_seen {
                    watch.restart(*at);
                    draft_seen = true;
                }
                watch.unpause(PauseReason::Draft, *at);
            }
            TimelineEvent::ConvertedToDraft { at } => {
                draft_seen = true;
                watch.pause(PauseReason::Draft, *at);
            }
            TimelineEvent::LabelAdded { label, at } => {
                active_labels.insert(label);
                if is_needs_feedback(label) {
                    watch.pause(PauseReason::NeedsFeedback, *at);
                }
                if target.applies_to(&active_labels) {
                    watch.unpause(PauseReason::NoApplicableLabel, *at);
                }
            }
            TimelineEvent::LabelRemoved { label, at } => {
                active_labels.remove(label);
                if is_needs_feedback(label) {
                    watch.unpause(PauseReason::NeedsFeedback, *at);
                }
                if !target.applies_to(&active_labels) {
                    watch.pause(PauseReason::NoApplicableLabel, *at);
                }
            }
            TimelineEvent::Closed { at } => watch.pause(PauseReason::Closed, *at),
            TimelineEvent::Reopened { at } => watch.unpause(PauseReason::Closed, *at),
            TimelineEvent::CommentAdded { at, author } => {
                if author.as_deref() != Some(item.author.as_str()) {
                    watch.unpause(PauseReason::NeedsFeedback, *at);
                }
            }
            TimelineEvent::Unknown => {}
        }
    }

    watch.finish(now)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
