// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pause bookkeeping for the SLO clock.
//!
//! The clock runs iff no pause reason is active. Reasons overlap as a set,
//! so a second reason arriving while already paused doesn't stop the clock
//! twice, and clearing one of two reasons doesn't restart it.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::duration::SloDuration;

/// A condition that stops SLO time from accruing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseReason {
    /// The change request is a draft.
    Draft,
    /// Waiting for the reporter to respond.
    NeedsFeedback,
    /// The item is closed.
    Closed,
    /// No label currently puts the target SLO in force.
    NoApplicableLabel,
}

impl PauseReason {
    pub const ALL: [PauseReason; 4] = [
        PauseReason::Draft,
        PauseReason::NeedsFeedback,
        PauseReason::Closed,
        PauseReason::NoApplicableLabel,
    ];

    fn bit(self) -> u8 {
        match self {
            PauseReason::Draft => 1 << 0,
            PauseReason::NeedsFeedback => 1 << 1,
            PauseReason::Closed => 1 << 2,
            PauseReason::NoApplicableLabel => 1 << 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PauseReason::Draft => "draft",
            PauseReason::NeedsFeedback => "needs_feedback",
            PauseReason::Closed => "closed",
            PauseReason::NoApplicableLabel => "no_applicable_label",
        }
    }
}

impl fmt::Display for PauseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of currently active pause reasons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseSet(u8);

impl PauseSet {
    pub fn new() -> Self {
        PauseSet(0)
    }

    /// Adds `reason`. Returns false if it was already active.
    pub fn insert(&mut self, reason: PauseReason) -> bool {
        let was_set = self.contains(reason);
        self.0 |= reason.bit();
        !was_set
    }

    /// Removes `reason`. Returns false if it wasn't active.
    pub fn remove(&mut self, reason: PauseReason) -> bool {
        let was_set = self.contains(reason);
        self.0 &= !reason.bit();
        was_set
    }

    pub fn contains(&self, reason: PauseReason) -> bool {
        self.0 & reason.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = PauseReason> + '_ {
        PauseReason::ALL.into_iter().filter(|r| self.contains(*r))
    }
}

/// Accumulates running time across pause and unpause transitions.
///
/// Time accrues only over segments `[segment_start, at)` that began with the
/// pause set empty.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    accumulated: SloDuration,
    segment_start: DateTime<Utc>,
    paused: PauseSet,
}

impl Stopwatch {
    /// Starts running at `start` with no pause reasons.
    pub fn new(start: DateTime<Utc>) -> Self {
        Stopwatch {
            accumulated: SloDuration::zero(),
            segment_start: start,
            paused: PauseSet::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.paused.is_empty()
    }

    pub fn paused(&self) -> PauseSet {
        self.paused
    }

    pub fn accumulated(&self) -> SloDuration {
        self.accumulated
    }

    /// Activates `reason` at `at`, banking the open segment if the clock was
    /// running.
    pub fn pause(&mut self, reason: PauseReason, at: DateTime<Utc>) {
        if self.paused.is_empty() {
            self.bank(at);
        }
        self.paused.insert(reason);
    }

    /// Clears `reason` at `at`. The clock resumes from `at` only if this
    /// removed the last active reason.
    pub fn unpause(&mut self, reason: PauseReason, at: DateTime<Utc>) {
        if self.paused.remove(reason) && self.paused.is_empty() {
            self.segment_start = at;
        }
    }

    /// Discards everything accrued so far and opens a new segment at `at`.
    /// Active pause reasons are kept.
    pub fn restart(&mut self, at: DateTime<Utc>) {
        self.accumulated = SloDuration::zero();
        self.segment_start = at;
    }

    /// Closes the open segment at `now`, if running, and returns the total.
    pub fn finish(mut self, now: DateTime<Utc>) -> SloDuration {
        if self.paused.is_empty() {
            self.bank(now);
        }
        self.accumulated
    }

    fn bank(&mut self, until: DateTime<Utc>) {
        let segment = SloDuration::between(self.segment_start, until);
        if segment.is_positive() {
            self.accumulated += segment;
        }
    }
}

#[cfg(test)]
#[path = "pause_tests.rs"]
mod tests;
