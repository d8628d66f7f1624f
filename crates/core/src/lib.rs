// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! slo-core: SLO time accounting for issue tracker items
//!
//! This crate replays an item's timeline to find how much time counts
//! against its service-level objective, classifies items into SLO
//! categories, and groups evaluated items into reportable buckets. It does no
//! I/O; callers supply timelines sorted by time.

pub mod ancillary;
pub mod category;
pub mod clock;
pub mod duration;
pub mod error;
pub mod group;
pub mod item;
pub mod labels;
pub mod pause;
pub mod snapshot;
pub mod status;

pub use ancillary::{ancillary_elapsed, AncillaryKind};
pub use category::{classify, SloCategory};
pub use clock::elapsed;
pub use duration::SloDuration;
pub use error::{Error, Result};
pub use group::{group, BucketPair, SloGroups, SloSummary};
pub use item::{TimelineEvent, TrackedItem};
pub use labels::{has_slo_labeling_scheme, LabelSet};
pub use pause::{PauseReason, PauseSet, Stopwatch};
pub use snapshot::RepoSnapshot;
pub use status::{compose, evaluate, evaluate_as, SloStatus, SloThresholds, TimerStatus};
