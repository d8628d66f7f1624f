// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for slo-core operations.

use thiserror::Error;

/// All possible errors that can occur in slo-core operations.
///
/// The evaluation functions are total over well-formed input; the only
/// failure during evaluation is [`Error::MissingLabelEvent`], which points at
/// a defect in the supplied timeline rather than anything retryable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("item {item} has a '{label}' label but no timeline event adding it\n  hint: the timeline must include an add event for every active label")]
    MissingLabelEvent { item: String, label: String },

    #[error("invalid duration: '{0}'\n  hint: use ISO-8601 form such as P7D, PT36H or P1DT12H")]
    InvalidDuration(String),

    #[error("invalid SLO category: '{0}'\n  hint: valid categories are: triage, urgent, soon, none")]
    InvalidCategory(String),

    #[error("invalid ancillary kind: '{0}'\n  hint: valid kinds are: agenda, needs_edits")]
    InvalidAncillaryKind(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for slo-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
