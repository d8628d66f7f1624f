// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the slomon library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("item {item} has a '{label}' label but no timeline event adding it\n  hint: the snapshot's timeline for this item is incomplete; re-fetch it")]
    MissingLabelEvent { item: String, label: String },

    #[error("invalid duration: '{0}'\n  hint: use ISO-8601 form such as P7D, PT36H or P1DT12H")]
    InvalidDuration(String),

    #[error("invalid SLO category: '{0}'\n  hint: valid categories are: triage, urgent, soon, none")]
    InvalidCategory(String),

    #[error("invalid timestamp: {reason}\n  hint: use RFC 3339 form such as 2023-01-10T12:00:00Z")]
    InvalidTimestamp { reason: String },

    #[error("no input file specified")]
    NoInputFile,

    #[error("failed to read snapshot {}: {source}", path.display())]
    SnapshotRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {}: {source}", path.display())]
    SnapshotParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for slomon operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<slo_core::Error> for Error {
    fn from(e: slo_core::Error) -> Self {
        match e {
            slo_core::Error::MissingLabelEvent { item, label } => {
                Error::MissingLabelEvent { item, label }
            }
            slo_core::Error::InvalidDuration(s) => Error::InvalidDuration(s),
            slo_core::Error::InvalidCategory(s) => Error::InvalidCategory(s),
            slo_core::Error::InvalidAncillaryKind(s) => {
                Error::InvalidInput(format!("invalid ancillary kind: {}", s))
            }
            slo_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
