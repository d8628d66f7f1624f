// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod evaluate;
pub mod schema;
pub mod summary;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use chrono::{DateTime, Utc};
use slo_core::RepoSnapshot;

use crate::cli::SnapshotArgs;
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::report::load_snapshot;

/// Parses the `--now` argument.
pub fn parse_now(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    value
        .map(|v| {
            DateTime::parse_from_rfc3339(v.trim())
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| Error::InvalidTimestamp {
                    reason: format!("'{}': {}", v, e),
                })
        })
        .transpose()
}

/// The instant a snapshot is evaluated at: `--now` if given, else when the
/// snapshot was retrieved, else the current time.
pub fn evaluation_time(explicit: Option<DateTime<Utc>>, snapshot: &RepoSnapshot) -> DateTime<Utc> {
    explicit.or(snapshot.cached_at).unwrap_or_else(Utc::now)
}

/// Everything a report command needs from its shared arguments.
pub struct Inputs {
    pub config: Config,
    pub now: Option<DateTime<Utc>>,
    pub snapshots: Vec<RepoSnapshot>,
}

/// Validates the shared arguments and loads config and snapshots.
pub fn load_inputs(args: &SnapshotArgs) -> Result<Inputs> {
    if args.files.is_empty() {
        return Err(Error::NoInputFile);
    }
    let now = parse_now(args.now.as_deref())?;
    let config = crate::time_phase!("config::resolve", { config::resolve(args.config.as_deref())? });
    let snapshots = crate::time_phase!("snapshot::load", {
        args.files
            .iter()
            .map(|path| load_snapshot(path))
            .collect::<Result<Vec<_>>>()?
    });
    Ok(Inputs {
        config,
        now,
        snapshots,
    })
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
