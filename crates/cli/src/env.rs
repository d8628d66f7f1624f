// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `SLO_TIMINGS` is set (any value).
pub fn slo_timings() -> bool {
    std::env::var(vars::SLO_TIMINGS).is_ok()
}

/// Returns the `SLO_LOG` filter directive, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::SLO_LOG).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `SLO_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::SLO_CONFIG).ok().map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
