// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor configuration.
//!
//! Configuration is stored in `.slo/config.toml` and includes:
//! - `thresholds`: Maximum time allowed per category, as ISO-8601 durations
//! - `repos`: Per-repository overrides keyed by `owner/name`

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slo_core::SloThresholds;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".slo";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Monitor configuration stored in `.slo/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub thresholds: SloThresholds,
    pub repos: BTreeMap<String, RepoConfig>,
}

/// Settings for one repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// For repositories without the priority labels, treat any labeled item
    /// as triaged.
    pub any_label_triages: bool,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Loads configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Settings for `repo`, or the defaults if it has none.
    pub fn repo(&self, repo: &str) -> RepoConfig {
        self.repos.get(repo).copied().unwrap_or_default()
    }
}

/// Finds and loads the configuration.
///
/// An explicit path wins, then `SLO_CONFIG`, then the nearest
/// `.slo/config.toml` above the current directory. With none of these the
/// defaults apply.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }
    if let Some(path) = env::config_path() {
        return Config::load(&path);
    }
    let cwd = std::env::current_dir()?;
    match find_config_file_from(&cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config");
            Config::load(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Find `.slo/config.toml` by walking up from `start`.
pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
