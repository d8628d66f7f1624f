// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Runs `slo` inside `dir` with no inherited config or log settings.
pub fn slo(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("slo");
    cmd.current_dir(dir)
        .env_remove("SLO_CONFIG")
        .env_remove("SLO_LOG")
        .env_remove("SLO_TIMINGS")
        .env("NO_COLOR", "1");
    cmd
}

/// Writes `content` to `name` under `dir` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A repository retrieved at 2023-01-10T12:00:00Z with one item in each
/// interesting state:
///
/// - 1: untriaged for 9.5 days (out of SLO)
/// - 2: untriaged for 1.5 days
/// - 3: urgent for 20.5 days (out of SLO)
/// - 4: soon for 39.5 days, on the agenda for 11 days
/// - 5: waiting for reporter feedback (no SLO)
/// - 6: draft change request (no SLO)
pub const SNAPSHOT: &str = r#"{
  "repo": "org/repo",
  "cachedAt": "2023-01-10T12:00:00Z",
  "labels": ["Priority: Urgent", "Priority: Soon", "Priority: Eventually",
             "Needs Reporter Feedback", "Agenda+", "Needs Edits"],
  "items": [
    {
      "id": "https://github.com/org/repo/issues/1",
      "url": "https://github.com/org/repo/issues/1",
      "title": "Crash on start",
      "author": "ann",
      "createdAt": "2023-01-01T00:00:00Z",
      "labels": []
    },
    {
      "id": "https://github.com/org/repo/issues/2",
      "url": "https://github.com/org/repo/issues/2",
      "title": "Typo",
      "author": "ben",
      "createdAt": "2023-01-09T00:00:00Z",
      "labels": []
    },
    {
      "id": "https://github.com/org/repo/issues/3",
      "url": "https://github.com/org/repo/issues/3",
      "title": "Layout bug",
      "author": "cat",
      "createdAt": "2022-12-20T00:00:00Z",
      "labels": ["Priority: Urgent"],
      "timeline": [
        {"type": "labeled", "label": "Priority: Urgent", "at": "2022-12-21T00:00:00Z"}
      ]
    },
    {
      "id": "https://github.com/org/repo/issues/4",
      "url": "https://github.com/org/repo/issues/4",
      "title": "Spec question",
      "author": "dan",
      "createdAt": "2022-12-01T00:00:00Z",
      "labels": ["Priority: Soon", "Agenda+"],
      "timeline": [
        {"type": "labeled", "label": "Agenda+", "at": "2022-12-30T12:00:00Z"},
        {"type": "labeled", "label": "Priority: Soon", "at": "2022-12-02T00:00:00Z"}
      ]
    },
    {
      "id": "https://github.com/org/repo/issues/5",
      "url": "https://github.com/org/repo/issues/5",
      "title": "Needs info",
      "author": "eve",
      "createdAt": "2023-01-02T00:00:00Z",
      "labels": ["Needs Reporter Feedback"],
      "timeline": [
        {"type": "labeled", "label": "Needs Reporter Feedback", "at": "2023-01-03T00:00:00Z"}
      ]
    },
    {
      "id": "https://github.com/org/repo/pull/6",
      "url": "https://github.com/org/repo/pull/6",
      "title": "Draft PR",
      "author": "fay",
      "createdAt": "2023-01-05T00:00:00Z",
      "isDraft": true,
      "labels": []
    }
  ]
}"#;

/// A repository that never adopted the priority labels.
pub const UNLABELED_SNAPSHOT: &str = r#"{
  "repo": "org/plain",
  "cachedAt": "2023-01-10T12:00:00Z",
  "labels": ["bug"],
  "items": [
    {
      "id": "plain-1",
      "title": "Labeled",
      "author": "ann",
      "createdAt": "2023-01-01T00:00:00Z",
      "labels": ["bug"],
      "timeline": [{"type": "labeled", "label": "bug", "at": "2023-01-02T00:00:00Z"}]
    },
    {
      "id": "plain-2",
      "title": "Unlabeled",
      "author": "ben",
      "createdAt": "2023-01-01T00:00:00Z",
      "labels": []
    }
  ]
}"#;

/// Parses stdout of a successful run as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
