// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `slo summary` specs: bucket counts per repository.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn json_counts_keyed_by_repository() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);
    write_file(temp.path(), "plain.json", UNLABELED_SNAPSHOT);

    let output = slo(temp.path())
        .args(["summary", "repo.json", "plain.json", "-o", "json"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    let repos: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(repos, vec!["org/plain", "org/repo"]);

    let repo = &json["org/repo"];
    assert_eq!(repo["triageViolations"], 1);
    assert_eq!(repo["urgentViolations"], 1);
    assert_eq!(repo["soonViolations"], 0);
    assert_eq!(repo["agendaViolations"], 0);
    assert_eq!(repo["needsEditsViolations"], 0);
    assert_eq!(repo["needTriage"], 1);
    assert_eq!(repo["urgent"], 0);
    assert_eq!(repo["soon"], 1);
    assert_eq!(repo["agenda"], 1);
    assert_eq!(repo["needsEdits"], 0);
    assert_eq!(repo["other"], 2);

    // Without the priority labels every item falls back to triage.
    let plain = &json["org/plain"];
    assert_eq!(plain["triageViolations"], 2);
    assert_eq!(plain["other"], 0);
}

#[test]
fn text_counts() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    let output = slo(temp.path())
        .args(["summary", "repo.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "\
org/repo
  triage violations:      1
  need triage:            1
  urgent violations:      1
  urgent:                 0
  soon violations:        0
  soon:                   1
  agenda violations:      0
  agenda:                 1
  needs edits violations: 0
  needs edits:            0
  other:                  2
";
    similar_asserts::assert_eq!(stdout, expected);
}

#[test]
fn now_shifts_violations() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    let output = slo(temp.path())
        .args(["summary", "repo.json", "--now", "2023-03-15T00:00:00Z", "-o", "json"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let repo = &json["org/repo"];
    assert_eq!(repo["triageViolations"], 2);
    assert_eq!(repo["needTriage"], 0);
    assert_eq!(repo["agendaViolations"], 1);
}

#[test]
fn summary_rejects_category_flag() {
    let temp = TempDir::new().unwrap();
    slo(temp.path())
        .args(["summary", "repo.json", "--category", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--category"));
}

#[test]
fn summary_without_files_fails() {
    let temp = TempDir::new().unwrap();
    slo(temp.path())
        .arg("summary")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: no input file specified"));
}
