// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion, schema, and help specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let temp = TempDir::new().unwrap();
    let output = slo(temp.path()).args(["completion", shell]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("evaluate"), "completion should list subcommands");
}

#[test]
fn completion_invalid_shell_fails() {
    let temp = TempDir::new().unwrap();
    slo(temp.path())
        .args(["completion", "tcsh"])
        .assert()
        .failure();
}

#[yare::parameterized(
    evaluate = { "evaluate", "RepoJson" },
    summary = { "summary", "SummaryCounts" },
)]
fn schema_outputs_json_schema(command: &str, definition: &str) {
    let temp = TempDir::new().unwrap();
    let output = slo(temp.path()).args(["schema", command]).output().unwrap();
    let json = stdout_json(&output);
    assert!(json["$schema"].is_string());
    assert!(json["definitions"][definition].is_object());
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    slo(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    slo(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slo"));
}
