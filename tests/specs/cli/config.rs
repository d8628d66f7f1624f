// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration specs: threshold overrides, config discovery, and the
//! per-repository triage heuristic.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

fn summary(cmd: &mut assert_cmd::Command, repo: &str) -> serde_json::Value {
    let output = cmd.output().unwrap();
    stdout_json(&output)[repo].clone()
}

#[test]
fn config_found_by_walking_up() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".slo/config.toml", "[thresholds]\ntriage = \"P14D\"\n");
    let nested = temp.path().join("reports").join("2023");
    write_file(&nested, "repo.json", SNAPSHOT);

    let counts = summary(
        slo(&nested).args(["summary", "repo.json", "-o", "json"]),
        "org/repo",
    );
    assert_eq!(counts["triageViolations"], 0);
    assert_eq!(counts["needTriage"], 2);
}

#[test]
fn explicit_config_flag() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);
    write_file(temp.path(), "strict.toml", "[thresholds]\nsoon = \"P30D\"\nagenda = \"P7D\"\n");

    let counts = summary(
        slo(temp.path()).args(["summary", "repo.json", "--config", "strict.toml", "-o", "json"]),
        "org/repo",
    );
    assert_eq!(counts["soonViolations"], 1);
    assert_eq!(counts["agendaViolations"], 1);
}

#[test]
fn config_from_environment() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);
    let path = write_file(temp.path(), "env.toml", "[thresholds]\nurgent = \"P30D\"\n");

    let counts = summary(
        slo(temp.path())
            .env("SLO_CONFIG", &path)
            .args(["summary", "repo.json", "-o", "json"]),
        "org/repo",
    );
    assert_eq!(counts["urgentViolations"], 0);
    assert_eq!(counts["urgent"], 1);
}

#[test]
fn any_label_triages_for_repositories_without_scheme() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "plain.json", UNLABELED_SNAPSHOT);
    write_file(
        temp.path(),
        ".slo/config.toml",
        "[repos.\"org/plain\"]\nany_label_triages = true\n",
    );

    let counts = summary(
        slo(temp.path()).args(["summary", "plain.json", "-o", "json"]),
        "org/plain",
    );
    assert_eq!(counts["other"], 1);
    assert_eq!(counts["triageViolations"], 1);
}

#[yare::parameterized(
    calendar_unit = { "[thresholds]\ntriage = \"P1M\"\n" },
    unknown_threshold = { "[thresholds]\nlater = \"P1D\"\n" },
    unknown_table = { "[surprise]\n" },
    not_toml = { "thresholds = [" },
)]
fn invalid_config_fails(content: &str) {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);
    write_file(temp.path(), ".slo/config.toml", content);

    slo(temp.path())
        .args(["summary", "repo.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    slo(temp.path())
        .args(["summary", "repo.json", "--config", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}
