// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `slo evaluate` specs: bucket listings as text and JSON.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

fn evaluate_json(temp: &TempDir, extra: &[&str]) -> serde_json::Value {
    write_file(temp.path(), "repo.json", SNAPSHOT);
    let output = slo(temp.path())
        .args(["evaluate", "repo.json", "-o", "json"])
        .args(extra)
        .output()
        .unwrap();
    stdout_json(&output)
}

// =============================================================================
// Text output
// =============================================================================

#[test]
fn text_lists_buckets_with_rounded_ages() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    slo(temp.path())
        .args(["evaluate", "repo.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "org/repo (retrieved 2023-01-10 12:00)",
        ))
        .stdout(predicate::str::contains(
            "1 untriaged issues outside their SLO\n2 untriaged issues",
        ))
        .stdout(predicate::str::contains(
            "  - Crash on start (https://github.com/org/repo/issues/1): out of SLO for 3 days",
        ))
        .stdout(predicate::str::contains(
            "  - Typo (https://github.com/org/repo/issues/2): on maintainers' plate for 2 days",
        ))
        .stdout(predicate::str::contains(
            "  - Layout bug (https://github.com/org/repo/issues/3): out of SLO for 0.9 weeks",
        ))
        .stdout(predicate::str::contains("1 soon-priority issues\n"))
        .stdout(predicate::str::contains(
            "  - Spec question (https://github.com/org/repo/issues/4): on maintainers' plate for 1.3 months",
        ))
        .stdout(predicate::str::contains("1 issues on the agenda\n"))
        .stdout(predicate::str::contains(
            "  - Spec question (https://github.com/org/repo/issues/4): on maintainers' plate for 1.6 weeks",
        ))
        .stdout(predicate::str::contains("2 other issues"));
}

#[test]
fn text_omits_empty_sections() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    slo(temp.path())
        .args(["evaluate", "repo.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending edits").not());
}

#[test]
fn category_filter_limits_items() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    slo(temp.path())
        .args(["evaluate", "repo.json", "--category", "urgent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout bug"))
        .stdout(predicate::str::contains("Crash on start").not())
        .stdout(predicate::str::contains("other issues").not());
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn json_is_one_report_per_file() {
    let temp = TempDir::new().unwrap();
    let json = evaluate_json(&temp, &[]);

    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    let repo = &reports[0];
    assert_eq!(repo["repo"], "org/repo");
    assert_eq!(repo["summary"]["retrieved"], "2023-01-10T12:00:00Z");
}

#[test]
fn json_summary_counts() {
    let temp = TempDir::new().unwrap();
    let json = evaluate_json(&temp, &[]);
    let summary = &json[0]["summary"];

    let expected = [
        ("triageViolations", 1),
        ("needTriage", 1),
        ("urgentViolations", 1),
        ("urgent", 0),
        ("soonViolations", 0),
        ("soon", 1),
        ("agendaViolations", 0),
        ("agenda", 1),
        ("needsEditsViolations", 0),
        ("needsEdits", 0),
        ("other", 2),
    ];
    for (field, count) in expected {
        assert_eq!(summary[field], count, "field {field}");
    }
}

#[test]
fn json_items_carry_durations_and_flags() {
    let temp = TempDir::new().unwrap();
    let json = evaluate_json(&temp, &[]);
    let repo = &json[0];

    let triage = repo["triage"].as_array().unwrap();
    assert_eq!(triage[0]["title"], "Crash on start");
    assert_eq!(triage[0]["sloTimeUsed"], "P9DT12H");
    assert_eq!(triage[0]["untilSlo"], "-P2DT12H");
    assert_eq!(triage[0]["outOfSlo"], true);
    assert_eq!(triage[1]["title"], "Typo");
    assert_eq!(triage[1]["outOfSlo"], false);

    let urgent = &repo["urgent"][0];
    assert_eq!(urgent["whichSlo"], "urgent");
    assert_eq!(urgent["sloTimeUsed"], "P20DT12H");
    assert_eq!(urgent["untilSlo"], "-P6DT12H");

    let soon = &repo["soon"][0];
    assert_eq!(soon["sloTimeUsed"], "P39DT12H");
    assert_eq!(soon["onAgendaFor"], "P11D");
    assert_eq!(repo["agenda"][0]["title"], "Spec question");

    let other: Vec<_> = repo["other"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["whichSlo"].as_str().unwrap())
        .collect();
    assert_eq!(other, vec!["none", "none"]);
}

#[test]
fn now_overrides_retrieval_time() {
    let temp = TempDir::new().unwrap();
    let json = evaluate_json(&temp, &["--now", "2023-01-05T00:00:00Z"]);
    let summary = &json[0]["summary"];

    // Item 1 is 4 days old; item 2 does not exist yet and has used nothing.
    assert_eq!(summary["triageViolations"], 0);
    assert_eq!(summary["needTriage"], 2);
    assert_eq!(json[0]["agenda"][0]["onAgendaFor"], "P5DT12H");
}

#[test]
fn many_files_keep_argument_order() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.json", SNAPSHOT);
    write_file(temp.path(), "b.json", UNLABELED_SNAPSHOT);

    let output = slo(temp.path())
        .args(["evaluate", "b.json", "a.json", "-o", "json"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json[0]["repo"], "org/plain");
    assert_eq!(json[1]["repo"], "org/repo");
}

#[test]
fn out_of_order_timelines_are_sorted() {
    let temp = TempDir::new().unwrap();
    // Item 4 lists its agenda label before its priority label.
    let json = evaluate_json(&temp, &[]);
    assert_eq!(json[0]["soon"][0]["sloTimeUsed"], "P39DT12H");
}

// =============================================================================
// Errors
// =============================================================================

#[yare::parameterized(
    no_files = { &["evaluate"], "no input file specified" },
    missing_file = { &["evaluate", "nope.json"], "failed to read snapshot" },
    bad_now = { &["evaluate", "repo.json", "--now", "tomorrow"], "invalid timestamp" },
    bad_category = { &["evaluate", "repo.json", "-c", "later"], "invalid SLO category: 'later'" },
)]
fn errors_exit_one(args: &[&str], message: &str) {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    slo(temp.path())
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains(message));
}

#[test]
fn malformed_snapshot_names_the_file() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "broken.json", "{\"repo\": ");

    slo(temp.path())
        .args(["evaluate", "broken.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse snapshot"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn label_without_add_event_fails() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "repo.json",
        r#"{"repo": "org/repo", "labels": ["Priority: Eventually"], "items": [
            {"id": "x-1", "author": "ann", "createdAt": "2023-01-01T00:00:00Z",
             "labels": ["Agenda+"]}
        ]}"#,
    );

    slo(temp.path())
        .args(["evaluate", "repo.json", "--now", "2023-01-10T00:00:00Z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("item x-1 has a 'agenda+' label"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn debug_logs_go_to_stderr() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "repo.json", SNAPSHOT);

    let output = slo(temp.path())
        .env("SLO_LOG", "debug")
        .args(["evaluate", "repo.json", "-o", "json"])
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("evaluating repository"), "stderr: {stderr}");
    assert!(stderr.contains("reordered timeline"), "stderr: {stderr}");
    // stdout is still a clean JSON document
    stdout_json(&output);
}

#[test]
fn repository_without_labels_warns() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "plain.json", UNLABELED_SNAPSHOT);

    slo(temp.path())
        .args(["evaluate", "plain.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no priority labels; only untriaged issues are tracked",
        ))
        .stderr(predicate::str::contains("repository has no priority labels"));
}
