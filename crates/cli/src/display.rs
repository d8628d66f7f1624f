// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use slo_core::{AncillaryKind, SloCategory, SloDuration, SloGroups, SloStatus};

use crate::colors;
use crate::report::{EvaluatedItem, RepoReport};
use crate::schema::SummaryCounts;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Rounds `age` to a single unit and formats it.
///
/// Month and year lengths are estimates, since ages start and end at
/// arbitrary instants. Weeks and longer keep one decimal; shorter units
/// are whole numbers.
pub fn format_round_age(age: SloDuration) -> String {
    let age = age.abs();
    let seconds = age.as_chrono().num_milliseconds() as f64 / 1000.0;
    let days = age.total_days();
    if seconds > 336.0 * SECONDS_PER_DAY {
        plural(round_tenth(days / 365.24), "year")
    } else if seconds > 28.0 * SECONDS_PER_DAY {
        plural(round_tenth(days / 30.4), "month")
    } else if seconds > 6.0 * SECONDS_PER_DAY {
        plural(round_tenth(days / 7.0), "week")
    } else if seconds > 23.0 * 3600.0 {
        plural(days.round(), "day")
    } else if seconds > 59.0 * 60.0 {
        plural((seconds / 3600.0).round(), "hour")
    } else if seconds > 59.0 {
        plural((seconds / 60.0).round(), "minute")
    } else {
        plural(seconds.round(), "second")
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn plural(value: f64, unit: &str) -> String {
    if value == 1.0 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// A group of buckets shown together in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Triage,
    Urgent,
    Soon,
    Agenda,
    NeedsEdits,
    Other,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Triage,
        Section::Urgent,
        Section::Soon,
        Section::Agenda,
        Section::NeedsEdits,
        Section::Other,
    ];

    /// Heading for the section's out-of-SLO count, if it has an SLO.
    pub fn violation_heading(self) -> Option<&'static str> {
        match self {
            Section::Triage => Some("untriaged issues outside their SLO"),
            Section::Urgent => Some("urgent issues outside their SLO"),
            Section::Soon => Some("soon-priority issues outside their SLO"),
            Section::Agenda => Some("issues that have been on the agenda too long"),
            Section::NeedsEdits => Some("issues with out-of-SLO pending edits"),
            Section::Other => None,
        }
    }

    /// Heading for the section's total count.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Triage => "untriaged issues",
            Section::Urgent => "urgent issues",
            Section::Soon => "soon-priority issues",
            Section::Agenda => "issues on the agenda",
            Section::NeedsEdits => "issues with pending edits",
            Section::Other => "other issues",
        }
    }

    /// The section's violating and in-progress items, violating first.
    pub fn items<T>(self, groups: &SloGroups<T>) -> (&[T], &[T]) {
        let pair = match self {
            Section::Triage => groups.category(SloCategory::Triage),
            Section::Urgent => groups.category(SloCategory::Urgent),
            Section::Soon => groups.category(SloCategory::Soon),
            Section::Agenda => Some(groups.ancillary(AncillaryKind::Agenda)),
            Section::NeedsEdits => Some(groups.ancillary(AncillaryKind::NeedsEdits)),
            Section::Other => None,
        };
        let none: &[T] = &[];
        match pair {
            Some(pair) => (pair.violating.as_slice(), pair.in_progress.as_slice()),
            None => (none, groups.other.as_slice()),
        }
    }

    /// The time to report for an item in this section: time used while
    /// within SLO, time overdue once past it.
    pub fn reported_age(self, status: &SloStatus) -> Option<(SloDuration, bool)> {
        let (time_used, until_slo, within) = match self {
            Section::Triage | Section::Urgent | Section::Soon => {
                (status.time_used, status.until_slo?, status.within_slo)
            }
            Section::Agenda => {
                let timer = status.ancillary(AncillaryKind::Agenda)?;
                (timer.time_used, timer.until_slo, timer.within_slo)
            }
            Section::NeedsEdits => {
                let timer = status.ancillary(AncillaryKind::NeedsEdits)?;
                (timer.time_used, timer.until_slo, timer.within_slo)
            }
            Section::Other => return None,
        };
        if within {
            Some((time_used, true))
        } else {
            Some((-until_slo, false))
        }
    }
}

/// Format one item line of a section.
///
/// Output format:
/// ```text
///   - Title (url): out of SLO for 2.5 days
/// ```
pub fn format_item_line(item: &EvaluatedItem, section: Section, color: bool) -> String {
    let title = if item.title.is_empty() {
        "<No title>"
    } else {
        item.title.as_str()
    };
    let mut line = format!("  - {}", title);
    let link = item.url.as_deref().unwrap_or(&item.id);
    let link = format!(" ({})", link);
    if color {
        line.push_str(&colors::context(&link));
    } else {
        line.push_str(&link);
    }

    if let Some((age, within)) = section.reported_age(&item.status) {
        let state = if within {
            "on maintainers' plate".to_string()
        } else if color {
            colors::violation("out of SLO")
        } else {
            "out of SLO".to_string()
        };
        line.push_str(&format!(": {} for {}", state, format_round_age(age)));
    }
    line
}

/// Format a repository report as text. Empty sections are omitted.
pub fn format_report(report: &RepoReport, color: bool) -> String {
    let mut lines = Vec::new();
    let title = match report.retrieved {
        Some(at) => format!("{} (retrieved {})", report.repo, at.format("%Y-%m-%d %H:%M")),
        None => report.repo.clone(),
    };
    lines.push(if color { colors::header(&title) } else { title });
    if !report.uses_labels {
        lines.push("  no priority labels; only untriaged issues are tracked".to_string());
    }

    for section in Section::ALL {
        let (violating, in_progress) = section.items(&report.groups);
        let total = violating.len() + in_progress.len();
        if total == 0 {
            continue;
        }
        lines.push(String::new());
        if let Some(heading) = section.violation_heading() {
            if !violating.is_empty() {
                let text = format!("{} {}", violating.len(), heading);
                lines.push(if color { colors::violation(&text) } else { text });
            }
        }
        let text = format!("{} {}", total, section.heading());
        lines.push(if color { colors::header(&text) } else { text });
        for item in violating.iter().chain(in_progress) {
            lines.push(format_item_line(item, section, color));
        }
    }
    lines.join("\n")
}

/// Format bucket counts as aligned `name: count` lines.
pub fn format_summary(repo: &str, summary: &SummaryCounts) -> String {
    let rows = [
        ("triage violations", summary.triage_violations),
        ("need triage", summary.need_triage),
        ("urgent violations", summary.urgent_violations),
        ("urgent", summary.urgent),
        ("soon violations", summary.soon_violations),
        ("soon", summary.soon),
        ("agenda violations", summary.agenda_violations),
        ("agenda", summary.agenda),
        ("needs edits violations", summary.needs_edits_violations),
        ("needs edits", summary.needs_edits),
        ("other", summary.other),
    ];
    let mut lines = vec![repo.to_string()];
    for (name, count) in rows {
        lines.push(format!("  {:<24}{}", format!("{}:", name), count));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
