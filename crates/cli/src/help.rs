// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));
    let error = Style::new()
        .fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::VIOLATION))))
        .bold();

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
        .error(error)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_reports}
  {evaluate}    Evaluate items and list them by SLO bucket
  {summary}     Count items per SLO bucket

{header_setup}
  {schema}      Output JSON Schema for commands
  {completion}  Generate shell completions
",
        header_reports = colors::header("Reports:"),
        header_setup = colors::header("Setup:"),
        evaluate = colors::literal("evaluate"),
        summary = colors::literal("summary"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  slo evaluate repo.json          List items by SLO bucket
  slo summary *.json -o json      Bucket counts for many repositories
  slo evaluate repo.json --now 2023-01-10T12:00:00Z
                                  Evaluate as of a fixed instant",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
