// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use slomon::Cli;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so report output on stdout stays machine-readable.
fn setup_logging() {
    let filter = slomon::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging();
    if let Err(e) = slomon::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
