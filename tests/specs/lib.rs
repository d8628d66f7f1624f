// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the `slo` binary.
//!
//! The spec files under `cli/` are registered as test targets of the CLI
//! crate so they can run the built binary. Run with:
//! `cargo test -p slomon --test 'spec_*'`.
