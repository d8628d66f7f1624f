// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `slo summary` JSON output.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use super::SummaryCounts;

/// JSON output structure for the summary command: counts keyed by
/// repository name.
#[derive(Debug, Clone, Default, JsonSchema, Serialize)]
#[serde(transparent)]
pub struct SummaryOutputJson(pub BTreeMap<String, SummaryCounts>);
