// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors
// ABOUTME: Marker reference table setup for nutregen-cli
// ABOUTME: Installs a JSON table from disk or falls back to the built-in table

use nutregen::{errors::AppResult, intelligence::markers::MarkerTable, upload::load_marker_table};
use std::path::Path;
use tracing::info;

/// Resolve the process-wide marker table, installing `path` when given
pub fn marker_table(path: Option<&Path>) -> AppResult<&'static MarkerTable> {
    match path {
        Some(path) => {
            let table = load_marker_table(path)?;
            info!(path = %path.display(), "using custom marker table");
            MarkerTable::install(table)
        }
        None => Ok(MarkerTable::global()),
    }
}
