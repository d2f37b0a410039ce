// ABOUTME: Reference-data commands for nutregen-cli
// ABOUTME: Prints the marker table and the keyed meal catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use nutregen::{
    errors::AppResult,
    intelligence::{
        markers::MarkerTable,
        meals::{MealCatalog, MealKey},
    },
};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct CatalogRow<'a> {
    key: String,
    #[serde(flatten)]
    address: MealKey,
    idea: &'a str,
    notes: &'a str,
    tags: &'a BTreeSet<String>,
}

/// Print every marker record, sorted by marker id
pub fn markers(table: &MarkerTable) -> AppResult<()> {
    print_json(&table.records())
}

/// Print the built-in catalog in evaluation order
pub fn catalog() -> AppResult<()> {
    let rows: Vec<CatalogRow<'_>> = MealCatalog::builtin()
        .keyed_entries()
        .into_iter()
        .map(|(key, entry)| CatalogRow {
            key: key.to_string(),
            address: key,
            idea: &entry.idea,
            notes: &entry.notes,
            tags: &entry.tags,
        })
        .collect();
    print_json(&rows)
}
