// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors
// ABOUTME: Output formatting helpers for nutregen-cli
// ABOUTME: Writes pretty JSON to stdout, keeping logs on stderr

use nutregen::errors::AppResult;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
