// ABOUTME: Marker file loading with extension, size, and encoding checks
// ABOUTME: Turns an uploaded text export into the line sequence the marker parser consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Marker file and marker table loading
//!
//! The parser itself never fails; everything that can go wrong with a file
//! (wrong type, too large, unreadable) is rejected here before parsing.

use crate::config::UploadConfig;
use nutregen_core::errors::{AppError, AppResult};
use nutregen_intelligence::markers::MarkerTable;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Load a marker export from disk as lines
///
/// # Errors
///
/// - `InvalidFormat` if the file does not carry the allowed extension
/// - `InvalidInput` if the path is not a regular file
/// - `ValueOutOfRange` if the file exceeds `max_upload_bytes`
/// - `StorageError` if the file cannot be read
pub fn load_marker_file(path: &Path, config: &UploadConfig) -> AppResult<Vec<String>> {
    check_extension(path, &config.allowed_extension)?;

    let metadata = fs::metadata(path).map_err(|e| {
        AppError::storage(format!("Cannot access marker file {}", path.display())).with_source(e)
    })?;
    if !metadata.is_file() {
        return Err(AppError::invalid_input(format!(
            "Marker file {} is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > config.max_upload_bytes {
        return Err(oversized(path, metadata.len(), config.max_upload_bytes));
    }

    let file = File::open(path).map_err(|e| {
        AppError::storage(format!("Cannot open marker file {}", path.display())).with_source(e)
    })?;
    let bytes = read_bounded(file, config.max_upload_bytes).map_err(|e| {
        AppError::storage(format!("Cannot read marker file {}", path.display())).with_source(e)
    })?;
    // The file may have grown since the metadata check
    if bytes.len() as u64 > config.max_upload_bytes {
        return Err(oversized(path, bytes.len() as u64, config.max_upload_bytes));
    }

    let lines = decode_marker_bytes(&bytes);
    debug!(path = %path.display(), lines = lines.len(), "marker file loaded");
    Ok(lines)
}

/// Read at most `limit + 1` bytes, so a caller can tell an over-limit source apart
///
/// # Errors
///
/// Returns any I/O error from the underlying reader
pub fn read_bounded<R: Read>(reader: R, limit: u64) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn oversized(path: &Path, size: u64, limit: u64) -> AppError {
    warn!(
        path = %path.display(),
        size,
        limit,
        "marker file rejected: too large"
    );
    AppError::out_of_range(format!(
        "Marker file is at least {size} bytes, limit is {limit} bytes"
    ))
}

/// Load a JSON marker reference table from disk
///
/// # Errors
///
/// - `StorageError` if the file cannot be read
/// - `ConfigError` if the document is not a valid marker table
pub fn load_marker_table(path: &Path) -> AppResult<MarkerTable> {
    let document = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Cannot read marker table {}", path.display())).with_source(e)
    })?;
    let table = MarkerTable::from_json(&document)?;
    debug!(path = %path.display(), markers = table.len(), "marker table loaded");
    Ok(table)
}

/// Decode raw upload bytes into lines, replacing invalid UTF-8
#[must_use]
pub fn decode_marker_bytes(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn check_extension(path: &Path, allowed: &str) -> AppResult<()> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(allowed));
    if matches {
        Ok(())
    } else {
        Err(AppError::invalid_format(format!(
            "Marker file {} must be a .{allowed} file",
            path.display()
        )))
    }
}
