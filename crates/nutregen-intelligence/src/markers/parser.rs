// ABOUTME: Best-effort scanner turning tab-delimited marker lines into detected-trait labels
// ABOUTME: Skips headers, comments, malformed lines, and unknown markers without signalling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use super::table::MarkerTable;
use nutregen_core::constants::markers::{FIELD_SEPARATOR, MARKER_ID_PREFIX, MIN_FIELDS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of scanning one marker file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerScan {
    /// Detected traits in file order, duplicates preserved
    pub traits: Vec<String>,
    /// Lines read, including headers and comments
    pub lines_read: usize,
    /// Candidate `rs` lines that did not resolve to a trait
    pub skipped: usize,
}

impl MarkerScan {
    /// Short human-readable summary of the scanned file
    #[must_use]
    pub fn summary(&self) -> String {
        format!("File lines: {}", self.lines_read)
    }
}

/// Stateless parser bound to a reference table
#[derive(Debug, Clone, Copy)]
pub struct MarkerParser<'a> {
    table: &'a MarkerTable,
}

impl<'a> MarkerParser<'a> {
    /// Create a parser resolving against `table`
    #[must_use]
    pub const fn new(table: &'a MarkerTable) -> Self {
        Self { table }
    }

    /// Resolve a single line to a detected-trait label
    ///
    /// Only lines starting with `rs` are considered. The line is split on tabs;
    /// field 0 is the marker id and field 1 the genotype, matched exactly.
    #[must_use]
    pub fn detect_trait(&self, line: &str) -> Option<String> {
        let line = line.trim_end_matches(['\r', '\n']);
        if !line.starts_with(MARKER_ID_PREFIX) {
            return None;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < MIN_FIELDS {
            return None;
        }

        self.table.lookup(fields[0], fields[1])
    }

    /// Lazily map lines to detected traits, in input order
    pub fn traits<I>(&self, lines: I) -> DetectedTraits<'a, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        DetectedTraits {
            parser: *self,
            lines: lines.into_iter(),
        }
    }

    /// Scan a whole file, collecting traits and line counts
    pub fn scan<I, S>(&self, lines: I) -> MarkerScan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scan = MarkerScan::default();
        for line in lines {
            let line = line.as_ref();
            scan.lines_read += 1;
            match self.detect_trait(line) {
                Some(label) => scan.traits.push(label),
                None if line.starts_with(MARKER_ID_PREFIX) => scan.skipped += 1,
                None => {}
            }
        }

        debug!(
            lines = scan.lines_read,
            traits = scan.traits.len(),
            skipped = scan.skipped,
            "marker file scanned"
        );
        scan
    }
}

/// Iterator over the detected traits of a line source
#[derive(Debug, Clone)]
pub struct DetectedTraits<'a, I> {
    parser: MarkerParser<'a>,
    lines: I,
}

impl<I> Iterator for DetectedTraits<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let parser = self.parser;
        self.lines
            .by_ref()
            .find_map(|line| parser.detect_trait(line.as_ref()))
    }
}
