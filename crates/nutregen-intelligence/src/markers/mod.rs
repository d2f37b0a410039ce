// ABOUTME: Genetic marker handling: reference table and line-oriented file parser
// ABOUTME: Converts raw marker exports into ordered detected-trait labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! # Markers Module
//!
//! A marker export is a text file with one record per line:
//!
//! ```text
//! # rsid	genotype	chromosome
//! rs4988235	AG	2
//! ```
//!
//! Lines starting with `rs` are resolved against a [`MarkerTable`] and produce
//! detected traits such as `"Lactase Persistence (reduced)"`. Anything that does
//! not resolve is skipped; scanning never fails.

/// Line parser producing detected-trait labels
pub mod parser;
/// Marker id → trait/genotype-effect reference data
pub mod table;

pub use parser::{DetectedTraits, MarkerParser, MarkerScan};
pub use table::{MarkerRecord, MarkerTable};
