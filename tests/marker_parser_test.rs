// ABOUTME: Integration tests for marker file parsing against reference tables
// ABOUTME: Covers line filtering, exact genotype matching, ordering, and JSON tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutregen::errors::ErrorCode;
use nutregen::intelligence::markers::{MarkerParser, MarkerTable};

mod common;

// ============================================================================
// SINGLE LINE RESOLUTION
// ============================================================================

#[test]
fn test_known_marker_yields_trait_label() {
    let table = common::lactase_table();
    let parser = MarkerParser::new(&table);

    assert_eq!(
        parser.detect_trait("rs1234\tAG\tother").as_deref(),
        Some("Lactase Persistence (reduced)")
    );
}

#[test]
fn test_unknown_marker_yields_nothing() {
    let table = common::lactase_table();
    let parser = MarkerParser::new(&table);

    assert_eq!(parser.detect_trait("rs9999\tAG"), None);
}

#[test]
fn test_unknown_genotype_yields_nothing() {
    let table = common::lactase_table();
    let parser = MarkerParser::new(&table);

    assert_eq!(parser.detect_trait("rs1234\tGG"), None);
    // Genotype comparison is exact and case-sensitive
    assert_eq!(parser.detect_trait("rs1234\tag"), None);
}

#[test]
fn test_non_candidate_lines_are_skipped() {
    let table = common::lactase_table();
    let parser = MarkerParser::new(&table);

    for line in [
        "",
        "# rs1234\tAG",
        "RS1234\tAG",
        " rs1234\tAG",
        "rs1234",
        "rs1234 AG",
        "chr1\trs1234\tAG",
    ] {
        assert_eq!(parser.detect_trait(line), None, "line {line:?}");
    }
}

#[test]
fn test_line_endings_are_ignored() {
    let table = common::lactase_table();
    let parser = MarkerParser::new(&table);

    assert_eq!(
        parser.detect_trait("rs1234\tAA\r\n").as_deref(),
        Some("Lactase Persistence (persistent)")
    );
}

// ============================================================================
// WHOLE FILE SCANS
// ============================================================================

#[test]
fn test_scan_preserves_file_order_and_duplicates() {
    let table = common::lactase_table();
    let parser = MarkerParser::new(&table);

    let traits: Vec<String> = parser
        .traits(["rs1234\tAA", "rs1234\tAG", "rs1234\tAA"])
        .collect();

    assert_eq!(
        traits,
        vec![
            "Lactase Persistence (persistent)",
            "Lactase Persistence (reduced)",
            "Lactase Persistence (persistent)",
        ]
    );
}

#[test]
fn test_scan_of_sample_file_with_builtin_table() {
    common::init_test_logging();
    let table = MarkerTable::builtin();
    let scan = MarkerParser::new(&table).scan(common::sample_marker_lines());

    assert_eq!(
        scan.traits,
        vec![
            "Lactase Persistence (reduced)",
            "High Carb Sensitivity (increased)",
            "Slow Fat Metabolism (increased)",
        ]
    );
    assert_eq!(scan.lines_read, 8);
    assert_eq!(scan.skipped, 3);
    assert_eq!(scan.summary(), "File lines: 8");
}

#[test]
fn test_empty_file_yields_empty_scan() {
    let table = MarkerTable::builtin();
    let scan = MarkerParser::new(&table).scan(Vec::<String>::new());

    assert!(scan.traits.is_empty());
    assert_eq!(scan.summary(), "File lines: 0");
}

#[test]
fn test_parsing_is_repeatable() {
    let table = MarkerTable::builtin();
    let parser = MarkerParser::new(&table);

    let first = parser.scan(common::sample_marker_lines());
    let second = parser.scan(common::sample_marker_lines());
    assert_eq!(first, second);
}

// ============================================================================
// JSON REFERENCE TABLES
// ============================================================================

#[test]
fn test_json_table_drives_parser() {
    let table = MarkerTable::from_json(
        r#"{
            "rs1801282": {"trait": "High Carb Sensitivity", "genotypes": {"CC": "typical", "GG": "increased"}},
            "rs4988235": {"trait": "Lactase Persistence", "genotypes": {"AG": "reduced"}}
        }"#,
    )
    .unwrap();
    let parser = MarkerParser::new(&table);

    assert_eq!(table.len(), 2);
    assert_eq!(
        parser.detect_trait("rs1801282\tCC").as_deref(),
        Some("High Carb Sensitivity (typical)")
    );
    let ids: Vec<&str> = table
        .records()
        .iter()
        .map(|record| record.marker_id.as_str())
        .collect();
    assert_eq!(ids, vec!["rs1801282", "rs4988235"]);
}

#[test]
fn test_invalid_json_table_is_config_error() {
    let error = MarkerTable::from_json("[1, 2, 3]").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);

    let error = MarkerTable::from_json("{not json").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_builtin_bias_traits_only_list_risk_genotypes() {
    let table = MarkerTable::builtin();

    assert!(table.lookup("rs1801282", "CC").is_none());
    assert!(table.lookup("rs1799883", "GG").is_none());
    assert!(table
        .lookup("rs1801282", "GG")
        .unwrap()
        .contains("High Carb Sensitivity"));
}
