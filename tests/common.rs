// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, lifestyle forms, and sample marker files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutregen`

use nutregen::intelligence::markers::{MarkerRecord, MarkerTable};
use nutregen::models::{LifestyleForm, LifestyleInput};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// A marker export with a header, a comment, known and unknown markers, and noise
pub const SAMPLE_MARKER_FILE: &str = "\
# rsid\tgenotype\tchromosome
rsid\tgenotype
rs4988235\tAG\t2
rs1801282\tGG\t3
rs0000001\tAA\t1
rs1799883\tAA\t2
not a marker line
rs762551
";

/// Lines of [`SAMPLE_MARKER_FILE`]
pub fn sample_marker_lines() -> Vec<String> {
    SAMPLE_MARKER_FILE.lines().map(str::to_owned).collect()
}

/// Single-marker table used by the reference parser example
pub fn lactase_table() -> MarkerTable {
    MarkerTable::new([MarkerRecord::new(
        "rs1234",
        "Lactase Persistence",
        &[("AG", "reduced"), ("AA", "persistent")],
    )])
}

/// Lifestyle form with every text field set
pub fn form(
    activity: &str,
    goal: &str,
    diet: &str,
    sleep: &str,
    stress: &str,
) -> LifestyleForm {
    LifestyleForm {
        activity: Some(activity.to_owned()),
        goal: Some(goal.to_owned()),
        diet: Some(diet.to_owned()),
        sleep_hours: Some(sleep.to_owned()),
        stress: Some(stress.to_owned()),
        ..LifestyleForm::default()
    }
}

/// Validated input for a diet with allergy and preference tokens
pub fn diet_input(diet: &str, allergies: &[&str], preferences: &[&str]) -> LifestyleInput {
    LifestyleInput::from_form(&LifestyleForm {
        diet: Some(diet.to_owned()),
        allergies: allergies.iter().map(|token| (*token).to_owned()).collect(),
        preferences: preferences.iter().map(|token| (*token).to_owned()).collect(),
        ..LifestyleForm::default()
    })
}
