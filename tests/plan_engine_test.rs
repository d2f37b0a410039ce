// ABOUTME: Integration tests for end-to-end plan derivation
// ABOUTME: Covers report assembly, JSON shape, and parallel batch derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutregen::engine::{PlanEngine, PlanReport, PlanRequest};
use nutregen::intelligence::config::{MacroRounding, PlanConfig};
use nutregen::intelligence::markers::MarkerTable;
use nutregen::intelligence::meals::{fallback_meals, MealCatalog};
use nutregen::models::{LifestyleForm, LifestyleInput, MacroSplit, MealSlot};

mod common;

fn builtin_engine(table: &MarkerTable) -> PlanEngine<'_> {
    PlanEngine::new(table, MealCatalog::builtin(), PlanConfig::default())
}

fn assert_same_plan(left: &PlanReport, right: &PlanReport) {
    assert_eq!(left.plan, right.plan);
    assert_eq!(left.traits, right.traits);
    assert_eq!(left.marker_summary, right.marker_summary);
    assert_eq!(left.fallback_meals, right.fallback_meals);
    assert_eq!(left.input, right.input);
}

// ============================================================================
// SINGLE DERIVATION
// ============================================================================

#[test]
fn test_derive_combines_traits_calories_and_meals() {
    common::init_test_logging();
    let table = MarkerTable::builtin();
    let engine = builtin_engine(&table);
    let input = LifestyleInput::from_form(&LifestyleForm {
        activity: Some("High".to_owned()),
        goal: Some("loss".to_owned()),
        diet: Some("vegan".to_owned()),
        allergies: vec!["nuts".to_owned()],
        sleep_hours: Some("8".to_owned()),
        stress: Some("low".to_owned()),
        ..LifestyleForm::default()
    });

    let report = engine.derive(common::sample_marker_lines(), &input);

    assert_eq!(report.plan.calories, 2350);
    assert_eq!(report.traits.len(), 3);
    assert_eq!(report.marker_summary, "File lines: 8");
    // Both bias traits: 0.30 / 0.25 / 0.40 normalized by 0.95
    assert_eq!(
        report.plan.macros,
        MacroSplit {
            carbs: 32,
            fats: 26,
            protein: 42
        }
    );
    assert!(!report.fallback_meals);
    assert_eq!(report.plan.meals.len(), 4);
    assert_eq!(report.plan.meals[0].slot, MealSlot::Breakfast);
    assert!((report.macro_grams.fats_g - 2350.0 * 0.26 / 9.0).abs() < 1e-9);
}

#[test]
fn test_derive_without_markers_uses_baseline() {
    let table = MarkerTable::builtin();
    let engine = builtin_engine(&table);

    let report = engine.derive(Vec::<String>::new(), &LifestyleInput::default());

    assert!(report.traits.is_empty());
    assert_eq!(report.plan.calories, 2000);
    assert_eq!(
        report.plan.macros,
        MacroSplit {
            carbs: 35,
            fats: 30,
            protein: 35
        }
    );
}

#[test]
fn test_declared_trait_biases_plan_without_markers() {
    let table = MarkerTable::builtin();
    let engine = builtin_engine(&table);
    let input = LifestyleInput::from_form(&LifestyleForm {
        traits: vec!["High Carb Sensitivity".to_owned()],
        ..LifestyleForm::default()
    });

    let report = engine.derive(Vec::<String>::new(), &input);

    assert_eq!(report.traits, vec!["High Carb Sensitivity"]);
    assert_eq!(report.input.traits, vec!["High Carb Sensitivity"]);
    assert_eq!(
        report.plan.macros,
        MacroSplit {
            carbs: 30,
            fats: 30,
            protein: 40
        }
    );
}

#[test]
fn test_declared_traits_follow_detected_traits() {
    let table = MarkerTable::builtin();
    let engine = builtin_engine(&table);
    let input = LifestyleInput::from_form(&LifestyleForm {
        traits: vec![" Slow Fat Metabolism ".to_owned(), String::new()],
        ..LifestyleForm::default()
    });

    let report = engine.derive(["rs4988235\tAG"], &input);

    assert_eq!(
        report.traits,
        vec!["Lactase Persistence (reduced)", "Slow Fat Metabolism"]
    );
    assert_eq!(report.marker_summary, "File lines: 1");
}

#[test]
fn test_engine_config_controls_rounding() {
    let table = MarkerTable::builtin();
    let config = PlanConfig {
        rounding: MacroRounding::Renormalized,
        ..PlanConfig::default()
    };
    let engine = PlanEngine::new(&table, MealCatalog::builtin(), config);
    let input = LifestyleInput::from_form(&common::form("High", "loss", "", "5", "high"));

    let report = engine.derive(["rs1801282\tGG", "rs1799883\tAA"], &input);

    assert_eq!(engine.config().rounding, MacroRounding::Renormalized);
    assert_eq!(report.plan.macros.total(), 100);
}

#[test]
fn test_report_serializes_meal_slots() {
    let table = MarkerTable::builtin();
    let engine = builtin_engine(&table);
    let input = common::diet_input("keto", &[], &[]);

    let report = engine.derive(["rs4988235\tGG"], &input);
    let json = serde_json::to_value(&report).unwrap();

    assert!(report.fallback_meals);
    assert_eq!(report.plan.meals, fallback_meals());
    assert_eq!(json["plan"]["meals"][0]["meal"], "Breakfast");
    assert_eq!(json["plan"]["macros"]["carbs"], 35);
    assert_eq!(json["traits"][0], "Lactase Persistence (non-persistent)");
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_engine_from_globals_uses_builtin_reference_data() {
    let engine = PlanEngine::from_globals();
    assert!(!engine.marker_table().is_empty());
    assert_eq!(engine.catalog().len(), 12);
}

// ============================================================================
// BATCH DERIVATION
// ============================================================================

#[test]
fn test_batch_matches_sequential_derivation_in_order() {
    let table = MarkerTable::builtin();
    let engine = builtin_engine(&table);

    let requests: Vec<PlanRequest> = [
        common::form("Low", "gain", "vegan", "5", "high"),
        common::form("Moderate", "maintain", "regular", "8", "low"),
        common::form("High", "loss", "pescatarian", "abc", "moderate"),
        common::form("", "", "keto", "", ""),
    ]
    .iter()
    .enumerate()
    .map(|(index, form)| {
        let lines = if index % 2 == 0 {
            common::sample_marker_lines()
        } else {
            vec![format!("rs4988235\tA{}", if index == 1 { "A" } else { "G" })]
        };
        PlanRequest::from_form(lines, form)
    })
    .collect();

    let batch = engine.derive_batch(&requests);

    assert_eq!(batch.len(), requests.len());
    for (request, report) in requests.iter().zip(&batch) {
        let sequential = engine.derive(&request.marker_lines, &request.input);
        assert_same_plan(report, &sequential);
    }
}

#[test]
fn test_empty_batch() {
    let table = MarkerTable::builtin();
    assert!(builtin_engine(&table).derive_batch(&[]).is_empty());
}
