// ABOUTME: Plan engine combining marker parsing, plan calculation, and meal filtering
// ABOUTME: Produces plan reports for single requests and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! # Plan Engine
//!
//! Control flow for one request:
//!
//! 1. the marker parser turns file lines into detected traits
//! 2. the calculator derives calories and the macro split from the input and traits
//! 3. the meal filter picks four meals from the catalog (independent of 2)
//!
//! The engine only borrows read-only reference data, so a single instance can
//! serve any number of concurrent derivations.

use chrono::{DateTime, Utc};
use nutregen_core::models::{LifestyleForm, LifestyleInput, MacroGrams, PlanResult};
use nutregen_intelligence::config::PlanConfig;
use nutregen_intelligence::markers::{MarkerParser, MarkerTable};
use nutregen_intelligence::meals::{MealCatalog, MealFilter};
use nutregen_intelligence::plan_calculator::calculate_plan;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

/// One unit of batch work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Raw marker file lines
    pub marker_lines: Vec<String>,
    /// Validated lifestyle input
    pub input: LifestyleInput,
}

impl PlanRequest {
    /// Build a request from file lines and a raw form
    #[must_use]
    pub fn from_form(marker_lines: Vec<String>, form: &LifestyleForm) -> Self {
        Self {
            marker_lines,
            input: LifestyleInput::from_form(form),
        }
    }
}

/// Everything derived for one request, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Calories, macro split, and meals
    pub plan: PlanResult,
    /// Grams per macro for the calorie target
    pub macro_grams: MacroGrams,
    /// Marker-detected traits in file order, followed by the declared traits
    pub traits: Vec<String>,
    /// Marker file summary line
    pub marker_summary: String,
    /// Whether the fallback meal plan was used
    pub fallback_meals: bool,
    /// The input the plan was derived from
    pub input: LifestyleInput,
    /// When the plan was derived
    pub generated_at: DateTime<Utc>,
}

/// Plan derivation over shared reference data
#[derive(Debug, Clone)]
pub struct PlanEngine<'a> {
    table: &'a MarkerTable,
    catalog: &'a MealCatalog,
    config: PlanConfig,
}

impl<'a> PlanEngine<'a> {
    /// Create an engine over the given reference data and configuration
    #[must_use]
    pub const fn new(table: &'a MarkerTable, catalog: &'a MealCatalog, config: PlanConfig) -> Self {
        Self {
            table,
            catalog,
            config,
        }
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Marker reference table in use
    #[must_use]
    pub const fn marker_table(&self) -> &'a MarkerTable {
        self.table
    }

    /// Meal catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &'a MealCatalog {
        self.catalog
    }

    /// Derive a plan from marker file lines and lifestyle input
    pub fn derive<I, S>(&self, lines: I, input: &LifestyleInput) -> PlanReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let span = info_span!(
            "derive_plan",
            activity = %input.activity,
            goal = ?input.goal,
            stress = ?input.stress
        );
        let _guard = span.enter();

        let scan = MarkerParser::new(self.table).scan(lines);
        let marker_summary = scan.summary();
        let mut traits = scan.traits;
        traits.extend(input.traits.iter().cloned());

        let calculation = calculate_plan(input, &traits, &self.config);
        let selection = MealFilter::new(self.catalog).select(input);

        debug!(
            calories = calculation.calories,
            carbs = calculation.macros.carbs,
            fats = calculation.macros.fats,
            protein = calculation.macros.protein,
            traits = traits.len(),
            fallback = selection.fallback,
            "plan derived"
        );

        PlanReport {
            macro_grams: calculation.macros.grams(calculation.calories),
            plan: PlanResult {
                calories: calculation.calories,
                macros: calculation.macros,
                meals: selection.meals,
            },
            marker_summary,
            traits,
            fallback_meals: selection.fallback,
            input: input.clone(),
            generated_at: Utc::now(),
        }
    }

    /// Derive plans for independent requests in parallel
    ///
    /// Output order matches `requests`.
    #[must_use]
    pub fn derive_batch(&self, requests: &[PlanRequest]) -> Vec<PlanReport> {
        info!(requests = requests.len(), "deriving plan batch");
        requests
            .par_iter()
            .map(|request| self.derive(&request.marker_lines, &request.input))
            .collect()
    }
}

impl PlanEngine<'static> {
    /// Engine over the process-wide marker table, built-in catalog, and plan config
    #[must_use]
    pub fn from_globals() -> Self {
        Self::new(
            MarkerTable::global(),
            MealCatalog::builtin(),
            PlanConfig::global().clone(),
        )
    }
}
