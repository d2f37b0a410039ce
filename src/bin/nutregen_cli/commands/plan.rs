// ABOUTME: Plan command for nutregen-cli
// ABOUTME: Loads a marker file, validates lifestyle flags, and prints the derived plan report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use clap::Args;
use nutregen::{
    config::ServerConfig,
    engine::PlanEngine,
    errors::AppResult,
    models::{LifestyleForm, LifestyleInput},
    upload::load_marker_file,
};
use std::path::PathBuf;
use tracing::info;

use crate::helpers::display::print_json;

/// Lifestyle flags, passed through as typed so the core applies its own defaults
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Marker export (.txt, tab-delimited)
    #[arg(long)]
    pub dna: PathBuf,

    /// Activity level: Low, Moderate, High
    #[arg(long)]
    pub activity: Option<String>,

    /// Goal: loss, maintain, gain
    #[arg(long)]
    pub goal: Option<String>,

    /// Diet tag: regular, vegan, vegetarian, pescatarian, ...
    #[arg(long)]
    pub diet: Option<String>,

    /// Allergy token (repeatable or comma-separated): dairy, eggs, shellfish, soy, gluten, nuts
    #[arg(long = "allergy", value_delimiter = ',')]
    pub allergies: Vec<String>,

    /// Preference token (repeatable or comma-separated)
    #[arg(long = "preference", value_delimiter = ',')]
    pub preferences: Vec<String>,

    /// Average sleep hours per night
    #[arg(long)]
    pub sleep: Option<String>,

    /// Stress level: low, moderate, high
    #[arg(long)]
    pub stress: Option<String>,

    /// Time available to cook ("<15" for quick meals)
    #[arg(long)]
    pub cook_time: Option<String>,

    /// Budget ("£" for a tight budget)
    #[arg(long)]
    pub budget: Option<String>,

    /// Declared trait, repeatable: e.g. "High Carb Sensitivity", "Slow Fat Metabolism"
    #[arg(long = "trait")]
    pub traits: Vec<String>,
}

impl PlanArgs {
    fn to_form(&self) -> LifestyleForm {
        LifestyleForm {
            activity: self.activity.clone(),
            goal: self.goal.clone(),
            diet: self.diet.clone(),
            allergies: self.allergies.clone(),
            preferences: self.preferences.clone(),
            sleep_hours: self.sleep.clone(),
            stress: self.stress.clone(),
            cook_time: self.cook_time.clone(),
            budget: self.budget.clone(),
            traits: self.traits.clone(),
        }
    }
}

/// Derive a plan for the given flags and print it
pub fn run(args: &PlanArgs, server: &ServerConfig) -> AppResult<()> {
    let lines = load_marker_file(&args.dna, &server.upload)?;
    let input = LifestyleInput::from_form(&args.to_form());

    let engine = PlanEngine::from_globals();
    let report = engine.derive(&lines, &input);
    info!(
        calories = report.plan.calories,
        traits = report.traits.len(),
        fallback = report.fallback_meals,
        "{}",
        report.marker_summary
    );

    print_json(&report)
}
