// ABOUTME: Rule-based calorie target and macro split derived from lifestyle and detected traits
// ABOUTME: Pure, deterministic functions: base table, goal delta, trait/sleep/stress biases, floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Plan Calculator Module
//!
//! Derives a daily calorie target and a carbohydrate/fat/protein split.
//!
//! # Rules
//!
//! 1. Base calories from the activity table, plus the goal delta.
//! 2. Macro fractions start at the baseline (35/30/35).
//! 3. A detected trait containing the carb-sensitivity label lowers carbs; one containing
//!    the slow-fat label lowers fats; either adds a single flat protein bonus.
//! 4. Sleep strictly below the threshold adds a further protein bonus.
//! 5. Exactly `high` stress lowers carbs further.
//! 6. Each fraction is floored independently, then all three are normalized to sum to 1.0.
//! 7. Fractions become whole percentages through the configured [`MacroRounding`].
//!
//! Nothing here can fail: every input has already been defaulted at the boundary.

use crate::config::{CalorieConfig, MacroBiasConfig, MacroRounding, PlanConfig};
use nutregen_core::models::{
    ActivityLevel, Goal, LifestyleInput, MacroFractions, MacroSplit, StressLevel,
};
use serde::{Deserialize, Serialize};

/// Calculator output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanCalculation {
    /// Daily calorie target (kcal)
    pub calories: u32,
    /// Normalized fractions before rounding
    pub fractions: MacroFractions,
    /// Rounded percentages
    pub macros: MacroSplit,
}

/// Calculate the daily calorie target
///
/// Formula: calories = base(activity) + delta(goal)
#[must_use]
pub fn calculate_calories(activity: ActivityLevel, goal: Goal, config: &CalorieConfig) -> u32 {
    let target = i64::from(config.base_for(activity)) + config.goal_delta(goal);
    u32::try_from(target.max(0)).unwrap_or(u32::MAX)
}

/// Whether any detected trait contains `label`
fn has_trait<S: AsRef<str>>(traits: &[S], label: &str) -> bool {
    traits.iter().any(|detected| detected.as_ref().contains(label))
}

/// Calculate normalized macro fractions
///
/// Biases are summed per macro, each macro is floored, and the three values are
/// divided by their total so they sum to 1.0.
#[must_use]
pub fn calculate_macro_fractions<S: AsRef<str>>(
    traits: &[S],
    sleep_hours: f64,
    stress: StressLevel,
    config: &MacroBiasConfig,
) -> MacroFractions {
    let carb_sensitive = has_trait(traits, &config.carb_sensitivity_trait);
    let slow_fat = has_trait(traits, &config.slow_fat_trait);

    let mut carb_bias = 0.0;
    let mut fat_bias = 0.0;
    let mut protein_bias = 0.0;

    if carb_sensitive {
        carb_bias -= config.trait_bias;
    }
    if slow_fat {
        fat_bias -= config.trait_bias;
    }
    // Single flat bonus, not one per matching trait
    if carb_sensitive || slow_fat {
        protein_bias += config.trait_bias;
    }
    if sleep_hours < config.short_sleep_threshold_hours {
        protein_bias += config.short_sleep_protein_bias;
    }
    if stress == StressLevel::High {
        carb_bias -= config.high_stress_carb_bias;
    }

    let carbs = (config.baseline_carbs + carb_bias).max(config.carbs_floor);
    let fats = (config.baseline_fats + fat_bias).max(config.fats_floor);
    let protein = (config.baseline_protein + protein_bias).max(config.protein_floor);

    let total = carbs + fats + protein;
    MacroFractions {
        carbs: carbs / total,
        fats: fats / total,
        protein: protein / total,
    }
}

/// Convert normalized fractions into whole percentages
#[must_use]
pub fn round_macros(fractions: &MacroFractions, rounding: MacroRounding) -> MacroSplit {
    match rounding {
        MacroRounding::Independent => round_independent(fractions),
        MacroRounding::Renormalized => round_largest_remainder(fractions),
    }
}

/// Round each fraction to the nearest percent on its own
///
/// The sum is not corrected and may land one point either side of 100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: fractions are within 0..=1
fn round_independent(fractions: &MacroFractions) -> MacroSplit {
    let percent = |fraction: f64| (fraction * 100.0).round() as u32;
    MacroSplit {
        carbs: percent(fractions.carbs),
        fats: percent(fractions.fats),
        protein: percent(fractions.protein),
    }
}

/// Largest-remainder apportionment: floor every share, then hand the missing
/// points to the largest fractional parts (ties resolved carbs, fats, protein)
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: fractions are within 0..=1
fn round_largest_remainder(fractions: &MacroFractions) -> MacroSplit {
    let scaled = [
        fractions.carbs * 100.0,
        fractions.fats * 100.0,
        fractions.protein * 100.0,
    ];
    let mut shares = scaled.map(|value| value.floor() as u32);
    let assigned: u32 = shares.iter().sum();

    let mut order = [0_usize, 1, 2];
    order.sort_by(|&a, &b| {
        let remainder_a = scaled[a] - scaled[a].floor();
        let remainder_b = scaled[b] - scaled[b].floor();
        remainder_b.total_cmp(&remainder_a).then(a.cmp(&b))
    });

    let missing = 100_u32.saturating_sub(assigned) as usize;
    for &index in order.iter().take(missing) {
        shares[index] += 1;
    }

    MacroSplit {
        carbs: shares[0],
        fats: shares[1],
        protein: shares[2],
    }
}

/// Calculate the full plan numbers for a validated input
#[must_use]
pub fn calculate_plan<S: AsRef<str>>(
    input: &LifestyleInput,
    traits: &[S],
    config: &PlanConfig,
) -> PlanCalculation {
    let calories = calculate_calories(input.activity, input.goal, &config.calories);
    let fractions =
        calculate_macro_fractions(traits, input.sleep_hours, input.stress, &config.macros);
    let macros = round_macros(&fractions, config.rounding);

    PlanCalculation {
        calories,
        fractions,
        macros,
    }
}
