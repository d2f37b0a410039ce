// ABOUTME: Plan calculator configuration: calorie table, goal adjustments, macro biases and floors
// ABOUTME: Defaults reproduce the reference rule set; every constant is overridable and validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Plan Calculator Configuration
//!
//! The calculator is a fixed rule set. The numbers it uses live here so they can
//! be validated once and tuned through the environment without touching the rules.

use crate::config::error::ConfigError;
use nutregen_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Daily calorie table and goal adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieConfig {
    /// Base calories for `Low` activity: 1800
    pub low_activity_kcal: u32,
    /// Base calories for `Moderate` activity: 2200
    pub moderate_activity_kcal: u32,
    /// Base calories for `High` activity: 2600
    pub high_activity_kcal: u32,
    /// Base calories when activity is missing or unrecognized: 2000
    pub unspecified_activity_kcal: u32,
    /// Subtracted for a `loss` goal: 250
    pub loss_deficit_kcal: u32,
    /// Added for a `gain` goal: 250
    pub gain_surplus_kcal: u32,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            low_activity_kcal: 1800,
            moderate_activity_kcal: 2200,
            high_activity_kcal: 2600,
            unspecified_activity_kcal: 2000,
            loss_deficit_kcal: 250,
            gain_surplus_kcal: 250,
        }
    }
}

impl CalorieConfig {
    /// Base calories for an activity level
    #[must_use]
    pub const fn base_for(&self, activity: ActivityLevel) -> u32 {
        match activity {
            ActivityLevel::Low => self.low_activity_kcal,
            ActivityLevel::Moderate => self.moderate_activity_kcal,
            ActivityLevel::High => self.high_activity_kcal,
            ActivityLevel::Unspecified => self.unspecified_activity_kcal,
        }
    }

    /// Validate the calorie table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a deficit would consume a whole base value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let smallest_base = [
            self.low_activity_kcal,
            self.moderate_activity_kcal,
            self.high_activity_kcal,
            self.unspecified_activity_kcal,
        ]
        .into_iter()
        .min()
        .unwrap_or(0);

        if smallest_base == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Base calories must be positive",
            ));
        }
        if self.loss_deficit_kcal >= smallest_base {
            return Err(ConfigError::ValueOutOfRange(
                "Loss deficit must be smaller than every base calorie value",
            ));
        }
        Ok(())
    }

    /// Adjustment applied for a goal, as a signed delta
    #[must_use]
    pub fn goal_delta(&self, goal: Goal) -> i64 {
        match goal {
            Goal::Loss => -i64::from(self.loss_deficit_kcal),
            Goal::Maintain => 0,
            Goal::Gain => i64::from(self.gain_surplus_kcal),
        }
    }
}

/// Macro fraction baseline, bias terms, and floors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroBiasConfig {
    /// Starting carbohydrate fraction: 0.35
    pub baseline_carbs: f64,
    /// Starting fat fraction: 0.30
    pub baseline_fats: f64,
    /// Starting protein fraction: 0.35
    pub baseline_protein: f64,
    /// Shift applied per matching trait rule: 0.05
    pub trait_bias: f64,
    /// Protein bonus for short sleep: 0.05
    pub short_sleep_protein_bias: f64,
    /// Carbohydrate penalty for high stress: 0.05
    pub high_stress_carb_bias: f64,
    /// Sleep below this many hours counts as short: 6.0
    pub short_sleep_threshold_hours: f64,
    /// Minimum carbohydrate fraction: 0.20
    pub carbs_floor: f64,
    /// Minimum fat fraction: 0.20
    pub fats_floor: f64,
    /// Minimum protein fraction: 0.25
    pub protein_floor: f64,
    /// Trait label substring that lowers carbohydrates
    pub carb_sensitivity_trait: String,
    /// Trait label substring that lowers fats
    pub slow_fat_trait: String,
}

impl Default for MacroBiasConfig {
    fn default() -> Self {
        Self {
            baseline_carbs: 0.35,
            baseline_fats: 0.30,
            baseline_protein: 0.35,
            trait_bias: 0.05,
            short_sleep_protein_bias: 0.05,
            high_stress_carb_bias: 0.05,
            short_sleep_threshold_hours: 6.0,
            carbs_floor: 0.20,
            fats_floor: 0.20,
            protein_floor: 0.25,
            carb_sensitivity_trait: "High Carb Sensitivity".into(),
            slow_fat_trait: "Slow Fat Metabolism".into(),
        }
    }
}

impl MacroBiasConfig {
    /// Validate baselines, biases, and floors
    ///
    /// # Errors
    ///
    /// Returns an error if baselines don't sum to 1.0, a fraction or floor is outside
    /// (0, 1), a bias is negative, or a trait label is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            self.baseline_carbs,
            self.baseline_fats,
            self.baseline_protein,
            self.carbs_floor,
            self.fats_floor,
            self.protein_floor,
        ];
        if fractions.iter().any(|value| *value <= 0.0 || *value >= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Macro baselines and floors must be between 0 and 1",
            ));
        }

        let baseline_sum = self.baseline_carbs + self.baseline_fats + self.baseline_protein;
        if (baseline_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Macro baselines must sum to 1.0",
            ));
        }

        if self.carbs_floor + self.fats_floor + self.protein_floor >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "Macro floors must sum to less than 1.0",
            ));
        }

        if [
            self.trait_bias,
            self.short_sleep_protein_bias,
            self.high_stress_carb_bias,
        ]
        .iter()
        .any(|bias| *bias < 0.0 || *bias >= 1.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Macro biases must be in [0, 1)",
            ));
        }

        if !(0.0..=24.0).contains(&self.short_sleep_threshold_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "Short sleep threshold must be between 0 and 24 hours",
            ));
        }

        if self.carb_sensitivity_trait.is_empty() || self.slow_fat_trait.is_empty() {
            return Err(ConfigError::InvalidRange("Trait labels must not be empty"));
        }

        Ok(())
    }
}

/// How normalized macro fractions become whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroRounding {
    /// Round each macro to the nearest percent on its own; the sum may be 99-101
    #[default]
    Independent,
    /// Largest-remainder apportionment; the sum is always exactly 100
    Renormalized,
}

impl fmt::Display for MacroRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Independent => f.write_str("independent"),
            Self::Renormalized => f.write_str("renormalized"),
        }
    }
}

impl FromStr for MacroRounding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "renormalized" | "renormalised" => Ok(Self::Renormalized),
            other => Err(ConfigError::Parse(format!(
                "Unknown macro rounding mode: {other}"
            ))),
        }
    }
}
