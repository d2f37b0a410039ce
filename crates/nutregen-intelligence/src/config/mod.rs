// ABOUTME: Plan engine configuration with defaults, environment overrides, and validation
// ABOUTME: Provides the PlanConfig container and its process-wide read-only instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Plan Engine Configuration Module
//!
//! - `plan` - Calorie table, macro biases and floors, rounding strategy
//! - `error` - Validation and parse errors
//!
//! Defaults reproduce the reference rule set exactly. `NUTREGEN_*` environment
//! variables may override individual values; the result is validated before use.

pub mod error;
pub mod plan;

pub use error::ConfigError;
pub use plan::{CalorieConfig, MacroBiasConfig, MacroRounding};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLAN_CONFIG: OnceLock<PlanConfig> = OnceLock::new();

/// Main plan engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Calorie table and goal adjustments
    pub calories: CalorieConfig,
    /// Macro baseline, biases, and floors
    pub macros: MacroBiasConfig,
    /// Percentage rounding strategy
    pub rounding: MacroRounding,
}

impl PlanConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load plan config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found in any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calories.validate()?;
        self.macros.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Calorie table
        Self::apply_env_var(
            "NUTREGEN_CALORIES_LOW",
            &mut self.calories.low_activity_kcal,
        )?;
        Self::apply_env_var(
            "NUTREGEN_CALORIES_MODERATE",
            &mut self.calories.moderate_activity_kcal,
        )?;
        Self::apply_env_var(
            "NUTREGEN_CALORIES_HIGH",
            &mut self.calories.high_activity_kcal,
        )?;
        Self::apply_env_var(
            "NUTREGEN_CALORIES_DEFAULT",
            &mut self.calories.unspecified_activity_kcal,
        )?;
        Self::apply_env_var(
            "NUTREGEN_GOAL_DEFICIT",
            &mut self.calories.loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            "NUTREGEN_GOAL_SURPLUS",
            &mut self.calories.gain_surplus_kcal,
        )?;

        // Macro rules
        Self::apply_env_var(
            "NUTREGEN_SHORT_SLEEP_HOURS",
            &mut self.macros.short_sleep_threshold_hours,
        )?;
        Self::apply_env_var("NUTREGEN_MACRO_ROUNDING", &mut self.rounding)?;

        Ok(self)
    }
}
