// ABOUTME: Core data models for lifestyle input and derived nutrition plans
// ABOUTME: Re-exports lifestyle enums, macro types, meal suggestions, and plan results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! # Data Models
//!
//! - `lifestyle`: raw [`LifestyleForm`] and the validated [`LifestyleInput`]
//! - `plan`: [`MacroSplit`], [`MealSuggestion`], and [`PlanResult`]

/// Lifestyle questionnaire models and boundary validation
pub mod lifestyle;
/// Plan outputs: macros, meals, plan record
pub mod plan;

pub use lifestyle::{
    parse_sleep_hours, ActivityLevel, Budget, CookTime, DietFilter, Goal, LifestyleForm,
    LifestyleInput, StressLevel,
};
pub use plan::{
    MacroFractions, MacroGrams, MacroSplit, MealSlot, MealSuggestion, PlanResult,
};
