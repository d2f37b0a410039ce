// ABOUTME: Plan-derivation engine: marker parsing, plan calculation, and meal filtering
// ABOUTME: Pure, synchronous algorithms over immutable reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

#![deny(unsafe_code)]

//! # `NutreGen` Intelligence
//!
//! The three components of plan derivation:
//!
//! - **markers**: resolve a marker export against the reference table into detected traits
//! - **`plan_calculator`**: calories and macro split from lifestyle input and traits
//! - **meals**: catalog filtering with a deterministic fallback
//!
//! None of them hold mutable state; reference data and configuration are read-only
//! after start-up, so every call is independent and safe to run concurrently.

/// Engine configuration (calorie table, macro rules, rounding)
pub mod config;
/// Marker reference table and file parser
pub mod markers;
/// Meal catalog and filter
pub mod meals;
/// Calorie and macro calculation
pub mod plan_calculator;

pub use config::PlanConfig;
pub use markers::{MarkerParser, MarkerScan, MarkerTable};
pub use meals::{MealCatalog, MealFilter, MealSelection};
pub use plan_calculator::{calculate_plan, PlanCalculation};
