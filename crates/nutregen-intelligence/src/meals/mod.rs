// ABOUTME: Meal suggestion module: fixed catalog and constraint-based filter
// ABOUTME: Narrows the inventory by diet, allergies, and preferences with a fixed fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! # Meals Module
//!
//! The catalog is evaluated in declaration order through three gates:
//!
//! - **diet** (hard): the entry must carry the requested diet tag
//! - **allergy** (hard): the idea text must not mention the allergen or its keywords
//! - **preference** (soft): when preferences are given, one of them must match
//!
//! The first four survivors form the plan. Fewer than four survivors means the
//! filter was too strict and the fixed fallback plan is returned instead.

/// Meal inventory and fallback plan
pub mod catalog;
/// Gates, annotations, and selection
pub mod filter;

pub use catalog::{fallback_meals, MealCatalog, MealCatalogEntry, MealKey};
pub use filter::{
    annotate_notes, passes_allergy_gate, passes_diet_gate, passes_preference_gate, MealFilter,
    MealSelection, BUDGET_ANNOTATION, MEALS_PER_PLAN, QUICK_COOK_ANNOTATION,
};
