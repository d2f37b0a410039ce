// ABOUTME: Main library entry point for the NutreGen plan-derivation service
// ABOUTME: Combines marker parsing, plan calculation, and meal filtering into plan reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

#![deny(unsafe_code)]

//! # `NutreGen`
//!
//! Derives a daily nutrition plan from a genetic-marker export and a short
//! lifestyle questionnaire: a calorie target, a carbohydrate/fat/protein split,
//! and four meal suggestions.
//!
//! ## Architecture
//!
//! - **`nutregen-core`**: errors, lifestyle and plan models, constants
//! - **`nutregen-intelligence`**: marker parser, plan calculator, meal filter
//! - **engine**: [`engine::PlanEngine`] runs all three and builds a [`engine::PlanReport`]
//! - **upload**: validated loading of marker files from disk
//! - **config**: front-end configuration from environment variables
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutregen::engine::PlanEngine;
//! use nutregen::models::{LifestyleForm, LifestyleInput};
//!
//! let engine = PlanEngine::from_globals();
//! let form = LifestyleForm {
//!     activity: Some("High".to_owned()),
//!     goal: Some("loss".to_owned()),
//!     ..LifestyleForm::default()
//! };
//! let report = engine.derive(["rs1801282\tGG"], &LifestyleInput::from_form(&form));
//! println!("{} kcal", report.plan.calories);
//! ```

/// Front-end configuration from environment variables
pub mod config;

/// Plan engine combining parser, calculator, and filter
pub mod engine;

/// Logging configuration and subscriber setup
pub mod logging;

/// Marker file loading with extension and size checks
pub mod upload;

pub use nutregen_core::{constants, errors, models};
pub use nutregen_intelligence as intelligence;
