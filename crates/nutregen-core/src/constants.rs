// ABOUTME: System-wide constants for the NutreGen plan-derivation engine
// ABOUTME: Service names, energy densities, marker file conventions, and upload limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! # Constants Module
//!
//! Hardcoded constants shared by the engine crates and the front end.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const NUTREGEN_CLI: &str = "nutregen-cli";
    /// Crate target used for log filtering
    pub const LOG_TARGET: &str = "nutregen";
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Carbohydrates: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
}

/// Marker file conventions
pub mod markers {
    /// Prefix that distinguishes marker records from headers and comments
    pub const MARKER_ID_PREFIX: &str = "rs";
    /// Field separator within a marker record
    pub const FIELD_SEPARATOR: char = '\t';
    /// Minimum number of fields (marker id, genotype)
    pub const MIN_FIELDS: usize = 2;
}

/// Lifestyle form tokens with special meaning
pub mod lifestyle {
    /// Diet value that disables the diet gate
    pub const REGULAR_DIET: &str = "regular";
    /// Cook-time bucket for quick meals
    pub const QUICK_COOK_TIME: &str = "<15";
    /// Budget symbol for low-cost meals
    pub const LOW_BUDGET_SYMBOL: &str = "£";
    /// Sleep hours substituted when the field is missing or unparseable
    pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
}

/// Marker file upload limits
pub mod upload {
    /// Only plain-text marker exports are accepted
    pub const ALLOWED_EXTENSION: &str = "txt";
    /// Maximum accepted file size: 10 MiB
    pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
}
