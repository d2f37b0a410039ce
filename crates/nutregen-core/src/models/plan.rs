// ABOUTME: Plan result models: macro split, meal suggestions, and the combined plan record
// ABOUTME: Immutable outputs of the calculator and meal filter consumed by rendering layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized macro fractions before percentage rounding
///
/// Produced by the calculator after flooring and normalization, so the three
/// values always sum to 1.0 (within floating-point error).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroFractions {
    /// Carbohydrate share of calories
    pub carbs: f64,
    /// Fat share of calories
    pub fats: f64,
    /// Protein share of calories
    pub protein: f64,
}

impl MacroFractions {
    /// Sum of the three fractions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.carbs + self.fats + self.protein
    }
}

/// Macro split as whole percentages
///
/// With independent rounding the sum may be 99, 100, or 101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Carbohydrates (% of calories)
    pub carbs: u32,
    /// Fats (% of calories)
    pub fats: u32,
    /// Protein (% of calories)
    pub protein: u32,
}

impl MacroSplit {
    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.carbs + self.fats + self.protein
    }

    /// Convert the split into daily grams for a calorie target
    #[must_use]
    pub fn grams(&self, calories: u32) -> MacroGrams {
        let kcal = f64::from(calories);
        MacroGrams {
            carbs_g: kcal * f64::from(self.carbs) / 100.0 / CARBS_KCAL_PER_G,
            fats_g: kcal * f64::from(self.fats) / 100.0 / FAT_KCAL_PER_G,
            protein_g: kcal * f64::from(self.protein) / 100.0 / PROTEIN_KCAL_PER_G,
        }
    }
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fats (g)
    pub fats_g: f64,
    /// Protein (g)
    pub protein_g: f64,
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Between-meal snack
    Snack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// All slots in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single suggested meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSuggestion {
    /// Slot in the day
    #[serde(rename = "meal")]
    pub slot: MealSlot,
    /// What to eat
    pub idea: String,
    /// Nutrition notes, possibly annotated with cook-time/budget hints
    pub notes: String,
}

/// Derived nutrition plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Daily calorie target (kcal)
    pub calories: u32,
    /// Macro split (% of calories)
    pub macros: MacroSplit,
    /// Up to four meal suggestions, in catalog order
    pub meals: Vec<MealSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_grams_from_split() {
        let split = MacroSplit {
            carbs: 40,
            fats: 30,
            protein: 30,
        };
        let grams = split.grams(1800);
        // 1800 * 0.40 / 4 = 180g carbs, 1800 * 0.30 / 9 = 60g fat, 1800 * 0.30 / 4 = 135g protein
        assert!((grams.carbs_g - 180.0).abs() < 1e-9);
        assert!((grams.fats_g - 60.0).abs() < 1e-9);
        assert!((grams.protein_g - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_meal_suggestion_serializes_slot_as_meal() {
        let meal = MealSuggestion {
            slot: MealSlot::Snack,
            idea: "Hummus with carrot sticks".into(),
            notes: "Fiber".into(),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["meal"], "Snack");
    }
}
