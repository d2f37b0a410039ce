// ABOUTME: Constraint-based meal selection: diet, allergy, and soft preference gates
// ABOUTME: Annotates survivors, caps at four, and swaps in the fallback plan when too strict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use super::catalog::{fallback_meals, MealCatalog, MealCatalogEntry};
use nutregen_core::models::{Budget, CookTime, DietFilter, LifestyleInput, MealSuggestion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Number of meals in a plan
pub const MEALS_PER_PLAN: usize = 4;

/// Appended to notes when the user has under fifteen minutes to cook
pub const QUICK_COOK_ANNOTATION: &str = " • ~<20m";

/// Appended to notes when the user is on a tight budget
pub const BUDGET_ANNOTATION: &str = " • Budget";

/// Notes already mentioning this are left unannotated
const BUDGET_MARKER: &str = "Budget";

/// Allergy tokens with ingredient keywords checked against the lower-cased idea text
const ALLERGY_KEYWORDS: [(&str, &[&str]); 6] = [
    ("dairy", &["yogurt", "paneer", "cheese", "milk"]),
    ("eggs", &["egg"]),
    ("shellfish", &["prawn", "shrimp", "crab", "lobster"]),
    ("soy", &["tofu"]),
    ("gluten", &["bread", "wrap", "pasta", "wheat"]),
    ("nuts", &["almond", "peanut", "cashew", "walnut", "nut"]),
];

/// Filter outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSelection {
    /// Selected meals (always four)
    pub meals: Vec<MealSuggestion>,
    /// Whether the fixed fallback plan replaced the filtered result
    pub fallback: bool,
    /// Catalog entries that passed every gate before the cap was reached
    pub matched: usize,
}

impl MealSelection {
    /// Whether the fallback plan was used
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Meal filter over a catalog
#[derive(Debug, Clone, Copy)]
pub struct MealFilter<'a> {
    catalog: &'a MealCatalog,
}

impl<'a> MealFilter<'a> {
    /// Create a filter over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a MealCatalog) -> Self {
        Self { catalog }
    }

    /// Select up to four meals for the input
    ///
    /// Entries are evaluated in catalog order and collection stops at the fourth
    /// survivor, so later entries are never considered. With fewer than four
    /// survivors the partial result is discarded in favour of the fallback plan.
    #[must_use]
    pub fn select(&self, input: &LifestyleInput) -> MealSelection {
        let meals: Vec<MealSuggestion> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| passes_diet_gate(entry, &input.diet))
            .filter(|entry| passes_allergy_gate(entry, &input.allergies))
            .filter(|entry| passes_preference_gate(entry, &input.preferences))
            .take(MEALS_PER_PLAN)
            .map(|entry| MealSuggestion {
                notes: annotate_notes(&entry.notes, input.cook_time, input.budget),
                ..entry.to_suggestion()
            })
            .collect();

        let matched = meals.len();
        if matched < MEALS_PER_PLAN {
            info!(matched, "meal filter too strict, using fallback plan");
            return MealSelection {
                meals: fallback_meals(),
                fallback: true,
                matched,
            };
        }

        debug!(matched, "meal filter selected catalog meals");
        MealSelection {
            meals,
            fallback: false,
            matched,
        }
    }
}

/// Diet gate: with a diet other than `regular`, the entry must carry that tag
#[must_use]
pub fn passes_diet_gate(entry: &MealCatalogEntry, diet: &DietFilter) -> bool {
    diet.required_tag()
        .map_or(true, |tag| entry.has_tag(&tag.to_lowercase()))
}

/// Allergy gate: reject on a literal token match or any keyword of a known allergen
#[must_use]
pub fn passes_allergy_gate(entry: &MealCatalogEntry, allergies: &BTreeSet<String>) -> bool {
    let idea = entry.idea.to_lowercase();
    !allergies.iter().any(|allergy| {
        let allergy = allergy.to_lowercase();
        idea.contains(&allergy)
            || ALLERGY_KEYWORDS
                .iter()
                .find(|(token, _)| *token == allergy)
                .is_some_and(|(_, keywords)| keywords.iter().any(|keyword| idea.contains(keyword)))
    })
}

/// Preference gate: with any preferences, at least one must match a tag or the idea text
#[must_use]
pub fn passes_preference_gate(entry: &MealCatalogEntry, preferences: &BTreeSet<String>) -> bool {
    if preferences.is_empty() {
        return true;
    }
    let idea = entry.idea.to_lowercase();
    preferences.iter().any(|preference| {
        let preference = preference.to_lowercase();
        entry.has_tag(&preference) || idea.contains(&preference)
    })
}

/// Append cook-time and budget hints to a surviving entry's notes
#[must_use]
pub fn annotate_notes(notes: &str, cook_time: CookTime, budget: Budget) -> String {
    let mut annotated = notes.to_owned();
    if cook_time == CookTime::UnderFifteen && !annotated.contains(BUDGET_MARKER) {
        annotated.push_str(QUICK_COOK_ANNOTATION);
    }
    if budget == Budget::Low && !annotated.contains(BUDGET_MARKER) {
        annotated.push_str(BUDGET_ANNOTATION);
    }
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutregen_core::models::MealSlot;

    fn entry(idea: &str, tags: &[&str]) -> MealCatalogEntry {
        MealCatalogEntry::new(MealSlot::Lunch, idea, "Notes", tags)
    }

    fn tokens(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn test_allergy_keyword_matches_without_tag() {
        let wrap = entry("Paneer tikka wrap", &["vegetarian"]);
        assert!(!passes_allergy_gate(&wrap, &tokens(&["gluten"])));
        assert!(!passes_allergy_gate(&wrap, &tokens(&["dairy"])));
        assert!(passes_allergy_gate(&wrap, &tokens(&["shellfish"])));
    }

    #[test]
    fn test_eggs_allergy_matches_egg_keyword() {
        let rice = entry("Egg fried rice", &["vegetarian"]);
        assert!(!passes_allergy_gate(&rice, &tokens(&["eggs"])));
        assert!(!passes_allergy_gate(&rice, &tokens(&["Eggs"])));
        assert!(passes_allergy_gate(&rice, &tokens(&["nuts"])));
    }

    #[test]
    fn test_allergy_literal_substring() {
        let salad = entry("Grilled chicken salad", &[]);
        assert!(!passes_allergy_gate(&salad, &tokens(&["chicken"])));
    }

    #[test]
    fn test_preference_matches_tag_or_idea() {
        let dahl = entry("Lentil dahl with brown rice", &["indian"]);
        assert!(passes_preference_gate(&dahl, &tokens(&["indian"])));
        assert!(passes_preference_gate(&dahl, &tokens(&["lentil"])));
        assert!(!passes_preference_gate(&dahl, &tokens(&["pasta"])));
        assert!(passes_preference_gate(&dahl, &BTreeSet::new()));
    }

    #[test]
    fn test_annotations_stack() {
        assert_eq!(
            annotate_notes("High protein", CookTime::UnderFifteen, Budget::Low),
            "High protein • ~<20m • Budget"
        );
        assert_eq!(
            annotate_notes("Budget staple", CookTime::UnderFifteen, Budget::Low),
            "Budget staple"
        );
        assert_eq!(
            annotate_notes("High protein", CookTime::Flexible, Budget::Standard),
            "High protein"
        );
    }
}
