// ABOUTME: Fixed meal inventory in declaration order, addressable by slot and index
// ABOUTME: Also defines the four-meal fallback plan used when filtering is too strict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use nutregen_core::models::{MealSlot, MealSuggestion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

/// Built-in catalog, in the order the filter evaluates it
///
/// Order matters: the filter stops after the fourth match, so earlier entries win.
const BUILTIN_MEALS: [(MealSlot, &str, &str, &[&str]); 12] = [
    (
        MealSlot::Breakfast,
        "Greek yogurt with berries and chia",
        "High protein",
        &["vegetarian", "high-protein", "quick", "gluten-free"],
    ),
    (
        MealSlot::Breakfast,
        "Overnight oats with almond butter",
        "Fiber + healthy fats",
        &["vegan", "vegetarian", "quick", "budget"],
    ),
    (
        MealSlot::Breakfast,
        "Tofu scramble with spinach on whole-grain toast",
        "Plant protein",
        &["vegan", "vegetarian", "high-protein"],
    ),
    (
        MealSlot::Lunch,
        "Grilled chicken salad + olive oil",
        "Balanced fats",
        &["high-protein", "low-carb", "gluten-free"],
    ),
    (
        MealSlot::Lunch,
        "Chickpea quinoa bowl with tahini",
        "Plant protein + fiber",
        &["vegan", "vegetarian", "gluten-free", "budget"],
    ),
    (
        MealSlot::Lunch,
        "Paneer tikka wrap",
        "Protein + calcium",
        &["vegetarian", "indian"],
    ),
    (
        MealSlot::Snack,
        "Apple + handful of almonds",
        "Fiber + fats",
        &["vegan", "vegetarian", "quick", "gluten-free"],
    ),
    (
        MealSlot::Snack,
        "Hummus with carrot sticks",
        "Fiber + plant protein",
        &["vegan", "vegetarian", "quick", "budget", "gluten-free"],
    ),
    (
        MealSlot::Snack,
        "Cottage cheese with pineapple",
        "Slow-digesting protein",
        &["vegetarian", "high-protein", "quick"],
    ),
    (
        MealSlot::Dinner,
        "Salmon, quinoa, and greens",
        "Protein + complex carbs",
        &["pescatarian", "high-protein", "gluten-free", "omega-3"],
    ),
    (
        MealSlot::Dinner,
        "Garlic prawn stir-fry with rice noodles",
        "Lean protein",
        &["pescatarian", "quick", "gluten-free"],
    ),
    (
        MealSlot::Dinner,
        "Lentil dahl with brown rice",
        "Plant protein + fiber",
        &["vegan", "vegetarian", "indian", "budget", "gluten-free"],
    ),
];

/// Plan returned verbatim when fewer than four catalog entries survive filtering
const FALLBACK_MEALS: [(MealSlot, &str, &str); 4] = [
    (
        MealSlot::Breakfast,
        "Overnight oats with berries",
        "Slow-release carbs",
    ),
    (MealSlot::Lunch, "Black bean & veggie wrap", "Plant protein + fiber"),
    (MealSlot::Snack, "Banana + peanut butter", "Quick energy"),
    (
        MealSlot::Dinner,
        "Tofu stir-fry with brown rice",
        "Balanced macros",
    ),
];

static BUILTIN_CATALOG: OnceLock<MealCatalog> = OnceLock::new();

/// Stable address of a catalog entry: its slot and its position within that slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MealKey {
    /// Meal slot
    pub slot: MealSlot,
    /// Zero-based position among entries of the same slot, in declaration order
    pub index: usize,
}

impl fmt::Display for MealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.slot, self.index)
    }
}

/// One entry of the meal inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCatalogEntry {
    /// Meal slot
    pub slot: MealSlot,
    /// What to eat
    pub idea: String,
    /// Nutrition notes
    pub notes: String,
    /// Lower-case tags (diet types, attributes)
    pub tags: BTreeSet<String>,
}

impl MealCatalogEntry {
    /// Create an entry; tags are lower-cased
    #[must_use]
    pub fn new(slot: MealSlot, idea: &str, notes: &str, tags: &[&str]) -> Self {
        Self {
            slot,
            idea: idea.to_owned(),
            notes: notes.to_owned(),
            tags: tags.iter().map(|tag| tag.to_lowercase()).collect(),
        }
    }

    /// Whether the entry carries `tag` (already lower-cased)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Suggestion with the entry's own notes
    #[must_use]
    pub fn to_suggestion(&self) -> MealSuggestion {
        MealSuggestion {
            slot: self.slot,
            idea: self.idea.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Ordered, immutable meal inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCatalog {
    entries: Vec<MealCatalogEntry>,
}

impl MealCatalog {
    /// Build a catalog; evaluation follows the given order
    #[must_use]
    pub const fn new(entries: Vec<MealCatalogEntry>) -> Self {
        Self { entries }
    }

    /// The compiled-in twelve-entry catalog
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(|| {
            Self::new(
                BUILTIN_MEALS
                    .iter()
                    .map(|(slot, idea, notes, tags)| MealCatalogEntry::new(*slot, idea, notes, tags))
                    .collect(),
            )
        })
    }

    /// Entries in evaluation order
    #[must_use]
    pub fn entries(&self) -> &[MealCatalogEntry] {
        &self.entries
    }

    /// Entries paired with their stable keys, in evaluation order
    #[must_use]
    pub fn keyed_entries(&self) -> Vec<(MealKey, &MealCatalogEntry)> {
        let mut per_slot = [0_usize; MealSlot::ALL.len()];
        self.entries
            .iter()
            .map(|entry| {
                let counter = &mut per_slot[entry.slot as usize];
                let key = MealKey {
                    slot: entry.slot,
                    index: *counter,
                };
                *counter += 1;
                (key, entry)
            })
            .collect()
    }

    /// Look up an entry by key
    #[must_use]
    pub fn get(&self, key: MealKey) -> Option<&MealCatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.slot == key.slot)
            .nth(key.index)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The fixed fallback plan, one meal per slot
#[must_use]
pub fn fallback_meals() -> Vec<MealSuggestion> {
    FALLBACK_MEALS
        .iter()
        .map(|(slot, idea, notes)| MealSuggestion {
            slot: *slot,
            idea: (*idea).to_owned(),
            notes: (*notes).to_owned(),
        })
        .collect()
}
