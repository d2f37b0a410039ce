// ABOUTME: Lifestyle questionnaire models: raw form fields and the validated typed input
// ABOUTME: Centralizes every default-substitution rule applied at the input boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Lifestyle input models.
//!
//! Callers hand over a [`LifestyleForm`] exactly as it was submitted (every field
//! optional, every value a string). [`LifestyleInput::from_form`] validates it once
//! and never fails: unknown or unparseable values are replaced with documented
//! defaults so the plan engine always receives a complete, strongly-typed input.

use crate::constants::lifestyle::{
    DEFAULT_SLEEP_HOURS, LOW_BUDGET_SYMBOL, QUICK_COOK_TIME, REGULAR_DIET,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Self-reported activity level
///
/// Matching is exact and case-sensitive (`"Low"`, `"Moderate"`, `"High"`);
/// anything else is [`ActivityLevel::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// Regular moderate exercise
    Moderate,
    /// Hard training most days
    High,
    /// Missing or unrecognized value
    #[default]
    Unspecified,
}

impl ActivityLevel {
    /// Parse a form value, falling back to `Unspecified`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Low" => Self::Low,
            "Moderate" => Self::Moderate,
            "High" => Self::High,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Unspecified => "Unspecified",
        };
        f.write_str(label)
    }
}

/// Body-weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Calorie deficit
    Loss,
    /// Calorie balance
    #[default]
    Maintain,
    /// Calorie surplus
    Gain,
}

impl Goal {
    /// Parse a form value (`"loss"`, `"maintain"`, `"gain"`), falling back to `Maintain`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "loss" => Self::Loss,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    #[default]
    Moderate,
    /// High stress (only exact `"high"` selects this)
    High,
}

impl StressLevel {
    /// Parse a form value (`"low"`, `"moderate"`, `"high"`), falling back to `Moderate`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Moderate,
        }
    }
}

/// Diet restriction applied by the meal filter's diet gate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietFilter {
    /// No restriction (empty value or exactly `"regular"`)
    #[default]
    Regular,
    /// Only meals tagged with this (lower-cased) diet are eligible
    Tag(String),
}

impl DietFilter {
    /// Parse a form value
    ///
    /// Only an empty value or the exact string `"regular"` disables the gate; every
    /// other value is lower-cased and used as a required catalog tag.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == REGULAR_DIET {
            Self::Regular
        } else {
            Self::Tag(value.to_lowercase())
        }
    }

    /// Required tag, if any
    #[must_use]
    pub fn required_tag(&self) -> Option<&str> {
        match self {
            Self::Regular => None,
            Self::Tag(tag) => Some(tag),
        }
    }
}

/// Available cooking time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CookTime {
    /// Under fifteen minutes (form value `"<15"`)
    UnderFifteen,
    /// Any other answer
    #[default]
    Flexible,
}

impl CookTime {
    /// Parse a form value
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == QUICK_COOK_TIME {
            Self::UnderFifteen
        } else {
            Self::Flexible
        }
    }
}

/// Food budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    /// Tight budget (form value `"£"`)
    Low,
    /// Any other answer
    #[default]
    Standard,
}

impl Budget {
    /// Parse a form value
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == LOW_BUDGET_SYMBOL {
            Self::Low
        } else {
            Self::Standard
        }
    }
}

/// Lifestyle answers exactly as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleForm {
    /// Activity level (`Low`, `Moderate`, `High`)
    #[serde(default)]
    pub activity: Option<String>,
    /// Goal (`loss`, `maintain`, `gain`)
    #[serde(default)]
    pub goal: Option<String>,
    /// Diet tag (`regular`, `vegan`, `vegetarian`, ...)
    #[serde(default)]
    pub diet: Option<String>,
    /// Allergy tokens
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Preference tokens
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Average sleep per night, as typed
    #[serde(default)]
    pub sleep_hours: Option<String>,
    /// Stress level (`low`, `moderate`, `high`)
    #[serde(default)]
    pub stress: Option<String>,
    /// Cooking time bucket (`<15`, ...)
    #[serde(default)]
    pub cook_time: Option<String>,
    /// Budget symbol (`£`, ...)
    #[serde(default)]
    pub budget: Option<String>,
    /// Traits the user declares directly, e.g. `High Carb Sensitivity`
    #[serde(default)]
    pub traits: Vec<String>,
}

/// Validated, strongly-typed lifestyle input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInput {
    /// Activity level
    pub activity: ActivityLevel,
    /// Goal
    pub goal: Goal,
    /// Diet gate
    pub diet: DietFilter,
    /// Lower-cased, trimmed allergy tokens
    pub allergies: BTreeSet<String>,
    /// Lower-cased, trimmed preference tokens
    pub preferences: BTreeSet<String>,
    /// Sleep hours per night
    pub sleep_hours: f64,
    /// Stress level
    pub stress: StressLevel,
    /// Cooking time
    pub cook_time: CookTime,
    /// Budget
    pub budget: Budget,
    /// Declared traits, trimmed, in submission order
    pub traits: Vec<String>,
}

impl Default for LifestyleInput {
    fn default() -> Self {
        Self {
            activity: ActivityLevel::default(),
            goal: Goal::default(),
            diet: DietFilter::default(),
            allergies: BTreeSet::new(),
            preferences: BTreeSet::new(),
            sleep_hours: DEFAULT_SLEEP_HOURS,
            stress: StressLevel::default(),
            cook_time: CookTime::default(),
            budget: Budget::default(),
            traits: Vec::new(),
        }
    }
}

impl LifestyleInput {
    /// Validate a submitted form, substituting defaults for anything unusable
    #[must_use]
    pub fn from_form(form: &LifestyleForm) -> Self {
        let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_owned();

        let activity_raw = field(&form.activity);
        let activity = ActivityLevel::parse(&activity_raw);
        if activity == ActivityLevel::Unspecified {
            debug!(value = %activity_raw, "unrecognized activity level, using default calories");
        }

        let sleep_hours = parse_sleep_hours(form.sleep_hours.as_deref());

        Self {
            activity,
            goal: Goal::parse(&field(&form.goal)),
            diet: DietFilter::parse(&field(&form.diet)),
            allergies: normalize_tokens(&form.allergies),
            preferences: normalize_tokens(&form.preferences),
            sleep_hours,
            stress: StressLevel::parse(&field(&form.stress)),
            cook_time: CookTime::parse(&field(&form.cook_time)),
            budget: Budget::parse(&field(&form.budget)),
            traits: form
                .traits
                .iter()
                .map(|declared| declared.trim().to_owned())
                .filter(|declared| !declared.is_empty())
                .collect(),
        }
    }
}

impl From<&LifestyleForm> for LifestyleInput {
    fn from(form: &LifestyleForm) -> Self {
        Self::from_form(form)
    }
}

/// Parse sleep hours, substituting the default for missing or unparseable values
///
/// `NaN` and positive infinity also take the default. Negative infinity is kept,
/// since it still falls below any short-sleep threshold.
#[must_use]
pub fn parse_sleep_hours(value: Option<&str>) -> f64 {
    match value.map(str::trim).map(str::parse::<f64>) {
        Some(Ok(hours)) if !hours.is_nan() && !(hours.is_infinite() && hours.is_sign_positive()) => {
            hours
        }
        _ => {
            debug!(value = ?value, default = DEFAULT_SLEEP_HOURS, "unusable sleep hours, using default");
            DEFAULT_SLEEP_HOURS
        }
    }
}

fn normalize_tokens(tokens: &[String]) -> BTreeSet<String> {
    tokens
        .iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_parsing_is_case_sensitive() {
        assert_eq!(ActivityLevel::parse("High"), ActivityLevel::High);
        assert_eq!(ActivityLevel::parse("high"), ActivityLevel::Unspecified);
        assert_eq!(ActivityLevel::parse(""), ActivityLevel::Unspecified);
    }

    #[test]
    fn test_sleep_hours_defaults() {
        assert!((parse_sleep_hours(Some("5.5")) - 5.5).abs() < f64::EPSILON);
        assert!((parse_sleep_hours(Some(" 8 ")) - 8.0).abs() < f64::EPSILON);
        assert!((parse_sleep_hours(Some("lots")) - 7.0).abs() < f64::EPSILON);
        assert!((parse_sleep_hours(Some("NaN")) - 7.0).abs() < f64::EPSILON);
        assert!((parse_sleep_hours(None) - 7.0).abs() < f64::EPSILON);
        assert!((parse_sleep_hours(Some("inf")) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_infinite_sleep_is_kept() {
        let hours = parse_sleep_hours(Some("-inf"));
        assert!(hours.is_infinite() && hours.is_sign_negative());
    }

    #[test]
    fn test_declared_traits_are_trimmed_in_order() {
        let form = LifestyleForm {
            traits: vec![
                " Slow Fat Metabolism ".into(),
                "   ".into(),
                "High Carb Sensitivity".into(),
            ],
            ..LifestyleForm::default()
        };
        let input = LifestyleInput::from_form(&form);
        assert_eq!(
            input.traits,
            vec!["Slow Fat Metabolism", "High Carb Sensitivity"]
        );
    }

    #[test]
    fn test_diet_regular_is_exact() {
        assert_eq!(DietFilter::parse("regular"), DietFilter::Regular);
        assert_eq!(DietFilter::parse(""), DietFilter::Regular);
        assert_eq!(
            DietFilter::parse("Vegan"),
            DietFilter::Tag("vegan".to_owned())
        );
        assert_eq!(
            DietFilter::parse("Regular").required_tag(),
            Some("regular")
        );
    }

    #[test]
    fn test_empty_form_yields_defaults() {
        let input = LifestyleInput::from_form(&LifestyleForm::default());
        assert_eq!(input, LifestyleInput::default());
    }

    #[test]
    fn test_tokens_are_trimmed_and_lowercased() {
        let form = LifestyleForm {
            allergies: vec![" Nuts ".into(), String::new(), "nuts".into()],
            ..LifestyleForm::default()
        };
        let input = LifestyleInput::from_form(&form);
        assert_eq!(input.allergies.len(), 1);
        assert!(input.allergies.contains("nuts"));
    }
}
