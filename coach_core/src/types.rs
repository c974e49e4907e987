//! Core domain types for FitCoach.
//!
//! This module defines the fundamental types used throughout the system:
//! - Profile enumerations (goal, level, diet, cuisine, equipment)
//! - The user profile
//! - Calculation results (BMI, TDEE, macros)
//! - Authored content records and the goal-indexed content store
//! - Selector results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Declares a closed, snake_case string enumeration with `as_str`, `ALL`,
/// `Display` and a validating `FromStr`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(Error::Validation(format!(
                        "unknown {} '{}' (expected one of: {})",
                        $label,
                        other,
                        [$($text),+].join(", ")
                    ))),
                }
            }
        }
    };
}

// ============================================================================
// Profile Enumerations
// ============================================================================

string_enum! {
    /// Biological sex used by the Mifflin-St Jeor equation
    #[derive(Default)]
    Gender, "gender" {
        #[default]
        Male => "male",
        Female => "female",
    }
}

string_enum! {
    /// The user's primary fitness goal
    Goal, "goal" {
        FatLoss => "fat_loss",
        WeightGain => "weight_gain",
        MuscleBuilding => "muscle_building",
        HealthMaintenance => "health_maintenance",
    }
}

string_enum! {
    FitnessLevel, "fitness level" {
        /// New to working out
        Beginner => "beginner",
        /// 6+ months consistent training
        Intermediate => "intermediate",
        /// 2+ years serious training
        Advanced => "advanced",
    }
}

string_enum! {
    DietPreference, "diet preference" {
        Vegetarian => "vegetarian",
        NonVegetarian => "non_vegetarian",
        Vegan => "vegan",
        Eggetarian => "eggetarian",
    }
}

string_enum! {
    CuisinePreference, "cuisine" {
        Indian => "indian",
        Western => "western",
        /// A mix of both; resolved to a concrete cuisine at lookup time
        Flexible => "flexible",
    }
}

string_enum! {
    /// Equipment the user has access to. Declaration order is also the
    /// fallback order used when a requested bucket is missing.
    EquipmentAccess, "equipment" {
        /// Home workouts only
        None => "none",
        /// Dumbbells, resistance bands
        Basic => "basic",
        FullGym => "full_gym",
    }
}

string_enum! {
    /// Kind of video content to recommend
    #[derive(Default)]
    ContentType, "content type" {
        Workout => "workout",
        Diet => "diet",
        #[default]
        Both => "both",
    }
}

/// Time-of-day slot a meal belongs to
///
/// Authored content may use any slot name. The four common slots sort first
/// in day order; anything else is kept verbatim and sorts after them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "String", into = "String")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
    Other(String),
}

impl MealSlot {
    pub fn as_str(&self) -> &str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snacks => "snacks",
            MealSlot::Dinner => "dinner",
            MealSlot::Other(name) => name,
        }
    }
}

impl From<String> for MealSlot {
    fn from(name: String) -> Self {
        match name.as_str() {
            "breakfast" => MealSlot::Breakfast,
            "lunch" => MealSlot::Lunch,
            "snacks" => MealSlot::Snacks,
            "dinner" => MealSlot::Dinner,
            _ => MealSlot::Other(name),
        }
    }
}

impl From<&str> for MealSlot {
    fn from(name: &str) -> Self {
        MealSlot::from(name.to_string())
    }
}

impl From<MealSlot> for String {
    fn from(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Profile
// ============================================================================

/// A user profile, constructed fresh per request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub gender: Gender,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    pub diet_preference: DietPreference,
    pub cuisine_preference: CuisinePreference,
    pub workout_days_per_week: u32,
    pub equipment_access: EquipmentAccess,
}

// ============================================================================
// Calculation Results
// ============================================================================

/// BMI screening category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Daily energy targets in kcal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TdeeResult {
    pub bmr: f64,
    pub maintenance_calories: f64,
    pub target_calories: f64,
    pub adjustment: f64,
}

/// Fraction of daily calories per macronutrient, summing to 1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitPercentages {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroResult {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub split_percentages: SplitPercentages,
}

// ============================================================================
// Authored Content Records
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Free-form rep prescription, e.g. "8-12" or "30 sec"
    pub reps: String,
    pub rest_sec: u32,
    pub muscle_group: String,
    pub equipment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDay {
    pub day: u32,
    pub name: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DietMeal {
    pub name: String,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub ingredients: Vec<String>,
    pub prep_time_min: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub title: String,
    pub url: String,
    /// "workout" or "diet"
    #[serde(rename = "type")]
    pub kind: String,
    /// A fitness level or the wildcard "all"
    pub level: String,
    pub duration_min: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

// ============================================================================
// Content Store
// ============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EquipmentPlan {
    #[serde(default)]
    pub days: Vec<WorkoutDay>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LevelPlans {
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentAccess, EquipmentPlan>,
}

/// Workout content for one goal (`workouts/<goal>.json`)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDataset {
    #[serde(default)]
    pub levels: BTreeMap<FitnessLevel, LevelPlans>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CuisineMeals {
    #[serde(default)]
    pub meals: BTreeMap<MealSlot, Vec<DietMeal>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DietTypePlans {
    #[serde(default)]
    pub cuisines: BTreeMap<CuisinePreference, CuisineMeals>,
}

/// Diet content for one goal (`diet_plans/<goal>.json`)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DietDataset {
    #[serde(default)]
    pub diet_types: BTreeMap<DietPreference, DietTypePlans>,
}

/// Video content for one goal (`youtube_videos/<goal>.json`)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoDataset {
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// The goal-indexed, read-only tree of authored content
///
/// Coverage is intentionally sparse: not every goal, level, equipment,
/// diet or cuisine combination needs to exist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentStore {
    pub workouts: BTreeMap<Goal, WorkoutDataset>,
    pub diets: BTreeMap<Goal, DietDataset>,
    pub videos: BTreeMap<Goal, VideoDataset>,
}

// ============================================================================
// Selector Results
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutResult {
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    /// The equipment that was requested, even when another bucket was used
    pub equipment: EquipmentAccess,
    /// Number of days actually returned
    pub days_per_week: usize,
    pub workout_plan: Vec<WorkoutDay>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DietResult {
    pub goal: Goal,
    pub diet_preference: DietPreference,
    /// The cuisine that was requested, even when resolved from "flexible"
    pub cuisine: CuisinePreference,
    pub meals: BTreeMap<MealSlot, Vec<DietMeal>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoResult {
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    pub content_type: ContentType,
    pub videos: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parse_is_case_insensitive() {
        assert_eq!("Fat_Loss".parse::<Goal>().unwrap(), Goal::FatLoss);
        assert_eq!(
            " full_gym ".parse::<EquipmentAccess>().unwrap(),
            EquipmentAccess::FullGym
        );
    }

    #[test]
    fn test_unknown_enum_value_is_validation_error() {
        let err = "keto".parse::<DietPreference>().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("non_vegetarian"));
    }

    #[test]
    fn test_enum_serde_uses_snake_case() {
        let json = serde_json::to_string(&Goal::MuscleBuilding).unwrap();
        assert_eq!(json, "\"muscle_building\"");
        let level: FitnessLevel = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, FitnessLevel::Advanced);
    }

    #[test]
    fn test_enum_keyed_maps_deserialize() {
        let json = r#"{"levels": {"beginner": {"equipment": {"full_gym": {"days": []}}}}}"#;
        let dataset: WorkoutDataset = serde_json::from_str(json).unwrap();
        let level = &dataset.levels[&FitnessLevel::Beginner];
        assert!(level.equipment.contains_key(&EquipmentAccess::FullGym));
    }

    #[test]
    fn test_meal_slots_sort_in_day_order() {
        let json = r#"{"meals": {"pre_workout": [], "dinner": [], "snacks": [], "breakfast": []}}"#;
        let meals: CuisineMeals = serde_json::from_str(json).unwrap();
        let slots: Vec<_> = meals.meals.keys().cloned().collect();
        assert_eq!(
            slots,
            vec![
                MealSlot::Breakfast,
                MealSlot::Snacks,
                MealSlot::Dinner,
                MealSlot::Other("pre_workout".into()),
            ]
        );
    }

    #[test]
    fn test_meal_slot_names_are_preserved() {
        let json = r#"{"meals":{"snack":[],"snacks":[]}}"#;
        let meals: CuisineMeals = serde_json::from_str(json).unwrap();
        assert_eq!(meals.meals.len(), 2);
        let out = serde_json::to_value(&meals).unwrap();
        assert!(out["meals"]["snack"].is_array());
        assert!(out["meals"]["snacks"].is_array());
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(ContentType::default(), ContentType::Both);
    }

    #[test]
    fn test_video_type_field_rename() {
        let json = r#"{"title":"t","url":"u","type":"diet","level":"all","duration_min":5}"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.kind, "diet");
        assert!(video.tags.is_empty());
    }
}
