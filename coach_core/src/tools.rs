//! Coaching tools exposed to the conversational agent.
//!
//! Each tool combines the calculators and selectors into the structured
//! result the agent presents to the user:
//! - `get_workout_plan`: day-wise workout plan
//! - `get_diet_plan`: BMI, calorie targets, macros and meal suggestions
//! - `get_youtube_recommendations`: video recommendations
//!
//! The `*_for_profile` helpers and [`build_coaching_plan`] take the same
//! inputs from a [`Profile`].

use crate::physiology::{compute_bmi, compute_macros, compute_tdee};
use crate::selector::{select_diet, select_videos, select_workout};
use crate::{
    BmiResult, ContentStore, ContentType, CuisinePreference, DietPreference, DietResult,
    EquipmentAccess, FitnessLevel, Gender, Goal, MacroResult, Profile, Result, TdeeResult,
    VideoResult, WorkoutResult,
};
use serde::{Deserialize, Serialize};

/// Meal suggestions, or the reason none could be found
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MealPlan {
    Found(DietResult),
    Missing { error: String },
}

impl MealPlan {
    pub fn found(&self) -> Option<&DietResult> {
        match self {
            MealPlan::Found(result) => Some(result),
            MealPlan::Missing { .. } => None,
        }
    }
}

/// Output of the diet tool
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    pub bmi: BmiResult,
    pub calories: TdeeResult,
    pub macros: MacroResult,
    pub meal_plan: MealPlan,
}

/// Everything the coach can produce for one profile
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CoachingPlan {
    pub profile_summary: String,
    pub workout: WorkoutResult,
    pub diet: DietPlan,
    pub videos: VideoResult,
}

/// Generate a workout plan from goal, level, equipment and weekly days
pub fn get_workout_plan(
    store: &ContentStore,
    goal: Goal,
    fitness_level: FitnessLevel,
    equipment_access: EquipmentAccess,
    workout_days_per_week: u32,
) -> Result<WorkoutResult> {
    select_workout(
        store,
        goal,
        fitness_level,
        equipment_access,
        workout_days_per_week as usize,
    )
}

/// Generate calorie targets, macros and meal suggestions
///
/// The numeric targets are always returned. A meal lookup miss is reported
/// inside [`DietPlan::meal_plan`] rather than failing the whole plan.
#[allow(clippy::too_many_arguments)]
pub fn get_diet_plan(
    store: &ContentStore,
    goal: Goal,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    diet_preference: DietPreference,
    cuisine_preference: CuisinePreference,
    workout_days_per_week: u32,
    gender: Gender,
) -> DietPlan {
    let bmi = compute_bmi(weight_kg, height_cm);
    let calories = compute_tdee(weight_kg, height_cm, age, workout_days_per_week, goal, gender);
    let macros = compute_macros(calories.target_calories, goal);

    let meal_plan = match select_diet(store, goal, diet_preference, cuisine_preference) {
        Ok(result) => MealPlan::Found(result),
        Err(e) => {
            tracing::warn!("No meal plan: {}", e);
            MealPlan::Missing {
                error: e.to_string(),
            }
        }
    };

    DietPlan {
        bmi,
        calories,
        macros,
        meal_plan,
    }
}

/// Fetch video recommendations for a goal and fitness level
pub fn get_youtube_recommendations(
    store: &ContentStore,
    goal: Goal,
    fitness_level: FitnessLevel,
    content_type: ContentType,
) -> Result<VideoResult> {
    select_videos(store, goal, fitness_level, content_type)
}

pub fn workout_plan_for_profile(store: &ContentStore, profile: &Profile) -> Result<WorkoutResult> {
    get_workout_plan(
        store,
        profile.goal,
        profile.fitness_level,
        profile.equipment_access,
        profile.workout_days_per_week,
    )
}

pub fn diet_plan_for_profile(store: &ContentStore, profile: &Profile) -> DietPlan {
    get_diet_plan(
        store,
        profile.goal,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.diet_preference,
        profile.cuisine_preference,
        profile.workout_days_per_week,
        profile.gender,
    )
}

pub fn videos_for_profile(
    store: &ContentStore,
    profile: &Profile,
    content_type: ContentType,
) -> Result<VideoResult> {
    get_youtube_recommendations(store, profile.goal, profile.fitness_level, content_type)
}

/// Build workout, diet and video recommendations for a validated profile
pub fn build_coaching_plan(
    store: &ContentStore,
    profile: &Profile,
    content_type: ContentType,
) -> Result<CoachingPlan> {
    profile.validate()?;

    Ok(CoachingPlan {
        profile_summary: profile.summary(),
        workout: workout_plan_for_profile(store, profile)?,
        diet: diet_plan_for_profile(store, profile),
        videos: videos_for_profile(store, profile, content_type)?,
    })
}
