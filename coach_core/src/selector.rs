//! Profile-driven content selection.
//!
//! Each selector resolves goal → tier → leaf against the content store:
//! - Workouts: goal → fitness level (strict) → equipment (falls back)
//! - Diets: goal → diet preference (strict) → cuisine (falls back for "flexible")
//! - Videos: goal → level/type filter (falls back to the head of the list)
//!
//! Strict tiers fail with [`Error::NotFound`]. Lenient tiers are where authored
//! coverage is sparse, so they degrade to a documented fallback instead.

use crate::error::LookupTier;
use crate::{
    ContentStore, ContentType, CuisinePreference, DietPreference, DietResult, EquipmentAccess,
    Error, FitnessLevel, Goal, Result, VideoResult, WorkoutResult,
};

/// Videos returned when the level/type filter matches nothing
pub const VIDEO_FALLBACK_LIMIT: usize = 5;

/// Cuisines tried, in order, when "flexible" has no bucket of its own
pub const FLEXIBLE_CUISINE_ORDER: [CuisinePreference; 2] =
    [CuisinePreference::Indian, CuisinePreference::Western];

/// Wildcard video level matching every fitness level
pub const ALL_LEVELS: &str = "all";

/// Select the workout plan for a goal, level and equipment
///
/// ## Resolution
///
/// 1. Goal dataset, then fitness level: a miss on either is `NotFound`.
/// 2. Equipment bucket: on a miss, the first bucket the level does have, in
///    `none`, `basic`, `full_gym` order.
/// 3. The authored days are truncated to `days_per_week`; a shorter plan is
///    returned as-is, never padded.
pub fn select_workout(
    store: &ContentStore,
    goal: Goal,
    fitness_level: FitnessLevel,
    equipment: EquipmentAccess,
    days_per_week: usize,
) -> Result<WorkoutResult> {
    let dataset = store.workouts.get(&goal).ok_or_else(|| {
        Error::not_found("no workout data for goal", goal, LookupTier::Goal, goal)
    })?;

    let level = dataset.levels.get(&fitness_level).ok_or_else(|| {
        Error::not_found(
            "no data for fitness level",
            goal,
            LookupTier::FitnessLevel,
            fitness_level,
        )
    })?;

    let bucket = match level.equipment.get(&equipment) {
        Some(bucket) => bucket,
        None => {
            let (fallback, bucket) = level.equipment.iter().next().ok_or_else(|| {
                Error::not_found(
                    "no equipment data found",
                    goal,
                    LookupTier::Equipment,
                    equipment,
                )
            })?;
            tracing::debug!(
                "No {} workout for {}/{}, falling back to {}",
                equipment,
                goal,
                fitness_level,
                fallback
            );
            bucket
        }
    };

    let workout_plan: Vec<_> = bucket.days.iter().take(days_per_week).cloned().collect();

    tracing::info!(
        "Selected {} workout days for {}/{}/{}",
        workout_plan.len(),
        goal,
        fitness_level,
        equipment
    );

    Ok(WorkoutResult {
        goal,
        fitness_level,
        equipment,
        days_per_week: workout_plan.len(),
        workout_plan,
    })
}

/// Select the meal plan for a goal, diet and cuisine
///
/// A missing cuisine bucket is only recovered when the request is
/// `flexible`, by trying [`FLEXIBLE_CUISINE_ORDER`].
pub fn select_diet(
    store: &ContentStore,
    goal: Goal,
    diet_preference: DietPreference,
    cuisine: CuisinePreference,
) -> Result<DietResult> {
    let dataset = store
        .diets
        .get(&goal)
        .ok_or_else(|| Error::not_found("no diet data for goal", goal, LookupTier::Goal, goal))?;

    let diet_type = dataset.diet_types.get(&diet_preference).ok_or_else(|| {
        Error::not_found(
            "no data for diet preference",
            goal,
            LookupTier::DietPreference,
            diet_preference,
        )
    })?;

    let mut resolved = diet_type.cuisines.get(&cuisine);
    if resolved.is_none() && cuisine == CuisinePreference::Flexible {
        resolved = FLEXIBLE_CUISINE_ORDER.iter().find_map(|c| {
            let found = diet_type.cuisines.get(c);
            if found.is_some() {
                tracing::debug!("Resolved flexible cuisine to {}", c);
            }
            found
        });
    }

    let meals = resolved.ok_or_else(|| {
        Error::not_found("no data for cuisine", goal, LookupTier::Cuisine, cuisine)
    })?;

    Ok(DietResult {
        goal,
        diet_preference,
        cuisine,
        meals: meals.meals.clone(),
    })
}

/// Recommend videos for a goal and fitness level
///
/// Keeps videos whose level is `fitness_level` or `"all"` and whose type
/// matches `content_type` (any type for [`ContentType::Both`]). When nothing
/// matches, the first [`VIDEO_FALLBACK_LIMIT`] videos are returned instead.
pub fn select_videos(
    store: &ContentStore,
    goal: Goal,
    fitness_level: FitnessLevel,
    content_type: ContentType,
) -> Result<VideoResult> {
    let dataset = store.videos.get(&goal).ok_or_else(|| {
        Error::not_found("no youtube data for goal", goal, LookupTier::Goal, goal)
    })?;

    let mut videos: Vec<_> = dataset
        .videos
        .iter()
        .filter(|v| v.level == fitness_level.as_str() || v.level == ALL_LEVELS)
        .filter(|v| content_type == ContentType::Both || v.kind == content_type.as_str())
        .cloned()
        .collect();

    if videos.is_empty() {
        tracing::debug!(
            "No {} videos for {}/{}, using first {}",
            content_type,
            goal,
            fitness_level,
            VIDEO_FALLBACK_LIMIT
        );
        videos = dataset
            .videos
            .iter()
            .take(VIDEO_FALLBACK_LIMIT)
            .cloned()
            .collect();
    }

    Ok(VideoResult {
        goal,
        fitness_level,
        content_type,
        videos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CuisineMeals, DietDataset, DietMeal, DietTypePlans, EquipmentPlan, Exercise, LevelPlans,
        MealSlot, Video, VideoDataset, WorkoutDataset, WorkoutDay,
    };
    use std::collections::BTreeMap;

    fn day(n: u32) -> WorkoutDay {
        WorkoutDay {
            day: n,
            name: format!("Day {}", n),
            focus: "full body".into(),
            exercises: vec![Exercise {
                name: "Squat".into(),
                sets: 3,
                reps: "10".into(),
                rest_sec: 60,
                muscle_group: "legs".into(),
                equipment: "bodyweight".into(),
            }],
        }
    }

    fn meal(name: &str) -> DietMeal {
        DietMeal {
            name: name.into(),
            calories: 400,
            protein_g: 20.0,
            carbs_g: 50.0,
            fat_g: 10.0,
            ingredients: vec!["oats".into()],
            prep_time_min: 10,
        }
    }

    fn video(title: &str, kind: &str, level: &str) -> Video {
        Video {
            title: title.into(),
            url: format!("https://www.youtube.com/watch?v={}", title),
            kind: kind.into(),
            level: level.into(),
            duration_min: 10,
            tags: vec![],
            description: String::new(),
        }
    }

    fn cuisine_with(meal_name: &str) -> CuisineMeals {
        let mut meals = BTreeMap::new();
        meals.insert(MealSlot::Breakfast, vec![meal(meal_name)]);
        CuisineMeals { meals }
    }

    fn create_test_store() -> ContentStore {
        let mut store = ContentStore::default();

        // fat_loss: beginner has basic (5 days) and full_gym (2 days) only
        let mut beginner = LevelPlans::default();
        beginner.equipment.insert(
            EquipmentAccess::Basic,
            EquipmentPlan {
                days: (1..=5).map(day).collect(),
            },
        );
        beginner.equipment.insert(
            EquipmentAccess::FullGym,
            EquipmentPlan {
                days: (1..=2).map(day).collect(),
            },
        );
        let mut workouts = WorkoutDataset::default();
        workouts.levels.insert(FitnessLevel::Beginner, beginner);
        workouts
            .levels
            .insert(FitnessLevel::Advanced, LevelPlans::default());
        store.workouts.insert(Goal::FatLoss, workouts);

        // fat_loss diets: vegetarian has both cuisines, vegan only western
        let mut vegetarian = DietTypePlans::default();
        vegetarian
            .cuisines
            .insert(CuisinePreference::Western, cuisine_with("Greek yogurt bowl"));
        vegetarian
            .cuisines
            .insert(CuisinePreference::Indian, cuisine_with("Moong dal chilla"));
        let mut vegan = DietTypePlans::default();
        vegan
            .cuisines
            .insert(CuisinePreference::Western, cuisine_with("Tofu scramble"));
        let mut diets = DietDataset::default();
        diets.diet_types.insert(DietPreference::Vegetarian, vegetarian);
        diets.diet_types.insert(DietPreference::Vegan, vegan);
        store.diets.insert(Goal::FatLoss, diets);

        store.videos.insert(
            Goal::FatLoss,
            VideoDataset {
                videos: vec![
                    video("v1", "workout", "beginner"),
                    video("v2", "diet", "all"),
                    video("v3", "workout", "intermediate"),
                    video("v4", "workout", "all"),
                ],
            },
        );
        store.videos.insert(
            Goal::WeightGain,
            VideoDataset {
                videos: (1..=7)
                    .map(|i| video(&format!("w{}", i), "workout", "advanced"))
                    .collect(),
            },
        );
        store
            .videos
            .insert(Goal::HealthMaintenance, VideoDataset::default());

        store
    }

    #[test]
    fn test_workout_truncates_to_requested_days() {
        let store = create_test_store();
        let result = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Beginner,
            EquipmentAccess::Basic,
            3,
        )
        .unwrap();

        assert_eq!(result.days_per_week, 3);
        let days: Vec<_> = result.workout_plan.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_workout_never_pads_short_plan() {
        let store = create_test_store();
        let result = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Beginner,
            EquipmentAccess::FullGym,
            6,
        )
        .unwrap();

        assert_eq!(result.days_per_week, 2);
        assert_eq!(result.workout_plan.len(), 2);
    }

    #[test]
    fn test_workout_equipment_falls_back_in_declared_order() {
        crate::logging::init_test();
        let store = create_test_store();
        let result = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Beginner,
            EquipmentAccess::None,
            6,
        )
        .unwrap();

        // basic comes before full_gym, so the 5-day basic plan is used
        assert_eq!(result.workout_plan.len(), 5);
        assert_eq!(result.equipment, EquipmentAccess::None);
    }

    #[test]
    fn test_workout_missing_goal_or_level_is_not_found() {
        let store = create_test_store();

        let err = select_workout(
            &store,
            Goal::WeightGain,
            FitnessLevel::Beginner,
            EquipmentAccess::Basic,
            3,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound { tier: LookupTier::Goal, .. }));

        let err = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Intermediate,
            EquipmentAccess::Basic,
            3,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                tier: LookupTier::FitnessLevel,
                ..
            }
        ));
    }

    #[test]
    fn test_workout_level_without_buckets_is_not_found() {
        let store = create_test_store();
        let err = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Advanced,
            EquipmentAccess::Basic,
            3,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                tier: LookupTier::Equipment,
                ..
            }
        ));
    }

    #[test]
    fn test_diet_exact_cuisine() {
        let store = create_test_store();
        let result = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Vegetarian,
            CuisinePreference::Western,
        )
        .unwrap();
        assert_eq!(result.meals[&MealSlot::Breakfast][0].name, "Greek yogurt bowl");
    }

    #[test]
    fn test_diet_flexible_prefers_indian() {
        let store = create_test_store();
        let result = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Vegetarian,
            CuisinePreference::Flexible,
        )
        .unwrap();
        assert_eq!(result.cuisine, CuisinePreference::Flexible);
        assert_eq!(result.meals[&MealSlot::Breakfast][0].name, "Moong dal chilla");
    }

    #[test]
    fn test_diet_flexible_falls_through_to_western() {
        let store = create_test_store();
        let result = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Vegan,
            CuisinePreference::Flexible,
        )
        .unwrap();
        assert_eq!(result.meals[&MealSlot::Breakfast][0].name, "Tofu scramble");
    }

    #[test]
    fn test_diet_exact_cuisine_miss_is_not_found() {
        let store = create_test_store();
        let err = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Vegan,
            CuisinePreference::Indian,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound { tier: LookupTier::Cuisine, .. }));
    }

    #[test]
    fn test_diet_missing_preference_is_not_found() {
        let store = create_test_store();
        let err = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Eggetarian,
            CuisinePreference::Flexible,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                tier: LookupTier::DietPreference,
                ..
            }
        ));
    }

    #[test]
    fn test_videos_filter_by_level_and_type() {
        let store = create_test_store();

        let both = select_videos(&store, Goal::FatLoss, FitnessLevel::Beginner, ContentType::Both)
            .unwrap();
        let titles: Vec<_> = both.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["v1", "v2", "v4"]);

        let workouts = select_videos(
            &store,
            Goal::FatLoss,
            FitnessLevel::Beginner,
            ContentType::Workout,
        )
        .unwrap();
        let titles: Vec<_> = workouts.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["v1", "v4"]);
    }

    #[test]
    fn test_videos_empty_filter_falls_back_to_first_five() {
        let store = create_test_store();
        let result = select_videos(
            &store,
            Goal::WeightGain,
            FitnessLevel::Beginner,
            ContentType::Diet,
        )
        .unwrap();
        let titles: Vec<_> = result.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["w1", "w2", "w3", "w4", "w5"]);
    }

    #[test]
    fn test_videos_empty_source_returns_empty() {
        let store = create_test_store();
        let result = select_videos(
            &store,
            Goal::HealthMaintenance,
            FitnessLevel::Beginner,
            ContentType::Both,
        )
        .unwrap();
        assert!(result.videos.is_empty());
    }

    #[test]
    fn test_selectors_are_idempotent() {
        let store = create_test_store();
        let first = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Beginner,
            EquipmentAccess::None,
            4,
        )
        .unwrap();
        let second = select_workout(
            &store,
            Goal::FatLoss,
            FitnessLevel::Beginner,
            EquipmentAccess::None,
            4,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let a = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Vegetarian,
            CuisinePreference::Flexible,
        )
        .unwrap();
        let b = select_diet(
            &store,
            Goal::FatLoss,
            DietPreference::Vegetarian,
            CuisinePreference::Flexible,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
