//! Loading and validating the content store.
//!
//! On disk the store is a directory with one JSON file per goal in each of
//! three subdirectories:
//!
//! ```text
//! <content_dir>/workouts/<goal>.json
//! <content_dir>/diet_plans/<goal>.json
//! <content_dir>/youtube_videos/<goal>.json
//! ```
//!
//! A missing file is not an error: the goal simply has no content of that
//! kind and lookups against it report `NotFound`.

use crate::selector::ALL_LEVELS;
use crate::{ContentStore, ContentType, FitnessLevel, Goal, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

pub const WORKOUTS_DIR: &str = "workouts";
pub const DIET_PLANS_DIR: &str = "diet_plans";
pub const VIDEOS_DIR: &str = "youtube_videos";

/// Read `<dir>/<goal>.json` for every goal that has a file
fn load_goal_files<T: DeserializeOwned>(dir: &Path) -> Result<BTreeMap<Goal, T>> {
    let mut datasets = BTreeMap::new();

    for goal in Goal::ALL {
        let path = dir.join(format!("{}.json", goal));
        if !path.exists() {
            tracing::debug!("No content file at {:?}", path);
            continue;
        }

        let contents = std::fs::read_to_string(&path)?;
        let dataset: T = serde_json::from_str(&contents)?;
        datasets.insert(*goal, dataset);
    }

    Ok(datasets)
}

impl ContentStore {
    /// Load a content store from a directory of per-goal JSON files
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let store = ContentStore {
            workouts: load_goal_files(&dir.join(WORKOUTS_DIR))?,
            diets: load_goal_files(&dir.join(DIET_PLANS_DIR))?,
            videos: load_goal_files(&dir.join(VIDEOS_DIR))?,
        };

        tracing::info!(
            "Loaded content from {:?}: {} workout, {} diet, {} video datasets",
            dir,
            store.workouts.len(),
            store.diets.len(),
            store.videos.len()
        );
        Ok(store)
    }

    /// Write the store back out in the on-disk layout
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        fn write_all<T: serde::Serialize>(dir: &Path, datasets: &BTreeMap<Goal, T>) -> Result<()> {
            std::fs::create_dir_all(dir)?;
            for (goal, dataset) in datasets {
                let contents = serde_json::to_string_pretty(dataset)?;
                std::fs::write(dir.join(format!("{}.json", goal)), contents)?;
            }
            Ok(())
        }

        write_all(&dir.join(WORKOUTS_DIR), &self.workouts)?;
        write_all(&dir.join(DIET_PLANS_DIR), &self.diets)?;
        write_all(&dir.join(VIDEOS_DIR), &self.videos)?;
        tracing::info!("Saved content to {:?}", dir);
        Ok(())
    }

    /// Validate the authored content for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (goal, dataset) in &self.workouts {
            for (level, plans) in &dataset.levels {
                for (equipment, plan) in &plans.equipment {
                    let at = format!("workouts/{}/{}/{}", goal, level, equipment);
                    if plan.days.is_empty() {
                        errors.push(format!("{}: has no days", at));
                    }
                    for (idx, day) in plan.days.iter().enumerate() {
                        if day.day as usize != idx + 1 {
                            errors.push(format!(
                                "{}: day {} is numbered {}",
                                at,
                                idx + 1,
                                day.day
                            ));
                        }
                        if day.name.is_empty() {
                            errors.push(format!("{}: day {} has empty name", at, day.day));
                        }
                        if day.exercises.is_empty() {
                            errors.push(format!("{}: day {} has no exercises", at, day.day));
                        }
                        for exercise in &day.exercises {
                            if exercise.name.is_empty() {
                                errors.push(format!(
                                    "{}: day {} has an exercise with empty name",
                                    at, day.day
                                ));
                            }
                            if exercise.sets == 0 {
                                errors.push(format!(
                                    "{}: '{}' has zero sets",
                                    at, exercise.name
                                ));
                            }
                        }
                    }
                }
            }
        }

        for (goal, dataset) in &self.diets {
            for (diet, plans) in &dataset.diet_types {
                for (cuisine, meals) in &plans.cuisines {
                    let at = format!("diet_plans/{}/{}/{}", goal, diet, cuisine);
                    if meals.meals.is_empty() {
                        errors.push(format!("{}: has no meals", at));
                    }
                    for (slot, options) in &meals.meals {
                        for meal in options {
                            if meal.name.is_empty() {
                                errors.push(format!("{}/{}: meal with empty name", at, slot));
                            }
                            if meal.calories == 0 {
                                errors.push(format!(
                                    "{}/{}: '{}' has zero calories",
                                    at, slot, meal.name
                                ));
                            }
                        }
                    }
                }
            }
        }

        for (goal, dataset) in &self.videos {
            for video in &dataset.videos {
                let at = format!("youtube_videos/{}", goal);
                if video.title.is_empty() {
                    errors.push(format!("{}: video with empty title", at));
                }
                if video.url.is_empty() {
                    errors.push(format!("{}: '{}' has empty url", at, video.title));
                }
                let level_ok = video.level == ALL_LEVELS
                    || video.level.parse::<FitnessLevel>().is_ok();
                if !level_ok {
                    errors.push(format!(
                        "{}: '{}' has unknown level '{}'",
                        at, video.title, video.level
                    ));
                }
                let kind_ok = matches!(
                    video.kind.parse::<ContentType>(),
                    Ok(ContentType::Workout) | Ok(ContentType::Diet)
                );
                if !kind_ok {
                    errors.push(format!(
                        "{}: '{}' has unknown type '{}'",
                        at, video.title, video.kind
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EquipmentAccess, MealSlot, Video};

    #[test]
    fn test_load_missing_dir_gives_empty_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ContentStore::load_from_dir(&temp_dir.path().join("nope")).unwrap();
        assert_eq!(store, ContentStore::default());
    }

    #[test]
    fn test_load_workout_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join(WORKOUTS_DIR);
        std::fs::create_dir_all(&dir).unwrap();

        let json = r#"{
            "levels": {
                "beginner": {
                    "equipment": {
                        "none": {
                            "days": [
                                {
                                    "day": 1,
                                    "name": "Full Body A",
                                    "focus": "full body",
                                    "exercises": [
                                        {
                                            "name": "Push-up",
                                            "sets": 3,
                                            "reps": "8-10",
                                            "rest_sec": 60,
                                            "muscle_group": "chest",
                                            "equipment": "bodyweight"
                                        }
                                    ]
                                }
                            ]
                        }
                    }
                }
            }
        }"#;
        std::fs::write(dir.join("fat_loss.json"), json).unwrap();

        let store = ContentStore::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(store.workouts.len(), 1);
        assert!(store.diets.is_empty());

        let plan = &store.workouts[&Goal::FatLoss].levels[&FitnessLevel::Beginner].equipment
            [&EquipmentAccess::None];
        assert_eq!(plan.days[0].exercises[0].name, "Push-up");
        assert!(store.validate().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join(VIDEOS_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("weight_gain.json"), "{ invalid json }").unwrap();

        let result = ContentStore::load_from_dir(temp_dir.path());
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = crate::catalog::build_default_store();

        store.save_to_dir(temp_dir.path()).unwrap();
        let loaded = ContentStore::load_from_dir(temp_dir.path()).unwrap();

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_authored_meal_slots_survive_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join(DIET_PLANS_DIR);
        std::fs::create_dir_all(&dir).unwrap();

        let meal = r#"{"name": "Banana", "calories": 100, "protein_g": 1.0, "carbs_g": 27.0,
                       "fat_g": 0.3, "ingredients": ["banana"], "prep_time_min": 0}"#;
        let json = format!(
            r#"{{"diet_types": {{"vegan": {{"cuisines": {{"western": {{"meals": {{
                "breakfast": [{meal}], "snacks": [{meal}], "pre_workout": [{meal}]
            }}}}}}}}}}}}"#
        );
        std::fs::write(dir.join("fat_loss.json"), json).unwrap();

        let store = ContentStore::load_from_dir(temp_dir.path()).unwrap();
        let meals = &store.diets[&Goal::FatLoss].diet_types[&crate::DietPreference::Vegan]
            .cuisines[&crate::CuisinePreference::Western]
            .meals;
        assert!(meals.contains_key(&MealSlot::Other("pre_workout".into())));
        assert!(meals.contains_key(&MealSlot::Snacks));
        assert!(store.validate().is_empty());

        let out_dir = temp_dir.path().join("out");
        store.save_to_dir(&out_dir).unwrap();
        let written =
            std::fs::read_to_string(out_dir.join(DIET_PLANS_DIR).join("fat_loss.json")).unwrap();
        assert!(written.contains("\"pre_workout\""));
        assert!(written.contains("\"snacks\""));
        assert_eq!(ContentStore::load_from_dir(&out_dir).unwrap(), store);
    }

    #[test]
    fn test_validate_reports_bad_videos_and_meals() {
        let mut store = ContentStore::default();
        store.videos.insert(
            Goal::FatLoss,
            crate::VideoDataset {
                videos: vec![Video {
                    title: "Mystery".into(),
                    url: String::new(),
                    kind: "podcast".into(),
                    level: "expert".into(),
                    duration_min: 3,
                    tags: vec![],
                    description: String::new(),
                }],
            },
        );
        let mut cuisine = crate::CuisineMeals::default();
        cuisine.meals.insert(MealSlot::Lunch, vec![]);
        let mut diet = crate::DietTypePlans::default();
        diet.cuisines
            .insert(crate::CuisinePreference::Indian, cuisine);
        let mut dataset = crate::DietDataset::default();
        dataset
            .diet_types
            .insert(crate::DietPreference::Vegan, diet);
        store.diets.insert(Goal::FatLoss, dataset);

        let errors = store.validate();
        assert_eq!(errors.len(), 3, "{:?}", errors);
        assert!(errors.iter().any(|e| e.contains("empty url")));
        assert!(errors.iter().any(|e| e.contains("unknown level 'expert'")));
        assert!(errors.iter().any(|e| e.contains("unknown type 'podcast'")));
    }
}
