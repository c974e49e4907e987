//! Profile validation, summary and persistence.

use crate::storage::{read_locked, write_json_locked};
use crate::{Error, Profile, Result};
use std::ops::RangeInclusive;
use std::path::Path;

pub const AGE_RANGE: RangeInclusive<u32> = 14..=80;
pub const WORKOUT_DAYS_RANGE: RangeInclusive<u32> = 3..=6;

impl Profile {
    /// Check every field against its documented range
    ///
    /// Fails on the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name must not be empty".into()));
        }
        if !AGE_RANGE.contains(&self.age) {
            return Err(Error::Validation(format!(
                "age {} outside {}-{}",
                self.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(Error::Validation(format!(
                "weight_kg must be positive, got {}",
                self.weight_kg
            )));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(Error::Validation(format!(
                "height_cm must be positive, got {}",
                self.height_cm
            )));
        }
        if !WORKOUT_DAYS_RANGE.contains(&self.workout_days_per_week) {
            return Err(Error::Validation(format!(
                "workout_days_per_week {} outside {}-{}",
                self.workout_days_per_week,
                WORKOUT_DAYS_RANGE.start(),
                WORKOUT_DAYS_RANGE.end()
            )));
        }
        Ok(())
    }

    /// One-line summary handed to the coaching agent as context
    pub fn summary(&self) -> String {
        format!(
            "My profile: Name={}, Age={}, Weight={}kg, Height={}cm, Gender={}, Goal={}, \
             Fitness Level={}, Diet Preference={}, Cuisine={}, Workout Days/Week={}, Equipment={}.",
            self.name,
            self.age,
            self.weight_kg,
            self.height_cm,
            self.gender,
            self.goal,
            self.fitness_level,
            self.diet_preference,
            self.cuisine_preference,
            self.workout_days_per_week,
            self.equipment_access
        )
    }

    /// Load a saved profile
    ///
    /// Returns `Ok(None)` if no profile has been saved. A saved profile that
    /// fails validation is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let Some(contents) = read_locked(path)? else {
            tracing::debug!("No profile found at {:?}", path);
            return Ok(None);
        };

        let profile: Profile = serde_json::from_str(&contents)?;
        profile.validate()?;
        tracing::debug!("Loaded profile for {} from {:?}", profile.name, path);
        Ok(Some(profile))
    }

    /// Validate and atomically save the profile
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        write_json_locked(path, self)?;
        tracing::info!("Saved profile for {} to {:?}", self.name, path);
        Ok(())
    }
}
