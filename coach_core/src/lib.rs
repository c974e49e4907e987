#![forbid(unsafe_code)]

//! Core domain model and business logic for FitCoach.
//!
//! This crate provides:
//! - Domain types (profile, calculation results, authored content)
//! - Physiology calculations (BMI, BMR, TDEE, macros)
//! - Content store loading, validation and the built-in catalog
//! - Profile-driven content selection with tiered fallback
//! - The coaching tools handed to the conversational agent
//! - Profile and progress persistence, CSV export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod physiology;
pub mod store;
pub mod catalog;
pub mod selector;
pub mod tools;
pub mod storage;
pub mod profile;
pub mod progress;
pub mod export;

// Re-export commonly used types
pub use error::{Error, LookupTier, Result};
pub use types::*;
pub use catalog::default_store;
pub use config::Config;
pub use physiology::{compute_bmi, compute_bmr, compute_macros, compute_tdee};
pub use selector::{select_diet, select_videos, select_workout};
pub use tools::{
    build_coaching_plan, get_diet_plan, get_workout_plan, get_youtube_recommendations,
    CoachingPlan, DietPlan, MealPlan,
};
pub use progress::ProgressLog;
pub use export::write_workout_csv;
