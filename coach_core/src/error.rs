//! Error types for the coach_core library.

use std::fmt;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The tier of the content store at which a lookup failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupTier {
    Goal,
    FitnessLevel,
    Equipment,
    DietPreference,
    Cuisine,
}

impl fmt::Display for LookupTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupTier::Goal => "goal",
            LookupTier::FitnessLevel => "fitness_level",
            LookupTier::Equipment => "equipment",
            LookupTier::DietPreference => "diet_preference",
            LookupTier::Cuisine => "cuisine",
        };
        f.write_str(name)
    }
}

/// Core error type for coach_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile field outside its documented range, or an unknown enum value
    #[error("Validation error: {0}")]
    Validation(String),

    /// Content store lookup miss with no applicable fallback
    #[error("{reason} (goal={goal}, {tier}={key})")]
    NotFound {
        reason: String,
        goal: String,
        tier: LookupTier,
        key: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn not_found(
        reason: impl Into<String>,
        goal: impl fmt::Display,
        tier: LookupTier,
        key: impl fmt::Display,
    ) -> Self {
        Error::NotFound {
            reason: reason.into(),
            goal: goal.to_string(),
            tier,
            key: key.to_string(),
        }
    }

    /// Returns true for content-store misses
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_tier_and_key() {
        let err = Error::not_found(
            "no data for fitness level",
            "fat_loss",
            LookupTier::FitnessLevel,
            "advanced",
        );
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "no data for fitness level (goal=fat_loss, fitness_level=advanced)"
        );
    }
}
