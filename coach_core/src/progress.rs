//! Workout and weight progress tracking.
//!
//! The log records which calendar days had a workout and one body-weight
//! reading per day. It backs the streak counter and the weight trend shown
//! on the stats dashboard.

use crate::storage::{
    lock_exclusive, quarantine, read_if_exists, read_locked, write_json_atomic, write_json_locked,
};
use crate::Result;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight: f64,
}

/// Persistent workout/weight history
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ProgressLog {
    #[serde(default)]
    pub sessions: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub weight_log: Vec<WeightEntry>,
}

impl ProgressLog {
    /// Record a workout on `today`; logging the same day twice is a no-op
    ///
    /// Returns true if the day was newly recorded.
    pub fn log_session(&mut self, today: NaiveDate) -> bool {
        let added = self.sessions.insert(today);
        if added {
            tracing::debug!("Logged workout session for {}", today);
        }
        added
    }

    /// Record today's weight, replacing any earlier reading for today
    pub fn log_weight(&mut self, today: NaiveDate, weight_kg: f64) {
        self.weight_log.retain(|e| e.date != today);
        self.weight_log.push(WeightEntry {
            date: today,
            weight: weight_kg,
        });
        tracing::debug!("Logged weight {}kg for {}", weight_kg, today);
    }

    /// Consecutive days with a workout, counting back from `today`
    ///
    /// A day without a workout ends the streak, so the streak is 0 until
    /// today's session has been logged.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = today;
        while self.sessions.contains(&day) {
            streak += 1;
            match day.checked_sub_days(Days::new(1)) {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    /// Difference between the latest and the first weight reading
    pub fn weight_change(&self) -> Option<f64> {
        match (self.weight_log.first(), self.weight_log.last()) {
            (Some(first), Some(last)) if self.weight_log.len() >= 2 => {
                Some(last.weight - first.weight)
            }
            _ => None,
        }
    }

    /// Most recent weight reading
    pub fn latest_weight(&self) -> Option<f64> {
        self.weight_log.last().map(|e| e.weight)
    }

    /// Load the log for display, falling back to an empty log
    ///
    /// A missing file is normal. A corrupted file is logged and ignored
    /// here; [`ProgressLog::update`] moves it aside before writing.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match read_locked(path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::info!("No progress log found, starting fresh");
                return Ok(Self::default());
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read progress log {:?}: {}. Starting fresh.",
                    path,
                    e
                );
                return Ok(Self::default());
            }
        };

        match serde_json::from_str::<ProgressLog>(&contents) {
            Ok(log) => {
                tracing::debug!("Loaded progress log from {:?}", path);
                Ok(log)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse progress log {:?}: {}. Starting fresh.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Atomically save the log
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_locked(path, self)?;
        tracing::debug!("Saved progress log to {:?}", path);
        Ok(())
    }

    /// Load the log, modify it, and save it back
    ///
    /// The whole update runs under the exclusive lock. A log that cannot be
    /// parsed is renamed to `<file>.corrupt` and a fresh log is started.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut ProgressLog),
    {
        let _lock = lock_exclusive(path)?;

        let mut log = match read_if_exists(path)? {
            None => Self::default(),
            Some(contents) => match serde_json::from_str::<ProgressLog>(&contents) {
                Ok(log) => log,
                Err(e) => {
                    let backup = quarantine(path)?;
                    tracing::warn!(
                        "Progress log {:?} is corrupted ({}). Moved it to {:?}.",
                        path,
                        e,
                        backup
                    );
                    Self::default()
                }
            },
        };

        f(&mut log);
        write_json_atomic(path, &log)?;
        tracing::debug!("Saved progress log to {:?}", path);
        Ok(log)
    }
}
