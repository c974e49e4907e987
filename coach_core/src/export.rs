//! CSV export of workout plans.
//!
//! Writes one row per exercise so the plan can be opened in a spreadsheet
//! or printed as a gym sheet.

use crate::{Result, WorkoutResult};
use std::io::Write;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    day: u32,
    day_name: &'a str,
    focus: &'a str,
    exercise: &'a str,
    sets: u32,
    reps: &'a str,
    rest_sec: u32,
    muscle_group: &'a str,
    equipment: &'a str,
}

/// Write a workout plan as CSV to any writer
///
/// Returns the number of exercise rows written.
pub fn write_workout_csv_to<W: Write>(plan: &WorkoutResult, out: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    let mut rows = 0;

    for day in &plan.workout_plan {
        for exercise in &day.exercises {
            writer.serialize(CsvRow {
                day: day.day,
                day_name: &day.name,
                focus: &day.focus,
                exercise: &exercise.name,
                sets: exercise.sets,
                reps: &exercise.reps,
                rest_sec: exercise.rest_sec,
                muscle_group: &exercise.muscle_group,
                equipment: &exercise.equipment,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Write a workout plan as CSV to `path`, replacing any existing file
pub fn write_workout_csv(plan: &WorkoutResult, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    let rows = write_workout_csv_to(plan, &file)?;
    file.sync_all()?;

    tracing::info!("Exported {} exercises to {:?}", rows, path);
    Ok(rows)
}
