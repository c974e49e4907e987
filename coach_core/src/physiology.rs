//! Body-composition and energy-target calculations.
//!
//! Closed-form formulas over a small numeric profile:
//! - BMI with the standard four screening categories
//! - BMR via the Mifflin-St Jeor equation
//! - TDEE from workout frequency plus a goal-based calorie adjustment
//! - Macronutrient grams from a per-goal calorie split (4/4/9 kcal per gram)
//!
//! All rounding is round-half-to-even, so a value like `2.5` rounds to `2`.
//! Every function is total over its documented domain; lookup tables fall
//! back to a documented default instead of failing.

use crate::{
    BmiCategory, BmiResult, Gender, Goal, MacroResult, MacroSplit, SplitPercentages, TdeeResult,
};

/// Activity multiplier used when the workout-day count is not in the table
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Round half-to-even to the given number of decimal places
///
/// Formatting rounds the exact binary value, so 24.95 (stored as
/// 24.9499...) rounds down to 24.9 instead of up through `value * 10`.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Compute BMI and its category
///
/// The category thresholds are applied to the rounded value, so a raw BMI
/// of 24.96 reports as 25.0 / Overweight. `height_cm` must be positive.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let bmi = round_to(weight_kg / (height_m * height_m), 1);

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    BmiResult { bmi, category }
}

/// Basal Metabolic Rate (Mifflin-St Jeor), rounded to whole kcal
///
/// `10·weight + 6.25·height − 5·age`, then `+5` for males or `−161` for females.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };
    round_to(bmr, 0)
}

/// Activity multiplier for a number of workout days per week
///
/// Counts outside 3-6 silently use [`DEFAULT_ACTIVITY_MULTIPLIER`].
pub fn activity_multiplier(workout_days: u32) -> f64 {
    match workout_days {
        3 => 1.375,
        4 => 1.465,
        5 => 1.55,
        6 => 1.725,
        _ => DEFAULT_ACTIVITY_MULTIPLIER,
    }
}

/// Daily calorie adjustment applied on top of maintenance
pub fn calorie_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => -500.0,
        Goal::WeightGain => 400.0,
        Goal::MuscleBuilding => 300.0,
        Goal::HealthMaintenance => 0.0,
    }
}

/// Protein/carbs/fat calorie fractions for a goal
pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::FatLoss => MacroSplit {
            protein: 0.40,
            carbs: 0.30,
            fat: 0.30,
        },
        Goal::WeightGain => MacroSplit {
            protein: 0.25,
            carbs: 0.50,
            fat: 0.25,
        },
        Goal::MuscleBuilding => MacroSplit {
            protein: 0.35,
            carbs: 0.40,
            fat: 0.25,
        },
        Goal::HealthMaintenance => MacroSplit {
            protein: 0.30,
            carbs: 0.40,
            fat: 0.30,
        },
    }
}

/// Compute BMR, maintenance and target calories
pub fn compute_tdee(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    workout_days: u32,
    goal: Goal,
    gender: Gender,
) -> TdeeResult {
    let bmr = compute_bmr(weight_kg, height_cm, age, gender);
    let multiplier = activity_multiplier(workout_days);
    let maintenance_calories = round_to(bmr * multiplier, 0);
    let adjustment = calorie_adjustment(goal);
    let target_calories = round_to(maintenance_calories + adjustment, 0);

    tracing::debug!(
        "TDEE: bmr={} multiplier={} maintenance={} target={}",
        bmr,
        multiplier,
        maintenance_calories,
        target_calories
    );

    TdeeResult {
        bmr,
        maintenance_calories,
        target_calories,
        adjustment,
    }
}

/// Convert a calorie target into macronutrient grams
///
/// Grams are rounded; the reported split percentages are truncated, not
/// rounded.
pub fn compute_macros(target_calories: f64, goal: Goal) -> MacroResult {
    let split = macro_split(goal);

    MacroResult {
        protein_g: round_to(target_calories * split.protein / KCAL_PER_GRAM_PROTEIN, 0),
        carbs_g: round_to(target_calories * split.carbs / KCAL_PER_GRAM_CARBS, 0),
        fat_g: round_to(target_calories * split.fat / KCAL_PER_GRAM_FAT, 0),
        split_percentages: SplitPercentages {
            protein: (split.protein * 100.0) as u32,
            carbs: (split.carbs * 100.0) as u32,
            fat: (split.fat * 100.0) as u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value_and_category() {
        let result = compute_bmi(70.0, 175.0);
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        // height 100cm makes bmi == weight
        assert_eq!(compute_bmi(18.4, 100.0).category, BmiCategory::Underweight);
        assert_eq!(compute_bmi(18.5, 100.0).category, BmiCategory::Normal);
        assert_eq!(compute_bmi(24.9, 100.0).category, BmiCategory::Normal);
        assert_eq!(compute_bmi(25.0, 100.0).category, BmiCategory::Overweight);
        assert_eq!(compute_bmi(29.9, 100.0).category, BmiCategory::Overweight);
        assert_eq!(compute_bmi(30.0, 100.0).category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_category_uses_rounded_value() {
        let result = compute_bmi(24.96, 100.0);
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_bmi_rounds_exact_binary_value() {
        // 99.8 / 4 is stored just below 24.95
        let result = compute_bmi(99.8, 200.0);
        assert_eq!(result.bmi, 24.9);
        assert_eq!(result.category, BmiCategory::Normal);

        // 30.2 / 4 is stored just below 7.55
        assert_eq!(compute_bmi(30.2, 200.0).bmi, 7.5);
    }

    #[test]
    fn test_bmr_male() {
        // 700 + 1093.75 - 150 + 5 = 1648.75
        assert_eq!(compute_bmr(70.0, 175.0, 30, Gender::Male), 1649.0);
    }

    #[test]
    fn test_bmr_female() {
        // 700 + 1093.75 - 150 - 161 = 1482.75
        assert_eq!(compute_bmr(70.0, 175.0, 30, Gender::Female), 1483.0);
    }

    #[test]
    fn test_bmr_rounds_half_to_even() {
        // 10*60 + 6.25*162 - 5*30 + 5 = 1467.5
        assert_eq!(compute_bmr(60.0, 162.0, 30, Gender::Male), 1468.0);
        // 10*60 + 6.25*166 - 5*30 + 5 = 1492.5
        assert_eq!(compute_bmr(60.0, 166.0, 30, Gender::Male), 1492.0);
    }

    #[test]
    fn test_tdee_fat_loss() {
        let result = compute_tdee(70.0, 175.0, 30, 5, Goal::FatLoss, Gender::Male);
        assert_eq!(result.bmr, 1649.0);
        assert_eq!(result.maintenance_calories, 2556.0);
        assert_eq!(result.adjustment, -500.0);
        assert_eq!(result.target_calories, 2056.0);
    }

    #[test]
    fn test_tdee_goal_adjustments() {
        let gain = compute_tdee(70.0, 175.0, 30, 5, Goal::WeightGain, Gender::Male);
        assert_eq!(gain.target_calories, 2956.0);
        let muscle = compute_tdee(70.0, 175.0, 30, 5, Goal::MuscleBuilding, Gender::Male);
        assert_eq!(muscle.target_calories, 2856.0);
        let maintain = compute_tdee(70.0, 175.0, 30, 5, Goal::HealthMaintenance, Gender::Male);
        assert_eq!(maintain.target_calories, maintain.maintenance_calories);
    }

    #[test]
    fn test_activity_multiplier_table() {
        assert_eq!(activity_multiplier(3), 1.375);
        assert_eq!(activity_multiplier(4), 1.465);
        assert_eq!(activity_multiplier(5), 1.55);
        assert_eq!(activity_multiplier(6), 1.725);
    }

    #[test]
    fn test_out_of_range_days_use_default_multiplier() {
        assert_eq!(activity_multiplier(7), DEFAULT_ACTIVITY_MULTIPLIER);
        assert_eq!(activity_multiplier(0), DEFAULT_ACTIVITY_MULTIPLIER);

        let seven = compute_tdee(70.0, 175.0, 30, 7, Goal::FatLoss, Gender::Male);
        let five = compute_tdee(70.0, 175.0, 30, 5, Goal::FatLoss, Gender::Male);
        assert_eq!(seven, five);
    }

    #[test]
    fn test_macros_fat_loss() {
        let macros = compute_macros(2056.0, Goal::FatLoss);
        assert_eq!(macros.protein_g, 206.0);
        assert_eq!(macros.carbs_g, 154.0);
        assert_eq!(macros.fat_g, 69.0);
        assert_eq!(
            macros.split_percentages,
            SplitPercentages {
                protein: 40,
                carbs: 30,
                fat: 30
            }
        );
    }

    #[test]
    fn test_macro_splits_sum_to_one() {
        for goal in Goal::ALL {
            let split = macro_split(*goal);
            assert!((split.protein + split.carbs + split.fat - 1.0).abs() < 1e-9);

            let pct = compute_macros(2000.0, *goal).split_percentages;
            assert_eq!(pct.protein + pct.carbs + pct.fat, 100, "goal {}", goal);
        }
    }

    #[test]
    fn test_macros_muscle_building() {
        let macros = compute_macros(2856.0, Goal::MuscleBuilding);
        // 2856*0.35/4 = 249.9, 2856*0.40/4 = 285.6, 2856*0.25/9 = 79.33
        assert_eq!(macros.protein_g, 250.0);
        assert_eq!(macros.carbs_g, 286.0);
        assert_eq!(macros.fat_g, 79.0);
        assert_eq!(macros.split_percentages.protein, 35);
    }
}
