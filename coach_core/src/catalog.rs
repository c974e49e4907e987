//! Built-in content store.
//!
//! A small authored set of workouts, meals and video recommendations used
//! when no content directory is configured. Coverage is deliberately sparse
//! so the selector fallbacks stay meaningful.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default store - built once and shared by every caller
static DEFAULT_STORE: Lazy<ContentStore> = Lazy::new(build_default_store);

/// Get a reference to the cached built-in store
pub fn default_store() -> &'static ContentStore {
    &DEFAULT_STORE
}

/// Build the built-in store from scratch
///
/// **Note**: Prefer `default_store()`, which returns a cached reference.
pub fn build_default_store() -> ContentStore {
    let mut store = ContentStore::default();

    for goal in Goal::ALL {
        store.workouts.insert(*goal, build_workouts(*goal));
        store.diets.insert(*goal, build_diets(*goal));
        store.videos.insert(*goal, build_videos(*goal));
    }

    store
}

// ============================================================================
// Workouts
// ============================================================================

/// A day template: (day number, working sets) -> day
type DayTemplate = fn(u32, u32) -> WorkoutDay;

fn ex(
    name: &str,
    sets: u32,
    reps: &str,
    rest_sec: u32,
    muscle_group: &str,
    equipment: &str,
) -> Exercise {
    Exercise {
        name: name.into(),
        sets,
        reps: reps.into(),
        rest_sec,
        muscle_group: muscle_group.into(),
        equipment: equipment.into(),
    }
}

fn day(n: u32, name: &str, focus: &str, exercises: Vec<Exercise>) -> WorkoutDay {
    WorkoutDay {
        day: n,
        name: name.into(),
        focus: focus.into(),
        exercises,
    }
}

fn bodyweight_full_body(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Bodyweight Full Body", "full body strength", vec![
        ex("Bodyweight Squat", sets, "12-15", 60, "legs", "bodyweight"),
        ex("Push-up", sets, "8-12", 60, "chest", "bodyweight"),
        ex("Glute Bridge", sets, "15", 45, "glutes", "bodyweight"),
        ex("Superman Hold", sets, "30 sec", 45, "back", "bodyweight"),
        ex("Plank", sets, "30-45 sec", 45, "core", "bodyweight"),
    ])
}

fn bodyweight_hiit(n: u32, sets: u32) -> WorkoutDay {
    day(n, "HIIT Circuit", "conditioning", vec![
        ex("Jumping Jacks", sets, "40 sec", 20, "full body", "bodyweight"),
        ex("Mountain Climber", sets, "30 sec", 30, "core", "bodyweight"),
        ex("Jump Squat", sets, "12", 30, "legs", "bodyweight"),
        ex("Burpee", sets, "10", 45, "full body", "bodyweight"),
        ex("High Knees", sets, "30 sec", 30, "cardio", "bodyweight"),
    ])
}

fn mobility_core(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Mobility & Core", "mobility and core stability", vec![
        ex("Cat-Cow", 1, "10", 0, "spine", "bodyweight"),
        ex("World's Greatest Stretch", 1, "5 per side", 0, "hips", "bodyweight"),
        ex("Dead Bug", sets, "10 per side", 45, "core", "bodyweight"),
        ex("Bird Dog", sets, "10 per side", 45, "core", "bodyweight"),
        ex("Side Plank", sets, "20-30 sec per side", 45, "obliques", "bodyweight"),
    ])
}

fn zone2_cardio(n: u32, _sets: u32) -> WorkoutDay {
    day(n, "Zone 2 Cardio", "aerobic base", vec![
        ex("Brisk Walk or Easy Cycle", 1, "30-40 min", 0, "cardio", "none"),
        ex("Hamstring Stretch", 1, "45 sec per side", 0, "hamstrings", "bodyweight"),
        ex("Hip Flexor Stretch", 1, "45 sec per side", 0, "hips", "bodyweight"),
    ])
}

fn dumbbell_upper(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Dumbbell Upper Body", "upper body strength", vec![
        ex("Dumbbell Floor Press", sets, "8-12", 90, "chest", "dumbbells"),
        ex("One-Arm Dumbbell Row", sets, "10 per side", 90, "back", "dumbbells"),
        ex("Dumbbell Shoulder Press", sets, "8-12", 90, "shoulders", "dumbbells"),
        ex("Band Pull-Apart", sets, "15", 45, "rear delts", "resistance band"),
        ex("Dumbbell Curl", sets, "12", 60, "biceps", "dumbbells"),
    ])
}

fn dumbbell_lower(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Dumbbell Lower Body", "lower body strength", vec![
        ex("Goblet Squat", sets, "10-12", 90, "legs", "dumbbells"),
        ex("Dumbbell Romanian Deadlift", sets, "10-12", 90, "hamstrings", "dumbbells"),
        ex("Reverse Lunge", sets, "10 per side", 60, "glutes", "dumbbells"),
        ex("Banded Lateral Walk", sets, "15 per side", 45, "glutes", "resistance band"),
        ex("Single-Leg Calf Raise", sets, "15 per side", 45, "calves", "dumbbells"),
    ])
}

fn dumbbell_circuit(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Dumbbell Metabolic Circuit", "conditioning", vec![
        ex("Dumbbell Thruster", sets, "12", 45, "full body", "dumbbells"),
        ex("Renegade Row", sets, "8 per side", 45, "back", "dumbbells"),
        ex("Dumbbell Swing", sets, "15", 45, "posterior chain", "dumbbells"),
        ex("Russian Twist", sets, "20", 30, "core", "dumbbells"),
    ])
}

fn gym_push(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Push", "chest, shoulders, triceps", vec![
        ex("Barbell Bench Press", sets, "6-8", 120, "chest", "barbell"),
        ex("Incline Dumbbell Press", sets, "8-10", 90, "chest", "dumbbells"),
        ex("Seated Overhead Press", sets, "8-10", 90, "shoulders", "machine"),
        ex("Cable Lateral Raise", sets, "12-15", 60, "shoulders", "cable"),
        ex("Triceps Pushdown", sets, "10-12", 60, "triceps", "cable"),
    ])
}

fn gym_pull(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Pull", "back and biceps", vec![
        ex("Deadlift", sets, "5", 150, "posterior chain", "barbell"),
        ex("Lat Pulldown", sets, "8-10", 90, "back", "cable"),
        ex("Seated Cable Row", sets, "10", 90, "back", "cable"),
        ex("Face Pull", sets, "15", 60, "rear delts", "cable"),
        ex("Barbell Curl", sets, "10", 60, "biceps", "barbell"),
    ])
}

fn gym_legs(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Legs", "quads, hamstrings, glutes", vec![
        ex("Back Squat", sets, "6-8", 150, "legs", "barbell"),
        ex("Leg Press", sets, "10-12", 90, "quads", "machine"),
        ex("Romanian Deadlift", sets, "8-10", 120, "hamstrings", "barbell"),
        ex("Lying Leg Curl", sets, "12", 60, "hamstrings", "machine"),
        ex("Standing Calf Raise", sets, "15", 60, "calves", "machine"),
    ])
}

fn gym_conditioning(n: u32, sets: u32) -> WorkoutDay {
    day(n, "Gym Conditioning", "conditioning", vec![
        ex("Rowing Machine Intervals", sets, "250 m", 60, "cardio", "rower"),
        ex("Kettlebell Swing", sets, "15", 45, "posterior chain", "kettlebell"),
        ex("Sled Push", sets, "20 m", 60, "legs", "sled"),
        ex("Battle Ropes", sets, "30 sec", 45, "shoulders", "battle ropes"),
    ])
}

fn plan(sets: u32, templates: &[DayTemplate]) -> EquipmentPlan {
    EquipmentPlan {
        days: templates
            .iter()
            .zip(1u32..)
            .map(|(template, n)| template(n, sets))
            .collect(),
    }
}

fn level(buckets: Vec<(EquipmentAccess, EquipmentPlan)>) -> LevelPlans {
    LevelPlans {
        equipment: buckets.into_iter().collect(),
    }
}

fn build_workouts(goal: Goal) -> WorkoutDataset {
    use EquipmentAccess::{Basic, FullGym};
    use FitnessLevel::{Advanced, Beginner, Intermediate};

    let levels = match goal {
        Goal::FatLoss => vec![
            (Beginner, level(vec![
                (
                    EquipmentAccess::None,
                    plan(
                        3,
                        &[
                            bodyweight_full_body,
                            bodyweight_hiit,
                            zone2_cardio,
                            bodyweight_full_body,
                            mobility_core,
                            bodyweight_hiit,
                        ],
                    ),
                ),
                (Basic, plan(3, &[dumbbell_lower, dumbbell_upper, dumbbell_circuit, zone2_cardio])),
            ])),
            (Intermediate, level(vec![
                (
                    Basic,
                    plan(
                        4,
                        &[
                            dumbbell_lower,
                            dumbbell_upper,
                            dumbbell_circuit,
                            dumbbell_lower,
                            bodyweight_hiit,
                        ],
                    ),
                ),
                (
                    FullGym,
                    plan(
                        4,
                        &[
                            gym_legs,
                            gym_push,
                            gym_conditioning,
                            gym_pull,
                            zone2_cardio,
                            gym_conditioning,
                        ],
                    ),
                ),
            ])),
            (Advanced, level(vec![
                (
                    FullGym,
                    plan(
                        5,
                        &[
                            gym_legs,
                            gym_push,
                            gym_conditioning,
                            gym_pull,
                            gym_conditioning,
                            zone2_cardio,
                        ],
                    ),
                ),
            ])),
        ],
        Goal::WeightGain => vec![
            (Beginner, level(vec![
                (Basic, plan(3, &[dumbbell_lower, dumbbell_upper, dumbbell_lower])),
                (FullGym, plan(3, &[gym_legs, gym_push, gym_pull, gym_legs])),
            ])),
            (Intermediate, level(vec![
                (FullGym, plan(4, &[gym_legs, gym_push, gym_pull, gym_legs, gym_push])),
            ])),
            (Advanced, level(vec![
                (FullGym, plan(5, &[gym_legs, gym_push, gym_pull, gym_legs, gym_push, gym_pull])),
            ])),
        ],
        Goal::MuscleBuilding => vec![
            (Beginner, level(vec![
                (
                    EquipmentAccess::None,
                    plan(3, &[bodyweight_full_body, mobility_core, bodyweight_full_body]),
                ),
                (FullGym, plan(3, &[gym_push, gym_pull, gym_legs, mobility_core])),
            ])),
            (Intermediate, level(vec![
                (Basic, plan(4, &[dumbbell_upper, dumbbell_lower, dumbbell_upper, dumbbell_lower])),
                (FullGym, plan(4, &[gym_push, gym_pull, gym_legs, gym_push, gym_pull, gym_legs])),
            ])),
            (Advanced, level(vec![
                (FullGym, plan(5, &[gym_push, gym_pull, gym_legs, gym_push, gym_pull, gym_legs])),
            ])),
        ],
        Goal::HealthMaintenance => vec![
            (Beginner, level(vec![
                (
                    EquipmentAccess::None,
                    plan(2, &[bodyweight_full_body, zone2_cardio, mobility_core, zone2_cardio]),
                ),
            ])),
            (Intermediate, level(vec![
                (
                    EquipmentAccess::None,
                    plan(3, &[bodyweight_full_body, bodyweight_hiit, mobility_core]),
                ),
                (
                    Basic,
                    plan(
                        3,
                        &[
                            dumbbell_upper,
                            zone2_cardio,
                            dumbbell_lower,
                            mobility_core,
                            dumbbell_circuit,
                        ],
                    ),
                ),
            ])),
            (Advanced, level(vec![
                (
                    Basic,
                    plan(
                        4,
                        &[
                            dumbbell_upper,
                            bodyweight_hiit,
                            dumbbell_lower,
                            zone2_cardio,
                            dumbbell_circuit,
                            mobility_core,
                        ],
                    ),
                ),
            ])),
        ],
    };

    WorkoutDataset {
        levels: levels.into_iter().collect(),
    }
}

// ============================================================================
// Diets
// ============================================================================

fn meal(
    name: &str,
    calories: u32,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    ingredients: &[&str],
    prep_time_min: u32,
) -> DietMeal {
    DietMeal {
        name: name.into(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        prep_time_min,
    }
}

/// Portion multiplier applied to the base meals for each goal
fn portion_factor(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => 0.85,
        Goal::WeightGain => 1.3,
        Goal::MuscleBuilding => 1.15,
        Goal::HealthMaintenance => 1.0,
    }
}

fn scale_meal(base: &DietMeal, factor: f64) -> DietMeal {
    let grams = |g: f64| (g * factor * 10.0).round() / 10.0;
    DietMeal {
        calories: (f64::from(base.calories) * factor).round() as u32,
        protein_g: grams(base.protein_g),
        carbs_g: grams(base.carbs_g),
        fat_g: grams(base.fat_g),
        ..base.clone()
    }
}

fn day_of_meals(
    factor: f64,
    breakfast: Vec<DietMeal>,
    lunch: Vec<DietMeal>,
    snacks: Vec<DietMeal>,
    dinner: Vec<DietMeal>,
) -> CuisineMeals {
    let scale = |meals: Vec<DietMeal>| -> Vec<DietMeal> {
        meals.iter().map(|m| scale_meal(m, factor)).collect()
    };
    CuisineMeals {
        meals: [
            (MealSlot::Breakfast, scale(breakfast)),
            (MealSlot::Lunch, scale(lunch)),
            (MealSlot::Snacks, scale(snacks)),
            (MealSlot::Dinner, scale(dinner)),
        ]
        .into_iter()
        .collect(),
    }
}

fn indian_vegetarian(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal(
                "Moong Dal Chilla with Paneer",
                380,
                24.0,
                40.0,
                12.0,
                &["moong dal", "paneer", "onion", "coriander"],
                20,
            ),
            meal(
                "Vegetable Poha with Peanuts",
                350,
                10.0,
                55.0,
                10.0,
                &["poha", "peanuts", "peas", "curry leaves"],
                15,
            ),
        ],
        vec![
            meal(
                "Rajma Chawal with Salad",
                520,
                20.0,
                85.0,
                10.0,
                &["kidney beans", "rice", "tomato", "cucumber"],
                40,
            ),
        ],
        vec![
            meal(
                "Roasted Chana and Buttermilk",
                220,
                12.0,
                28.0,
                6.0,
                &["roasted chickpeas", "buttermilk"],
                5,
            ),
        ],
        vec![
            meal(
                "Palak Paneer with Roti",
                480,
                26.0,
                40.0,
                22.0,
                &["spinach", "paneer", "whole wheat flour"],
                35,
            ),
        ],
    )
}

fn indian_non_vegetarian(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal(
                "Masala Egg Bhurji with Roti",
                400,
                24.0,
                35.0,
                18.0,
                &["eggs", "onion", "tomato", "whole wheat flour"],
                15,
            ),
        ],
        vec![
            meal(
                "Chicken Curry with Brown Rice",
                560,
                42.0,
                60.0,
                14.0,
                &["chicken breast", "brown rice", "onion", "tomato"],
                40,
            ),
        ],
        vec![meal("Sprouts Chaat", 200, 12.0, 30.0, 3.0, &["moong sprouts", "onion", "lemon"], 10)],
        vec![
            meal(
                "Tandoori Fish with Vegetables",
                450,
                40.0,
                20.0,
                20.0,
                &["fish fillet", "yogurt", "bell pepper"],
                30,
            ),
            meal(
                "Chicken Tikka with Dal",
                500,
                45.0,
                35.0,
                16.0,
                &["chicken", "yogurt", "toor dal"],
                35,
            ),
        ],
    )
}

fn indian_vegan(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal(
                "Besan Chilla with Mint Chutney",
                340,
                16.0,
                42.0,
                10.0,
                &["chickpea flour", "onion", "mint"],
                15,
            ),
        ],
        vec![
            meal(
                "Chana Masala with Jeera Rice",
                530,
                20.0,
                85.0,
                12.0,
                &["chickpeas", "rice", "cumin", "tomato"],
                35,
            ),
        ],
        vec![meal("Fruit and Almonds", 210, 6.0, 25.0, 10.0, &["banana", "apple", "almonds"], 2)],
        vec![
            meal(
                "Tofu Bhurji with Roti",
                450,
                28.0,
                40.0,
                18.0,
                &["tofu", "capsicum", "whole wheat flour"],
                20,
            ),
        ],
    )
}

fn indian_eggetarian(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal(
                "Boiled Eggs with Upma",
                420,
                22.0,
                45.0,
                15.0,
                &["eggs", "semolina", "vegetables"],
                20,
            ),
        ],
        vec![
            meal(
                "Egg Curry with Rice",
                540,
                26.0,
                70.0,
                17.0,
                &["eggs", "rice", "onion", "tomato"],
                35,
            ),
        ],
        vec![
            meal(
                "Greek-Style Curd with Seeds",
                200,
                14.0,
                15.0,
                8.0,
                &["hung curd", "flax seeds", "honey"],
                5,
            ),
        ],
        vec![
            meal(
                "Dal Tadka with Roti and Omelette",
                520,
                30.0,
                55.0,
                18.0,
                &["toor dal", "eggs", "whole wheat flour"],
                30,
            ),
        ],
    )
}

fn western_vegetarian(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal(
                "Greek Yogurt Berry Bowl",
                350,
                22.0,
                45.0,
                8.0,
                &["greek yogurt", "berries", "granola"],
                5,
            ),
            meal(
                "Overnight Oats with Whey",
                400,
                30.0,
                50.0,
                9.0,
                &["oats", "milk", "whey protein", "chia seeds"],
                5,
            ),
        ],
        vec![
            meal(
                "Quinoa and Black Bean Bowl",
                520,
                22.0,
                75.0,
                14.0,
                &["quinoa", "black beans", "corn", "avocado"],
                25,
            ),
        ],
        vec![
            meal(
                "Cottage Cheese with Pineapple",
                200,
                20.0,
                18.0,
                4.0,
                &["cottage cheese", "pineapple"],
                2,
            ),
        ],
        vec![
            meal(
                "Whole Wheat Pasta Primavera",
                480,
                20.0,
                70.0,
                13.0,
                &["whole wheat pasta", "zucchini", "parmesan"],
                25,
            ),
        ],
    )
}

fn western_non_vegetarian(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal(
                "Scrambled Eggs on Toast",
                400,
                26.0,
                30.0,
                18.0,
                &["eggs", "whole grain bread", "spinach"],
                10,
            ),
        ],
        vec![
            meal(
                "Grilled Chicken Salad with Potatoes",
                520,
                45.0,
                40.0,
                18.0,
                &["chicken breast", "mixed greens", "potatoes", "olive oil"],
                25,
            ),
        ],
        vec![meal("Tuna on Rice Cakes", 220, 22.0, 20.0, 5.0, &["canned tuna", "rice cakes"], 5)],
        vec![
            meal(
                "Baked Salmon with Sweet Potato",
                560,
                40.0,
                45.0,
                22.0,
                &["salmon", "sweet potato", "broccoli"],
                30,
            ),
        ],
    )
}

fn western_vegan(factor: f64) -> CuisineMeals {
    day_of_meals(
        factor,
        vec![
            meal("Tofu Scramble Wrap", 380, 22.0, 38.0, 14.0, &["tofu", "tortilla", "spinach"], 15),
        ],
        vec![
            meal(
                "Lentil and Vegetable Soup with Bread",
                480,
                24.0,
                70.0,
                9.0,
                &["lentils", "carrots", "celery", "sourdough"],
                35,
            ),
        ],
        vec![
            meal(
                "Hummus with Veggie Sticks",
                220,
                8.0,
                22.0,
                11.0,
                &["hummus", "carrots", "cucumber"],
                5,
            ),
        ],
        vec![
            meal(
                "Tempeh Stir-Fry with Rice",
                520,
                30.0,
                60.0,
                16.0,
                &["tempeh", "rice", "broccoli", "soy sauce"],
                25,
            ),
        ],
    )
}

fn build_diets(goal: Goal) -> DietDataset {
    use CuisinePreference::{Indian, Western};
    let factor = portion_factor(goal);

    let mut vegan = vec![(Western, western_vegan(factor))];
    if matches!(goal, Goal::FatLoss | Goal::HealthMaintenance) {
        vegan.push((Indian, indian_vegan(factor)));
    }

    let diet_types = vec![
        (
            DietPreference::Vegetarian,
            vec![(Indian, indian_vegetarian(factor)), (Western, western_vegetarian(factor))],
        ),
        (
            DietPreference::NonVegetarian,
            vec![
                (Indian, indian_non_vegetarian(factor)),
                (Western, western_non_vegetarian(factor)),
            ],
        ),
        (DietPreference::Vegan, vegan),
        (DietPreference::Eggetarian, vec![(Indian, indian_eggetarian(factor))]),
    ];

    DietDataset {
        diet_types: diet_types
            .into_iter()
            .map(|(diet, cuisines)| {
                (
                    diet,
                    DietTypePlans {
                        cuisines: cuisines.into_iter().collect(),
                    },
                )
            })
            .collect(),
    }
}

// ============================================================================
// Videos
// ============================================================================

fn video(
    title: &str,
    kind: &str,
    level: &str,
    duration_min: u32,
    tags: &[&str],
    description: &str,
) -> Video {
    Video {
        title: title.into(),
        url: format!(
            "https://www.youtube.com/results?search_query={}",
            title.to_lowercase().replace(' ', "+")
        ),
        kind: kind.into(),
        level: level.into(),
        duration_min,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: description.into(),
    }
}

fn build_videos(goal: Goal) -> VideoDataset {
    let videos = match goal {
        Goal::FatLoss => vec![
            video(
                "20 Minute Beginner HIIT No Equipment",
                "workout",
                "beginner",
                20,
                &["hiit", "home"],
                "Low-impact intervals to build a conditioning base.",
            ),
            video(
                "Full Body Fat Burning Dumbbell Workout",
                "workout",
                "intermediate",
                30,
                &["dumbbells", "circuit"],
                "A metabolic circuit with a single pair of dumbbells.",
            ),
            video(
                "Advanced Tabata Conditioning",
                "workout",
                "advanced",
                25,
                &["tabata", "conditioning"],
                "Eight rounds of hard work for experienced trainees.",
            ),
            video(
                "How to Eat in a Calorie Deficit",
                "diet",
                "all",
                12,
                &["deficit", "nutrition"],
                "Setting up a sustainable deficit without crash dieting.",
            ),
            video(
                "High Protein Indian Meals for Fat Loss",
                "diet",
                "all",
                15,
                &["indian", "protein"],
                "Everyday Indian dishes adjusted for higher protein.",
            ),
            video(
                "Walking for Fat Loss Explained",
                "workout",
                "all",
                10,
                &["walking", "neat"],
                "Why daily steps matter as much as the gym.",
            ),
        ],
        Goal::WeightGain => vec![
            video(
                "Beginner Dumbbell Routine for Skinny Guys",
                "workout",
                "beginner",
                25,
                &["dumbbells", "mass"],
                "Compound movements to start adding size.",
            ),
            video(
                "Intermediate Push Pull Legs for Mass",
                "workout",
                "intermediate",
                40,
                &["ppl", "hypertrophy"],
                "A five-day split focused on progressive overload.",
            ),
            video(
                "Advanced Powerbuilding Session",
                "workout",
                "advanced",
                60,
                &["strength", "hypertrophy"],
                "Heavy compounds followed by volume work.",
            ),
            video(
                "How to Eat in a Calorie Surplus",
                "diet",
                "all",
                14,
                &["surplus", "bulking"],
                "Adding calories without excessive fat gain.",
            ),
            video(
                "Easy High Calorie Smoothies",
                "diet",
                "all",
                8,
                &["smoothie", "calories"],
                "Liquid calories for hard gainers.",
            ),
        ],
        Goal::MuscleBuilding => vec![
            video(
                "Bodyweight Muscle Building for Beginners",
                "workout",
                "beginner",
                25,
                &["calisthenics", "home"],
                "Push-up and squat progressions for new lifters.",
            ),
            video(
                "Hypertrophy Training Explained",
                "workout",
                "all",
                18,
                &["hypertrophy", "science"],
                "Sets, reps and proximity to failure.",
            ),
            video(
                "Intermediate Upper Lower Split",
                "workout",
                "intermediate",
                45,
                &["upper lower", "gym"],
                "Four training days balanced for recovery.",
            ),
            video(
                "Advanced Chest and Back Superset Workout",
                "workout",
                "advanced",
                50,
                &["supersets", "gym"],
                "Antagonist supersets for high training density.",
            ),
            video(
                "How Much Protein Do You Need to Build Muscle",
                "diet",
                "all",
                11,
                &["protein", "science"],
                "Evidence-based protein targets.",
            ),
            video(
                "Vegetarian Meal Prep for Muscle Gain",
                "diet",
                "intermediate",
                16,
                &["vegetarian", "meal prep"],
                "A week of high-protein vegetarian meals.",
            ),
        ],
        Goal::HealthMaintenance => vec![
            video(
                "Daily 15 Minute Mobility Routine",
                "workout",
                "all",
                15,
                &["mobility", "stretching"],
                "Keep joints healthy with a short daily flow.",
            ),
            video(
                "Beginner Full Body Home Workout",
                "workout",
                "beginner",
                20,
                &["home", "full body"],
                "A gentle full body session with no equipment.",
            ),
            video(
                "Zone 2 Cardio Guide",
                "workout",
                "intermediate",
                13,
                &["cardio", "endurance"],
                "Building an aerobic base for long-term health.",
            ),
            video(
                "Balanced Plate Method",
                "diet",
                "all",
                9,
                &["balanced diet", "portion control"],
                "Simple portioning without counting calories.",
            ),
        ],
    };

    VideoDataset { videos }
}
