use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use coach_core::physiology::{compute_bmi, compute_macros, compute_tdee};
use coach_core::tools::{diet_plan_for_profile, videos_for_profile, workout_plan_for_profile};
use coach_core::*;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(about = "Personal fitness coach: workouts, diet targets and videos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory (profile and progress log)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Load content from a directory instead of the built-in catalog
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or show the saved profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show BMI and its category
    Bmi,

    /// Show calorie targets and macronutrient split
    Calories,

    /// Show the workout plan for the saved profile
    Workout {
        /// Also export the plan as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show calorie targets and meal suggestions
    Diet,

    /// Recommend YouTube videos
    Videos {
        /// workout, diet or both (defaults to the configured type)
        #[arg(long)]
        content_type: Option<ContentType>,
    },

    /// Workout, diet and videos in one go
    Plan {
        /// workout, diet or both (defaults to the configured type)
        #[arg(long)]
        content_type: Option<ContentType>,
    },

    /// Record a workout or a weigh-in
    Log {
        #[command(subcommand)]
        entry: LogEntry,
    },

    /// Show the stats dashboard
    Stats {
        /// Day to compute the streak for (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Check the content store for authoring mistakes
    Validate,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Save a new profile
    Set(ProfileArgs),
    /// Print the saved profile
    Show,
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    name: String,
    /// Age in years (14-80)
    #[arg(long)]
    age: u32,
    /// Weight in kilograms
    #[arg(long)]
    weight: f64,
    /// Height in centimetres
    #[arg(long)]
    height: f64,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
    /// fat_loss, weight_gain, muscle_building or health_maintenance
    #[arg(long)]
    goal: Goal,
    /// beginner, intermediate or advanced
    #[arg(long)]
    level: FitnessLevel,
    /// vegetarian, non_vegetarian, vegan or eggetarian
    #[arg(long)]
    diet: DietPreference,
    /// indian, western or flexible
    #[arg(long)]
    cuisine: CuisinePreference,
    /// Workout days per week (3-6)
    #[arg(long)]
    days: u32,
    /// none, basic or full_gym
    #[arg(long)]
    equipment: EquipmentAccess,
}

impl From<ProfileArgs> for Profile {
    fn from(args: ProfileArgs) -> Self {
        Profile {
            name: args.name,
            age: args.age,
            weight_kg: args.weight,
            height_cm: args.height,
            gender: args.gender,
            goal: args.goal,
            fitness_level: args.level,
            diet_preference: args.diet,
            cuisine_preference: args.cuisine,
            workout_days_per_week: args.days,
            equipment_access: args.equipment,
        }
    }
}

#[derive(Subcommand)]
enum LogEntry {
    /// Mark a workout as done
    Session {
        /// Day of the workout (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Record body weight in kg
    Weight {
        weight: f64,
        /// Day of the weigh-in (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    coach_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }
    if let Some(dir) = cli.content_dir {
        config.content.content_dir = Some(dir);
    }
    tracing::debug!("Data dir: {:?}", config.data.data_dir);
    let json = cli.json;

    match cli.command {
        Commands::Profile { action } => cmd_profile(&config, action, json),
        Commands::Bmi => {
            let profile = require_profile(&config)?;
            let bmi = compute_bmi(profile.weight_kg, profile.height_cm);
            emit(json, &bmi, || display_bmi(&bmi))
        }
        Commands::Calories => {
            let profile = require_profile(&config)?;
            let calories = compute_tdee(
                profile.weight_kg,
                profile.height_cm,
                profile.age,
                profile.workout_days_per_week,
                profile.goal,
                profile.gender,
            );
            let macros = compute_macros(calories.target_calories, profile.goal);
            let both = serde_json::json!({ "calories": calories, "macros": macros });
            emit(json, &both, || {
                display_calories(&calories);
                display_macros(&macros);
            })
        }
        Commands::Workout { csv } => {
            let profile = require_profile(&config)?;
            let store = config.content.load_store()?;
            let plan = workout_plan_for_profile(&store, &profile)?;
            if let Some(path) = csv {
                let rows = write_workout_csv(&plan, &path)?;
                if !json {
                    println!("✓ Exported {} exercises to {}", rows, path.display());
                }
            }
            emit(json, &plan, || display_workout(&plan))
        }
        Commands::Diet => {
            let profile = require_profile(&config)?;
            let store = config.content.load_store()?;
            let plan = diet_plan_for_profile(&store, &profile);
            emit(json, &plan, || display_diet(&plan))
        }
        Commands::Videos { content_type } => {
            let profile = require_profile(&config)?;
            let store = config.content.load_store()?;
            let content_type = content_type.unwrap_or(config.videos.default_content_type);
            let videos = videos_for_profile(&store, &profile, content_type)?;
            emit(json, &videos, || display_videos(&videos))
        }
        Commands::Plan { content_type } => {
            let profile = require_profile(&config)?;
            let store = config.content.load_store()?;
            let content_type = content_type.unwrap_or(config.videos.default_content_type);
            let plan = build_coaching_plan(&store, &profile, content_type)?;
            emit(json, &plan, || {
                println!("{}\n", plan.profile_summary);
                display_workout(&plan.workout);
                display_diet(&plan.diet);
                display_videos(&plan.videos);
            })
        }
        Commands::Log { entry } => cmd_log(&config, entry, json),
        Commands::Stats { date } => cmd_stats(&config, date.unwrap_or_else(today), json),
        Commands::Validate => cmd_validate(&config, json),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Print `value` as JSON, or run the human formatter
fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human();
    }
    Ok(())
}

fn require_profile(config: &Config) -> Result<Profile> {
    Profile::load(&config.profile_path())?.ok_or_else(|| {
        Error::Other("No profile saved yet. Run `fitcoach profile set` first.".into())
    })
}

fn cmd_profile(config: &Config, action: ProfileAction, json: bool) -> Result<()> {
    match action {
        ProfileAction::Set(args) => {
            let profile = Profile::from(args);
            profile.save(&config.profile_path())?;
            emit(json, &profile, || {
                println!("✓ Profile saved");
                println!("  {}", profile.summary());
            })
        }
        ProfileAction::Show => {
            let profile = require_profile(config)?;
            emit(json, &profile, || println!("{}", profile.summary()))
        }
    }
}

fn cmd_log(config: &Config, entry: LogEntry, json: bool) -> Result<()> {
    let path = config.progress_path();

    match entry {
        LogEntry::Session { date } => {
            let day = date.unwrap_or_else(today);
            let mut added = false;
            let log = ProgressLog::update(&path, |log| added = log.log_session(day))?;
            let streak = log.streak(day);
            let summary = serde_json::json!({ "date": day, "new": added, "streak": streak });
            emit(json, &summary, || {
                if added {
                    println!("✓ Workout logged for {}", day);
                } else {
                    println!("Workout already logged for {}", day);
                }
                println!("  Streak: {} day(s)", streak);
            })
        }
        LogEntry::Weight { weight, date } => {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(Error::Validation(format!(
                    "weight must be positive, got {}",
                    weight
                )));
            }
            let day = date.unwrap_or_else(today);
            let log = ProgressLog::update(&path, |log| log.log_weight(day, weight))?;
            emit(json, &log.weight_log, || {
                println!("✓ Weight {:.1}kg logged for {}", weight, day);
                if let Some(change) = log.weight_change() {
                    println!("  {} {:.1}kg total", trend_arrow(change), change.abs());
                }
            })
        }
    }
}

#[derive(Serialize)]
struct Stats {
    bmi: BmiResult,
    target_calories: f64,
    protein_g: f64,
    streak: u32,
    weight_kg: f64,
    weight_change: Option<f64>,
}

fn cmd_stats(config: &Config, day: NaiveDate, json: bool) -> Result<()> {
    let profile = require_profile(config)?;
    let log = ProgressLog::load(&config.progress_path())?;

    let calories = compute_tdee(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.workout_days_per_week,
        profile.goal,
        profile.gender,
    );
    let macros = compute_macros(calories.target_calories, profile.goal);

    let stats = Stats {
        bmi: compute_bmi(profile.weight_kg, profile.height_cm),
        target_calories: calories.target_calories,
        protein_g: macros.protein_g,
        streak: log.streak(day),
        weight_kg: log.latest_weight().unwrap_or(profile.weight_kg),
        weight_change: log.weight_change(),
    };

    emit(json, &stats, || {
        println!("\n╭─────────────────────────────────────────╮");
        println!("│  {}'s DASHBOARD", profile.name.to_uppercase());
        println!("╰─────────────────────────────────────────╯");
        println!();
        println!("  BMI              {} · {}", stats.bmi.bmi, stats.bmi.category);
        println!("  Daily Calories   {}", stats.target_calories);
        println!("  Protein Target   {}g", stats.protein_g);
        println!("  Day Streak       {}", stats.streak);
        match stats.weight_change {
            Some(change) => println!(
                "  Current Weight   {}kg ({} {:.1}kg total)",
                stats.weight_kg,
                trend_arrow(change),
                change.abs()
            ),
            None => println!("  Current Weight   {}kg", stats.weight_kg),
        }
        println!();
    })
}

fn cmd_validate(config: &Config, json: bool) -> Result<()> {
    let store = config.content.load_store()?;
    let errors = store.validate();

    emit(json, &errors, || {
        if errors.is_empty() {
            println!("✓ Content store is valid");
        } else {
            eprintln!("Content validation errors:");
            for error in &errors {
                eprintln!("  - {}", error);
            }
        }
    })?;

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Other(format!(
            "{} content validation error(s)",
            errors.len()
        )))
    }
}

fn trend_arrow(change: f64) -> &'static str {
    if change < 0.0 {
        "↓"
    } else if change > 0.0 {
        "↑"
    } else {
        "→"
    }
}

fn display_bmi(bmi: &BmiResult) {
    println!("BMI: {} ({})", bmi.bmi, bmi.category);
}

fn display_calories(calories: &TdeeResult) {
    println!("Calories");
    println!("  BMR:          {} kcal", calories.bmr);
    println!("  Maintenance:  {} kcal", calories.maintenance_calories);
    println!(
        "  Target:       {} kcal ({:+})",
        calories.target_calories, calories.adjustment
    );
}

fn display_macros(macros: &MacroResult) {
    let pct = &macros.split_percentages;
    println!("Macros");
    println!("  Protein:  {}g ({}%)", macros.protein_g, pct.protein);
    println!("  Carbs:    {}g ({}%)", macros.carbs_g, pct.carbs);
    println!("  Fat:      {}g ({}%)", macros.fat_g, pct.fat);
}

fn display_workout(plan: &WorkoutResult) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} WORKOUT PLAN", plan.goal.as_str().replace('_', " ").to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!(
        "  {} · {} · {} day(s)/week",
        plan.fitness_level, plan.equipment, plan.days_per_week
    );

    for day in &plan.workout_plan {
        println!();
        println!("  Day {}: {} ({})", day.day, day.name, day.focus);
        for ex in &day.exercises {
            println!(
                "    → {:<28} {} x {:<16} rest {}s",
                ex.name, ex.sets, ex.reps, ex.rest_sec
            );
        }
    }
    println!();
}

fn display_diet(plan: &DietPlan) {
    display_bmi(&plan.bmi);
    display_calories(&plan.calories);
    display_macros(&plan.macros);
    println!();

    match &plan.meal_plan {
        MealPlan::Found(diet) => {
            println!("Meals ({} · {})", diet.diet_preference, diet.cuisine);
            for (slot, meals) in &diet.meals {
                println!("  {}:", slot);
                for meal in meals {
                    println!(
                        "    → {} - {} kcal, {}g protein, {} min",
                        meal.name, meal.calories, meal.protein_g, meal.prep_time_min
                    );
                }
            }
            println!("  These are suggestions; swap meals freely.");
        }
        MealPlan::Missing { error } => println!("No meal suggestions: {}", error),
    }
    println!();
}

fn display_videos(result: &VideoResult) {
    println!("Videos ({} · {})", result.fitness_level, result.content_type);
    for video in &result.videos {
        println!();
        println!("  {} [{} · {} min]", video.title, video.level, video.duration_min);
        if !video.description.is_empty() {
            println!("    {}", video.description);
        }
        println!("    ℹ {}", video.url);
    }
    println!();
}
