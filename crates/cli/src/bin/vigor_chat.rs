use anyhow::Result;
use chrono::Local;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use vigor_cli::{
    profile::ProfileArgs,
    prompt::{self, MenuChoice},
    render,
};
use vigor_domain::{
    Feedback, FeedbackValue, GENERAL_TIPS, Recommendation, average_rating, generate_plan,
};

#[derive(Parser)]
#[command(name = "vigor-chat", about = "Chat-style workout assistant")]
struct Args {
    #[command(flatten)]
    profile: ProfileArgs,

    /// Seed for deterministic exercise selection
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to the Workout Assistant!");
    println!("What would you like to do?");
    println!("1. Generate a workout plan");
    println!("2. Get advice on a specific exercise");
    println!("3. View progress and suggest improvements");
    println!("4. Get general fitness advice");

    match prompt::menu_choice("Enter the number of your choice: ")? {
        MenuChoice::Plan => run_plan(&args)?,
        MenuChoice::ExerciseAdvice => {
            let exercise = prompt::read_line(
                "Enter the name of the exercise you want advice on (e.g., Squats, Deadlifts): ",
            )?;
            println!("\nAdvice on {exercise}:");
            print!("{}", render::advice_text(&exercise));
        }
        MenuChoice::Progress => {
            println!("\nHere are your progress suggestions based on feedback and past workouts.");
        }
        MenuChoice::GeneralAdvice => {
            println!("\nHere are some general fitness tips:");
            for tip in GENERAL_TIPS {
                println!("  * {tip}");
            }
        }
    }

    Ok(())
}

fn run_plan(args: &Args) -> Result<()> {
    let profile = args.profile.resolve()?;
    log::debug!("generating plan for {profile:?}");
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("\nGenerating workout plan...");

    // History and feedback are not persisted, every run starts fresh.
    let sessions = Vec::new();
    let plan = generate_plan(&profile, &sessions, &Feedback::new(), Local::now(), &mut rng);
    print!("{}", render::plan_text(&plan));

    let mut feedback = Feedback::new();
    for entry in &plan.main {
        let rating = prompt::rating(entry.exercise.name)?;
        feedback.insert(entry.exercise.name, FeedbackValue::Rating(rating));
    }

    println!("\nOverall rating: {}", average_rating(&feedback));
    for (exercise, rating) in feedback.ratings() {
        println!(
            "Feedback for {exercise}: {}",
            Recommendation::from(rating).message()
        );
    }

    Ok(())
}
