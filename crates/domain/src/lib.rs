#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod advice;
pub mod catalog;
pub mod feedback;
pub mod plan;
pub mod selector;
pub mod session;
pub mod user;

pub use advice::{GENERAL_TIPS, NO_ADVICE, form_cues};
pub use catalog::{Equipment, EquipmentError, Exercise, MuscleGroup, SubGroup, exercises};
pub use feedback::{
    Feedback, FeedbackValue, PerceivedEffort, Rating, RatingError, Recommendation, adjust_sets_reps,
    average_rating,
};
pub use plan::{PlanEntry, Reps, RepsError, Sets, SetsError, WorkoutPlan, generate_plan};
pub use selector::select_exercise;
pub use session::{
    DEFAULT_RECENCY_WINDOW_DAYS, PerformedExercise, WorkoutSession, WorkoutSessionID,
    recent_exercise_names,
};
pub use user::{DurationError, Level, LevelError, SessionDuration, UserProfile};
