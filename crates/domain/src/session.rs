use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Local};
use derive_more::Deref;
use uuid::Uuid;

use crate::{Reps, Sets};

pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 7;

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSessionID(Uuid);

impl WorkoutSessionID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutSessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformedExercise {
    pub exercise: String,
    pub sets: Sets,
    pub reps: Reps,
}

/// A historical record of one completed session. Sessions are read-only input
/// to plan generation and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: WorkoutSessionID,
    pub date: Option<DateTime<Local>>,
    pub main: Vec<PerformedExercise>,
}

/// Names of all exercises performed within `[now - window, now]`. Sessions
/// without a date are ignored.
#[must_use]
pub fn recent_exercise_names(
    sessions: &[WorkoutSession],
    window: Duration,
    now: DateTime<Local>,
) -> BTreeSet<&str> {
    let cutoff = now - window;
    sessions
        .iter()
        .filter(|s| s.date.is_some_and(|date| date >= cutoff && date <= now))
        .flat_map(|s| s.main.iter().map(|e| e.exercise.as_str()))
        .collect()
}
