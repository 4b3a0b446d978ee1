use chrono::{DateTime, Duration, Local};
use derive_more::{Display, Into};
use rand::Rng;

use crate::{
    DEFAULT_RECENCY_WINDOW_DAYS, Exercise, Feedback, Level, MuscleGroup, UserProfile,
    WorkoutSession, adjust_sets_reps, recent_exercise_names, select_exercise,
};

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..100).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..100).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn incremented(self) -> Reps {
        Reps((self.0 + 1).min(99))
    }

    #[must_use]
    pub fn decremented(self) -> Reps {
        Reps((self.0 - 1).max(1))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 99")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub exercise: &'static Exercise,
    pub sets: Sets,
    pub reps: Reps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub warmup: Vec<String>,
    pub main: Vec<PlanEntry>,
    pub stretch: Vec<String>,
}

/// Generates a plan for one session. Selection is random but plan generation is
/// total: as long as a muscle group has any catalog entry, an exercise is
/// chosen for it.
#[must_use]
pub fn generate_plan(
    profile: &UserProfile,
    sessions: &[WorkoutSession],
    feedback: &Feedback,
    now: DateTime<Local>,
    rng: &mut impl Rng,
) -> WorkoutPlan {
    let warmup_count = profile.duration.warmup_count();
    let stretch_count = rng.random_range(profile.duration.stretch_count_range());

    let mut main_sets = profile.duration.base_main_sets();
    let base_reps = match profile.level {
        Level::Beginner => {
            main_sets = (main_sets - 1).max(2);
            8
        }
        Level::Intermediate | Level::Advanced => 10,
    };

    let recent = recent_exercise_names(sessions, Duration::days(DEFAULT_RECENCY_WINDOW_DAYS), now);

    let mut main = Vec::new();
    for muscle_group in MuscleGroup::iter() {
        let sub_group = muscle_group.default_sub_group();
        let Some(exercise) =
            select_exercise(*muscle_group, sub_group, &profile.equipment, &recent, rng)
        else {
            log::debug!("no exercise available for {muscle_group}/{sub_group}, skipping");
            continue;
        };
        let (sets, reps) = adjust_sets_reps(
            Sets(main_sets),
            Reps(base_reps),
            exercise.name,
            sessions,
            feedback,
        );
        main.push(PlanEntry {
            exercise,
            sets,
            reps,
        });
    }

    WorkoutPlan {
        warmup: (1..=warmup_count)
            .map(|i| format!("Dynamic Warmup {i}"))
            .collect(),
        main,
        stretch: (1..=stretch_count)
            .map(|i| format!("Stretch {i} focusing on muscles worked"))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use crate::{Equipment, SessionDuration};

    use super::*;

    fn profile(
        level: Level,
        equipment: &[Equipment],
        duration: SessionDuration,
    ) -> UserProfile {
        UserProfile {
            level,
            equipment: equipment.iter().copied().collect::<BTreeSet<_>>(),
            duration,
        }
    }

    #[rstest]
    #[case(1, Ok(Sets(1)))]
    #[case(99, Ok(Sets(99)))]
    #[case(0, Err(SetsError::OutOfRange))]
    #[case(100, Err(SetsError::OutOfRange))]
    fn test_sets_new(#[case] input: u32, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::new(input), expected);
    }

    #[rstest]
    #[case("1", Ok(Reps(1)))]
    #[case("99", Ok(Reps(99)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("4.", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(input), expected);
    }

    #[rstest]
    #[case(Reps(9), Reps(10))]
    #[case(Reps(99), Reps(99))]
    fn test_reps_incremented(#[case] input: Reps, #[case] expected: Reps) {
        assert_eq!(input.incremented(), expected);
    }

    #[rstest]
    #[case(Reps(9), Reps(8))]
    #[case(Reps(2), Reps(1))]
    #[case(Reps(1), Reps(1))]
    fn test_reps_decremented(#[case] input: Reps, #[case] expected: Reps) {
        assert_eq!(input.decremented(), expected);
    }

    #[test]
    fn test_generate_plan_beginner_half_hour_bodyweight() {
        let mut rng = StdRng::seed_from_u64(0);
        let plan = generate_plan(
            &profile(
                Level::Beginner,
                &[Equipment::Bodyweight],
                SessionDuration::Half,
            ),
            &[],
            &Feedback::new(),
            Local::now(),
            &mut rng,
        );

        assert_eq!(plan.warmup.len(), 2);
        assert_eq!(plan.main.len(), 5);
        assert!((2..=3).contains(&plan.stretch.len()));
        for entry in &plan.main {
            assert_eq!(entry.sets, Sets(2));
            assert_eq!(entry.reps, Reps(8));
        }
    }

    #[test]
    fn test_generate_plan_advanced_hour_all_equipment() {
        let mut rng = StdRng::seed_from_u64(0);
        let plan = generate_plan(
            &profile(
                Level::Advanced,
                &[
                    Equipment::Barbell,
                    Equipment::Bodyweight,
                    Equipment::Cable,
                    Equipment::Dumbbell,
                ],
                SessionDuration::Hour,
            ),
            &[],
            &Feedback::new(),
            Local::now(),
            &mut rng,
        );

        assert_eq!(plan.warmup.len(), 3);
        assert_eq!(plan.main.len(), 5);
        assert!((4..=5).contains(&plan.stretch.len()));
        for entry in &plan.main {
            assert_eq!(entry.sets, Sets(4));
            assert_eq!(entry.reps, Reps(10));
        }
    }

    #[rstest]
    #[case(SessionDuration::Half)]
    #[case(SessionDuration::ThreeQuarters)]
    #[case(SessionDuration::Hour)]
    fn test_generate_plan_beginner_sets_floor(#[case] duration: SessionDuration) {
        let mut rng = StdRng::seed_from_u64(0);
        let plan = generate_plan(
            &profile(Level::Beginner, &[Equipment::Bodyweight], duration),
            &[],
            &Feedback::new(),
            Local::now(),
            &mut rng,
        );
        for entry in &plan.main {
            assert!(entry.sets >= Sets(2));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(42)]
    fn test_generate_plan_bodyweight_plan_covers_all_muscle_groups(#[case] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_plan(
            &profile(
                Level::Intermediate,
                &[Equipment::Bodyweight],
                SessionDuration::ThreeQuarters,
            ),
            &[],
            &Feedback::new(),
            Local::now(),
            &mut rng,
        );

        assert_eq!(
            plan.main
                .iter()
                .map(|entry| entry.exercise.muscle_group)
                .collect::<Vec<_>>(),
            MuscleGroup::iter().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_generate_plan_labels() {
        let mut rng = StdRng::seed_from_u64(0);
        let plan = generate_plan(
            &profile(
                Level::Intermediate,
                &[Equipment::Bodyweight],
                SessionDuration::Half,
            ),
            &[],
            &Feedback::new(),
            Local::now(),
            &mut rng,
        );

        assert_eq!(plan.warmup[0], "Dynamic Warmup 1");
        assert_eq!(plan.warmup[1], "Dynamic Warmup 2");
        assert_eq!(plan.stretch[0], "Stretch 1 focusing on muscles worked");
    }
}
