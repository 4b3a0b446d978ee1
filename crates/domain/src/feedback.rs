use std::collections::BTreeMap;

use derive_more::{Display, Into};

use crate::{Reps, Sets, WorkoutSession};

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if !(1..=10).contains(&value) {
            return Err(RatingError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Rating {
    type Error = RatingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => Rating::new(parsed_value),
            Err(_) => Err(RatingError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RatingError {
    #[error("Rating must be in the range 1 to 10")]
    OutOfRange,
    #[error("Rating must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Reduce,
    Maintain,
    Increase,
}

impl Recommendation {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::Reduce => "Consider reducing the weight or reps.",
            Recommendation::Maintain => "Maintain the current level.",
            Recommendation::Increase => "Consider increasing the weight or reps.",
        }
    }
}

impl From<Rating> for Recommendation {
    fn from(value: Rating) -> Self {
        match value.0 {
            ..=3 => Recommendation::Reduce,
            4..=7 => Recommendation::Maintain,
            _ => Recommendation::Increase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerceivedEffort {
    TooEasy,
    TooHard,
}

impl PerceivedEffort {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "too easy" => Some(PerceivedEffort::TooEasy),
            "too hard" => Some(PerceivedEffort::TooHard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackValue {
    Rating(Rating),
    Comment(String),
}

/// Per-exercise feedback collected after a session, keyed by exercise name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Feedback(BTreeMap<String, FeedbackValue>);

impl Feedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, exercise: impl Into<String>, value: FeedbackValue) {
        self.0.insert(exercise.into(), value);
    }

    #[must_use]
    pub fn get(&self, exercise: &str) -> Option<&FeedbackValue> {
        self.0.get(exercise)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ratings(&self) -> impl Iterator<Item = (&str, Rating)> {
        self.0.iter().filter_map(|(exercise, value)| match value {
            FeedbackValue::Rating(rating) => Some((exercise.as_str(), *rating)),
            FeedbackValue::Comment(_) => None,
        })
    }
}

/// Adjusts base sets and reps based on the feedback for the most recent past
/// occurrence of the exercise. Reps never drop below 1.
#[must_use]
pub fn adjust_sets_reps(
    sets: Sets,
    reps: Reps,
    exercise: &str,
    sessions: &[WorkoutSession],
    feedback: &Feedback,
) -> (Sets, Reps) {
    let mut ordered = sessions.iter().collect::<Vec<_>>();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    for session in ordered {
        if session.main.iter().any(|e| e.exercise == exercise) {
            return match feedback.get(exercise) {
                Some(FeedbackValue::Comment(comment)) => match PerceivedEffort::parse(comment) {
                    Some(PerceivedEffort::TooEasy) => (sets, reps.incremented()),
                    Some(PerceivedEffort::TooHard) => (sets, reps.decremented()),
                    None => (sets, reps),
                },
                _ => (sets, reps),
            };
        }
    }

    (sets, reps)
}

/// Mean of all numeric ratings, 0.0 if there are none.
#[must_use]
pub fn average_rating(feedback: &Feedback) -> f32 {
    let ratings = feedback
        .ratings()
        .map(|(_, rating)| f32::from(u8::from(rating)))
        .collect::<Vec<_>>();
    if ratings.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = ratings.len() as f32;
    ratings.iter().sum::<f32>() / count
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{PerformedExercise, WorkoutSession};

    use super::*;

    fn session(id: u128, days_ago: Option<i64>, exercises: &[&str]) -> WorkoutSession {
        WorkoutSession {
            id: id.into(),
            date: days_ago.map(|days| Local::now() - Duration::days(days)),
            main: exercises
                .iter()
                .map(|name| PerformedExercise {
                    exercise: (*name).to_string(),
                    sets: Sets::new(3).unwrap(),
                    reps: Reps::new(10).unwrap(),
                })
                .collect(),
        }
    }

    fn comment(exercise: &str, text: &str) -> Feedback {
        let mut feedback = Feedback::new();
        feedback.insert(exercise, FeedbackValue::Comment(text.to_string()));
        feedback
    }

    #[rstest]
    #[case("1", Ok(Rating(1)))]
    #[case(" 10 ", Ok(Rating(10)))]
    #[case("0", Err(RatingError::OutOfRange))]
    #[case("11", Err(RatingError::OutOfRange))]
    #[case("ten", Err(RatingError::ParseError))]
    fn test_rating_from_str(#[case] input: &str, #[case] expected: Result<Rating, RatingError>) {
        assert_eq!(Rating::try_from(input), expected);
    }

    #[rstest]
    #[case(1, Recommendation::Reduce)]
    #[case(3, Recommendation::Reduce)]
    #[case(4, Recommendation::Maintain)]
    #[case(7, Recommendation::Maintain)]
    #[case(8, Recommendation::Increase)]
    #[case(10, Recommendation::Increase)]
    fn test_recommendation_from_rating(#[case] value: u8, #[case] expected: Recommendation) {
        assert_eq!(Recommendation::from(Rating::new(value).unwrap()), expected);
    }

    #[rstest]
    #[case("too easy", Some(PerceivedEffort::TooEasy))]
    #[case("Too Hard", Some(PerceivedEffort::TooHard))]
    #[case(" TOO EASY ", Some(PerceivedEffort::TooEasy))]
    #[case("fine", None)]
    #[case("", None)]
    fn test_perceived_effort_parse(#[case] input: &str, #[case] expected: Option<PerceivedEffort>) {
        assert_eq!(PerceivedEffort::parse(input), expected);
    }

    #[rstest]
    #[case("too easy", 11)]
    #[case("too hard", 9)]
    #[case("fine", 10)]
    fn test_adjust_sets_reps(#[case] text: &str, #[case] reps: u32) {
        let sessions = vec![session(1, Some(3), &["Squats"])];
        assert_eq!(
            adjust_sets_reps(
                Sets::new(3).unwrap(),
                Reps::new(10).unwrap(),
                "Squats",
                &sessions,
                &comment("Squats", text),
            ),
            (Sets::new(3).unwrap(), Reps::new(reps).unwrap())
        );
    }

    #[test]
    fn test_adjust_sets_reps_floors_reps_at_one() {
        let sessions = vec![session(1, Some(1), &["Planks"])];
        assert_eq!(
            adjust_sets_reps(
                Sets::new(2).unwrap(),
                Reps::new(1).unwrap(),
                "Planks",
                &sessions,
                &comment("Planks", "too hard"),
            ),
            (Sets::new(2).unwrap(), Reps::new(1).unwrap())
        );
    }

    #[test]
    fn test_adjust_sets_reps_without_past_occurrence() {
        assert_eq!(
            adjust_sets_reps(
                Sets::new(3).unwrap(),
                Reps::new(10).unwrap(),
                "Squats",
                &[],
                &comment("Squats", "too easy"),
            ),
            (Sets::new(3).unwrap(), Reps::new(10).unwrap())
        );
    }

    #[test]
    fn test_adjust_sets_reps_ignores_rating_values() {
        let sessions = vec![session(1, Some(2), &["Rows"])];
        let mut feedback = Feedback::new();
        feedback.insert("Rows", FeedbackValue::Rating(Rating::new(9).unwrap()));
        assert_eq!(
            adjust_sets_reps(
                Sets::new(3).unwrap(),
                Reps::new(10).unwrap(),
                "Rows",
                &sessions,
                &feedback,
            ),
            (Sets::new(3).unwrap(), Reps::new(10).unwrap())
        );
    }

    #[test]
    fn test_average_rating() {
        let mut feedback = Feedback::new();
        assert_eq!(average_rating(&feedback), 0.0);
        feedback.insert("Squats", FeedbackValue::Rating(Rating::new(4).unwrap()));
        feedback.insert("Rows", FeedbackValue::Rating(Rating::new(8).unwrap()));
        feedback.insert("Planks", FeedbackValue::Comment("too easy".to_string()));
        assert_eq!(average_rating(&feedback), 6.0);
    }
}
