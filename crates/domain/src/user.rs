use std::{collections::BTreeSet, fmt, ops::RangeInclusive, slice::Iter};

use crate::Equipment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(LevelError::Unknown(value.trim().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("Unknown fitness level \"{0}\" (expected beginner, intermediate or advanced)")]
    Unknown(String),
}

/// Supported session lengths. Other durations are rejected instead of being
/// silently treated as an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionDuration {
    Half,
    ThreeQuarters,
    Hour,
}

impl SessionDuration {
    pub fn iter() -> Iter<'static, SessionDuration> {
        static DURATIONS: [SessionDuration; 3] = [
            SessionDuration::Half,
            SessionDuration::ThreeQuarters,
            SessionDuration::Hour,
        ];
        DURATIONS.iter()
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::Half => 30,
            SessionDuration::ThreeQuarters => 45,
            SessionDuration::Hour => 60,
        }
    }

    #[must_use]
    pub fn warmup_count(self) -> usize {
        match self {
            SessionDuration::Half | SessionDuration::ThreeQuarters => 2,
            SessionDuration::Hour => 3,
        }
    }

    #[must_use]
    pub fn base_main_sets(self) -> u32 {
        match self {
            SessionDuration::Half => 2,
            SessionDuration::ThreeQuarters => 3,
            SessionDuration::Hour => 4,
        }
    }

    #[must_use]
    pub fn stretch_count_range(self) -> RangeInclusive<usize> {
        match self {
            SessionDuration::Half | SessionDuration::ThreeQuarters => 2..=3,
            SessionDuration::Hour => 4..=5,
        }
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = DurationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            30 => Ok(SessionDuration::Half),
            45 => Ok(SessionDuration::ThreeQuarters),
            60 => Ok(SessionDuration::Hour),
            _ => Err(DurationError::Unsupported(value)),
        }
    }
}

impl TryFrom<&str> for SessionDuration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => SessionDuration::try_from(parsed_value),
            Err(_) => Err(DurationError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("Duration must be 30, 45 or 60 minutes ({0} is not supported)")]
    Unsupported(u32),
    #[error("Duration must be a whole number of minutes")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub level: Level,
    pub equipment: BTreeSet<Equipment>,
    pub duration: SessionDuration,
}
