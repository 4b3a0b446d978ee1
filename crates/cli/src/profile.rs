use anyhow::Result;
use vigor_domain::{Level, SessionDuration, UserProfile};

use crate::prompt;

/// Profile fields that can be passed as flags. Missing fields are prompted
/// for interactively.
#[derive(clap::Args)]
pub struct ProfileArgs {
    /// Fitness level (beginner, intermediate or advanced)
    #[arg(long)]
    pub level: Option<String>,

    /// Comma-separated equipment (barbell, dumbbell, bodyweight, cable)
    #[arg(long)]
    pub equipment: Option<String>,

    /// Session duration in minutes (30, 45 or 60)
    #[arg(long)]
    pub duration: Option<u32>,
}

impl ProfileArgs {
    pub fn resolve(&self) -> Result<UserProfile> {
        let level = match &self.level {
            Some(value) => Level::try_from(value.as_str())?,
            None => prompt::level()?,
        };
        let equipment = match &self.equipment {
            Some(value) => prompt::parse_equipment(value)?,
            None => prompt::equipment()?,
        };
        let duration = match self.duration {
            Some(value) => SessionDuration::try_from(value)?,
            None => prompt::duration()?,
        };
        Ok(UserProfile {
            level,
            equipment,
            duration,
        })
    }
}
