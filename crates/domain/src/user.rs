use chrono::NaiveDateTime;
use derive_more::Display;

use crate::{ReadError, WriteError};

pub trait ProfileRepository {
    fn read_profile(&self) -> Result<Option<UserProfile>, ReadError>;
    fn write_profile(&self, profile: &UserProfile) -> Result<(), WriteError>;
}

/// The single persisted training profile.
///
/// Created on assessment and overwritten wholesale on re-assessment. The
/// recommended split is derived from the training frequency and may be
/// overridden at plan-generation time without modifying the stored profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub goal: Goal,
    pub experience: Experience,
    pub equipment: Equipment,
    pub days_per_week: u8,
    pub session_duration: u32,
    pub limitations: Vec<String>,
    pub recommended_split: Split,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub profile: UserProfile,
    pub message: String,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    #[display("strength")]
    Strength,
    #[display("muscle_building")]
    MuscleBuilding,
    #[display("fat_loss")]
    FatLoss,
    #[display("endurance")]
    Endurance,
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        match value {
            "strength" => Goal::Strength,
            "fat_loss" => Goal::FatLoss,
            "endurance" => Goal::Endurance,
            _ => Goal::MuscleBuilding,
        }
    }
}

impl Goal {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::MuscleBuilding => "muscle building",
            Goal::FatLoss => "fat loss",
            Goal::Endurance => "endurance",
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    #[display("beginner")]
    Beginner,
    #[display("intermediate")]
    Intermediate,
    #[display("advanced")]
    Advanced,
}

impl From<&str> for Experience {
    fn from(value: &str) -> Self {
        match value {
            "beginner" => Experience::Beginner,
            "advanced" => Experience::Advanced,
            _ => Experience::Intermediate,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Equipment {
    #[display("full_gym")]
    FullGym,
    #[display("home_gym")]
    HomeGym,
    #[display("bodyweight")]
    Bodyweight,
    #[display("limited")]
    Limited,
}

impl From<&str> for Equipment {
    fn from(value: &str) -> Self {
        match value {
            "home_gym" => Equipment::HomeGym,
            "bodyweight" => Equipment::Bodyweight,
            "limited" => Equipment::Limited,
            _ => Equipment::FullGym,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    #[display("full_body")]
    FullBody,
    #[display("upper_lower")]
    UpperLower,
    #[display("ppl")]
    Ppl,
    #[display("upper_lower_ppl")]
    Hybrid,
}

impl From<&str> for Split {
    fn from(value: &str) -> Self {
        match value {
            "upper_lower" => Split::UpperLower,
            "ppl" => Split::Ppl,
            "upper_lower_ppl" => Split::Hybrid,
            _ => Split::FullBody,
        }
    }
}

impl Split {
    /// Recommended split for a given training frequency.
    #[must_use]
    pub fn for_days_per_week(days_per_week: u8) -> Split {
        match days_per_week {
            4 => Split::UpperLower,
            5 => Split::Hybrid,
            6 => Split::Ppl,
            _ => Split::FullBody,
        }
    }
}
