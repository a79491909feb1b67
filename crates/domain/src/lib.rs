#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod plan;
mod service;
mod template;
mod training;
mod user;

pub use catalog::Category;
pub use error::{ReadError, StorageError, WriteError};
pub use plan::{Plan, PlanRepository, PlannedExercise, Session, Week, generate};
pub use service::{DeloadAdvice, PlanError, Service};
pub use template::RepScheme;
pub use training::{
    ExercisePerformance, ExerciseReport, LogConfirmation, LoggedExercise, Period, PersonalRecord,
    Plateau, Report, ReportData, Summary, TrainingLog, Trend, WorkoutEntry, WorkoutRepository,
};
pub use user::{Assessment, Equipment, Experience, Goal, ProfileRepository, Split, UserProfile};
