use std::collections::BTreeMap;

use chrono::Local;
use log::{debug, error};

use crate::{
    Assessment, Category, Equipment, Experience, Goal, LogConfirmation, LoggedExercise, Period,
    PersonalRecord, Plan, PlanRepository, Plateau, ProfileRepository, ReadError, Report, Split,
    TrainingLog, UserProfile, WorkoutRepository, WriteError, catalog, plan,
};

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("no user profile, assessment required")]
    NoProfile,
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeloadAdvice {
    pub recommended: bool,
    pub weeks_trained: u32,
    pub fatigue_score: f32,
    pub message: String,
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

/// Orchestrates the exercise catalog, the plan generator and the training
/// log on top of a persistence backend.
///
/// The profile and the full workout history are loaded once at construction;
/// every mutating operation rewrites the affected collection in full.
pub struct Service<R> {
    repository: R,
    profile: Option<UserProfile>,
    log: TrainingLog,
}

impl<R> Service<R>
where
    R: ProfileRepository + PlanRepository + WorkoutRepository,
{
    pub fn new(repository: R) -> Result<Self, ReadError> {
        let profile = log_on_error!(repository.read_profile(), "load", "profile")?;
        let workouts = log_on_error!(repository.read_workouts(), "load", "workouts")?;
        debug!("loaded {} workout entries", workouts.len());
        Ok(Self {
            repository,
            profile,
            log: TrainingLog::new(workouts),
        })
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn training_log(&self) -> &TrainingLog {
        &self.log
    }

    pub fn assess_user(
        &mut self,
        goal: Goal,
        experience: Experience,
        equipment: Equipment,
        days_per_week: u8,
        session_duration: u32,
        limitations: Vec<String>,
    ) -> Result<Assessment, WriteError> {
        let now = Local::now().naive_local();
        let recommended_split = Split::for_days_per_week(days_per_week);
        let profile = UserProfile {
            goal,
            experience,
            equipment,
            days_per_week,
            session_duration,
            limitations,
            recommended_split,
            created: now,
            updated: now,
        };
        log_on_error!(self.repository.write_profile(&profile), "save", "profile")?;
        self.profile = Some(profile.clone());
        Ok(Assessment {
            message: format!(
                "Assessment complete. Recommended: {recommended_split} split, \
                 {days_per_week}x/week for {}.",
                goal.description()
            ),
            profile,
        })
    }

    /// Generate and persist a plan from the stored profile.
    ///
    /// A split override only affects this plan, not the profile.
    pub fn generate_plan(&self, weeks: u32, split: Option<Split>) -> Result<Plan, PlanError> {
        let Some(profile) = &self.profile else {
            return Err(PlanError::NoProfile);
        };
        let plan = plan::generate(
            split.unwrap_or(profile.recommended_split),
            profile.experience,
            profile.goal,
            profile.equipment,
            &profile.limitations,
            weeks,
        );
        log_on_error!(self.repository.write_plan(&plan), "save", "plan")?;
        Ok(plan)
    }

    pub fn log_workout(
        &mut self,
        exercises: Vec<LoggedExercise>,
        notes: Option<String>,
    ) -> Result<LogConfirmation, WriteError> {
        let confirmation = self.log.log(exercises, notes);
        log_on_error!(
            self.repository.write_workouts(self.log.entries()),
            "save",
            "workouts"
        )?;
        Ok(confirmation)
    }

    #[must_use]
    pub fn progress_report(&self, exercise: Option<&str>, period: Period) -> Report {
        self.log.report(exercise, period)
    }

    #[must_use]
    pub fn check_plateau(&self, exercise: &str) -> Plateau {
        self.log.detect_plateau(exercise)
    }

    #[must_use]
    pub fn recommend_deload(&self) -> DeloadAdvice {
        let weeks_trained = self.log.consecutive_weeks();
        let fatigue_score = self.log.estimate_fatigue();
        let recommended = weeks_trained >= 6 || fatigue_score > 7.0;
        DeloadAdvice {
            recommended,
            weeks_trained,
            fatigue_score,
            message: if recommended {
                "Time for a deload week!".to_string()
            } else {
                format!("Keep training. Deload in ~{} weeks.", 6 - weeks_trained)
            },
        }
    }

    #[must_use]
    pub fn personal_records(&self) -> BTreeMap<String, PersonalRecord> {
        self.log.personal_records()
    }

    #[must_use]
    pub fn exercise_info(&self, name: &str) -> Option<&'static catalog::Exercise> {
        catalog::lookup(name)
    }

    #[must_use]
    pub fn exercise_alternatives(&self, name: &str, reason: catalog::Reason) -> Vec<&'static str> {
        catalog::alternatives(name, reason)
    }

    #[must_use]
    pub fn exercises_by_muscle(&self, muscle: &str) -> Vec<(&'static str, Category)> {
        catalog::exercises_by_muscle(muscle)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{ReportData, StorageError, WorkoutEntry};

    use super::*;

    #[derive(Default)]
    struct InMemory {
        profile: RefCell<Option<UserProfile>>,
        plan: RefCell<Option<Plan>>,
        workouts: RefCell<Vec<WorkoutEntry>>,
        fail_writes: bool,
    }

    impl ProfileRepository for &InMemory {
        fn read_profile(&self) -> Result<Option<UserProfile>, ReadError> {
            Ok(self.profile.borrow().clone())
        }

        fn write_profile(&self, profile: &UserProfile) -> Result<(), WriteError> {
            if self.fail_writes {
                return Err(WriteError::Storage(StorageError::Io(
                    std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                )));
            }
            *self.profile.borrow_mut() = Some(profile.clone());
            Ok(())
        }
    }

    impl PlanRepository for &InMemory {
        fn write_plan(&self, plan: &Plan) -> Result<(), WriteError> {
            *self.plan.borrow_mut() = Some(plan.clone());
            Ok(())
        }
    }

    impl WorkoutRepository for &InMemory {
        fn read_workouts(&self) -> Result<Vec<WorkoutEntry>, ReadError> {
            Ok(self.workouts.borrow().clone())
        }

        fn write_workouts(&self, workouts: &[WorkoutEntry]) -> Result<(), WriteError> {
            *self.workouts.borrow_mut() = workouts.to_vec();
            Ok(())
        }
    }

    fn exercise(name: &str, sets: u32, reps: u32, weight: f32) -> LoggedExercise {
        LoggedExercise {
            name: name.to_string(),
            sets,
            reps,
            weight,
        }
    }

    #[test]
    fn test_assess_user_persists_profile() {
        let repository = InMemory::default();
        let mut service = Service::new(&repository).unwrap();
        let assessment = service
            .assess_user(
                Goal::MuscleBuilding,
                Experience::Intermediate,
                Equipment::FullGym,
                4,
                60,
                vec![],
            )
            .unwrap();
        assert_eq!(assessment.profile.recommended_split, Split::UpperLower);
        assert_eq!(
            assessment.message,
            "Assessment complete. Recommended: upper_lower split, 4x/week for muscle building."
        );
        assert_eq!(
            repository.profile.borrow().as_ref().unwrap().days_per_week,
            4
        );
    }

    #[test]
    fn test_assess_user_write_failure_is_surfaced() {
        let repository = InMemory {
            fail_writes: true,
            ..InMemory::default()
        };
        let mut service = Service::new(&repository).unwrap();
        let result = service.assess_user(
            Goal::Strength,
            Experience::Beginner,
            Equipment::FullGym,
            3,
            45,
            vec![],
        );
        assert!(matches!(
            result,
            Err(WriteError::Storage(StorageError::Io(_)))
        ));
        assert_eq!(service.profile(), None);
    }

    #[test]
    fn test_generate_plan_requires_assessment() {
        let repository = InMemory::default();
        let service = Service::new(&repository).unwrap();
        assert!(matches!(
            service.generate_plan(4, None),
            Err(PlanError::NoProfile)
        ));
    }

    #[test]
    fn test_assess_then_generate_plan() {
        let repository = InMemory::default();
        let mut service = Service::new(&repository).unwrap();
        service
            .assess_user(
                Goal::MuscleBuilding,
                Experience::Intermediate,
                Equipment::FullGym,
                4,
                60,
                vec![],
            )
            .unwrap();
        let plan = service.generate_plan(2, None).unwrap();
        assert_eq!(plan.split, Split::UpperLower);
        assert_eq!(plan.weeks.len(), 2);
        for week in &plan.weeks {
            assert_eq!(week.sessions.len(), 4);
            for exercise in week.sessions.iter().flat_map(|s| &s.exercises) {
                if exercise.category == Category::Compound {
                    assert_eq!(
                        (exercise.sets, exercise.reps, exercise.rest),
                        (3, "8-12", "60-90 sec")
                    );
                }
            }
        }
        assert_eq!(repository.plan.borrow().as_ref(), Some(&plan));
    }

    #[test]
    fn test_generate_plan_split_override_keeps_profile() {
        let repository = InMemory::default();
        let mut service = Service::new(&repository).unwrap();
        service
            .assess_user(
                Goal::MuscleBuilding,
                Experience::Intermediate,
                Equipment::FullGym,
                4,
                60,
                vec![],
            )
            .unwrap();
        let plan = service.generate_plan(1, Some(Split::Ppl)).unwrap();
        assert_eq!(plan.split, Split::Ppl);
        assert_eq!(
            service.profile().unwrap().recommended_split,
            Split::UpperLower
        );
    }

    #[test]
    fn test_log_workout_persists_full_history() {
        let repository = InMemory::default();
        let mut service = Service::new(&repository).unwrap();
        service
            .log_workout(vec![exercise("Bench Press", 3, 8, 180.0)], None)
            .unwrap();
        let confirmation = service
            .log_workout(vec![exercise("Bench Press", 3, 8, 185.0)], None)
            .unwrap();
        assert_eq!(confirmation.workout_number, 2);
        assert_eq!(
            confirmation.insights,
            vec!["PR on Bench Press! 180 -> 185"]
        );
        assert_eq!(repository.workouts.borrow().len(), 2);
    }

    #[test]
    fn test_workout_history_survives_reload() {
        let repository = InMemory::default();
        let mut service = Service::new(&repository).unwrap();
        service
            .log_workout(vec![exercise("Squat", 3, 5, 225.0)], None)
            .unwrap();
        drop(service);

        let service = Service::new(&repository).unwrap();
        let report = service.progress_report(None, Period::Month);
        assert_eq!(report.total_workouts, 1);
        assert!(matches!(report.data, ReportData::Overall(Some(_))));
    }

    #[test]
    fn test_recommend_deload_fresh_log() {
        let repository = InMemory::default();
        let service = Service::new(&repository).unwrap();
        let advice = service.recommend_deload();
        assert!(!advice.recommended);
        assert_eq!(advice.weeks_trained, 0);
        assert_eq!(advice.message, "Keep training. Deload in ~6 weeks.");
    }

    #[test]
    fn test_exercise_info_forwards_to_catalog() {
        let repository = InMemory::default();
        let service = Service::new(&repository).unwrap();
        assert_eq!(
            service.exercise_info("bench press").map(|e| e.name),
            Some("Bench Press")
        );
        assert_eq!(
            service.exercise_alternatives("squat", catalog::Reason::General),
            vec![
                "Goblet Squat",
                "Front Squat",
                "Leg Press",
                "Bulgarian Split Squat",
                "Box Squat"
            ]
        );
    }
}
