use std::{
    fs,
    path::PathBuf,
};

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use trainer_domain as domain;
use trainer_domain::{ReadError, StorageError, WriteError};

const PROFILE_FILE: &str = "profile.json";
const PLAN_FILE: &str = "current_plan.json";
const WORKOUTS_FILE: &str = "workouts.json";

const DATA_DIR_ENV: &str = "TRAINER_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".trainer";

/// JSON-file persistence backend.
///
/// Each collection lives in its own document in the data directory and is
/// rewritten wholesale on every save. The directory is assumed to be owned
/// exclusively by a single process.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open the storage directory, creating it if necessary.
    ///
    /// The directory is resolved from the given path, the `TRAINER_DATA_DIR`
    /// environment variable or `~/.trainer`, in that order.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(dir) => PathBuf::from(dir),
                None => dirs::home_dir()
                    .ok_or_else(|| StorageError::Other("home directory not found".into()))?
                    .join(DEFAULT_DATA_DIR),
            },
        };
        fs::create_dir_all(&data_dir)?;
        debug!("using data directory {}", data_dir.display());
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, ReadError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(StorageError::from)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|err| ReadError::Storage(StorageError::Serialization(err.to_string())))
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), WriteError> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|err| WriteError::Storage(StorageError::Serialization(err.to_string())))?;
        fs::write(self.data_dir.join(file), content).map_err(StorageError::from)?;
        Ok(())
    }
}

impl domain::ProfileRepository for FileStorage {
    fn read_profile(&self) -> Result<Option<domain::UserProfile>, ReadError> {
        Ok(self
            .read::<UserProfile>(PROFILE_FILE)?
            .map(domain::UserProfile::from))
    }

    fn write_profile(&self, profile: &domain::UserProfile) -> Result<(), WriteError> {
        self.write(PROFILE_FILE, &UserProfile::from(profile))
    }
}

impl domain::PlanRepository for FileStorage {
    fn write_plan(&self, plan: &domain::Plan) -> Result<(), WriteError> {
        self.write(PLAN_FILE, &Plan::from(plan))
    }
}

impl domain::WorkoutRepository for FileStorage {
    fn read_workouts(&self) -> Result<Vec<domain::WorkoutEntry>, ReadError> {
        Ok(self
            .read::<Vec<WorkoutEntry>>(WORKOUTS_FILE)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::WorkoutEntry::from)
            .collect())
    }

    fn write_workouts(&self, workouts: &[domain::WorkoutEntry]) -> Result<(), WriteError> {
        self.write(
            WORKOUTS_FILE,
            &workouts.iter().map(WorkoutEntry::from).collect::<Vec<_>>(),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct UserProfile {
    goal: String,
    experience_level: String,
    equipment: String,
    days_per_week: u8,
    session_duration: u32,
    limitations: Vec<String>,
    recommended_split: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<&domain::UserProfile> for UserProfile {
    fn from(profile: &domain::UserProfile) -> Self {
        Self {
            goal: profile.goal.to_string(),
            experience_level: profile.experience.to_string(),
            equipment: profile.equipment.to_string(),
            days_per_week: profile.days_per_week,
            session_duration: profile.session_duration,
            limitations: profile.limitations.clone(),
            recommended_split: profile.recommended_split.to_string(),
            created_at: profile.created,
            updated_at: profile.updated,
        }
    }
}

impl From<UserProfile> for domain::UserProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            goal: profile.goal.as_str().into(),
            experience: profile.experience_level.as_str().into(),
            equipment: profile.equipment.as_str().into(),
            days_per_week: profile.days_per_week,
            session_duration: profile.session_duration,
            limitations: profile.limitations,
            recommended_split: profile.recommended_split.as_str().into(),
            created: profile.created_at,
            updated: profile.updated_at,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Plan {
    split_type: String,
    goal: String,
    experience_level: String,
    weeks: Vec<Week>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Week {
    week_number: u32,
    sessions: Vec<Session>,
    notes: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Session {
    name: String,
    exercises: Vec<PlannedExercise>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct PlannedExercise {
    name: String,
    #[serde(rename = "type")]
    category: String,
    muscle: String,
    sets: u32,
    reps: String,
    rest: String,
}

impl From<&domain::Plan> for Plan {
    fn from(plan: &domain::Plan) -> Self {
        Self {
            split_type: plan.split.to_string(),
            goal: plan.goal.to_string(),
            experience_level: plan.experience.to_string(),
            weeks: plan
                .weeks
                .iter()
                .map(|week| Week {
                    week_number: week.number,
                    sessions: week
                        .sessions
                        .iter()
                        .map(|session| Session {
                            name: session.name.clone(),
                            exercises: session
                                .exercises
                                .iter()
                                .map(|exercise| PlannedExercise {
                                    name: exercise.name.clone(),
                                    category: exercise.category.to_string(),
                                    muscle: exercise.muscle.clone(),
                                    sets: exercise.sets,
                                    reps: exercise.reps.to_string(),
                                    rest: exercise.rest.to_string(),
                                })
                                .collect(),
                        })
                        .collect(),
                    notes: week.notes.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct WorkoutEntry {
    date: NaiveDateTime,
    exercises: Vec<LoggedExercise>,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct LoggedExercise {
    #[serde(alias = "exercise")]
    name: String,
    #[serde(default = "default_sets")]
    sets: u32,
    #[serde(default)]
    reps: u32,
    #[serde(default)]
    weight: f32,
}

fn default_sets() -> u32 {
    3
}

impl From<&domain::WorkoutEntry> for WorkoutEntry {
    fn from(entry: &domain::WorkoutEntry) -> Self {
        Self {
            date: entry.date,
            exercises: entry
                .exercises
                .iter()
                .map(|exercise| LoggedExercise {
                    name: exercise.name.clone(),
                    sets: exercise.sets,
                    reps: exercise.reps,
                    weight: exercise.weight,
                })
                .collect(),
            notes: entry.notes.clone(),
        }
    }
}

impl From<WorkoutEntry> for domain::WorkoutEntry {
    fn from(entry: WorkoutEntry) -> Self {
        Self {
            date: entry.date,
            exercises: entry
                .exercises
                .into_iter()
                .map(|exercise| domain::LoggedExercise {
                    name: exercise.name,
                    sets: exercise.sets,
                    reps: exercise.reps,
                    weight: exercise.weight,
                })
                .collect(),
            notes: entry.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use trainer_domain::{
        Equipment, Experience, Goal, PlanRepository, ProfileRepository, Split, WorkoutRepository,
        generate,
    };

    use super::*;

    fn storage() -> (tempfile::TempDir, FileStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(Some(dir.path().to_path_buf())).unwrap();
        (dir, storage)
    }

    fn timestamp(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, day)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    fn profile() -> domain::UserProfile {
        domain::UserProfile {
            goal: Goal::MuscleBuilding,
            experience: Experience::Intermediate,
            equipment: Equipment::HomeGym,
            days_per_week: 4,
            session_duration: 60,
            limitations: vec!["knee".to_string()],
            recommended_split: Split::UpperLower,
            created: timestamp(1),
            updated: timestamp(1),
        }
    }

    fn workouts() -> Vec<domain::WorkoutEntry> {
        vec![
            domain::WorkoutEntry {
                date: timestamp(3),
                exercises: vec![domain::LoggedExercise {
                    name: "Bench Press".to_string(),
                    sets: 3,
                    reps: 8,
                    weight: 180.0,
                }],
                notes: Some("first session".to_string()),
            },
            domain::WorkoutEntry {
                date: timestamp(5),
                exercises: vec![domain::LoggedExercise {
                    name: "Bench Press".to_string(),
                    sets: 3,
                    reps: 8,
                    weight: 185.0,
                }],
                notes: None,
            },
        ]
    }

    #[test]
    fn test_new_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data");
        let storage = FileStorage::new(Some(path.clone())).unwrap();
        assert!(path.is_dir());
        assert_eq!(storage.data_dir(), path);
    }

    #[test]
    fn test_read_profile_missing_file() {
        let (_dir, storage) = storage();
        assert!(storage.read_profile().unwrap().is_none());
    }

    #[test]
    fn test_profile_roundtrip() {
        let (_dir, storage) = storage();
        storage.write_profile(&profile()).unwrap();
        assert_eq!(storage.read_profile().unwrap(), Some(profile()));
    }

    #[test]
    fn test_profile_document_format() {
        let (dir, storage) = storage();
        storage.write_profile(&profile()).unwrap();
        let content = fs::read_to_string(dir.path().join(PROFILE_FILE)).unwrap();
        let document: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(document["goal"], "muscle_building");
        assert_eq!(document["experience_level"], "intermediate");
        assert_eq!(document["equipment"], "home_gym");
        assert_eq!(document["recommended_split"], "upper_lower");
        assert_eq!(document["limitations"][0], "knee");
    }

    #[rstest]
    #[case(Goal::Strength, "strength")]
    #[case(Goal::MuscleBuilding, "muscle_building")]
    #[case(Goal::FatLoss, "fat_loss")]
    #[case(Goal::Endurance, "endurance")]
    fn test_profile_goal_roundtrip(#[case] goal: Goal, #[case] wire_name: &str) {
        let mut original = profile();
        original.goal = goal;
        let document = UserProfile::from(&original);
        assert_eq!(document.goal, wire_name);
        assert_eq!(domain::UserProfile::from(document), original);
    }

    #[test]
    fn test_read_workouts_missing_file() {
        let (_dir, storage) = storage();
        assert_eq!(storage.read_workouts().unwrap(), vec![]);
    }

    #[test]
    fn test_workouts_roundtrip() {
        let (_dir, storage) = storage();
        storage.write_workouts(&workouts()).unwrap();
        assert_eq!(storage.read_workouts().unwrap(), workouts());
    }

    #[test]
    fn test_write_workouts_rewrites_file_in_full() {
        let (_dir, storage) = storage();
        let mut history = workouts();
        storage.write_workouts(&history[..1]).unwrap();
        storage.write_workouts(&history).unwrap();
        assert_eq!(storage.read_workouts().unwrap(), history);

        history.truncate(1);
        storage.write_workouts(&history).unwrap();
        assert_eq!(storage.read_workouts().unwrap().len(), 1);
    }

    #[test]
    fn test_read_workouts_applies_defaults() {
        let (dir, storage) = storage();
        fs::write(
            dir.path().join(WORKOUTS_FILE),
            r#"[
                {
                    "date": "2026-08-03T18:30:00",
                    "exercises": [
                        {"exercise": "Plank", "reps": 1},
                        {"name": "Push-ups", "reps": 20, "sets": 4}
                    ]
                }
            ]"#,
        )
        .unwrap();
        let workouts = storage.read_workouts().unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].notes, None);
        let plank = &workouts[0].exercises[0];
        assert_eq!((plank.name.as_str(), plank.sets, plank.reps), ("Plank", 3, 1));
        assert!(plank.weight.abs() < f32::EPSILON);
        assert_eq!(workouts[0].exercises[1].sets, 4);
    }

    #[test]
    fn test_read_workouts_corrupt_file() {
        let (dir, storage) = storage();
        fs::write(dir.path().join(WORKOUTS_FILE), "not json").unwrap();
        assert!(matches!(
            storage.read_workouts(),
            Err(ReadError::Storage(StorageError::Serialization(_)))
        ));
    }

    #[test]
    fn test_write_plan_document_format() {
        let (dir, storage) = storage();
        let plan = generate(
            Split::UpperLower,
            Experience::Intermediate,
            Goal::MuscleBuilding,
            Equipment::FullGym,
            &[],
            2,
        );
        storage.write_plan(&plan).unwrap();
        let content = fs::read_to_string(dir.path().join(PLAN_FILE)).unwrap();
        let document: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(document["split_type"], "upper_lower");
        assert_eq!(document["weeks"].as_array().unwrap().len(), 2);
        assert_eq!(document["weeks"][0]["week_number"], 1);
        assert_eq!(document["weeks"][0]["sessions"][0]["name"], "Upper A");
        let bench = &document["weeks"][0]["sessions"][0]["exercises"][0];
        assert_eq!(bench["name"], "Bench Press");
        assert_eq!(bench["type"], "compound");
        assert_eq!(bench["sets"], 3);
        assert_eq!(bench["reps"], "8-12");
        assert_eq!(bench["rest"], "60-90 sec");
    }
}
