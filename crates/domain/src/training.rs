use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use derive_more::Display;

use crate::{ReadError, WriteError};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<WorkoutEntry>, ReadError>;
    fn write_workouts(&self, workouts: &[WorkoutEntry]) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub date: NaiveDateTime,
    pub exercises: Vec<LoggedExercise>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
}

impl Default for LoggedExercise {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: 3,
            reps: 0,
            weight: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePerformance {
    pub date: NaiveDateTime,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfirmation {
    pub workout_number: usize,
    pub exercises_logged: usize,
    pub insights: Vec<String>,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    #[display("week")]
    Week = 7,
    #[display("month")]
    Month = 30,
    #[display("quarter")]
    Quarter = 90,
    #[display("year")]
    Year = 365,
}

impl Period {
    #[must_use]
    pub fn days(self) -> i64 {
        self as i64
    }
}

impl From<&str> for Period {
    fn from(value: &str) -> Self {
        match value {
            "week" => Period::Week,
            "quarter" => Period::Quarter,
            "year" => Period::Year,
            _ => Period::Month,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub period: Period,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub total_workouts: usize,
    pub data: ReportData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Exercise {
        name: String,
        report: Option<ExerciseReport>,
    },
    Overall(Option<Summary>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseReport {
    pub total_sessions: usize,
    pub starting_weight: f32,
    pub current_weight: f32,
    pub max_weight: f32,
    pub weight_gain: f32,
    pub trend: Trend,
    pub history: Vec<ExercisePerformance>,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    #[display("improving")]
    Improving,
    #[display("stable")]
    Stable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub workouts_completed: usize,
    pub unique_exercises: usize,
    pub most_frequent: Vec<(String, usize)>,
    pub consistency_score: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plateau {
    InsufficientData,
    Detected {
        sessions_analyzed: usize,
        weight_range: f32,
        recent_weights: Vec<f32>,
        recommendations: &'static [&'static str],
    },
    Progressing {
        sessions_analyzed: usize,
        weight_range: f32,
        recent_weights: Vec<f32>,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub weight: f32,
    pub reps: u32,
    pub date: NaiveDateTime,
}

const PLATEAU_RECOMMENDATIONS: [&str; 6] = [
    "Consider a deload week (reduce weight by 40%)",
    "Try changing rep range (if doing 8-12, try 4-6)",
    "Add a variation of this exercise",
    "Increase training frequency for this muscle",
    "Check your nutrition and sleep",
    "Try different tempo (slow negatives)",
];

/// The complete, append-only workout history.
///
/// All entries are held in memory; persistence is the caller's concern and
/// rewrites the full history after each append.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainingLog {
    entries: Vec<WorkoutEntry>,
}

impl TrainingLog {
    #[must_use]
    pub fn new(entries: Vec<WorkoutEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn log(
        &mut self,
        exercises: Vec<LoggedExercise>,
        notes: Option<String>,
    ) -> LogConfirmation {
        self.log_at(Local::now().naive_local(), exercises, notes)
    }

    pub fn log_at(
        &mut self,
        date: NaiveDateTime,
        exercises: Vec<LoggedExercise>,
        notes: Option<String>,
    ) -> LogConfirmation {
        let exercises_logged = exercises.len();
        let logged = exercises.clone();
        self.entries.push(WorkoutEntry {
            date,
            exercises,
            notes,
        });

        // The history already contains the entry logged above, so the
        // previous performance is the second to last data point.
        let mut insights = vec![];
        for exercise in &logged {
            let history = self.history(&exercise.name);
            if history.len() < 2 {
                continue;
            }
            let previous = &history[history.len() - 2];
            if exercise.weight > previous.weight {
                insights.push(format!(
                    "PR on {}! {} -> {}",
                    exercise.name, previous.weight, exercise.weight
                ));
            }
            if (exercise.weight - previous.weight).abs() < f32::EPSILON
                && exercise.reps > previous.reps
            {
                insights.push(format!(
                    "Rep PR on {}! {} -> {} reps",
                    exercise.name, previous.reps, exercise.reps
                ));
            }
        }
        if insights.is_empty() {
            insights.push("Solid workout! Keep pushing.".to_string());
        }

        LogConfirmation {
            workout_number: self.entries.len(),
            exercises_logged,
            insights,
        }
    }

    /// All recorded performances of an exercise, oldest first.
    #[must_use]
    pub fn history(&self, name: &str) -> Vec<ExercisePerformance> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .exercises
                    .iter()
                    .filter(|exercise| exercise.name.eq_ignore_ascii_case(name))
                    .map(|exercise| ExercisePerformance {
                        date: entry.date,
                        sets: exercise.sets,
                        reps: exercise.reps,
                        weight: exercise.weight,
                    })
            })
            .collect()
    }

    #[must_use]
    pub fn report(&self, exercise: Option<&str>, period: Period) -> Report {
        let end = Local::now().naive_local();
        let start = end - Duration::days(period.days());
        let in_period = self
            .entries
            .iter()
            .filter(|entry| entry.date >= start)
            .collect::<Vec<_>>();
        let data = match exercise {
            Some(name) => ReportData::Exercise {
                name: name.to_string(),
                report: exercise_report(name, &in_period),
            },
            None => ReportData::Overall(overall_summary(&in_period)),
        };
        Report {
            period,
            start,
            end,
            total_workouts: in_period.len(),
            data,
        }
    }

    /// Check the most recent four sessions of an exercise for stagnation.
    #[must_use]
    pub fn detect_plateau(&self, name: &str) -> Plateau {
        let history = self.history(name);
        if history.len() < 4 {
            return Plateau::InsufficientData;
        }
        let recent = &history[history.len() - 4..];
        let weights = recent
            .iter()
            .map(|performance| performance.weight)
            .collect::<Vec<_>>();
        let max = weights.iter().copied().fold(f32::MIN, f32::max);
        let min = weights.iter().copied().fold(f32::MAX, f32::min);
        let weight_range = max - min;
        if weight_range <= 5.0 {
            Plateau::Detected {
                sessions_analyzed: recent.len(),
                weight_range,
                recent_weights: weights,
                recommendations: &PLATEAU_RECOMMENDATIONS,
            }
        } else {
            Plateau::Progressing {
                sessions_analyzed: recent.len(),
                weight_range,
                recent_weights: weights,
                message: "No plateau detected. Keep progressing!",
            }
        }
    }

    /// The current streak of ISO weeks with at least one workout, counted
    /// backwards from the most recent training week.
    #[must_use]
    pub fn consecutive_weeks(&self) -> u32 {
        let weeks = self
            .entries
            .iter()
            .map(|entry| {
                let week = entry.date.date().iso_week();
                (week.year(), week.week())
            })
            .collect::<BTreeSet<_>>();
        if weeks.is_empty() {
            return 0;
        }

        let newest_first = weeks.into_iter().rev().collect::<Vec<_>>();
        let mut consecutive = 1;
        for pair in newest_first.windows(2) {
            let (later_year, later_week) = pair[0];
            let (year, week) = pair[1];
            if later_year == year && later_week == week + 1 {
                consecutive += 1;
            } else if later_year == year + 1 && later_week == 1 && week >= 51 {
                consecutive += 1;
            } else {
                break;
            }
        }
        consecutive
    }

    /// Fatigue on a 1-10 scale, estimated from the last two weeks of
    /// training frequency and set volume.
    #[must_use]
    pub fn estimate_fatigue(&self) -> f32 {
        if self.entries.is_empty() {
            return 1.0;
        }
        let cutoff = Local::now().naive_local() - Duration::days(14);
        let recent = self
            .entries
            .iter()
            .filter(|entry| entry.date >= cutoff)
            .collect::<Vec<_>>();
        if recent.is_empty() {
            return 1.0;
        }

        let total_sets = recent
            .iter()
            .flat_map(|entry| &entry.exercises)
            .map(|exercise| exercise.sets)
            .sum::<u32>();
        #[allow(clippy::cast_precision_loss)]
        let workout_component = (recent.len() as f32 / 2.0).min(5.0);
        #[allow(clippy::cast_precision_loss)]
        let volume_component = (total_sets as f32 / 50.0).min(5.0);
        ((workout_component + volume_component) * 10.0).round() / 10.0
    }

    /// All-time heaviest performance per exercise. On equal weight the
    /// earlier performance is kept.
    #[must_use]
    pub fn personal_records(&self) -> BTreeMap<String, PersonalRecord> {
        let mut records: BTreeMap<String, PersonalRecord> = BTreeMap::new();
        for entry in &self.entries {
            for exercise in &entry.exercises {
                let record = records.get(&exercise.name);
                if record.is_none_or(|record| exercise.weight > record.weight) {
                    records.insert(
                        exercise.name.clone(),
                        PersonalRecord {
                            weight: exercise.weight,
                            reps: exercise.reps,
                            date: entry.date,
                        },
                    );
                }
            }
        }
        records
    }
}

fn exercise_report(name: &str, workouts: &[&WorkoutEntry]) -> Option<ExerciseReport> {
    let history = workouts
        .iter()
        .flat_map(|entry| {
            entry
                .exercises
                .iter()
                .filter(|exercise| exercise.name.eq_ignore_ascii_case(name))
                .map(|exercise| ExercisePerformance {
                    date: entry.date,
                    sets: exercise.sets,
                    reps: exercise.reps,
                    weight: exercise.weight,
                })
        })
        .collect::<Vec<_>>();
    if history.is_empty() {
        return None;
    }

    // Unweighted sets do not contribute to the weight statistics.
    let weights = history
        .iter()
        .map(|performance| performance.weight)
        .filter(|weight| weight.abs() > 0.0)
        .collect::<Vec<_>>();
    let starting_weight = weights.first().copied().unwrap_or(0.0);
    let current_weight = weights.last().copied().unwrap_or(0.0);
    let max_weight = weights.iter().copied().fold(0.0_f32, f32::max);
    let weight_gain = if weights.len() >= 2 {
        current_weight - starting_weight
    } else {
        0.0
    };
    let trend = if weights.len() >= 2 && current_weight > starting_weight {
        Trend::Improving
    } else {
        Trend::Stable
    };

    Some(ExerciseReport {
        total_sessions: history.len(),
        starting_weight,
        current_weight,
        max_weight,
        weight_gain,
        trend,
        history,
    })
}

fn overall_summary(workouts: &[&WorkoutEntry]) -> Option<Summary> {
    if workouts.is_empty() {
        return None;
    }

    // Counted in encounter order so that ties in the frequency ranking stay
    // stable.
    let mut counts: Vec<(String, usize)> = vec![];
    for exercise in workouts.iter().flat_map(|entry| &entry.exercises) {
        match counts.iter_mut().find(|(name, _)| *name == exercise.name) {
            Some((_, count)) => *count += 1,
            None => counts.push((exercise.name.clone(), 1)),
        }
    }
    let unique_exercises = counts.len();
    let mut most_frequent = counts;
    most_frequent.sort_by(|a, b| b.1.cmp(&a.1));
    most_frequent.truncate(5);

    let dates = workouts
        .iter()
        .map(|entry| entry.date.date())
        .collect::<Vec<_>>();

    Some(Summary {
        workouts_completed: workouts.len(),
        unique_exercises,
        most_frequent,
        consistency_score: consistency_score(&dates),
    })
}

/// Map the average gap between workouts to a 0-100 score.
fn consistency_score(dates: &[NaiveDate]) -> f32 {
    if dates.is_empty() {
        return 0.0;
    }
    if dates.len() < 2 {
        return 100.0;
    }

    let mut dates = dates.to_vec();
    dates.sort_unstable();
    #[allow(clippy::cast_precision_loss)]
    let average_gap = dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days() as f32)
        .sum::<f32>()
        / (dates.len() - 1) as f32;

    if average_gap <= 3.0 {
        100.0
    } else if average_gap <= 5.0 {
        80.0
    } else if average_gap <= 7.0 {
        60.0
    } else {
        (100.0 - average_gap * 5.0).max(0.0)
    }
}
