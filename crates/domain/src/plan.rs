use crate::{
    Category, Equipment, Experience, Goal, Split, WriteError,
    template::{self, TemplateSession},
};

pub trait PlanRepository {
    fn write_plan(&self, plan: &Plan) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub split: Split,
    pub goal: Goal,
    pub experience: Experience,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub number: u32,
    pub sessions: Vec<Session>,
    pub notes: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub name: String,
    pub category: Category,
    pub muscle: String,
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
}

/// Generate a multi-week plan from the split's template.
///
/// The template is copied by value before any adjustment, so repeated calls
/// never observe each other's substitutions. Beginners get every session
/// truncated to its first five slots. Equipment substitutions are applied
/// before limitation substitutions; limitation substitutions match the
/// current slot name, in the order the limitations are given.
#[must_use]
pub fn generate(
    split: Split,
    experience: Experience,
    goal: Goal,
    equipment: Equipment,
    limitations: &[String],
    weeks: u32,
) -> Plan {
    let template = template::for_split(split);
    let mut sessions = template
        .sessions
        .iter()
        .map(Session::from)
        .collect::<Vec<_>>();

    if experience == Experience::Beginner {
        for session in &mut sessions {
            session.exercises.truncate(5);
        }
    }

    if let Some(substitutions) = template::equipment_substitutions(equipment) {
        substitute(&mut sessions, substitutions);
    }

    for limitation in limitations {
        if let Some(substitutions) = template::limitation_substitutions(limitation) {
            substitute(&mut sessions, substitutions);
        }
    }

    let scheme = template::rep_scheme(goal);
    for session in &mut sessions {
        for exercise in &mut session.exercises {
            exercise.sets = scheme.sets;
            if exercise.category == Category::Compound {
                exercise.reps = scheme.reps;
                exercise.rest = scheme.rest;
            } else {
                exercise.reps = "10-15";
                exercise.rest = "60 sec";
            }
        }
    }

    Plan {
        split,
        goal,
        experience,
        weeks: (1..=weeks)
            .map(|number| Week {
                number,
                sessions: sessions.clone(),
                notes: week_notes(number, weeks),
            })
            .collect(),
    }
}

fn substitute(sessions: &mut [Session], substitutions: &[(&str, &str)]) {
    for session in sessions {
        for exercise in &mut session.exercises {
            if let Some((_, replacement)) = substitutions
                .iter()
                .find(|(name, _)| *name == exercise.name)
            {
                exercise.name = (*replacement).to_string();
            }
        }
    }
}

fn week_notes(number: u32, total: u32) -> &'static str {
    if number == 1 {
        "Focus on form. Use moderate weights to learn movements."
    } else if number == total {
        "Final week! Push hard but consider a deload after this."
    } else if number % 4 == 0 {
        "Deload week if needed. Reduce volume by 40%."
    } else {
        "Progressive overload. Try to beat last week's numbers."
    }
}

impl From<&TemplateSession> for Session {
    fn from(session: &TemplateSession) -> Self {
        Session {
            name: session.name.to_string(),
            exercises: session
                .exercises
                .iter()
                .map(|slot| PlannedExercise {
                    name: slot.name.to_string(),
                    category: slot.category,
                    muscle: slot.muscle.to_string(),
                    sets: 0,
                    reps: "",
                    rest: "",
                })
                .collect(),
        }
    }
}
