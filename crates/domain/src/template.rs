use crate::{Category, Equipment, Goal, Split};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Template {
    pub name: &'static str,
    pub days_per_week: u8,
    pub sessions: &'static [TemplateSession],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TemplateSession {
    pub name: &'static str,
    pub exercises: &'static [Slot],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub name: &'static str,
    pub category: Category,
    pub muscle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepScheme {
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
}

pub(crate) fn for_split(split: Split) -> &'static Template {
    match split {
        Split::FullBody => &FULL_BODY,
        Split::UpperLower => &UPPER_LOWER,
        Split::Ppl => &PPL,
        Split::Hybrid => &HYBRID,
    }
}

impl Goal {
    /// The set and rep prescription applied to compound slots for this goal.
    #[must_use]
    pub fn rep_scheme(self) -> RepScheme {
        rep_scheme(self)
    }
}

pub(crate) fn rep_scheme(goal: Goal) -> RepScheme {
    match goal {
        Goal::Strength => RepScheme {
            sets: 4,
            reps: "4-6",
            rest: "3-5 min",
        },
        Goal::MuscleBuilding => RepScheme {
            sets: 3,
            reps: "8-12",
            rest: "60-90 sec",
        },
        Goal::FatLoss => RepScheme {
            sets: 3,
            reps: "12-15",
            rest: "30-60 sec",
        },
        Goal::Endurance => RepScheme {
            sets: 2,
            reps: "15-20",
            rest: "30 sec",
        },
    }
}

pub(crate) fn equipment_substitutions(equipment: Equipment) -> Option<&'static [(&'static str, &'static str)]> {
    match equipment {
        Equipment::Bodyweight => Some(&BODYWEIGHT_SUBSTITUTIONS),
        Equipment::HomeGym => Some(&HOME_GYM_SUBSTITUTIONS),
        Equipment::FullGym | Equipment::Limited => None,
    }
}

pub(crate) fn limitation_substitutions(limitation: &str) -> Option<&'static [(&'static str, &'static str)]> {
    LIMITATION_SUBSTITUTIONS
        .iter()
        .find(|(tag, _)| *tag == limitation)
        .map(|(_, substitutions)| *substitutions)
}

const BODYWEIGHT_SUBSTITUTIONS: [(&str, &str); 10] = [
    ("Bench Press", "Push-ups"),
    ("Barbell Row", "Inverted Row"),
    ("Squat", "Bodyweight Squat"),
    ("Deadlift", "Single Leg RDL"),
    ("Overhead Press", "Pike Push-ups"),
    ("Leg Press", "Bulgarian Split Squat"),
    ("Lat Pulldown", "Pull-ups"),
    ("Cable Row", "Inverted Row"),
    ("Leg Curl", "Nordic Curl"),
    ("Leg Extension", "Sissy Squat"),
];

const HOME_GYM_SUBSTITUTIONS: [(&str, &str); 6] = [
    ("Leg Press", "Goblet Squat"),
    ("Lat Pulldown", "Pull-ups"),
    ("Cable Row", "Dumbbell Row"),
    ("Cable Fly", "Dumbbell Fly"),
    ("Leg Curl", "Dumbbell Leg Curl"),
    ("Leg Extension", "Dumbbell Step-up"),
];

static LIMITATION_SUBSTITUTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "lower_back",
        &[
            ("Deadlift", "Hip Thrust"),
            ("Barbell Row", "Chest Supported Row"),
            ("Squat", "Leg Press"),
        ],
    ),
    (
        "knee",
        &[
            ("Squat", "Box Squat"),
            ("Lunges", "Step-ups"),
            ("Leg Extension", "Terminal Knee Extension"),
        ],
    ),
    (
        "shoulder",
        &[
            ("Overhead Press", "Landmine Press"),
            ("Bench Press", "Floor Press"),
            ("Lateral Raises", "Cable Lateral Raise"),
        ],
    ),
];

const FULL_BODY_A: TemplateSession = TemplateSession {
    name: "Full Body A",
    exercises: &[
        Slot {
            name: "Squat",
            category: Category::Compound,
            muscle: "legs",
        },
        Slot {
            name: "Bench Press",
            category: Category::Compound,
            muscle: "chest",
        },
        Slot {
            name: "Barbell Row",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Overhead Press",
            category: Category::Compound,
            muscle: "shoulders",
        },
        Slot {
            name: "Plank",
            category: Category::Core,
            muscle: "core",
        },
    ],
};

const FULL_BODY_B: TemplateSession = TemplateSession {
    name: "Full Body B",
    exercises: &[
        Slot {
            name: "Deadlift",
            category: Category::Compound,
            muscle: "legs",
        },
        Slot {
            name: "Incline Press",
            category: Category::Compound,
            muscle: "chest",
        },
        Slot {
            name: "Pull-ups",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Dumbbell Lunges",
            category: Category::Compound,
            muscle: "legs",
        },
        Slot {
            name: "Face Pulls",
            category: Category::Isolation,
            muscle: "shoulders",
        },
    ],
};

const UPPER_A: TemplateSession = TemplateSession {
    name: "Upper A",
    exercises: &[
        Slot {
            name: "Bench Press",
            category: Category::Compound,
            muscle: "chest",
        },
        Slot {
            name: "Barbell Row",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Overhead Press",
            category: Category::Compound,
            muscle: "shoulders",
        },
        Slot {
            name: "Pull-ups",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Face Pulls",
            category: Category::Isolation,
            muscle: "shoulders",
        },
        Slot {
            name: "Tricep Pushdown",
            category: Category::Isolation,
            muscle: "triceps",
        },
        Slot {
            name: "Bicep Curl",
            category: Category::Isolation,
            muscle: "biceps",
        },
    ],
};

const LOWER_A: TemplateSession = TemplateSession {
    name: "Lower A",
    exercises: &[
        Slot {
            name: "Squat",
            category: Category::Compound,
            muscle: "quads",
        },
        Slot {
            name: "Romanian Deadlift",
            category: Category::Compound,
            muscle: "hamstrings",
        },
        Slot {
            name: "Leg Press",
            category: Category::Compound,
            muscle: "quads",
        },
        Slot {
            name: "Leg Curl",
            category: Category::Isolation,
            muscle: "hamstrings",
        },
        Slot {
            name: "Calf Raises",
            category: Category::Isolation,
            muscle: "calves",
        },
    ],
};

const UPPER_B: TemplateSession = TemplateSession {
    name: "Upper B",
    exercises: &[
        Slot {
            name: "Incline Dumbbell Press",
            category: Category::Compound,
            muscle: "chest",
        },
        Slot {
            name: "Cable Row",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Dumbbell Shoulder Press",
            category: Category::Compound,
            muscle: "shoulders",
        },
        Slot {
            name: "Lat Pulldown",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Lateral Raises",
            category: Category::Isolation,
            muscle: "shoulders",
        },
        Slot {
            name: "Skull Crushers",
            category: Category::Isolation,
            muscle: "triceps",
        },
        Slot {
            name: "Hammer Curl",
            category: Category::Isolation,
            muscle: "biceps",
        },
    ],
};

const LOWER_B: TemplateSession = TemplateSession {
    name: "Lower B",
    exercises: &[
        Slot {
            name: "Deadlift",
            category: Category::Compound,
            muscle: "posterior",
        },
        Slot {
            name: "Front Squat",
            category: Category::Compound,
            muscle: "quads",
        },
        Slot {
            name: "Walking Lunges",
            category: Category::Compound,
            muscle: "legs",
        },
        Slot {
            name: "Leg Extension",
            category: Category::Isolation,
            muscle: "quads",
        },
        Slot {
            name: "Seated Calf Raise",
            category: Category::Isolation,
            muscle: "calves",
        },
    ],
};

const PUSH: TemplateSession = TemplateSession {
    name: "Push",
    exercises: &[
        Slot {
            name: "Bench Press",
            category: Category::Compound,
            muscle: "chest",
        },
        Slot {
            name: "Incline Dumbbell Press",
            category: Category::Compound,
            muscle: "chest",
        },
        Slot {
            name: "Overhead Press",
            category: Category::Compound,
            muscle: "shoulders",
        },
        Slot {
            name: "Cable Fly",
            category: Category::Isolation,
            muscle: "chest",
        },
        Slot {
            name: "Lateral Raises",
            category: Category::Isolation,
            muscle: "shoulders",
        },
        Slot {
            name: "Tricep Pushdown",
            category: Category::Isolation,
            muscle: "triceps",
        },
        Slot {
            name: "Overhead Tricep Extension",
            category: Category::Isolation,
            muscle: "triceps",
        },
    ],
};

const PULL: TemplateSession = TemplateSession {
    name: "Pull",
    exercises: &[
        Slot {
            name: "Barbell Row",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Pull-ups",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Seated Cable Row",
            category: Category::Compound,
            muscle: "back",
        },
        Slot {
            name: "Face Pulls",
            category: Category::Isolation,
            muscle: "rear_delts",
        },
        Slot {
            name: "Barbell Curl",
            category: Category::Isolation,
            muscle: "biceps",
        },
        Slot {
            name: "Hammer Curl",
            category: Category::Isolation,
            muscle: "biceps",
        },
    ],
};

const LEGS: TemplateSession = TemplateSession {
    name: "Legs",
    exercises: &[
        Slot {
            name: "Squat",
            category: Category::Compound,
            muscle: "quads",
        },
        Slot {
            name: "Romanian Deadlift",
            category: Category::Compound,
            muscle: "hamstrings",
        },
        Slot {
            name: "Leg Press",
            category: Category::Compound,
            muscle: "quads",
        },
        Slot {
            name: "Leg Curl",
            category: Category::Isolation,
            muscle: "hamstrings",
        },
        Slot {
            name: "Leg Extension",
            category: Category::Isolation,
            muscle: "quads",
        },
        Slot {
            name: "Calf Raises",
            category: Category::Isolation,
            muscle: "calves",
        },
    ],
};

static FULL_BODY: Template = Template {
    name: "Full Body",
    days_per_week: 3,
    sessions: &[FULL_BODY_A, FULL_BODY_B],
};

static UPPER_LOWER: Template = Template {
    name: "Upper/Lower",
    days_per_week: 4,
    sessions: &[UPPER_A, LOWER_A, UPPER_B, LOWER_B],
};

static PPL: Template = Template {
    name: "Push/Pull/Legs",
    days_per_week: 6,
    sessions: &[PUSH, PULL, LEGS],
};

// The first two upper/lower sessions followed by the three PPL days.
static HYBRID: Template = Template {
    name: "Upper/Lower + PPL",
    days_per_week: 5,
    sessions: &[UPPER_A, LOWER_A, PUSH, PULL, LEGS],
};
