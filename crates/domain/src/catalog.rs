use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub primary_muscles: &'static [&'static str],
    pub category: Category,
    pub equipment: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub form_cues: &'static [&'static str],
    pub alternatives: &'static [&'static str],
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[display("compound")]
    Compound,
    #[display("isolation")]
    Isolation,
    #[display("core")]
    Core,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    General,
    Injury,
    Preference,
    Equipment,
}

impl From<&str> for Reason {
    fn from(value: &str) -> Self {
        match value {
            "injury" => Reason::Injury,
            "preference" => Reason::Preference,
            "equipment" => Reason::Equipment,
            _ => Reason::General,
        }
    }
}

/// Look up an exercise by name.
///
/// The name is normalized (lowercased, whitespace and hyphens collapsed to a
/// single `_`). An exact key match is preferred; otherwise the first table
/// entry whose key contains the normalized name, or is contained within it,
/// wins. Lookup of an unknown name yields `None`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Exercise> {
    let key = normalize(name);
    if let Some((_, exercise)) = EXERCISES.iter().find(|(k, _)| *k == key) {
        return Some(exercise);
    }
    EXERCISES
        .iter()
        .find(|(k, _)| k.contains(key.as_str()) || key.contains(k))
        .map(|(_, exercise)| exercise)
}

/// Alternatives for an exercise, filtered by the reason they are needed.
///
/// For `Reason::Equipment` only equipment-friendly alternatives (dumbbell,
/// bodyweight or band based) are returned, which may be none at all.
#[must_use]
pub fn alternatives(name: &str, reason: Reason) -> Vec<&'static str> {
    let Some(exercise) = lookup(name) else {
        return vec![];
    };
    match reason {
        Reason::Equipment => exercise
            .alternatives
            .iter()
            .filter(|alternative| {
                let alternative = alternative.to_lowercase();
                EQUIPMENT_FRIENDLY
                    .iter()
                    .any(|equipment| alternative.contains(equipment))
            })
            .copied()
            .collect(),
        Reason::General | Reason::Injury | Reason::Preference => exercise.alternatives.to_vec(),
    }
}

#[must_use]
pub fn exercises_by_muscle(muscle: &str) -> Vec<(&'static str, Category)> {
    EXERCISES
        .iter()
        .filter(|(_, exercise)| {
            exercise
                .primary_muscles
                .iter()
                .any(|m| m.eq_ignore_ascii_case(muscle))
        })
        .map(|(_, exercise)| (exercise.name, exercise.category))
        .collect()
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

const EQUIPMENT_FRIENDLY: [&str; 3] = ["dumbbell", "bodyweight", "band"];

// Table order is part of the lookup contract: the first matching entry wins
// on substring matches.
static EXERCISES: [(&str, Exercise); 18] = [
    (
        "bench_press",
        Exercise {
            name: "Bench Press",
            primary_muscles: &["chest", "triceps", "front_delts"],
            category: Category::Compound,
            equipment: &["barbell", "bench"],
            instructions: &[
                "Lie on bench with eyes under the bar",
                "Grip bar slightly wider than shoulder width",
                "Unrack and position bar over chest",
                "Lower bar to mid-chest with control",
                "Press bar up and slightly back",
                "Lock out arms at top",
            ],
            form_cues: &[
                "Keep shoulder blades pinched together",
                "Maintain arch in lower back",
                "Keep feet flat on floor",
                "Elbows at 45-75 degree angle",
                "Touch chest, don't bounce",
            ],
            alternatives: &[
                "Dumbbell Bench Press",
                "Push-ups",
                "Machine Chest Press",
                "Floor Press",
            ],
        },
    ),
    (
        "incline_dumbbell_press",
        Exercise {
            name: "Incline Dumbbell Press",
            primary_muscles: &["upper_chest", "front_delts", "triceps"],
            category: Category::Compound,
            equipment: &["dumbbells", "incline_bench"],
            instructions: &[
                "Set bench to 30-45 degree incline",
                "Sit with dumbbells on thighs",
                "Kick dumbbells up as you lie back",
                "Press dumbbells up and together",
                "Lower with control to chest level",
                "Repeat for desired reps",
            ],
            form_cues: &[
                "Keep back flat against bench",
                "Don't let dumbbells drift too far apart",
                "Control the negative portion",
                "Full range of motion",
            ],
            alternatives: &[
                "Incline Barbell Press",
                "Low-to-High Cable Fly",
                "Incline Push-ups",
            ],
        },
    ),
    (
        "push_ups",
        Exercise {
            name: "Push-ups",
            primary_muscles: &["chest", "triceps", "front_delts"],
            category: Category::Compound,
            equipment: &["bodyweight"],
            instructions: &[
                "Start in plank position, hands shoulder-width apart",
                "Keep body in straight line from head to heels",
                "Lower chest toward floor",
                "Push back up to starting position",
                "Maintain core engagement throughout",
            ],
            form_cues: &[
                "Don't let hips sag or pike up",
                "Elbows at 45 degree angle",
                "Full lockout at top",
                "Chest touches floor at bottom",
            ],
            alternatives: &[
                "Knee Push-ups",
                "Incline Push-ups",
                "Diamond Push-ups",
                "Wide Push-ups",
            ],
        },
    ),
    (
        "barbell_row",
        Exercise {
            name: "Barbell Row",
            primary_muscles: &["lats", "rhomboids", "rear_delts", "biceps"],
            category: Category::Compound,
            equipment: &["barbell"],
            instructions: &[
                "Stand with feet shoulder-width apart",
                "Hinge at hips, back flat, chest up",
                "Grip bar slightly wider than shoulder width",
                "Pull bar to lower chest/upper abs",
                "Squeeze shoulder blades at top",
                "Lower with control",
            ],
            form_cues: &[
                "Keep back flat, don't round",
                "Lead with elbows",
                "Don't use momentum",
                "Torso angle ~45 degrees",
            ],
            alternatives: &[
                "Dumbbell Row",
                "Cable Row",
                "T-Bar Row",
                "Chest Supported Row",
            ],
        },
    ),
    (
        "pull_ups",
        Exercise {
            name: "Pull-ups",
            primary_muscles: &["lats", "biceps", "rear_delts"],
            category: Category::Compound,
            equipment: &["pull_up_bar"],
            instructions: &[
                "Grip bar slightly wider than shoulder width",
                "Hang with arms fully extended",
                "Pull yourself up until chin clears bar",
                "Lower with control to full extension",
                "Avoid swinging or kipping",
            ],
            form_cues: &[
                "Initiate with lats, not arms",
                "Keep core engaged",
                "Shoulders down and back",
                "Full range of motion",
            ],
            alternatives: &[
                "Lat Pulldown",
                "Assisted Pull-ups",
                "Negative Pull-ups",
                "Inverted Rows",
            ],
        },
    ),
    (
        "lat_pulldown",
        Exercise {
            name: "Lat Pulldown",
            primary_muscles: &["lats", "biceps", "rear_delts"],
            category: Category::Compound,
            equipment: &["cable_machine"],
            instructions: &[
                "Sit with thighs secured under pads",
                "Grip bar wider than shoulder width",
                "Pull bar down to upper chest",
                "Squeeze lats at bottom",
                "Control the weight back up",
            ],
            form_cues: &[
                "Don't lean back excessively",
                "Pull elbows down and back",
                "Keep chest up",
                "Full stretch at top",
            ],
            alternatives: &[
                "Pull-ups",
                "Close Grip Pulldown",
                "Straight Arm Pulldown",
            ],
        },
    ),
    (
        "squat",
        Exercise {
            name: "Squat",
            primary_muscles: &["quads", "glutes", "hamstrings", "core"],
            category: Category::Compound,
            equipment: &["barbell", "squat_rack"],
            instructions: &[
                "Position bar on upper back (high bar) or rear delts (low bar)",
                "Unrack and step back, feet shoulder-width apart",
                "Brace core and initiate by pushing hips back",
                "Descend until hip crease below knee",
                "Drive through feet to stand",
                "Lock out hips and knees at top",
            ],
            form_cues: &[
                "Keep chest up and back flat",
                "Knees track over toes",
                "Weight in mid-foot/heels",
                "Don't let knees cave in",
                "Breathe and brace each rep",
            ],
            alternatives: &[
                "Goblet Squat",
                "Front Squat",
                "Leg Press",
                "Bulgarian Split Squat",
                "Box Squat",
            ],
        },
    ),
    (
        "deadlift",
        Exercise {
            name: "Deadlift",
            primary_muscles: &["hamstrings", "glutes", "lower_back", "traps"],
            category: Category::Compound,
            equipment: &["barbell"],
            instructions: &[
                "Stand with feet hip-width, bar over mid-foot",
                "Hinge and grip bar just outside legs",
                "Drop hips, chest up, back flat",
                "Drive through floor, keeping bar close",
                "Lock out hips and knees together",
                "Reverse the movement to lower",
            ],
            form_cues: &[
                "Bar stays close to body entire lift",
                "Don't round lower back",
                "Push floor away with legs",
                "Lock out by squeezing glutes",
                "Don't hyperextend at top",
            ],
            alternatives: &[
                "Romanian Deadlift",
                "Trap Bar Deadlift",
                "Sumo Deadlift",
                "Hip Thrust",
            ],
        },
    ),
    (
        "romanian_deadlift",
        Exercise {
            name: "Romanian Deadlift",
            primary_muscles: &["hamstrings", "glutes", "lower_back"],
            category: Category::Compound,
            equipment: &["barbell", "dumbbells"],
            instructions: &[
                "Stand with feet hip-width, holding bar",
                "Push hips back while keeping knees slightly bent",
                "Lower bar along thighs until hamstring stretch",
                "Keep back flat throughout",
                "Drive hips forward to return to start",
            ],
            form_cues: &[
                "Hinge at hips, not waist",
                "Bar stays close to legs",
                "Feel stretch in hamstrings",
                "Don't round back",
                "Squeeze glutes at top",
            ],
            alternatives: &[
                "Stiff Leg Deadlift",
                "Single Leg RDL",
                "Good Morning",
                "Cable Pull Through",
            ],
        },
    ),
    (
        "leg_press",
        Exercise {
            name: "Leg Press",
            primary_muscles: &["quads", "glutes", "hamstrings"],
            category: Category::Compound,
            equipment: &["leg_press_machine"],
            instructions: &[
                "Sit in machine with back flat against pad",
                "Place feet shoulder-width on platform",
                "Release safety and lower weight",
                "Lower until knees at 90 degrees",
                "Press through feet to extend legs",
                "Don't lock knees completely",
            ],
            form_cues: &[
                "Keep lower back pressed into pad",
                "Don't let knees cave in",
                "Control the negative",
                "Full range of motion",
            ],
            alternatives: &["Squat", "Hack Squat", "Bulgarian Split Squat"],
        },
    ),
    (
        "overhead_press",
        Exercise {
            name: "Overhead Press",
            primary_muscles: &["front_delts", "side_delts", "triceps"],
            category: Category::Compound,
            equipment: &["barbell"],
            instructions: &[
                "Grip bar just outside shoulder width",
                "Start with bar at shoulder level",
                "Brace core and press bar overhead",
                "Lock out arms at top",
                "Lower bar with control to shoulders",
            ],
            form_cues: &[
                "Keep core tight, don't lean back",
                "Press bar in straight line",
                "Move head back slightly as bar passes",
                "Full lockout at top",
            ],
            alternatives: &[
                "Dumbbell Shoulder Press",
                "Arnold Press",
                "Machine Shoulder Press",
                "Landmine Press",
            ],
        },
    ),
    (
        "lateral_raise",
        Exercise {
            name: "Lateral Raise",
            primary_muscles: &["side_delts"],
            category: Category::Isolation,
            equipment: &["dumbbells"],
            instructions: &[
                "Stand with dumbbells at sides",
                "Slight bend in elbows",
                "Raise arms out to sides until shoulder height",
                "Pause briefly at top",
                "Lower with control",
            ],
            form_cues: &[
                "Lead with elbows, not hands",
                "Don't swing or use momentum",
                "Slight forward lean okay",
                "Pinkies up at top optional",
            ],
            alternatives: &[
                "Cable Lateral Raise",
                "Machine Lateral Raise",
                "Leaning Lateral Raise",
            ],
        },
    ),
    (
        "bicep_curl",
        Exercise {
            name: "Bicep Curl",
            primary_muscles: &["biceps"],
            category: Category::Isolation,
            equipment: &["dumbbells", "barbell"],
            instructions: &[
                "Stand with arms at sides, palms forward",
                "Keep elbows at sides throughout",
                "Curl weight up toward shoulders",
                "Squeeze biceps at top",
                "Lower with control",
            ],
            form_cues: &[
                "Don't swing body",
                "Keep elbows stationary",
                "Full range of motion",
                "Control the negative",
            ],
            alternatives: &["Hammer Curl", "Preacher Curl", "Cable Curl", "Incline Curl"],
        },
    ),
    (
        "tricep_pushdown",
        Exercise {
            name: "Tricep Pushdown",
            primary_muscles: &["triceps"],
            category: Category::Isolation,
            equipment: &["cable_machine"],
            instructions: &[
                "Stand facing cable machine",
                "Grip rope or bar attachment",
                "Keep elbows at sides",
                "Push down until arms fully extended",
                "Squeeze triceps at bottom",
                "Control the return",
            ],
            form_cues: &[
                "Don't let elbows flare",
                "Keep torso upright",
                "Full extension at bottom",
                "Don't use momentum",
            ],
            alternatives: &[
                "Skull Crushers",
                "Overhead Extension",
                "Dips",
                "Close Grip Bench",
            ],
        },
    ),
    (
        "plank",
        Exercise {
            name: "Plank",
            primary_muscles: &["core", "shoulders"],
            category: Category::Core,
            equipment: &["bodyweight"],
            instructions: &[
                "Start in push-up position on forearms",
                "Keep body in straight line",
                "Engage core and glutes",
                "Hold position for prescribed time",
                "Breathe normally throughout",
            ],
            form_cues: &[
                "Don't let hips sag or pike",
                "Keep neck neutral",
                "Squeeze everything tight",
                "Quality over duration",
            ],
            alternatives: &["Side Plank", "Dead Bug", "Bird Dog", "Hollow Hold"],
        },
    ),
    (
        "face_pulls",
        Exercise {
            name: "Face Pulls",
            primary_muscles: &["rear_delts", "rhomboids", "external_rotators"],
            category: Category::Isolation,
            equipment: &["cable_machine", "rope"],
            instructions: &[
                "Set cable at face height",
                "Grip rope with thumbs pointing back",
                "Pull toward face, separating hands",
                "Externally rotate at end of movement",
                "Squeeze shoulder blades together",
                "Control return",
            ],
            form_cues: &[
                "Lead with elbows high",
                "Pull apart, not just back",
                "Keep chest up",
                "Don't lean back excessively",
            ],
            alternatives: &["Reverse Fly", "Band Pull Aparts", "Rear Delt Fly Machine"],
        },
    ),
    (
        "calf_raises",
        Exercise {
            name: "Calf Raises",
            primary_muscles: &["calves"],
            category: Category::Isolation,
            equipment: &["calf_machine", "dumbbells"],
            instructions: &[
                "Position balls of feet on edge",
                "Lower heels for full stretch",
                "Push up onto toes as high as possible",
                "Pause and squeeze at top",
                "Lower with control",
            ],
            form_cues: &[
                "Full range of motion",
                "Don't bounce at bottom",
                "Pause at top",
                "Straight knees for gastrocnemius",
            ],
            alternatives: &[
                "Seated Calf Raise",
                "Donkey Calf Raise",
                "Single Leg Calf Raise",
            ],
        },
    ),
    (
        "leg_curl",
        Exercise {
            name: "Leg Curl",
            primary_muscles: &["hamstrings"],
            category: Category::Isolation,
            equipment: &["leg_curl_machine"],
            instructions: &[
                "Lie face down or sit in machine",
                "Position pad above heels",
                "Curl legs toward glutes",
                "Squeeze hamstrings at top",
                "Lower with control",
            ],
            form_cues: &[
                "Don't lift hips off pad",
                "Full range of motion",
                "Control the negative",
                "Point toes for extra contraction",
            ],
            alternatives: &[
                "Nordic Curl",
                "Swiss Ball Curl",
                "Slider Curl",
                "Romanian Deadlift",
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("bench_press")]
    #[case("Bench Press")]
    #[case("bench-press")]
    #[case("  Bench   Press ")]
    #[case("BENCH--PRESS")]
    fn test_lookup_normalization(#[case] name: &str) {
        assert_eq!(lookup(name).map(|e| e.name), Some("Bench Press"));
    }

    #[rstest]
    #[case::key_contained_in_input("deadlifts", "Deadlift")]
    #[case::input_contained_in_key("pushdown", "Tricep Pushdown")]
    #[case::first_match_in_table_order("press", "Bench Press")]
    fn test_lookup_fuzzy(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(lookup(name).map(|e| e.name), Some(expected));
    }

    #[rstest]
    #[case("crunches")]
    #[case("Incline Press")]
    fn test_lookup_unknown(#[case] name: &str) {
        assert_eq!(lookup(name), None);
    }

    #[rstest]
    #[case("general", Reason::General)]
    #[case("injury", Reason::Injury)]
    #[case("preference", Reason::Preference)]
    #[case("equipment", Reason::Equipment)]
    #[case("anything else", Reason::General)]
    fn test_reason_from_str(#[case] value: &str, #[case] expected: Reason) {
        assert_eq!(Reason::from(value), expected);
    }

    #[test]
    fn test_alternatives_general() {
        assert_eq!(
            alternatives("bench_press", Reason::General),
            vec![
                "Dumbbell Bench Press",
                "Push-ups",
                "Machine Chest Press",
                "Floor Press"
            ]
        );
    }

    #[test]
    fn test_alternatives_equipment_is_filtered_subset() {
        for (key, _) in &EXERCISES {
            let general = alternatives(key, Reason::General);
            let equipment = alternatives(key, Reason::Equipment);
            for alternative in &equipment {
                assert!(general.contains(alternative));
                let lowered = alternative.to_lowercase();
                assert!(
                    EQUIPMENT_FRIENDLY.iter().any(|eq| lowered.contains(eq)),
                    "{alternative} is not equipment friendly"
                );
            }
        }
    }

    #[test]
    fn test_alternatives_equipment_may_be_empty() {
        assert_eq!(alternatives("leg_press", Reason::Equipment), Vec::<&str>::new());
    }

    #[test]
    fn test_alternatives_unknown_exercise() {
        assert_eq!(alternatives("crunches", Reason::General), Vec::<&str>::new());
    }

    #[test]
    fn test_exercises_by_muscle() {
        assert_eq!(
            exercises_by_muscle("Chest"),
            vec![
                ("Bench Press", Category::Compound),
                ("Push-ups", Category::Compound)
            ]
        );
    }

    #[test]
    fn test_exercises_by_muscle_requires_exact_match() {
        // "upper_chest" does not match a query for "chest"
        assert!(
            !exercises_by_muscle("chest")
                .iter()
                .any(|(name, _)| *name == "Incline Dumbbell Press")
        );
    }

    #[test]
    fn test_exercises_by_muscle_unknown() {
        assert_eq!(exercises_by_muscle("neck"), vec![]);
    }

    #[rstest]
    #[case("Bench Press", "bench_press")]
    #[case("bench--press", "bench_press")]
    #[case(" single  leg   RDL ", "single_leg_rdl")]
    fn test_normalize(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize(name), expected);
    }
}
