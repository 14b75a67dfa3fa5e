//! Exercise catalog
//!
//! One record per supported exercise: how it is named, which engine it runs
//! on and the geometry that engine is configured with. Thresholds are
//! starting points and can be overridden through `EngineConfig`.

use crate::engine::{
    Analyzer, AlternatorSpec, Check, CheckKind, CountOn, Cues, HoldSpec, Metric, Severity, SideRule,
    Sides, ThresholdSpec, Thresholds,
};
use crate::pose::{Joint, ARM_RAISE, BODY_LINE, ELBOW, HIP, KNEE, SHOULDER};
use crate::session::Family;

/// Coarse body region.
///
/// Names of unknown exercises are mapped to a region through hint words;
/// fuzzy matches must not cross from the upper to the lower body, and the
/// region picks the family default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyRegion {
    Upper,
    Lower,
    Core,
    Full,
}

/// Body-part words outrank movement words, so "leg press" is lower body
const UPPER_PARTS: &[&str] = &["arm", "shoulder", "chest", "bicep", "tricep", "wrist"];
const UPPER_MOVES: &[&str] = &["curl", "press", "row", "pull", "fly"];
const LOWER_PARTS: &[&str] = &["leg", "knee", "glute", "hip", "calf", "thigh", "hamstring"];
const LOWER_MOVES: &[&str] = &["squat", "lunge", "jump", "step"];

impl BodyRegion {
    /// Region a normalized name points at; `None` when it hints at both halves or neither
    pub fn from_name(name: &str) -> Option<BodyRegion> {
        let hinted = |words: &[&str]| words.iter().any(|w| name.contains(w));
        let pick = |upper: bool, lower: bool| match (upper, lower) {
            (true, false) => Some(BodyRegion::Upper),
            (false, true) => Some(BodyRegion::Lower),
            _ => None,
        };
        pick(hinted(UPPER_PARTS), hinted(LOWER_PARTS))
            .or_else(|| pick(hinted(UPPER_MOVES), hinted(LOWER_MOVES)))
    }

    /// Whether an exercise in this region can stand in for a name pointing at `named`
    pub fn compatible_with(self, named: BodyRegion) -> bool {
        !matches!(
            (self, named),
            (BodyRegion::Upper, BodyRegion::Lower) | (BodyRegion::Lower, BodyRegion::Upper)
        )
    }
}

/// Catalog record
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exercise {
    /// Canonical identifier (normalized snake_case)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Other exact spellings, normalized
    pub aliases: &'static [&'static str],
    /// Substrings for fuzzy matching
    pub keywords: &'static [&'static str],
    pub region: BodyRegion,
    /// Body part named in the "not clearly visible" message
    pub focus: &'static str,
    pub analyzer: Analyzer,
}

impl Exercise {
    pub fn family(&self) -> Family {
        self.analyzer.family()
    }
}

// ============================================================================
// SHARED FORM CHECKS
// ============================================================================

const ELBOWS_PINNED: Check = Check::new(
    CheckKind::HorizontalOffset { joint: Joint::Elbow, anchor: Joint::Shoulder, max: 0.25 },
    Severity::Alignment,
    15.0,
    "Keep your elbows pinned to your sides",
);

const NO_SWING: Check = Check::new(
    CheckKind::HorizontalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.25 },
    Severity::Safety,
    15.0,
    "Don't swing your body, keep your torso still",
);

const SHOULDERS_LEVEL: Check = Check::new(
    CheckKind::Level { joint: Joint::Shoulder, max: 0.12 },
    Severity::Alignment,
    10.0,
    "Keep your shoulders level",
);

const HIPS_LEVEL: Check = Check::new(
    CheckKind::Level { joint: Joint::Hip, max: 0.12 },
    Severity::Alignment,
    10.0,
    "Keep your hips level",
);

const KNEES_BEHIND_TOES: Check = Check::new(
    CheckKind::HorizontalOffset { joint: Joint::Knee, anchor: Joint::Ankle, max: 0.35 },
    Severity::Safety,
    20.0,
    "Keep your knees behind your toes",
);

const CHEST_UP: Check = Check::new(
    CheckKind::AngleAtLeast { triple: HIP, min: 45.0 },
    Severity::Alignment,
    15.0,
    "Keep your chest up",
);

const TORSO_UPRIGHT: Check = Check::new(
    CheckKind::HorizontalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.3 },
    Severity::Alignment,
    15.0,
    "Keep your torso upright",
);

const BODY_STRAIGHT: Check = Check::new(
    CheckKind::AngleAtLeast { triple: BODY_LINE, min: 160.0 },
    Severity::Safety,
    25.0,
    "Keep your body in a straight line",
);

const WRISTS_OVER_ELBOWS: Check = Check::new(
    CheckKind::HorizontalOffset { joint: Joint::Wrist, anchor: Joint::Elbow, max: 0.2 },
    Severity::Alignment,
    15.0,
    "Stack your wrists over your elbows",
);

const ARMS_LONG: Check = Check::new(
    CheckKind::AngleAtLeast { triple: ELBOW, min: 140.0 },
    Severity::Alignment,
    10.0,
    "Keep your arms long with only a slight bend",
);

const LEGS_STRAIGHT: Check = Check::new(
    CheckKind::AngleAtLeast { triple: KNEE, min: 160.0 },
    Severity::Alignment,
    15.0,
    "Keep your legs straight",
)
.on(Sides::Both);

const HIPS_DOWN: Check = Check::new(
    CheckKind::VerticalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.5 },
    Severity::Alignment,
    15.0,
    "Keep your hips down, level with your shoulders",
);

// ============================================================================
// DYNAMIC-REP EXERCISES
// ============================================================================

const CURL_CUES: Cues = Cues {
    deeper: "Curl the weight all the way up",
    extend: "Lower all the way down",
    contracted: "Good squeeze at the top",
    extended: "Full extension, curl again",
    moving: "Smooth and controlled",
};

const PRESS_CUES: Cues = Cues {
    deeper: "Lower a little further",
    extend: "Lock out your arms fully",
    contracted: "Good depth, now press",
    extended: "Strong lockout",
    moving: "Smooth and controlled",
};

const SQUAT_CUES: Cues = Cues {
    deeper: "Sit a little deeper",
    extend: "Stand all the way up",
    contracted: "Good depth, drive up",
    extended: "Stand tall, go again",
    moving: "Control the movement",
};

const RAISE_CUES: Cues = Cues {
    deeper: "Lower your arms all the way",
    extend: "Raise your arms to shoulder height",
    contracted: "Arms down, raise again",
    extended: "Good height, lower slowly",
    moving: "Smooth and controlled",
};

const CORE_CUES: Cues = Cues {
    deeper: "Curl up a little higher",
    extend: "Lower all the way back down",
    contracted: "Good crunch, lower slowly",
    extended: "Back down, go again",
    moving: "Keep it controlled",
};

const BICEP_CURL: Exercise = Exercise {
    id: "bicep_curl",
    name: "Bicep Curl",
    aliases: &["biceps_curl", "bicep_curls", "biceps_curls", "dumbbell_curl", "curl", "curls"],
    keywords: &["curl", "bicep"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(50.0, 150.0, 35.0, 165.0),
        count_on: CountOn::Extension,
        checks: &[ELBOWS_PINNED, NO_SWING],
        cues: CURL_CUES,
    }),
};

const HAMMER_CURL: Exercise = Exercise {
    id: "hammer_curl",
    name: "Hammer Curl",
    aliases: &["hammer_curls"],
    keywords: &["hammer"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(55.0, 150.0, 40.0, 165.0),
        count_on: CountOn::Extension,
        checks: &[ELBOWS_PINNED, NO_SWING],
        cues: CURL_CUES,
    }),
};

const SHOULDER_PRESS: Exercise = Exercise {
    id: "shoulder_press",
    name: "Shoulder Press",
    aliases: &["overhead_press", "military_press", "shoulder_presses", "dumbbell_shoulder_press"],
    keywords: &["press", "overhead"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(90.0, 160.0, 75.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[WRISTS_OVER_ELBOWS, SHOULDERS_LEVEL],
        cues: PRESS_CUES,
    }),
};

const TRICEP_DIP: Exercise = Exercise {
    id: "tricep_dip",
    name: "Tricep Dip",
    aliases: &["tricep_dips", "triceps_dip", "triceps_dips", "bench_dip", "bench_dips"],
    keywords: &["dip"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(90.0, 155.0, 75.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[SHOULDERS_LEVEL],
        cues: PRESS_CUES,
    }),
};

const TRICEP_EXTENSION: Exercise = Exercise {
    id: "tricep_extension",
    name: "Overhead Tricep Extension",
    aliases: &["tricep_extensions", "triceps_extension", "overhead_tricep_extension"],
    keywords: &["tricep", "extension"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(70.0, 155.0, 55.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[SHOULDERS_LEVEL, NO_SWING],
        cues: PRESS_CUES,
    }),
};

const PUSHUP: Exercise = Exercise {
    id: "pushup",
    name: "Push-up",
    aliases: &["push_up", "push_ups", "pushups", "press_up", "press_ups"],
    keywords: &["push"],
    region: BodyRegion::Upper,
    focus: "full body",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(90.0, 155.0, 75.0, 165.0),
        count_on: CountOn::Extension,
        checks: &[BODY_STRAIGHT],
        cues: Cues {
            deeper: "Lower your chest closer to the floor",
            extend: "Push all the way up",
            contracted: "Good depth, push up",
            extended: "Strong top position",
            moving: "Keep your core tight",
        },
    }),
};

const LATERAL_RAISE: Exercise = Exercise {
    id: "lateral_raise",
    name: "Lateral Raise",
    aliases: &["lateral_raises", "side_raise", "side_raises", "side_lateral_raise"],
    keywords: &["lateral"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[SHOULDER]),
        thresholds: Thresholds::new(30.0, 80.0, 20.0, 90.0),
        count_on: CountOn::Extension,
        checks: &[ARMS_LONG, SHOULDERS_LEVEL],
        cues: RAISE_CUES,
    }),
};

const FRONT_RAISE: Exercise = Exercise {
    id: "front_raise",
    name: "Front Raise",
    aliases: &["front_raises"],
    keywords: &["front"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[SHOULDER]),
        thresholds: Thresholds::new(30.0, 80.0, 20.0, 90.0),
        count_on: CountOn::Extension,
        checks: &[ARMS_LONG, NO_SWING],
        cues: RAISE_CUES,
    }),
};

const UPRIGHT_ROW: Exercise = Exercise {
    id: "upright_row",
    name: "Upright Row",
    aliases: &["upright_rows"],
    keywords: &["row"],
    region: BodyRegion::Upper,
    focus: "arms",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW]),
        thresholds: Thresholds::new(70.0, 150.0, 55.0, 165.0),
        count_on: CountOn::Extension,
        checks: &[SHOULDERS_LEVEL, NO_SWING],
        cues: Cues {
            deeper: "Pull your elbows up to shoulder height",
            extend: "Lower the weight all the way",
            contracted: "Good pull, lower slowly",
            extended: "Arms long, pull again",
            moving: "Lead with your elbows",
        },
    }),
};

const SQUAT: Exercise = Exercise {
    id: "squat",
    name: "Squat",
    aliases: &["squats", "bodyweight_squat", "air_squat", "air_squats", "goblet_squat"],
    keywords: &["squat"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[KNEE]),
        thresholds: Thresholds::new(90.0, 160.0, 75.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[KNEES_BEHIND_TOES, CHEST_UP, HIPS_LEVEL],
        cues: SQUAT_CUES,
    }),
};

const JUMP_SQUAT: Exercise = Exercise {
    id: "jump_squat",
    name: "Jump Squat",
    aliases: &["jump_squats", "squat_jump", "squat_jumps"],
    keywords: &["jump_squat", "squat_jump"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[KNEE]),
        thresholds: Thresholds::new(100.0, 165.0, 85.0, 175.0),
        count_on: CountOn::Extension,
        checks: &[KNEES_BEHIND_TOES, CHEST_UP],
        cues: Cues {
            deeper: "Load deeper before you jump",
            extend: "Explode all the way up",
            contracted: "Loaded, now jump",
            extended: "Land softly",
            moving: "Stay light on your feet",
        },
    }),
};

const SUMO_SQUAT: Exercise = Exercise {
    id: "sumo_squat",
    name: "Sumo Squat",
    aliases: &["sumo_squats", "wide_squat", "wide_squats"],
    keywords: &["sumo"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[KNEE]),
        thresholds: Thresholds::new(95.0, 160.0, 80.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[CHEST_UP, HIPS_LEVEL],
        cues: SQUAT_CUES,
    }),
};

const LUNGE: Exercise = Exercise {
    id: "lunge",
    name: "Lunge",
    aliases: &["lunges", "forward_lunge", "reverse_lunge", "walking_lunge", "walking_lunges"],
    keywords: &["lunge"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[KNEE]),
        thresholds: Thresholds::new(100.0, 160.0, 85.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[KNEES_BEHIND_TOES, TORSO_UPRIGHT],
        cues: Cues {
            deeper: "Drop your back knee lower",
            extend: "Push back up to standing",
            contracted: "Good depth, push through your front heel",
            extended: "Tall finish, step again",
            moving: "Keep your balance",
        },
    }),
};

const DEADLIFT: Exercise = Exercise {
    id: "deadlift",
    name: "Deadlift",
    aliases: &["deadlifts", "romanian_deadlift", "rdl", "dumbbell_deadlift"],
    keywords: &["deadlift"],
    region: BodyRegion::Lower,
    focus: "full body",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[HIP]),
        thresholds: Thresholds::new(110.0, 165.0, 95.0, 175.0),
        count_on: CountOn::Extension,
        checks: &[Check::new(
            CheckKind::AngleAtLeast { triple: KNEE, min: 120.0 },
            Severity::Safety,
            20.0,
            "Hinge at the hips, don't squat the weight",
        )],
        cues: Cues {
            deeper: "Push your hips further back",
            extend: "Lock out your hips at the top",
            contracted: "Good hinge, drive your hips forward",
            extended: "Strong lockout",
            moving: "Keep the weight close",
        },
    }),
};

const GLUTE_BRIDGE: Exercise = Exercise {
    id: "glute_bridge",
    name: "Glute Bridge",
    aliases: &["glute_bridges", "hip_bridge", "hip_bridges", "bridge"],
    keywords: &["bridge"],
    region: BodyRegion::Lower,
    focus: "hips and legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[HIP]),
        thresholds: Thresholds::new(140.0, 165.0, 130.0, 175.0),
        count_on: CountOn::Extension,
        checks: &[Check::new(
            CheckKind::AngleWithin { triple: KNEE, min: 60.0, max: 115.0 },
            Severity::Alignment,
            10.0,
            "Keep your feet flat and close to your hips",
        )],
        cues: Cues {
            deeper: "Lower your hips to the floor",
            extend: "Squeeze your glutes and lift higher",
            contracted: "Hips down, lift again",
            extended: "Great squeeze at the top",
            moving: "Drive through your heels",
        },
    }),
};

const CALF_RAISE: Exercise = Exercise {
    id: "calf_raise",
    name: "Calf Raise",
    aliases: &["calf_raises", "heel_raise", "heel_raises"],
    keywords: &["calf", "heel"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Lift(Joint::Ankle),
        thresholds: Thresholds::new(0.04, 0.10, 0.02, 0.15),
        count_on: CountOn::Extension,
        checks: &[LEGS_STRAIGHT, TORSO_UPRIGHT],
        cues: Cues {
            deeper: "Lower your heels all the way",
            extend: "Rise higher onto your toes",
            contracted: "Heels down, rise again",
            extended: "Good height, hold briefly",
            moving: "Slow and steady",
        },
    }),
};

const SITUP: Exercise = Exercise {
    id: "situp",
    name: "Sit-up",
    aliases: &["sit_up", "sit_ups", "situps"],
    keywords: &["sit_up", "situp"],
    region: BodyRegion::Core,
    focus: "upper body and hips",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[HIP]),
        thresholds: Thresholds::new(70.0, 115.0, 55.0, 125.0),
        count_on: CountOn::Contraction,
        checks: &[],
        cues: CORE_CUES,
    }),
};

const CRUNCH: Exercise = Exercise {
    id: "crunch",
    name: "Crunch",
    aliases: &["crunches", "ab_crunch", "ab_crunches"],
    keywords: &["crunch"],
    region: BodyRegion::Core,
    focus: "upper body and hips",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[HIP]),
        thresholds: Thresholds::new(100.0, 125.0, 90.0, 130.0),
        count_on: CountOn::Contraction,
        checks: &[],
        cues: CORE_CUES,
    }),
};

const LEG_RAISE: Exercise = Exercise {
    id: "leg_raise",
    name: "Leg Raise",
    aliases: &["leg_raises", "lying_leg_raise", "lying_leg_raises"],
    keywords: &["leg_raise"],
    region: BodyRegion::Core,
    focus: "hips and legs",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[BODY_LINE]),
        thresholds: Thresholds::new(110.0, 160.0, 95.0, 170.0),
        count_on: CountOn::Extension,
        checks: &[LEGS_STRAIGHT],
        cues: Cues {
            deeper: "Raise your legs a little higher",
            extend: "Lower your legs all the way",
            contracted: "Good height, lower slowly",
            extended: "Legs down, raise again",
            moving: "Keep your lower back down",
        },
    }),
};

const JUMPING_JACK: Exercise = Exercise {
    id: "jumping_jack",
    name: "Jumping Jack",
    aliases: &["jumping_jacks", "star_jump", "star_jumps"],
    keywords: &["jack"],
    region: BodyRegion::Full,
    focus: "full body",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ARM_RAISE]),
        thresholds: Thresholds::new(40.0, 140.0, 30.0, 160.0),
        count_on: CountOn::Extension,
        checks: &[],
        cues: Cues {
            deeper: "Bring your arms all the way down",
            extend: "Reach your arms higher overhead",
            contracted: "Arms down, jump again",
            extended: "Great reach",
            moving: "Keep the rhythm",
        },
    }),
};

// ============================================================================
// ISOMETRIC HOLDS
// ============================================================================

const PLANK: Exercise = Exercise {
    id: "plank",
    name: "Plank",
    aliases: &["planks", "forearm_plank", "high_plank", "plank_hold"],
    keywords: &["plank"],
    region: BodyRegion::Core,
    focus: "full body",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Shoulder, Joint::Hip, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::VerticalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.5 },
                Severity::Alignment,
                30.0,
                "Get down into a plank position",
            ),
            Check::new(
                CheckKind::AngleAtLeast { triple: BODY_LINE, min: 160.0 },
                Severity::Safety,
                30.0,
                "Keep your hips in line with your shoulders and ankles",
            ),
        ],
        checks: &[Check::new(
            CheckKind::AngleWithin { triple: ELBOW, min: 70.0, max: 110.0 },
            Severity::Alignment,
            10.0,
            "Keep your elbows under your shoulders",
        )],
        holding: "Strong plank, keep breathing",
    }),
};

const SIDE_PLANK: Exercise = Exercise {
    id: "side_plank",
    name: "Side Plank",
    aliases: &["side_planks", "side_plank_hold"],
    keywords: &["side_plank"],
    region: BodyRegion::Core,
    focus: "full body",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Shoulder, Joint::Hip, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::VerticalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.75 },
                Severity::Alignment,
                30.0,
                "Lower into a side plank on your forearm",
            ),
            Check::new(
                CheckKind::AngleAtLeast { triple: BODY_LINE, min: 160.0 },
                Severity::Safety,
                30.0,
                "Lift your hips to straighten your body",
            ),
        ],
        checks: &[],
        holding: "Solid side plank, stay long",
    }),
};

const WALL_SIT: Exercise = Exercise {
    id: "wall_sit",
    name: "Wall Sit",
    aliases: &["wall_sits", "wall_squat"],
    keywords: &["wall"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Hip, Joint::Knee, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::AngleWithin { triple: KNEE, min: 75.0, max: 110.0 },
                Severity::Range,
                30.0,
                "Slide down until your knees are at 90 degrees",
            ),
            Check::new(
                CheckKind::HorizontalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.25 },
                Severity::Alignment,
                20.0,
                "Keep your back flat against the wall",
            ),
        ],
        checks: &[Check::new(
            CheckKind::HorizontalOffset { joint: Joint::Knee, anchor: Joint::Ankle, max: 0.3 },
            Severity::Safety,
            10.0,
            "Keep your ankles under your knees",
        )],
        holding: "Great wall sit, hold it",
    }),
};

const TREE_POSE: Exercise = Exercise {
    id: "tree_pose",
    name: "Tree Pose",
    aliases: &["tree", "vrksasana"],
    keywords: &["tree"],
    region: BodyRegion::Full,
    focus: "full body",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Hip, Joint::Knee, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::Above { joint: Joint::Ankle, anchor: Joint::Knee, opposite: true, margin: 0.0 },
                Severity::Range,
                30.0,
                "Raise your foot above your standing knee",
            )
            .on(Sides::Either),
            Check::new(
                CheckKind::AngleAtLeast { triple: KNEE, min: 165.0 },
                Severity::Alignment,
                20.0,
                "Keep your standing leg straight",
            )
            .on(Sides::Either),
        ],
        checks: &[HIPS_LEVEL, SHOULDERS_LEVEL],
        holding: "Balanced and tall, breathe",
    }),
};

const WARRIOR_POSE: Exercise = Exercise {
    id: "warrior_pose",
    name: "Warrior II",
    aliases: &["warrior", "warrior_2", "warrior_ii", "warrior_two", "virabhadrasana"],
    keywords: &["warrior"],
    region: BodyRegion::Full,
    focus: "full body",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Shoulder, Joint::Hip, Joint::Knee, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::AngleWithin { triple: KNEE, min: 80.0, max: 120.0 },
                Severity::Range,
                25.0,
                "Bend your front knee toward 90 degrees",
            )
            .on(Sides::Either),
            Check::new(
                CheckKind::AngleAtLeast { triple: KNEE, min: 160.0 },
                Severity::Alignment,
                20.0,
                "Straighten your back leg",
            )
            .on(Sides::Either),
            Check::new(
                CheckKind::VerticalOffset { joint: Joint::Wrist, anchor: Joint::Shoulder, max: 0.25 },
                Severity::Alignment,
                20.0,
                "Raise your arms to shoulder height",
            )
            .on(Sides::Both),
        ],
        checks: &[TORSO_UPRIGHT],
        holding: "Strong warrior, gaze forward",
    }),
};

const DOWNWARD_DOG: Exercise = Exercise {
    id: "downward_dog",
    name: "Downward Dog",
    aliases: &["downward_facing_dog", "down_dog", "adho_mukha_svanasana"],
    keywords: &["dog"],
    region: BodyRegion::Full,
    focus: "full body",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Shoulder, Joint::Wrist, Joint::Hip, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::AngleWithin { triple: BODY_LINE, min: 50.0, max: 100.0 },
                Severity::Range,
                30.0,
                "Push your hips up and back",
            ),
            Check::new(
                CheckKind::AngleAtLeast { triple: ELBOW, min: 150.0 },
                Severity::Alignment,
                20.0,
                "Straighten your arms",
            ),
        ],
        checks: &[LEGS_STRAIGHT],
        holding: "Lengthen your spine and breathe",
    }),
};

const COBRA_STRETCH: Exercise = Exercise {
    id: "cobra_stretch",
    name: "Cobra Stretch",
    aliases: &["cobra", "cobra_pose", "bhujangasana"],
    keywords: &["cobra"],
    region: BodyRegion::Core,
    focus: "upper body and hips",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Shoulder, Joint::Hip, Joint::Knee],
        constraints: &[
            Check::new(
                CheckKind::Above { joint: Joint::Shoulder, anchor: Joint::Hip, opposite: false, margin: 0.2 },
                Severity::Range,
                30.0,
                "Press up to lift your chest",
            ),
            Check::new(
                CheckKind::AngleWithin { triple: HIP, min: 110.0, max: 170.0 },
                Severity::Safety,
                25.0,
                "Keep your hips on the floor",
            ),
        ],
        checks: &[SHOULDERS_LEVEL],
        holding: "Open chest, shoulders relaxed",
    }),
};

const HAMSTRING_STRETCH: Exercise = Exercise {
    id: "hamstring_stretch",
    name: "Hamstring Stretch",
    aliases: &["forward_fold", "standing_forward_fold", "toe_touch_stretch", "uttanasana"],
    keywords: &["hamstring", "fold"],
    region: BodyRegion::Lower,
    focus: "full body",
    analyzer: Analyzer::Hold(HoldSpec {
        joints: &[Joint::Shoulder, Joint::Hip, Joint::Knee, Joint::Ankle],
        constraints: &[
            Check::new(
                CheckKind::AngleAtMost { triple: HIP, max: 100.0 },
                Severity::Range,
                30.0,
                "Fold further forward from your hips",
            ),
            LEGS_STRAIGHT,
        ],
        checks: &[],
        holding: "Relax into the stretch",
    }),
};

// ============================================================================
// ALTERNATING-BILATERAL EXERCISES
// ============================================================================

const MOUNTAIN_CLIMBER: Exercise = Exercise {
    id: "mountain_climber",
    name: "Mountain Climber",
    aliases: &["mountain_climbers"],
    keywords: &["climber", "mountain"],
    region: BodyRegion::Full,
    focus: "full body",
    analyzer: Analyzer::Alternating(AlternatorSpec {
        rule: SideRule::KneeToChest { reach: 0.9 },
        checks: &[HIPS_DOWN],
        active: "Good drive, switch legs",
        neutral: "Drive a knee toward your chest",
    }),
};

const BICYCLE_CRUNCH: Exercise = Exercise {
    id: "bicycle_crunch",
    name: "Bicycle Crunch",
    aliases: &["bicycle_crunches", "bicycle", "bicycles"],
    keywords: &["bicycle"],
    region: BodyRegion::Core,
    focus: "upper body and legs",
    analyzer: Analyzer::Alternating(AlternatorSpec {
        rule: SideRule::ElbowToOppositeKnee { reach: 0.6 },
        checks: &[],
        active: "Nice twist, switch sides",
        neutral: "Bring your elbow to the opposite knee",
    }),
};

const RUSSIAN_TWIST: Exercise = Exercise {
    id: "russian_twist",
    name: "Russian Twist",
    aliases: &["russian_twists"],
    keywords: &["twist"],
    region: BodyRegion::Core,
    focus: "upper body",
    analyzer: Analyzer::Alternating(AlternatorSpec {
        rule: SideRule::HandsToHip { margin: 0.25 },
        checks: &[],
        active: "Good rotation, twist to the other side",
        neutral: "Rotate your hands toward one hip",
    }),
};

const BIRD_DOG: Exercise = Exercise {
    id: "bird_dog",
    name: "Bird Dog",
    aliases: &["bird_dogs", "birddog"],
    keywords: &["bird"],
    region: BodyRegion::Core,
    focus: "full body",
    analyzer: Analyzer::Alternating(AlternatorSpec {
        rule: SideRule::ArmReach { min_angle: 150.0, margin: 40.0 },
        checks: &[HIPS_LEVEL],
        active: "Long reach, switch sides",
        neutral: "Reach one arm forward",
    }),
};

const HIGH_KNEES: Exercise = Exercise {
    id: "high_knees",
    name: "High Knees",
    aliases: &["high_knee", "running_in_place"],
    keywords: &["knees"],
    region: BodyRegion::Lower,
    focus: "legs",
    analyzer: Analyzer::Alternating(AlternatorSpec {
        rule: SideRule::KneeLift { height: -0.2 },
        checks: &[Check::new(
            CheckKind::HorizontalOffset { joint: Joint::Shoulder, anchor: Joint::Hip, max: 0.25 },
            Severity::Alignment,
            15.0,
            "Stay tall, don't lean back",
        )],
        active: "Great pace, keep those knees high",
        neutral: "Lift your knees to hip height",
    }),
};

// ============================================================================
// CATALOG
// ============================================================================

/// Catch-all for names that match nothing: counts any elbow or knee flex/extend cycle
pub const GENERIC: Exercise = Exercise {
    id: "generic",
    name: "Exercise",
    aliases: &[],
    keywords: &[],
    region: BodyRegion::Full,
    focus: "full body",
    analyzer: Analyzer::Threshold(ThresholdSpec {
        metric: Metric::Angle(&[ELBOW, KNEE]),
        thresholds: Thresholds::new(70.0, 150.0, 55.0, 165.0),
        count_on: CountOn::Extension,
        checks: &[],
        cues: Cues {
            deeper: "Use your full range of motion",
            extend: "Extend all the way",
            contracted: "Good, now extend",
            extended: "Good, go again",
            moving: "Keep moving with control",
        },
    }),
};

/// Every supported exercise
pub const CATALOG: &[Exercise] = &[
    BICEP_CURL,
    HAMMER_CURL,
    SHOULDER_PRESS,
    TRICEP_DIP,
    TRICEP_EXTENSION,
    PUSHUP,
    LATERAL_RAISE,
    FRONT_RAISE,
    UPRIGHT_ROW,
    SQUAT,
    JUMP_SQUAT,
    SUMO_SQUAT,
    LUNGE,
    DEADLIFT,
    GLUTE_BRIDGE,
    CALF_RAISE,
    SITUP,
    CRUNCH,
    LEG_RAISE,
    JUMPING_JACK,
    PLANK,
    SIDE_PLANK,
    WALL_SIT,
    TREE_POSE,
    WARRIOR_POSE,
    DOWNWARD_DOG,
    COBRA_STRETCH,
    HAMSTRING_STRETCH,
    MOUNTAIN_CLIMBER,
    BICYCLE_CRUNCH,
    RUSSIAN_TWIST,
    BIRD_DOG,
    HIGH_KNEES,
];

/// Look up a catalog record by canonical id (`generic` included)
pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    if id == GENERIC.id {
        return Some(&GENERIC);
    }
    CATALOG.iter().find(|e| e.id == id)
}

/// Default exercise per family; a `None` region matches any name
const FAMILY_DEFAULTS: &[(Family, Option<BodyRegion>, &str)] = &[
    (Family::DynamicRep, Some(BodyRegion::Lower), "squat"),
    (Family::DynamicRep, Some(BodyRegion::Upper), "bicep_curl"),
    (Family::DynamicRep, None, "generic"),
    (Family::IsometricHold, None, "plank"),
    (Family::AlternatingBilateral, None, "mountain_climber"),
];

/// Stand-in for an unrecognized name of a known family
pub fn family_default(family: Family, region: Option<BodyRegion>) -> &'static Exercise {
    FAMILY_DEFAULTS
        .iter()
        .find(|(f, r, _)| *f == family && (r.is_none() || *r == region))
        .and_then(|(_, _, id)| find_exercise(id))
        .unwrap_or(&GENERIC)
}
