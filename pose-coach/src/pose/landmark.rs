//! Canonical body landmarks
//!
//! The 17 COCO keypoints produced by MoveNet / BlazePose-lite style models.
//! Analyzers talk about side-agnostic joints (`Joint::Elbow`) and resolve
//! them to a concrete landmark with a `Side`.

use serde::{Deserialize, Serialize};

/// Number of canonical landmarks
pub const LANDMARK_COUNT: usize = 17;

/// One of the canonical landmarks, in COCO order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landmark {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Landmark {
    /// All landmarks in COCO index order
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Landmark::Nose,
        Landmark::LeftEye,
        Landmark::RightEye,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    /// COCO index of this landmark
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Landmark::Nose => "nose",
            Landmark::LeftEye => "left_eye",
            Landmark::RightEye => "right_eye",
            Landmark::LeftEar => "left_ear",
            Landmark::RightEar => "right_ear",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        }
    }

    /// Parse a provider landmark name.
    ///
    /// Accepts `left_shoulder`, `leftShoulder`, `Left Shoulder` and
    /// `left-shoulder`. Returns `None` for names outside the canonical set
    /// (e.g. BlazePose finger or heel points).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = canonical_key(name);
        Landmark::ALL.into_iter().find(|l| l.as_str() == key)
    }
}

/// Lowercase snake_case form of a provider name (`leftShoulder` -> `left_shoulder`)
fn canonical_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                key.push('_');
            }
            key.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else if ch.is_ascii_alphanumeric() {
            key.push(ch);
            prev_lower = ch.is_ascii_lowercase();
        } else {
            if !key.is_empty() && !key.ends_with('_') {
                key.push('_');
            }
            prev_lower = false;
        }
    }
    while key.ends_with('_') {
        key.pop();
    }
    key
}

/// Body side, from the performer's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Side-agnostic joint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Eye,
    Ear,
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

impl Joint {
    /// Concrete landmark for this joint on the given side
    pub fn on(self, side: Side) -> Landmark {
        use Landmark::*;
        match (self, side) {
            (Joint::Eye, Side::Left) => LeftEye,
            (Joint::Eye, Side::Right) => RightEye,
            (Joint::Ear, Side::Left) => LeftEar,
            (Joint::Ear, Side::Right) => RightEar,
            (Joint::Shoulder, Side::Left) => LeftShoulder,
            (Joint::Shoulder, Side::Right) => RightShoulder,
            (Joint::Elbow, Side::Left) => LeftElbow,
            (Joint::Elbow, Side::Right) => RightElbow,
            (Joint::Wrist, Side::Left) => LeftWrist,
            (Joint::Wrist, Side::Right) => RightWrist,
            (Joint::Hip, Side::Left) => LeftHip,
            (Joint::Hip, Side::Right) => RightHip,
            (Joint::Knee, Side::Left) => LeftKnee,
            (Joint::Knee, Side::Right) => RightKnee,
            (Joint::Ankle, Side::Left) => LeftAnkle,
            (Joint::Ankle, Side::Right) => RightAnkle,
        }
    }
}

/// Three joints whose middle one is the angle vertex (e.g. shoulder-elbow-wrist)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JointTriple {
    pub a: Joint,
    pub vertex: Joint,
    pub c: Joint,
}

impl JointTriple {
    pub const fn new(a: Joint, vertex: Joint, c: Joint) -> Self {
        Self { a, vertex, c }
    }

    /// Landmarks of this triple on one side
    pub fn on(self, side: Side) -> [Landmark; 3] {
        [self.a.on(side), self.vertex.on(side), self.c.on(side)]
    }
}

/// Shoulder-elbow-wrist
pub const ELBOW: JointTriple = JointTriple::new(Joint::Shoulder, Joint::Elbow, Joint::Wrist);
/// Hip-knee-ankle
pub const KNEE: JointTriple = JointTriple::new(Joint::Hip, Joint::Knee, Joint::Ankle);
/// Shoulder-hip-knee
pub const HIP: JointTriple = JointTriple::new(Joint::Shoulder, Joint::Hip, Joint::Knee);
/// Shoulder-hip-ankle (body line)
pub const BODY_LINE: JointTriple = JointTriple::new(Joint::Shoulder, Joint::Hip, Joint::Ankle);
/// Hip-shoulder-elbow (arm abduction / flexion)
pub const SHOULDER: JointTriple = JointTriple::new(Joint::Hip, Joint::Shoulder, Joint::Elbow);
/// Hip-shoulder-wrist (whole-arm raise)
pub const ARM_RAISE: JointTriple = JointTriple::new(Joint::Hip, Joint::Shoulder, Joint::Wrist);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_spellings() {
        assert_eq!(Landmark::from_name("left_shoulder"), Some(Landmark::LeftShoulder));
        assert_eq!(Landmark::from_name("leftShoulder"), Some(Landmark::LeftShoulder));
        assert_eq!(Landmark::from_name("Left Shoulder"), Some(Landmark::LeftShoulder));
        assert_eq!(Landmark::from_name("right-ankle"), Some(Landmark::RightAnkle));
        assert_eq!(Landmark::from_name(" nose "), Some(Landmark::Nose));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Landmark::from_name("left_pinky"), None);
        assert_eq!(Landmark::from_name(""), None);
    }

    #[test]
    fn test_coco_order() {
        for (i, l) in Landmark::ALL.iter().enumerate() {
            assert_eq!(l.index(), i);
        }
        assert_eq!(Landmark::LeftShoulder.index(), 5);
        assert_eq!(Landmark::RightAnkle.index(), 16);
    }

    #[test]
    fn test_joint_sides() {
        assert_eq!(Joint::Knee.on(Side::Left), Landmark::LeftKnee);
        assert_eq!(ELBOW.on(Side::Right), [Landmark::RightShoulder, Landmark::RightElbow, Landmark::RightWrist]);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
