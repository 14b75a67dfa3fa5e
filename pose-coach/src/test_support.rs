//! Synthetic frames for unit tests
//!
//! Image coordinates, y down, performer facing the camera (their left side
//! appears on the right of the image). Torso length is 0.3 when standing.

use crate::pose::{Frame, Keypoint, Landmark, Side};

pub const CONF: f32 = 0.9;

const STANDING: [(Landmark, f32, f32); 17] = [
    (Landmark::Nose, 0.50, 0.10),
    (Landmark::LeftEye, 0.52, 0.08),
    (Landmark::RightEye, 0.48, 0.08),
    (Landmark::LeftEar, 0.54, 0.09),
    (Landmark::RightEar, 0.46, 0.09),
    (Landmark::LeftShoulder, 0.60, 0.25),
    (Landmark::RightShoulder, 0.40, 0.25),
    (Landmark::LeftElbow, 0.60, 0.40),
    (Landmark::RightElbow, 0.40, 0.40),
    (Landmark::LeftWrist, 0.60, 0.55),
    (Landmark::RightWrist, 0.40, 0.55),
    (Landmark::LeftHip, 0.56, 0.55),
    (Landmark::RightHip, 0.44, 0.55),
    (Landmark::LeftKnee, 0.56, 0.75),
    (Landmark::RightKnee, 0.44, 0.75),
    (Landmark::LeftAnkle, 0.56, 0.95),
    (Landmark::RightAnkle, 0.44, 0.95),
];

/// Overwrite one landmark
pub fn set(frame: &mut Frame, landmark: Landmark, x: f32, y: f32) {
    frame.remove(landmark);
    frame.insert(Keypoint::new(landmark, x, y, CONF));
}

fn pos(frame: &Frame, landmark: Landmark) -> (f32, f32) {
    let k = frame.get(landmark).expect("landmark present in test frame");
    (k.x, k.y)
}

/// Upright, arms hanging, every landmark visible
pub fn standing() -> Frame {
    STANDING
        .iter()
        .map(|&(l, x, y)| Keypoint::new(l, x, y, CONF))
        .collect()
}

/// Same geometry with every confidence replaced
pub fn with_confidence(frame: &Frame, confidence: f32) -> Frame {
    frame
        .iter()
        .map(|k| Keypoint::new(k.landmark, k.x, k.y, confidence))
        .collect()
}

/// Standing, both elbows bent to `degrees` (forearm rotates forward from the upper arm)
pub fn elbow_angle(degrees: f32) -> Frame {
    let mut frame = standing();
    let (sin, cos) = degrees.to_radians().sin_cos();
    for side in Side::BOTH {
        let (sx, sy) = pos(&frame, crate::pose::Joint::Shoulder.on(side));
        let (ex, ey) = (sx, sy + 0.15);
        set(&mut frame, crate::pose::Joint::Elbow.on(side), ex, ey);
        set(&mut frame, crate::pose::Joint::Wrist.on(side), ex + 0.15 * sin, ey - 0.15 * cos);
    }
    frame
}

/// Standing, both knees bent to `degrees`; torso stays upright over the hips
pub fn knee_angle(degrees: f32) -> Frame {
    let mut frame = standing();
    let (sin, cos) = degrees.to_radians().sin_cos();
    for side in Side::BOTH {
        let (kx, ky) = pos(&frame, crate::pose::Joint::Knee.on(side));
        let (hx, hy) = (kx - 0.2 * sin, ky + 0.2 * cos);
        let sx = if side == Side::Left { hx + 0.04 } else { hx - 0.04 };
        set(&mut frame, crate::pose::Joint::Hip.on(side), hx, hy);
        set(&mut frame, crate::pose::Joint::Shoulder.on(side), sx, hy - 0.3);
        set(&mut frame, crate::pose::Joint::Elbow.on(side), sx, hy - 0.15);
        set(&mut frame, crate::pose::Joint::Wrist.on(side), sx, hy);
    }
    frame
}

/// Side-on forearm plank; `body_degrees` is the shoulder-hip-ankle angle
pub fn plank(body_degrees: f32) -> Frame {
    let (sin, cos) = body_degrees.to_radians().sin_cos();
    let (ax, ay) = (0.55 - 0.4 * cos, 0.5 - 0.4 * sin);
    let mut frame = Frame::new();
    for side in Side::BOTH {
        use crate::pose::Joint::*;
        let points = [
            (Ear, 0.22, 0.47),
            (Shoulder, 0.30, 0.50),
            (Elbow, 0.30, 0.65),
            (Wrist, 0.42, 0.65),
            (Hip, 0.55, 0.50),
            (Knee, (0.55 + ax) / 2.0, (0.5 + ay) / 2.0),
            (Ankle, ax, ay),
        ];
        for (joint, x, y) in points {
            frame.insert(Keypoint::new(joint.on(side), x, y, CONF));
        }
    }
    frame.insert(Keypoint::new(Landmark::Nose, 0.2, 0.5, CONF));
    frame
}

/// Seated twist: both hands carried toward one hip, or centered for `None`
pub fn twist(toward: Option<Side>) -> Frame {
    let mut frame = standing();
    let (x, y) = match toward {
        Some(Side::Left) => (0.64, 0.55),
        Some(Side::Right) => (0.36, 0.55),
        None => (0.50, 0.42),
    };
    set(&mut frame, Landmark::LeftWrist, x + 0.01, y);
    set(&mut frame, Landmark::RightWrist, x - 0.01, y);
    set(&mut frame, Landmark::LeftElbow, (x + 0.60) / 2.0, 0.40);
    set(&mut frame, Landmark::RightElbow, (x + 0.40) / 2.0, 0.40);
    frame
}

/// Plank with one knee drawn up under the chest, or both legs back for `None`
pub fn climber(toward: Option<Side>) -> Frame {
    let mut frame = plank(180.0);
    if let Some(side) = toward {
        set(&mut frame, crate::pose::Joint::Knee.on(side), 0.38, 0.58);
    }
    frame
}

/// Standing crunch: one elbow brought down to the opposite knee
pub fn bicycle(toward: Option<Side>) -> Frame {
    let mut frame = standing();
    if let Some(side) = toward {
        let (kx, ky) = pos(&frame, crate::pose::Joint::Knee.on(side.opposite()));
        set(&mut frame, crate::pose::Joint::Elbow.on(side), kx, ky - 0.09);
    }
    frame
}

/// Standing with one arm raised straight overhead
pub fn arm_reach(toward: Option<Side>) -> Frame {
    let mut frame = standing();
    if let Some(side) = toward {
        let (sx, _) = pos(&frame, crate::pose::Joint::Shoulder.on(side));
        set(&mut frame, crate::pose::Joint::Elbow.on(side), sx, 0.12);
        set(&mut frame, crate::pose::Joint::Wrist.on(side), sx, 0.0);
    }
    frame
}
