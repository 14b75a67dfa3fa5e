//! Keypoint normalizer
//!
//! Providers hand over keypoints as an unordered list of named samples.
//! `Frame` re-indexes them by canonical landmark so analyzers can look
//! them up directly; anything missing simply reads as `None`.

use nalgebra::Point2;

use super::landmark::{Landmark, LANDMARK_COUNT};
use crate::error::PoseCoachError;

/// Floats per landmark in a flat buffer (x, y, confidence)
pub const VALUES_PER_KEYPOINT: usize = 3;

/// Length of a flat COCO-ordered frame buffer
pub const FLAT_FRAME_LEN: usize = LANDMARK_COUNT * VALUES_PER_KEYPOINT;

/// A single confidence-scored 2D landmark observation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub landmark: Landmark,
    pub x: f32,
    pub y: f32,
    /// Detection confidence (0-1)
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(landmark: Landmark, x: f32, y: f32, confidence: f32) -> Self {
        Self { landmark, x, y, confidence }
    }

    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// Keypoints for one observation instant, indexed by landmark
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    keypoints: [Option<Keypoint>; LANDMARK_COUNT],
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from provider-named samples, in any order.
    ///
    /// Unknown names are skipped.
    pub fn from_named<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f32, f32, f32)>,
    {
        let mut frame = Frame::new();
        for (name, x, y, confidence) in samples {
            frame.insert_named(name, x, y, confidence);
        }
        frame
    }

    /// Build a frame from a flat COCO-ordered buffer of 17 × (x, y, confidence)
    pub fn from_coco_flat(data: &[f32]) -> Result<Self, PoseCoachError> {
        if data.len() != FLAT_FRAME_LEN {
            return Err(PoseCoachError::BufferLength {
                expected: FLAT_FRAME_LEN,
                actual: data.len(),
            });
        }

        let mut frame = Frame::new();
        for (landmark, chunk) in Landmark::ALL.iter().zip(data.chunks_exact(VALUES_PER_KEYPOINT)) {
            frame.insert(Keypoint::new(*landmark, chunk[0], chunk[1], chunk[2]));
        }
        Ok(frame)
    }

    /// Insert a sample by provider name. Returns false if the name is not canonical.
    pub fn insert_named(&mut self, name: &str, x: f32, y: f32, confidence: f32) -> bool {
        match Landmark::from_name(name) {
            Some(landmark) => {
                self.insert(Keypoint::new(landmark, x, y, confidence));
                true
            }
            None => false,
        }
    }

    /// Insert a keypoint.
    ///
    /// Non-finite coordinates are dropped, confidence is clamped to [0, 1],
    /// and a duplicate landmark keeps the more confident sample.
    pub fn insert(&mut self, mut keypoint: Keypoint) {
        if !keypoint.x.is_finite() || !keypoint.y.is_finite() {
            return;
        }
        keypoint.confidence = if keypoint.confidence.is_finite() {
            keypoint.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let slot = &mut self.keypoints[keypoint.landmark.index()];
        match slot {
            Some(existing) if existing.confidence >= keypoint.confidence => {}
            _ => *slot = Some(keypoint),
        }
    }

    /// Drop a landmark, returning what was stored
    pub fn remove(&mut self, landmark: Landmark) -> Option<Keypoint> {
        self.keypoints[landmark.index()].take()
    }

    pub fn get(&self, landmark: Landmark) -> Option<&Keypoint> {
        self.keypoints[landmark.index()].as_ref()
    }

    /// Position of a landmark, if observed
    pub fn position(&self, landmark: Landmark) -> Option<Point2<f32>> {
        self.get(landmark).map(Keypoint::position)
    }

    /// Confidence of a landmark, if observed
    pub fn confidence(&self, landmark: Landmark) -> Option<f32> {
        self.get(landmark).map(|k| k.confidence)
    }

    /// Number of landmarks present
    pub fn len(&self) -> usize {
        self.keypoints.iter().filter(|k| k.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keypoint> {
        self.keypoints.iter().flatten()
    }
}

impl FromIterator<Keypoint> for Frame {
    fn from_iter<T: IntoIterator<Item = Keypoint>>(iter: T) -> Self {
        let mut frame = Frame::new();
        for keypoint in iter {
            frame.insert(keypoint);
        }
        frame
    }
}
