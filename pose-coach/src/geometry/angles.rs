//! Joint angle calculation using the dot product
//!
//! The angle at a vertex `b` is taken between the rays b→a and b→c:
//! cos(θ) = (v1 · v2) / (|v1| × |v2|)

use nalgebra::Point2;

use crate::pose::{Frame, JointTriple, Side};

/// Rays shorter than this are treated as degenerate
const MIN_RAY_LENGTH: f32 = 1e-4;

/// Angle in degrees at vertex `b`, in [0, 180].
///
/// Returns `None` if any point is missing or a ray has zero length,
/// so callers never see a NaN.
pub fn angle_at_vertex(
    a: Option<Point2<f32>>,
    b: Option<Point2<f32>>,
    c: Option<Point2<f32>>,
) -> Option<f32> {
    let (a, b, c) = (a?, b?, c?);

    let v1 = a - b;
    let v2 = c - b;

    if v1.norm() < MIN_RAY_LENGTH || v2.norm() < MIN_RAY_LENGTH {
        return None;
    }

    let cos_angle = (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0);
    let degrees = cos_angle.acos().to_degrees();
    degrees.is_finite().then_some(degrees)
}

/// Angle of a joint triple on one side of the body
pub fn triple_angle(frame: &Frame, triple: JointTriple, side: Side) -> Option<f32> {
    let [a, vertex, c] = triple.on(side);
    angle_at_vertex(frame.position(a), frame.position(vertex), frame.position(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Option<Point2<f32>> {
        Some(Point2::new(x, y))
    }

    #[test]
    fn test_straight_line() {
        let angle = angle_at_vertex(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0)).unwrap();
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at_vertex(p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5)).unwrap();
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_folded() {
        let angle = angle_at_vertex(p(1.0, 0.0), p(0.0, 0.0), p(2.0, 0.0)).unwrap();
        assert!(angle.abs() < 0.01);
    }

    #[test]
    fn test_symmetric() {
        let ab = angle_at_vertex(p(3.0, 1.0), p(0.0, 0.0), p(-1.0, 2.0)).unwrap();
        let ba = angle_at_vertex(p(-1.0, 2.0), p(0.0, 0.0), p(3.0, 1.0)).unwrap();
        assert!((ab - ba).abs() < 1e-4);
    }

    #[test]
    fn test_missing_point() {
        assert_eq!(angle_at_vertex(None, p(0.0, 0.0), p(1.0, 0.0)), None);
        assert_eq!(angle_at_vertex(p(0.0, 0.0), None, p(1.0, 0.0)), None);
    }

    #[test]
    fn test_degenerate_ray() {
        assert_eq!(angle_at_vertex(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)), None);
    }
}
