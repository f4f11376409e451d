//! 3D joint-angle kernel
//!
//! The single geometric primitive of the system: the angle at a vertex
//! between rays to two other points, in degrees.

use crate::Position3D;

/// Angle in degrees at vertex `b` between the rays `b -> a` and
/// `b -> c`, in [0, 180].
///
/// Coincident points produce a zero-length vector; the angle is then
/// undefined and this returns `0.0` by contract rather than NaN. The
/// cosine argument is clamped to [-1, 1] before `acos` because
/// floating-point error can push it fractionally out of domain.
pub fn joint_angle(a: Position3D, b: Position3D, c: Position3D) -> f32 {
    let v1 = Position3D::new(a.x - b.x, a.y - b.y, a.z - b.z);
    let v2 = Position3D::new(c.x - b.x, c.y - b.y, c.z - b.z);

    let dot = v1.x * v2.x + v1.y * v2.y + v1.z * v2.z;
    let mag1 = (v1.x * v1.x + v1.y * v1.y + v1.z * v1.z).sqrt();
    let mag2 = (v2.x * v2.x + v2.y * v2.y + v2.z * v2.z).sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let cos_theta = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_right_angle() {
        let a = Position3D::new(1.0, 0.0, 0.0);
        let b = Position3D::zero();
        let c = Position3D::new(0.0, 1.0, 0.0);
        assert!((joint_angle(a, b, c) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_straight_line_through_vertex() {
        let a = Position3D::new(-1.0, 0.0, 0.0);
        let b = Position3D::zero();
        let c = Position3D::new(1.0, 0.0, 0.0);
        assert!((joint_angle(a, b, c) - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_coincident_points_yield_zero() {
        let p = Position3D::new(0.3, 0.7, -0.2);
        assert_eq!(joint_angle(p, p, p), 0.0);
    }

    #[test]
    fn test_vertex_coincides_with_endpoint() {
        let b = Position3D::new(0.5, 0.5, 0.0);
        let c = Position3D::new(0.9, 0.1, 0.0);
        assert_eq!(joint_angle(b, b, c), 0.0);
        assert_eq!(joint_angle(c, b, b), 0.0);
    }

    #[test]
    fn test_cosine_clamped_above_one() {
        // Parallel rays of very different magnitude: rounding in the
        // dot product can push cos fractionally above 1.
        let a = Position3D::new(1e-20, 1e-20, 1e-20);
        let b = Position3D::zero();
        let c = Position3D::new(0.3e10, 0.3e10, 0.3e10);
        let angle = joint_angle(a, b, c);
        assert!(angle.is_finite());
        assert!(angle.abs() < 1.0);
    }

    #[test]
    fn test_cosine_clamped_below_minus_one() {
        let a = Position3D::new(-1e-20, -1e-20, -1e-20);
        let b = Position3D::zero();
        let c = Position3D::new(0.3e10, 0.3e10, 0.3e10);
        let angle = joint_angle(a, b, c);
        assert!(angle.is_finite());
        assert!((angle - 180.0).abs() < 1.0);
    }

    #[test]
    fn test_symmetry_in_endpoints() {
        let a = Position3D::new(0.2, 0.9, 0.1);
        let b = Position3D::new(0.5, 0.5, 0.0);
        let c = Position3D::new(0.8, 0.3, -0.4);
        let lhs = joint_angle(a, b, c);
        let rhs = joint_angle(c, b, a);
        assert!((lhs - rhs).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn prop_angle_in_range(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0, az in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0, bz in -10.0f32..10.0,
            cx in -10.0f32..10.0, cy in -10.0f32..10.0, cz in -10.0f32..10.0,
        ) {
            let angle = joint_angle(
                Position3D::new(ax, ay, az),
                Position3D::new(bx, by, bz),
                Position3D::new(cx, cy, cz),
            );
            prop_assert!(angle.is_finite());
            prop_assert!((0.0..=180.0).contains(&angle));
        }
    }
}
