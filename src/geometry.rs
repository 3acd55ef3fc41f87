//! Point/plane primitives shared by the search, ranking and refinement stages.

use crate::models::PlaneCoefficients;
use crate::types::Point3D;

/// Plane through three points, with normal `(p2 - p1) x (p3 - p1)` and `d`
/// chosen so that `p1` lies on it.
///
/// Collinear input gives an all-zero normal; callers must discard it.
pub fn plane_from_three_points(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> PlaneCoefficients {
    let normal = (p2 - p1).cross(&(p3 - p1));
    let d = -normal.dot(&p1.coords);
    PlaneCoefficients::new(normal.x, normal.y, normal.z, d)
}

/// `a*x + b*y + c*z + d`.
#[inline]
pub fn signed_value(plane: &PlaneCoefficients, point: &Point3D) -> f64 {
    plane.a * point.x + plane.b * point.y + plane.c * point.z + plane.d
}

/// Inlier test `|a*x + b*y + c*z + d| <= tolerance` on the unnormalised
/// plane equation.
#[inline]
pub fn belongs_to_plane(plane: &PlaneCoefficients, point: &Point3D, tolerance: f64) -> bool {
    signed_value(plane, point).abs() <= tolerance
}

/// Distance from `point` to the plane, measured as the length of the vector
/// from the point to its orthogonal projection on the plane.
///
/// The projection foot is `point + k * n` with `k = -s / |n|^2`, so the
/// result equals `|s| / |n|` for the signed value `s`. Degenerate planes
/// yield NaN.
pub fn perpendicular_distance(plane: &PlaneCoefficients, point: &Point3D) -> f64 {
    let normal = plane.normal();
    let k = -signed_value(plane, point) / normal.norm_squared();
    let foot = point + normal * k;
    (foot - point).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_contains_its_defining_points() {
        let p1 = Point3D::new(20.0, 0.0, 3.0);
        let p2 = Point3D::new(10.0, -10.0, 2.0);
        let p3 = Point3D::new(10.0, 10.0, 2.0);
        let plane = plane_from_three_points(&p1, &p2, &p3);
        assert!(!plane.is_degenerate());
        for p in [p1, p2, p3] {
            assert!(signed_value(&plane, &p).abs() < 1e-9);
            assert!(belongs_to_plane(&plane, &p, 1e-9));
        }
    }

    #[test]
    fn coefficients_follow_cross_product() {
        let plane = plane_from_three_points(
            &Point3D::new(0.0, 0.0, 1.0),
            &Point3D::new(1.0, 0.0, 3.0),
            &Point3D::new(0.0, 1.0, 4.0),
        );
        assert_eq!(plane, PlaneCoefficients::new(-2.0, -3.0, 1.0, -1.0));
    }

    #[test]
    fn collinear_points_give_zero_normal() {
        let plane = plane_from_three_points(
            &Point3D::new(0.0, 0.0, 0.0),
            &Point3D::new(1.0, 1.0, 1.0),
            &Point3D::new(2.0, 2.0, 2.0),
        );
        assert!(plane.is_degenerate());
    }

    #[test]
    fn membership_is_invariant_under_joint_scaling() {
        let plane = PlaneCoefficients::new(1.0, -2.0, 0.5, 3.0);
        let points = [
            Point3D::new(1.0, 2.0, 0.0),
            Point3D::new(-3.0, 0.0, 0.1),
            Point3D::new(0.0, 1.5, 0.2),
        ];
        let tolerance = 0.25;
        for factor in [2.0, -3.0, 0.125] {
            let scaled = plane.scaled(factor);
            for p in &points {
                assert_eq!(
                    belongs_to_plane(&plane, p, tolerance),
                    belongs_to_plane(&scaled, p, tolerance * f64::abs(factor))
                );
            }
        }
    }

    #[test]
    fn perpendicular_distance_is_euclidean() {
        // z = 1 written with a non-unit normal.
        let plane = PlaneCoefficients::new(0.0, 0.0, 2.0, -2.0);
        let d = perpendicular_distance(&plane, &Point3D::new(20.0, 0.0, 3.0));
        assert!((d - 2.0).abs() < 1e-12);

        let tilted = PlaneCoefficients::new(1.0, 1.0, 1.0, 0.0);
        let p = Point3D::new(1.0, 1.0, 1.0);
        let expected = 3.0 / 3f64.sqrt();
        assert!((perpendicular_distance(&tilted, &p) - expected).abs() < 1e-12);
    }
}
