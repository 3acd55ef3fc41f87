//! Plane estimator from point triplets.

use crate::core::Estimator;
use crate::geometry::plane_from_three_points;
use crate::models::PlaneCoefficients;
use crate::types::Point3D;

/// Estimates planes `a*x + b*y + c*z + d = 0` from three points.
///
/// The coefficients are left unnormalised so that scoring against a
/// tolerance behaves exactly like the raw plane equation.
pub struct PlaneEstimator {
    /// Samples whose edge vectors are closer to parallel than this (as the
    /// sine of the angle between them) are rejected as collinear.
    collinearity_tolerance: f64,
}

impl Default for PlaneEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneEstimator {
    pub fn new() -> Self {
        Self {
            collinearity_tolerance: 1e-12,
        }
    }
}

impl Estimator for PlaneEstimator {
    type Model = PlaneCoefficients;

    fn sample_size(&self) -> usize {
        3
    }

    fn is_valid_sample(&self, data: &[Point3D], sample: &[usize]) -> bool {
        if sample.len() < self.sample_size() {
            return false;
        }
        let (i, j, k) = (sample[0], sample[1], sample[2]);
        if i == j || j == k || i == k {
            return false;
        }
        if i >= data.len() || j >= data.len() || k >= data.len() {
            return false;
        }

        let e1 = data[j] - data[i];
        let e2 = data[k] - data[i];
        let scale = e1.norm() * e2.norm();
        if scale == 0.0 {
            return false; // Repeated point
        }
        e1.cross(&e2).norm() > self.collinearity_tolerance * scale
    }

    fn estimate_model(&self, data: &[Point3D], sample: &[usize]) -> Option<Self::Model> {
        if sample.len() < self.sample_size() {
            return None;
        }
        let plane = plane_from_three_points(&data[sample[0]], &data[sample[1]], &data[sample[2]]);
        Some(plane)
    }

    fn is_valid_model(&self, model: &Self::Model) -> bool {
        !model.is_degenerate() && model.to_array().iter().all(|v| v.is_finite())
    }
}
