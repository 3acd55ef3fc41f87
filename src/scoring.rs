//! Fitment scoring of plane candidates.
//!
//! A candidate's score is the fraction of the whole cloud lying inside the
//! tolerance band `|a*x + b*y + c*z + d| <= p` around it.

use crate::core::Scoring;
use crate::geometry::belongs_to_plane;
use crate::models::PlaneCoefficients;
use crate::types::Point3D;

/// Fraction of the cloud classified as inliers, in `[0, 1]`.
///
/// Ordering compares `fraction` first; within one cloud the inlier count
/// orders identically.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FitmentScore {
    pub fraction: f64,
    pub inlier_count: usize,
}

impl FitmentScore {
    pub fn new(inlier_count: usize, total: usize) -> Self {
        let fraction = if total == 0 {
            0.0
        } else {
            inlier_count as f64 / total as f64
        };
        Self {
            fraction,
            inlier_count,
        }
    }
}

/// Counts points within `tolerance` of a plane candidate.
pub struct ToleranceScoring {
    tolerance: f64,
    parallel: bool,
}

impl ToleranceScoring {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            parallel: false,
        }
    }

    /// Spread scoring across the rayon pool. Without the `parallel` feature
    /// this flag is ignored.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[cfg(feature = "parallel")]
    fn collect_inliers(&self, data: &[Point3D], model: &PlaneCoefficients, out: &mut Vec<usize>) {
        use rayon::prelude::*;

        if self.parallel {
            let tolerance = self.tolerance;
            let found: Vec<usize> = data
                .par_iter()
                .enumerate()
                .filter(|(_, p)| belongs_to_plane(model, p, tolerance))
                .map(|(i, _)| i)
                .collect();
            out.extend(found);
        } else {
            self.collect_inliers_sequential(data, model, out);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_inliers(&self, data: &[Point3D], model: &PlaneCoefficients, out: &mut Vec<usize>) {
        self.collect_inliers_sequential(data, model, out);
    }

    fn collect_inliers_sequential(
        &self,
        data: &[Point3D],
        model: &PlaneCoefficients,
        out: &mut Vec<usize>,
    ) {
        out.extend(
            data.iter()
                .enumerate()
                .filter(|(_, p)| belongs_to_plane(model, p, self.tolerance))
                .map(|(i, _)| i),
        );
    }
}

impl Scoring<PlaneCoefficients> for ToleranceScoring {
    type Score = FitmentScore;

    fn threshold(&self) -> f64 {
        self.tolerance
    }

    fn score(
        &self,
        data: &[Point3D],
        model: &PlaneCoefficients,
        inliers_out: &mut Vec<usize>,
    ) -> FitmentScore {
        inliers_out.clear();
        self.collect_inliers(data, model, inliers_out);
        FitmentScore::new(inliers_out.len(), data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{FitmentScore, ToleranceScoring};
    use crate::core::Scoring;
    use crate::models::PlaneCoefficients;
    use crate::types::Point3D;

    #[test]
    fn counts_points_inside_band() {
        // z = 0 plane.
        let plane = PlaneCoefficients::new(0.0, 0.0, 1.0, 0.0);
        let data = vec![
            Point3D::new(0.0, 0.0, 0.1),
            Point3D::new(1.0, 0.0, 0.4),
            Point3D::new(2.0, 0.0, -0.6),
            Point3D::new(3.0, 0.0, 1.0),
            Point3D::new(4.0, 0.0, -0.3),
        ];

        let scoring = ToleranceScoring::new(0.5);
        let mut inliers = Vec::new();
        let s = scoring.score(&data, &plane, &mut inliers);

        assert_eq!(s.inlier_count, 3);
        assert!((s.fraction - 0.6).abs() < 1e-12);
        assert_eq!(inliers, vec![0, 1, 4]);
        assert_eq!(scoring.threshold(), 0.5);
    }

    #[test]
    fn parallel_flag_gives_same_inliers() {
        let plane = PlaneCoefficients::new(1.0, -1.0, 0.0, 0.0);
        let data: Vec<Point3D> = (0..200)
            .map(|i| {
                let x = i as f64 * 0.1;
                let y = if i % 3 == 0 { x + 1.0 } else { x + 0.001 };
                Point3D::new(x, y, 0.0)
            })
            .collect();

        let mut seq = Vec::new();
        let mut par = Vec::new();
        let a = ToleranceScoring::new(0.01).score(&data, &plane, &mut seq);
        let b = ToleranceScoring::new(0.01)
            .with_parallel(true)
            .score(&data, &plane, &mut par);
        assert_eq!(a, b);
        assert_eq!(seq, par);
    }

    #[test]
    fn score_orders_by_fraction() {
        assert!(FitmentScore::new(3, 5) > FitmentScore::new(2, 5));
        assert_eq!(FitmentScore::new(0, 0).fraction, 0.0);
    }
}
