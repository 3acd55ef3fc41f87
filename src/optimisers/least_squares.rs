//! Least-squares refinement over the points nearest the coarse plane.

use log::{debug, warn};

use super::LocalOptimizer;
use crate::error::{FitError, MatrixError};
use crate::linalg::DenseMatrix;
use crate::models::PlaneCoefficients;
use crate::ranking::DistanceRanking;
use crate::scoring::FitmentScore;
use crate::settings::FitSettings;
use crate::types::Point3D;

/// Refits a plane as the height field `z = a'x + b'y + c'` through the
/// points closest to a coarse plane.
///
/// The fit solves the normal equations `(AᵀA) x = AᵀB` by explicit inversion
/// of `AᵀA`, with `A = [x y 1]` and `B = [z]` over the selected points, and
/// maps the solution back to `-a' x - b' y + z - c' = 0`.
pub struct LeastSquaresRefiner {
    settings: FitSettings,
}

impl Default for LeastSquaresRefiner {
    fn default() -> Self {
        Self::new()
    }
}

impl LeastSquaresRefiner {
    /// Refine over the nearest half of the cloud.
    pub fn new() -> Self {
        Self::from_settings(&FitSettings::default())
    }

    /// Refine over the nearest [`FitSettings::refine_count`] points.
    pub fn from_settings(settings: &FitSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Fit the height-field plane through `data[support[..]]`.
    pub fn fit(&self, data: &[Point3D], support: &[usize]) -> Result<PlaneCoefficients, MatrixError> {
        let m = support.len();
        let mut a = DenseMatrix::new(m, 3);
        let mut b = DenseMatrix::new(m, 1);
        for (row, &idx) in support.iter().enumerate() {
            let p = &data[idx];
            a[(row, 0)] = p.x;
            a[(row, 1)] = p.y;
            a[(row, 2)] = 1.0;
            b[(row, 0)] = p.z;
        }

        let at = a.transpose();
        let normal = &at * &a;
        let coefficients = &(&normal.inverse()? * &at) * &b;

        Ok(PlaneCoefficients::new(
            -coefficients[(0, 0)],
            -coefficients[(1, 0)],
            1.0,
            -coefficients[(2, 0)],
        ))
    }

    /// Rank the cloud against `plane` and fit over the nearest points.
    ///
    /// Returns the refined plane and the support indices, nearest first.
    pub fn refine(
        &self,
        data: &[Point3D],
        plane: &PlaneCoefficients,
    ) -> Result<(PlaneCoefficients, Vec<usize>), MatrixError> {
        let ranking = DistanceRanking::compute(plane, data);
        let support = ranking.nearest(self.settings.refine_count(data.len())).to_vec();
        let refined = self.fit(data, &support)?;
        Ok((refined, support))
    }
}

impl LocalOptimizer<PlaneCoefficients, FitmentScore> for LeastSquaresRefiner {
    /// The tolerance inliers are not used: the support set is the nearest
    /// `n / refine_divisor` points regardless of how many lie inside the band.
    fn run(
        &mut self,
        data: &[Point3D],
        _inliers: &[usize],
        model: &PlaneCoefficients,
        best_score: &FitmentScore,
    ) -> Result<(PlaneCoefficients, FitmentScore, Vec<usize>), FitError> {
        match self.refine(data, model) {
            Ok((refined, support)) => {
                debug!(
                    "least-squares refinement over {} of {} points: {:?}",
                    support.len(),
                    data.len(),
                    refined
                );
                Ok((refined, *best_score, support))
            }
            Err(err) => {
                warn!(
                    "least-squares refinement failed over {} of {} points: {}",
                    self.settings.refine_count(data.len()),
                    data.len(),
                    err
                );
                Err(FitError::from(err))
            }
        }
    }
}
