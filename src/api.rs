//! High-level plane-fitting API.
//!
//! [`fit_plane`] wires the pieces together: an exhaustive [`CandidateSearch`]
//! over sliding-window triplets finds the coarse plane, then the
//! [`LeastSquaresRefiner`] refits over the points nearest to it.

use log::debug;

use crate::core::{CandidateSearch, LocalOptimizer};
use crate::error::FitError;
use crate::estimators::PlaneEstimator;
use crate::models::PlaneCoefficients;
use crate::optimisers::LeastSquaresRefiner;
use crate::samplers::SlidingWindowSampler;
use crate::scoring::{FitmentScore, ToleranceScoring};
use crate::settings::FitSettings;
use crate::types::Point3D;

/// Outcome of the coarse candidate search.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFit {
    /// Best plane through a triplet of the cloud.
    pub plane: PlaneCoefficients,
    /// Fraction of the cloud inside the tolerance band of `plane`.
    pub fitment: FitmentScore,
    /// Indices of the points inside the tolerance band.
    pub inliers: Vec<usize>,
    /// Number of triplets drawn.
    pub hypotheses: usize,
    /// Number of triplets rejected as degenerate.
    pub rejected: usize,
}

/// Result of a full two-stage fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneFitResult {
    pub coarse: CandidateFit,
    /// Least-squares plane, normalised to `c = 1`.
    pub refined: PlaneCoefficients,
    /// Indices of the points the refinement was computed from, nearest to
    /// the coarse plane first.
    pub support: Vec<usize>,
}

/// Run the coarse stage only.
///
/// # Arguments
/// * `points` - Ordered point cloud
/// * `tolerance` - Inlier band on `|a*x + b*y + c*z + d|`
/// * `settings` - Window strides and scoring options
///
/// # Returns
/// The best candidate, or [`FitError::NoCandidate`] when every triplet was
/// degenerate.
pub fn search_candidates(
    points: &[Point3D],
    tolerance: f64,
    settings: &FitSettings,
) -> Result<CandidateFit, FitError> {
    if points.len() < 3 {
        return Err(FitError::NotEnoughPoints(points.len()));
    }

    let estimator = PlaneEstimator::new();
    let sampler = SlidingWindowSampler::new(settings.stride_for(points.len()));
    let scoring = ToleranceScoring::new(tolerance).with_parallel(settings.parallel_scoring);

    let mut search = CandidateSearch::new(estimator, sampler, scoring);
    search.run(points);

    match (search.best_model, search.best_score) {
        (Some(plane), Some(fitment)) => {
            debug!(
                "candidate search over {} points: {} triplets, {} degenerate, fitment {:.4}",
                points.len(),
                search.hypotheses,
                search.rejected,
                fitment.fraction
            );
            Ok(CandidateFit {
                plane,
                fitment,
                inliers: search.best_inliers,
                hypotheses: search.hypotheses,
                rejected: search.rejected,
            })
        }
        _ => Err(FitError::NoCandidate),
    }
}

/// Fit a plane to a noisy point cloud.
///
/// # Arguments
/// * `points` - Ordered point cloud (at least three points)
/// * `tolerance` - Inlier band on `|a*x + b*y + c*z + d|`
/// * `settings_opt` - Optional settings (uses defaults if None)
///
/// # Returns
/// `PlaneFitResult` with the coarse candidate and the refined plane. A
/// singular normal-equations system surfaces as [`FitError::Matrix`].
pub fn fit_plane(
    points: &[Point3D],
    tolerance: f64,
    settings_opt: Option<FitSettings>,
) -> Result<PlaneFitResult, FitError> {
    let settings = settings_opt.unwrap_or_default();
    let coarse = search_candidates(points, tolerance, &settings)?;

    let mut refiner = LeastSquaresRefiner::from_settings(&settings);
    let (refined, _, support) =
        refiner.run(points, &coarse.inliers, &coarse.plane, &coarse.fitment)?;

    Ok(PlaneFitResult {
        coarse,
        refined,
        support,
    })
}
