use crate::error::FitError;
use crate::types::Point3D;

/// Local optimization strategy, refining the winning hypothesis of a search.
///
/// `inliers` is the search's inlier set for `model`; implementations may
/// choose their own support instead. Returns the refined model and score
/// together with the support set the refinement was computed from, or an
/// error the caller must treat as fatal for the run.
///
/// ## Example: custom refinement
///
/// ```rust
/// use planefit::error::FitError;
/// use planefit::optimisers::LocalOptimizer;
/// use planefit::types::Point3D;
///
/// #[derive(Clone)]
/// struct Offset(f64);
///
/// struct MeanHeight;
///
/// impl LocalOptimizer<Offset, f64> for MeanHeight {
///     fn run(
///         &mut self,
///         data: &[Point3D],
///         inliers: &[usize],
///         _model: &Offset,
///         score: &f64,
///     ) -> Result<(Offset, f64, Vec<usize>), FitError> {
///         let mean = inliers.iter().map(|&i| data[i].z).sum::<f64>() / inliers.len() as f64;
///         Ok((Offset(mean), *score, inliers.to_vec()))
///     }
/// }
/// ```
pub trait LocalOptimizer<M, S: Clone> {
    fn run(
        &mut self,
        data: &[Point3D],
        inliers: &[usize],
        model: &M,
        best_score: &S,
    ) -> Result<(M, S, Vec<usize>), FitError>;
}

pub mod least_squares;

pub use least_squares::LeastSquaresRefiner;
