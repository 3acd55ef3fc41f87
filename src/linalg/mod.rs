//! Dense linear algebra used by the least-squares refinement.
//!
//! [`DenseMatrix`] is a row-major `f64` buffer with the usual arithmetic
//! operators plus the elimination routines the refiner needs:
//! - [`DenseMatrix::gaussian_eliminate`] and
//!   [`DenseMatrix::row_reduce_from_gaussian`] (row-echelon / RREF),
//! - [`DenseMatrix::inverse`],
//! - [`DenseMatrix::solve`] and [`DenseMatrix::band_solve`].
//!
//! Every elimination step snaps values whose magnitude is below
//! [`NEAR_ZERO_EPSILON`] to exact zero. The threshold is absolute, so badly
//! scaled systems may be reported as singular (or not) incorrectly.

mod elimination;
mod matrix;
mod solve;

pub use elimination::SolutionSet;
pub use matrix::DenseMatrix;

/// Absolute magnitude below which eliminated entries are treated as zero.
pub const NEAR_ZERO_EPSILON: f64 = 1e-10;

#[inline]
pub(crate) fn snap_to_zero(value: f64) -> f64 {
    if value < NEAR_ZERO_EPSILON && value > -NEAR_ZERO_EPSILON {
        0.0
    } else {
        value
    }
}
