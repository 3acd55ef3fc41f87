//! Error types for the linear-algebra core, the fitting pipeline and the
//! text reader.

use thiserror::Error;

/// Failures raised by [`DenseMatrix`](crate::linalg::DenseMatrix) routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Elimination hit a zero pivot with no non-zero row below to swap in.
    #[error("singular matrix: zero pivot with no viable row swap")]
    Singular,
    #[error("dimension mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Failures of the plane-fitting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("need at least 3 points to fit a plane, got {0}")]
    NotEnoughPoints(usize),
    /// Every triplet the sampler produced was degenerate.
    #[error("no non-degenerate candidate plane found")]
    NoCandidate,
    /// The refinement's linear algebra failed, typically a singular
    /// normal-equations matrix.
    #[error("least-squares refinement failed: {0}")]
    Matrix(#[from] MatrixError),
}

/// Failures while reading the `tolerance / count / x y z ...` text format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is missing the tolerance value")]
    MissingTolerance,
    #[error("input is missing the point count")]
    MissingCount,
    #[error("invalid number {token:?} at token {position}")]
    InvalidNumber { token: String, position: usize },
    #[error("coordinate list ends with an incomplete triple ({0} trailing values)")]
    TruncatedTriple(usize),
    #[error("header declares {declared} points but {found} were read")]
    CountMismatch { declared: usize, found: usize },
    #[error("need at least 3 points, got {0}")]
    NotEnoughPoints(usize),
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
