//! Direct solvers for `A x = b` without forming an inverse.

use super::{snap_to_zero, DenseMatrix};
use crate::error::MatrixError;

impl DenseMatrix {
    /// Solve the square system `a * x = b` by forward elimination and back
    /// substitution. Only the first column of `b` is used.
    ///
    /// No row swaps are attempted: a zero on the diagonal during elimination
    /// yields [`MatrixError::Singular`].
    pub fn solve(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        check_system(a, b)?;
        let n = a.rows();
        let mut a = a.clone();
        let mut b = b.clone();

        for i in 0..n {
            if a[(i, i)] == 0.0 {
                return Err(MatrixError::Singular);
            }
            for j in (i + 1)..n {
                let factor = a[(j, i)] / a[(i, i)];
                for k in (i + 1)..n {
                    a[(j, k)] = snap_to_zero(a[(j, k)] - a[(i, k)] * factor);
                }
                b[(j, 0)] -= b[(i, 0)] * factor;
                a[(j, i)] = 0.0;
            }
        }

        Ok(back_substitute(&a, &b, true))
    }

    /// Solve a system whose sub-diagonal part has total bandwidth `k`
    /// (half-width `(k - 1) / 2` below the diagonal).
    ///
    /// Elimination only visits the `(k - 1) / 2` rows below each pivot, so
    /// entries further below are assumed to be zero. The upper part may be
    /// arbitrarily wide.
    pub fn band_solve(
        a: &DenseMatrix,
        b: &DenseMatrix,
        k: usize,
    ) -> Result<DenseMatrix, MatrixError> {
        check_system(a, b)?;
        let n = a.rows();
        let half = k.saturating_sub(1) / 2;
        let mut a = a.clone();
        let mut b = b.clone();

        for i in 0..n {
            if a[(i, i)] == 0.0 {
                return Err(MatrixError::Singular);
            }
            let band_end = (i + half).min(n - 1);
            for j in (i + 1)..=band_end {
                let factor = a[(j, i)] / a[(i, i)];
                for s in (i + 1)..n {
                    a[(j, s)] -= a[(i, s)] * factor;
                }
                b[(j, 0)] -= b[(i, 0)] * factor;
                a[(j, i)] = 0.0;
            }
        }

        Ok(back_substitute(&a, &b, false))
    }
}

fn check_system(a: &DenseMatrix, b: &DenseMatrix) -> Result<(), MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if b.rows() != a.rows() || b.cols() == 0 {
        return Err(MatrixError::DimensionMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }
    Ok(())
}

/// Back substitution over an upper-triangular `u`.
fn back_substitute(u: &DenseMatrix, b: &DenseMatrix, snap: bool) -> DenseMatrix {
    let n = u.rows();
    let mut x = DenseMatrix::new(n, 1);
    for i in (0..n).rev() {
        let sum: f64 = ((i + 1)..n).map(|j| u[(i, j)] * x[(j, 0)]).sum();
        let value = (b[(i, 0)] - sum) / u[(i, i)];
        x[(i, 0)] = if snap { snap_to_zero(value) } else { value };
    }
    x
}

#[cfg(test)]
mod tests {
    use crate::error::MatrixError;
    use crate::linalg::DenseMatrix;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn residual(a: &DenseMatrix, x: &DenseMatrix, b: &DenseMatrix) -> f64 {
        let ax = a * x;
        (0..b.rows())
            .map(|i| (ax[(i, 0)] - b[(i, 0)]).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn solve_reproduces_rhs() {
        let a = DenseMatrix::from_row_slice(
            3,
            3,
            &[4.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 4.0],
        );
        let b = DenseMatrix::from_row_slice(3, 1, &[11.0, -16.0, 17.0]);
        let x = DenseMatrix::solve(&a, &b).unwrap();
        assert!(residual(&a, &x, &b) < 1e-9);
        assert!((x[(0, 0)] - 1.0).abs() < 1e-9);
        assert!((x[(1, 0)] + 2.0).abs() < 1e-9);
        assert!((x[(2, 0)] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn solve_reproduces_rhs_on_random_systems() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 1..=8 {
            for _ in 0..20 {
                // Diagonal dominance keeps every unpivoted pivot away from zero.
                let mut a = DenseMatrix::new(n, n);
                for i in 0..n {
                    let mut off = 0.0;
                    for j in (0..n).filter(|&j| j != i) {
                        a[(i, j)] = rng.gen_range(-1.0..1.0);
                        off += a[(i, j)].abs();
                    }
                    a[(i, i)] = off + rng.gen_range(0.5..2.0);
                }
                let mut b = DenseMatrix::new(n, 1);
                for i in 0..n {
                    b[(i, 0)] = rng.gen_range(-10.0..10.0);
                }

                let x = DenseMatrix::solve(&a, &b).unwrap();
                assert!(residual(&a, &x, &b) < 1e-8);
            }
        }
    }

    #[test]
    fn solve_keeps_fractional_partial_sums() {
        // Partial sums here are non-integral; truncating them would skew x.
        let a = DenseMatrix::from_row_slice(2, 2, &[2.0, 0.5, 0.0, 4.0]);
        let b = DenseMatrix::from_row_slice(2, 1, &[1.25, 2.0]);
        let x = DenseMatrix::solve(&a, &b).unwrap();
        assert!((x[(1, 0)] - 0.5).abs() < 1e-12);
        assert!((x[(0, 0)] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn solve_rejects_zero_pivot() {
        let a = DenseMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let b = DenseMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        assert_eq!(DenseMatrix::solve(&a, &b), Err(MatrixError::Singular));
    }

    #[test]
    fn band_solve_handles_tridiagonal() {
        let n = 6;
        let mut a = DenseMatrix::new(n, n);
        for i in 0..n {
            a[(i, i)] = 4.0;
            if i > 0 {
                a[(i, i - 1)] = -1.0;
            }
            if i + 1 < n {
                a[(i, i + 1)] = -1.0;
            }
        }
        let b = DenseMatrix::from_row_slice(n, 1, &[3.0, 2.0, 2.0, 2.0, 2.0, 3.0]);
        let x = DenseMatrix::band_solve(&a, &b, 3).unwrap();
        assert!(residual(&a, &x, &b) < 1e-9);
        for i in 0..n {
            assert!((x[(i, 0)] - 1.0).abs() < 1e-9);
        }

        let dense = DenseMatrix::solve(&a, &b).unwrap();
        for i in 0..n {
            assert!((x[(i, 0)] - dense[(i, 0)]).abs() < 1e-9);
        }
    }

    #[test]
    fn band_solve_keeps_full_upper_rows() {
        // Lower bandwidth 1 (diagonal only), upper part dense.
        let a = DenseMatrix::from_row_slice(2, 2, &[2.0, 1.0, 0.0, 1.0]);
        let b = DenseMatrix::from_row_slice(2, 1, &[3.0, 1.0]);
        let x = DenseMatrix::band_solve(&a, &b, 1).unwrap();
        assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((x[(1, 0)] - 1.0).abs() < 1e-12);

        // One band below the diagonal, full upper triangle.
        let a = DenseMatrix::from_row_slice(
            4,
            4,
            &[
                4.0, 1.0, 2.0, 3.0, 1.0, 5.0, 1.0, 2.0, 0.0, 2.0, 6.0, 1.0, 0.0, 0.0, 1.0, 7.0,
            ],
        );
        let b = DenseMatrix::from_row_slice(4, 1, &[10.0, 9.0, 9.0, 8.0]);
        let banded = DenseMatrix::band_solve(&a, &b, 3).unwrap();
        let dense = DenseMatrix::solve(&a, &b).unwrap();
        assert!(residual(&a, &banded, &b) < 1e-9);
        for i in 0..4 {
            assert!((banded[(i, 0)] - dense[(i, 0)]).abs() < 1e-9);
        }
    }

    #[test]
    fn band_solve_rejects_zero_pivot() {
        let a = DenseMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let b = DenseMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        assert_eq!(DenseMatrix::band_solve(&a, &b, 3), Err(MatrixError::Singular));
    }

    #[test]
    fn mismatched_rhs_is_reported() {
        let a = DenseMatrix::identity(3);
        let b = DenseMatrix::new(2, 1);
        assert!(matches!(
            DenseMatrix::solve(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }
}
