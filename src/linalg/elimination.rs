//! Gaussian elimination, reduced row-echelon form and inversion.

use log::trace;

use super::{snap_to_zero, DenseMatrix};
use crate::error::MatrixError;

/// Classification of an augmented system `[A | b]` read from its RREF.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionSet {
    /// Some row reads `0 = c` with `c != 0`.
    NoSolution,
    /// Exactly one solution, as a column vector.
    Unique(DenseMatrix),
    /// A particular solution plus one special (null-space) column per free
    /// variable.
    Infinite {
        particular: DenseMatrix,
        special: DenseMatrix,
    },
}

impl DenseMatrix {
    /// Reduce `self`, read as an augmented system `[A | b]` whose last column
    /// is the right-hand side, to row-echelon form.
    ///
    /// A pivot that is exactly zero triggers a search below it for the
    /// largest-magnitude entry in the same column; if the column is empty from
    /// the current row down, the column advances while the row stays put.
    pub fn gaussian_eliminate(&self) -> DenseMatrix {
        let mut ab = self.clone();
        let rows = ab.rows();
        let cols = ab.cols();
        let a_cols = cols.saturating_sub(1);

        let mut i = 0;
        let mut j = 0;
        while i < rows {
            let mut pivot_found = false;
            while j < a_cols && !pivot_found {
                if ab[(i, j)] != 0.0 {
                    pivot_found = true;
                    continue;
                }
                let mut max_row = i;
                let mut max_val = 0.0;
                for k in (i + 1)..rows {
                    let cur = ab[(k, j)].abs();
                    if cur > max_val {
                        max_row = k;
                        max_val = cur;
                    }
                }
                if max_row != i {
                    ab.swap_rows(max_row, i);
                    pivot_found = true;
                } else {
                    j += 1;
                }
            }

            if pivot_found {
                let pivot = ab[(i, j)];
                for t in (i + 1)..rows {
                    let factor = ab[(t, j)] / pivot;
                    for s in (j + 1)..cols {
                        ab[(t, s)] = snap_to_zero(ab[(t, s)] - ab[(i, s)] * factor);
                    }
                    ab[(t, j)] = 0.0;
                }
            }

            i += 1;
            j += 1;
        }

        ab
    }

    /// Back-substitute a row-echelon matrix into reduced row-echelon form.
    ///
    /// Rows are processed bottom-up; each pivot (the leftmost non-zero
    /// coefficient of its row) is cleared from the rows above and then scaled
    /// to one.
    pub fn row_reduce_from_gaussian(&self) -> DenseMatrix {
        let mut r = self.clone();
        let cols = r.cols();
        let coeff_cols = cols.saturating_sub(1);

        for i in (0..r.rows()).rev() {
            let Some(j) = (0..coeff_cols).find(|&c| r[(i, c)] != 0.0) else {
                continue;
            };
            let pivot = r[(i, j)];

            for t in (0..i).rev() {
                let factor = r[(t, j)] / pivot;
                for s in 0..cols {
                    if s != j {
                        r[(t, s)] = snap_to_zero(r[(t, s)] - r[(i, s)] * factor);
                    }
                }
                r[(t, j)] = 0.0;
            }

            for k in (j + 1)..cols {
                r[(i, k)] = snap_to_zero(r[(i, k)] / pivot);
            }
            r[(i, j)] = 1.0;
        }

        r
    }

    /// Invert a square matrix through `[A | I]` elimination.
    ///
    /// Returns [`MatrixError::Singular`] when some column has no usable pivot.
    pub fn inverse(&self) -> Result<DenseMatrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let n = self.rows();
        let augmented = DenseMatrix::augment(self, &DenseMatrix::identity(n));
        let upper = augmented.gaussian_eliminate();

        // A missing pivot pushes the row's leading entry right of the diagonal.
        if let Some(row) = (0..n).find(|&i| upper[(i, i)] == 0.0) {
            trace!("inverse: no pivot for column {} of a {}x{} matrix", row, n, n);
            return Err(MatrixError::Singular);
        }

        let reduced = upper.row_reduce_from_gaussian();
        let mut inv = DenseMatrix::new(n, n);
        for i in 0..n {
            for j in 0..n {
                inv[(i, j)] = reduced[(i, j + n)];
            }
        }
        Ok(inv)
    }

    /// Read the solution set of an augmented system already in RREF.
    pub fn solution_set(&self) -> SolutionSet {
        let unknowns = self.cols().saturating_sub(1);
        let mut particular = DenseMatrix::new(unknowns, 1);
        let mut pivot_of_row: Vec<Option<usize>> = Vec::with_capacity(self.rows());
        let mut is_pivot_col = vec![false; unknowns];

        for i in 0..self.rows() {
            let pivot = (0..unknowns).find(|&j| self[(i, j)] != 0.0);
            match pivot {
                Some(j) => {
                    particular[(j, 0)] = self[(i, unknowns)];
                    is_pivot_col[j] = true;
                }
                None if self[(i, unknowns)] != 0.0 => return SolutionSet::NoSolution,
                None => {}
            }
            pivot_of_row.push(pivot);
        }

        let free: Vec<usize> = (0..unknowns).filter(|&j| !is_pivot_col[j]).collect();
        if free.is_empty() {
            return SolutionSet::Unique(particular);
        }

        let mut special = DenseMatrix::new(unknowns, free.len());
        for (col, &f) in free.iter().enumerate() {
            special[(f, col)] = 1.0;
            for (i, pivot) in pivot_of_row.iter().enumerate() {
                if let Some(p) = pivot {
                    special[(*p, col)] = -self[(i, f)];
                }
            }
        }

        SolutionSet::Infinite {
            particular,
            special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolutionSet;
    use crate::error::MatrixError;
    use crate::linalg::DenseMatrix;
    use nalgebra::DMatrix;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Random strictly diagonally dominant `n x n` matrix.
    fn dominant_matrix(rng: &mut StdRng, n: usize) -> DenseMatrix {
        let mut m = DenseMatrix::new(n, n);
        for i in 0..n {
            let mut off = 0.0;
            for j in (0..n).filter(|&j| j != i) {
                m[(i, j)] = rng.gen_range(-1.0..1.0);
                off += m[(i, j)].abs();
            }
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            m[(i, i)] = sign * (off + rng.gen_range(0.5..2.0));
        }
        m
    }

    fn assert_close(a: &DenseMatrix, b: &DenseMatrix, tol: f64) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((x - y).abs() < tol, "{} vs {}\n{}\n{}", x, y, a, b);
        }
    }

    #[test]
    fn eliminate_produces_upper_triangle() {
        let ab = DenseMatrix::from_row_slice(
            3,
            4,
            &[2.0, 1.0, -1.0, 8.0, -3.0, -1.0, 2.0, -11.0, -2.0, 1.0, 2.0, -3.0],
        );
        let u = ab.gaussian_eliminate();
        assert_eq!(u[(1, 0)], 0.0);
        assert_eq!(u[(2, 0)], 0.0);
        assert_eq!(u[(2, 1)], 0.0);
        // Input is left untouched.
        assert_eq!(ab[(1, 0)], -3.0);
    }

    #[test]
    fn zero_pivot_swaps_in_largest_row() {
        let ab = DenseMatrix::from_row_slice(3, 3, &[0.0, 1.0, 1.0, 1.0, 0.0, 2.0, -4.0, 1.0, 3.0]);
        let u = ab.gaussian_eliminate();
        assert_eq!(u[(0, 0)], -4.0);
    }

    #[test]
    fn rref_solves_classic_system() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3 => (2, 3, -1).
        let ab = DenseMatrix::from_row_slice(
            3,
            4,
            &[2.0, 1.0, -1.0, 8.0, -3.0, -1.0, 2.0, -11.0, -2.0, 1.0, 2.0, -3.0],
        );
        let r = ab.gaussian_eliminate().row_reduce_from_gaussian();
        let expected = DenseMatrix::from_row_slice(
            3,
            4,
            &[1.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 0.0, 1.0, -1.0],
        );
        assert_close(&r, &expected, 1e-9);
        assert_eq!(
            r.solution_set(),
            SolutionSet::Unique(DenseMatrix::from_row_slice(3, 1, &[2.0, 3.0, -1.0]))
        );
    }

    #[test]
    fn inverse_matches_nalgebra() {
        let values = [4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0];
        let m = DenseMatrix::from_row_slice(3, 3, &values);
        let inv = m.inverse().unwrap();

        let reference = DMatrix::from_row_slice(3, 3, &values).try_inverse().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!((inv[(i, j)] - reference[(i, j)]).abs() < 1e-9);
            }
        }
        assert_close(&(&m * &inv), &DenseMatrix::identity(3), 1e-9);
    }

    #[test]
    fn inverse_of_inverse_round_trips() {
        let m = DenseMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 2.0, 1.0, 3.0, 1.0, 0.0, 4.0, 1.0, 2.0, 1.0, 0.0, 5.0, 1.0, 3.0, 2.0, 0.0,
            ],
        );
        let back = m.inverse().unwrap().inverse().unwrap();
        assert_close(&back, &m, 1e-8);
    }

    #[test]
    fn inverse_round_trips_on_random_matrices() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..=6 {
            for _ in 0..20 {
                let m = dominant_matrix(&mut rng, n);
                let inv = m.inverse().unwrap();
                assert_close(&(&m * &inv), &DenseMatrix::identity(n), 1e-8);
                assert_close(&(&inv * &m), &DenseMatrix::identity(n), 1e-8);
                assert_close(&inv.inverse().unwrap(), &m, 1e-7);
            }
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = DenseMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
        assert_eq!(m.inverse(), Err(MatrixError::Singular));

        let zero = DenseMatrix::new(2, 2);
        assert_eq!(zero.inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn inverse_requires_square() {
        assert_eq!(
            DenseMatrix::new(2, 3).inverse(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn solution_set_detects_inconsistent_rows() {
        // x + y = 1, x + y = 2
        let ab = DenseMatrix::from_row_slice(2, 3, &[1.0, 1.0, 1.0, 1.0, 1.0, 2.0]);
        let r = ab.gaussian_eliminate().row_reduce_from_gaussian();
        assert_eq!(r.solution_set(), SolutionSet::NoSolution);
    }

    #[test]
    fn solution_set_reports_special_solutions() {
        // x + 2y + z = 4, z = 1 => x = 3 - 2y, y free.
        let ab = DenseMatrix::from_row_slice(2, 4, &[1.0, 2.0, 1.0, 4.0, 0.0, 0.0, 1.0, 1.0]);
        let r = ab.gaussian_eliminate().row_reduce_from_gaussian();
        match r.solution_set() {
            SolutionSet::Infinite {
                particular,
                special,
            } => {
                assert_eq!(particular.as_slice(), &[3.0, 0.0, 1.0]);
                assert_eq!((special.rows(), special.cols()), (3, 1));
                assert_eq!(special.as_slice(), &[-2.0, 1.0, 0.0]);
            }
            other => panic!("expected infinite solutions, got {:?}", other),
        }
    }
}
