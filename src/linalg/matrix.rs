//! Storage, construction and arithmetic for [`DenseMatrix`].

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::error::MatrixError;

/// Rectangular matrix of `f64` stored in a single row-major buffer.
///
/// Dimensions are fixed at construction; only whole-value assignment
/// (`*m = other`) or the compound `*=` with a matrix can change them.
/// Cloning performs a deep copy of the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Default for DenseMatrix {
    /// A 1x1 zero matrix.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl DenseMatrix {
    /// Create a `rows x cols` matrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from values listed row by row.
    ///
    /// # Panics
    /// Panics if `values.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[f64]) -> Self {
        assert_eq!(
            values.len(),
            rows * cols,
            "expected {} values for a {}x{} matrix",
            rows * cols,
            rows,
            cols
        );
        Self {
            rows,
            cols,
            data: values.to_vec(),
        }
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(r1 * self.cols + c, r2 * self.cols + c);
        }
    }

    pub fn transpose(&self) -> DenseMatrix {
        let mut t = DenseMatrix::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// Sum of element-wise products of the first columns of `a` and `b`.
    ///
    /// Both are treated as column vectors with `a.rows()` entries.
    pub fn dot_product(a: &DenseMatrix, b: &DenseMatrix) -> f64 {
        (0..a.rows).map(|i| a[(i, 0)] * b[(i, 0)]).sum()
    }

    /// Horizontal concatenation `[a | b]`.
    ///
    /// # Panics
    /// Panics if the row counts differ.
    pub fn augment(a: &DenseMatrix, b: &DenseMatrix) -> DenseMatrix {
        assert_eq!(a.rows, b.rows, "augment requires equal row counts");
        let mut ab = DenseMatrix::new(a.rows, a.cols + b.cols);
        for i in 0..a.rows {
            for j in 0..a.cols {
                ab[(i, j)] = a[(i, j)];
            }
            for j in 0..b.cols {
                ab[(i, a.cols + j)] = b[(i, j)];
            }
        }
        ab
    }

    /// Integer power by repeated squaring. `pow(0)` is the identity.
    pub fn pow(&self, exponent: u32) -> Result<DenseMatrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut result = DenseMatrix::identity(self.rows);
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }

    pub fn try_add(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        self.check_same_shape(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn try_sub(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        self.check_same_shape(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    pub fn try_mul(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        if self.cols != other.rows {
            return Err(self.mismatch(other));
        }
        Ok(self.matmul(other))
    }

    fn mismatch(&self, other: &DenseMatrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }

    fn check_same_shape(&self, other: &DenseMatrix) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(other));
        }
        Ok(())
    }

    fn zip_with(&self, other: &DenseMatrix, f: impl Fn(f64, f64) -> f64) -> DenseMatrix {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> DenseMatrix {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    fn matmul(&self, other: &DenseMatrix) -> DenseMatrix {
        let mut out = DenseMatrix::new(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self[(i, k)];
                for j in 0..other.cols {
                    out[(i, j)] += lhs * other[(k, j)];
                }
            }
        }
        out
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl<'a> AddAssign<&'a DenseMatrix> for DenseMatrix {
    fn add_assign(&mut self, rhs: &'a DenseMatrix) {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "matrix addition requires equal dimensions"
        );
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
    }
}

impl<'a> SubAssign<&'a DenseMatrix> for DenseMatrix {
    fn sub_assign(&mut self, rhs: &'a DenseMatrix) {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "matrix subtraction requires equal dimensions"
        );
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
    }
}

impl<'a> MulAssign<&'a DenseMatrix> for DenseMatrix {
    fn mul_assign(&mut self, rhs: &'a DenseMatrix) {
        *self = &*self * rhs;
    }
}

impl MulAssign<f64> for DenseMatrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|v| *v *= rhs);
    }
}

impl DivAssign<f64> for DenseMatrix {
    fn div_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|v| *v /= rhs);
    }
}

impl Add for &DenseMatrix {
    type Output = DenseMatrix;

    fn add(self, rhs: Self) -> DenseMatrix {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add for DenseMatrix {
    type Output = DenseMatrix;

    fn add(mut self, rhs: DenseMatrix) -> DenseMatrix {
        self += &rhs;
        self
    }
}

impl Sub for &DenseMatrix {
    type Output = DenseMatrix;

    fn sub(self, rhs: Self) -> DenseMatrix {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Sub for DenseMatrix {
    type Output = DenseMatrix;

    fn sub(mut self, rhs: DenseMatrix) -> DenseMatrix {
        self -= &rhs;
        self
    }
}

impl Mul for &DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, rhs: Self) -> DenseMatrix {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix multiplication requires matching inner dimensions"
        );
        self.matmul(rhs)
    }
}

impl Mul for DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, rhs: DenseMatrix) -> DenseMatrix {
        &self * &rhs
    }
}

impl Mul<f64> for &DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, rhs: f64) -> DenseMatrix {
        self.map(|v| v * rhs)
    }
}

impl Mul<f64> for DenseMatrix {
    type Output = DenseMatrix;

    fn mul(mut self, rhs: f64) -> DenseMatrix {
        self *= rhs;
        self
    }
}

impl<'a> Mul<&'a DenseMatrix> for f64 {
    type Output = DenseMatrix;

    fn mul(self, rhs: &'a DenseMatrix) -> DenseMatrix {
        rhs * self
    }
}

impl Mul<DenseMatrix> for f64 {
    type Output = DenseMatrix;

    fn mul(self, rhs: DenseMatrix) -> DenseMatrix {
        rhs * self
    }
}

impl Div<f64> for &DenseMatrix {
    type Output = DenseMatrix;

    fn div(self, rhs: f64) -> DenseMatrix {
        self.map(|v| v / rhs)
    }
}

impl Div<f64> for DenseMatrix {
    type Output = DenseMatrix;

    fn div(mut self, rhs: f64) -> DenseMatrix {
        self /= rhs;
        self
    }
}

impl fmt::Display for DenseMatrix {
    /// One line per row, entries separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let row = self.row(i);
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
