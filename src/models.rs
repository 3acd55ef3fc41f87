//! Geometric models produced by the fitting pipeline.

use nalgebra::Vector3;

/// Plane `a*x + b*y + c*z + d = 0`.
///
/// The coefficients are not normalised; a plane is valid as long as at least
/// one of `a`, `b`, `c` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl PlaneCoefficients {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The zero "plane", used before any candidate has been found.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn normal(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// True when `a`, `b` and `c` are all exactly zero.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }

    /// Multiply all four coefficients by `factor` (describes the same plane
    /// for any non-zero factor).
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.a * factor,
            self.b * factor,
            self.c * factor,
            self.d * factor,
        )
    }

    /// Rescale so the normal has unit length. Degenerate planes are returned
    /// unchanged.
    pub fn normalized(&self) -> Self {
        let norm = self.normal().norm();
        if norm == 0.0 {
            *self
        } else {
            self.scaled(1.0 / norm)
        }
    }

    /// Express the plane as `z = slope_x * x + slope_y * y + intercept`.
    ///
    /// Returns `None` for planes parallel to the z axis.
    pub fn to_height_field(&self) -> Option<(f64, f64, f64)> {
        if self.c.abs() < 1e-12 {
            return None;
        }
        Some((-self.a / self.c, -self.b / self.c, -self.d / self.c))
    }
}
