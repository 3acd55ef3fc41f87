//! Estimators for geometric models.
//!
//! - Plane estimation from point triplets

pub mod plane;

pub use plane::PlaneEstimator;
