//! Core shared types.
//!
//! Points are plain `nalgebra` points; the cloud is an ordered slice of them
//! owned by the caller for the whole pipeline run. Per-point scratch values
//! (such as distances to a plane) live in side arrays indexed like the cloud.

use nalgebra::Point3;

/// A point of the cloud.
pub type Point3D = Point3<f64>;
