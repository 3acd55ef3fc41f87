//! # Planefit - Plane Fitting for Noisy Point Clouds
//!
//! `planefit` fits a plane `a*x + b*y + c*z + d = 0` to an ordered 3-D point
//! cloud in two stages:
//!
//! 1. an exhaustive candidate search builds a plane through every window of
//!    three consecutive points and keeps the one with the largest fraction of
//!    the cloud inside a tolerance band;
//! 2. the cloud is ranked by perpendicular distance to that plane and a
//!    least-squares height field `z = a'x + b'y + c'` is fitted to the nearest
//!    half, solved through the normal equations on a small dense-matrix core.
//!
//! ## Quick Start
//!
//! ```rust
//! use planefit::{fit_plane, Point3D};
//!
//! // z = 2x + 3y + 1 on a 4x4 grid, plus one stray point.
//! let mut points: Vec<Point3D> = (0..16)
//!     .map(|i| {
//!         let (x, y) = ((i % 4) as f64, (i / 4) as f64);
//!         Point3D::new(x, y, 2.0 * x + 3.0 * y + 1.0)
//!     })
//!     .collect();
//! points.push(Point3D::new(1.5, 1.5, 40.0));
//!
//! let result = fit_plane(&points, 0.01, None).unwrap();
//! println!("fitment {:.2}", result.coarse.fitment.fraction);
//! println!("{}", planefit::io::format_plane(&result.refined));
//! ```
//!
//! ## Extending the Library
//!
//! The search is built around the traits in [`core`]:
//!
//! - **[`Estimator`](core::Estimator)**: turns a minimal sample into a model
//! - **[`Sampler`](core::Sampler)**: enumerates minimal samples
//! - **[`Scoring<M>`](core::Scoring)**: scores a model against the cloud
//! - **[`LocalOptimizer<M, S>`](core::LocalOptimizer)**: refines the winner
//!
//! ### Example: Custom Sampler
//!
//! ```rust
//! use planefit::core::Sampler;
//! use planefit::Point3D;
//!
//! /// Samples `(0, i, i + 1)`, fanning out from the first point.
//! struct FanSampler {
//!     next: usize,
//! }
//!
//! impl Sampler for FanSampler {
//!     fn sample(&mut self, data: &[Point3D], sample_size: usize, out: &mut [usize]) -> bool {
//!         if sample_size != 3 || self.next + 2 > data.len() {
//!             return false;
//!         }
//!         out[0] = 0;
//!         out[1] = self.next;
//!         out[2] = self.next + 1;
//!         self.next += 1;
//!         true
//!     }
//!
//!     fn reset(&mut self) {
//!         self.next = 1;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - **[`api`](api)**: High-level fitting functions
//! - **[`core`](core)**: Core traits and the `CandidateSearch` driver
//! - **[`linalg`](linalg)**: Dense matrix, elimination and solvers
//! - **[`geometry`](geometry)**: Plane construction and point distances
//! - **[`ranking`](ranking)**: Distance ranking of the cloud
//! - **[`optimisers`](optimisers)**: Least-squares refinement
//! - **[`io`](io)**: Text input format and output formatting
//! - **[`settings`](settings)**: Configuration types

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod geometry;
pub mod io;
pub mod linalg;
pub mod models;
pub mod optimisers;
pub mod ranking;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;

// Re-export high-level API
pub use api::{fit_plane, search_candidates, CandidateFit, PlaneFitResult};

// Re-export core traits for easy access
pub use core::{Estimator, LocalOptimizer, Sampler, Scoring};

pub use error::{FitError, MatrixError, ParseError};
pub use linalg::DenseMatrix;
pub use models::PlaneCoefficients;
pub use settings::FitSettings;
pub use types::Point3D;
