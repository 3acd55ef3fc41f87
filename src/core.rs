//! Core traits and the hypothesis search driver.
//!
//! The search is split into pluggable pieces:
//! - an [`Estimator`] turning a minimal sample into a model,
//! - a [`Sampler`] enumerating minimal samples,
//! - a [`Scoring`] strategy ranking models against the whole cloud,
//! - a [`LocalOptimizer`] refining the winner afterwards.
//!
//! [`CandidateSearch`] wires the first three together. Unlike a randomised
//! consensus loop it is exhaustive: it runs until the sampler is exhausted.

use log::{debug, trace};

pub use crate::optimisers::LocalOptimizer;
use crate::types::Point3D;

/// Estimator responsible for generating model hypotheses from minimal samples.
pub trait Estimator {
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Size of a minimal sample for this estimator.
    fn sample_size(&self) -> usize;

    /// Check whether a given sample is geometrically valid.
    fn is_valid_sample(&self, data: &[Point3D], sample: &[usize]) -> bool;

    /// Estimate a model from a minimal sample.
    fn estimate_model(&self, data: &[Point3D], sample: &[usize]) -> Option<Self::Model>;

    /// Validate a candidate model before scoring.
    fn is_valid_model(&self, model: &Self::Model) -> bool;
}

/// Deterministic source of minimal samples.
pub trait Sampler {
    /// Write the next sample of `sample_size` indices into `out_indices`.
    ///
    /// Returns `false` once the sampler is exhausted.
    fn sample(&mut self, data: &[Point3D], sample_size: usize, out_indices: &mut [usize]) -> bool;

    /// Rewind to the first sample.
    fn reset(&mut self);
}

/// Scoring strategy used to evaluate model quality and determine inliers.
pub trait Scoring<M> {
    /// Score type; larger is better.
    type Score: Clone + PartialOrd;

    /// Inlier/outlier threshold in the residual domain.
    fn threshold(&self) -> f64;

    /// Score a model and return its inlier set through `inliers_out`.
    fn score(&self, data: &[Point3D], model: &M, inliers_out: &mut Vec<usize>) -> Self::Score;
}

/// Exhaustive hypothesis search keeping the strictly best-scoring model.
///
/// Ties keep the model found first.
#[derive(Debug)]
pub struct CandidateSearch<E, Sa, Sc>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
{
    pub estimator: E,
    pub sampler: Sa,
    pub scoring: Sc,

    // Outputs / diagnostics
    pub best_model: Option<E::Model>,
    pub best_score: Option<Sc::Score>,
    pub best_inliers: Vec<usize>,
    /// Samples drawn during the last run.
    pub hypotheses: usize,
    /// Samples rejected as degenerate during the last run.
    pub rejected: usize,
}

impl<E, Sa, Sc> CandidateSearch<E, Sa, Sc>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
{
    pub fn new(estimator: E, sampler: Sa, scoring: Sc) -> Self {
        Self {
            estimator,
            sampler,
            scoring,
            best_model: None,
            best_score: None,
            best_inliers: Vec::new(),
            hypotheses: 0,
            rejected: 0,
        }
    }

    /// Score every sample the sampler yields against `data`.
    pub fn run(&mut self, data: &[Point3D]) {
        let sample_size = self.estimator.sample_size();
        let mut sample = vec![0usize; sample_size];
        let mut tmp_inliers = Vec::new();

        self.best_model = None;
        self.best_score = None;
        self.best_inliers.clear();
        self.hypotheses = 0;
        self.rejected = 0;
        self.sampler.reset();

        while self.sampler.sample(data, sample_size, &mut sample) {
            self.hypotheses += 1;

            if !self.estimator.is_valid_sample(data, &sample) {
                trace!("sample {:?} rejected as degenerate", sample);
                self.rejected += 1;
                continue;
            }
            let model = match self.estimator.estimate_model(data, &sample) {
                Some(model) if self.estimator.is_valid_model(&model) => model,
                _ => {
                    trace!("sample {:?} produced no valid model", sample);
                    self.rejected += 1;
                    continue;
                }
            };

            let score = self.scoring.score(data, &model, &mut tmp_inliers);
            let better = match &self.best_score {
                None => true,
                Some(best) => score > *best,
            };

            if better {
                debug!(
                    "new best candidate from sample {:?} with {} inliers",
                    sample,
                    tmp_inliers.len()
                );
                self.best_score = Some(score);
                self.best_model = Some(model);
                self.best_inliers.clear();
                self.best_inliers.extend_from_slice(&tmp_inliers);
            }
        }
    }
}
