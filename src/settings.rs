//! Configuration for the plane-fitting pipeline.
//!
//! The inlier tolerance is passed to [`fit_plane`](crate::api::fit_plane)
//! directly; everything else that tunes the run lives in [`FitSettings`].

/// How the candidate search walks the cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDensity {
    /// Consecutive triplets starting at every index.
    Dense,
    /// Triplets starting every `sparse_stride` indices.
    Sparse,
}

/// Main configuration object for [`fit_plane`](crate::api::fit_plane).
#[derive(Debug, Clone, PartialEq)]
pub struct FitSettings {
    /// Step between triplet windows for clouds below `sparse_threshold`.
    pub dense_stride: usize,
    /// Step between triplet windows for clouds of `sparse_threshold` points
    /// or more.
    pub sparse_stride: usize,
    /// Cloud size from which the search switches to `sparse_stride`.
    pub sparse_threshold: usize,
    /// The refiner uses the `n / refine_divisor` points nearest the coarse
    /// plane.
    pub refine_divisor: usize,
    /// Score candidates with rayon; only honoured with the `parallel` feature.
    pub parallel_scoring: bool,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            dense_stride: 1,
            sparse_stride: 3,
            sparse_threshold: 600,
            refine_divisor: 2,
            parallel_scoring: false,
        }
    }
}

impl FitSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dense_stride(mut self, stride: usize) -> Self {
        self.dense_stride = stride;
        self
    }

    #[must_use]
    pub fn with_sparse_stride(mut self, stride: usize) -> Self {
        self.sparse_stride = stride;
        self
    }

    #[must_use]
    pub fn with_sparse_threshold(mut self, threshold: usize) -> Self {
        self.sparse_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_refine_divisor(mut self, divisor: usize) -> Self {
        self.refine_divisor = divisor;
        self
    }

    #[must_use]
    pub fn with_parallel_scoring(mut self, parallel: bool) -> Self {
        self.parallel_scoring = parallel;
        self
    }

    pub fn density_for(&self, cloud_size: usize) -> SearchDensity {
        if cloud_size >= self.sparse_threshold {
            SearchDensity::Sparse
        } else {
            SearchDensity::Dense
        }
    }

    /// Window step for a cloud of `cloud_size` points (never zero).
    pub fn stride_for(&self, cloud_size: usize) -> usize {
        let stride = match self.density_for(cloud_size) {
            SearchDensity::Dense => self.dense_stride,
            SearchDensity::Sparse => self.sparse_stride,
        };
        stride.max(1)
    }

    /// Number of nearest points fed to the least-squares refinement.
    pub fn refine_count(&self, cloud_size: usize) -> usize {
        cloud_size / self.refine_divisor.max(1)
    }
}
