//! Deterministic sampler yielding windows of consecutive indices.

use crate::core::Sampler;
use crate::types::Point3D;

/// Yields `(i, i + 1, ..., i + sample_size - 1)` for `i = 0, stride,
/// 2 * stride, ...` while the window fits inside the cloud.
///
/// With stride 1 every consecutive triplet is visited; larger strides trade
/// coverage for speed on big clouds.
pub struct SlidingWindowSampler {
    stride: usize,
    next_start: usize,
}

impl Default for SlidingWindowSampler {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SlidingWindowSampler {
    /// A stride of zero is treated as one.
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
            next_start: 0,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of windows this sampler yields over a cloud of `n` points.
    pub fn window_count(&self, n: usize, sample_size: usize) -> usize {
        if sample_size == 0 || n < sample_size {
            return 0;
        }
        (n - sample_size) / self.stride + 1
    }
}

impl Sampler for SlidingWindowSampler {
    fn sample(&mut self, data: &[Point3D], sample_size: usize, out_indices: &mut [usize]) -> bool {
        let n = data.len();
        if sample_size == 0 || out_indices.len() < sample_size {
            return false;
        }
        if self.next_start + sample_size > n {
            return false;
        }
        for (offset, slot) in out_indices.iter_mut().take(sample_size).enumerate() {
            *slot = self.next_start + offset;
        }
        self.next_start += self.stride;
        true
    }

    fn reset(&mut self) {
        self.next_start = 0;
    }
}
