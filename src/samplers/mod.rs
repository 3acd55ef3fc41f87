//! Sampling strategies for the candidate search.
//!
//! Samplers implement the shared [`Sampler`](crate::core::Sampler) trait and
//! are deterministic: running a search twice over the same cloud visits the
//! same samples in the same order.

pub mod sliding_window;

pub use sliding_window::SlidingWindowSampler;
