//! Tally - accurate summation and moment statistics for f64 samples.
//!
//! This library provides:
//! - Compensated (Kahan-Babuška-Neumaier) sums, scalar and lane-wise
//! - Weighted and cumulative sums
//! - Element-wise products with SIMD kernels for long inputs
//! - Means, variances (biased, unbiased, reliability- and repeat-weighted)
//!   and standard deviations
//! - Evenly spaced ranges and Kullback-Leibler divergence
//!
//! # Quick Start
//!
//! ```rust
//! use tally::{corrected_sample_std, mean, sum};
//!
//! assert_eq!(sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
//!
//! let sample = [10000001.0, 10000003.0, 10000002.0];
//! assert_eq!(mean(&sample)?, 10000002.0);
//! assert_eq!(corrected_sample_std(&sample)?, 1.0);
//! # Ok::<(), tally::Error>(())
//! ```

pub mod divergence;
pub mod elementwise;
pub mod error;
pub mod moments;
pub mod range;
pub mod sum;

#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Errors
// ============================================================================

pub use divergence::DivergenceError;
pub use error::{Error, Result};
pub use range::RangeError;

// ============================================================================
// Summation
// ============================================================================

pub use sum::{
    CompensatedSum, F64x4, Lanes, cumulative_sum, sum, sum_iter, sum_lanes, sum_lanewise,
    weighted_cumulative_sum, weighted_sum,
};

// ============================================================================
// Moments
// ============================================================================

pub use moments::{
    Moment, corrected_sample_std, mean, uncorrected_sample_std, unweighted_biased_variance,
    unweighted_unbiased_variance, weighted_biased_variance, weighted_mean,
    weighted_unbiased_variance,
};

// ============================================================================
// Ranges and divergence
// ============================================================================

pub use divergence::kullback_leibler;
pub use range::{LinspaceConfig, arange, arange_to, linspace};
