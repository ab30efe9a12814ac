//! First and second moments: mean, variance, standard deviation.
//!
//! Everything is built from [`crate::sum`] and [`crate::elementwise`], so
//! each statistic inherits the accuracy of the compensated sum. NaN and
//! infinities in the input flow through to the result.

mod mean;
mod std_dev;
mod variance;

pub use mean::{mean, weighted_mean, weighted_mean_of};
pub use std_dev::{corrected_sample_std, uncorrected_sample_std};
pub use variance::{
    RepeatWeight, resolve_mean, supplied_mean, unweighted_biased_variance,
    unweighted_biased_variance_of, unweighted_unbiased_variance, weighted_biased_variance,
    weighted_unbiased_variance,
};

use strum_macros::Display;

use crate::error::{Error, Result};

/// The statistic an operation computes. Carried by errors.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moment {
    #[strum(to_string = "mean")]
    Mean,
    #[strum(to_string = "weighted mean")]
    WeightedMean,
    #[strum(to_string = "unweighted biased variance")]
    UnweightedBiasedVariance,
    #[strum(to_string = "unweighted unbiased variance")]
    UnweightedUnbiasedVariance,
    #[strum(to_string = "weighted biased variance")]
    WeightedBiasedVariance,
    #[strum(to_string = "weighted unbiased variance")]
    WeightedUnbiasedVariance,
    #[strum(to_string = "uncorrected standard deviation")]
    UncorrectedStd,
    #[strum(to_string = "corrected standard deviation")]
    CorrectedStd,
}

impl Moment {
    /// Smallest sample the statistic is defined for.
    pub const fn min_len(self) -> usize {
        match self {
            Moment::UnweightedUnbiasedVariance | Moment::CorrectedStd => 2,
            Moment::Mean
            | Moment::WeightedMean
            | Moment::UnweightedBiasedVariance
            | Moment::WeightedBiasedVariance
            | Moment::WeightedUnbiasedVariance
            | Moment::UncorrectedStd => 1,
        }
    }

    /// Fail with [`Error::TooFewValues`] if `len` is below [`Self::min_len`].
    pub fn check_len(self, len: usize) -> Result<()> {
        let required = self.min_len();
        if len < required {
            tracing::debug!(moment = %self, required, actual = len, "Sample too small");
            return Err(Error::TooFewValues {
                moment: self,
                required,
                actual: len,
            });
        }
        Ok(())
    }

    /// The error for a zero denominator in this statistic.
    pub(crate) fn division_by_zero(self) -> Error {
        tracing::debug!(moment = %self, "Zero denominator");
        Error::DivisionByZero { moment: self }
    }
}
