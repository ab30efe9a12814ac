use super::Moment;
use super::variance::{unweighted_biased_variance, unweighted_unbiased_variance};
use crate::error::Result;

/// Standard deviation with the `1 / N` factor.
pub fn uncorrected_sample_std(x: &[f64]) -> Result<f64> {
    Moment::UncorrectedStd.check_len(x.len())?;
    Ok(unweighted_biased_variance(x, None)?.sqrt())
}

/// Standard deviation with the `1 / (N - 1)` factor.
pub fn corrected_sample_std(x: &[f64]) -> Result<f64> {
    Moment::CorrectedStd.check_len(x.len())?;
    Ok(unweighted_unbiased_variance(x, None)?.sqrt())
}
