//! Variance estimators.
//!
//! Every estimator takes an optional precomputed mean. `None` means the mean
//! is computed from the sample (with the same weights, where weights apply).
//!
//! The two weighted estimators are not interchangeable:
//! [`weighted_biased_variance`] treats weights as reliabilities and applies
//! the `(ΣW)² − ΣW²` correction, [`weighted_unbiased_variance`] treats them as
//! repeat counts and divides by `ΣW − 1`.

use num_traits::{AsPrimitive, PrimInt};

use super::Moment;
use super::mean::weighted_mean;
use crate::elementwise::{
    broadcast_sub, product_in_place, product_weights, product_weights_in_place, square_in_place,
    widen,
};
use crate::error::{Result, check_lengths};
use crate::sum::sum;

/// Integer weights counting how many times each observation occurred.
pub trait RepeatWeight: PrimInt + AsPrimitive<f64> + AsPrimitive<i128> {}

impl<T: PrimInt + AsPrimitive<f64> + AsPrimitive<i128>> RepeatWeight for T {}

/// The supplied mean, or the (weighted) mean of `x` when none is supplied.
pub fn resolve_mean(expected: Option<f64>, x: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    match expected {
        Some(mean) => Ok(mean),
        None => weighted_mean(x, weights),
    }
}

/// Map a sentinel-encoded mean to an explicit option.
///
/// NaN and infinities mean "not supplied".
pub fn supplied_mean(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `(x[i] - mean)²` in a private scratch copy.
fn squared_deviations(x: &[f64], mean: f64) -> Vec<f64> {
    let mut scratch = broadcast_sub(x, mean);
    square_in_place(&mut scratch);
    scratch
}

/// Population variance, `Σ(x - m)² / N`.
pub fn unweighted_biased_variance(x: &[f64], expected_mean: Option<f64>) -> Result<f64> {
    Moment::UnweightedBiasedVariance.check_len(x.len())?;
    let mean = resolve_mean(expected_mean, x, None)?;
    Ok(sum(&squared_deviations(x, mean)) / x.len() as f64)
}

/// [`unweighted_biased_variance`] of a primitive (e.g. integer) sample.
pub fn unweighted_biased_variance_of<T: AsPrimitive<f64>>(
    x: &[T],
    expected_mean: Option<f64>,
) -> Result<f64> {
    unweighted_biased_variance(&widen(x), expected_mean)
}

/// Sample variance, `Σ(x - m)² / (N - 1)`. Needs at least two values.
pub fn unweighted_unbiased_variance(x: &[f64], expected_mean: Option<f64>) -> Result<f64> {
    Moment::UnweightedUnbiasedVariance.check_len(x.len())?;
    let mean = resolve_mean(expected_mean, x, None)?;
    Ok(sum(&squared_deviations(x, mean)) / (x.len() - 1) as f64)
}

/// Variance with reliability weights:
/// `ΣW · Σ w(x - m)² / ((ΣW)² − ΣW²)`.
///
/// The mean, when not supplied, is the weighted mean. Fails when
/// `(ΣW)² == ΣW²`, i.e. when there is effectively a single observation.
pub fn weighted_biased_variance(
    x: &[f64],
    expected_mean: Option<f64>,
    weights: &[f64],
) -> Result<f64> {
    Moment::WeightedBiasedVariance.check_len(x.len())?;
    check_lengths(x.len(), weights.len())?;
    let mean = resolve_mean(expected_mean, x, Some(weights))?;

    let total_weight = sum(weights);
    let mut scratch = squared_deviations(x, mean);
    product_in_place(&mut scratch, weights)?;
    let numerator = sum(&scratch) * total_weight;

    scratch.copy_from_slice(weights);
    square_in_place(&mut scratch);
    let sum_of_squares = sum(&scratch);
    let squared_total = total_weight * total_weight;
    if squared_total == sum_of_squares {
        return Err(Moment::WeightedBiasedVariance.division_by_zero());
    }
    Ok(numerator / (squared_total - sum_of_squares))
}

/// Variance with repeat-count weights: `Σ w(x - m)² / (ΣW − 1)`.
///
/// Equal to [`unweighted_unbiased_variance`] of the sample with every `x[i]`
/// repeated `w[i]` times. Weights are summed exactly; a total of one fails.
pub fn weighted_unbiased_variance<W: RepeatWeight>(x: &[f64], weights: &[W]) -> Result<f64> {
    Moment::WeightedUnbiasedVariance.check_len(x.len())?;
    check_lengths(x.len(), weights.len())?;

    let weight_sum: i128 = weights.iter().map(|&w| AsPrimitive::<i128>::as_(w)).sum();
    if weight_sum == 1 {
        return Err(Moment::WeightedUnbiasedVariance.division_by_zero());
    }
    let weight_sum = weight_sum as f64;

    let mean = sum(&product_weights(x, weights)?) / weight_sum;
    let mut scratch = squared_deviations(x, mean);
    product_weights_in_place(&mut scratch, weights)?;
    Ok(sum(&scratch) / (weight_sum - 1.0))
}
