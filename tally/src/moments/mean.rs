use num_traits::AsPrimitive;

use super::Moment;
use crate::elementwise::{product_unchecked, widen};
use crate::error::{Result, check_lengths};
use crate::sum::sum;

/// Arithmetic mean, `sum(x) / len(x)`.
///
/// A single-element sample returns that element.
pub fn mean(x: &[f64]) -> Result<f64> {
    Moment::Mean.check_len(x.len())?;
    Ok(sum(x) / x.len() as f64)
}

/// Weighted arithmetic mean, `sum(x * w) / sum(w)`, or [`mean`] without weights.
///
/// Fails when the weights sum to exactly zero.
pub fn weighted_mean(x: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    let Some(weights) = weights else {
        return mean(x);
    };
    Moment::WeightedMean.check_len(x.len())?;
    check_lengths(x.len(), weights.len())?;

    let total_weight = sum(weights);
    if total_weight == 0.0 {
        return Err(Moment::WeightedMean.division_by_zero());
    }
    Ok(sum(&product_unchecked(x, weights)) / total_weight)
}

/// [`weighted_mean`] of a primitive (e.g. integer) sample.
pub fn weighted_mean_of<T: AsPrimitive<f64>>(x: &[T], weights: Option<&[f64]>) -> Result<f64> {
    weighted_mean(&widen(x), weights)
}
