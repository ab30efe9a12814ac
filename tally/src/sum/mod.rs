//! Compensated summation.
//!
//! Every sum here runs the Kahan-Babuška-Neumaier scheme, so reordering the
//! input moves the result by at most the last bit or two, even when the terms
//! span many orders of magnitude. NaN and infinities propagate per IEEE-754;
//! `inf - inf` yields NaN.

mod accumulator;
mod lane;

pub use accumulator::CompensatedSum;
pub use lane::{F64x4, Lane, Lanes};

use crate::elementwise;
use crate::error::Result;

/// Preferred lane count for f64 (one 256-bit register).
pub const LANES: usize = 4;

/// Below this length [`sum_lanewise`] falls back to [`sum`].
pub const LANEWISE_MIN_LEN: usize = 2 * LANES;

/// Compensated sum of `values`, in input order.
///
/// Returns `0.0` for an empty slice and the only element, untouched, for a
/// single-element slice.
pub fn sum(values: &[f64]) -> f64 {
    match values {
        [] => 0.0,
        [single] => *single,
        _ => {
            let mut acc = CompensatedSum::<f64>::new();
            acc.ingest_all(values);
            acc.value()
        }
    }
}

/// Compensated sum of an iterator.
///
/// Unlike [`sum`] there is no special case for short input: an empty iterator
/// yields the accumulator seed, `-0.0`.
pub fn sum_iter<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().collect::<CompensatedSum>().value()
}

/// Sum of `values[i] * weights[i]`, or [`sum`] of `values` without weights.
pub fn weighted_sum(values: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    match weights {
        Some(weights) => Ok(sum(&elementwise::product(values, weights)?)),
        None => Ok(sum(values)),
    }
}

/// Running sums: element `i` holds the compensated sum of `values[..=i]`.
///
/// One accumulator runs over the input once. An empty input yields `[0.0]`.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    match values {
        [] => vec![0.0],
        [_] => values.to_vec(),
        _ => {
            let mut acc = CompensatedSum::<f64>::new();
            values
                .iter()
                .map(|&v| {
                    acc.ingest(v);
                    acc.value()
                })
                .collect()
        }
    }
}

/// [`cumulative_sum`] of `values[i] * weights[i]`, or of `values` without weights.
pub fn weighted_cumulative_sum(values: &[f64], weights: Option<&[f64]>) -> Result<Vec<f64>> {
    match weights {
        Some(weights) => Ok(cumulative_sum(&elementwise::product(values, weights)?)),
        None => Ok(cumulative_sum(values)),
    }
}

/// Lane-wise compensated sum of a sequence of vectors.
///
/// Lane `i` of the result equals the scalar accumulator run over lane `i` of
/// every input, bit for bit. Empty input yields `+0.0` in every lane.
pub fn sum_lanes<const W: usize>(vectors: &[Lanes<W>]) -> Lanes<W> {
    if vectors.is_empty() {
        return Lanes::splat(0.0);
    }
    let mut acc = CompensatedSum::<Lanes<W>>::new();
    acc.ingest_all(vectors);
    acc.value()
}

/// Compensated sum that accumulates [`LANES`] interleaved partial sums.
///
/// Each lane's sum and corrector are folded into a scalar accumulator
/// together with the tail, so the result agrees with [`sum`] to within the
/// scheme's tolerance, not bit for bit.
pub fn sum_lanewise(values: &[f64]) -> f64 {
    if values.len() < LANEWISE_MIN_LEN {
        return sum(values);
    }

    let chunks = values.chunks_exact(LANES);
    let remainder = chunks.remainder();

    let mut lanes = CompensatedSum::<Lanes<LANES>>::new();
    for chunk in chunks {
        lanes.ingest(Lanes::from_slice(chunk));
    }

    let (partial, corrector) = lanes.parts();
    let mut total = CompensatedSum::<f64>::new();
    for (s, c) in partial.0.into_iter().zip(corrector.0) {
        total.ingest(s);
        total.ingest(-c);
    }
    total.ingest_all(remainder);
    total.value()
}
