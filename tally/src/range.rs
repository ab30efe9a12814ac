//! Evenly spaced sequences.
//!
//! Points are produced as `i * step + start` with a fused multiply-add, so
//! every point carries a single rounding regardless of its index.

use thiserror::Error;

/// Largest number of points a generator will produce.
pub const MAX_LEN: usize = i32::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("Range bounds must be finite, got start={start}, stop={stop}")]
    NonFiniteBounds { start: f64, stop: f64 },

    #[error("Step must be finite, got {step}")]
    NonFiniteStep { step: f64 },

    #[error("Step must be non-zero")]
    ZeroStep,

    #[error("Interval from {start} to {stop} is too long to represent")]
    InfiniteInterval { start: f64, stop: f64 },

    #[error("Range of {count} points is too long")]
    TooLong { count: f64 },

    #[error("Step {step} is below the smallest normal value")]
    StepUnderflow { step: f64 },
}

fn reject(err: RangeError) -> RangeError {
    tracing::debug!(%err, "Rejecting range");
    err
}

fn check_bounds(start: f64, stop: f64) -> Result<(), RangeError> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(reject(RangeError::NonFiniteBounds { start, stop }));
    }
    Ok(())
}

fn interval_length(start: f64, stop: f64) -> Result<f64, RangeError> {
    let length = stop - start;
    if length.is_infinite() {
        return Err(reject(RangeError::InfiniteInterval { start, stop }));
    }
    Ok(length)
}

fn points(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| (i as f64).mul_add(step, start)).collect()
}

/// Points from `start` towards `stop` (excluded) in increments of `step`.
///
/// The point count is `(stop - start) / step` truncated towards zero. A step
/// pointing away from `stop`, or `start == stop`, yields an empty range.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, RangeError> {
    check_bounds(start, stop)?;
    if !step.is_finite() {
        return Err(reject(RangeError::NonFiniteStep { step }));
    }
    if step == 0.0 {
        return Err(reject(RangeError::ZeroStep));
    }

    let towards_stop = (stop > start && step > 0.0) || (stop < start && step < 0.0);
    if !towards_stop {
        return Ok(Vec::new());
    }

    let count = (interval_length(start, stop)? / step).trunc();
    if count > MAX_LEN as f64 {
        return Err(reject(RangeError::TooLong { count }));
    }
    Ok(points(start, step, count as usize))
}

/// [`arange`] starting at zero.
pub fn arange_to(stop: f64, step: f64) -> Result<Vec<f64>, RangeError> {
    arange(0.0, stop, step)
}

/// Shape of a [`linspace`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinspaceConfig {
    /// Number of points.
    pub num: usize,
    /// Whether `stop` is the last point.
    pub endpoint: bool,
}

impl Default for LinspaceConfig {
    fn default() -> Self {
        Self {
            num: 50,
            endpoint: true,
        }
    }
}

impl LinspaceConfig {
    /// `num` points, endpoint included.
    pub fn with_num(num: usize) -> Self {
        Self {
            num,
            ..Self::default()
        }
    }

    /// Default point count, endpoint included or not.
    pub fn with_endpoint(endpoint: bool) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }
}

/// `config.num` evenly spaced points from `start` to `stop`.
///
/// Zero points yield an empty vector and one point yields `[start]`, without
/// validating the bounds.
pub fn linspace(start: f64, stop: f64, config: LinspaceConfig) -> Result<Vec<f64>, RangeError> {
    let LinspaceConfig { num, endpoint } = config;
    match num {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![start]),
        _ => {}
    }
    if num > MAX_LEN {
        return Err(reject(RangeError::TooLong { count: num as f64 }));
    }
    check_bounds(start, stop)?;

    let intervals = if endpoint { num - 1 } else { num };
    let step = interval_length(start, stop)? / intervals as f64;
    if step.abs() < f64::MIN_POSITIVE {
        return Err(reject(RangeError::StepUnderflow { step }));
    }
    Ok(points(start, step, num))
}
