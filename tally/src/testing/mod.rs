//! Testing utilities for tally.

#![allow(dead_code)]

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Initialize tracing subscriber for tests.
/// Safe to call multiple times - will only initialize once.
/// Respects RUST_LOG env var, defaults to "info".
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A sample with certified mean and sample standard deviation.
#[derive(Debug, Clone)]
pub struct Reference {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub mean: f64,
    pub std: f64,
    /// Relative tolerance the computed statistics must meet.
    pub tolerance: f64,
}

/// Three values around ten million, one apart.
pub fn num_acc_1() -> Reference {
    Reference {
        name: "NumAcc1",
        values: vec![10000001.0, 10000003.0, 10000002.0],
        mean: 10000002.0,
        std: 1.0,
        tolerance: 1e-15,
    }
}

/// `base` followed by 500 `(low, high)` pairs, 1001 values in total.
fn alternating(base: f64, low: f64, high: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(1001);
    values.push(base);
    for _ in 0..500 {
        values.push(low);
        values.push(high);
    }
    values
}

pub fn num_acc_2() -> Reference {
    Reference {
        name: "NumAcc2",
        values: alternating(1.2, 1.1, 1.3),
        mean: 1.2,
        std: 0.1,
        tolerance: 2e-15,
    }
}

/// Like [`num_acc_2`] shifted to a million: seven digits lost to the offset.
pub fn num_acc_3() -> Reference {
    Reference {
        name: "NumAcc3",
        values: alternating(1000000.2, 1000000.1, 1000000.3),
        mean: 1000000.2,
        std: 0.1,
        tolerance: 1e-9,
    }
}

/// Like [`num_acc_2`] shifted to ten million.
pub fn num_acc_4() -> Reference {
    Reference {
        name: "NumAcc4",
        values: alternating(10000000.2, 10000000.1, 10000000.3),
        mean: 10000000.2,
        std: 0.1,
        tolerance: 1e-8,
    }
}

pub fn references() -> [Reference; 4] {
    [num_acc_1(), num_acc_2(), num_acc_3(), num_acc_4()]
}

/// Deterministic shuffle of `values`.
pub fn shuffled(values: &[f64], seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = values.to_vec();
    out.shuffle(&mut rng);
    out
}
