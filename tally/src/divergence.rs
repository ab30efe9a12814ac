//! Kullback-Leibler divergence between discrete distributions.

use thiserror::Error;

use crate::sum::sum;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DivergenceError {
    #[error("Distributions differ in shape: {reference} vs {actual} outcomes")]
    ShapeMismatch { reference: usize, actual: usize },

    #[error("A distribution needs at least two outcomes, got {0}")]
    TooFewOutcomes(usize),

    #[error("Probabilities must add up to exactly 1, got {0}")]
    NotNormalized(f64),

    #[error("Probability {0} is outside [0, 1]")]
    OutOfRange(f64),
}

/// Clamp to the smallest positive normal value, so logarithms and ratios stay finite.
#[inline]
pub fn trim(x: f64) -> f64 {
    x.max(f64::MIN_POSITIVE)
}

fn check_distribution(p: &[f64]) -> Result<(), DivergenceError> {
    let total = sum(p);
    if total != 1.0 {
        tracing::debug!(total, "Distribution is not normalized");
        return Err(DivergenceError::NotNormalized(total));
    }
    Ok(())
}

/// `D(reference || actual) = Σ p · log10(p / q)`, in bans.
///
/// Both inputs must have the same length (at least two), sum to exactly one
/// under compensated summation, and hold probabilities in `[0, 1]`. Zero
/// probabilities are trimmed to [`f64::MIN_POSITIVE`] before division, and so
/// is the result: identical distributions report `f64::MIN_POSITIVE`.
pub fn kullback_leibler(reference: &[f64], actual: &[f64]) -> Result<f64, DivergenceError> {
    if reference.len() != actual.len() {
        tracing::debug!(
            reference = reference.len(),
            actual = actual.len(),
            "Distribution shapes differ"
        );
        return Err(DivergenceError::ShapeMismatch {
            reference: reference.len(),
            actual: actual.len(),
        });
    }
    if reference.len() < 2 {
        return Err(DivergenceError::TooFewOutcomes(reference.len()));
    }
    check_distribution(reference)?;
    check_distribution(actual)?;
    if let Some(&p) = reference
        .iter()
        .chain(actual)
        .find(|p| !(0.0..=1.0).contains(*p))
    {
        return Err(DivergenceError::OutOfRange(p));
    }

    let terms: Vec<f64> = reference
        .iter()
        .zip(actual)
        .map(|(&p, &q)| p * (trim(p) / trim(q)).log10())
        .collect();
    Ok(trim(sum(&terms)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_distributions() {
        assert_eq!(
            kullback_leibler(&[0.5, 0.5], &[0.5, 0.5]).unwrap(),
            f64::MIN_POSITIVE
        );
    }

    #[test]
    fn test_disjoint_distributions_are_finite() {
        let divergence = kullback_leibler(&[0.0, 1.0], &[1.0, 0.0]).unwrap();
        assert!(divergence.is_finite());
        assert!(divergence > 300.0, "{divergence}");
    }

    #[test]
    fn test_known_value() {
        let divergence = kullback_leibler(&[0.5, 0.5], &[0.25, 0.75]).unwrap();
        let expected = 0.5 * 2f64.log10() + 0.5 * (2.0 / 3.0f64).log10();
        assert!((divergence - expected).abs() < 1e-15, "{divergence} vs {expected}");
    }

    #[test]
    fn test_not_normalized() {
        assert!(matches!(
            kullback_leibler(&[1.0, f64::EPSILON], &[0.5, 0.5]),
            Err(DivergenceError::NotNormalized(_))
        ));
        assert!(matches!(
            kullback_leibler(&[0.5, 0.5], &[0.5, 0.25]),
            Err(DivergenceError::NotNormalized(_))
        ));
        assert!(matches!(
            kullback_leibler(&[f64::NAN, 1.0], &[0.5, 0.5]),
            Err(DivergenceError::NotNormalized(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            kullback_leibler(&[1.5, -0.5], &[0.5, 0.5]),
            Err(DivergenceError::OutOfRange(1.5))
        );
        assert_eq!(
            kullback_leibler(&[0.5, 0.5], &[-0.5, 1.5]),
            Err(DivergenceError::OutOfRange(-0.5))
        );
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            kullback_leibler(&[0.5, 0.5], &[0.25, 0.25, 0.5]),
            Err(DivergenceError::ShapeMismatch {
                reference: 2,
                actual: 3
            })
        );
        assert_eq!(
            kullback_leibler(&[1.0], &[1.0]),
            Err(DivergenceError::TooFewOutcomes(1))
        );
        assert_eq!(
            kullback_leibler(&[], &[]),
            Err(DivergenceError::TooFewOutcomes(0))
        );
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim(0.0), f64::MIN_POSITIVE);
        assert_eq!(trim(-1.0), f64::MIN_POSITIVE);
        assert_eq!(trim(0.25), 0.25);
    }
}
