/// Absolute tolerance used by [`FloatExt::approximately_eq`].
pub const EPSILON: f64 = 1e-10;

pub trait FloatExt {
    fn approximately_eq(self, other: Self) -> bool;

    /// True when the sign bit is set, including for `-0.0` and negative NaN.
    fn is_sign_bit_set(self) -> bool;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < EPSILON as f32
    }

    fn is_sign_bit_set(self) -> bool {
        self.to_bits() >> 31 == 1
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < EPSILON
    }

    fn is_sign_bit_set(self) -> bool {
        self.to_bits() >> 63 == 1
    }
}

/// Outcome of comparing a computed value against a reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// Within the relative tolerance, or both NaN, or matching infinities.
    Within,
    /// Outside the tolerance, or an unexpected NaN / infinity.
    Outside,
    /// The reference value is subnormal, so a relative error is meaningless.
    Subnormal,
}

/// Classify `result` against `expected` using a relative tolerance.
///
/// NaN only matches NaN. Infinities must agree in sign. A zero reference is
/// compared in absolute terms.
pub fn relative_accuracy(result: f64, expected: f64, tolerance: f64) -> Accuracy {
    let within = |ok: bool| if ok { Accuracy::Within } else { Accuracy::Outside };

    if result.is_nan() || expected.is_nan() {
        return within(result.is_nan() == expected.is_nan());
    }

    if result.is_infinite() || expected.is_infinite() {
        let sign = |v: f64| if v.is_infinite() { v.signum() } else { 0.0 };
        return within(sign(result) == sign(expected));
    }

    let magnitude = expected.abs();
    if magnitude > 0.0 && magnitude < f64::MIN_POSITIVE {
        Accuracy::Subnormal
    } else if expected != 0.0 {
        within((result - expected).abs() / magnitude <= tolerance)
    } else {
        within(result.abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_approximately_eq() {
        assert!(1.0_f64.approximately_eq(1.0));
        assert!(0.0_f64.approximately_eq(0.0));
        assert!((0.1_f64 + 0.2_f64).approximately_eq(0.3));
        assert!(!1.0_f64.approximately_eq(1.0001));
    }

    #[test]
    fn f32_nan_is_never_equal() {
        assert!(!f32::NAN.approximately_eq(f32::NAN));
        assert!(!f32::NAN.approximately_eq(0.0));
    }

    #[test]
    fn sign_bit_distinguishes_zeros() {
        assert!((-0.0_f64).is_sign_bit_set());
        assert!(!0.0_f64.is_sign_bit_set());
        assert!((-0.0_f32).is_sign_bit_set());
        assert!(!1.0_f32.is_sign_bit_set());
    }

    #[test]
    fn nan_matches_only_nan() {
        assert_eq!(relative_accuracy(f64::NAN, 1.0, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(1.0, f64::NAN, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(f64::NAN, f64::NAN, 1.0), Accuracy::Within);
    }

    #[test]
    fn infinities_must_agree_in_sign() {
        let inf = f64::INFINITY;
        assert_eq!(relative_accuracy(inf, 1.0, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(1.0, inf, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(-inf, 1.0, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(1.0, -inf, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(inf, inf, 1.0), Accuracy::Within);
        assert_eq!(relative_accuracy(-inf, -inf, 1.0), Accuracy::Within);
        assert_eq!(relative_accuracy(inf, -inf, 1.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(-inf, inf, 1.0), Accuracy::Outside);
    }

    #[test]
    fn subnormal_reference_is_flagged() {
        assert_eq!(
            relative_accuracy(1.0, -f64::MIN_POSITIVE / 2.0, 1.0),
            Accuracy::Subnormal
        );
    }

    #[test]
    fn finite_values() {
        assert_eq!(relative_accuracy(1.0, 1.0, 0.5), Accuracy::Within);
        assert_eq!(relative_accuracy(10.0, 10.0, 10.0), Accuracy::Within);
        assert_eq!(relative_accuracy(0.5, 10.0, 10.0), Accuracy::Within);
        assert_eq!(relative_accuracy(0.0, 10.0, 10.0), Accuracy::Within);
        assert_eq!(relative_accuracy(10.0, f64::MIN_POSITIVE, 10.0), Accuracy::Outside);
        assert_eq!(relative_accuracy(1.0, 0.0, 0.1), Accuracy::Outside);
        assert_eq!(relative_accuracy(10.0, 0.0, 10.0), Accuracy::Within);
        assert_eq!(relative_accuracy(10.0, 0.0, 0.0), Accuracy::Outside);
    }
}
