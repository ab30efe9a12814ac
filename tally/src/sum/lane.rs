//! Lane abstraction shared by the scalar and the vector compensated sums.
//!
//! The Neumaier correction step is written once against [`Lane`]. The scalar
//! implementation selects with a branch, the vector one with a per-lane mask,
//! so both widths run exactly the same sequence of IEEE operations.

use std::ops::{Add, Sub};

/// A value the correction step can run on: one `f64`, or `W` independent lanes.
pub trait Lane: Copy + Add<Output = Self> + Sub<Output = Self> {
    /// Per-lane comparison result.
    type Mask: Copy;

    /// Broadcast `value` to every lane.
    fn splat(value: f64) -> Self;

    /// Per-lane `|self| >= |other|`. False where either side is NaN.
    fn abs_ge(self, other: Self) -> Self::Mask;

    /// Per-lane `if mask { if_true } else { if_false }`.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
}

impl Lane for f64 {
    type Mask = bool;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn abs_ge(self, other: Self) -> bool {
        self.abs() >= other.abs()
    }

    #[inline(always)]
    fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
        if mask { if_true } else { if_false }
    }
}

/// `W` f64 lanes processed in lock-step.
///
/// Lane `i` of every operation depends only on lane `i` of its operands.
/// The element-wise loops are written so the compiler lowers them to vector
/// instructions of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Lanes<const W: usize>(pub [f64; W]);

/// Four f64 lanes, one 256-bit register.
pub type F64x4 = Lanes<4>;

impl<const W: usize> Lanes<W> {
    /// Number of lanes.
    pub const WIDTH: usize = W;

    /// Load `W` consecutive values.
    ///
    /// # Panics
    /// If `chunk.len() != W`.
    #[inline]
    pub fn from_slice(chunk: &[f64]) -> Self {
        let mut lanes = [0.0; W];
        lanes.copy_from_slice(chunk);
        Self(lanes)
    }

    #[inline]
    pub fn to_array(self) -> [f64; W] {
        self.0
    }

    /// Per-lane bit patterns, for comparisons that must see `-0.0` and NaN payloads.
    pub fn to_bits(self) -> [u64; W] {
        self.0.map(f64::to_bits)
    }
}

impl<const W: usize> From<[f64; W]> for Lanes<W> {
    #[inline]
    fn from(lanes: [f64; W]) -> Self {
        Self(lanes)
    }
}

impl<const W: usize> Add for Lanes<W> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const W: usize> Sub for Lanes<W> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const W: usize> Lane for Lanes<W> {
    type Mask = [bool; W];

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self([value; W])
    }

    #[inline(always)]
    fn abs_ge(self, other: Self) -> [bool; W] {
        std::array::from_fn(|i| self.0[i].abs() >= other.0[i].abs())
    }

    #[inline(always)]
    fn select(mask: [bool; W], if_true: Self, if_false: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if mask[i] { if_true.0[i] } else { if_false.0[i] }
        }))
    }
}

/// One Kahan-Babuška-Neumaier step: returns the new `(sum, corrector)`.
///
/// The correction term is formed from whichever operand is larger in
/// magnitude, which keeps the term itself free of rounding error. It is
/// subtracted from the corrector, so the compensated value is
/// `sum - corrector`.
#[inline(always)]
pub(crate) fn neumaier_step<L: Lane>(sum: L, corrector: L, value: L) -> (L, L) {
    let total = sum + value;
    let sum_dominates = sum.abs_ge(value);
    let larger = L::select(sum_dominates, sum, value);
    let smaller = L::select(sum_dominates, value, sum);
    (total, corrector - ((larger - total) + smaller))
}
