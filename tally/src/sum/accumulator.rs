//! Running compensated sum.

use super::lane::{Lane, neumaier_step};

/// A running sum with first-order error correction (Kahan-Babuška-Neumaier).
///
/// Works on a single `f64` or on [`Lanes`](super::Lanes), where every lane is
/// an independent accumulator. The value is `unevaluated - corrector`.
///
/// The accumulator carries no synchronization. Sharing one instance between
/// threads requires the caller's own locking; `ingest` takes `&mut self`.
///
/// The sum is seeded with `-0.0`, so an accumulator that only ever sees
/// negative zeros reports `-0.0`.
#[derive(Debug, Clone, Copy)]
pub struct CompensatedSum<L: Lane = f64> {
    unevaluated: L,
    corrector: L,
}

impl<L: Lane> CompensatedSum<L> {
    pub fn new() -> Self {
        Self {
            unevaluated: L::splat(-0.0),
            corrector: L::splat(0.0),
        }
    }

    /// Add one value.
    #[inline]
    pub fn ingest(&mut self, value: L) {
        let (sum, corrector) = neumaier_step(self.unevaluated, self.corrector, value);
        self.unevaluated = sum;
        self.corrector = corrector;
    }

    /// Add every value of `values`, in order.
    #[inline]
    pub fn ingest_all(&mut self, values: &[L]) {
        for &value in values {
            self.ingest(value);
        }
    }

    /// The compensated sum so far.
    #[inline]
    pub fn value(&self) -> L {
        self.unevaluated - self.corrector
    }

    /// Discard everything ingested so far.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `(unevaluated, corrector)`, for folding lanes into another accumulator.
    #[inline]
    pub(crate) fn parts(&self) -> (L, L) {
        (self.unevaluated, self.corrector)
    }
}

impl<L: Lane> Default for CompensatedSum<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lane> Extend<L> for CompensatedSum<L> {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        for value in iter {
            self.ingest(value);
        }
    }
}

impl<L: Lane> FromIterator<L> for CompensatedSum<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
