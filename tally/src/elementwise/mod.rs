//! Element-wise products and scalar broadcasts.
//!
//! Products longer than [`SIMD_THRESHOLD`] run a SIMD kernel (AVX or SSE2 on
//! x86_64, NEON on aarch64) with a scalar tail; shorter ones run the scalar
//! loop. Plain multiplication rounds identically in both paths, so the choice
//! never changes a result.

pub mod scalar;

#[cfg(target_arch = "aarch64")]
mod neon;

#[cfg(target_arch = "x86_64")]
mod avx;

#[cfg(target_arch = "x86_64")]
mod sse2;

use num_traits::AsPrimitive;

use crate::error::{Result, check_lengths};

/// Length above which the product kernels switch to SIMD.
///
/// Below it the dispatch and register setup cost more than they save.
pub const SIMD_THRESHOLD: usize = 5000;

/// `dst[i] *= src[i]`, SIMD above the threshold.
#[inline]
fn multiply_assign(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    if dst.len() > SIMD_THRESHOLD {
        #[cfg(target_arch = "aarch64")]
        {
            return unsafe { neon::mul_assign(dst, src) };
        }
        #[cfg(target_arch = "x86_64")]
        {
            if common::cpu_features::has_avx() {
                tracing::trace!(len = dst.len(), "AVX product kernel");
                return unsafe { avx::mul_assign(dst, src) };
            }
            if common::cpu_features::has_sse2() {
                tracing::trace!(len = dst.len(), "SSE2 product kernel");
                return unsafe { sse2::mul_assign(dst, src) };
            }
        }
    }
    scalar::mul_assign(dst, src)
}

/// `data[i] *= data[i]`, SIMD above the threshold.
#[inline]
pub fn square_in_place(data: &mut [f64]) {
    if data.len() > SIMD_THRESHOLD {
        #[cfg(target_arch = "aarch64")]
        {
            return unsafe { neon::square_assign(data) };
        }
        #[cfg(target_arch = "x86_64")]
        {
            if common::cpu_features::has_avx() {
                return unsafe { avx::square_assign(data) };
            }
            if common::cpu_features::has_sse2() {
                return unsafe { sse2::square_assign(data) };
            }
        }
    }
    scalar::square_assign(data)
}

/// Element-wise product `x[i] * y[i]`.
pub fn product(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_lengths(x.len(), y.len())?;
    Ok(product_unchecked(x, y))
}

/// [`product`] without the length check.
///
/// Extra elements of the longer slice are ignored.
pub fn product_unchecked(x: &[f64], y: &[f64]) -> Vec<f64> {
    let len = x.len().min(y.len());
    let mut out = x[..len].to_vec();
    multiply_assign(&mut out, &y[..len]);
    out
}

/// In-place product: `x[i] *= y[i]`.
pub fn product_in_place(x: &mut [f64], y: &[f64]) -> Result<()> {
    check_lengths(x.len(), y.len())?;
    multiply_assign(x, y);
    Ok(())
}

/// Product with integer (or any primitive) weights, widened to f64 first.
pub fn product_weights<W: AsPrimitive<f64>>(x: &[f64], weights: &[W]) -> Result<Vec<f64>> {
    check_lengths(x.len(), weights.len())?;
    let widened = widen(weights);
    Ok(product_unchecked(x, &widened))
}

/// In-place [`product_weights`].
pub fn product_weights_in_place<W: AsPrimitive<f64>>(x: &mut [f64], weights: &[W]) -> Result<()> {
    check_lengths(x.len(), weights.len())?;
    let widened = widen(weights);
    multiply_assign(x, &widened);
    Ok(())
}

/// Convert every element to f64.
pub fn widen<T: AsPrimitive<f64>>(values: &[T]) -> Vec<f64> {
    values.iter().map(|v| v.as_()).collect()
}

/// Copy of `x` with `shift` added to every element.
pub fn broadcast_add(x: &[f64], shift: f64) -> Vec<f64> {
    x.iter().map(|&v| v + shift).collect()
}

/// Copy of `x` with `shift` subtracted from every element.
pub fn broadcast_sub(x: &[f64], shift: f64) -> Vec<f64> {
    x.iter().map(|&v| v - shift).collect()
}

/// `x[i] - shift` for a primitive sample, widened to f64.
pub fn broadcast_sub_from<T: AsPrimitive<f64>>(x: &[T], shift: f64) -> Vec<f64> {
    x.iter().map(|v| v.as_() - shift).collect()
}

pub fn broadcast_add_in_place(x: &mut [f64], shift: f64) {
    for v in x.iter_mut() {
        *v += shift;
    }
}

pub fn broadcast_sub_in_place(x: &mut [f64], shift: f64) {
    for v in x.iter_mut() {
        *v -= shift;
    }
}
