//! NEON SIMD implementations of element-wise operations (aarch64).

use std::arch::aarch64::*;

/// `dst[i] *= src[i]` using NEON, two lanes at a time.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn mul_assign(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    unsafe {
        let mut dst_chunks = dst.chunks_exact_mut(2);
        let mut src_chunks = src.chunks_exact(2);

        for (dst_chunk, src_chunk) in dst_chunks.by_ref().zip(src_chunks.by_ref()) {
            let d = vld1q_f64(dst_chunk.as_ptr());
            let s = vld1q_f64(src_chunk.as_ptr());
            vst1q_f64(dst_chunk.as_mut_ptr(), vmulq_f64(d, s));
        }

        for (d, &s) in dst_chunks
            .into_remainder()
            .iter_mut()
            .zip(src_chunks.remainder())
        {
            *d *= s;
        }
    }
}

/// `data[i] *= data[i]` using NEON.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn square_assign(data: &mut [f64]) {
    unsafe {
        let mut chunks = data.chunks_exact_mut(2);

        for chunk in chunks.by_ref() {
            let v = vld1q_f64(chunk.as_ptr());
            vst1q_f64(chunk.as_mut_ptr(), vmulq_f64(v, v));
        }

        for v in chunks.into_remainder() {
            *v *= *v;
        }
    }
}
