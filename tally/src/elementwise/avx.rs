//! AVX SIMD implementations of element-wise operations (x86_64).

use std::arch::x86_64::*;

/// `dst[i] *= src[i]` using AVX, four lanes at a time.
///
/// # Safety
/// Caller must ensure AVX is available.
#[target_feature(enable = "avx")]
pub unsafe fn mul_assign(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    unsafe {
        let mut dst_chunks = dst.chunks_exact_mut(4);
        let mut src_chunks = src.chunks_exact(4);

        for (dst_chunk, src_chunk) in dst_chunks.by_ref().zip(src_chunks.by_ref()) {
            let d = _mm256_loadu_pd(dst_chunk.as_ptr());
            let s = _mm256_loadu_pd(src_chunk.as_ptr());
            _mm256_storeu_pd(dst_chunk.as_mut_ptr(), _mm256_mul_pd(d, s));
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

/// `data[i] *= data[i]` using AVX.
///
/// # Safety
/// Caller must ensure AVX is available.
#[target_feature(enable = "avx")]
pub unsafe fn square_assign(data: &mut [f64]) {
    unsafe {
        let mut chunks = data.chunks_exact_mut(4);

        for chunk in chunks.by_ref() {
            let v = _mm256_loadu_pd(chunk.as_ptr());
            _mm256_storeu_pd(chunk.as_mut_ptr(), _mm256_mul_pd(v, v));
        }

        for v in chunks.into_remainder() {
            *v *= *v;
        }
    }
}
