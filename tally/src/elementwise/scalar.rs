//! Scalar (non-SIMD) implementations of element-wise operations.

/// `dst[i] *= src[i]` using scalar operations.
#[inline]
pub fn mul_assign(dst: &mut [f64], src: &[f64]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d *= s;
    }
}

/// `data[i] *= data[i]` using scalar operations.
#[inline]
pub fn square_assign(data: &mut [f64]) {
    for v in data.iter_mut() {
        *v *= *v;
    }
}
