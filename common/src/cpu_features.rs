//! CPU feature detection for runtime SIMD dispatch.
//!
//! Features are detected once and cached. Use these functions instead of the
//! `is_x86_feature_detected!` macro directly to avoid repeated CPUID calls.

use std::sync::OnceLock;

/// CPU feature flags detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X86Features {
    pub sse2: bool,
    pub avx: bool,
    pub avx2: bool,
}

static FEATURES: OnceLock<X86Features> = OnceLock::new();

/// Get cached CPU features (detected once on first call).
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn get() -> X86Features {
    *FEATURES.get_or_init(|| {
        let features = X86Features {
            sse2: is_x86_feature_detected!("sse2"),
            avx: is_x86_feature_detected!("avx"),
            avx2: is_x86_feature_detected!("avx2"),
        };
        tracing::debug!(?features, "Detected x86 CPU features");
        features
    })
}

/// Get cached CPU features - stub for non-x86 platforms.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
pub fn get() -> X86Features {
    *FEATURES.get_or_init(|| X86Features {
        sse2: false,
        avx: false,
        avx2: false,
    })
}

/// Check if SSE2 is available.
#[inline]
pub fn has_sse2() -> bool {
    get().sse2
}

/// Check if AVX is available.
#[inline]
pub fn has_avx() -> bool {
    get().avx
}

/// Check if AVX2 is available.
#[inline]
pub fn has_avx2() -> bool {
    get().avx2
}
