//! A crate for finding the index of the minimum value in an aligned `f32` buffer.
//!
//! The search is optimized for throughput using [SIMD](https://en.wikipedia.org/wiki/Single_instruction,_multiple_data)
//! kernels (when available). The kernels are branchless in their inner loop,
//! so there is no best case / worst case, and runtime CPU feature detection
//! picks the fastest implementation for the current machine (with a portable
//! fallback).
//!
//! # Description
//!
//! The crate provides one trait, [`ArgMin`], implemented for [`AlignedVec`] -
//! an owned `f32` buffer allocated on a 64-byte boundary, which is what the
//! aligned-load kernels require. The lower-level kernels (scalar reference,
//! portable/SSE kernels of width 4, 8 and 16, and the native AVX2 8-wide
//! kernel) are exported from the [`scalar`] and [`simd`] modules for
//! benchmarking and comparison.
//!
//! # Caution: tail truncation
//!
//! A vectorized kernel of width `W` examines only the leading
//! `len & !(W - 1)` elements; the trailing `len % W` elements are *never
//! read*. This mirrors the reference kernels this crate reproduces and is
//! carried through to [`ArgMin::argmin`], which dispatches to an 8-wide
//! kernel. Size your buffers to a multiple of 8 (or accept that up to 7
//! trailing elements do not participate). Buffers shorter than 8 elements
//! fall back to the scalar kernel over the full range.
//!
//! NaN values are out of contract for every kernel: comparisons against NaN
//! are always false, so NaN elements are never selected, but no further
//! guarantee is made.
//!
//! # Example
//!
//! ```
//! use minindex::{AlignedVec, ArgMin};
//!
//! let data: AlignedVec = vec![3.0f32, 1.0, 2.0, 5.0, 4.0, 8.0, 7.0, 6.0]
//!     .into_iter()
//!     .collect();
//! assert_eq!(data.argmin(), 1);
//! ```

// It is necessary to import this at the root of the crate
// See: https://github.com/la10736/rstest/tree/master/rstest_reuse#use-rstest_resuse-at-the-top-of-your-crate
#[cfg(test)]
use rstest_reuse;

pub mod buffer;
pub mod scalar;
pub mod simd;

pub use buffer::{AlignedVec, BUFFER_ALIGNMENT};

/// Trait for finding the index of the minimum value in a buffer.
///
/// For buffers of at least 8 elements the search runs over the leading
/// `len & !7` elements only (see the [crate docs](index.html#caution-tail-truncation));
/// shorter buffers are scanned in full by the scalar kernel.
pub trait ArgMin {
    /// Get the index of the minimum value in the examined range.
    ///
    /// Updates happen on strict less-than only, but which index is returned
    /// among exact-value ties depends on the selected kernel's merge order;
    /// the value at the returned index is always minimal.
    fn argmin(&self) -> usize;
}

impl ArgMin for AlignedVec {
    fn argmin(&self) -> usize {
        let data = self.as_slice();
        if data.len() >= 8 {
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            {
                if is_x86_feature_detected!("avx2") {
                    return unsafe { simd::argmin_avx2_w8(data) };
                }
                if is_x86_feature_detected!("sse4.1") {
                    return unsafe { simd::argmin_sse_w8(data) };
                }
            }
            return unsafe { simd::argmin_portable_w8(data) };
        }
        scalar::argmin(data)
    }
}
