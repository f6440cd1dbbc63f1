//! Lane-operation implementations and the concrete f32 kernel entry points.
//!
//! Three backends:
//! - [`PORTABLE`]: plain-array lane ops, auto-vectorized by the compiler.
//! - [`SSE`]: `__m128` intrinsics, 4 f32 lanes per register (needs `sse4.1`
//!   for the byte blend on the index registers).
//! - [`AVX2`]: `__m256` intrinsics, a single native 8-wide chain.
//!
//! Widths 8 and 16 on the 4-lane backends come from running 2 resp. 4
//! independent chains inside one loop body (see `generic.rs`); the AVX2
//! kernel is the one-chain 8-lane instantiation of the same algorithm.

use super::config::PORTABLE;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use super::config::{AVX2, SSE};
use super::generic::{argmin_unrolled, SimdOps};

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

// -------------------------------------- PORTABLE --------------------------------------

impl SimdOps<4> for PORTABLE {
    type VecF = [f32; 4];
    type VecI = [i32; 4];
    type Mask = [bool; 4];

    #[inline(always)]
    unsafe fn _load(data: *const f32) -> [f32; 4] {
        (data as *const [f32; 4]).read()
    }

    #[inline(always)]
    unsafe fn _index_ramp(start: i32) -> [i32; 4] {
        [start, start + 1, start + 2, start + 3]
    }

    #[inline(always)]
    unsafe fn _index_splat(value: i32) -> [i32; 4] {
        [value; 4]
    }

    #[inline(always)]
    unsafe fn _add_index(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
        std::array::from_fn(|l| a[l] + b[l])
    }

    #[inline(always)]
    unsafe fn _cmplt(a: [f32; 4], b: [f32; 4]) -> [bool; 4] {
        std::array::from_fn(|l| a[l] < b[l])
    }

    #[inline(always)]
    unsafe fn _blendv_index(a: [i32; 4], b: [i32; 4], mask: [bool; 4]) -> [i32; 4] {
        std::array::from_fn(|l| if mask[l] { b[l] } else { a[l] })
    }

    #[inline(always)]
    unsafe fn _min(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        // Matches the hardware min: second operand on ties (same value anyway).
        std::array::from_fn(|l| if a[l] < b[l] { a[l] } else { b[l] })
    }

    #[inline(always)]
    unsafe fn _values_to_arr(v: [f32; 4]) -> [f32; 4] {
        v
    }

    #[inline(always)]
    unsafe fn _indices_to_arr(v: [i32; 4]) -> [i32; 4] {
        v
    }
}

/// Portable 4-wide kernel (single chain).
///
/// # Safety
/// `data` must hold at least 4 elements; only the leading `len & !3` elements
/// are examined.
pub unsafe fn argmin_portable_w4(data: &[f32]) -> usize {
    argmin_unrolled::<PORTABLE, 4, 1>(data)
}

/// Portable 8-wide kernel (two interleaved 4-lane chains).
///
/// # Safety
/// `data` must hold at least 8 elements; only the leading `len & !7` elements
/// are examined.
pub unsafe fn argmin_portable_w8(data: &[f32]) -> usize {
    argmin_unrolled::<PORTABLE, 4, 2>(data)
}

/// Portable 16-wide kernel (four interleaved 4-lane chains).
///
/// # Safety
/// `data` must hold at least 16 elements; only the leading `len & !15`
/// elements are examined.
pub unsafe fn argmin_portable_w16(data: &[f32]) -> usize {
    argmin_unrolled::<PORTABLE, 4, 4>(data)
}

// ---------------------------------------- SSE -----------------------------------------

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl SimdOps<4> for SSE {
    type VecF = __m128;
    type VecI = __m128i;
    type Mask = __m128i;

    #[inline(always)]
    unsafe fn _load(data: *const f32) -> __m128 {
        _mm_load_ps(data)
    }

    #[inline(always)]
    unsafe fn _index_ramp(start: i32) -> __m128i {
        _mm_setr_epi32(start, start + 1, start + 2, start + 3)
    }

    #[inline(always)]
    unsafe fn _index_splat(value: i32) -> __m128i {
        _mm_set1_epi32(value)
    }

    #[inline(always)]
    unsafe fn _add_index(a: __m128i, b: __m128i) -> __m128i {
        _mm_add_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn _cmplt(a: __m128, b: __m128) -> __m128i {
        _mm_castps_si128(_mm_cmplt_ps(a, b))
    }

    #[inline(always)]
    unsafe fn _blendv_index(a: __m128i, b: __m128i, mask: __m128i) -> __m128i {
        _mm_blendv_epi8(a, b, mask)
    }

    #[inline(always)]
    unsafe fn _min(a: __m128, b: __m128) -> __m128 {
        _mm_min_ps(a, b)
    }

    #[inline(always)]
    unsafe fn _values_to_arr(v: __m128) -> [f32; 4] {
        std::mem::transmute::<__m128, [f32; 4]>(v)
    }

    #[inline(always)]
    unsafe fn _indices_to_arr(v: __m128i) -> [i32; 4] {
        std::mem::transmute::<__m128i, [i32; 4]>(v)
    }
}

/// SSE 4-wide kernel (single chain).
///
/// # Safety
/// Requires `sse4.1`. `data` must hold at least 4 elements and be 16-byte
/// aligned; only the leading `len & !3` elements are examined.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse4.1")]
pub unsafe fn argmin_sse_w4(data: &[f32]) -> usize {
    argmin_unrolled::<SSE, 4, 1>(data)
}

/// SSE 8-wide kernel (two interleaved 4-lane chains).
///
/// # Safety
/// Requires `sse4.1`. `data` must hold at least 8 elements and be 16-byte
/// aligned; only the leading `len & !7` elements are examined.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse4.1")]
pub unsafe fn argmin_sse_w8(data: &[f32]) -> usize {
    argmin_unrolled::<SSE, 4, 2>(data)
}

/// SSE 16-wide kernel (four interleaved 4-lane chains).
///
/// # Safety
/// Requires `sse4.1`. `data` must hold at least 16 elements and be 16-byte
/// aligned; only the leading `len & !15` elements are examined.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse4.1")]
pub unsafe fn argmin_sse_w16(data: &[f32]) -> usize {
    argmin_unrolled::<SSE, 4, 4>(data)
}

// ---------------------------------------- AVX2 ----------------------------------------

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl SimdOps<8> for AVX2 {
    type VecF = __m256;
    type VecI = __m256i;
    type Mask = __m256i;

    #[inline(always)]
    unsafe fn _load(data: *const f32) -> __m256 {
        _mm256_load_ps(data)
    }

    #[inline(always)]
    unsafe fn _index_ramp(start: i32) -> __m256i {
        _mm256_setr_epi32(
            start,
            start + 1,
            start + 2,
            start + 3,
            start + 4,
            start + 5,
            start + 6,
            start + 7,
        )
    }

    #[inline(always)]
    unsafe fn _index_splat(value: i32) -> __m256i {
        _mm256_set1_epi32(value)
    }

    #[inline(always)]
    unsafe fn _add_index(a: __m256i, b: __m256i) -> __m256i {
        _mm256_add_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn _cmplt(a: __m256, b: __m256) -> __m256i {
        _mm256_castps_si256(_mm256_cmp_ps(a, b, _CMP_LT_OS))
    }

    #[inline(always)]
    unsafe fn _blendv_index(a: __m256i, b: __m256i, mask: __m256i) -> __m256i {
        _mm256_blendv_epi8(a, b, mask)
    }

    #[inline(always)]
    unsafe fn _min(a: __m256, b: __m256) -> __m256 {
        _mm256_min_ps(a, b)
    }

    #[inline(always)]
    unsafe fn _values_to_arr(v: __m256) -> [f32; 8] {
        std::mem::transmute::<__m256, [f32; 8]>(v)
    }

    #[inline(always)]
    unsafe fn _indices_to_arr(v: __m256i) -> [i32; 8] {
        std::mem::transmute::<__m256i, [i32; 8]>(v)
    }
}

/// AVX2 native 8-wide kernel (one 8-lane chain).
///
/// # Safety
/// Requires `avx2`. `data` must hold at least 8 elements and be 32-byte
/// aligned; only the leading `len & !7` elements are examined.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
pub unsafe fn argmin_avx2_w8(data: &[f32]) -> usize {
    argmin_unrolled::<AVX2, 8, 1>(data)
}

// ======================================= TESTS =======================================
