use super::config::SimdInstructionSet;

/// Largest length the kernels can index: lane indices are tracked as `i32`.
pub const MAX_INDEX: usize = i32::MAX as usize;

// ---------------------------------- lane operations ----------------------------------

/// Core lane operations of the vectorized minimum-index search.
///
/// One implementation per instruction set (see `simd_f32.rs`), over a value
/// vector of `LANE_SIZE` f32 lanes and an index vector of `LANE_SIZE` i32
/// lanes. All operations are pure and element-wise; there is no cross-lane
/// communication until the final [`horizontal_min`] spill.
///
/// The load is an *aligned* load: callers must hand in pointers on the
/// instruction set's boundary (see [`SimdInstructionSet::ALIGNMENT`]).
pub trait SimdOps<const LANE_SIZE: usize> {
    /// Value register: LANE_SIZE f32 lanes
    type VecF: Copy;
    /// Index register: LANE_SIZE i32 lanes
    type VecI: Copy;
    /// Per-lane comparison result
    type Mask: Copy;

    /// Aligned load of LANE_SIZE contiguous f32 values
    unsafe fn _load(data: *const f32) -> Self::VecF;

    /// Index vector `[start, start + 1, ..., start + LANE_SIZE - 1]`
    unsafe fn _index_ramp(start: i32) -> Self::VecI;

    /// Index vector with every lane set to `value`
    unsafe fn _index_splat(value: i32) -> Self::VecI;

    /// Per-lane i32 addition
    unsafe fn _add_index(a: Self::VecI, b: Self::VecI) -> Self::VecI;

    /// Per-lane strict less-than: a < b
    unsafe fn _cmplt(a: Self::VecF, b: Self::VecF) -> Self::Mask;

    /// Per-lane select on the index vectors: `b` where the mask is set, else `a`
    unsafe fn _blendv_index(a: Self::VecI, b: Self::VecI, mask: Self::Mask) -> Self::VecI;

    /// Per-lane minimum
    unsafe fn _min(a: Self::VecF, b: Self::VecF) -> Self::VecF;

    /// Spill a value register to an array
    unsafe fn _values_to_arr(v: Self::VecF) -> [f32; LANE_SIZE];

    /// Spill an index register to an array
    unsafe fn _indices_to_arr(v: Self::VecI) -> [i32; LANE_SIZE];
}

// ----------------------------------- core kernel --------------------------------------

/// Width-generic minimum-index kernel.
///
/// Runs `CHAINS` independent reduction chains of `LANE_SIZE` lanes each in one
/// loop body, so the effective width is `W = LANE_SIZE * CHAINS` and chain `k`
/// covers the indices congruent to `k * LANE_SIZE .. (k + 1) * LANE_SIZE`
/// modulo `W`. The independent chains expose instruction-level parallelism:
/// each carries its own running (min value, min index) registers and only the
/// final [`horizontal_min`] merges them.
///
/// Only the leading `len & !(W - 1)` elements are examined; the trailing
/// `len % W` elements are deliberately never read (see the crate docs).
///
/// Per-lane updates use strict less-than, so within a lane the first
/// occurrence of a value wins. Which index is returned among *cross-lane*
/// exact-value ties depends on the merge order of [`horizontal_min`]; only the
/// returned value is guaranteed to equal the scalar reference's.
///
/// # Safety
/// `data` must hold at least `W` elements, be aligned to `T::ALIGNMENT` bytes
/// and be no longer than [`MAX_INDEX`]. Violations are undefined behavior in
/// release builds; debug builds assert.
#[inline(always)]
pub unsafe fn argmin_unrolled<T, const LANE_SIZE: usize, const CHAINS: usize>(
    data: &[f32],
) -> usize
where
    T: SimdOps<LANE_SIZE> + SimdInstructionSet,
{
    let width = LANE_SIZE * CHAINS;
    debug_assert!(width.is_power_of_two());
    debug_assert!(data.len() >= width);
    debug_assert!(data.len() <= MAX_INDEX);
    debug_assert_eq!(data.as_ptr() as usize % T::ALIGNMENT, 0);

    // Same truncation as the reference kernels: n &= -(W as i32).
    let n = data.len() & !(width - 1);
    let ptr = data.as_ptr();

    let step = T::_index_splat(width as i32);
    // The index registers always hold the positions of the just-loaded values.
    let mut cur_index: [T::VecI; CHAINS] =
        std::array::from_fn(|k| unsafe { T::_index_ramp((k * LANE_SIZE) as i32) });
    let mut min_index = cur_index;
    let mut min_values: [T::VecF; CHAINS] =
        std::array::from_fn(|k| unsafe { T::_load(ptr.add(k * LANE_SIZE)) });

    let mut i = width;
    while i < n {
        for k in 0..CHAINS {
            let values = T::_load(ptr.add(i + k * LANE_SIZE));
            cur_index[k] = T::_add_index(cur_index[k], step);
            let lt = T::_cmplt(values, min_values[k]);
            min_index[k] = T::_blendv_index(min_index[k], cur_index[k], lt);
            min_values[k] = T::_min(values, min_values[k]);
        }
        i += width;
    }

    horizontal_min::<T, LANE_SIZE, CHAINS>(min_index, min_values)
}

// -------------------------------- horizontal reduction --------------------------------

/// Collapse the per-chain (min value, min index) registers to one scalar result.
///
/// Chains are merged pairwise in a fixed order: adjacent pairs first, then
/// stride-doubled (for 4 chains: 0 with 1, 2 with 3, 0 with 2). The merge
/// compares with strict less-than and keeps the right-hand chain on an exact
/// tie. The surviving register pair is then scanned lane by lane, left to
/// right, again with strict less-than, so the leftmost lane wins ties there.
#[inline(always)]
pub unsafe fn horizontal_min<T, const LANE_SIZE: usize, const CHAINS: usize>(
    mut min_index: [T::VecI; CHAINS],
    mut min_values: [T::VecF; CHAINS],
) -> usize
where
    T: SimdOps<LANE_SIZE>,
{
    let mut gap = 1;
    while gap < CHAINS {
        let mut k = 0;
        while k + gap < CHAINS {
            let lt = T::_cmplt(min_values[k], min_values[k + gap]);
            min_index[k] = T::_blendv_index(min_index[k + gap], min_index[k], lt);
            min_values[k] = T::_min(min_values[k], min_values[k + gap]);
            k += 2 * gap;
        }
        gap *= 2;
    }

    // Final calculation the scalar way.
    let values = T::_values_to_arr(min_values[0]);
    let indices = T::_indices_to_arr(min_index[0]);
    let mut min_value = values[0];
    let mut best = indices[0];
    for lane in 1..LANE_SIZE {
        let value = values[lane];
        if value < min_value {
            min_value = value;
            best = indices[lane];
        }
    }
    best as usize
}
