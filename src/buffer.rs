//! Aligned, owned `f32` buffer for the SIMD kernels.
//!
//! The vectorized kernels use aligned loads, so the input buffer has to sit on
//! an instruction-set dependent boundary. Rather than handing raw pointers
//! around with an unchecked alignment hint, the alignment invariant lives in
//! this type: every [`AlignedVec`] is allocated on a [`BUFFER_ALIGNMENT`]-byte
//! boundary, which satisfies every kernel in this crate.

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// Allocation boundary (in bytes) of an [`AlignedVec`].
///
/// 64 bytes covers the widest kernel (16 floats) and matches a cache line.
pub const BUFFER_ALIGNMENT: usize = 64;

/// A heap-allocated `f32` buffer aligned to [`BUFFER_ALIGNMENT`] bytes.
///
/// Dereferences to `[f32]`. Zero-length buffers are rejected: the kernels
/// define no result for an empty input.
pub struct AlignedVec {
    ptr: NonNull<f32>,
    len: usize,
}

impl AlignedVec {
    /// Allocate a buffer of `len` elements, all set to `value`.
    ///
    /// # Panics
    /// Panics if `len` is zero or the allocation fails.
    pub fn filled(len: usize, value: f32) -> Self {
        let buf = Self::alloc_uninit(len);
        // Write through the raw pointer: no reference may be formed over the
        // buffer until every element is initialized.
        for i in 0..len {
            unsafe { buf.ptr.as_ptr().add(i).write(value) };
        }
        buf
    }

    /// Allocate a buffer holding a copy of `values`.
    ///
    /// # Panics
    /// Panics if `values` is empty or the allocation fails.
    pub fn from_slice(values: &[f32]) -> Self {
        let buf = Self::alloc_uninit(values.len());
        // Safety: source and destination are distinct allocations of len
        // elements; the destination holds no references yet.
        unsafe {
            std::ptr::copy_nonoverlapping(values.as_ptr(), buf.ptr.as_ptr(), values.len());
        }
        buf
    }

    // Callers must initialize all `len` elements through `ptr` before any
    // slice over the buffer is formed.
    fn alloc_uninit(len: usize) -> Self {
        assert!(len > 0, "AlignedVec requires a non-zero length");
        let layout = Self::layout(len);
        // Safety: layout has non-zero size.
        let ptr = unsafe { alloc(layout) } as *mut f32;
        let Some(ptr) = NonNull::new(ptr) else {
            handle_alloc_error(layout);
        };
        AlignedVec { ptr, len }
    }

    fn layout(len: usize) -> Layout {
        Layout::from_size_align(len * std::mem::size_of::<f32>(), BUFFER_ALIGNMENT)
            .expect("invalid layout")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.ptr.as_ptr()
    }

    pub fn as_slice(&self) -> &[f32] {
        // Safety: ptr is valid for len initialized elements.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        // Safety: ptr is valid for len elements and we hold &mut self.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for AlignedVec {
    fn drop(&mut self) {
        // Safety: allocated in alloc_uninit with the same layout.
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, Self::layout(self.len)) }
    }
}

impl Deref for AlignedVec {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl DerefMut for AlignedVec {
    fn deref_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

impl Clone for AlignedVec {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl std::fmt::Debug for AlignedVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl FromIterator<f32> for AlignedVec {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let values: Vec<f32> = iter.into_iter().collect();
        Self::from_slice(&values)
    }
}

// The buffer is plain owned memory.
unsafe impl Send for AlignedVec {}
unsafe impl Sync for AlignedVec {}
