//! Instruction-set descriptors for the vectorized kernels.
//!
//! Each struct stands for one way of expressing the 4-lane (or 8-lane) vector
//! operations; the trait carries the register geometry and the load-alignment
//! boundary the kernels debug-assert against.

/// SIMD instruction set trait - stores the register size and derives the lane
/// count and required alignment for f32 data.
pub trait SimdInstructionSet {
    /// The size of the register in bits
    const REGISTER_SIZE: usize;

    /// Number of f32 lanes in one register
    const LANE_SIZE_F32: usize = Self::REGISTER_SIZE / 32;

    /// Required load alignment in bytes
    const ALIGNMENT: usize = Self::REGISTER_SIZE / 8;
}

/// Portable lane operations on plain Rust arrays; the compiler is free to
/// auto-vectorize them. This is the fallback when no x86 feature is detected
/// and the only backend on non-x86 targets.
pub struct PORTABLE;

impl SimdInstructionSet for PORTABLE {
    /// Modeled as one 128-bit register (4 f32 lanes), like the hand-written
    /// backends, but loads only need element alignment.
    const REGISTER_SIZE: usize = 128;
    const ALIGNMENT: usize = std::mem::align_of::<f32>();
}

/// SSE instruction set (requires sse4.1 for the index blend).
pub struct SSE;

impl SimdInstructionSet for SSE {
    /// SSE register size is 128 bits
    const REGISTER_SIZE: usize = 128;
}

/// AVX2 instruction set - the native 8-wide kernel.
pub struct AVX2;

impl SimdInstructionSet for AVX2 {
    /// AVX(2) register size is 256 bits
    const REGISTER_SIZE: usize = 256;
}
