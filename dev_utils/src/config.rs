/// Array lengths used by the benchmarks.
///
/// The short length matches the distance-array size of the workload the
/// kernels were originally tuned for; the long length stresses memory
/// bandwidth instead of loop overhead.
pub const ARRAY_LENGTH_SHORT: usize = 2832;
pub const ARRAY_LENGTH_LONG: usize = 100_000;

/// Uniform sampling range for benchmark data.
pub const VALUE_RANGE_LOW: f32 = 1.0;
pub const VALUE_RANGE_HIGH: f32 = 10.0;
