//! Shared checks for the vectorized kernels.
//!
//! Every kernel, whatever its backend and width, has to reproduce the scalar
//! reference over its truncated range. The helpers here take the kernel as a
//! function pointer so each backend's test module can run the same battery.

use crate::buffer::AlignedVec;
use crate::scalar;

use dev_utils::utils;

pub(crate) type Kernel = unsafe fn(&[f32]) -> usize;

const NB_RUNS: usize = 50;

/// The kernel's result must match the scalar reference computed over the
/// examined range `len & !(width - 1)`. Random data may contain exact-value
/// ties, and the merge order may pick a different (equally minimal) index, so
/// only value equality is asserted.
pub(crate) fn test_matches_scalar_on_random_data(kernel: Kernel, width: usize) {
    let lengths = [width, width + 1, 2 * width - 1, 129, 1027, 8193];
    for &n in lengths.iter().filter(|&&n| n >= width) {
        for _ in 0..NB_RUNS {
            let data = AlignedVec::from_slice(&utils::get_random_array(n, -1000.0f32, 1000.0));
            let examined = n & !(width - 1);
            let expected = scalar::argmin(&data[..examined]);
            let got = unsafe { kernel(&data) };
            assert!(got < examined, "index {got} outside examined range {examined}");
            assert_eq!(
                data[got], data[expected],
                "kernel disagrees with scalar reference (n = {n})"
            );
        }
    }
}

/// Elements beyond the truncation boundary must never influence the result:
/// with the global minimum in the tail and the runner-up at index 0, the
/// kernel has to return 0.
pub(crate) fn test_tail_is_never_examined(kernel: Kernel, width: usize) {
    let n = width + 2;
    let mut data = AlignedVec::filled(n, 0.0);
    for i in 0..n {
        data[i] = 100.0 + i as f32;
    }
    data[0] = 1.0; // smallest value inside the examined range
    data[n - 1] = -50.0; // global minimum, hidden in the truncated tail
    let got = unsafe { kernel(&data) };
    assert_eq!(got, 0);
}

/// With `len == width` the loop body never runs: the result comes from the
/// initial load alone and no element past the buffer may be touched.
pub(crate) fn test_exact_width_boundary(kernel: Kernel, width: usize) {
    for pos in 0..width {
        let mut values: Vec<f32> = (0..width).map(|i| 10.0 + i as f32).collect();
        values[pos] = -1.0;
        let data = AlignedVec::from_slice(&values);
        assert_eq!(unsafe { kernel(&data) }, pos);
    }
}

/// Sweep a unique minimum over every position. Inside the examined range the
/// exact index must come back (all values distinct); in the tail the minimum
/// is invisible and the smallest examined element (index 0 here) wins.
pub(crate) fn test_min_at_every_position(kernel: Kernel, width: usize) {
    let n = 4 * width + 3;
    let examined = n & !(width - 1);
    for pos in 0..n {
        let mut values: Vec<f32> = (0..n).map(|i| 10.0 + i as f32).collect();
        values[pos] = -1.0;
        let data = AlignedVec::from_slice(&values);
        let got = unsafe { kernel(&data) };
        if pos < examined {
            assert_eq!(got, pos, "minimum at {pos} not found (n = {n})");
        } else {
            assert_eq!(got, 0, "tail element {pos} leaked into the result");
        }
    }
}

/// Two invocations on the same unmodified buffer must return the same index.
pub(crate) fn test_idempotent(kernel: Kernel, width: usize) {
    let n = 8 * width + 1;
    let data = AlignedVec::from_slice(&utils::get_random_array(n, -1000.0f32, 1000.0));
    let first = unsafe { kernel(&data) };
    let second = unsafe { kernel(&data) };
    assert_eq!(first, second);
}
