use num_traits::float::FloatCore;

/// Index of the minimum value in `arr`, scanning the full slice.
///
/// Updates only on strict `<`, so when several elements share the minimum the
/// *first* occurrence wins. This is the correctness baseline the vectorized
/// kernels are checked against (over their truncated range).
///
/// NaN values are out of contract: a comparison against NaN is always false,
/// so NaN elements are simply never selected.
///
/// # Panics
/// Panics if `arr` is empty.
#[inline(always)]
pub fn argmin<T: FloatCore>(arr: &[T]) -> usize {
    assert!(!arr.is_empty());
    // It is remarkably faster to iterate over the index and use get_unchecked
    // than using .iter().enumerate() (with a fold).
    let mut min_value: T = unsafe { *arr.get_unchecked(0) };
    let mut min_index: usize = 0;
    for i in 1..arr.len() {
        let v: T = unsafe { *arr.get_unchecked(i) };
        if v < min_value {
            min_value = v;
            min_index = i;
        }
    }
    min_index
}

/// Iterator-based variant of [`argmin`], kept as a benchmark baseline.
///
/// Same contract as [`argmin`]: strict `<`, first occurrence wins, panics on
/// an empty slice, NaN out of contract.
#[inline(always)]
pub fn argmin_iter<T: FloatCore>(arr: &[T]) -> usize {
    assert!(!arr.is_empty());
    arr.iter()
        .enumerate()
        .fold((0, arr[0]), |(min_index, min_value), (i, &v)| {
            if v < min_value {
                (i, v)
            } else {
                (min_index, min_value)
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::{argmin, argmin_iter};

    #[test]
    fn test_basic() {
        let data: Vec<f32> = vec![5.0, 2.0, 8.0, 1.0, 9.0];
        assert_eq!(argmin(&data), 3);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let data: Vec<f32> = vec![3.0, 1.0, 1.0, 5.0];
        assert_eq!(argmin(&data), 1);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(argmin(&[42.0f32]), 0);
    }

    #[test]
    fn test_min_at_ends() {
        let mut data: Vec<f32> = (0..100).map(|x| x as f32 + 1.0).collect();
        data[0] = 0.5;
        assert_eq!(argmin(&data), 0);
        data[99] = 0.1;
        assert_eq!(argmin(&data), 99);
    }

    #[test]
    fn test_f64() {
        let data: Vec<f64> = vec![0.0, -1.0, 3.0, -1.0];
        assert_eq!(argmin(&data), 1);
    }

    #[test]
    #[should_panic]
    fn test_empty_panics() {
        let data: Vec<f32> = vec![];
        argmin(&data);
    }

    #[test]
    fn test_iter_variant_agrees() {
        let data: Vec<f32> = vec![5.0, 2.0, 8.0, 1.0, 9.0];
        assert_eq!(argmin_iter(&data), argmin(&data));
        // Ties: both keep the first occurrence.
        let data: Vec<f32> = vec![3.0, 1.0, 1.0, 5.0];
        assert_eq!(argmin_iter(&data), 1);
    }
}
