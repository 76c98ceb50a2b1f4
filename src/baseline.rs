//! BFPRT (median-of-medians) selection, kept only as a differential-testing
//! oracle: an independent worst-case-linear algorithm to check the adaptive
//! driver's output against on property tests.

fn insertion_sort_median<T: Ord + Clone>(group: &mut [T]) -> T {
    for i in 1..group.len() {
        let key = group[i].clone();
        let mut j = i;
        while j > 0 && group[j - 1] > key {
            group[j] = group[j - 1].clone();
            j -= 1;
        }
        group[j] = key;
    }
    group[group.len() / 2].clone()
}

fn partition_around<T: Ord>(arr: &mut [T], pivot_idx: usize) -> usize {
    let last = arr.len() - 1;
    arr.swap(pivot_idx, last);
    let mut store = 0;
    for i in 0..last {
        if arr[i] <= arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}

fn median_of_medians_index<T: Ord + Clone>(arr: &mut [T]) -> usize {
    let n = arr.len();
    if n <= 5 {
        let mut group = arr.to_vec();
        let median_val = insertion_sort_median(&mut group);
        return arr.iter().position(|x| *x == median_val).unwrap();
    }
    let num_groups = n.div_ceil(5);
    let mut medians = Vec::with_capacity(num_groups);
    for i in 0..num_groups {
        let start = i * 5;
        let end = (start + 5).min(n);
        let mut group = arr[start..end].to_vec();
        medians.push(insertion_sort_median(&mut group));
    }
    let medians_len = medians.len();
    let median_pos = medians_len / 2;
    let median_val = bfprt_select(&mut medians, median_pos).clone();
    arr.iter().position(|x| *x == median_val).unwrap()
}

fn bfprt_select<T: Ord + Clone>(arr: &mut [T], k: usize) -> &T {
    debug_assert!(k < arr.len());
    if arr.len() == 1 {
        return &arr[0];
    }
    let pivot_idx = median_of_medians_index(arr);
    let q = partition_around(arr, pivot_idx);
    if k == q {
        &arr[q]
    } else if k < q {
        bfprt_select(&mut arr[..q], k)
    } else {
        bfprt_select(&mut arr[q + 1..], k - q - 1)
    }
}

/// Returns the `k`-th smallest element of `data` (0-indexed), computed by
/// worst-case-linear median-of-medians. Consumes a clone so callers keep
/// their original ordering.
pub(crate) fn select_oracle<T: Ord + Clone>(data: &[T], k: usize) -> T {
    let mut buf = data.to_vec();
    bfprt_select(&mut buf, k).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_sort_on_every_index() {
        let data = vec![9, 4, 4, 1, 7, 7, 2, 3, 10, 0, 6, 8, 5, 2, 1];
        let mut sorted = data.clone();
        sorted.sort();
        for k in 0..data.len() {
            assert_eq!(select_oracle(&data, k), sorted[k], "k = {}", k);
        }
    }

    #[test]
    fn handles_single_element() {
        assert_eq!(select_oracle(&[42], 0), 42);
    }

    #[test]
    fn handles_all_equal() {
        let data = vec![7; 20];
        assert_eq!(select_oracle(&data, 10), 7);
    }

    /// Differential test: the adaptive driver's public `select` must agree
    /// with this independent BFPRT oracle on every index, for every input.
    #[test]
    fn agrees_with_adaptive_select_on_every_index() {
        let inputs: [&[i32]; 4] = [
            &[9, 4, 4, 1, 7, 7, 2, 3, 10, 0, 6, 8, 5, 2, 1],
            &[5, 5, 5, 5, 1, 5, 5, 5, 5],
            &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3],
        ];
        for original in inputs {
            for k in 0..original.len() {
                let expected = select_oracle(original, k);
                let mut data = original.to_vec();
                crate::select(&mut data, k);
                assert_eq!(data[k], expected, "k = {k}, input = {original:?}");
            }
        }
    }
}
