//! Sample-and-select pivot strategies.
//!
//! Each strategy builds a sample from the full range, recursively selects a
//! specific order statistic within that sample (placing it at a known index,
//! partitioned around it), then calls [`expand_partition`] to extend the
//! partition to the full range. All three return the pivot's final position.

use crate::driver::adaptive_quickselect;
use crate::expand::expand_partition;
use crate::median_index::ninther;
use crate::ops::Ops;

/// Central-k strategy: samples the middle of the range via Tukey ninthers
/// computed over nine disjoint, strided windows spanning the entire range.
/// `length >= 12` is required.
pub(crate) fn median_of_ninthers<T, F>(ops: &mut Ops<T, F>, r: &mut [T], length: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(length >= 12);
    let frac = if length <= 1024 {
        length / 12
    } else if length <= 128 * 1024 {
        length / 64
    } else {
        length / 1024
    };
    let pivot = frac / 2;
    let lo = length / 2 - pivot;
    let hi = lo + frac;
    debug_assert!(length >= 9 * frac);
    let gap = (length - 9 * frac) / 4;

    let mut a = lo - 4 * frac - gap;
    let mut b = hi + gap;
    for i in lo..hi {
        ninther(ops, r, a, i - frac, b, a + 1, i, b + 1, a + 2, i + frac, b + 2);
        a += 3;
        b += 3;
    }

    adaptive_quickselect(ops, &mut r[lo..hi], pivot);
    expand_partition(ops, r, lo, lo + pivot, hi, length)
}

/// Small-k strategy: valid when `6*n <= length` (precondition `4*n <= length`,
/// `n > 0`). Computes, for each of `subset = 2*n` leading slots, the minimum
/// of a disjoint trailing block and swaps it in if it is smaller.
pub(crate) fn median_of_minima<T, F>(ops: &mut Ops<T, F>, r: &mut [T], n: usize, length: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(n > 0 && 4 * n <= length);
    let subset = 2 * n;
    let compute_min_over = (length - subset) / subset;
    for i in 0..subset {
        let window_start = subset + i * compute_min_over;
        let mut min_idx = window_start;
        for j in (window_start + 1)..(window_start + compute_min_over) {
            if ops.lt(&r[j], &r[min_idx]) {
                min_idx = j;
            }
        }
        if ops.lt(&r[min_idx], &r[i]) {
            ops.swap(r, i, min_idx);
        }
    }
    adaptive_quickselect(ops, &mut r[..subset], n);
    expand_partition(ops, r, 0, n, subset, length)
}

/// Large-k strategy: valid when `6*n >= 5*length`. Symmetric to
/// [`median_of_minima`], operating on the tail of the range.
pub(crate) fn median_of_maxima<T, F>(ops: &mut Ops<T, F>, r: &mut [T], n: usize, length: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(n < length && 4 * (length - n) <= length);
    let subset = 2 * (length - n);
    let subset_start = length - subset;
    let compute_max_over = subset_start / subset;
    for i in subset_start..length {
        let window_start = (i - subset_start) * compute_max_over;
        let window_end = window_start + compute_max_over;
        let mut max_idx = window_start;
        for j in (window_start + 1)..window_end {
            if ops.gt(&r[j], &r[max_idx]) {
                max_idx = j;
            }
        }
        if ops.gt(&r[max_idx], &r[i]) {
            ops.swap(r, i, max_idx);
        }
    }
    adaptive_quickselect(ops, &mut r[subset_start..length], n - subset_start);
    expand_partition(ops, r, subset_start, n, length, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Stats;

    fn check_partition(data: &[i32], p: usize) {
        for i in 0..p {
            assert!(data[i] <= data[p]);
        }
        for j in (p + 1)..data.len() {
            assert!(data[j] >= data[p]);
        }
    }

    #[test]
    fn median_of_ninthers_partitions_large_range() {
        let n = 200usize;
        let mut data: Vec<i32> = (0..n as i32).rev().collect(); // reverse-sorted
        let mut is_less = |a: &i32, b: &i32| a < b;
        let mut stats = Stats::default();
        let mut ops = Ops::new(&mut is_less, Some(&mut stats));
        let len = data.len();
        let p = median_of_ninthers(&mut ops, &mut data, len);
        check_partition(&data, p);
    }

    #[test]
    fn median_of_minima_partitions_small_k() {
        let n = 300usize;
        let mut data: Vec<i32> = (0..n as i32).collect();
        // shuffle deterministically
        data.reverse();
        let mut is_less = |a: &i32, b: &i32| a < b;
        let mut stats = Stats::default();
        let mut ops = Ops::new(&mut is_less, Some(&mut stats));
        let len = data.len();
        let k = 10; // 6*10 = 60 <= 300
        let p = median_of_minima(&mut ops, &mut data, k, len);
        check_partition(&data, p);
    }

    #[test]
    fn median_of_maxima_partitions_large_k() {
        let n = 300usize;
        let mut data: Vec<i32> = (0..n as i32).collect();
        data.reverse();
        let mut is_less = |a: &i32, b: &i32| a < b;
        let mut stats = Stats::default();
        let mut ops = Ops::new(&mut is_less, Some(&mut stats));
        let len = data.len();
        let k = n - 1 - 10; // near the top
        let p = median_of_maxima(&mut ops, &mut data, k, len);
        check_partition(&data, p);
    }
}
