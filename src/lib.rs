//! Deterministic, comparison-based order-statistic selection.
//!
//! Given a mutable slice and an index `k`, [`select`] rearranges the slice in
//! place so that `data[k]` holds the element that would occupy position `k`
//! after a full sort, every element before it is `<=` it, and every element
//! after it is `>=` it. Worst-case time is linear in the slice length;
//! auxiliary space is O(1). The relative order within each side of `k` is
//! unspecified — this is selection, not a stable partial sort.
//!
//! The algorithm adaptively picks a sampling strategy based on where `k`
//! falls in the slice (median-of-ninthers near the centre, median-of-minima
//! or median-of-maxima near either end), recursively finds the sample's
//! median to seed a high-quality pivot, then extends the resulting partition
//! to the whole slice without redoing work already done on the sample. See
//! the individual modules for the component algorithms.

#[cfg(test)]
mod baseline;
mod driver;
mod expand;
mod hoare;
mod kernels;
mod median_index;
mod ops;
mod strategies;

use driver::adaptive_quickselect;
pub use ops::Stats;

/// Selects the `k`-th smallest element of `data` by `Ord`, in place.
///
/// # Panics
///
/// Panics if `k >= data.len()` and `data` has more than one element.
///
/// # Examples
///
/// ```
/// let mut data = vec![5, 3, 8, 1, 9, 2, 7];
/// adaptive_select::select(&mut data, 0);
/// assert_eq!(data[0], 1);
/// ```
pub fn select<T: Ord>(data: &mut [T], k: usize) {
    select_by(data, k, |a, b| a < b)
}

/// Selects the `k`-th smallest element of `data` under a caller-supplied
/// `is_less` predicate, in place. `is_less` must be a strict weak ordering;
/// elements that compare neither less than each other may land on either
/// side of `k`.
///
/// # Panics
///
/// Panics if `k >= data.len()` and `data` has more than one element.
pub fn select_by<T, F>(data: &mut [T], k: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let length = data.len();
    if length <= 1 {
        return;
    }
    assert!(
        k < length,
        "select: k ({k}) out of bounds for length {length}"
    );
    let mut ops = ops::Ops::new(&mut is_less, None);
    adaptive_quickselect(&mut ops, data, k);
}

/// Like [`select_by`], but also returns a [`Stats`] tally of comparisons and
/// swaps performed. Purely observational: the counted operations are
/// identical to an uninstrumented call with the same inputs.
///
/// # Panics
///
/// Panics if `k >= data.len()` and `data` has more than one element.
pub fn select_with_stats<T, F>(data: &mut [T], k: usize, mut is_less: F) -> Stats
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stats = Stats::default();
    let length = data.len();
    if length <= 1 {
        return stats;
    }
    assert!(
        k < length,
        "select: k ({k}) out of bounds for length {length}"
    );
    let mut ops = ops::Ops::new(&mut is_less, Some(&mut stats));
    adaptive_quickselect(&mut ops, data, k);
    stats
}
