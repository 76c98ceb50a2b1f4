//! Expanded partition: extend an already-partitioned central window outward
//! to the full range without redoing the central work.

use crate::ops::Ops;

/// Input assumptions: `hi <= rite`, and `r[0 ..= hi]` already contains
/// elements no smaller than `r[0]`.
///
/// Output guarantee: same as Hoare partition using `r[0]` as pivot. Returns
/// the new position of the pivot.
pub(crate) fn expand_partition_right<T, F>(ops: &mut Ops<T, F>, r: &mut [T], hi: usize, rite: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pivot = 0usize;
    debug_assert!(pivot <= hi && hi <= rite);
    let mut rite = rite;
    // First loop: spend r[pivot .. hi]
    loop {
        if pivot >= hi {
            break;
        }
        if rite == hi {
            ops.swap(r, 0, pivot);
            return pivot;
        }
        if ops.ge(&r[rite], &r[0]) {
            rite -= 1;
            continue;
        }
        pivot += 1;
        debug_assert!(ops.ge_raw(&r[pivot], &r[0]));
        ops.swap(r, rite, pivot);
        rite -= 1;
    }
    // Second loop: make left and pivot meet
    while rite > pivot {
        if ops.ge(&r[rite], &r[0]) {
            rite -= 1;
            continue;
        }
        loop {
            if rite <= pivot {
                break;
            }
            pivot += 1;
            if ops.lt(&r[0], &r[pivot]) {
                ops.swap(r, rite, pivot);
                break;
            }
        }
        rite -= 1;
    }
    ops.swap(r, 0, pivot);
    pivot
}

/// Input assumptions: `lo > 0`, `lo <= pivot`, and `r[lo ..= pivot]` already
/// contains elements no greater than `r[pivot]`.
///
/// Output guarantee: same as Hoare partition around `r[pivot]`. Returns the
/// new position of the pivot.
pub(crate) fn expand_partition_left<T, F>(ops: &mut Ops<T, F>, r: &mut [T], lo: usize, pivot: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(lo > 0 && lo <= pivot);
    let mut left = 0usize;
    let old_pivot = pivot;
    let mut pivot = pivot;
    loop {
        if lo >= pivot {
            break;
        }
        if left == lo {
            ops.swap(r, old_pivot, pivot);
            return pivot;
        }
        if ops.ge(&r[old_pivot], &r[left]) {
            left += 1;
            continue;
        }
        pivot -= 1;
        debug_assert!(ops.ge_raw(&r[old_pivot], &r[pivot]));
        ops.swap(r, left, pivot);
        left += 1;
    }
    // Second loop: make left and pivot meet
    loop {
        if left == pivot {
            break;
        }
        if ops.ge(&r[old_pivot], &r[left]) {
            left += 1;
            continue;
        }
        loop {
            if left == pivot {
                ops.swap(r, old_pivot, pivot);
                return pivot;
            }
            pivot -= 1;
            if ops.lt(&r[pivot], &r[old_pivot]) {
                ops.swap(r, left, pivot);
                break;
            }
        }
        left += 1;
    }
    ops.swap(r, old_pivot, pivot);
    pivot
}

/// Input assumptions: `lo <= pivot < hi <= length`; `r[lo .. pivot]` already
/// contains elements no greater than `r[pivot]`, and `r[pivot .. hi]` already
/// contains elements no smaller than `r[pivot]` (i.e. `r[lo .. hi]` has
/// already been Hoare-partitioned around `r[pivot]`).
///
/// Output guarantee: same as Hoare partition around `r[pivot]` extended to
/// the full range `r[0 .. length]`. Returns the new position of the pivot.
pub(crate) fn expand_partition<T, F>(
    ops: &mut Ops<T, F>,
    r: &mut [T],
    lo: usize,
    pivot: usize,
    hi: usize,
    length: usize,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(lo <= pivot && pivot < hi && hi <= length);
    let mut hi = hi - 1;
    let mut length = length - 1;
    let mut left = 0usize;
    loop {
        loop {
            if left == lo {
                return pivot + expand_partition_right(ops, &mut r[pivot..], hi - pivot, length - pivot);
            }
            if ops.gt(&r[left], &r[pivot]) {
                break;
            }
            left += 1;
        }
        loop {
            if length == hi {
                return left + expand_partition_left(ops, &mut r[left..], lo - left, pivot - left);
            }
            if ops.ge(&r[pivot], &r[length]) {
                break;
            }
            length -= 1;
        }
        ops.swap(r, left, length);
        left += 1;
        length -= 1;
    }
}
