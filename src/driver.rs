//! Adaptive driver: dispatch among pivot strategies based on `n / length`,
//! iterating with tail-elimination instead of recursion.

use crate::hoare::pivot_partition;
use crate::ops::Ops;
use crate::strategies::{median_of_maxima, median_of_minima, median_of_ninthers};

/// Rearranges `r[0..length)` so that `r[n]` holds the `n`-th smallest element
/// and the partition postcondition holds. Iterative: each pass narrows the
/// active window to one side of a chosen pivot until the pivot lands on `n`.
pub(crate) fn adaptive_quickselect<T, F>(ops: &mut Ops<T, F>, r: &mut [T], n: usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut r = r;
    let mut n = n;
    loop {
        let length = r.len();
        debug_assert!(n < length);

        if n == 0 {
            let mut pivot = 0usize;
            for i in 1..length {
                if ops.lt(&r[i], &r[pivot]) {
                    pivot = i;
                }
            }
            ops.swap(r, 0, pivot);
            return;
        }
        if n + 1 == length {
            let mut pivot = 0usize;
            for i in 1..length {
                if ops.lt(&r[pivot], &r[i]) {
                    pivot = i;
                }
            }
            ops.swap(r, pivot, length - 1);
            return;
        }

        let pivot = if length <= 16 {
            pivot_partition(ops, r, n, length)
        } else if 6 * n <= length {
            median_of_minima(ops, r, n, length)
        } else if 6 * n >= 5 * length {
            median_of_maxima(ops, r, n, length)
        } else {
            median_of_ninthers(ops, r, length)
        };

        if pivot == n {
            return;
        }
        if pivot > n {
            r = &mut r[..pivot];
        } else {
            r = &mut r[pivot + 1..];
            n -= pivot + 1;
        }
    }
}
