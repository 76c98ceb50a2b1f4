//! Fixed-size selection networks for 3, 4, and 5 elements.
//!
//! These are straight-line comparator networks: the number and order of
//! comparisons is fixed ahead of time, independent of the data.

use crate::ops::Ops;

/// Sorts `r[a]`, `r[b]`, `r[c]` in place using at most three comparisons.
pub(crate) fn sort3<T, F>(ops: &mut Ops<T, F>, r: &mut [T], a: usize, b: usize, c: usize)
where
    F: FnMut(&T, &T) -> bool,
{
    if ops.lt(&r[b], &r[a]) {
        if ops.lt(&r[c], &r[b]) {
            ops.swap(r, a, c); // c < b < a  =>  a < b < c
        } else {
            // b < a, b <= c
            ops.swap(r, a, b); // r[a] now holds old r[b]; r[b] now holds old r[a]
            if ops.lt(&r[c], &r[b]) {
                // old r[c] < old r[a]: b <= c < a
                ops.swap(r, b, c);
            }
        }
    } else if ops.lt(&r[c], &r[b]) {
        // a <= b, c < b
        ops.swap(r, b, c);
        if ops.lt(&r[b], &r[a]) {
            // c < a < b (post swap, r[b] holds old r[c])
            ops.swap(r, a, b);
        }
    }
    debug_assert!(ops.le_raw(&r[a], &r[b]) && ops.le_raw(&r[b], &r[c]));
}

/// With four distinct slot indices: if `LEAN_RIGHT` is `false`, places the
/// lower median of the four values in `r[b]` with `r[a] <= r[b]`. If
/// `LEAN_RIGHT` is `true`, places the upper median in `r[c]` with
/// `r[c] <= r[d]`. Used as the median-of-5 building block when one of the
/// five elements is treated as ±infinity.
pub(crate) fn partition4<const LEAN_RIGHT: bool, T, F>(
    ops: &mut Ops<T, F>,
    r: &mut [T],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a != b && a != c && a != d && b != c && b != d && c != d);
    if LEAN_RIGHT {
        // Consider r[e] infinite.
        if ops.lt(&r[c], &r[a]) {
            ops.swap(r, a, c);
        } // a <= c
        if ops.lt(&r[d], &r[b]) {
            ops.swap(r, b, d);
        } // a <= c, b <= d
        if ops.lt(&r[d], &r[c]) {
            ops.swap(r, c, d); // a <= d, b <= c < d
            ops.swap(r, a, b); // b <= d, a <= c < d
        } // a <= c <= d, b <= d
        if ops.lt(&r[c], &r[b]) {
            // a <= c <= d, c < b <= d
            ops.swap(r, b, c); // a <= b <= c <= d
        }
        debug_assert!(ops.le_raw(&r[a], &r[c]) && ops.le_raw(&r[b], &r[c]) && ops.le_raw(&r[c], &r[d]));
    } else {
        // Consider r[a] infinitely small, then rename b->a, c->b, d->c, e->d.
        if ops.lt(&r[c], &r[a]) {
            ops.swap(r, a, c);
        }
        if ops.lt(&r[c], &r[b]) {
            ops.swap(r, b, c);
        }
        if ops.lt(&r[d], &r[a]) {
            ops.swap(r, a, d);
        }
        if ops.lt(&r[d], &r[b]) {
            ops.swap(r, b, d);
        } else if ops.lt(&r[b], &r[a]) {
            ops.swap(r, a, b);
        }
        debug_assert!(ops.le_raw(&r[a], &r[b]) && ops.le_raw(&r[b], &r[c]) && ops.le_raw(&r[b], &r[d]));
    }
}

/// Five distinct slot indices. On exit, `r[c]` holds the median, `r[a]` and
/// `r[b]` hold values `<= r[c]`, and `r[d]` and `r[e]` hold values `>= r[c]`.
/// Uses at most 6 comparisons.
pub(crate) fn partition5<T, F>(
    ops: &mut Ops<T, F>,
    r: &mut [T],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    e: usize,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(
        a != b && a != c && a != d && a != e && b != c && b != d && b != e && c != d && c != e && d != e
    );
    if ops.lt(&r[c], &r[a]) {
        ops.swap(r, a, c);
    }
    if ops.lt(&r[d], &r[b]) {
        ops.swap(r, b, d);
    }
    if ops.lt(&r[d], &r[c]) {
        ops.swap(r, c, d);
        ops.swap(r, a, b);
    }
    if ops.lt(&r[e], &r[b]) {
        ops.swap(r, b, e);
    }
    if ops.lt(&r[e], &r[c]) {
        ops.swap(r, c, e);
        if ops.lt(&r[c], &r[a]) {
            ops.swap(r, a, c);
        }
    } else if ops.lt(&r[c], &r[b]) {
        ops.swap(r, b, c);
    }
    debug_assert!(
        ops.le_raw(&r[a], &r[c])
            && ops.le_raw(&r[b], &r[c])
            && ops.le_raw(&r[c], &r[d])
            && ops.le_raw(&r[c], &r[e])
    );
}
