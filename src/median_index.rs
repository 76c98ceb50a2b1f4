//! Median-index helpers: pick which slot holds a median without mutating
//! anything, plus Tukey's ninther built on top of them.

use crate::ops::Ops;

/// Returns which of `{a, b, c}` holds the median value. Does not mutate `r`.
pub(crate) fn median3_index<T, F>(ops: &mut Ops<T, F>, r: &[T], a: usize, b: usize, c: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if ops.lt(&r[b], &r[a]) {
        // b < a
        if ops.lt(&r[b], &r[c]) {
            // b < a, b < c
            return if ops.lt(&r[c], &r[a]) { c } else { a };
        }
    } else if ops.lt(&r[c], &r[b]) {
        // a <= b, c < b
        return if ops.lt(&r[c], &r[a]) { a } else { c };
    }
    b
}

/// Returns the index among `_1..=_9` holding the median of the medians of
/// the triples `(_1,_2,_3)`, `(_4,_5,_6)`, `(_7,_8,_9)`, without mutating.
#[allow(clippy::too_many_arguments)]
pub(crate) fn ninther_index<T, F>(
    ops: &mut Ops<T, F>,
    r: &[T],
    i1: usize,
    i2: usize,
    i3: usize,
    i4: usize,
    i5: usize,
    i6: usize,
    i7: usize,
    i8: usize,
    i9: usize,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let m1 = median3_index(ops, r, i1, i2, i3);
    let m2 = median3_index(ops, r, i4, i5, i6);
    let m3 = median3_index(ops, r, i7, i8, i9);
    median3_index(ops, r, m1, m2, m3)
}

/// Tukey's ninther: computes the medians of the triples `(_1,_2,_3)`,
/// `(_4,_5,_6)`, `(_7,_8,_9)`, then swaps the median of those three medians
/// into `r[_5]`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn ninther<T, F>(
    ops: &mut Ops<T, F>,
    r: &mut [T],
    i1: usize,
    i2: usize,
    i3: usize,
    i4: usize,
    i5: usize,
    i6: usize,
    i7: usize,
    i8: usize,
    i9: usize,
) where
    F: FnMut(&T, &T) -> bool,
{
    let m = ninther_index(ops, r, i1, i2, i3, i4, i5, i6, i7, i8, i9);
    ops.swap(r, i5, m);
}
