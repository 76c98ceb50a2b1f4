//! Element operators (comparison and swap), with optional instrumentation.
//!
//! Every comparison and swap performed by the algorithm passes through this
//! module so that instrumentation is a single, optional side effect rather
//! than a property scattered across every component.

/// Op counters. Write-only from within a single call; reset by the caller
/// between runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub wasted_swaps: u64,
}

/// Wraps a caller-supplied `is_less` predicate together with an optional
/// [`Stats`] sink. Instrumentation is observational only: it never changes
/// which branch `lt`/`swap` take.
pub(crate) struct Ops<'a, 'b, T, F> {
    is_less: &'a mut F,
    stats: Option<&'b mut Stats>,
    _elem: core::marker::PhantomData<T>,
}

impl<'a, 'b, T, F> Ops<'a, 'b, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub(crate) fn new(is_less: &'a mut F, stats: Option<&'b mut Stats>) -> Self {
        Ops {
            is_less,
            stats,
            _elem: core::marker::PhantomData,
        }
    }

    #[inline]
    pub(crate) fn lt(&mut self, a: &T, b: &T) -> bool {
        if let Some(s) = self.stats.as_deref_mut() {
            s.comparisons += 1;
        }
        (self.is_less)(a, b)
    }

    #[inline]
    pub(crate) fn le(&mut self, a: &T, b: &T) -> bool {
        !self.lt(b, a)
    }

    #[inline]
    pub(crate) fn gt(&mut self, a: &T, b: &T) -> bool {
        self.lt(b, a)
    }

    #[inline]
    pub(crate) fn ge(&mut self, a: &T, b: &T) -> bool {
        !self.lt(a, b)
    }

    /// Uncounted "less than": bypasses instrumentation entirely. Used only
    /// for postcondition bookkeeping (debug assertions, wasted-swap
    /// classification) that is not part of the algorithm's real comparison
    /// work and must not appear in `Stats::comparisons`.
    #[inline]
    fn lt_raw(&mut self, a: &T, b: &T) -> bool {
        (self.is_less)(a, b)
    }

    /// Uncounted `<=`, for use in `debug_assert!` postcondition checks only.
    #[inline]
    pub(crate) fn le_raw(&mut self, a: &T, b: &T) -> bool {
        !self.lt_raw(b, a)
    }

    /// Uncounted `>=`, for use in `debug_assert!` postcondition checks only.
    #[inline]
    pub(crate) fn ge_raw(&mut self, a: &T, b: &T) -> bool {
        !self.lt_raw(a, b)
    }

    /// Equivalent-under-the-ordering check (neither `a < b` nor `b < a`),
    /// used only to classify a swap as "wasted" for instrumentation. Uses
    /// the uncounted comparison: this is bookkeeping about the swap, not
    /// comparison work the algorithm performed, and must not inflate
    /// `Stats::comparisons` (mirrors the original's raw payload-equality
    /// check, which is likewise separate from the counted `operator<`).
    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> bool {
        !self.lt_raw(a, b) && !self.lt_raw(b, a)
    }

    #[inline]
    pub(crate) fn swap(&mut self, data: &mut [T], i: usize, j: usize) {
        if i == j {
            return;
        }
        if self.stats.is_some() {
            let wasted = self.equivalent(&data[i], &data[j]);
            if let Some(s) = self.stats.as_deref_mut() {
                s.swaps += 1;
                if wasted {
                    s.wasted_swaps += 1;
                }
            }
        }
        data.swap(i, j);
    }
}
