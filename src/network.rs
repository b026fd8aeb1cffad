//! Fixed compare-exchange (sorting/median) networks for buffers of 2..=8
//! NaN-free `f64` values.
//!
//! Every network here is a *data-oblivious* fixed sequence of
//! compare-exchange operations: the sequence of index pairs visited never
//! depends on the data, only whether each individual compare-exchange swaps
//! is data-dependent. Comparisons use plain `>`, so callers must strip NaNs
//! from `buf` before calling any function in this module — see §4.B: IEEE-754
//! NaN comparisons always return `false`, which would silently corrupt the
//! network's ordering guarantees.

/// Swaps `buf[i]` and `buf[j]` iff `buf[i] > buf[j]`.
#[inline(always)]
fn cmp_swap(buf: &mut [f64], i: usize, j: usize) {
    if buf[i] > buf[j] {
        buf.swap(i, j);
    }
}

/// Median of 2: the single compare-exchange leaves both positions defined
/// (ascending), and the median is their mean.
#[inline]
fn median2(buf: &mut [f64]) -> f64 {
    cmp_swap(buf, 0, 1);
    0.5 * (buf[0] + buf[1])
}

/// Median of 3 (3 compare-exchanges); the median ends up at index 1.
///
/// The classic minimal median-of-three network, as used for quicksort
/// pivot selection and small-kernel median filters.
#[inline]
fn median3(buf: &mut [f64]) -> f64 {
    cmp_swap(buf, 0, 1);
    cmp_swap(buf, 1, 2);
    cmp_swap(buf, 0, 1);
    buf[1]
}

/// Median of 4 (4 compare-exchanges); indices 1 and 2 bracket the median
/// (unordered relative to each other), so the median is their mean.
///
/// After `(0,1) (2,3) (0,2) (1,3)`, index 0 holds the global minimum and
/// index 3 the global maximum; indices 1 and 2 hold the middle pair.
#[inline]
fn median4(buf: &mut [f64]) -> f64 {
    cmp_swap(buf, 0, 1);
    cmp_swap(buf, 2, 3);
    cmp_swap(buf, 0, 2);
    cmp_swap(buf, 1, 3);
    0.5 * (buf[1] + buf[2])
}

/// Median of 5 (7 compare-exchanges); the median ends up at index 2.
///
/// Classic minimal median-of-5 network (N. Devillard, "Fast median search").
#[inline]
fn median5(buf: &mut [f64]) -> f64 {
    cmp_swap(buf, 0, 1);
    cmp_swap(buf, 3, 4);
    cmp_swap(buf, 0, 3);
    cmp_swap(buf, 1, 4);
    cmp_swap(buf, 1, 2);
    cmp_swap(buf, 2, 3);
    cmp_swap(buf, 1, 2);
    buf[2]
}

/// Full sort of 6 (12 compare-exchanges); also realizes the required
/// median-of-6 guarantee (indices 2 and 3 bracket the median) as a trivial
/// consequence of full ordering.
#[inline]
fn sort6(buf: &mut [f64]) {
    cmp_swap(buf, 1, 2);
    cmp_swap(buf, 4, 5);
    cmp_swap(buf, 0, 2);
    cmp_swap(buf, 3, 5);
    cmp_swap(buf, 0, 1);
    cmp_swap(buf, 3, 4);
    cmp_swap(buf, 2, 5);
    cmp_swap(buf, 0, 3);
    cmp_swap(buf, 1, 4);
    cmp_swap(buf, 2, 4);
    cmp_swap(buf, 1, 3);
    cmp_swap(buf, 2, 3);
}

/// Median of 6 via [`sort6`]; returns the mean of indices 2 and 3.
#[inline]
fn median6(buf: &mut [f64]) -> f64 {
    sort6(buf);
    0.5 * (buf[2] + buf[3])
}

/// Median of 7 (13 compare-exchanges); the median ends up at index 3.
///
/// Classic minimal median-of-7 network (N. Devillard, "Fast median search").
#[inline]
fn median7(buf: &mut [f64]) -> f64 {
    cmp_swap(buf, 0, 5);
    cmp_swap(buf, 0, 3);
    cmp_swap(buf, 1, 6);
    cmp_swap(buf, 2, 4);
    cmp_swap(buf, 0, 1);
    cmp_swap(buf, 3, 5);
    cmp_swap(buf, 2, 6);
    cmp_swap(buf, 2, 3);
    cmp_swap(buf, 3, 6);
    cmp_swap(buf, 4, 5);
    cmp_swap(buf, 1, 4);
    cmp_swap(buf, 1, 3);
    cmp_swap(buf, 3, 4);
    buf[3]
}

/// Full sort of 8 (19 compare-exchanges); also realizes the required
/// median-of-8 guarantee (indices 3 and 4 bracket the median) as a trivial
/// consequence of full ordering.
#[inline]
fn sort8(buf: &mut [f64]) {
    cmp_swap(buf, 0, 1);
    cmp_swap(buf, 2, 3);
    cmp_swap(buf, 4, 5);
    cmp_swap(buf, 6, 7);

    cmp_swap(buf, 0, 2);
    cmp_swap(buf, 1, 3);
    cmp_swap(buf, 4, 6);
    cmp_swap(buf, 5, 7);

    cmp_swap(buf, 1, 2);
    cmp_swap(buf, 5, 6);
    cmp_swap(buf, 0, 4);
    cmp_swap(buf, 3, 7);

    cmp_swap(buf, 1, 5);
    cmp_swap(buf, 2, 6);

    cmp_swap(buf, 1, 4);
    cmp_swap(buf, 3, 6);

    cmp_swap(buf, 2, 4);
    cmp_swap(buf, 3, 5);

    cmp_swap(buf, 3, 4);
}

/// Median of 8 via [`sort8`]; returns the mean of indices 3 and 4.
#[inline]
fn median8(buf: &mut [f64]) -> f64 {
    sort8(buf);
    0.5 * (buf[3] + buf[4])
}

/// Computes the median of `buf[0..k]` using the fixed network for `k`.
///
/// `buf` must contain no NaNs and must have length exactly `k`. `k` must be
/// in `2..=8`; any other value is a programmer error (the small-window
/// engine never calls this outside that range).
///
/// # Panics
/// Panics if `k` is outside `2..=8` or `buf.len() != k`.
pub fn median_of(k: usize, buf: &mut [f64]) -> f64 {
    debug_assert_eq!(buf.len(), k, "network buffer length must equal k");
    match k {
        2 => median2(buf),
        3 => median3(buf),
        4 => median4(buf),
        5 => median5(buf),
        6 => median6(buf),
        7 => median7(buf),
        8 => median8(buf),
        _ => panic!("no compare-exchange network defined for k = {k} (valid range is 2..=8)"),
    }
}

/// Smallest window width handled by the small-window engine.
pub const MIN_NETWORK_WIDTH: usize = 2;
/// Largest window width handled by the small-window engine; the dispatcher
/// routes anything above this to the large-window (double-heap) engine.
pub const MAX_NETWORK_WIDTH: usize = 8;
