//! `sliding_median`: streaming median of a sliding window over a sequence
//! of `f64` samples.
//!
//! Two engines cover the whole window-width range under one dispatcher
//! ([`sliding_median`]): a fixed compare-exchange network for small windows
//! (`w` in `2..=8`, see [`small_window`]) and a paired max-heap/min-heap
//! over an arena ring for everything above that (see [`large_window`]).
//! Both honor a [`NanPolicy`] that either poisons the whole window on any
//! NaN, or excludes NaNs and takes the median of what's left.
//!
//! `+∞` and `-∞` are ordered values, not special cases: they sort and
//! average exactly as IEEE-754 says they should, including the
//! `(+∞ + −∞) / 2 == NaN` corner.
//!
//! # Concurrency
//!
//! Every entry point is synchronous and touches only its own arguments: no
//! interior mutability, no globals, no I/O. Both engine types (the small-
//! window sorting-network engine and the large-window double-heap engine)
//! are plain owned structs over `Vec`/`f64`/`usize` fields, so they get
//! `Send` for free from the compiler's auto-trait derivation — nothing
//! here needs `unsafe impl Send` or any other unsafe concurrency
//! primitive. Distinct threads calling [`sliding_median`] concurrently on
//! disjoint, non-overlapping buffers need nothing beyond what the type
//! system already grants; a single window state is not re-entrant, so
//! don't share one engine instance across threads without your own
//! synchronization.

mod classify;
mod dispatch;
mod error;
mod heap;
mod large_window;
mod network;
#[doc(hidden)]
pub mod oracle;
mod small_window;

pub use dispatch::{sliding_median, sliding_median_big, sliding_median_tiny};
pub use error::SlidingMedianError;

/// How a window containing one or more NaN samples is treated.
///
/// Named rather than a bare `bool` so call sites read without cross-
/// referencing which boolean value means what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NanPolicy {
    /// Any NaN in the window forces the emitted median to `NaN`.
    Poison,
    /// NaNs are removed from the window; the median is taken over the
    /// remaining `k` values. If `k == 0`, the result is `NaN`.
    Exclude,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_sequence() {
        let x = [7.0; 10];
        let mut y = [0.0; 6];
        sliding_median(&x, 5, 1, NanPolicy::Poison, &mut y).unwrap();
        assert_eq!(y, [7.0; 6]);
    }

    #[test]
    fn all_nan_sequence() {
        let x = [f64::NAN; 10];
        let mut y = [0.0; 6];
        sliding_median(&x, 5, 1, NanPolicy::Poison, &mut y).unwrap();
        assert!(y.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn single_finite_among_nans_under_exclude() {
        let x = [
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            42.5,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
        ];
        let mut y = [0.0; 6];
        sliding_median(&x, 5, 1, NanPolicy::Exclude, &mut y).unwrap();
        assert!(y[0].is_nan());
        assert_eq!(&y[1..], [42.5; 5]);
    }

    #[test]
    fn single_finite_among_nans_under_poison() {
        let x = [
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            42.5,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
        ];
        let mut y = [0.0; 6];
        sliding_median(&x, 5, 1, NanPolicy::Poison, &mut y).unwrap();
        assert!(y.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn infinities_participate() {
        let x = [
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::INFINITY,
            42.5,
            50.0,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::NAN,
            f64::NAN,
        ];
        let mut y = [0.0; 6];
        sliding_median(&x, 5, 1, NanPolicy::Exclude, &mut y).unwrap();
        assert_eq!(y[0], f64::INFINITY);
        assert_eq!(y[1], 50.0);
        assert_eq!(y[2], 46.25);
    }

    #[test]
    fn large_window_stride() {
        let x = [7.0; 20];
        let mut y = [0.0; 11];
        sliding_median(&x, 10, 1, NanPolicy::Poison, &mut y).unwrap();
        assert!(y.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn dispatcher_bounds_agree_with_oracle() {
        let x: Vec<f64> = (0..16).map(|i| ((i * 11) % 17) as f64).collect();

        for &w in &[8usize, 9usize] {
            let m = dispatch::output_len(x.len(), w, 1);
            let mut y = vec![0.0; m];
            let mut y_oracle = vec![0.0; m];
            sliding_median(&x, w, 1, NanPolicy::Exclude, &mut y).unwrap();
            oracle::oracle(&x, w, 1, NanPolicy::Exclude, &mut y_oracle).unwrap();
            assert_eq!(y, y_oracle, "mismatch at w = {w}");
        }
    }
}
