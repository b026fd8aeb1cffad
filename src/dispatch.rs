//! Input validation and engine selection for the public API.
//!
//! The dispatcher is the only place that knows about both engines; callers
//! of [`crate::sliding_median`] never see [`crate::small_window`] or
//! [`crate::large_window`] directly.

use crate::error::SlidingMedianError;
use crate::large_window::LargeWindowEngine;
use crate::network::MAX_NETWORK_WIDTH;
use crate::small_window::SmallWindowEngine;
use crate::NanPolicy;

/// Computes the required output length `M = (x.len() - w) / s + 1` for a
/// validated `(x.len(), w, s)` triple (`x.len() >= w`, `s >= 1`).
pub fn output_len(input_len: usize, w: usize, s: usize) -> usize {
    (input_len - w) / s + 1
}

/// `true` iff the memory ranges backing `a` and `b` overlap.
///
/// `x: &[f64]` and `y: &mut [f64]` are independent borrows the borrow
/// checker cannot relate, so aliasing between them (undefined behavior per
/// this crate's contract) can only be caught by comparing raw pointer
/// ranges, not by the type system.
#[cfg(debug_assertions)]
fn slices_overlap(a: &[f64], b: &[f64]) -> bool {
    let a = a.as_ptr_range();
    let b = b.as_ptr_range();
    a.start < b.end && b.start < a.end
}

fn validate(x: &[f64], w: usize, s: usize, y: &[f64]) -> Result<usize, SlidingMedianError> {
    if w < 2 {
        return Err(SlidingMedianError::WindowTooSmall(w));
    }
    if s < 1 {
        return Err(SlidingMedianError::InvalidStride(s));
    }
    if x.len() < w {
        return Err(SlidingMedianError::InputShorterThanWindow {
            input_len: x.len(),
            window: w,
        });
    }
    let expected = output_len(x.len(), w, s);
    if y.len() != expected {
        return Err(SlidingMedianError::OutputLengthMismatch {
            actual: y.len(),
            expected,
        });
    }
    #[cfg(debug_assertions)]
    debug_assert!(
        !slices_overlap(x, y),
        "x and y must not overlap (aliasing input and output is undefined behavior)"
    );
    Ok(expected)
}

/// Walks `x` with the small-window engine, emitting into `y` at the stride
/// cadence. Assumes `x`, `w`, `s`, `y` have already been validated.
fn run_small_window(x: &[f64], w: usize, s: usize, policy: NanPolicy, y: &mut [f64]) {
    let engine = SmallWindowEngine::new(w, policy).expect("w already validated as 2..=8");
    let mut out_idx = 0;
    let mut stride_counter = 0usize;
    for i in (w - 1)..x.len() {
        if stride_counter == 0 {
            let window = &x[(i + 1 - w)..=i];
            y[out_idx] = engine.median(window);
            out_idx += 1;
            stride_counter = s - 1;
        } else {
            stride_counter -= 1;
        }
    }
    debug_assert_eq!(out_idx, y.len());
}

/// Walks `x` with the large-window (double-heap) engine, emitting into `y`
/// at the stride cadence. Assumes `x`, `w`, `s`, `y` have already been
/// validated.
fn run_large_window(x: &[f64], w: usize, s: usize, policy: NanPolicy, y: &mut [f64]) {
    let mut engine = LargeWindowEngine::new(w, policy);
    let mut out_idx = 0;
    let mut stride_counter = 0usize;
    for &v in x {
        engine.admit(v);
        if engine.is_full() {
            if stride_counter == 0 {
                y[out_idx] = engine.result();
                out_idx += 1;
                stride_counter = s - 1;
            } else {
                stride_counter -= 1;
            }
        }
    }
    debug_assert_eq!(out_idx, y.len());
}

/// Computes the streaming median of a sliding window of width `w` and
/// stride `s` over `x`, under `policy`, writing `M` values into `y` where
/// `M = (x.len() - w) / s + 1`.
///
/// Automatically selects the small-window (sorting-network) engine for
/// `w <= 8` and the large-window (double-heap) engine otherwise. On
/// success, `y[0..M)` holds the medians of windows `x[0..w)`,
/// `x[s..s+w)`, `x[2s..2s+w)`, … On failure, `y` is left untouched.
///
/// `x` and `y` must not overlap; passing aliasing slices is undefined
/// behavior (debug builds assert against it via a pointer-range check,
/// release builds do not pay for the check).
///
/// # Errors
/// Returns [`SlidingMedianError`] if `w < 2`, `s < 1`, `x.len() < w`, or
/// `y.len()` does not equal the required output length.
pub fn sliding_median(
    x: &[f64],
    w: usize,
    s: usize,
    policy: NanPolicy,
    y: &mut [f64],
) -> Result<(), SlidingMedianError> {
    validate(x, w, s, y)?;
    if w <= MAX_NETWORK_WIDTH {
        log::debug!("sliding_median: w={w} s={s} -> small-window engine");
        run_small_window(x, w, s, policy, y);
    } else {
        log::debug!("sliding_median: w={w} s={s} -> large-window engine");
        run_large_window(x, w, s, policy, y);
    }
    Ok(())
}

/// Like [`sliding_median`], but always uses the large-window (double-heap)
/// engine, regardless of `w`. Useful for benchmarking and cross-checking
/// the two engines against each other near the dispatch threshold.
///
/// `x` and `y` must not overlap; see [`sliding_median`]'s aliasing note.
///
/// # Errors
/// Same preconditions as [`sliding_median`].
pub fn sliding_median_big(
    x: &[f64],
    w: usize,
    s: usize,
    policy: NanPolicy,
    y: &mut [f64],
) -> Result<(), SlidingMedianError> {
    validate(x, w, s, y)?;
    log::trace!("sliding_median_big: forcing large-window engine for w={w}");
    run_large_window(x, w, s, policy, y);
    Ok(())
}

/// Like [`sliding_median`], but always uses the small-window
/// (sorting-network) engine. Only valid for `w` in `2..=8`.
///
/// `x` and `y` must not overlap; see [`sliding_median`]'s aliasing note.
///
/// # Errors
/// Same preconditions as [`sliding_median`], plus
/// [`SlidingMedianError::WindowNotTiny`] if `w` is outside `2..=8`.
pub fn sliding_median_tiny(
    x: &[f64],
    w: usize,
    s: usize,
    policy: NanPolicy,
    y: &mut [f64],
) -> Result<(), SlidingMedianError> {
    if w > MAX_NETWORK_WIDTH {
        return Err(SlidingMedianError::WindowNotTiny(w));
    }
    validate(x, w, s, y)?;
    log::trace!("sliding_median_tiny: forcing small-window engine for w={w}");
    run_small_window(x, w, s, policy, y);
    Ok(())
}
