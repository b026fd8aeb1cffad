//! Naive per-window sort-based reference implementation.
//!
//! Exists solely to cross-check the production engines in tests and
//! benchmarks; it is `O(L * W log W)` and never touches the heap or
//! sorting-network machinery. Hidden from rendered docs since it is not
//! part of the public API surface, but must stay `pub` (not `pub(crate)`)
//! so `tests/` and `benches/`, which compile as separate crates, can reach
//! it.

use crate::classify::is_nan;
use crate::dispatch::output_len;
use crate::error::SlidingMedianError;
use crate::NanPolicy;

fn median_of_sorted(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(|a, b| a.partial_cmp(b).expect("NaNs stripped before sorting"));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        0.5 * (values[n / 2 - 1] + values[n / 2])
    }
}

fn window_median(window: &[f64], policy: NanPolicy) -> f64 {
    match policy {
        NanPolicy::Poison => {
            if window.iter().any(|&v| is_nan(v)) {
                return f64::NAN;
            }
            let mut buf = window.to_vec();
            median_of_sorted(&mut buf)
        }
        NanPolicy::Exclude => {
            let mut buf: Vec<f64> = window.iter().copied().filter(|&v| !is_nan(v)).collect();
            median_of_sorted(&mut buf)
        }
    }
}

/// Reference implementation of [`crate::sliding_median`]: for every
/// emitted position, re-sorts the window from scratch. Used only to check
/// the production engines' outputs against in tests and benchmarks.
///
/// # Errors
/// Same preconditions as [`crate::sliding_median`].
pub fn oracle(
    x: &[f64],
    w: usize,
    s: usize,
    policy: NanPolicy,
    y: &mut [f64],
) -> Result<(), SlidingMedianError> {
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

    let mut out_idx = 0;
    let mut stride_counter = 0usize;
    for i in (w - 1)..x.len() {
        if stride_counter == 0 {
            y[out_idx] = window_median(&x[(i + 1 - w)..=i], policy);
            out_idx += 1;
            stride_counter = s - 1;
        } else {
            stride_counter -= 1;
        }
    }
    Ok(())
}
