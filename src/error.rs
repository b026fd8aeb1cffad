//! Error type returned by the dispatcher entry points.

use thiserror::Error;

/// Why a call into [`crate::sliding_median`] (or one of its forced-engine
/// variants) was rejected before touching the output buffer.
///
/// Every variant corresponds to one of the dispatcher preconditions in the
/// component design for the dispatcher: a violation never produces a partial
/// write to `y`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SlidingMedianError {
    /// `w < 2`.
    #[error("window size must be at least 2, got {0}")]
    WindowTooSmall(usize),

    /// `s < 1`.
    #[error("stride must be at least 1, got {0}")]
    InvalidStride(usize),

    /// `x.len() < w`.
    #[error("input length {input_len} is shorter than the window size {window}")]
    InputShorterThanWindow {
        /// `x.len()`.
        input_len: usize,
        /// `w`.
        window: usize,
    },

    /// `y.len()` does not equal the required output length `M`.
    #[error("output buffer has length {actual}, expected {expected}")]
    OutputLengthMismatch {
        /// `y.len()`.
        actual: usize,
        /// The required `M = (x.len() - w) / s + 1`.
        expected: usize,
    },

    /// [`crate::sliding_median_tiny`] was called with `w` outside `[2, 8]`.
    #[error("window size {0} is not valid for the small-window engine (must be 2..=8)")]
    WindowNotTiny(usize),
}
