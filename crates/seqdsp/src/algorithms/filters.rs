//! Sliding-window mean and median filters.
//!
//! ## Purpose
//!
//! This module smooths a sequence by reducing every run of `width` neighboring
//! elements to one value: their mean or their median.
//!
//! ## Design notes
//!
//! * **Valid windows only**: Only windows that lie fully inside the input are
//!   evaluated, so the output is `width - 1` elements shorter than the input.
//! * **Clamped width**: Widths larger than the input collapse to one window
//!   over the whole sequence; widths of 1 or less return a copy.
//! * **Incremental mean**: The mean filter maintains a running sum, adding the
//!   difference between the entering and the leaving element. O(n) regardless
//!   of width.
//! * **Selected median**: The median filter copies each window into a per-call
//!   scratch buffer and selects the upper middle element.
//!
//! ## Key concepts
//!
//! * **Upper median**: For even widths the element at rank `width / 2` of the
//!   sorted window is taken; no averaging of the two middle values.
//!
//! ## Invariants
//!
//! * Non-empty input always yields at least one output element.
//! * Empty input yields empty output for any width.
//! * The input sequence is never modified.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::WindowScratch;
use crate::primitives::scalar::from_count;
use crate::primitives::sorting::upper_median;
use crate::primitives::window::SlidingWindow;

// ============================================================================
// Filter Selection
// ============================================================================

/// Window reducer used by a sliding filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidingFilter {
    /// Arithmetic mean of the window (default).
    #[default]
    Mean,

    /// Upper median of the window.
    Median,
}

impl SlidingFilter {
    /// Apply the selected filter to `seq` with the requested window `width`.
    pub fn apply<T: Float>(&self, seq: &[T], width: isize) -> Vec<T> {
        match self {
            Self::Mean => average_filter(seq, width),
            Self::Median => median_filter(seq, width),
        }
    }
}

// ============================================================================
// Mean Filter
// ============================================================================

/// Mean of every `width` neighboring elements of `seq`.
///
/// The result has `len - width + 1` elements. If `width >= len`, the result is
/// the single mean of `seq`; if `width <= 1`, a copy of `seq` is returned.
pub fn average_filter<T: Float>(seq: &[T], width: isize) -> Vec<T> {
    let (width, outputs) = match SlidingWindow::clamp(width, seq.len()) {
        SlidingWindow::Passthrough => return seq.to_vec(),
        SlidingWindow::Sliding { width, outputs } => (width, outputs),
    };

    let f = T::one() / from_count::<T>(width);
    let mut out = Vec::with_capacity(outputs);

    let mut sliding_sum = seq[..width].iter().fold(T::zero(), |acc, &v| acc + v);
    out.push(sliding_sum * f);

    for i in 1..outputs {
        sliding_sum = sliding_sum + (seq[i + width - 1] - seq[i - 1]);
        out.push(sliding_sum * f);
    }

    out
}

// ============================================================================
// Median Filter
// ============================================================================

/// Upper median of every `width` neighboring elements of `seq`.
///
/// The result has `len - width + 1` elements. If `width >= len`, the result is
/// the single median of `seq`; if `width <= 1`, a copy of `seq` is returned.
pub fn median_filter<T: Float>(seq: &[T], width: isize) -> Vec<T> {
    let width = match SlidingWindow::clamp(width, seq.len()) {
        SlidingWindow::Passthrough => return seq.to_vec(),
        SlidingWindow::Sliding { width, .. } => width,
    };

    let mut scratch = WindowScratch::with_width(width);
    seq.windows(width)
        .map(|window| upper_median(scratch.fill(window)))
        .collect()
}
