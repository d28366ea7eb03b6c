//! Extrema and mean of a sequence.
//!
//! ## Purpose
//!
//! This module locates the minimum and maximum of a sequence in a single scan
//! and computes its arithmetic mean.
//!
//! ## Design notes
//!
//! * **Single scan**: `min_index`, `min_value`, `max_index` and `max_value` are
//!   projections of one [`min_max`] pass, so they always agree on tie-breaking.
//! * **First occurrence**: Indices move only on strict `<` / `>`, so ties keep
//!   the lowest index.
//! * **Sentinels**: An empty sequence yields indices of `-1`, a minimum of
//!   `+inf` and a maximum of `-inf`; its mean is `0`.
//!
//! ## Invariants
//!
//! * For non-empty input, `seq[min_index] == min_value` and
//!   `seq[max_index] == max_value` (bitwise).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::scalar::from_count;

// ============================================================================
// Extrema
// ============================================================================

/// Position and value of the first minimum and first maximum of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema<T> {
    /// Index of the first minimum, or `-1` for an empty sequence.
    pub min_index: isize,

    /// Minimum value, or `+inf` for an empty sequence.
    pub min_value: T,

    /// Index of the first maximum, or `-1` for an empty sequence.
    pub max_index: isize,

    /// Maximum value, or `-inf` for an empty sequence.
    pub max_value: T,
}

impl<T: Float> Extrema<T> {
    /// Extrema of an empty sequence.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min_index: -1,
            min_value: T::infinity(),
            max_index: -1,
            max_value: T::neg_infinity(),
        }
    }

    /// Flatten into `(min_index, min_value, max_index, max_value)`.
    #[inline]
    pub fn into_tuple(self) -> (isize, T, isize, T) {
        (self.min_index, self.min_value, self.max_index, self.max_value)
    }
}

/// Find the first minimum and first maximum of `seq`.
pub fn min_max<T: Float>(seq: &[T]) -> Extrema<T> {
    if seq.is_empty() {
        return Extrema::empty();
    }

    let mut min_idx = 0;
    let mut max_idx = 0;
    for (i, &v) in seq.iter().enumerate().skip(1) {
        if v < seq[min_idx] {
            min_idx = i;
        }
        if v > seq[max_idx] {
            max_idx = i;
        }
    }

    // Slice lengths never exceed isize::MAX.
    Extrema {
        min_index: min_idx as isize,
        min_value: seq[min_idx],
        max_index: max_idx as isize,
        max_value: seq[max_idx],
    }
}

/// Index of the first minimum of `seq`, or `-1` if it is empty.
#[inline]
pub fn min_index<T: Float>(seq: &[T]) -> isize {
    min_max(seq).min_index
}

/// Minimum value of `seq`, or `+inf` if it is empty.
#[inline]
pub fn min_value<T: Float>(seq: &[T]) -> T {
    min_max(seq).min_value
}

/// Index of the first maximum of `seq`, or `-1` if it is empty.
#[inline]
pub fn max_index<T: Float>(seq: &[T]) -> isize {
    min_max(seq).max_index
}

/// Maximum value of `seq`, or `-inf` if it is empty.
#[inline]
pub fn max_value<T: Float>(seq: &[T]) -> T {
    min_max(seq).max_value
}

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of `seq`, or `0` if it is empty.
pub fn average<T: Float>(seq: &[T]) -> T {
    if seq.is_empty() {
        return T::zero();
    }

    let sum = seq.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / from_count(seq.len())
}
