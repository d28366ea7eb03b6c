//! Order-statistic selection for window reducers.
//!
//! ## Purpose
//!
//! This module extracts the k-th smallest element of a buffer, which is what
//! the median filter needs from every window.
//!
//! ## Design notes
//!
//! * **Selection over sorting**: Uses `select_nth_unstable_by`, O(w) average
//!   per window instead of O(w log w). The element placed at position `k` is the
//!   one a full sort would place there.
//! * **In-place**: The buffer is reordered; callers pass a scratch copy.
//! * **Incomparable values**: NaN compares as equal to everything, so selection
//!   never panics on NaN input.
//!
//! ## Non-goals
//!
//! * This module does not average the two middle values for even lengths; the
//!   upper middle element is selected.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Return the element of rank `k` (0-based) of `vals`, reordering `vals`.
#[inline]
pub fn select_nth<T: Float>(vals: &mut [T], k: usize) -> T {
    debug_assert!(k < vals.len(), "select_nth: rank out of bounds");
    let (_, nth, _) = vals.select_nth_unstable_by(k, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    *nth
}

/// Return the upper median (rank `len / 2`) of `vals`, reordering `vals`.
#[inline]
pub fn upper_median<T: Float>(vals: &mut [T]) -> T {
    let mid = vals.len() / 2;
    select_nth(vals, mid)
}
