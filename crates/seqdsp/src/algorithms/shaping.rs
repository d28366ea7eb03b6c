//! Sequence shaping: copying, reordering, decimation and generation.
//!
//! ## Purpose
//!
//! This module builds new sequences from existing ones without arithmetic:
//! copies, reversal, decimation (`every_nth`), constant runs (`repeat`) and
//! integer ranges (`range`).
//!
//! ## Design notes
//!
//! * **Signed counts**: Counts are `isize`; non-positive counts produce an empty
//!   sequence instead of an error.
//! * **Inclusive ranges**: `range(a, b)` includes both ends and runs in the
//!   direction from `a` to `b`.
//!
//! ## Invariants
//!
//! * Every result owns fresh storage; no result aliases its input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::scalar::from_i64;

/// Copy of `seq` in independent storage.
#[inline]
pub fn copy<T: Copy>(seq: &[T]) -> Vec<T> {
    seq.to_vec()
}

/// Elements of `seq` in reverse order, e.g. `[1, 2, 3] -> [3, 2, 1]`.
pub fn reverse<T: Copy>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().copied().collect()
}

/// `n` copies of `x`; empty for `n <= 0`.
pub fn repeat<T: Copy>(x: T, n: isize) -> Vec<T> {
    match usize::try_from(n) {
        Ok(n) => vec![x; n],
        Err(_) => Vec::new(),
    }
}

/// Elements of `seq` at positions `0, n, 2n, ...`; empty for `n <= 0`.
pub fn every_nth<T: Copy>(seq: &[T], n: isize) -> Vec<T> {
    match usize::try_from(n) {
        Ok(step) if step > 0 => seq.iter().step_by(step).copied().collect(),
        _ => Vec::new(),
    }
}

/// All integers from `a` to `b`, both inclusive, in the order from `a` to `b`.
///
/// ```text
/// range(5, 8)  => [5.0, 6.0, 7.0, 8.0]
/// range(2, -3) => [2.0, 1.0, 0.0, -1.0, -2.0, -3.0]
/// ```
pub fn range<T: Float>(a: i64, b: i64) -> Vec<T> {
    if a <= b {
        (a..=b).map(from_i64::<T>).collect()
    } else {
        (b..=a).rev().map(from_i64::<T>).collect()
    }
}
