//! Elementwise arithmetic over sequences.
//!
//! ## Purpose
//!
//! This module provides the n-ary combinators (`add`, `sub`, `mul`) and the
//! scalar-broadcast maps (`add_offset`, `scale`, `negative`, `abs`).
//!
//! ## Design notes
//!
//! * **Shortest-length broadcast**: N-ary combinators operate over the index
//!   range common to all operands and silently drop the rest.
//! * **Left fold**: `add` accumulates from `0` and `mul` from `1`, operands in
//!   the order given, so results match a scalar fold bit for bit (including the
//!   sign of zero).
//! * **Lane kernels**: Accumulation goes through [`SignalFloat`] so `f32` and
//!   `f64` take the SIMD path.
//!
//! ## Key concepts
//!
//! * **Operands**: Any ordered collection of sequence views (`&[Vec<T>]`,
//!   `&[&[T]]`, arrays of either).
//! * **Base operand**: For `sub`, the first sequence is the minuend and every
//!   later sequence is subtracted from it.
//!
//! ## Invariants
//!
//! * Zero operands produce an empty sequence.
//! * Output length is the minimum operand length.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::scalar::SignalFloat;

// ============================================================================
// N-ary Combinators
// ============================================================================

// Length of the index range shared by all operands (0 when there are none).
#[inline]
fn common_len<T, S: AsRef<[T]>>(seqs: &[S]) -> usize {
    seqs.iter().map(|s| s.as_ref().len()).min().unwrap_or(0)
}

/// Elementwise sum of all sequences in `seqs`, truncated to the shortest.
pub fn add<T: SignalFloat, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let n = common_len::<T, S>(seqs);
    let mut sum = vec![T::zero(); n];
    for s in seqs {
        T::add_assign_lanes(&mut sum, s.as_ref());
    }
    sum
}

/// Subtract every later sequence in `seqs` from the first, truncated to the shortest.
pub fn sub<T: SignalFloat, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let Some((base, rest)) = seqs.split_first() else {
        return Vec::new();
    };

    let n = common_len::<T, S>(seqs);
    let mut diff = base.as_ref()[..n].to_vec();
    for s in rest {
        T::sub_assign_lanes(&mut diff, s.as_ref());
    }
    diff
}

/// Elementwise product of all sequences in `seqs`, truncated to the shortest.
pub fn mul<T: SignalFloat, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let n = common_len::<T, S>(seqs);
    let mut product = vec![T::one(); n];
    for s in seqs {
        T::mul_assign_lanes(&mut product, s.as_ref());
    }
    product
}

// ============================================================================
// Scalar Broadcast
// ============================================================================

/// Add `offset` to every element of `seq`.
pub fn add_offset<T: SignalFloat>(seq: &[T], offset: T) -> Vec<T> {
    let mut out = seq.to_vec();
    T::offset_lanes(&mut out, offset);
    out
}

/// Multiply every element of `seq` by `factor`.
pub fn scale<T: SignalFloat>(seq: &[T], factor: T) -> Vec<T> {
    let mut out = seq.to_vec();
    T::scale_lanes(&mut out, factor);
    out
}

/// Negate every element of `seq`.
pub fn negative<T: Float>(seq: &[T]) -> Vec<T> {
    seq.iter().map(|&v| -v).collect()
}

/// Absolute value of every element of `seq`, as defined by [`abs_value`].
pub fn abs<T: Float>(seq: &[T]) -> Vec<T> {
    seq.iter().map(|&v| abs_value(v)).collect()
}

/// Absolute value by comparison: `x` if `x >= 0`, otherwise `-x`.
///
/// NaN fails the comparison and is returned negated; no NaN normalization
/// is performed. Both infinities map to `+inf`.
#[inline]
pub fn abs_value<T: Float>(x: T) -> T {
    if x >= T::zero() { x } else { -x }
}
