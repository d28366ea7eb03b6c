//! Finite differences.
//!
//! `derivative` takes forward differences of neighboring elements;
//! `nth_derivative` applies it repeatedly. Sequences of length 0 or 1 have a
//! zero-filled derivative of the same length, so repeated application settles
//! on `[]` or `[0]` instead of failing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Forward differences `seq[i + 1] - seq[i]`, one element shorter than `seq`.
///
/// For sequences of length 0 or 1 a zero-filled sequence of the same length
/// is returned.
pub fn derivative<T: Float>(seq: &[T]) -> Vec<T> {
    if seq.len() <= 1 {
        return vec![T::zero(); seq.len()];
    }

    seq.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Apply [`derivative`] `n` times. For `n <= 0` a copy of `seq` is returned.
pub fn nth_derivative<T: Float>(seq: &[T], n: isize) -> Vec<T> {
    if n <= 0 {
        return seq.to_vec();
    }

    let mut d = derivative(seq);
    for _ in 1..n {
        // The next step zero-fills and every later one keeps it that way.
        if d.len() <= 1 {
            d.fill(T::zero());
            break;
        }
        d = derivative(&d);
    }
    d
}
