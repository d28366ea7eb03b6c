//! Reciprocal and division with an explicit zero-divisor policy.
//!
//! ## Purpose
//!
//! This module divides sequences elementwise. What happens when a divisor is
//! exactly zero is chosen by the caller through [`ZeroDivisor`].
//!
//! ## Design notes
//!
//! * **Policy, not error**: Division by zero is never reported as a failure.
//!   It either follows IEEE-754 (`±inf` or NaN) or yields a replacement value.
//! * **Exact zero**: Only divisors equal to zero (`0.0` or `-0.0`) trigger the
//!   replacement; subnormals are divided normally.
//!
//! ## Invariants
//!
//! * `div`/`safe_div` operate over the shorter of the two lengths.
//! * `reciprocal`/`safe_reciprocal` preserve the input length.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Zero-Divisor Policy
// ============================================================================

/// Policy for quotients whose divisor is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZeroDivisor<T> {
    /// Divide anyway and keep the IEEE-754 result (default).
    #[default]
    Propagate,

    /// Yield the given value instead of dividing.
    Replace(T),
}

impl<T: Float> ZeroDivisor<T> {
    /// Compute `num / den` under this policy.
    #[inline]
    pub fn divide(&self, num: T, den: T) -> T {
        match *self {
            Self::Replace(replacement) if den == T::zero() => replacement,
            _ => num / den,
        }
    }
}

// ============================================================================
// Reciprocal
// ============================================================================

/// Reciprocal of every element of `seq` under `policy`.
pub fn reciprocal_with<T: Float>(seq: &[T], policy: ZeroDivisor<T>) -> Vec<T> {
    seq.iter().map(|&v| policy.divide(T::one(), v)).collect()
}

/// Reciprocal of every element of `seq`; zeros produce infinities.
#[inline]
pub fn reciprocal<T: Float>(seq: &[T]) -> Vec<T> {
    reciprocal_with(seq, ZeroDivisor::Propagate)
}

/// Reciprocal of every element of `seq`; zeros produce `replacement`.
#[inline]
pub fn safe_reciprocal<T: Float>(seq: &[T], replacement: T) -> Vec<T> {
    reciprocal_with(seq, ZeroDivisor::Replace(replacement))
}

// ============================================================================
// Division
// ============================================================================

/// Elementwise `a[i] / b[i]` under `policy`, over the shorter length.
pub fn div_with<T: Float>(a: &[T], b: &[T], policy: ZeroDivisor<T>) -> Vec<T> {
    a.iter()
        .zip(b)
        .map(|(&num, &den)| policy.divide(num, den))
        .collect()
}

/// Elementwise `a[i] / b[i]` over the shorter length; zero divisors follow IEEE-754.
#[inline]
pub fn div<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    div_with(a, b, ZeroDivisor::Propagate)
}

/// Elementwise `a[i] / b[i]` over the shorter length; zero divisors produce `replacement`.
#[inline]
pub fn safe_div<T: Float>(a: &[T], b: &[T], replacement: T) -> Vec<T> {
    div_with(a, b, ZeroDivisor::Replace(replacement))
}
