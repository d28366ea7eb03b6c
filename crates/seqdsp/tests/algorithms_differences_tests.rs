#![cfg(feature = "dev")]
//! Tests for finite differences.
//!
//! These tests verify:
//! - Forward differences of short sequences
//! - Zero-filled derivatives of empty and singleton sequences
//! - Repeated application down to the degenerate lengths
//!
//! ## Test Organization
//!
//! 1. **Derivative** - Single step
//! 2. **Nth Derivative** - Repeated steps and identity for n <= 0

use seqdsp::internals::algorithms::differences::{derivative, nth_derivative};

// ============================================================================
// Derivative Tests
// ============================================================================

/// Test single-step forward differences.
///
/// Verifies that length shrinks by one and length <= 1 zero-fills.
#[test]
fn test_derivative() {
    assert!(derivative::<f64>(&[]).is_empty());
    assert_eq!(derivative(&[1.0f64]), vec![0.0]);
    assert_eq!(derivative(&[1.0f64, 3.0]), vec![2.0]);
    assert_eq!(derivative(&[1.0f64, 3.0, 4.0]), vec![2.0, 1.0]);
    assert_eq!(derivative(&[1.0f64, 3.0, 4.0, 2.0]), vec![2.0, 1.0, -2.0]);

    assert_eq!(derivative(&[1.0f32, 3.0, 4.0, 2.0]), vec![2.0, 1.0, -2.0]);
}

/// Test that a singleton is zero-filled regardless of its value.
#[test]
fn test_derivative_singleton_is_zero() {
    assert_eq!(derivative(&[f64::NAN]), vec![0.0]);
    assert_eq!(derivative(&[-7.5f32]), vec![0.0]);
}

// ============================================================================
// Nth Derivative Tests
// ============================================================================

/// Test repeated differences.
///
/// Verifies orders -1 through 5 on `[1, 3, 4, 2]`.
#[test]
fn test_nth_derivative() {
    let a = [1.0f64, 3.0, 4.0, 2.0];
    assert_eq!(nth_derivative(&a, -1), vec![1.0, 3.0, 4.0, 2.0]);
    assert_eq!(nth_derivative(&a, 0), vec![1.0, 3.0, 4.0, 2.0]);
    assert_eq!(nth_derivative(&a, 1), vec![2.0, 1.0, -2.0]);
    assert_eq!(nth_derivative(&a, 2), vec![-1.0, -3.0]);
    assert_eq!(nth_derivative(&a, 3), vec![-2.0]);
    assert_eq!(nth_derivative(&a, 4), vec![0.0]);
    assert_eq!(nth_derivative(&a, 5), vec![0.0]);
}

/// Test repeated differences of degenerate inputs.
///
/// Verifies empty stays empty and a singleton becomes `[0]`.
#[test]
fn test_nth_derivative_degenerate() {
    for n in 1..5 {
        assert!(nth_derivative::<f32>(&[], n).is_empty());
        assert_eq!(nth_derivative(&[9.0f32], n), vec![0.0]);
    }
    assert_eq!(nth_derivative(&[9.0f32], 0), vec![9.0]);
}

/// Test a large order on a short sequence.
///
/// Verifies the result settles on `[0]` without iterating `n` times.
#[test]
fn test_nth_derivative_large_order() {
    assert_eq!(nth_derivative(&[1.0f64, 5.0], isize::MAX), vec![0.0]);
    assert!(nth_derivative(&[1.0f64], isize::MAX).iter().all(|&v| v == 0.0));
}

/// Test that order zero returns independent storage.
#[test]
fn test_nth_derivative_zero_is_copy() {
    let mut a = vec![1.0f64, 2.0, 4.0];
    let d = nth_derivative(&a, 0);
    a[0] = 100.0;
    assert_eq!(d, vec![1.0, 2.0, 4.0]);
}
