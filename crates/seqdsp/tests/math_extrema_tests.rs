#![cfg(feature = "dev")]
//! Tests for the extrema scan and mean.
//!
//! These tests verify:
//! - First-occurrence tie-breaking for minimum and maximum
//! - Sentinel values for empty input
//! - Agreement between `min_max` and its projections
//! - Mean of empty, singleton and general sequences
//!
//! ## Test Organization
//!
//! 1. **Extrema Scan** - Indices, values, ties, empty input
//! 2. **Projections** - min_index/min_value/max_index/max_value
//! 3. **Mean** - average()

use approx::assert_relative_eq;
use num_traits::Float;

use seqdsp::internals::math::extrema::{
    Extrema, average, max_index, max_value, min_index, min_max, min_value,
};

fn seq<T: Float>(xs: &[f64]) -> Vec<T> {
    xs.iter().map(|&x| T::from(x).unwrap()).collect()
}

// ============================================================================
// Extrema Scan Tests
// ============================================================================

fn check_first_extremes<T: Float + core::fmt::Debug>() {
    let a = seq::<T>(&[3.0, 2.0, 1.0, 3.0, 1.0, 4.0, 4.0]);
    let e = min_max(&a);

    assert_eq!(e.min_index, 2, "Minimum index should be the first 1");
    assert_eq!(e.min_value, T::one());
    assert_eq!(e.max_index, 5, "Maximum index should be the first 4");
    assert_eq!(e.max_value, T::from(4.0).unwrap());
}

/// Test that ties resolve to the lowest index.
///
/// Verifies the documented example `[3,2,1,3,1,4,4] -> (2, 1, 5, 4)`.
#[test]
fn test_min_max_first_occurrence() {
    check_first_extremes::<f64>();
    check_first_extremes::<f32>();
}

/// Test extrema of an empty sequence.
///
/// Verifies the `(-1, +inf, -1, -inf)` sentinel.
#[test]
fn test_min_max_empty() {
    let e = min_max::<f64>(&[]);
    assert_eq!(e.min_index, -1);
    assert!(e.min_value.is_infinite() && e.min_value > 0.0);
    assert_eq!(e.max_index, -1);
    assert!(e.max_value.is_infinite() && e.max_value < 0.0);
    assert_eq!(e, Extrema::empty());

    let e32 = min_max::<f32>(&[]);
    assert_eq!(e32.into_tuple(), (-1, f32::INFINITY, -1, f32::NEG_INFINITY));
}

/// Test extrema of a single element.
///
/// Verifies that index 0 is both minimum and maximum.
#[test]
fn test_min_max_single() {
    let e = min_max(&[7.5f64]);
    assert_eq!(e.into_tuple(), (0, 7.5, 0, 7.5));
}

/// Test extrema when all values are equal.
///
/// Verifies that no strict comparison moves the indices.
#[test]
fn test_min_max_constant() {
    let e = min_max(&[2.0f64; 6]);
    assert_eq!((e.min_index, e.max_index), (0, 0));
}

/// Test extrema with infinities present.
///
/// Verifies that infinite values are ordinary extremes.
#[test]
fn test_min_max_infinities() {
    let e = min_max(&[0.0f64, f64::NEG_INFINITY, 5.0, f64::INFINITY]);
    assert_eq!(e.min_index, 1);
    assert_eq!(e.max_index, 3);
}

// ============================================================================
// Projection Tests
// ============================================================================

/// Test that projections agree with the single scan.
///
/// Verifies each projection on `[5, 0, 5, 9, 5]`.
#[test]
fn test_projections() {
    let a = [5.0f64, 0.0, 5.0, 9.0, 5.0];
    assert_eq!(min_index(&a), 1);
    assert_eq!(min_value(&a), 0.0);
    assert_eq!(max_index(&a), 3);
    assert_eq!(max_value(&a), 9.0);

    let b = [5.0f32, 0.0, 5.0, 9.0, 5.0];
    assert_eq!(min_index(&b), 1);
    assert_eq!(max_value(&b), 9.0);
}

/// Test projections on empty input.
///
/// Verifies sentinels are returned by each projection.
#[test]
fn test_projections_empty() {
    let empty: [f32; 0] = [];
    assert_eq!(min_index(&empty), -1);
    assert_eq!(max_index(&empty), -1);
    assert_eq!(min_value(&empty), f32::INFINITY);
    assert_eq!(max_value(&empty), f32::NEG_INFINITY);
}

// ============================================================================
// Mean Tests
// ============================================================================

/// Test the mean of various sequences.
///
/// Verifies empty -> 0 and ordinary means.
#[test]
fn test_average() {
    assert_eq!(average::<f64>(&[]), 0.0);
    assert_eq!(average(&[8.0f64]), 8.0);
    assert_eq!(average(&[1.0f64, 2.0]), 1.5);
    assert_eq!(average(&[1.0f64, 2.0, 3.0]), 2.0);

    assert_eq!(average::<f32>(&[]), 0.0);
    assert_relative_eq!(average(&[0.1f32, 0.2, 0.3]), 0.2, epsilon = 1e-6);
}
