//! Scalar trait and elementwise lane kernels.
//!
//! ## Purpose
//!
//! This module defines [`SignalFloat`], the element type accepted by every
//! operation in the crate, together with the elementwise kernels
//! ("lane kernels") that the arithmetic layer is built on.
//!
//! ## Design notes
//!
//! * **Generic**: Every kernel has a scalar default written against `Float`.
//! * **Specialized**: `f64` and `f32` override the kernels with `wide` SIMD
//!   vectors (`f64x2`, `f32x8`).
//! * **Exact**: Lanes perform the same IEEE-754 operation as the scalar loop,
//!   so both paths produce bit-identical results.
//!
//! ## Key concepts
//!
//! * **Common prefix**: Binary kernels only touch `min(acc.len(), rhs.len())`
//!   leading elements; the remainder of `acc` is left untouched.
//! * **Head/tail split**: SIMD kernels process full lanes first and finish the
//!   tail with scalar code.
//!
//! ## Non-goals
//!
//! * This module does not allocate; callers own the output buffers.
//! * This module does not implement reductions (sums, products over a slice).

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Generic Kernels
// ============================================================================

/// Scalar in-place `acc[i] = acc[i] + rhs[i]` over the common prefix.
#[inline]
pub fn add_assign_scalar<T: Float>(acc: &mut [T], rhs: &[T]) {
    for (a, &b) in acc.iter_mut().zip(rhs) {
        *a = *a + b;
    }
}

/// Scalar in-place `acc[i] = acc[i] - rhs[i]` over the common prefix.
#[inline]
pub fn sub_assign_scalar<T: Float>(acc: &mut [T], rhs: &[T]) {
    for (a, &b) in acc.iter_mut().zip(rhs) {
        *a = *a - b;
    }
}

/// Scalar in-place `acc[i] = acc[i] * rhs[i]` over the common prefix.
#[inline]
pub fn mul_assign_scalar<T: Float>(acc: &mut [T], rhs: &[T]) {
    for (a, &b) in acc.iter_mut().zip(rhs) {
        *a = *a * b;
    }
}

/// Scalar in-place `acc[i] = acc[i] * factor`.
#[inline]
pub fn scale_scalar<T: Float>(acc: &mut [T], factor: T) {
    for a in acc.iter_mut() {
        *a = *a * factor;
    }
}

/// Scalar in-place `acc[i] = acc[i] + offset`.
#[inline]
pub fn offset_scalar<T: Float>(acc: &mut [T], offset: T) {
    for a in acc.iter_mut() {
        *a = *a + offset;
    }
}

// ============================================================================
// Specialized Kernels (SIMD)
// ============================================================================

// Generates a binary lane kernel for one SIMD vector type.
macro_rules! simd_binary_kernel {
    ($name:ident, $scalar:ty, $vector:ty, $lanes:expr, $op:tt) => {
        #[doc = concat!(
            "SIMD in-place `acc[i] = acc[i] ", stringify!($op), " rhs[i]` over the common prefix (",
            stringify!($scalar), ")."
        )]
        #[inline]
        pub fn $name(acc: &mut [$scalar], rhs: &[$scalar]) {
            let n = acc.len().min(rhs.len());
            let split = n - n % $lanes;
            let (acc_head, acc_tail) = acc[..n].split_at_mut(split);
            let (rhs_head, rhs_tail) = rhs[..n].split_at(split);

            let mut lhs_lane = [0.0 as $scalar; $lanes];
            let mut rhs_lane = [0.0 as $scalar; $lanes];
            for (a, b) in acc_head
                .chunks_exact_mut($lanes)
                .zip(rhs_head.chunks_exact($lanes))
            {
                lhs_lane.copy_from_slice(a);
                rhs_lane.copy_from_slice(b);
                let v = <$vector>::new(lhs_lane) $op <$vector>::new(rhs_lane);
                a.copy_from_slice(&v.to_array());
            }

            for (a, &b) in acc_tail.iter_mut().zip(rhs_tail) {
                *a = *a $op b;
            }
        }
    };
}

// Generates a broadcast lane kernel (one operand splatted) for one SIMD vector type.
macro_rules! simd_broadcast_kernel {
    ($name:ident, $scalar:ty, $vector:ty, $lanes:expr, $op:tt) => {
        #[doc = concat!(
            "SIMD in-place `acc[i] = acc[i] ", stringify!($op), " k` (", stringify!($scalar), ")."
        )]
        #[inline]
        pub fn $name(acc: &mut [$scalar], k: $scalar) {
            let split = acc.len() - acc.len() % $lanes;
            let (head, tail) = acc.split_at_mut(split);
            let splat = <$vector>::splat(k);

            let mut lane = [0.0 as $scalar; $lanes];
            for a in head.chunks_exact_mut($lanes) {
                lane.copy_from_slice(a);
                let v = <$vector>::new(lane) $op splat;
                a.copy_from_slice(&v.to_array());
            }

            for a in tail.iter_mut() {
                *a = *a $op k;
            }
        }
    };
}

simd_binary_kernel!(add_assign_simd_f64, f64, f64x2, 2, +);
simd_binary_kernel!(sub_assign_simd_f64, f64, f64x2, 2, -);
simd_binary_kernel!(mul_assign_simd_f64, f64, f64x2, 2, *);
simd_broadcast_kernel!(scale_simd_f64, f64, f64x2, 2, *);
simd_broadcast_kernel!(offset_simd_f64, f64, f64x2, 2, +);

simd_binary_kernel!(add_assign_simd_f32, f32, f32x8, 8, +);
simd_binary_kernel!(sub_assign_simd_f32, f32, f32x8, 8, -);
simd_binary_kernel!(mul_assign_simd_f32, f32, f32x8, 8, *);
simd_broadcast_kernel!(scale_simd_f32, f32, f32x8, 8, *);
simd_broadcast_kernel!(offset_simd_f32, f32, f32x8, 8, +);

// ============================================================================
// Scalar Trait
// ============================================================================

/// Real scalar type accepted by all sequence operations.
///
/// Any `Float` can opt in with an empty impl and gets the scalar kernels;
/// `f32` and `f64` dispatch to SIMD.
pub trait SignalFloat: Float + Debug {
    /// In-place elementwise addition over the common prefix.
    #[inline]
    fn add_assign_lanes(acc: &mut [Self], rhs: &[Self]) {
        add_assign_scalar(acc, rhs)
    }

    /// In-place elementwise subtraction over the common prefix.
    #[inline]
    fn sub_assign_lanes(acc: &mut [Self], rhs: &[Self]) {
        sub_assign_scalar(acc, rhs)
    }

    /// In-place elementwise multiplication over the common prefix.
    #[inline]
    fn mul_assign_lanes(acc: &mut [Self], rhs: &[Self]) {
        mul_assign_scalar(acc, rhs)
    }

    /// In-place multiplication by a constant.
    #[inline]
    fn scale_lanes(acc: &mut [Self], factor: Self) {
        scale_scalar(acc, factor)
    }

    /// In-place addition of a constant.
    #[inline]
    fn offset_lanes(acc: &mut [Self], offset: Self) {
        offset_scalar(acc, offset)
    }
}

impl SignalFloat for f64 {
    #[inline]
    fn add_assign_lanes(acc: &mut [f64], rhs: &[f64]) {
        log::trace!("add_assign_lanes: f64x2 path, len={}", acc.len().min(rhs.len()));
        add_assign_simd_f64(acc, rhs)
    }

    #[inline]
    fn sub_assign_lanes(acc: &mut [f64], rhs: &[f64]) {
        log::trace!("sub_assign_lanes: f64x2 path, len={}", acc.len().min(rhs.len()));
        sub_assign_simd_f64(acc, rhs)
    }

    #[inline]
    fn mul_assign_lanes(acc: &mut [f64], rhs: &[f64]) {
        log::trace!("mul_assign_lanes: f64x2 path, len={}", acc.len().min(rhs.len()));
        mul_assign_simd_f64(acc, rhs)
    }

    #[inline]
    fn scale_lanes(acc: &mut [f64], factor: f64) {
        log::trace!("scale_lanes: f64x2 path, len={}", acc.len());
        scale_simd_f64(acc, factor)
    }

    #[inline]
    fn offset_lanes(acc: &mut [f64], offset: f64) {
        log::trace!("offset_lanes: f64x2 path, len={}", acc.len());
        offset_simd_f64(acc, offset)
    }
}

impl SignalFloat for f32 {
    #[inline]
    fn add_assign_lanes(acc: &mut [f32], rhs: &[f32]) {
        log::trace!("add_assign_lanes: f32x8 path, len={}", acc.len().min(rhs.len()));
        add_assign_simd_f32(acc, rhs)
    }

    #[inline]
    fn sub_assign_lanes(acc: &mut [f32], rhs: &[f32]) {
        log::trace!("sub_assign_lanes: f32x8 path, len={}", acc.len().min(rhs.len()));
        sub_assign_simd_f32(acc, rhs)
    }

    #[inline]
    fn mul_assign_lanes(acc: &mut [f32], rhs: &[f32]) {
        log::trace!("mul_assign_lanes: f32x8 path, len={}", acc.len().min(rhs.len()));
        mul_assign_simd_f32(acc, rhs)
    }

    #[inline]
    fn scale_lanes(acc: &mut [f32], factor: f32) {
        log::trace!("scale_lanes: f32x8 path, len={}", acc.len());
        scale_simd_f32(acc, factor)
    }

    #[inline]
    fn offset_lanes(acc: &mut [f32], offset: f32) {
        log::trace!("offset_lanes: f32x8 path, len={}", acc.len());
        offset_simd_f32(acc, offset)
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert a count or index to `T`, yielding NaN if it is not representable.
#[inline]
pub fn from_count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Convert a signed integer to `T`, yielding NaN if it is not representable.
#[inline]
pub fn from_i64<T: Float>(v: i64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
