//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pointwise and whole-sequence arithmetic:
//! - Extrema and mean
//! - Elementwise n-ary combinators and scalar broadcasts
//! - Reciprocal and division with a zero-divisor policy
//!
//! These are reusable building blocks with no windowing or resizing logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Extrema scan and mean.
pub mod extrema;

/// Elementwise arithmetic.
pub mod elementwise;

/// Reciprocal and division.
pub mod division;
