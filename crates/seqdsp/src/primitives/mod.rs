//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the scalar abstraction, SIMD lane kernels, window
//! clamping, scratch buffers and order-statistic selection used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Scalar trait and lane kernels.
pub mod scalar;

/// Window clamping.
pub mod window;

/// Order-statistic selection.
pub mod sorting;

/// Buffer management.
pub mod buffer;
