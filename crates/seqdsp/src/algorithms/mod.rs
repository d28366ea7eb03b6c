//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the operations that change the length or shape of a
//! sequence:
//! - Sliding mean and median filters
//! - Finite differences
//! - Piecewise-linear resampling
//! - Copying, reversal, decimation and generation
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sliding mean and median filters.
pub mod filters;

/// Finite differences.
pub mod differences;

/// Resampling.
pub mod resample;

/// Sequence shaping.
pub mod shaping;
