//! # seqdsp: elementary operations on 1-D numeric sequences
//!
//! A small, dependency-light library of pure transforms over finite ordered
//! sequences (1-D signals): extrema search, sliding mean and median filters,
//! finite differences, elementwise arithmetic across any number of sequences,
//! safe reciprocal and division, and a piecewise-linear resampler that
//! preserves endpoints.
//!
//! Every operation borrows its inputs and returns a newly allocated `Vec`.
//! Nothing is mutated in place and nothing is cached between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqdsp::prelude::*;
//!
//! let signal = vec![2.0, 1.0, 30.0, 50.0, 44.0];
//!
//! // Sliding filters shrink the sequence by `width - 1`
//! assert_eq!(median_filter(&signal, 3), vec![2.0, 30.0, 44.0]);
//! assert_eq!(average_filter(&[2.0, 4.0, 6.0, 8.0], 2), vec![3.0, 5.0, 7.0]);
//!
//! // Extrema report the first occurrence
//! let e = min_max(&[3.0, 2.0, 1.0, 3.0, 1.0, 4.0, 4.0]);
//! assert_eq!((e.min_index, e.max_index), (2, 5));
//!
//! // Elementwise combinators use the shortest common length
//! let sum: Vec<f64> = add(&[vec![1.0, 2.0], vec![4.0, 7.0, 9.0]]);
//! assert_eq!(sum, vec![5.0, 9.0]);
//!
//! // Resampling keeps the endpoints
//! assert_eq!(resample(&[100.0, 200.0], 3), vec![100.0, 150.0, 200.0]);
//! ```
//!
//! ### Edge Cases Are Values, Not Errors
//!
//! No function returns a `Result`. Empty inputs, non-positive counts and zero
//! divisors all have a defined outcome:
//!
//! ```rust
//! use seqdsp::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! assert_eq!(min_max(&empty).min_index, -1);
//! assert_eq!(average(&empty), 0.0);
//! assert!(average_filter(&empty, 3).is_empty());
//! assert!(repeat(1.5, 0).is_empty());
//!
//! assert_eq!(safe_reciprocal(&[0.0], 123.0), vec![123.0]);
//! assert_eq!(reciprocal(&[0.0]), vec![f64::INFINITY]);
//! ```
//!
//! ### Choosing Behavior at Runtime
//!
//! ```rust
//! use seqdsp::prelude::*;
//!
//! let filter = SlidingFilter::Median;
//! assert_eq!(filter.apply(&[1.0_f32, 3.0, 2.0], 2), vec![3.0, 3.0]);
//!
//! let policy = ZeroDivisor::Replace(-1.0);
//! assert_eq!(div_with(&[1.0, 2.0], &[0.0, 4.0], policy), vec![-1.0, 0.5]);
//! ```
//!
//! ## Precision
//!
//! All operations are generic over [`SignalFloat`](prelude::SignalFloat),
//! implemented for `f32` and `f64` with identical semantics. Elementwise
//! accumulation runs on SIMD lanes (`wide`) for both; results are bit-identical
//! to scalar evaluation.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! seqdsp = { version = "0.3", default-features = false }
//! ```
//!
//! The crate still requires `alloc` since every operation returns a `Vec`.
//!
//! ## Logging
//!
//! Degenerate paths (a filter width that collapses to a copy, trivial
//! resampling) and SIMD dispatch emit `trace`-level records through the `log`
//! facade. No logger is installed by the crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - scalar trait, lane kernels, windows and buffers.
mod primitives;

// Layer 2: Math - pointwise and whole-sequence arithmetic.
mod math;

// Layer 3: Algorithms - filters, differences, resampling and shaping.
mod algorithms;

// Public operation surface.
mod api;

// Standard seqdsp prelude.
pub mod prelude {
    pub use crate::api::*;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
