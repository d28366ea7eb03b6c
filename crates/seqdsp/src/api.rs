//! Public API for sequence operations.
//!
//! ## Purpose
//!
//! This module gathers the user-facing surface of the crate: every operation
//! is a free function over borrowed slices returning a newly owned `Vec`, plus
//! the small value types that parameterize them.
//!
//! ## Design notes
//!
//! * **Stateless**: No function retains its inputs or touches shared state;
//!   all are safe to call concurrently.
//! * **Total**: No function returns `Result` or panics on empty input,
//!   non-positive counts or zero divisors. Each has a defined default.
//! * **Generic**: Arithmetic is generic over [`SignalFloat`], implemented for
//!   `f32` and `f64`.
//!
//! ## Key concepts
//!
//! | Group            | Functions                                                        |
//! |------------------|------------------------------------------------------------------|
//! | Extrema          | `min_max`, `min_index`, `min_value`, `max_index`, `max_value`, `average` |
//! | Filters          | `average_filter`, `median_filter`, [`SlidingFilter`]             |
//! | Differences      | `derivative`, `nth_derivative`                                   |
//! | Elementwise      | `add`, `sub`, `mul`, `add_offset`, `scale`, `negative`, `abs`, `abs_value` |
//! | Division         | `reciprocal`, `safe_reciprocal`, `div`, `safe_div`, [`ZeroDivisor`] |
//! | Shaping          | `copy`, `reverse`, `repeat`, `every_nth`, `range`                |
//! | Resampling       | `resample`                                                       |

// Publicly re-exported types
pub use crate::algorithms::filters::SlidingFilter;
pub use crate::math::division::ZeroDivisor;
pub use crate::math::extrema::Extrema;
pub use crate::primitives::scalar::SignalFloat;

// Publicly re-exported operations
pub use crate::algorithms::differences::{derivative, nth_derivative};
pub use crate::algorithms::filters::{average_filter, median_filter};
pub use crate::algorithms::resample::resample;
pub use crate::algorithms::shaping::{copy, every_nth, range, repeat, reverse};
pub use crate::math::division::{
    div, div_with, reciprocal, reciprocal_with, safe_div, safe_reciprocal,
};
pub use crate::math::elementwise::{
    abs, abs_value, add, add_offset, mul, negative, scale, sub,
};
pub use crate::math::extrema::{average, max_index, max_value, min_index, min_max, min_value};
