//! Window clamping for sliding filters.
//!
//! This module turns a requested (signed) window width and an input length
//! into the effective window used by the mean and median filters. Widths are
//! clamped, never rejected.

/// Effective window of a sliding filter over a sequence of length `len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlidingWindow {
    // The filter degenerates to a copy of the input (width <= 1 or empty input).
    Passthrough,

    // The filter slides a window of `width >= 2` elements, producing `outputs` values.
    Sliding { width: usize, outputs: usize },
}

impl SlidingWindow {
    // Clamp `width` to `[.., len]` and classify the result.
    #[inline]
    pub fn clamp(width: isize, len: usize) -> Self {
        let effective = match usize::try_from(width) {
            Ok(w) => w.min(len),
            Err(_) => 0,
        };

        if effective <= 1 {
            log::trace!("SlidingWindow: width={width}, len={len} degenerates to a copy");
            return Self::Passthrough;
        }

        Self::Sliding {
            width: effective,
            outputs: len - effective + 1,
        }
    }
}
