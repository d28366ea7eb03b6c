//! Scratch buffers for windowed operations.
//!
//! ## Purpose
//!
//! This module provides the reusable working memory of the median filter: one
//! buffer is allocated per call and recycled for every window position, so the
//! filter performs a single scratch allocation regardless of input length.
//!
//! ## Design notes
//!
//! * **Per-call ownership**: A scratch buffer is created inside the operation
//!   that uses it and never escapes it. Concurrent calls never share one.
//! * **Copy-in**: Window contents are copied into the buffer before they are
//!   reordered, so the caller's sequence is never touched.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between windows, not deallocated.
//! * Capacity is fixed at construction to the window width.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

impl<T: Copy> Slot<T> {
    /// Replace the slot contents with `slice`, reusing capacity.
    #[inline]
    pub fn load(&mut self, slice: &[T]) -> &mut [T] {
        self.0.clear();
        self.0.extend_from_slice(slice);
        &mut self.0
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ============================================================================
// WindowScratch - Working Memory for the Median Filter
// ============================================================================

/// Scratch space holding one window of a sliding filter.
#[derive(Debug, Clone)]
pub struct WindowScratch<T> {
    /// Copy of the current window, reordered in place by selection.
    pub window: Slot<T>,
}

impl<T: Copy> WindowScratch<T> {
    /// Create scratch space for windows of `width` elements.
    pub fn with_width(width: usize) -> Self {
        Self {
            window: Slot::new(width),
        }
    }

    /// Copy `window` into the scratch buffer and return it for reordering.
    #[inline]
    pub fn fill(&mut self, window: &[T]) -> &mut [T] {
        debug_assert!(
            window.len() <= self.window.capacity(),
            "WindowScratch::fill: window exceeds scratch width"
        );
        self.window.load(window)
    }
}
