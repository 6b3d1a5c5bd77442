//! Reusable scratch space for per-column estimation.
//!
//! ## Purpose
//!
//! Every predictor column needs the same scratch vectors: the compacted usable
//! observations, the list of pairwise slopes and a vector for intercepts or
//! residuals. `ColumnBuffer` owns them once and is recycled from column to
//! column, so a fit over `p` columns allocates `O(n^2)` memory in total instead
//! of `O(n^2 * p)`.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Slots grow on demand via `ensure_capacity` and never shrink.
//! * **One per worker**: Buffers are passed explicitly; parallel execution creates one per thread.
//!
//! ## Invariants
//!
//! * Slots are only logically cleared (`clear`) between columns, never deallocated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::{Deref, DerefMut};
use num_traits::Float;

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

    /// Ensure the slot can hold at least `capacity` elements without reallocating.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.0.capacity() < capacity {
            self.0.reserve(capacity - self.0.len());
        }
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Column Buffer
// ============================================================================

/// Scratch vectors for fitting a single predictor column.
#[derive(Debug, Clone)]
pub struct ColumnBuffer<T: Float> {
    /// Predictor values of the usable observations.
    pub xs: Slot<T>,
    /// Response values of the usable observations.
    pub ys: Slot<T>,
    /// Original row index of each usable observation.
    pub rows: Slot<usize>,
    /// Pairwise slopes (consumed by the median).
    pub slopes: Slot<T>,
    /// Per-observation intercepts, later reused for residuals.
    pub scratch: Slot<T>,
}

impl<T: Float> ColumnBuffer<T> {
    /// Create a buffer sized for `n` observations.
    pub fn new(n: usize) -> Self {
        Self {
            xs: Slot::new(n),
            ys: Slot::new(n),
            rows: Slot::new(n),
            slopes: Slot::new(pair_count(n)),
            scratch: Slot::new(n),
        }
    }

    /// Clear every slot, keeping the allocations.
    pub fn reset(&mut self) {
        self.xs.clear();
        self.ys.clear();
        self.rows.clear();
        self.slopes.clear();
        self.scratch.clear();
    }
}

/// Number of unordered pairs among `n` observations.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n.saturating_sub(1).saturating_mul(n) / 2
}
