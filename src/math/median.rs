//! Order-statistic reductions: median and Median Absolute Deviation (MAD).
//!
//! ## Purpose
//!
//! This module provides the median that turns the pairwise slopes and the
//! per-observation intercepts into the Theil-Sen coefficients, and the MAD
//! used as a robust residual scale in diagnostics.
//!
//! ## Design notes
//!
//! * **Algorithm**: Quickselect (`select_nth_unstable_by`) for O(n) selection.
//! * **In-place**: Inputs are reordered; callers pass scratch buffers.
//! * **Even sizes**: Mean of the two middle order statistics.
//!
//! ## Invariants
//!
//! * The median of an empty slice is NaN.
//! * MAD >= 0 for any non-empty input.
//!
//! ## Non-goals
//!
//! * NaN inputs are not skipped here; missing values are removed upstream.

use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Compute the median in place using Quickselect.
///
/// Returns NaN for an empty slice.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::nan();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value of the lower partition is the other middle statistic
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / (T::one() + T::one())
    } else {
        upper
    }
}

/// Compute the Median Absolute Deviation in place.
///
/// ```text
/// MAD = median(|r_i - median(r)|)
/// ```
///
/// Returns NaN for an empty slice.
#[inline]
pub fn compute_mad<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::nan();
    }

    let median = median_inplace(vals);
    for val in vals.iter_mut() {
        *val = (*val - median).abs();
    }

    median_inplace(vals)
}
