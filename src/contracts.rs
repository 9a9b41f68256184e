// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring invariants.
//!
//! Debug-mode assertions that every scorer calls on its own result:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** in tests and fuzzing, at the function that broke
//!    the invariant rather than three calls later in the composite
//!
//! | Contract                      | Invariant                                   |
//! |-------------------------------|---------------------------------------------|
//! | `check_unit_interval`         | normalized scores lie in [0, 1], never NaN  |
//! | `check_edit_distance_bounded` | `len diff ≤ distance ≤ max(len1, len2)`     |
//!
//! Jaro-Winkler is not checked: a caller-supplied scaling factor above 0.25
//! pushes it past 1.0.

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// The largest Winkler bonus (`MAX_PREFIX_LEN * MAX_SCALING_FACTOR`) must not
/// exceed 1, or `jaro + bonus * (1 - jaro)` could leave [0, 1].
const _: () = {
    const BONUS: f64 = crate::jaro::MAX_PREFIX_LEN as f64 * crate::jaro::MAX_SCALING_FACTOR;
    assert!(BONUS <= 1.0);
    assert!(crate::jaro::DEFAULT_SCALING_FACTOR <= crate::jaro::MAX_SCALING_FACTOR);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a normalized score is a real number in [0, 1].
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN or outside the unit interval.
#[inline]
pub fn check_unit_interval(scorer: &str, score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: {} returned {} outside [0, 1]",
        scorer,
        score
    );
}

/// Check that an edit distance respects its length bounds.
///
/// # Panics (debug builds only)
/// Panics if `distance` is below the length difference or above the longer
/// length.
#[inline]
pub fn check_edit_distance_bounded(distance: usize, len1: usize, len2: usize) {
    debug_assert!(
        distance >= len1.abs_diff(len2),
        "Contract violation: edit distance {} < length difference {}",
        distance,
        len1.abs_diff(len2)
    );
    debug_assert!(
        distance <= len1.max(len2),
        "Contract violation: edit distance {} > max length {}",
        distance,
        len1.max(len2)
    );
}
