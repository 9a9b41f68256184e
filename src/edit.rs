// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance, plain and bounded.
//!
//! [`edit_distance`] fills the full (len1+1) × (len2+1) table.
//!
//! [`edit_distance_within`] answers the cheaper question "within `max`
//! edits?" with two early exits:
//! 1. `|len(a) - len(b)|` is a lower bound on edit distance. If the lengths
//!    differ by more than `max`, skip the DP entirely.
//! 2. Row minima never decrease. Once every cell in a row exceeds `max`,
//!    the final cell will too.
//!
//! All lengths are in `char`s. `"café"` is four units, not five bytes.

use crate::contracts::check_edit_distance_bounded;

/// Levenshtein distance with unit costs for insert, delete and substitute.
///
/// Empty inputs short-circuit: an empty `s2` returns `len(s1)` (checked
/// first, so two empty strings return 0), an empty `s1` returns `len(s2)`.
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let m = a.len();
    let n = b.len();

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }

    // Columns outer, rows inner. Each cell only reads the cell above, the
    // cell to the left and the diagonal, all filled by this point.
    for j in 1..=n {
        for i in 1..=m {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1) // deletion
                .min(d[i][j - 1] + 1) // insertion
                .min(d[i - 1][j - 1] + cost); // substitution
        }
    }

    let distance = d[m][n];
    check_edit_distance_bounded(distance, m, n);
    distance
}

/// Edit distance scaled to a similarity: `1 - distance / max(len1, len2)`.
///
/// Two empty strings are identical, so they score 1.0 rather than dividing
/// by zero.
pub fn edit_similarity(s1: &str, s2: &str) -> f64 {
    let longest = s1.chars().count().max(s2.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(s1, s2) as f64 / longest as f64
}

/// Are these strings within `max` edits of each other?
///
/// Equivalent to `edit_distance(a, b) <= max`, but uses a single DP row and
/// bails out as soon as the answer is known to be `false`.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
