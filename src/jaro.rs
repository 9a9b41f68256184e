// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro and Jaro-Winkler similarity.
//!
//! Jaro counts characters of `s1` that appear in `s2` within a sliding
//! window, then penalizes matches that appear in a different order
//! (transpositions). Jaro-Winkler adds a bonus for a shared prefix of up to
//! four characters, on the theory that typos cluster at the end of words.
//!
//! Matching is first-match, not best-match: each character of `s1` takes the
//! leftmost unmatched equal character in its window.

use crate::contracts::check_unit_interval;

/// Prefix bonus weight used when callers don't pick one.
pub const DEFAULT_SCALING_FACTOR: f64 = 0.1;

/// Largest scaling factor that keeps Jaro-Winkler within [0, 1].
///
/// With a four-character prefix, `4 * 0.25 * (1 - jaro) = 1 - jaro`.
pub const MAX_SCALING_FACTOR: f64 = 0.25;

/// Longest common prefix that earns the Winkler bonus.
pub const MAX_PREFIX_LEN: usize = 4;

/// Jaro similarity in [0, 1].
///
/// Identical strings (including two empty strings) short-circuit to 1.0.
/// Otherwise an empty side can't match anything and scores 0.0.
pub fn jaro_distance(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }

    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let len1 = a.len();
    let len2 = b.len();

    if len1 == 0 || len2 == 0 {
        return 0.0;
    }

    let max_dist = (len1 / 2).saturating_sub(1);

    let mut matched1 = vec![false; len1];
    let mut matched2 = vec![false; len2];
    let mut matches = 0usize;

    for (i, &ch) in a.iter().enumerate() {
        let lo = i.saturating_sub(max_dist);
        let hi = (i + max_dist).min(len2 - 1);
        // lo > hi makes the range empty, which is what we want when the
        // window falls off the end of s2.
        for j in lo..=hi {
            if !matched2[j] && b[j] == ch {
                matched1[i] = true;
                matched2[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both match lists in order; each out-of-order pair is half a
    // transposition.
    let mut k = 0usize;
    let mut half_transpositions = 0usize;
    for (i, &ch) in a.iter().enumerate() {
        if !matched1[i] {
            continue;
        }
        while !matched2[k] {
            k += 1;
        }
        if ch != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let transpositions = half_transpositions as f64 / 2.0;
    let score = (m / len1 as f64 + m / len2 as f64 + (m - transpositions) / m) / 3.0;
    check_unit_interval("jaro_distance", score);
    score
}

/// Jaro-Winkler similarity: `jaro + prefix * scaling_factor * (1 - jaro)`.
///
/// `prefix` is the common prefix length capped at [`MAX_PREFIX_LEN`]. The
/// scaling factor is not validated here; anything above
/// [`MAX_SCALING_FACTOR`] can push the result past 1.0. Use
/// [`ScoringConfig::new`](crate::ScoringConfig::new) for a checked factor.
pub fn jaro_winkler(s1: &str, s2: &str, scaling_factor: f64) -> f64 {
    let jaro = jaro_distance(s1, s2);
    let prefix = common_prefix_len(s1, s2, MAX_PREFIX_LEN);
    jaro + prefix as f64 * scaling_factor * (1.0 - jaro)
}

/// Number of leading characters shared by `s1` and `s2`, at most `limit`.
pub fn common_prefix_len(s1: &str, s2: &str, limit: usize) -> usize {
    s1.chars()
        .zip(s2.chars())
        .take(limit)
        .take_while(|(a, b)| a == b)
        .count()
}
