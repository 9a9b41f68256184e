// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the similarity scorers.
//!
//! Arbitrary bytes become arbitrary Unicode. Every normalized score must land
//! in [0, 1], never NaN, and edit distance must stay between the length
//! difference and the longer length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use likeness::{
    breakdown, edit_distance, edit_distance_within, jaro_winkler, ScoringConfig,
    MAX_SCALING_FACTOR,
};

/// Fuzz input for one pair of strings
#[derive(Debug, Arbitrary)]
struct PairInput {
    left_bytes: Vec<u8>,
    right_bytes: Vec<u8>,
    /// Mapped onto [0, MAX_SCALING_FACTOR]
    factor: u8,
    max_distance: u8,
}

/// Lossy UTF-8, capped in chars so the quadratic scorers don't time out.
fn to_string(bytes: &[u8], max_chars: usize) -> String {
    String::from_utf8_lossy(bytes).chars().take(max_chars).collect()
}

fuzz_target!(|input: PairInput| {
    let left = to_string(&input.left_bytes, 64);
    let right = to_string(&input.right_bytes, 64);
    let factor = f64::from(input.factor) / f64::from(u8::MAX) * MAX_SCALING_FACTOR;

    let config = match ScoringConfig::new(factor) {
        Ok(config) => config,
        Err(e) => panic!("factor {} in range but rejected: {}", factor, e),
    };
    let scores = breakdown(&left, &right, &config);

    for (name, value) in [
        ("normalized_edit", scores.normalized_edit),
        ("dice", scores.dice),
        ("jaro", scores.jaro),
        ("jaro_winkler", scores.jaro_winkler),
        ("trigram", scores.trigram),
        ("composite", scores.composite),
    ] {
        assert!(
            (0.0..=1.0).contains(&value),
            "{} = {} for {:?} vs {:?}",
            name,
            value,
            left,
            right
        );
    }

    assert_eq!(scores.jaro_winkler, jaro_winkler(&left, &right, factor));

    let la = left.chars().count();
    let lb = right.chars().count();
    let distance = edit_distance(&left, &right);
    assert_eq!(distance, scores.edit_distance);
    assert!(distance >= la.abs_diff(lb) && distance <= la.max(lb));

    let max = usize::from(input.max_distance % 8);
    assert_eq!(edit_distance_within(&left, &right, max), distance <= max);

    if left == right {
        assert_eq!(scores.composite, 1.0);
    }
});
