// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! N-gram overlap scores: Sørensen–Dice over bigrams, Jaccard-style over
//! padded trigrams.
//!
//! The two scorers count overlap differently:
//!
//! | Scorer      | N-grams             | Intersection              | Denominator          |
//! |-------------|---------------------|---------------------------|----------------------|
//! | Dice        | bigrams, unpadded   | multiset (`min` of counts)| `|A| + |B|`          |
//! | Trigram     | trigrams, `"  s  "` | distinct elements         | `|A| + |B| - |A∩B|`  |
//!
//! The trigram denominator mixes raw list sizes with a deduplicated
//! intersection.

use std::collections::{HashMap, HashSet};

use crate::contracts::check_unit_interval;

/// Two consecutive characters.
pub type Bigram = [char; 2];

/// Three consecutive characters.
pub type Trigram = [char; 3];

/// Padding added on both sides of a string before trigram extraction.
pub const TRIGRAM_PADDING: &str = "  ";

/// All bigrams of `s`, in order, duplicates kept. Empty for strings shorter
/// than two characters.
pub fn bigrams(s: &str) -> Vec<Bigram> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| [w[0], w[1]]).collect()
}

/// All trigrams of `"  " + s + "  "`, in order, duplicates kept.
///
/// The padding guarantees at least two trigrams even for the empty string,
/// and makes the first and last characters show up in edge trigrams.
pub fn trigrams(s: &str) -> Vec<Trigram> {
    let chars: Vec<char> = TRIGRAM_PADDING
        .chars()
        .chain(s.chars())
        .chain(TRIGRAM_PADDING.chars())
        .collect();
    chars.windows(3).map(|w| [w[0], w[1], w[2]]).collect()
}

/// Sørensen–Dice coefficient over character bigrams: `2|A∩B| / (|A|+|B|)`.
///
/// The intersection is a multiset intersection, so `"aaa"` (two `aa`) vs
/// `"aa"` (one `aa`) shares exactly one bigram.
///
/// When neither string has a bigram (both shorter than two characters) the
/// ratio is undefined. Equal strings score 1.0 and different ones 0.0.
pub fn dice_coefficient(s1: &str, s2: &str) -> f64 {
    let bigram1 = bigrams(s1);
    let bigram2 = bigrams(s2);

    let total = bigram1.len() + bigram2.len();
    if total == 0 {
        return if s1 == s2 { 1.0 } else { 0.0 };
    }

    let intersection = multiset_intersection_len(&bigram1, &bigram2);
    let score = 2.0 * intersection as f64 / total as f64;
    check_unit_interval("dice_coefficient", score);
    score
}

/// Trigram overlap: `|set(A) ∩ set(B)| / (|A| + |B| - |set(A) ∩ set(B)|)`.
///
/// Identical strings short-circuit to 1.0. Without that, a string with a
/// repeated trigram (the empty string pads to two copies of `"   "`) would
/// score below 1.0 against itself.
pub fn trigram_similarity(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }

    let trigrams1 = trigrams(s1);
    let trigrams2 = trigrams(s2);

    let intersection = distinct_intersection_len(&trigrams1, &trigrams2);
    // Both lists hold at least two trigrams, so this is never zero.
    let union = trigrams1.len() + trigrams2.len() - intersection;

    let score = intersection as f64 / union as f64;
    check_unit_interval("trigram_similarity", score);
    score
}

/// Size of the multiset intersection: each distinct gram contributes
/// `min(count in a, count in b)`.
fn multiset_intersection_len<T: Eq + std::hash::Hash>(a: &[T], b: &[T]) -> usize {
    let mut remaining: HashMap<&T, usize> = HashMap::with_capacity(b.len());
    for gram in b {
        *remaining.entry(gram).or_insert(0) += 1;
    }

    let mut shared = 0;
    for gram in a {
        if let Some(count) = remaining.get_mut(gram) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }
    shared
}

/// Number of distinct grams present in both slices.
fn distinct_intersection_len<T: Eq + std::hash::Hash>(a: &[T], b: &[T]) -> usize {
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();
    set_a.intersection(&set_b).count()
}
