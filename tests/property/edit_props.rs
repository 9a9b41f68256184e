//! Levenshtein distance properties.
//!
//! Edit distance is a metric on strings: zero exactly on identical inputs,
//! symmetric, and obeys the triangle inequality. It's also pinned between
//! the length difference and the longer length.

use super::common::{small_alphabet_word, unicode_word_strategy, word_strategy};
use likeness::{edit_distance, edit_distance_within, edit_similarity};
use proptest::prelude::*;

#[test]
fn kitten_sitting_is_three() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
}

#[test]
fn empty_against_anything_is_its_length() {
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("", "తెలుగు"), "తెలుగు".chars().count());
}

proptest! {
    /// Property: d(s, s) = 0
    #[test]
    fn prop_identity(s in word_strategy()) {
        prop_assert_eq!(edit_distance(&s, &s), 0);
    }

    /// Property: d(a, b) = 0 only if a = b
    #[test]
    fn prop_zero_only_for_equal(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    /// Property: d(a, b) = d(b, a)
    #[test]
    fn prop_symmetric(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    /// Property: d("", s) = len(s) and d(s, "") = len(s)
    #[test]
    fn prop_empty_is_length(s in word_strategy()) {
        let len = s.chars().count();
        prop_assert_eq!(edit_distance("", &s), len);
        prop_assert_eq!(edit_distance(&s, ""), len);
    }

    /// Property: d(a, c) ≤ d(a, b) + d(b, c)
    #[test]
    fn prop_triangle_inequality(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        c in small_alphabet_word()
    ) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    /// Property: |len(a) - len(b)| ≤ d(a, b) ≤ max(len(a), len(b))
    #[test]
    fn prop_length_bounds(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let la = a.chars().count();
        let lb = b.chars().count();
        let d = edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Property: appending a character costs exactly one edit
    #[test]
    fn prop_single_append(s in word_strategy(), c in proptest::char::range('a', 'z')) {
        let longer = format!("{}{}", s, c);
        prop_assert_eq!(edit_distance(&s, &longer), 1);
    }

    /// Property: bounded check agrees with the full distance
    #[test]
    fn prop_within_matches_distance(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        max in 0usize..=4
    ) {
        prop_assert_eq!(edit_distance_within(&a, &b, max), edit_distance(&a, &b) <= max);
    }

    /// Property: normalized edit similarity stays in [0, 1]
    #[test]
    fn prop_similarity_in_unit_interval(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let s = edit_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "{} for {:?} vs {:?}", s, a, b);
    }
}
