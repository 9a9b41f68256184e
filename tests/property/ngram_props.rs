//! Bigram (Dice) and trigram overlap properties.
//!
//! The two scorers count overlap differently on purpose. Dice uses a
//! multiset intersection; trigram uses a distinct intersection over raw list
//! sizes. These tests pin both behaviors down.

use super::common::{assert_close, small_alphabet_word, unicode_word_strategy, word_strategy};
use likeness::{bigrams, dice_coefficient, trigram_similarity, trigrams};
use proptest::prelude::*;

#[test]
fn night_nacht_shares_one_bigram() {
    assert_close(dice_coefficient("night", "nacht"), 0.25, 1e-12);
}

#[test]
fn dice_counts_repeated_bigrams_once_per_occurrence() {
    assert_close(dice_coefficient("aaa", "aa"), 2.0 / 3.0, 1e-12);
    assert_close(dice_coefficient("abab", "ab"), 2.0 / 4.0, 1e-12);
}

#[test]
fn dice_without_bigrams_uses_equality() {
    assert_eq!(dice_coefficient("", ""), 1.0);
    assert_eq!(dice_coefficient("x", "x"), 1.0);
    assert_eq!(dice_coefficient("x", "y"), 0.0);
    assert_eq!(dice_coefficient("é", "é"), 1.0);
}

#[test]
fn trigram_denominator_uses_raw_counts() {
    // "aaaa" has a duplicate "aaa"; it counts twice in the union, once in
    // the intersection
    assert_close(trigram_similarity("aaaa", "aaab"), 3.0 / 9.0, 1e-12);
}

#[test]
fn trigram_of_unicode_counts_chars() {
    // "café" pads to 8 chars → 6 trigrams
    assert_eq!(trigrams("café").len(), 6);
    assert_eq!(bigrams("café").len(), 3);
}

proptest! {
    /// Property: a string of length L has max(L-1, 0) bigrams
    #[test]
    fn prop_bigram_count(s in unicode_word_strategy()) {
        prop_assert_eq!(bigrams(&s).len(), s.chars().count().saturating_sub(1));
    }

    /// Property: a string of length L has L + 2 trigrams after padding
    #[test]
    fn prop_trigram_count(s in unicode_word_strategy()) {
        prop_assert_eq!(trigrams(&s).len(), s.chars().count() + 2);
    }

    /// Property: dice(s, s) = 1 for len(s) ≥ 2
    #[test]
    fn prop_dice_identity(s in word_strategy()) {
        prop_assume!(s.chars().count() >= 2);
        prop_assert_eq!(dice_coefficient(&s, &s), 1.0);
    }

    /// Property: dice is symmetric
    #[test]
    fn prop_dice_symmetric(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(dice_coefficient(&a, &b), dice_coefficient(&b, &a));
    }

    /// Property: dice in [0, 1]
    #[test]
    fn prop_dice_bounded(a in small_alphabet_word(), b in small_alphabet_word()) {
        let d = dice_coefficient(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    /// Property: trigram(s, s) = 1
    #[test]
    fn prop_trigram_identity(s in small_alphabet_word()) {
        prop_assert_eq!(trigram_similarity(&s, &s), 1.0);
    }

    /// Property: trigram is symmetric
    #[test]
    fn prop_trigram_symmetric(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(trigram_similarity(&a, &b), trigram_similarity(&b, &a));
    }

    /// Property: trigram in [0, 1]
    #[test]
    fn prop_trigram_bounded(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let t = trigram_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&t));
    }
}
