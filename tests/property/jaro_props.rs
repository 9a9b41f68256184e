//! Jaro and Jaro-Winkler properties.

use super::common::{assert_close, small_alphabet_word, unicode_word_strategy, word_strategy};
use likeness::{
    common_prefix_len, jaro_distance, jaro_winkler, DEFAULT_SCALING_FACTOR, MAX_PREFIX_LEN,
    MAX_SCALING_FACTOR,
};
use proptest::prelude::*;

#[test]
fn martha_marhta() {
    assert_close(jaro_distance("MARTHA", "MARHTA"), 0.944, 1e-3);
    assert_close(jaro_winkler("MARTHA", "MARHTA", DEFAULT_SCALING_FACTOR), 0.961, 1e-3);
}

#[test]
fn dwayne_duane() {
    assert_close(jaro_winkler("DWAYNE", "DUANE", DEFAULT_SCALING_FACTOR), 0.84, 1e-3);
}

#[test]
fn empty_inputs() {
    assert_eq!(jaro_distance("", ""), 1.0);
    assert_eq!(jaro_distance("", "a"), 0.0);
    assert_eq!(jaro_winkler("", "a", DEFAULT_SCALING_FACTOR), 0.0);
    assert_eq!(jaro_winkler("", "", DEFAULT_SCALING_FACTOR), 1.0);
}

#[test]
fn single_characters() {
    // len1 = 1 → max_dist = 0; only index 0 can match
    assert_eq!(jaro_distance("a", "b"), 0.0);
    assert_close(jaro_distance("a", "ab"), (1.0 + 0.5 + 1.0) / 3.0, 1e-12);
}

proptest! {
    /// Property: jaro(s, s) = 1 via the fast path
    #[test]
    fn prop_jaro_identity(s in unicode_word_strategy()) {
        prop_assert_eq!(jaro_distance(&s, &s), 1.0);
    }

    /// Property: jaro in [0, 1]
    #[test]
    fn prop_jaro_bounded(a in small_alphabet_word(), b in small_alphabet_word()) {
        let j = jaro_distance(&a, &b);
        prop_assert!((0.0..=1.0).contains(&j), "{} for {:?} vs {:?}", j, a, b);
    }

    /// Property: Winkler only ever adds to Jaro
    #[test]
    fn prop_winkler_at_least_jaro(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        factor in 0.0f64..=0.25
    ) {
        prop_assert!(jaro_winkler(&a, &b, factor) >= jaro_distance(&a, &b));
    }

    /// Property: with a factor ≤ 0.25, Jaro-Winkler stays ≤ 1
    #[test]
    fn prop_winkler_bounded(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        factor in 0.0f64..=MAX_SCALING_FACTOR
    ) {
        let jw = jaro_winkler(&a, &b, factor);
        prop_assert!((0.0..=1.0).contains(&jw), "{} for {:?} vs {:?}", jw, a, b);
    }

    /// Property: Winkler bonus formula with the capped prefix
    #[test]
    fn prop_winkler_formula(a in word_strategy(), b in word_strategy()) {
        let jaro = jaro_distance(&a, &b);
        let prefix = common_prefix_len(&a, &b, MAX_PREFIX_LEN) as f64;
        let expected = jaro + prefix * DEFAULT_SCALING_FACTOR * (1.0 - jaro);
        prop_assert_eq!(jaro_winkler(&a, &b, DEFAULT_SCALING_FACTOR), expected);
    }

    /// Property: prefix never exceeds the cap or the shorter length
    #[test]
    fn prop_prefix_capped(a in word_strategy(), b in word_strategy()) {
        let p = common_prefix_len(&a, &b, MAX_PREFIX_LEN);
        prop_assert!(p <= MAX_PREFIX_LEN);
        prop_assert!(p <= a.chars().count().min(b.chars().count()));
    }
}
