//! Differential tests: the crate's scorers against independent oracles.
//!
//! The oracles in `common` are written for obviousness, not speed. If the
//! two ever disagree, the crate is wrong.

use super::common::{
    any_string, oracle_dice, oracle_distinct_intersection, oracle_levenshtein,
    oracle_multiset_intersection, small_alphabet_word, unicode_word_strategy,
};
use likeness::{bigrams, dice_coefficient, edit_distance, trigram_similarity, trigrams};
use proptest::prelude::*;

proptest! {
    /// Oracle: full-matrix Levenshtein = two-row Levenshtein
    #[test]
    fn oracle_levenshtein_matches(a in any_string(), b in any_string()) {
        prop_assert_eq!(edit_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// Oracle: Levenshtein matches the strsim crate (also char-based)
    #[test]
    fn strsim_levenshtein_matches(a in unicode_word_strategy(), b in small_alphabet_word()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Oracle: Dice from a sort-and-merge multiset intersection
    #[test]
    fn oracle_dice_matches(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(dice_coefficient(&a, &b), oracle_dice(&a, &b));
    }

    /// Oracle: multiset intersection is bounded by both bigram counts
    #[test]
    fn oracle_multiset_bounded(a in small_alphabet_word(), b in small_alphabet_word()) {
        let shared = oracle_multiset_intersection(&bigrams(&a), &bigrams(&b));
        prop_assert!(shared <= bigrams(&a).len().min(bigrams(&b).len()));
    }

    /// Oracle: trigram score from linear-scan distinct intersection
    #[test]
    fn oracle_trigram_matches(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assume!(a != b);
        let ta = trigrams(&a);
        let tb = trigrams(&b);
        let shared = oracle_distinct_intersection(&ta, &tb);
        let expected = shared as f64 / (ta.len() + tb.len() - shared) as f64;
        prop_assert_eq!(trigram_similarity(&a, &b), expected);
    }
}
