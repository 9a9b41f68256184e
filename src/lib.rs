// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String similarity scores for approximate matching.
//!
//! Four classical scorers plus their average:
//!
//! | Scorer                  | Range      | Measures                                 |
//! |-------------------------|------------|------------------------------------------|
//! | [`edit_distance`]       | `0..=max`  | Levenshtein insert/delete/substitute ops |
//! | [`dice_coefficient`]    | `[0, 1]`   | shared bigrams (multiset)                |
//! | [`jaro_winkler`]        | `[0, 1]`\* | in-window matches, prefix bonus          |
//! | [`trigram_similarity`]  | `[0, 1]`   | shared padded trigrams (distinct)        |
//! | [`composite_similarity`]| `[0, 1]`   | mean of the four, edit distance normalized |
//!
//! \* for scaling factors up to [`MAX_SCALING_FACTOR`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐ ┌──────────┐ ┌──────────┐
//! │  edit.rs │ │ ngram.rs │ │  jaro.rs │   pure scorers
//! └────┬─────┘ └────┬─────┘ └────┬─────┘
//!      └────────────┼────────────┘
//!                   ▼
//!           ┌──────────────┐     ┌───────────┐
//!           │ composite.rs │────▶│ metric.rs │   named scorers
//!           └──────┬───────┘     └───────────┘
//!                  ▼
//!           ┌──────────────┐
//!           │   batch.rs   │   many pairs, rayon
//!           └──────────────┘
//! ```
//!
//! Every scorer counts Unicode scalar values (`char`s), never bytes, and is
//! pure: no shared state, safe to call from any number of threads.
//!
//! # Degenerate inputs
//!
//! Nothing returns NaN. Where a ratio's denominator would be zero the
//! inputs are too short to compare, and the score is 1.0 if the strings are
//! equal and 0.0 otherwise. In particular `composite_similarity("", "")` is
//! 1.0.
//!
//! # Usage
//!
//! ```
//! use likeness::{composite_similarity, edit_distance, jaro_winkler, DEFAULT_SCALING_FACTOR};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! assert!((jaro_winkler("DWAYNE", "DUANE", DEFAULT_SCALING_FACTOR) - 0.84).abs() < 1e-9);
//! assert_eq!(composite_similarity("hello", "hello"), 1.0);
//! ```

mod batch;
mod composite;
pub mod contracts;
mod config;
mod edit;
mod error;
mod jaro;
mod metric;
mod ngram;

pub use batch::{load_pairs, score_pairs, PairInput, PairScore};
#[cfg(feature = "parallel")]
pub use batch::score_pairs_with_progress;
pub use composite::{breakdown, composite_similarity, composite_similarity_with, SimilarityBreakdown};
pub use config::ScoringConfig;
pub use edit::{edit_distance, edit_distance_within, edit_similarity};
pub use error::{Result, SimilarityError};
pub use jaro::{
    common_prefix_len, jaro_distance, jaro_winkler, DEFAULT_SCALING_FACTOR, MAX_PREFIX_LEN,
    MAX_SCALING_FACTOR,
};
pub use metric::Metric;
pub use ngram::{bigrams, dice_coefficient, trigram_similarity, trigrams, Bigram, Trigram};
