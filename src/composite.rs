// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composite score: an unweighted mean of four normalized scorers.
//!
//! ```text
//! composite = (edit_similarity + dice + jaro_winkler + trigram) / 4
//! ```
//!
//! Edit distance enters as `1 - distance / max(len1, len2)` so all four terms
//! share the [0, 1] range.

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::contracts::check_unit_interval;
use crate::edit::edit_distance;
use crate::jaro::{jaro_distance, jaro_winkler};
use crate::ngram::{dice_coefficient, trigram_similarity};

/// Every sub-score for one pair, plus the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityBreakdown {
    pub edit_distance: usize,
    pub normalized_edit: f64,
    pub dice: f64,
    pub jaro: f64,
    pub jaro_winkler: f64,
    pub trigram: f64,
    pub composite: f64,
}

/// Mean of edit similarity, Dice, Jaro-Winkler (scaling factor 0.1) and
/// trigram similarity.
///
/// Two empty strings score 1.0.
pub fn composite_similarity(s1: &str, s2: &str) -> f64 {
    composite_similarity_with(s1, s2, &ScoringConfig::default())
}

/// [`composite_similarity`] with a caller-chosen Jaro-Winkler scaling factor.
pub fn composite_similarity_with(s1: &str, s2: &str, config: &ScoringConfig) -> f64 {
    breakdown(s1, s2, config).composite
}

/// Compute every sub-score once and average the normalized ones.
pub fn breakdown(s1: &str, s2: &str, config: &ScoringConfig) -> SimilarityBreakdown {
    let distance = edit_distance(s1, s2);
    let longest = s1.chars().count().max(s2.chars().count());
    let normalized_edit = if longest == 0 {
        1.0
    } else {
        1.0 - distance as f64 / longest as f64
    };

    let dice = dice_coefficient(s1, s2);
    let jaro = jaro_distance(s1, s2);
    let jaro_winkler = jaro_winkler(s1, s2, config.scaling_factor);
    let trigram = trigram_similarity(s1, s2);

    let composite = (normalized_edit + dice + jaro_winkler + trigram) / 4.0;
    // A hand-built config can carry an out-of-range factor; only then may
    // the composite leave [0, 1].
    if cfg!(debug_assertions) && config.validate().is_ok() {
        check_unit_interval("composite_similarity", composite);
    }

    tracing::trace!(
        normalized_edit,
        dice,
        jaro_winkler,
        trigram,
        composite,
        "scored pair"
    );

    SimilarityBreakdown {
        edit_distance: distance,
        normalized_edit,
        dice,
        jaro,
        jaro_winkler,
        trigram,
        composite,
    }
}
