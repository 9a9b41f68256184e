// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Named scorers, so callers (and the CLI) can pick one at runtime.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::composite::composite_similarity_with;
use crate::config::ScoringConfig;
use crate::edit::edit_similarity;
use crate::error::SimilarityError;
use crate::jaro::{jaro_distance, jaro_winkler};
use crate::ngram::{dice_coefficient, trigram_similarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Levenshtein distance scaled to [0, 1]
    Edit,
    /// Sørensen–Dice over bigrams
    Dice,
    /// Jaro character matching
    Jaro,
    /// Jaro with a common-prefix bonus
    JaroWinkler,
    /// Overlap of space-padded trigrams
    Trigram,
    /// Mean of edit, dice, jaro-winkler and trigram
    Composite,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Edit,
        Metric::Dice,
        Metric::Jaro,
        Metric::JaroWinkler,
        Metric::Trigram,
        Metric::Composite,
    ];

    /// Normalized similarity for this metric. `Edit` reports
    /// [`edit_similarity`], not the raw distance.
    pub fn score(self, s1: &str, s2: &str, config: &ScoringConfig) -> f64 {
        match self {
            Metric::Edit => edit_similarity(s1, s2),
            Metric::Dice => dice_coefficient(s1, s2),
            Metric::Jaro => jaro_distance(s1, s2),
            Metric::JaroWinkler => jaro_winkler(s1, s2, config.scaling_factor),
            Metric::Trigram => trigram_similarity(s1, s2),
            Metric::Composite => composite_similarity_with(s1, s2, config),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Edit => "edit",
            Metric::Dice => "dice",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler => "jaro-winkler",
            Metric::Trigram => "trigram",
            Metric::Composite => "composite",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Edit => "Levenshtein distance scaled to [0, 1]",
            Metric::Dice => "Sørensen–Dice coefficient over character bigrams",
            Metric::Jaro => "Jaro character matching within a sliding window",
            Metric::JaroWinkler => "Jaro with a bonus for a common prefix of up to 4 chars",
            Metric::Trigram => "Overlap of space-padded character trigrams",
            Metric::Composite => "Mean of edit, dice, jaro-winkler and trigram",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| SimilarityError::UnknownMetric(s.to_string()))
    }
}
