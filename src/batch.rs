// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring many pairs at once.
//!
//! Every pair is independent, so this is embarrassingly parallel: with the
//! `parallel` feature we `par_iter()` over the pairs and let rayon sort out
//! the rest. Output order always matches input order, parallel or not.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::composite::{breakdown, SimilarityBreakdown};
use crate::config::ScoringConfig;
use crate::error::{Result, SimilarityError};

/// One pair to score, as read from a batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInput {
    pub left: String,
    pub right: String,
}

impl PairInput {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A scored pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub left: String,
    pub right: String,
    pub scores: SimilarityBreakdown,
}

fn score_one(pair: &PairInput, config: &ScoringConfig) -> PairScore {
    PairScore {
        left: pair.left.clone(),
        right: pair.right.clone(),
        scores: breakdown(&pair.left, &pair.right, config),
    }
}

/// Score every pair. `result[i]` belongs to `pairs[i]`.
pub fn score_pairs(pairs: &[PairInput], config: &ScoringConfig) -> Vec<PairScore> {
    tracing::debug!(pairs = pairs.len(), "scoring batch");

    #[cfg(feature = "parallel")]
    {
        pairs.par_iter().map(|pair| score_one(pair, config)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        pairs.iter().map(|pair| score_one(pair, config)).collect()
    }
}

/// [`score_pairs`], ticking `progress` once per scored pair.
#[cfg(feature = "parallel")]
pub fn score_pairs_with_progress(
    pairs: &[PairInput],
    config: &ScoringConfig,
    progress: &ProgressBar,
) -> Vec<PairScore> {
    tracing::debug!(pairs = pairs.len(), "scoring batch");

    let scored = pairs
        .par_iter()
        .map(|pair| {
            let scored = score_one(pair, config);
            progress.inc(1);
            scored
        })
        .collect();
    progress.finish_and_clear();
    scored
}

/// Read a JSON array of `{ "left": ..., "right": ... }` objects.
pub fn load_pairs(path: &Path) -> Result<Vec<PairInput>> {
    let raw = fs::read_to_string(path).map_err(|source| SimilarityError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs: Vec<PairInput> = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), pairs = pairs.len(), "loaded pairs");
    Ok(pairs)
}
