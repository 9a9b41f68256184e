// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the configuration and file-facing parts of the crate.
//!
//! The scoring functions themselves never fail: every degenerate input has a
//! defined score. Errors only come from validating a [`ScoringConfig`],
//! parsing metric names, and reading JSON from disk.
//!
//! [`ScoringConfig`]: crate::ScoringConfig

use std::path::PathBuf;

use thiserror::Error;

use crate::jaro::MAX_SCALING_FACTOR;

#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Scaling factor is NaN, infinite, or outside `[0, MAX_SCALING_FACTOR]`.
    #[error("scaling factor {0} is outside [0, {max}]", max = MAX_SCALING_FACTOR)]
    InvalidScalingFactor(f64),

    /// Metric name didn't match any known scorer.
    #[error("unknown metric '{0}' (expected one of: edit, dice, jaro, jaro-winkler, trigram, composite)")]
    UnknownMetric(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
