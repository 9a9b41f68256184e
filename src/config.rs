// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring configuration.
//!
//! There is exactly one knob: the Jaro-Winkler prefix scaling factor. The raw
//! [`jaro_winkler`](crate::jaro_winkler) function accepts any value; going
//! through [`ScoringConfig`] guarantees the factor stays in
//! `[0, MAX_SCALING_FACTOR]`, which keeps every composite sub-score in [0, 1].
//!
//! On disk the config is a small JSON object:
//!
//! ```json
//! { "scalingFactor": 0.15 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};
use crate::jaro::{DEFAULT_SCALING_FACTOR, MAX_SCALING_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Jaro-Winkler prefix bonus weight.
    pub scaling_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scaling_factor: DEFAULT_SCALING_FACTOR,
        }
    }
}

impl ScoringConfig {
    /// Build a config, rejecting scaling factors that could push
    /// Jaro-Winkler outside [0, 1].
    pub fn new(scaling_factor: f64) -> Result<Self> {
        let config = Self { scaling_factor };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let factor = self.scaling_factor;
        if !factor.is_finite() || !(0.0..=MAX_SCALING_FACTOR).contains(&factor) {
            return Err(SimilarityError::InvalidScalingFactor(factor));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| SimilarityError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
