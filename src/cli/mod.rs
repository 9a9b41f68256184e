// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the likeness command-line interface.
//!
//! Three subcommands: `compare` scores a single pair, `batch` scores a JSON
//! file of pairs (in parallel), and `metrics` lists the available scorers.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use likeness::Metric;

#[derive(Parser)]
#[command(
    name = "likeness",
    about = "Score how similar two strings are",
    version
)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single pair of strings
    Compare {
        left: String,

        right: String,

        /// Only show these metrics (repeatable). Defaults to all of them.
        #[arg(short, long, value_enum)]
        metric: Vec<Metric>,

        /// Jaro-Winkler prefix scaling factor, in [0, 0.25]
        ///
        /// Takes precedence over the value in --config.
        #[arg(short, long)]
        scaling_factor: Option<f64>,

        /// JSON config file, e.g. { "scalingFactor": 0.1 }
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the full score breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every pair in a JSON file of [{ "left": ..., "right": ... }]
    Batch {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config file, e.g. { "scalingFactor": 0.1 }
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Drop pairs whose composite score is below this value
        #[arg(long)]
        min_score: Option<f64>,
    },

    /// List the available metrics
    Metrics,
}
