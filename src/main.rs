// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use likeness::{breakdown, load_pairs, Metric, PairScore, ScoringConfig};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise `--verbose` picks debug and the default is warn.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compare {
            left,
            right,
            metric,
            scaling_factor,
            config,
            json,
        } => {
            let config = resolve_config(config.as_deref(), scaling_factor)?;
            run_compare(&left, &right, &metric, &config, json)
        }
        Commands::Batch {
            input,
            output,
            config,
            min_score,
        } => {
            let config = resolve_config(config.as_deref(), None)?;
            run_batch(&input, output.as_deref(), &config, min_score)
        }
        Commands::Metrics => {
            print_metrics();
            Ok(())
        }
    }
}

/// Config file first, then the command-line scaling factor on top.
fn resolve_config(path: Option<&Path>, scaling_factor: Option<f64>) -> Result<ScoringConfig> {
    let config = match path {
        Some(path) => ScoringConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScoringConfig::default(),
    };
    let config = match scaling_factor {
        Some(factor) => ScoringConfig::new(factor)?,
        None => config,
    };
    tracing::debug!(scaling_factor = config.scaling_factor, "resolved config");
    Ok(config)
}

fn run_compare(
    left: &str,
    right: &str,
    metrics: &[Metric],
    config: &ScoringConfig,
    json: bool,
) -> Result<()> {
    let scores = breakdown(left, right, config);

    if json {
        let rendered = serde_json::to_string_pretty(&scores).context("serializing scores")?;
        println!("{}", rendered);
        return Ok(());
    }

    let metrics: Vec<Metric> = if metrics.is_empty() {
        Metric::ALL.to_vec()
    } else {
        metrics.to_vec()
    };

    section_top("COMPARE");
    row(&format!(" left   {}", truncate(left, BOX_WIDTH - 9)));
    row(&format!(" right  {}", truncate(right, BOX_WIDTH - 9)));
    section_mid();
    if metrics.contains(&Metric::Edit) {
        row(&format!(
            " {} {}",
            pad_right("edit distance", 14),
            distance_value(scores.edit_distance)
        ));
    }
    for metric in metrics {
        let value = match metric {
            Metric::Edit => scores.normalized_edit,
            Metric::Dice => scores.dice,
            Metric::Jaro => scores.jaro,
            Metric::JaroWinkler => scores.jaro_winkler,
            Metric::Trigram => scores.trigram,
            Metric::Composite => scores.composite,
        };
        row(&format!(
            " {} {}  {}",
            pad_right(metric.name(), 14),
            score_value(value),
            score_bar(value)
        ));
    }
    section_bot();
    Ok(())
}

fn run_batch(
    input: &Path,
    output: Option<&Path>,
    config: &ScoringConfig,
    min_score: Option<f64>,
) -> Result<()> {
    let pairs = load_pairs(input).with_context(|| format!("loading pairs {}", input.display()))?;

    let mut scored = score_with_progress(&pairs, config);
    if let Some(min) = min_score {
        if !(0.0..=1.0).contains(&min) {
            bail!("--min-score {} is outside [0, 1]", min);
        }
        let before = scored.len();
        scored.retain(|pair| pair.scores.composite >= min);
        tracing::info!(kept = scored.len(), dropped = before - scored.len(), "applied min score");
    }

    let rendered = serde_json::to_string_pretty(&scored).context("serializing scores")?;
    match output {
        Some(path) => write_output(path, &rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("writing stdout")?;
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn score_with_progress(pairs: &[likeness::PairInput], config: &ScoringConfig) -> Vec<PairScore> {
    use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

    let progress = ProgressBar::new(pairs.len() as u64);
    if atty::is(atty::Stream::Stderr) {
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} pairs") {
            progress.set_style(style);
        }
    } else {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }
    likeness::score_pairs_with_progress(pairs, config, &progress)
}

#[cfg(not(feature = "parallel"))]
fn score_with_progress(pairs: &[likeness::PairInput], config: &ScoringConfig) -> Vec<PairScore> {
    likeness::score_pairs(pairs, config)
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote scores");
    Ok(())
}

fn print_metrics() {
    section_top("METRICS");
    for metric in Metric::ALL {
        row(&format!(
            " {} {}",
            pad_right(&themed(GREEN, &[BOLD], metric.name()), 14),
            metric.description()
        ));
    }
    section_bot();
}
