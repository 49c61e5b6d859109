// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: count, list, check and analyse unlock patterns.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use unlock_patterns::{
    enumerate, enumerate_lengths, Config, CrossingSummary, GridTopology, PathAnalyzer, Pattern,
};

#[derive(Parser, Debug)]
#[command(name = "patterns", version, about = "Enumerate and analyse 3x3 unlock patterns")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count valid patterns per length
    Count {
        #[arg(long)]
        min: Option<usize>,
        #[arg(long)]
        max: Option<usize>,
        /// Also total the crossings and overlaps of every pattern
        #[arg(long)]
        crossings: bool,
    },
    /// List the valid patterns of one or more lengths
    List {
        #[arg(short, long, required = true, num_args = 1..)]
        length: Vec<usize>,
        /// Playback order reversed
        #[arg(short, long)]
        reverse: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check whether patterns are legal unlock gestures
    Check {
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Report the crossings and overlaps of drawn paths
    Analyze {
        #[arg(required = true)]
        patterns: Vec<String>,
        /// Print reports as TOML
        #[arg(long)]
        toml: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    let grid = config.grid().context("building grid")?;
    log::debug!("grid: {:?}", grid.coordinates());

    match cli.command {
        Command::Count { min, max, crossings } => {
            let (default_min, default_max) = config.length_range();
            count(&grid, min.unwrap_or(default_min), max.unwrap_or(default_max), crossings)
        }
        Command::List {
            length,
            reverse,
            limit,
        } => list(&grid, &length, reverse, limit),
        Command::Check { patterns } => check(&grid, &patterns),
        Command::Analyze { patterns, toml } => analyze(&grid, &patterns, toml),
    }
}

fn count(grid: &GridTopology, min: usize, max: usize, crossings: bool) -> anyhow::Result<ExitCode> {
    let enumeration = enumerate(grid, min, max)?;
    for (length, count) in enumeration.counts_by_length() {
        println!("{:>2} dots: {:>7}", length, count);
    }
    println!("   total: {:>7}", enumeration.total());

    if crossings {
        let analyzer = PathAnalyzer::new(grid);
        for length in enumeration.lengths() {
            let summary = CrossingSummary::collect(&analyzer, enumeration.patterns(length));
            println!("{:>2} dots: {}", length, summary);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn list(grid: &GridTopology, lengths: &[usize], reverse: bool, limit: Option<usize>) -> anyhow::Result<ExitCode> {
    let enumeration = enumerate_lengths(grid, lengths)?;
    let selected = enumeration.select(lengths, reverse);
    for pattern in selected.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("{}", pattern);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse user input, offering the corrected form when it is malformed.
fn parse_pattern(input: &str) -> anyhow::Result<Pattern> {
    match input.parse::<Pattern>() {
        Ok(pattern) => Ok(pattern),
        Err(err) => match Pattern::suggest(input) {
            Some(suggestion) => bail!("{:?}: {} (did you mean {}?)", input, err, suggestion),
            None => bail!("{:?}: {}", input, err),
        },
    }
}

fn check(grid: &GridTopology, inputs: &[String]) -> anyhow::Result<ExitCode> {
    let mut all_valid = true;
    for input in inputs {
        let pattern = parse_pattern(input)?;
        match grid.check(&pattern) {
            Ok(()) => println!("{}: valid", pattern),
            Err(violation) => {
                all_valid = false;
                println!("{}: invalid, {}", pattern, violation);
            }
        }
    }
    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn analyze(grid: &GridTopology, inputs: &[String], as_toml: bool) -> anyhow::Result<ExitCode> {
    let analyzer = PathAnalyzer::new(grid);
    for (i, input) in inputs.iter().enumerate() {
        let pattern = parse_pattern(input)?;
        let report = analyzer.report(&pattern);
        if i > 0 {
            println!();
        }
        if as_toml {
            print!("{}", toml::to_string(&report).context("serializing report")?);
        } else {
            println!("{}", report);
        }
    }
    Ok(ExitCode::SUCCESS)
}
