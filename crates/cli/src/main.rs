// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Hands CLI, prints the best hand for each line of a file.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Path to a file with one hand per line, e.g. `3s 2h Ad 4c 5c`.
    path: PathBuf,
    /// Write one JSON record per hand.
    #[clap(long, short)]
    json: bool,
    /// Number of classification tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Write the number of hands for each hand rank.
    #[clap(long, short)]
    summary: bool,
}

/// The CLI configuration.
#[derive(Debug)]
struct Config {
    path: PathBuf,
    opts: report::Options,
}

fn run(config: Config) -> Result<()> {
    let file = File::open(&config.path).with_context(|| {
        format!(
            "The file at path {} could not be opened",
            config.path.display()
        )
    })?;

    let stdout = io::stdout().lock();
    report::write_report(BufReader::new(file), BufWriter::new(stdout), config.opts)?;

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        path: cli.path,
        opts: report::Options {
            json: cli.json,
            tasks: cli.tasks as usize,
            summary: cli.summary,
        },
    };

    if let Err(e) = run(config) {
        error!("{e:#}");
    }
}
