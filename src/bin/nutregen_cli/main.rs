// ABOUTME: NutreGen CLI - derives nutrition plans from marker files and lifestyle answers
// ABOUTME: Prints plan reports, the marker reference table, and the meal catalog as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors
//!
//! Usage:
//! ```bash
//! # Derive a plan
//! nutregen-cli plan --dna genome.txt --activity High --goal loss --diet vegan \
//!     --allergy nuts --sleep 6 --stress high --cook-time "<15" --budget "£"
//!
//! # Use a custom marker table
//! nutregen-cli --marker-table markers.json plan --dna genome.txt
//!
//! # Inspect reference data
//! nutregen-cli markers
//! nutregen-cli catalog
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutregen::config::ServerConfig;
use nutregen::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

use commands::plan::PlanArgs;

#[derive(Parser)]
#[command(
    name = "nutregen-cli",
    about = "NutreGen nutrition plan CLI",
    long_about = "Derives a calorie target, macro split, and meal suggestions from a genetic-marker export and lifestyle answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON marker table replacing the built-in reference table
    #[arg(long, global = true)]
    marker_table: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Derive a plan and print the report as JSON
    Plan(PlanArgs),

    /// Print the marker reference table
    Markers,

    /// Print the meal catalog in evaluation order with its keys
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let server = ServerConfig::from_env()?;
    let marker_table = cli.marker_table.or_else(|| server.marker_table.clone());
    let table = helpers::tables::marker_table(marker_table.as_deref())?;
    debug!(markers = table.len(), "reference data ready");

    match cli.command {
        Command::Plan(args) => commands::plan::run(&args, &server)?,
        Command::Markers => commands::reference::markers(table)?,
        Command::Catalog => commands::reference::catalog()?,
    }

    Ok(())
}
