//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use crate::output::OutputMode;

/// gearbench - per-slot gear candidate filtering
#[derive(Parser, Debug)]
#[command(
    name = "gearbench",
    version,
    about = "Filter per-slot gear candidates for automated loadout generation",
    long_about = "Select, for each equipment slot, the items that remain eligible\n\
                  for loadout optimization after pins, exclusions, exotic locks,\n\
                  required mods, and search filters are applied."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter a catalog down to the eligible candidates per slot
    Filter {
        /// Path to the catalog JSON file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Path to a TOML constraint file
        #[arg(short = 'C', long)]
        constraints: Option<PathBuf>,

        /// Free-text search query (e.g. "is:exotic helm")
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List the fixed slot enumeration and each slot's mod category
    Slots,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Filter {
            catalog,
            constraints,
            search,
        } => commands::filter::run(&catalog, constraints.as_deref(), search.as_deref(), output_mode),
        Command::Slots => commands::slots::run(output_mode),
    }
}
