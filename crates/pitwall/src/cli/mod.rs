//! Command-line interface for pitwall.
//!
//! This module provides the CLI structure for the `pitwall` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ChartArgs, CircuitCommand, CompareCommand, ConstructorCommand, DriverCommand, DuelCommand,
    ManufacturerClassArg, ManufacturersCommand, MetricArg, OutputFormat,
};

/// pitwall - Formula 1 history dashboards from your terminal
///
/// Queries a local Formula 1 history database and renders driver,
/// constructor, and manufacturer performance as charts or tables.
#[derive(Debug, Parser)]
#[command(name = "pitwall")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the race database (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the dashboard panels
    Panels,

    /// List driver names available for selection
    Drivers,

    /// List constructor names available for selection
    Constructors,

    /// List circuit names available for selection
    Circuits,

    /// Per-race points for one driver
    Driver(DriverCommand),

    /// Per-race points for one constructor
    Constructor(ConstructorCommand),

    /// Per-driver points at one circuit
    Circuit(CircuitCommand),

    /// Hamilton vs Verstappen season charts
    #[command(subcommand)]
    Duel(DuelCommand),

    /// Points per manufacturer group, threshold-filtered
    Manufacturers(ManufacturersCommand),

    /// Head-to-head race stats for the rivals at one grand prix
    Compare(CompareCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
