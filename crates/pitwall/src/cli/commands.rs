//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use clap::{Args, Subcommand, ValueEnum};

use crate::model::{AggregateMetric, ManufacturerClass};

/// Duel panel views.
#[derive(Debug, Subcommand)]
pub enum DuelCommand {
    /// Cumulative points across the season
    Points(ChartArgs),

    /// Finishing position per race
    Positions(ChartArgs),
}

/// Arguments shared by the chart-producing commands.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Driver performance command arguments.
#[derive(Debug, Args)]
pub struct DriverCommand {
    /// Driver name, as listed by `pitwall drivers`
    pub name: String,

    /// Output options
    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Constructor performance command arguments.
#[derive(Debug, Args)]
pub struct ConstructorCommand {
    /// Constructor name, as listed by `pitwall constructors`
    pub name: String,

    /// Output options
    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Circuit performance command arguments.
#[derive(Debug, Args)]
pub struct CircuitCommand {
    /// Circuit name, as listed by `pitwall circuits`
    pub name: String,

    /// Output options
    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Manufacturer performance command arguments.
#[derive(Debug, Args)]
pub struct ManufacturersCommand {
    /// Grouping dimension
    #[arg(value_enum)]
    pub class: ManufacturerClassArg,

    /// Aggregate to display and sort by
    #[arg(short, long, value_enum, default_value = "mean")]
    pub metric: MetricArg,

    /// Output options
    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Head-to-head comparison command arguments.
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Grand prix (circuit) name, e.g. "Bahrain"
    pub grand_prix: String,

    /// Output options
    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Manufacturer class argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManufacturerClassArg {
    /// Engine supplier
    Engine,
    /// Tyre supplier
    Tyre,
    /// Constructor team
    Team,
}

impl From<ManufacturerClassArg> for ManufacturerClass {
    fn from(arg: ManufacturerClassArg) -> Self {
        match arg {
            ManufacturerClassArg::Engine => Self::Engine,
            ManufacturerClassArg::Tyre => Self::Tyre,
            ManufacturerClassArg::Team => Self::Team,
        }
    }
}

/// Aggregate metric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Mean points per entry
    Mean,
    /// Total points
    Total,
}

impl From<MetricArg> for AggregateMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Mean => Self::Mean,
            MetricArg::Total => Self::Total,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted text
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturer_class_arg_conversion() {
        assert_eq!(
            ManufacturerClass::from(ManufacturerClassArg::Engine),
            ManufacturerClass::Engine
        );
        assert_eq!(
            ManufacturerClass::from(ManufacturerClassArg::Tyre),
            ManufacturerClass::Tyre
        );
        assert_eq!(
            ManufacturerClass::from(ManufacturerClassArg::Team),
            ManufacturerClass::Team
        );
    }

    #[test]
    fn test_metric_arg_conversion() {
        assert_eq!(AggregateMetric::from(MetricArg::Mean), AggregateMetric::Mean);
        assert_eq!(
            AggregateMetric::from(MetricArg::Total),
            AggregateMetric::Total
        );
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
