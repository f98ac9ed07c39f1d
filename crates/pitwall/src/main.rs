//! `pitwall` - CLI for the Formula 1 history dashboards
//!
//! This binary is the view boundary: it maps each subcommand to one
//! dashboard selection, dispatches the pipeline, and renders the result as
//! text or JSON. Failures surface as messages, never as a crash.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

use pitwall::chart::{ChartData, ChartSpec};
use pitwall::cli::{Cli, Command, DuelCommand, OutputFormat};
use pitwall::dashboard::{PanelOutput, Selection, PANELS};
use pitwall::{init_logging, Config, Dashboard, Database, Result, TableSpec};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // The panel listing needs no database.
    if matches!(cli.command, Command::Panels) {
        for panel in PANELS {
            println!("{:<16} {}", panel.name, panel.title);
        }
        return Ok(());
    }

    let config = Config::load_from(cli.config)?;
    let database_path = cli.database.unwrap_or_else(|| config.database_path());
    let db = Database::open(database_path)?;
    let dashboard = Dashboard::new(db, &config.dashboard);

    match cli.command {
        Command::Panels => unreachable!("handled above"),
        Command::Drivers => print_names(&dashboard.db().driver_names()?),
        Command::Constructors => print_names(&dashboard.db().constructor_names()?),
        Command::Circuits => print_names(&dashboard.db().circuit_names()?),
        Command::Driver(cmd) => {
            let output = dashboard.dispatch(&Selection::DriverStandings(cmd.name))?;
            print_output(&output, cmd.chart.format)?;
        }
        Command::Constructor(cmd) => {
            let output = dashboard.dispatch(&Selection::ConstructorStandings(cmd.name))?;
            print_output(&output, cmd.chart.format)?;
        }
        Command::Circuit(cmd) => {
            let output = dashboard.dispatch(&Selection::CircuitStandings(cmd.name))?;
            print_output(&output, cmd.chart.format)?;
        }
        Command::Duel(DuelCommand::Points(args)) => {
            let output = dashboard.dispatch(&Selection::DuelPoints)?;
            print_output(&output, args.format)?;
        }
        Command::Duel(DuelCommand::Positions(args)) => {
            let output = dashboard.dispatch(&Selection::DuelPositions)?;
            print_output(&output, args.format)?;
        }
        Command::Manufacturers(cmd) => {
            let output = dashboard.dispatch(&Selection::Manufacturers {
                class: cmd.class.into(),
                metric: cmd.metric.into(),
            })?;
            print_output(&output, cmd.chart.format)?;
        }
        Command::Compare(cmd) => {
            let output = dashboard.dispatch(&Selection::HeadToHead {
                grand_prix: cmd.grand_prix,
            })?;
            print_output(&output, cmd.chart.format)?;
        }
    }

    Ok(())
}

fn print_names(names: &[String]) {
    for name in names {
        println!("{name}");
    }
}

fn print_output(output: &PanelOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(output)?);
        }
        OutputFormat::Table => match output {
            PanelOutput::Chart(spec) => print_chart(spec),
            PanelOutput::Table(table) => print_table(table),
            PanelOutput::NoData => println!("No data available for this selection."),
        },
    }
    Ok(())
}

fn print_chart(spec: &ChartSpec) {
    println!("{}", spec.title);
    if spec.y_axis_reversed {
        println!("{} vs {} (axis reversed, 1 on top)", spec.y_label, spec.x_label);
    } else {
        println!("{} vs {}", spec.y_label, spec.x_label);
    }
    println!();

    match &spec.data {
        ChartData::Line(series) => {
            for line in series {
                println!("{} [{}]", line.key, line.color);
                for (x, y) in &line.points {
                    println!("  {x:>6.0}  {y}");
                }
            }
        }
        ChartData::Bar(series) => {
            let width = series
                .bars
                .iter()
                .map(|bar| bar.label.len())
                .max()
                .unwrap_or(0);
            for bar in &series.bars {
                println!("  {:<width$}  {:.2}", bar.label, bar.value);
            }
        }
    }
}

fn print_table(table: &TableSpec) {
    println!("{}", table.title);
    println!();

    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    for (i, column) in table.columns.iter().enumerate() {
        print!("{:<width$}  ", column, width = widths[i]);
    }
    println!();
    for width in &widths {
        print!("{}  ", "-".repeat(*width));
    }
    println!();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                print!("{:<width$}  ", cell, width = widths[i]);
            }
        }
        println!();
    }
}
