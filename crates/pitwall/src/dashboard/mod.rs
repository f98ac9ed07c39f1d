//! Dashboard dispatch: one selection in, one rendered-ready output out.
//!
//! This is the explicit event layer that replaces reactive UI callbacks.
//! Each [`Selection`] maps to exactly one fetch → transform → build
//! invocation against the shared read-only database handle; there is no
//! hidden recomputation order and no cached state between requests.

pub mod panels;

use serde::Serialize;
use tracing::debug;

use crate::chart::{self, ChartSpec};
use crate::config::DashboardConfig;
use crate::db::Database;
use crate::error::Result;
use crate::model::{AggregateMetric, GroupField, ManufacturerClass};
use crate::transform;

pub use panels::{PanelInfo, DUEL_DRIVER_LABELS, PANELS};

/// A tabular result for the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    /// Table title.
    pub title: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Rows of stringified cells, one per stat.
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    /// Serialize the table to pretty JSON for an external renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A user selection, one per dashboard interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Per-race points for one driver, by name.
    DriverStandings(String),
    /// Per-race points for one constructor, by name.
    ConstructorStandings(String),
    /// Per-driver points at one circuit, by name.
    CircuitStandings(String),
    /// The rivals' cumulative points across the season.
    DuelPoints,
    /// The rivals' finishing positions across the season.
    DuelPositions,
    /// Aggregate points per manufacturer group.
    Manufacturers {
        /// Grouping dimension.
        class: ManufacturerClass,
        /// Displayed aggregate.
        metric: AggregateMetric,
    },
    /// Side-by-side race stats for the rivals at one grand prix.
    HeadToHead {
        /// Grand prix (circuit) name.
        grand_prix: String,
    },
}

/// The result of one dispatch.
///
/// `NoData` is a first-class outcome, distinct from failure: the query ran
/// and matched nothing, so the view renders an explicit empty state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelOutput {
    /// A renderable chart.
    Chart(ChartSpec),
    /// A renderable table.
    Table(TableSpec),
    /// The selection matched no rows.
    NoData,
}

impl PanelOutput {
    /// Check if this output is the empty state.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    fn from_chart(spec: Option<ChartSpec>) -> Self {
        spec.map_or(Self::NoData, Self::Chart)
    }
}

/// The dashboard pipeline.
///
/// Owns the database handle for its lifetime; every panel goes through
/// [`Dashboard::dispatch`].
#[derive(Debug)]
pub struct Dashboard {
    db: Database,
    points_threshold: f64,
}

impl Dashboard {
    /// Create a dashboard over an open database.
    #[must_use]
    pub fn new(db: Database, config: &DashboardConfig) -> Self {
        Self {
            db,
            points_threshold: config.points_threshold,
        }
    }

    /// Access the underlying database, e.g. for selection lists.
    #[must_use]
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Run the pipeline for one selection.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails; an empty result is not an error
    /// but the [`PanelOutput::NoData`] outcome.
    pub fn dispatch(&self, selection: &Selection) -> Result<PanelOutput> {
        debug!("Dispatching {:?}", selection);
        match selection {
            Selection::DriverStandings(name) => {
                let rows = self.db.driver_standings(name)?;
                let points = transform::points_series(&rows, GroupField::Driver);
                Ok(PanelOutput::from_chart(chart::line_chart(
                    &points,
                    &panels::driver_options(name),
                )))
            }
            Selection::ConstructorStandings(name) => {
                let rows = self.db.constructor_standings(name)?;
                let points = transform::points_series(&rows, GroupField::Constructor);
                Ok(PanelOutput::from_chart(chart::line_chart(
                    &points,
                    &panels::constructor_options(name),
                )))
            }
            Selection::CircuitStandings(name) => {
                let rows = self.db.circuit_standings(name)?;
                let points = transform::points_series(&rows, GroupField::Driver);
                Ok(PanelOutput::from_chart(chart::line_chart(
                    &points,
                    &panels::circuit_options(name),
                )))
            }
            Selection::DuelPoints => {
                let rows = self.db.duel_points()?;
                let points = transform::cumulative_points(&rows, GroupField::Driver);
                Ok(PanelOutput::from_chart(chart::line_chart(
                    &points,
                    &panels::duel_points_options(),
                )))
            }
            Selection::DuelPositions => {
                let rows = self.db.duel_positions()?;
                let points = transform::position_series(&rows, GroupField::Driver);
                Ok(PanelOutput::from_chart(chart::line_chart(
                    &points,
                    &panels::duel_positions_options(),
                )))
            }
            Selection::Manufacturers { class, metric } => {
                let rows = self.db.manufacturer_points(*class)?;
                let aggregates =
                    transform::aggregate_points(&rows, self.points_threshold, *metric);
                Ok(PanelOutput::from_chart(chart::bar_chart(
                    &aggregates,
                    *metric,
                    &panels::manufacturer_options(*class, *metric, self.points_threshold),
                )))
            }
            Selection::HeadToHead { grand_prix } => self.head_to_head(grand_prix),
        }
    }

    /// Build the side-by-side comparison table for one grand prix.
    fn head_to_head(&self, grand_prix: &str) -> Result<PanelOutput> {
        let Some(race_id) = self.db.race_for_grand_prix(grand_prix)? else {
            return Ok(PanelOutput::NoData);
        };

        let results = self.db.head_to_head(race_id)?;
        // Both rivals must have a record for a side-by-side table.
        if results.len() < 2 {
            return Ok(PanelOutput::NoData);
        }

        let first = results[0].stats();
        let second = results[1].stats();
        let rows = first
            .into_iter()
            .zip(second)
            .map(|((stat, a), (_, b))| vec![stat.to_string(), a, b])
            .collect();

        Ok(PanelOutput::Table(TableSpec {
            title: format!("Head-to-Head Comparison for {grand_prix}"),
            columns: vec![
                "Stat".to_string(),
                DUEL_DRIVER_LABELS[0].to_string(),
                DUEL_DRIVER_LABELS[1].to_string(),
            ],
            rows,
        }))
    }
}
