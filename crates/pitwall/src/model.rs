//! Core row and selector types for pitwall.
//!
//! This module defines the shapes that move through the pipeline: raw rows
//! fetched from the database, the points derived from them by the transform
//! layer, and the closed selector enums that gate which queries may run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One result-set record for a standings or duel query.
///
/// Immutable once fetched; lives for a single request. Missing values are
/// kept as `None` rather than coerced, so the transform layer can drop them
/// explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRow {
    /// Race identifier, ascending in season order.
    pub race_id: i64,
    /// Driver identifier or display name, when the query selects one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    /// Constructor identifier or display name, when the query selects one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_id: Option<String>,
    /// Points scored, if recorded.
    pub points: Option<f64>,
    /// Finishing position, if recorded.
    pub position: Option<i64>,
}

impl RaceRow {
    /// Create a row keyed by driver, the common case in standings queries.
    #[must_use]
    pub fn for_driver(race_id: i64, driver_id: impl Into<String>, points: Option<f64>) -> Self {
        Self {
            race_id,
            driver_id: Some(driver_id.into()),
            constructor_id: None,
            points,
            position: None,
        }
    }

    /// Create a row keyed by constructor.
    #[must_use]
    pub fn for_constructor(
        race_id: i64,
        constructor_id: impl Into<String>,
        points: Option<f64>,
    ) -> Self {
        Self {
            race_id,
            driver_id: None,
            constructor_id: Some(constructor_id.into()),
            points,
            position: None,
        }
    }
}

/// Which identifier field of a [`RaceRow`] forms the series key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    /// Group rows by driver identifier.
    Driver,
    /// Group rows by constructor identifier.
    Constructor,
}

impl GroupField {
    /// The grouping key of a row, if the row carries one.
    #[must_use]
    pub fn key<'a>(&self, row: &'a RaceRow) -> Option<&'a str> {
        match self {
            Self::Driver => row.driver_id.as_deref(),
            Self::Constructor => row.constructor_id.as_deref(),
        }
    }
}

/// One point of a chart series derived from [`RaceRow`]s.
///
/// Grouped by `series_key`, ordered by `x` within each group; groups keep
/// the order in which their key first appeared in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Horizontal value (race id).
    pub x: f64,
    /// Vertical value (points or position).
    pub y: f64,
    /// Driver, constructor, or manufacturer identifier.
    pub series_key: String,
}

/// One `(manufacturer, points)` observation feeding the grouped aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturerPoints {
    /// Manufacturer identifier for the selected class, if recorded.
    pub manufacturer_id: Option<String>,
    /// Points scored by the entry, if recorded.
    pub points: Option<f64>,
}

/// Mean and total points for one group, after the threshold filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    /// The manufacturer-class key this group was formed on.
    pub group_key: String,
    /// Mean points per entry in the group.
    pub mean: f64,
    /// Total points across the group.
    pub total: f64,
}

/// Manufacturer class used as a grouping dimension.
///
/// The closed set of columns a manufacturer query may group on. The SQL
/// column name comes from [`ManufacturerClass::column`], never from user
/// text, so an unrecognized label fails with `InvalidSelection` before any
/// query is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManufacturerClass {
    /// Engine supplier.
    Engine,
    /// Tyre supplier.
    Tyre,
    /// Constructor team.
    Team,
}

impl ManufacturerClass {
    /// The database column this class groups on.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Engine => "engine_manufacturer_id",
            Self::Tyre => "tyre_manufacturer_id",
            Self::Team => "constructor_id",
        }
    }

    /// Human-readable label for titles and axis text.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Engine => "Engine Manufacturer",
            Self::Tyre => "Tyre Manufacturer",
            Self::Team => "Team",
        }
    }
}

impl fmt::Display for ManufacturerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine => write!(f, "engine"),
            Self::Tyre => write!(f, "tyre"),
            Self::Team => write!(f, "team"),
        }
    }
}

impl FromStr for ManufacturerClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engine" => Ok(Self::Engine),
            "tyre" => Ok(Self::Tyre),
            "team" => Ok(Self::Team),
            _ => Err(Error::invalid_selection(s, "engine, tyre, team")),
        }
    }
}

/// Which aggregate a manufacturer panel displays and sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateMetric {
    /// Mean points per entry.
    Mean,
    /// Total points.
    Total,
}

impl AggregateMetric {
    /// The displayed value of an aggregate row under this metric.
    #[must_use]
    pub fn value(&self, row: &AggregateRow) -> f64 {
        match self {
            Self::Mean => row.mean,
            Self::Total => row.total,
        }
    }

    /// Human-readable label for titles and axis text.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mean => "Average Points",
            Self::Total => "Total Points",
        }
    }
}

impl fmt::Display for AggregateMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Total => write!(f, "total"),
        }
    }
}

/// Full denormalized per-event record for one driver in one race.
///
/// Mirrors the per-event table keyed by `(race_id, driver_id, type)` and
/// feeds the head-to-head comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Race identifier.
    pub race_id: i64,
    /// Driver identifier.
    pub driver_id: String,
    /// Classification order on the results page.
    pub position_display_order: Option<i64>,
    /// Numeric finishing position (absent for DNF classifications).
    pub position_number: Option<i64>,
    /// Car number.
    pub driver_number: Option<i64>,
    /// Constructor the driver raced for.
    pub constructor_id: Option<String>,
    /// Engine supplier.
    pub engine_manufacturer_id: Option<String>,
    /// Tyre supplier.
    pub tyre_manufacturer_id: Option<String>,
    /// Laps completed.
    pub laps: Option<i64>,
    /// Total race time as displayed.
    pub time: Option<String>,
    /// Gap to the winner as displayed.
    pub gap: Option<String>,
    /// Interval to the car ahead as displayed.
    pub interval: Option<String>,
    /// Championship points awarded.
    pub points: Option<f64>,
    /// Qualifying position.
    pub qualification_position: Option<i64>,
    /// Grid position at the start.
    pub grid_position: Option<i64>,
    /// Positions gained from grid to flag.
    pub positions_gained: Option<i64>,
    /// Pit stops made.
    pub pit_stops: Option<i64>,
    /// Whether the driver set the fastest lap.
    pub fastest_lap: Option<bool>,
    /// Whether the driver was voted driver of the day.
    pub driver_of_the_day: Option<bool>,
    /// Whether the drive completed a grand slam.
    pub grand_slam: Option<bool>,
}

impl RaceResult {
    /// Stringified stat list for the comparison table, in display order.
    ///
    /// Excludes `race_id` and `driver_id` (they label the table, they are
    /// not stats). Missing values render as `-`.
    #[must_use]
    pub fn stats(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Position", fmt_opt(self.position_display_order.as_ref())),
            ("Classified Position", fmt_opt(self.position_number.as_ref())),
            ("Car Number", fmt_opt(self.driver_number.as_ref())),
            ("Constructor", fmt_opt(self.constructor_id.as_ref())),
            ("Engine", fmt_opt(self.engine_manufacturer_id.as_ref())),
            ("Tyres", fmt_opt(self.tyre_manufacturer_id.as_ref())),
            ("Laps", fmt_opt(self.laps.as_ref())),
            ("Time", fmt_opt(self.time.as_ref())),
            ("Gap", fmt_opt(self.gap.as_ref())),
            ("Interval", fmt_opt(self.interval.as_ref())),
            ("Points", fmt_opt(self.points.as_ref())),
            (
                "Qualifying Position",
                fmt_opt(self.qualification_position.as_ref()),
            ),
            ("Grid Position", fmt_opt(self.grid_position.as_ref())),
            ("Positions Gained", fmt_opt(self.positions_gained.as_ref())),
            ("Pit Stops", fmt_opt(self.pit_stops.as_ref())),
            ("Fastest Lap", fmt_opt(self.fastest_lap.as_ref())),
            ("Driver of the Day", fmt_opt(self.driver_of_the_day.as_ref())),
            ("Grand Slam", fmt_opt(self.grand_slam.as_ref())),
        ]
    }
}

fn fmt_opt<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}
