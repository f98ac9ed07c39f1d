//! Data access layer for pitwall.
//!
//! This module owns the read-only `SQLite` connection to the race database
//! and exposes one method per query the dashboards need. All user-selected
//! values are bound as parameters; result sets come back as typed rows, and
//! a query that matches nothing returns an empty `Vec`, never an error.

pub mod queries;

#[cfg(test)]
pub(crate) mod fixture;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{ManufacturerClass, ManufacturerPoints, RaceResult, RaceRow};

/// Driver identifiers of the two rivals the duel panels compare.
pub const DUEL_DRIVERS: [&str; 2] = ["lewis-hamilton", "max-verstappen"];

/// Handle to the race database.
///
/// Opened once at process start and passed explicitly to the dashboard;
/// there is no process-wide connection. The production connection is
/// read-only, matching the access model of the dashboards.
#[derive(Debug)]
pub struct Database {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Database {
    /// Open the race database at the given path, read-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        debug!("Opening race database at {}", path.display());
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        info!("Race database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory database instance for testing.
    ///
    /// Unlike [`Database::open`], the connection is writable so fixtures
    /// can be loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all drivers, for selection lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn driver_names(&self) -> Result<Vec<String>> {
        self.fetch_names(queries::DRIVER_NAMES)
    }

    /// Names of all constructors, for selection lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn constructor_names(&self) -> Result<Vec<String>> {
        self.fetch_names(queries::CONSTRUCTOR_NAMES)
    }

    /// Names of all circuits, for selection lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn circuit_names(&self) -> Result<Vec<String>> {
        self.fetch_names(queries::CIRCUIT_NAMES)
    }

    fn fetch_names(&self, query: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(query)?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Per-race standing points for one driver, selected by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn driver_standings(&self, name: &str) -> Result<Vec<RaceRow>> {
        let mut stmt = self.conn.prepare(queries::DRIVER_STANDINGS)?;
        let rows = stmt
            .query_map([name], Self::row_to_driver_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Driver standings for {:?}: {} rows", name, rows.len());
        Ok(rows)
    }

    /// Per-race standing points for one constructor, selected by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn constructor_standings(&self, name: &str) -> Result<Vec<RaceRow>> {
        let mut stmt = self.conn.prepare(queries::CONSTRUCTOR_STANDINGS)?;
        let rows = stmt
            .query_map([name], Self::row_to_constructor_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Constructor standings for {:?}: {} rows", name, rows.len());
        Ok(rows)
    }

    /// Per-driver standing points at one circuit, selected by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn circuit_standings(&self, name: &str) -> Result<Vec<RaceRow>> {
        let mut stmt = self.conn.prepare(queries::CIRCUIT_STANDINGS)?;
        let rows = stmt
            .query_map([name], Self::row_to_driver_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Circuit standings for {:?}: {} rows", name, rows.len());
        Ok(rows)
    }

    /// Race points per race for the two duel drivers.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn duel_points(&self) -> Result<Vec<RaceRow>> {
        let mut stmt = self.conn.prepare(queries::DUEL_POINTS)?;
        let rows = stmt
            .query_map(params![DUEL_DRIVERS[0], DUEL_DRIVERS[1]], |row| {
                Ok(RaceRow {
                    race_id: row.get("race_id")?,
                    driver_id: row.get("driver_id")?,
                    constructor_id: None,
                    points: row.get("race_points")?,
                    position: None,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Finishing positions per race for the two duel drivers.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn duel_positions(&self) -> Result<Vec<RaceRow>> {
        let mut stmt = self.conn.prepare(queries::DUEL_POSITIONS)?;
        let rows = stmt
            .query_map(params![DUEL_DRIVERS[0], DUEL_DRIVERS[1]], |row| {
                Ok(RaceRow {
                    race_id: row.get("race_id")?,
                    driver_id: row.get("driver_id")?,
                    constructor_id: None,
                    points: None,
                    position: row.get("position_display_order")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Manufacturer identifier and points for every race result, grouped
    /// on the column selected by `class`.
    ///
    /// The column name comes from the closed [`ManufacturerClass`] enum,
    /// so the query text is one of three constants.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn manufacturer_points(&self, class: ManufacturerClass) -> Result<Vec<ManufacturerPoints>> {
        let query = match class {
            ManufacturerClass::Engine => queries::MANUFACTURER_POINTS_ENGINE,
            ManufacturerClass::Tyre => queries::MANUFACTURER_POINTS_TYRE,
            ManufacturerClass::Team => queries::MANUFACTURER_POINTS_TEAM,
        };
        let mut stmt = self.conn.prepare(query)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ManufacturerPoints {
                    manufacturer_id: row.get("manufacturer_id")?,
                    points: row.get("points")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Manufacturer points for {class}: {} rows", rows.len());
        Ok(rows)
    }

    /// Full per-event records for the two duel drivers in one race.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn head_to_head(&self, race_id: i64) -> Result<Vec<RaceResult>> {
        let mut stmt = self.conn.prepare(queries::HEAD_TO_HEAD)?;
        let rows = stmt
            .query_map(
                params![race_id, DUEL_DRIVERS[0], DUEL_DRIVERS[1]],
                Self::row_to_race_result,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Resolve a grand prix (circuit) name to a race id with per-event data.
    ///
    /// Returns `None` when the name matches no such race.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn race_for_grand_prix(&self, name: &str) -> Result<Option<i64>> {
        let race_id = self
            .conn
            .query_row(queries::RACE_FOR_GRAND_PRIX, [name], |row| row.get(0))
            .optional()?;
        Ok(race_id)
    }

    /// Convert a standings row keyed by driver name.
    fn row_to_driver_row(row: &Row) -> rusqlite::Result<RaceRow> {
        Ok(RaceRow {
            race_id: row.get("race_id")?,
            driver_id: row.get("driver")?,
            constructor_id: None,
            points: row.get("points")?,
            position: None,
        })
    }

    /// Convert a standings row keyed by constructor name.
    fn row_to_constructor_row(row: &Row) -> rusqlite::Result<RaceRow> {
        Ok(RaceRow {
            race_id: row.get("race_id")?,
            driver_id: None,
            constructor_id: row.get("constructor")?,
            points: row.get("points")?,
            position: None,
        })
    }

    /// Convert a full per-event record.
    fn row_to_race_result(row: &Row) -> rusqlite::Result<RaceResult> {
        Ok(RaceResult {
            race_id: row.get("race_id")?,
            driver_id: row.get("driver_id")?,
            position_display_order: row.get("position_display_order")?,
            position_number: row.get("position_number")?,
            driver_number: row.get("driver_number")?,
            constructor_id: row.get("constructor_id")?,
            engine_manufacturer_id: row.get("engine_manufacturer_id")?,
            tyre_manufacturer_id: row.get("tyre_manufacturer_id")?,
            laps: row.get("race_laps")?,
            time: row.get("race_time")?,
            gap: row.get("race_gap")?,
            interval: row.get("race_interval")?,
            points: row.get("race_points")?,
            qualification_position: row.get("race_qualification_position_number")?,
            grid_position: row.get("race_grid_position_number")?,
            positions_gained: row.get("race_positions_gained")?,
            pit_stops: row.get("race_pit_stops")?,
            fastest_lap: row.get("race_fastest_lap")?,
            driver_of_the_day: row.get("race_driver_of_the_day")?,
            grand_slam: row.get("race_grand_slam")?,
        })
    }
}
