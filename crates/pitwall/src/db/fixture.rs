//! In-memory database fixtures for tests.
//!
//! The production database is an external, read-only artifact; this module
//! exists only so tests can build a miniature season with the same logical
//! tables.

use rusqlite::params;

use super::Database;
use crate::error::Result;

/// DDL for the logical tables the queries read.
const FIXTURE_SCHEMA: &[&str] = &[
    "CREATE TABLE driver (id TEXT PRIMARY KEY, name TEXT NOT NULL)",
    "CREATE TABLE constructor (id TEXT PRIMARY KEY, name TEXT NOT NULL)",
    "CREATE TABLE circuit (id TEXT PRIMARY KEY, name TEXT NOT NULL)",
    "CREATE TABLE race (id INTEGER PRIMARY KEY, circuit_id TEXT NOT NULL)",
    r"CREATE TABLE race_driver_standing (
        race_id INTEGER NOT NULL,
        driver_id TEXT NOT NULL,
        points REAL,
        PRIMARY KEY (race_id, driver_id)
    )",
    r"CREATE TABLE race_constructor_standing (
        race_id INTEGER NOT NULL,
        constructor_id TEXT NOT NULL,
        points REAL,
        PRIMARY KEY (race_id, constructor_id)
    )",
    r"CREATE TABLE race_data (
        race_id INTEGER NOT NULL,
        driver_id TEXT NOT NULL,
        type TEXT NOT NULL,
        position_display_order INTEGER,
        position_number INTEGER,
        driver_number INTEGER,
        constructor_id TEXT,
        engine_manufacturer_id TEXT,
        tyre_manufacturer_id TEXT,
        race_laps INTEGER,
        race_time TEXT,
        race_gap TEXT,
        race_interval TEXT,
        race_points REAL,
        race_qualification_position_number INTEGER,
        race_grid_position_number INTEGER,
        race_positions_gained INTEGER,
        race_pit_stops INTEGER,
        race_fastest_lap INTEGER,
        race_driver_of_the_day INTEGER,
        race_grand_slam INTEGER,
        PRIMARY KEY (race_id, driver_id, type)
    )",
];

/// Create the fixture schema on an in-memory database.
pub fn create_schema(db: &Database) -> Result<()> {
    for statement in FIXTURE_SCHEMA {
        db.conn.execute(statement, [])?;
    }
    Ok(())
}

/// Seed a three-race miniature of the 2021 season.
///
/// Two drivers duelling for two constructors, standings after each race,
/// and full per-event records for every race.
pub fn seed_season(db: &Database) -> Result<()> {
    db.conn.execute_batch(
        r"
        INSERT INTO driver (id, name) VALUES
            ('lewis-hamilton', 'Lewis Hamilton'),
            ('max-verstappen', 'Max Verstappen'),
            ('lando-norris', 'Lando Norris');
        INSERT INTO constructor (id, name) VALUES
            ('mercedes', 'Mercedes'),
            ('red-bull', 'Red Bull'),
            ('mclaren', 'McLaren');
        INSERT INTO circuit (id, name) VALUES
            ('bahrain', 'Bahrain'),
            ('imola', 'Emilia-Romagna'),
            ('portimao', 'Portugal');
        INSERT INTO race (id, circuit_id) VALUES
            (1036, 'bahrain'),
            (1037, 'imola'),
            (1038, 'portimao');
        ",
    )?;

    // Championship standings as of each race.
    let driver_standings: &[(i64, &str, f64)] = &[
        (1036, "lewis-hamilton", 25.0),
        (1036, "max-verstappen", 18.0),
        (1036, "lando-norris", 15.0),
        (1037, "lewis-hamilton", 44.0),
        (1037, "max-verstappen", 43.0),
        (1037, "lando-norris", 27.0),
        (1038, "lewis-hamilton", 69.0),
        (1038, "max-verstappen", 61.0),
        (1038, "lando-norris", 37.0),
    ];
    for (race_id, driver_id, points) in driver_standings {
        db.conn.execute(
            "INSERT INTO race_driver_standing (race_id, driver_id, points) VALUES (?1, ?2, ?3)",
            params![race_id, driver_id, points],
        )?;
    }

    let constructor_standings: &[(i64, &str, f64)] = &[
        (1036, "mercedes", 41.0),
        (1036, "red-bull", 28.0),
        (1037, "mercedes", 60.0),
        (1037, "red-bull", 53.0),
        (1038, "mercedes", 101.0),
        (1038, "red-bull", 83.0),
    ];
    for (race_id, constructor_id, points) in constructor_standings {
        db.conn.execute(
            r"INSERT INTO race_constructor_standing (race_id, constructor_id, points)
              VALUES (?1, ?2, ?3)",
            params![race_id, constructor_id, points],
        )?;
    }

    // Per-event records: (race, driver, finish, grid, points, constructor, engine).
    let results: &[(i64, &str, i64, i64, f64, &str, &str)] = &[
        (1036, "lewis-hamilton", 1, 2, 25.0, "mercedes", "mercedes"),
        (1036, "max-verstappen", 2, 1, 18.0, "red-bull", "honda"),
        (1037, "lewis-hamilton", 2, 1, 19.0, "mercedes", "mercedes"),
        (1037, "max-verstappen", 1, 3, 25.0, "red-bull", "honda"),
        (1038, "lewis-hamilton", 1, 2, 25.0, "mercedes", "mercedes"),
        (1038, "max-verstappen", 2, 3, 18.0, "red-bull", "honda"),
    ];
    for (race_id, driver_id, finish, grid, points, team, engine) in results {
        db.conn.execute(
            r"INSERT INTO race_data (
                race_id, driver_id, type,
                position_display_order, position_number, driver_number,
                constructor_id, engine_manufacturer_id, tyre_manufacturer_id,
                race_laps, race_time, race_gap, race_interval, race_points,
                race_qualification_position_number, race_grid_position_number,
                race_positions_gained, race_pit_stops,
                race_fastest_lap, race_driver_of_the_day, race_grand_slam
            ) VALUES (
                ?1, ?2, 'RACE_RESULT',
                ?3, ?3, ?4,
                ?5, ?6, 'pirelli',
                56, NULL, NULL, NULL, ?7,
                ?4, ?4,
                0, 2,
                0, 0, 0
            )",
            params![race_id, driver_id, finish, grid, team, engine, points],
        )?;
    }

    Ok(())
}

/// Open an in-memory database with schema and season data ready.
pub fn seeded() -> Database {
    let db = Database::open_in_memory().expect("failed to open in-memory database");
    create_schema(&db).expect("failed to create fixture schema");
    seed_season(&db).expect("failed to seed fixture data");
    db
}
