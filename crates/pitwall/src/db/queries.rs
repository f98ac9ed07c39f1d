//! SQL query text for the race database.
//!
//! Every query is a constant string with `?n` placeholders. User-selected
//! values are bound as parameters by the [`Database`](super::Database)
//! methods; no query here is ever built by interpolating user text.

/// Names of all drivers, for selection lists.
pub const DRIVER_NAMES: &str = r"
SELECT name FROM driver ORDER BY name
";

/// Names of all constructors, for selection lists.
pub const CONSTRUCTOR_NAMES: &str = r"
SELECT name FROM constructor ORDER BY name
";

/// Names of all circuits, for selection lists.
pub const CIRCUIT_NAMES: &str = r"
SELECT name FROM circuit ORDER BY name
";

/// Per-race standing points for one driver, by driver name.
pub const DRIVER_STANDINGS: &str = r"
SELECT race.id AS race_id, driver.name AS driver, race_driver_standing.points AS points
FROM race_driver_standing
JOIN driver ON driver.id = race_driver_standing.driver_id
JOIN race ON race.id = race_driver_standing.race_id
WHERE driver.name = ?1
ORDER BY race.id
";

/// Per-race standing points for one constructor, by constructor name.
pub const CONSTRUCTOR_STANDINGS: &str = r"
SELECT race.id AS race_id, constructor.name AS constructor, race_constructor_standing.points AS points
FROM race_constructor_standing
JOIN constructor ON constructor.id = race_constructor_standing.constructor_id
JOIN race ON race.id = race_constructor_standing.race_id
WHERE constructor.name = ?1
ORDER BY race.id
";

/// Per-driver standing points at one circuit, by circuit name.
pub const CIRCUIT_STANDINGS: &str = r"
SELECT race.id AS race_id, driver.name AS driver, race_driver_standing.points AS points
FROM race
JOIN circuit ON circuit.id = race.circuit_id
JOIN race_driver_standing ON race.id = race_driver_standing.race_id
JOIN driver ON driver.id = race_driver_standing.driver_id
WHERE circuit.name = ?1
ORDER BY race.id
";

/// Race points per race for the two duel drivers.
pub const DUEL_POINTS: &str = r"
SELECT race_id, driver_id, race_points
FROM race_data
WHERE type = 'RACE_RESULT' AND driver_id IN (?1, ?2)
ORDER BY race_id
";

/// Finishing positions per race for the two duel drivers.
pub const DUEL_POSITIONS: &str = r"
SELECT race_id, driver_id, position_display_order
FROM race_data
WHERE type = 'RACE_RESULT' AND driver_id IN (?1, ?2)
ORDER BY race_id
";

/// Engine manufacturer and points for every race result.
pub const MANUFACTURER_POINTS_ENGINE: &str = r"
SELECT engine_manufacturer_id AS manufacturer_id, race_points AS points
FROM race_data
WHERE type = 'RACE_RESULT'
";

/// Tyre manufacturer and points for every race result.
pub const MANUFACTURER_POINTS_TYRE: &str = r"
SELECT tyre_manufacturer_id AS manufacturer_id, race_points AS points
FROM race_data
WHERE type = 'RACE_RESULT'
";

/// Constructor team and points for every race result.
pub const MANUFACTURER_POINTS_TEAM: &str = r"
SELECT constructor_id AS manufacturer_id, race_points AS points
FROM race_data
WHERE type = 'RACE_RESULT'
";

/// Full per-event records for two drivers in one race.
pub const HEAD_TO_HEAD: &str = r"
SELECT
    race_id,
    driver_id,
    position_display_order,
    position_number,
    driver_number,
    constructor_id,
    engine_manufacturer_id,
    tyre_manufacturer_id,
    race_laps,
    race_time,
    race_gap,
    race_interval,
    race_points,
    race_qualification_position_number,
    race_grid_position_number,
    race_positions_gained,
    race_pit_stops,
    race_fastest_lap,
    race_driver_of_the_day,
    race_grand_slam
FROM race_data
WHERE race_id = ?1 AND type = 'RACE_RESULT' AND driver_id IN (?2, ?3)
ORDER BY driver_id
";

/// Resolve a grand prix (circuit) name to a race id present in the
/// per-event data.
pub const RACE_FOR_GRAND_PRIX: &str = r"
SELECT DISTINCT race.id
FROM race
JOIN circuit ON circuit.id = race.circuit_id
JOIN race_data ON race_data.race_id = race.id
WHERE circuit.name = ?1
ORDER BY race.id
LIMIT 1
";
