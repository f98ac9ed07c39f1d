//! `pitwall` - Formula 1 history dashboards from a local `SQLite` database
//!
//! This library turns race history rows into chart-ready series and
//! comparison tables: parameterized read queries, pure data reshaping, and
//! deterministic chart descriptions for an external renderer.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod chart;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod transform;

pub use chart::{ChartOptions, ChartSpec};
pub use config::Config;
pub use dashboard::{Dashboard, PanelOutput, Selection, TableSpec};
pub use db::Database;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{AggregateMetric, GroupField, ManufacturerClass, RaceRow};
