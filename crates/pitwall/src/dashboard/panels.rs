//! Panel metadata and display options.
//!
//! One parameterized pipeline serves every dashboard tab; this module is
//! the configuration table that tells each invocation how to label and
//! style itself. Nothing here runs queries or touches data.

use crate::chart::ChartOptions;
use crate::model::{AggregateMetric, ManufacturerClass};

/// Display names of the two duel drivers, in duel order.
pub const DUEL_DRIVER_LABELS: [&str; 2] = ["Lewis Hamilton", "Max Verstappen"];

/// Identity of one dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo {
    /// Stable machine name (CLI subcommand).
    pub name: &'static str,
    /// Human-readable tab title.
    pub title: &'static str,
}

/// Every tab the dashboard serves.
pub const PANELS: &[PanelInfo] = &[
    PanelInfo {
        name: "driver",
        title: "Driver Performance",
    },
    PanelInfo {
        name: "constructor",
        title: "Constructor Performance",
    },
    PanelInfo {
        name: "circuit",
        title: "Circuit Performance",
    },
    PanelInfo {
        name: "duel-points",
        title: "Hamilton vs Verstappen: Cumulative Points",
    },
    PanelInfo {
        name: "duel-positions",
        title: "Hamilton vs Verstappen: Race Positions",
    },
    PanelInfo {
        name: "manufacturers",
        title: "Manufacturer Performance",
    },
    PanelInfo {
        name: "head-to-head",
        title: "Head-to-Head Comparison",
    },
];

/// Options for the per-driver points panel.
#[must_use]
pub fn driver_options(name: &str) -> ChartOptions {
    ChartOptions::new(format!("Driver Performance: {name}"), "Race", "Points")
}

/// Options for the per-constructor points panel.
#[must_use]
pub fn constructor_options(name: &str) -> ChartOptions {
    ChartOptions::new(format!("Constructor Performance: {name}"), "Race", "Points")
}

/// Options for the per-circuit points panel.
#[must_use]
pub fn circuit_options(name: &str) -> ChartOptions {
    ChartOptions::new(format!("Circuit Performance: {name}"), "Race", "Points")
}

/// Options for the duel cumulative points panel.
///
/// The rivals keep their traditional colors; wide lines with markers, as
/// the season-review chart is usually shown.
#[must_use]
pub fn duel_points_options() -> ChartOptions {
    ChartOptions::new(
        "Hamilton vs Verstappen: Cumulative Points, 2021",
        "Race",
        "Cumulative Points",
    )
    .with_colors(&[("lewis-hamilton", "blue"), ("max-verstappen", "red")])
    .with_line_width(4.0)
    .with_markers()
}

/// Options for the duel race positions panel.
///
/// The y axis is reversed here so first place displays highest; the
/// transform layer passes positions through untouched.
#[must_use]
pub fn duel_positions_options() -> ChartOptions {
    ChartOptions::new(
        "Hamilton vs Verstappen: Race Positions, 2021",
        "Race",
        "Position",
    )
    .with_colors(&[("lewis-hamilton", "blue"), ("max-verstappen", "red")])
    .with_line_width(4.0)
    .with_markers()
    .with_reversed_y()
}

/// Options for a manufacturer aggregate panel.
#[must_use]
pub fn manufacturer_options(
    class: ManufacturerClass,
    metric: AggregateMetric,
    threshold: f64,
) -> ChartOptions {
    ChartOptions::new(
        format!(
            "{} by {} (total \u{2265} {threshold})",
            metric.label(),
            class.label()
        ),
        class.label(),
        metric.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_names_are_unique() {
        for (i, panel) in PANELS.iter().enumerate() {
            assert!(
                PANELS[i + 1..].iter().all(|p| p.name != panel.name),
                "duplicate panel name: {}",
                panel.name
            );
        }
    }

    #[test]
    fn test_duel_options_pin_rival_colors() {
        let options = duel_points_options();
        assert!(options
            .color_map
            .iter()
            .any(|(k, c)| k == "lewis-hamilton" && c == "blue"));
        assert!(options
            .color_map
            .iter()
            .any(|(k, c)| k == "max-verstappen" && c == "red"));
        assert!(!options.reversed_y);
    }

    #[test]
    fn test_positions_panel_reverses_axis() {
        assert!(duel_positions_options().reversed_y);
    }

    #[test]
    fn test_manufacturer_title_names_class_and_metric() {
        let options =
            manufacturer_options(ManufacturerClass::Engine, AggregateMetric::Mean, 100.0);
        assert!(options.title.contains("Average Points"));
        assert!(options.title.contains("Engine Manufacturer"));
        assert!(options.title.contains("100"));
    }
}
