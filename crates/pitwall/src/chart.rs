//! Chart descriptions for the rendering boundary.
//!
//! The builder maps transformed rows plus display options to a
//! [`ChartSpec`]: a renderer-agnostic description of a line or bar chart.
//! No numeric transformation happens here, only labeling and styling. The
//! output is deterministic for identical input: same series order, same
//! color assignment, byte-identical serialization.

use serde::Serialize;

use crate::model::{AggregateMetric, AggregateRow, SeriesPoint};

/// Default palette, assigned to series by first appearance.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Default line width in pixels.
const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// One line of a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    /// Series identifier (driver, constructor, manufacturer).
    pub key: String,
    /// Line color as a hex string or CSS color name.
    pub color: String,
    /// Line width in pixels.
    pub width: f32,
    /// Whether to draw point markers.
    pub markers: bool,
    /// `(x, y)` pairs in ascending x order.
    pub points: Vec<(f64, f64)>,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category label.
    pub label: String,
    /// Bar height.
    pub value: f64,
}

/// The bars of a bar chart, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    /// What the bars measure (axis legend).
    pub key: String,
    /// Bar color as a hex string or CSS color name.
    pub color: String,
    /// Bars in display order.
    pub bars: Vec<Bar>,
}

/// The plotted data of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "series", rename_all = "snake_case")]
pub enum ChartData {
    /// Line chart with one line per series key.
    Line(Vec<LineSeries>),
    /// Bar chart over categories.
    Bar(BarSeries),
}

/// A renderable chart description.
///
/// Consumed by the rendering boundary only; building one has no side
/// effects and identical input always produces an identical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Whether the y axis is inverted so the smallest value displays highest.
    pub y_axis_reversed: bool,
    /// The plotted data.
    pub data: ChartData,
}

impl ChartSpec {
    /// Serialize the spec to pretty JSON for an external renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Display options for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Explicit series colors, consulted before the palette.
    pub color_map: Vec<(String, String)>,
    /// Invert the y axis (rank 1 displays highest).
    pub reversed_y: bool,
    /// Line width in pixels.
    pub line_width: f32,
    /// Draw point markers on lines.
    pub markers: bool,
}

impl ChartOptions {
    /// Options with the given labels and default styling.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            color_map: Vec::new(),
            reversed_y: false,
            line_width: DEFAULT_LINE_WIDTH,
            markers: false,
        }
    }

    /// Set explicit colors for named series.
    #[must_use]
    pub fn with_colors(mut self, colors: &[(&str, &str)]) -> Self {
        self.color_map = colors
            .iter()
            .map(|(key, color)| ((*key).to_string(), (*color).to_string()))
            .collect();
        self
    }

    /// Invert the y axis.
    #[must_use]
    pub fn with_reversed_y(mut self) -> Self {
        self.reversed_y = true;
        self
    }

    /// Set the line width.
    #[must_use]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Draw point markers on lines.
    #[must_use]
    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    fn color_for(&self, key: &str, index: usize) -> String {
        self.color_map
            .iter()
            .find(|(k, _)| k == key)
            .map_or_else(|| PALETTE[index % PALETTE.len()].to_string(), |(_, c)| c.clone())
    }
}

/// Build a line chart from transformed series points.
///
/// Returns `None` for empty input: no rows means no chart, which the
/// consuming layer renders as a "no data" state, not an error. Series keep
/// the grouping order of the input; colors come from the explicit map or,
/// failing that, the palette in first-seen order.
#[must_use]
pub fn line_chart(points: &[SeriesPoint], options: &ChartOptions) -> Option<ChartSpec> {
    if points.is_empty() {
        return None;
    }

    let mut series: Vec<LineSeries> = Vec::new();
    for point in points {
        match series.iter_mut().find(|s| s.key == point.series_key) {
            Some(line) => line.points.push((point.x, point.y)),
            None => {
                let color = options.color_for(&point.series_key, series.len());
                series.push(LineSeries {
                    key: point.series_key.clone(),
                    color,
                    width: options.line_width,
                    markers: options.markers,
                    points: vec![(point.x, point.y)],
                });
            }
        }
    }

    Some(ChartSpec {
        title: options.title.clone(),
        x_label: options.x_label.clone(),
        y_label: options.y_label.clone(),
        y_axis_reversed: options.reversed_y,
        data: ChartData::Line(series),
    })
}

/// Build a bar chart from threshold-filtered aggregate rows.
///
/// Returns `None` for empty input, same contract as [`line_chart`]. Bars
/// keep the order of the input rows (already sorted by the transform).
#[must_use]
pub fn bar_chart(
    rows: &[AggregateRow],
    metric: AggregateMetric,
    options: &ChartOptions,
) -> Option<ChartSpec> {
    if rows.is_empty() {
        return None;
    }

    let bars = rows
        .iter()
        .map(|row| Bar {
            label: row.group_key.clone(),
            value: metric.value(row),
        })
        .collect();

    Some(ChartSpec {
        title: options.title.clone(),
        x_label: options.x_label.clone(),
        y_label: options.y_label.clone(),
        y_axis_reversed: options.reversed_y,
        data: ChartData::Bar(BarSeries {
            key: metric.label().to_string(),
            color: options.color_for(metric.label(), 0),
            bars,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, key: &str) -> SeriesPoint {
        SeriesPoint {
            x,
            y,
            series_key: key.to_string(),
        }
    }

    fn sample_points() -> Vec<SeriesPoint> {
        vec![
            point(1.0, 10.0, "lewis-hamilton"),
            point(2.0, 25.0, "lewis-hamilton"),
            point(1.0, 18.0, "max-verstappen"),
            point(2.0, 43.0, "max-verstappen"),
        ]
    }

    #[test]
    fn test_line_chart_empty_input_is_none() {
        let options = ChartOptions::new("t", "x", "y");
        assert!(line_chart(&[], &options).is_none());
    }

    #[test]
    fn test_line_chart_groups_series_in_first_seen_order() {
        let options = ChartOptions::new("Duel", "Race", "Points");
        let spec = line_chart(&sample_points(), &options).unwrap();

        let ChartData::Line(series) = &spec.data else {
            panic!("expected a line chart");
        };
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, "lewis-hamilton");
        assert_eq!(series[1].key, "max-verstappen");
        assert_eq!(series[0].points, vec![(1.0, 10.0), (2.0, 25.0)]);
    }

    #[test]
    fn test_line_chart_palette_assignment_by_first_seen() {
        let options = ChartOptions::new("t", "x", "y");
        let spec = line_chart(&sample_points(), &options).unwrap();

        let ChartData::Line(series) = &spec.data else {
            panic!("expected a line chart");
        };
        assert_eq!(series[0].color, PALETTE[0]);
        assert_eq!(series[1].color, PALETTE[1]);
    }

    #[test]
    fn test_line_chart_explicit_color_map_wins() {
        let options = ChartOptions::new("t", "x", "y")
            .with_colors(&[("lewis-hamilton", "blue"), ("max-verstappen", "red")]);
        let spec = line_chart(&sample_points(), &options).unwrap();

        let ChartData::Line(series) = &spec.data else {
            panic!("expected a line chart");
        };
        assert_eq!(series[0].color, "blue");
        assert_eq!(series[1].color, "red");
    }

    #[test]
    fn test_line_chart_styling_options() {
        let options = ChartOptions::new("t", "x", "y")
            .with_line_width(4.0)
            .with_markers()
            .with_reversed_y();
        let spec = line_chart(&sample_points(), &options).unwrap();

        assert!(spec.y_axis_reversed);
        let ChartData::Line(series) = &spec.data else {
            panic!("expected a line chart");
        };
        assert!(series.iter().all(|s| (s.width - 4.0).abs() < f32::EPSILON));
        assert!(series.iter().all(|s| s.markers));
    }

    #[test]
    fn test_line_chart_deterministic_serialization() {
        let options = ChartOptions::new("Duel", "Race", "Points");
        let first = line_chart(&sample_points(), &options).unwrap();
        let second = line_chart(&sample_points(), &options).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_bar_chart_empty_input_is_none() {
        let options = ChartOptions::new("t", "x", "y");
        assert!(bar_chart(&[], AggregateMetric::Mean, &options).is_none());
    }

    #[test]
    fn test_bar_chart_keeps_row_order_and_metric() {
        let rows = vec![
            AggregateRow {
                group_key: "honda".to_string(),
                mean: 15.0,
                total: 300.0,
            },
            AggregateRow {
                group_key: "mercedes".to_string(),
                mean: 12.0,
                total: 480.0,
            },
        ];
        let options = ChartOptions::new("Engines", "Engine Manufacturer", "Average Points");
        let spec = bar_chart(&rows, AggregateMetric::Mean, &options).unwrap();

        let ChartData::Bar(series) = &spec.data else {
            panic!("expected a bar chart");
        };
        assert_eq!(series.key, "Average Points");
        assert_eq!(series.bars[0].label, "honda");
        assert!((series.bars[0].value - 15.0).abs() < f64::EPSILON);
        assert_eq!(series.bars[1].label, "mercedes");
    }

    #[test]
    fn test_chart_spec_json_shape() {
        let options = ChartOptions::new("Duel", "Race", "Points");
        let spec = line_chart(&sample_points(), &options).unwrap();
        let json = spec.to_json().unwrap();

        assert!(json.contains("\"kind\": \"line\""));
        assert!(json.contains("\"title\": \"Duel\""));
        assert!(json.contains("lewis-hamilton"));
    }
}
