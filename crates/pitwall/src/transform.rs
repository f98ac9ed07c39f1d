//! Pure reshaping of result sets into chart-ready series.
//!
//! Every function here is side-effect free: rows in, points out. Rows with
//! a missing grouping key or a missing numeric value are dropped before any
//! arithmetic happens; nothing is silently coerced to zero. Groups keep the
//! order in which their key first appears in the input, and rows that share
//! a race id within a group are processed in encounter order.

use std::collections::HashMap;

use crate::model::{
    AggregateMetric, AggregateRow, GroupField, ManufacturerPoints, RaceRow, SeriesPoint,
};

/// Per-race points for each group, uncumulated.
///
/// Used by the driver, constructor, and circuit performance panels. Rows
/// without points are dropped.
#[must_use]
pub fn points_series(rows: &[RaceRow], group_field: GroupField) -> Vec<SeriesPoint> {
    series(rows, group_field, |row| row.points)
}

/// Running sum of points per group, in ascending race order.
///
/// Rows without points are dropped before accumulation, so a missing value
/// never contributes a phantom zero to the running total.
#[must_use]
pub fn cumulative_points(rows: &[RaceRow], group_field: GroupField) -> Vec<SeriesPoint> {
    let mut points = series(rows, group_field, |row| row.points);

    let mut running: HashMap<String, f64> = HashMap::new();
    for point in &mut points {
        let sum = running.entry(point.series_key.clone()).or_insert(0.0);
        *sum += point.y;
        point.y = *sum;
    }
    points
}

/// Finishing position per race for each group.
///
/// The position value passes through unchanged; inverting the axis so that
/// first place displays highest is the chart layer's job.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn position_series(rows: &[RaceRow], group_field: GroupField) -> Vec<SeriesPoint> {
    series(rows, group_field, |row| row.position.map(|p| p as f64))
}

/// Group rows, sort each group by race id, and extract one value per row.
///
/// The sort is stable, so rows sharing a race id within a group keep their
/// encounter order. Output points are emitted group by group, groups in
/// first-seen order.
#[allow(clippy::cast_precision_loss)]
fn series(
    rows: &[RaceRow],
    group_field: GroupField,
    value: impl Fn(&RaceRow) -> Option<f64>,
) -> Vec<SeriesPoint> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<(i64, f64)>> = HashMap::new();

    for row in rows {
        let Some(key) = group_field.key(row) else {
            continue;
        };
        let Some(y) = value(row) else {
            continue;
        };
        if !groups.contains_key(key) {
            order.push(key.to_string());
        }
        groups.entry(key.to_string()).or_default().push((row.race_id, y));
    }

    let mut points = Vec::new();
    for key in order {
        let mut group = groups.remove(&key).unwrap_or_default();
        group.sort_by_key(|(race_id, _)| *race_id);
        points.extend(group.into_iter().map(|(race_id, y)| SeriesPoint {
            x: race_id as f64,
            y,
            series_key: key.clone(),
        }));
    }
    points
}

/// Mean and total points per manufacturer group, threshold-filtered.
///
/// Groups whose total is below `threshold` are dropped. The survivors are
/// sorted descending by the displayed `metric`, with the group key as an
/// ascending tie-break so the output order is fully determined.
#[must_use]
pub fn aggregate_points(
    rows: &[ManufacturerPoints],
    threshold: f64,
    metric: AggregateMetric,
) -> Vec<AggregateRow> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, u64)> = HashMap::new();

    for row in rows {
        let Some(key) = row.manufacturer_id.as_deref() else {
            continue;
        };
        let Some(points) = row.points else {
            continue;
        };
        if !sums.contains_key(key) {
            order.push(key.to_string());
        }
        let entry = sums.entry(key.to_string()).or_insert((0.0, 0));
        entry.0 += points;
        entry.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let mut aggregates: Vec<AggregateRow> = order
        .into_iter()
        .filter_map(|key| {
            let (total, count) = sums.remove(&key)?;
            if total < threshold {
                return None;
            }
            Some(AggregateRow {
                group_key: key,
                mean: total / count as f64,
                total,
            })
        })
        .collect();

    aggregates.sort_by(|a, b| {
        metric
            .value(b)
            .total_cmp(&metric.value(a))
            .then_with(|| a.group_key.cmp(&b.group_key))
    });
    aggregates
}
