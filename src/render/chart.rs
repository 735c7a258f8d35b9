//! Chart layout data for the HTML report.

use crate::log::BlockRecord;
use crate::model::{Algorithm, Dataset};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    fn can_draw(self, v: f64) -> bool {
        match self {
            Scale::Linear => v.is_finite(),
            Scale::Log => v.is_finite() && v > 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub label: String,
    pub color: String,
    /// (size, value) pairs in input order.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub series: Vec<SeriesView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub source: String,
    pub blocks: Vec<BlockRecord>,
    pub charts: Vec<ChartView>,
}

/// Build both report charts from a parsed Dataset:
/// - collisions vs size, linear axes
/// - every algorithm's search time vs size, log-log
pub fn build_report(dataset: &Dataset, source: &str) -> ReportData {
    if dataset.sizes().windows(2).any(|w| w[0] >= w[1]) {
        warn!(
            sizes = ?dataset.sizes(),
            "dataset sizes are not strictly ascending; plotting in log order"
        );
    }

    ReportData {
        source: source.to_string(),
        blocks: dataset.blocks(),
        charts: vec![collisions_chart(dataset), algorithms_chart(dataset)],
    }
}

fn collisions_chart(dataset: &Dataset) -> ChartView {
    let (x_scale, y_scale) = (Scale::Linear, Scale::Linear);
    let values = dataset.collisions().iter().map(|&c| c as f64);

    ChartView {
        id: "collisions".to_string(),
        title: "Hash and collisions".to_string(),
        x_label: "Dataset size".to_string(),
        y_label: "Count of collisions".to_string(),
        x_scale,
        y_scale,
        series: vec![SeriesView {
            label: "collisions".to_string(),
            color: "blue".to_string(),
            points: points(dataset.sizes(), values, x_scale, y_scale, "collisions"),
        }],
    }
}

fn algorithms_chart(dataset: &Dataset) -> ChartView {
    let (x_scale, y_scale) = (Scale::Log, Scale::Log);

    let series = Algorithm::ALL
        .into_iter()
        .map(|alg| SeriesView {
            label: alg.label().to_string(),
            color: alg.color().to_string(),
            points: points(
                dataset.sizes(),
                dataset.timings(alg).iter().copied(),
                x_scale,
                y_scale,
                alg.label(),
            ),
        })
        .collect();

    ChartView {
        id: "algorithms".to_string(),
        title: "All algorithms".to_string(),
        x_label: "Dataset size".to_string(),
        y_label: "Time of search".to_string(),
        x_scale,
        y_scale,
        series,
    }
}

/// Pair sizes with values, dropping points the axes cannot show (e.g. 0 on a log axis).
fn points(
    sizes: &[u64],
    values: impl Iterator<Item = f64>,
    x_scale: Scale,
    y_scale: Scale,
    label: &str,
) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(sizes.len());
    for (&size, value) in sizes.iter().zip(values) {
        let x = size as f64;
        if x_scale.can_draw(x) && y_scale.can_draw(value) {
            out.push([x, value]);
        } else {
            warn!(series = label, size, value, "dropping point that cannot be drawn on this axis");
        }
    }
    out
}
