//! Series normalization: raw per-report disclosures to sparse numeric points

use serde::Serialize;

use crate::store::{Org, RawMetric, ReportId, ReportSequence};

/// One numeric observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub report: ReportId,
    pub value: f64,
}

/// Normalized, chart-ready series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSeries {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: &'static str,
    pub org: Org,
    /// Sparse; only reports that disclosed a number
    pub points: Vec<Point>,
    /// Source metric, for exports that show the disclosure as printed
    #[serde(skip)]
    pub source: Option<&'static RawMetric>,
}

impl DataSeries {
    /// Value at a report, if the series has a point there
    pub fn value_at(&self, report: &str) -> Option<f64> {
        self.points.iter().find(|p| p.report == report).map(|p| p.value)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Convert a raw metric into points, in sequence order.
///
/// Only numeric disclosures produce a point (zero included). Missing entries and
/// text placeholders such as "N/R" are skipped, never turned into zeros.
pub fn normalize(metric: &RawMetric, sequence: &ReportSequence) -> Vec<Point> {
    sequence
        .ids
        .iter()
        .filter_map(|&report| {
            metric
                .value_at(report)
                .as_number()
                .map(|value| Point { report, value })
        })
        .collect()
}
