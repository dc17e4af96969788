//! Chart data preparation: dense tables for line/bar charts, aggregates for pie charts

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::HashSet;
use tracing::debug;

use crate::series::DataSeries;
use crate::store::{Org, ReportId, ReportSequence};

/// Inclusive report window within one organization's sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRange {
    pub org: Org,
    pub start: String,
    pub end: String,
}

impl ReportRange {
    pub fn new(org: Org, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            org,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Every report the organization has published
    pub fn full(org: Org) -> Self {
        let sequence = org.sequence();
        Self::new(
            org,
            sequence.first().unwrap_or_default(),
            sequence.last().unwrap_or_default(),
        )
    }

    pub fn sequence(&self) -> &'static ReportSequence {
        self.org.sequence()
    }

    /// Reports covered, in canonical order. Reversed or unknown endpoints give an empty window.
    pub fn reports(&self) -> &'static [ReportId] {
        self.sequence().window(&self.start, &self.end)
    }

    pub fn is_valid(&self) -> bool {
        let sequence = self.sequence();
        sequence.position(&self.start).is_some() && sequence.position(&self.end).is_some()
    }
}

/// One table row: a report and one value per series, in series order.
///
/// `Row<f64>` feeds charts; `RawRow` carries each disclosure as printed
/// ("N/R" kept, empty when absent).
#[derive(Debug, Clone, PartialEq)]
pub struct Row<V = f64> {
    pub report: ReportId,
    pub period: &'static str,
    pub values: Vec<(String, V)>,
}

pub type RawRow = Row<String>;

impl<V: Clone> Row<V> {
    pub fn get(&self, series_id: &str) -> Option<V> {
        self.values.iter().find(|(id, _)| id == series_id).map(|(_, v)| v.clone())
    }
}

/// Serialized as a flat record: `{"report": "R1", "<series id>": value, ...}`
impl<V: Serialize> Serialize for Row<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("report", self.report)?;
        for (id, value) in &self.values {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub id: String,
    pub name: String,
    pub color: &'static str,
    pub value: f64,
}

/// Series that belong to the range's organization; others are never mixed in
fn same_org<'a>(series: &'a [DataSeries], range: &ReportRange) -> Vec<&'a DataSeries> {
    series
        .iter()
        .filter(|s| {
            let keep = s.org == range.org;
            if !keep {
                debug!("Skipping {} series '{}' for a {} range", s.org, s.id, range.org);
            }
            keep
        })
        .collect()
}

/// Dense table over the range: one row per report, a value for every series (0 when absent)
pub fn prepare_table(series: &[DataSeries], range: &ReportRange) -> Vec<Row> {
    let sequence = range.sequence();
    let series = same_org(series, range);

    range
        .reports()
        .iter()
        .map(|&report| Row {
            report,
            period: sequence.period(report).unwrap_or_default(),
            values: series
                .iter()
                .map(|s| (s.id.clone(), s.value_at(report).unwrap_or(0.0)))
                .collect(),
        })
        .collect()
}

/// Table for pre-formatted exports, showing each disclosure as printed.
///
/// Series without a source metric (totals, calculated) show their numeric value
/// or an empty cell.
pub fn prepare_raw_table(series: &[DataSeries], range: &ReportRange) -> Vec<RawRow> {
    let sequence = range.sequence();
    let series = same_org(series, range);

    range
        .reports()
        .iter()
        .map(|&report| Row {
            report,
            period: sequence.period(report).unwrap_or_default(),
            values: series
                .iter()
                .map(|s| {
                    let cell = match s.source {
                        Some(metric) => metric.value_at(report).raw(),
                        None => s.value_at(report).map(|v| v.to_string()).unwrap_or_default(),
                    };
                    (s.id.clone(), cell)
                })
                .collect(),
        })
        .collect()
}

/// Pie aggregate over the range: sum of absolute values per series, zero sums dropped
pub fn prepare_aggregate(series: &[DataSeries], range: &ReportRange) -> Vec<Slice> {
    let window: HashSet<ReportId> = range.reports().iter().copied().collect();

    same_org(series, range)
        .into_iter()
        .filter_map(|s| {
            let value: f64 = s
                .points
                .iter()
                .filter(|p| window.contains(p.report))
                .map(|p| p.value.abs())
                .sum();

            (value != 0.0).then(|| Slice {
                id: s.id.clone(),
                name: s.name.clone(),
                color: s.color,
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Point;

    fn series(id: &str, org: Org, points: &[(ReportId, f64)]) -> DataSeries {
        DataSeries {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "Test".to_string(),
            color: "#000000",
            org,
            points: points.iter().map(|&(report, value)| Point { report, value }).collect(),
            source: None,
        }
    }

    #[test]
    fn test_table_row_count_matches_window() {
        let s = vec![series("a", Org::Foundation, &[("R2", 1.0)])];

        let rows = prepare_table(&s, &ReportRange::new(Org::Foundation, "R5", "R10"));
        assert_eq!(rows.len(), 10 - 5 + 1);
        assert_eq!(rows.first().unwrap().report, "R5");
        assert_eq!(rows.last().unwrap().report, "R10");

        let rows = prepare_table(&s, &ReportRange::full(Org::Foundation));
        assert_eq!(rows.len(), 18);
    }

    #[test]
    fn test_table_reversed_range_is_empty() {
        let s = vec![series("a", Org::Foundation, &[("R6", 1.0)])];
        let rows = prepare_table(&s, &ReportRange::new(Org::Foundation, "R10", "R5"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_table_unknown_endpoint_is_empty() {
        let s = vec![series("a", Org::Technologies, &[("R1", 1.0)])];
        let range = ReportRange::new(Org::Technologies, "R1", "R18");
        assert!(!range.is_valid());
        assert!(prepare_table(&s, &range).is_empty());
    }

    #[test]
    fn test_table_is_dense_with_zero_fill() {
        let s = vec![
            series("a", Org::Foundation, &[("R1", 5.0), ("R3", 7.0)]),
            series("b", Org::Foundation, &[("R2", -1.5)]),
        ];

        let rows = prepare_table(&s, &ReportRange::new(Org::Foundation, "R1", "R3"));
        for row in &rows {
            assert_eq!(row.values.len(), 2);
        }
        assert_eq!(rows[0].get("a"), Some(5.0));
        assert_eq!(rows[0].get("b"), Some(0.0));
        assert_eq!(rows[1].get("a"), Some(0.0));
        assert_eq!(rows[1].get("b"), Some(-1.5));
        assert_eq!(rows[2].get("a"), Some(7.0));
        assert_eq!(rows[0].period, "2019 Q3");
    }

    #[test]
    fn test_table_rows_follow_canonical_order() {
        // Points deliberately unsorted
        let s = vec![series("a", Org::Foundation, &[("R10", 10.0), ("R9", 9.0), ("R2", 2.0)])];
        let rows = prepare_table(&s, &ReportRange::new(Org::Foundation, "R2", "R10"));
        let reports: Vec<_> = rows.iter().map(|r| r.report).collect();
        assert_eq!(reports, vec!["R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10"]);
        assert_eq!(rows[7].get("a"), Some(9.0));
    }

    #[test]
    fn test_table_excludes_other_org_series() {
        let s = vec![
            series("af", Org::Foundation, &[("R1", 1.0)]),
            series("at", Org::Technologies, &[("R1", 2.0)]),
        ];
        let rows = prepare_table(&s, &ReportRange::new(Org::Foundation, "R1", "R1"));
        assert_eq!(rows[0].values, vec![("af".to_string(), 1.0)]);
    }

    #[test]
    fn test_row_serializes_flat_in_series_order() {
        let row = Row {
            report: "R4",
            period: "2020 Q2",
            values: vec![("zeta".to_string(), 1.0), ("alpha".to_string(), 0.0)],
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"report":"R4","zeta":1.0,"alpha":0.0}"#);
    }

    #[test]
    fn test_raw_row_serializes_text() {
        let row: RawRow = Row {
            report: "R5",
            period: "2020 Q3",
            values: vec![("cash".to_string(), "N/R".to_string())],
        };
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"report":"R5","cash":"N/R"}"#);
        assert_eq!(row.get("cash").as_deref(), Some("N/R"));
    }

    #[test]
    fn test_aggregate_uses_absolute_values_within_window() {
        let s = vec![series("out", Org::Foundation, &[("R1", -4.0), ("R2", 1.0), ("R3", -10.0)])];
        let slices = prepare_aggregate(&s, &ReportRange::new(Org::Foundation, "R1", "R2"));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].value, 5.0);
        assert_eq!(slices[0].name, "OUT");
    }

    #[test]
    fn test_aggregate_drops_zero_sums() {
        let s = vec![
            series("zero", Org::Foundation, &[("R1", 0.0)]),
            series("outside", Org::Foundation, &[("R9", 3.0)]),
            series("kept", Org::Foundation, &[("R2", 2.0)]),
        ];
        let slices = prepare_aggregate(&s, &ReportRange::new(Org::Foundation, "R1", "R3"));
        let ids: Vec<_> = slices.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["kept"]);
        assert!(slices.iter().all(|s| s.value > 0.0));
    }

    #[test]
    fn test_aggregate_reversed_range_is_empty() {
        let s = vec![series("a", Org::Foundation, &[("R6", 1.0)])];
        assert!(prepare_aggregate(&s, &ReportRange::new(Org::Foundation, "R10", "R5")).is_empty());
    }

    #[test]
    fn test_raw_table_keeps_placeholders() {
        let taxonomy = crate::taxonomy::build(Org::Foundation);
        let digital = taxonomy.find("balancesheet-fiatusdm-digitalassets").unwrap().clone();
        let total = taxonomy.find("balancesheet-pools-total").unwrap().clone();

        let rows = prepare_raw_table(&[digital, total], &ReportRange::new(Org::Foundation, "R4", "R7"));
        assert_eq!(rows.len(), 4);
        // R4 predates the disclosure, R5 was listed as N/R
        assert_eq!(rows[0].values[0].1, "");
        assert_eq!(rows[1].values[0].1, "N/R");
        assert_eq!(rows[3].values[0].1, "12");
        assert_eq!(rows[0].values[1].1, "3450");
    }
}
