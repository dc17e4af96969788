//! Export of prepared tables (CSV, JSON, console)

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::chart::Row;

/// Column order shared by every export: report, period, then the selected series
fn header<'a>(columns: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    ["report", "period"]
        .into_iter()
        .chain(columns)
        .map(str::to_string)
        .collect()
}

/// Write rows as CSV under a header naming `columns` (series ids, in row order).
///
/// The header is written even when the window holds no reports.
pub fn write_csv<W: Write, V: ToString>(writer: W, columns: &[&str], rows: &[Row<V>]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(header(columns.iter().copied()))?;

    for row in rows {
        let mut record = vec![row.report.to_string(), row.period.to_string()];
        record.extend(row.values.iter().map(|(_, v)| v.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_csv<V: ToString>(path: &Path, columns: &[&str], rows: &[Row<V>]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(file, columns, rows).with_context(|| format!("Failed to write {}", path.display()))
}

/// Pretty JSON array of flat row records
pub fn to_json<T: serde::Serialize>(rows: &[T]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize rows")
}

/// Console table; `columns` pairs each series id with the name shown in the header
pub fn render_table(rows: &[Row], columns: &[(&str, &str)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(header(columns.iter().map(|(_, name)| *name)));

    for row in rows {
        let mut record = vec![row.report.to_string(), row.period.to_string()];
        record.extend(row.values.iter().map(|(_, v)| format!("{:.2}", v)));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{RawRow, ReportRange, prepare_table};
    use crate::store::Org;

    const COLUMNS: &[&str] = &["grants", "pools"];

    fn rows() -> Vec<Row> {
        vec![
            Row {
                report: "R1",
                period: "2019 Q3",
                values: vec![("grants".to_string(), -4.5), ("pools".to_string(), 0.0)],
            },
            Row {
                report: "R2",
                period: "2019 Q4",
                values: vec![("grants".to_string(), 2.0), ("pools".to_string(), 1580.0)],
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&mut out, COLUMNS, &rows()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "report,period,grants,pools");
        assert_eq!(lines[1], "R1,2019 Q3,-4.5,0");
        assert_eq!(lines[2], "R2,2019 Q4,2,1580");
    }

    #[test]
    fn test_empty_window_keeps_selected_columns() {
        let taxonomy = crate::taxonomy::build(Org::Foundation);
        let repaid = taxonomy.find("loans-loansrepaid").unwrap().clone();
        let rows = prepare_table(&[repaid], &ReportRange::new(Org::Foundation, "R10", "R5"));
        assert!(rows.is_empty());

        let mut out = Vec::new();
        write_csv(&mut out, &["loans-loansrepaid"], &rows).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "report,period,loans-loansrepaid\n");
    }

    #[test]
    fn test_write_raw_csv_keeps_text() {
        let rows: Vec<RawRow> = vec![Row {
            report: "R5",
            period: "2020 Q3",
            values: vec![("cash".to_string(), "N/R".to_string()), ("loans".to_string(), String::new())],
        }];
        let mut out = Vec::new();
        write_csv(&mut out, &["cash", "loans"], &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "report,period,cash,loans\nR5,2020 Q3,N/R,\n");
    }

    #[test]
    fn test_export_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        export_csv(&path, COLUMNS, &rows()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["report", "period", "grants", "pools"]);
        assert_eq!(reader.records().count(), 2);
    }

    #[test]
    fn test_export_csv_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("table.csv");
        assert!(export_csv(&path, COLUMNS, &rows()).is_err());
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&rows()[..1]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["report"], "R1");
        assert_eq!(parsed[0]["grants"], -4.5);
    }

    #[test]
    fn test_render_table_uses_names() {
        let text = render_table(&rows(), &[("grants", "Ecosystem Grants"), ("pools", "Pools")]);
        assert!(text.contains("Ecosystem Grants"));
        assert!(text.contains("Pools"));
        assert!(text.contains("1580.00"));
        assert!(text.contains("2019 Q4"));
    }
}
