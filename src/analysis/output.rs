//! Output writers and text renderings for the load phase

use crate::structs::{Chart, LoadReport, Record, Result};
use std::fs;
use std::path::Path;

/// Width of a 100% bar in text renderings
const BAR_WIDTH: f64 = 40.0;

/// Render the preview rows as a tab separated table with a header line
#[must_use]
pub fn render_preview(columns: &[String], rows: &[Record]) -> String {
    use std::fmt::Write as _;

    let mut out = columns.join("\t");
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row.values().map(ToString::to_string).collect();
        let _ = writeln!(out, "{}", cells.join("\t"));
    }
    out
}

/// Render a bar chart as labelled horizontal bars of percentages
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_chart(chart: &Chart) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let Some(dataset) = chart.data.datasets.first() else {
        return out;
    };

    let title = chart
        .options
        .as_ref()
        .map_or(dataset.label.as_str(), |o| o.plugins.title.text.as_str());
    let _ = writeln!(out, "{title}");

    let width = chart
        .data
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    for (label, &pct) in chart.data.labels.iter().zip(&dataset.data) {
        let bar = "#".repeat((pct.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH).round() as usize);
        let _ = writeln!(out, "  {label:<width$} {pct:>6.2}% {bar}");
    }
    out
}

/// Full text rendering of a load: preview, missing values, survival charts
#[must_use]
pub fn render_load_report(report: &LoadReport) -> String {
    let mut out = format!(
        "Loaded {} rows x {} columns\n\n",
        report.row_count,
        report.columns.len()
    );
    out.push_str(&render_preview(&report.columns, &report.preview));
    out.push('\n');
    out.push_str(&render_chart(&report.missing_chart));
    for (_, chart) in &report.survival_charts {
        out.push('\n');
        out.push_str(&render_chart(chart));
    }
    out
}

/// Write `preview.txt` - the first rows as a table
///
/// # Errors
/// Returns error if file cannot be written
pub fn write_preview(output_dir: &Path, report: &LoadReport) -> Result<()> {
    let path = output_dir.join("preview.txt");
    fs::write(path, render_preview(&report.columns, &report.preview))?;
    Ok(())
}

/// Write `missing.json` and one `survival_*.json` per feature
///
/// # Errors
/// Returns error if a file cannot be written
pub fn write_charts(output_dir: &Path, report: &LoadReport) -> Result<Vec<String>> {
    let mut written = Vec::new();

    write_chart(output_dir, "missing", &report.missing_chart)?;
    written.push("missing.json".to_string());

    for (stem, chart) in &report.survival_charts {
        write_chart(output_dir, stem, chart)?;
        written.push(format!("{stem}.json"));
    }

    Ok(written)
}

fn write_chart(output_dir: &Path, stem: &str, chart: &Chart) -> Result<()> {
    let path = output_dir.join(format!("{stem}.json"));
    let json = serde_json::to_string_pretty(chart)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::charts::{missing_chart, survival_chart};
    use crate::structs::{MissingProfile, SurvivalRateMap, Value};
    use tempfile::TempDir;

    fn report() -> LoadReport {
        let missing = MissingProfile {
            entries: vec![("Survived".into(), 0.0), ("Age".into(), 50.0)],
        };
        let rates = SurvivalRateMap {
            entries: vec![("male".into(), 0.0), ("female".into(), 100.0)],
        };
        LoadReport {
            row_count: 2,
            columns: vec!["Survived".into(), "Age".into()],
            preview: vec![
                [("Survived", Value::Number(1.0)), ("Age", Value::Number(38.0))]
                    .into_iter()
                    .collect(),
                [("Survived", Value::Number(0.0)), ("Age", Value::Empty)]
                    .into_iter()
                    .collect(),
            ],
            missing_chart: missing_chart(&missing),
            survival_charts: vec![(
                "survival_sex".into(),
                survival_chart("Survival by Sex", &rates),
            )],
        }
    }

    #[test]
    fn test_render_preview() {
        let report = report();
        let text = render_preview(&report.columns, &report.preview);

        assert_eq!(text, "Survived\tAge\n1\t38\n0\t\n");
    }

    #[test]
    fn test_render_chart_bars() {
        let text = render_chart(&report().survival_charts[0].1);

        assert!(text.starts_with("Survival by Sex\n"));
        assert!(text.contains("female 100.00% ########################################"));
        assert!(text.contains("male     0.00% \n"));
    }

    #[test]
    fn test_render_chart_aligns_non_ascii_labels() {
        let rates = SurvivalRateMap {
            entries: vec![("Québec".into(), 50.0), ("S".into(), 25.0)],
        };
        let text = render_chart(&survival_chart("Survival by Embarked", &rates));

        assert!(text.contains("  Québec  50.00% "));
        assert!(text.contains("  S       25.00% "));
    }

    #[test]
    fn test_write_charts() {
        let dir = TempDir::new().expect("create temp dir");
        let written = write_charts(dir.path(), &report()).expect("write charts");

        assert_eq!(written, vec!["missing.json", "survival_sex.json"]);
        let content = fs::read_to_string(dir.path().join("survival_sex.json")).expect("read");
        assert!(content.contains("\"% Survived\""));
    }

    #[test]
    fn test_write_preview() {
        let dir = TempDir::new().expect("create temp dir");
        write_preview(dir.path(), &report()).expect("write preview");

        let content = fs::read_to_string(dir.path().join("preview.txt")).expect("read");
        assert!(content.starts_with("Survived\tAge\n"));
    }
}
