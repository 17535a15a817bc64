//! Consolidated public types for the titanic-eda crate
//!
//! This module contains all public structs, enums, and the error type used across the crate.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum EdaError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please upload train.csv")]
    NoFileSelected,

    #[error("Load data first")]
    NoDataset,

    #[error("No rows with a Survived value in {0}")]
    EmptyLoad(String),
}

impl EdaError {
    /// Whether this error is a user-facing guard rather than a failure
    #[must_use]
    pub const fn is_guard(&self) -> bool {
        matches!(self, Self::NoFileSelected | Self::NoDataset)
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;

// ============================================================================
// Record Types
// ============================================================================

/// Group key used when a feature value is empty or absent
pub const UNKNOWN_KEY: &str = "Unknown";

/// Column holding the 0/1 survival outcome
pub const SURVIVED_COLUMN: &str = "Survived";

/// A dynamically typed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Text(String),
    Empty,
}

impl Value {
    /// Empty cells and empty text count as missing; absent cells are handled by the caller
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }

    /// Numeric view of the value. Booleans and text are not numbers.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -0 prints as 0
            Self::Number(n) => write!(f, "{}", n + 0.0),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Empty => Ok(()),
        }
    }
}

/// One passenger row: column name to value, in column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a column. `None` means the column is absent from this record.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Set a column, replacing in place or appending at the end
    pub fn set(&mut self, column: &str, value: Value) {
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| name == column) {
            slot.1 = value;
        } else {
            self.fields.push((column.to_string(), value));
        }
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// True only for the number 1. Text "1" and boolean true do not count.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn survived(&self) -> bool {
        matches!(self.get(SURVIVED_COLUMN), Some(Value::Number(n)) if *n == 1.0)
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            let name: String = name.into();
            record.set(&name, value);
        }
        record
    }
}

/// The loaded passenger records, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Get number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Column names as seen on the first record
    #[must_use]
    pub fn first_columns(&self) -> Vec<String> {
        self.records
            .first()
            .map(|r| r.columns().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// The first `n` records
    #[must_use]
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }
}

// ============================================================================
// Analysis Types
// ============================================================================

/// Per-group counters built by a single pass over the dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub total: usize,
    pub survived: usize,
}

impl GroupStats {
    /// Survival percentage in [0, 100]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn survival_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.survived as f64 / self.total as f64 * 100.0
    }
}

/// Group key to survival percentage, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurvivalRateMap {
    pub entries: Vec<(String, f64)>,
}

impl SurvivalRateMap {
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, rate)| *rate)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    /// Max rate minus min rate; 0 for a single group or an empty map
    #[must_use]
    pub fn spread(&self) -> f64 {
        let max = self
            .entries
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);
        let min = self
            .entries
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::INFINITY, f64::min);
        if self.entries.is_empty() {
            0.0
        } else {
            max - min
        }
    }
}

/// Column name to percentage of records missing that column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingProfile {
    pub entries: Vec<(String, f64)>,
}

impl MissingProfile {
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, pct)| *pct)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(c, _)| c.clone()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }
}

/// Ranking heuristic for one feature
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub feature: String,
    pub spread: f64,
}

// ============================================================================
// Chart Types
// ============================================================================

/// Bar chart description in the shape a Chart.js widget consumes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Chart {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChartOptions>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartOptions {
    pub plugins: ChartPlugins,
    pub scales: ChartScales,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPlugins {
    pub title: ChartTitle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartScales {
    pub y: AxisRange,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

// ============================================================================
// Session Types
// ============================================================================

/// Everything a load produces for presentation
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub row_count: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Record>,
    pub missing_chart: Chart,
    /// (file stem, chart) for each survival feature
    pub survival_charts: Vec<(String, Chart)>,
}

/// Result of ranking the configured features
#[derive(Debug, Clone)]
pub struct AnalyzeReport {
    pub ranking: Vec<FactorScore>,
}

impl AnalyzeReport {
    /// The strongest factor, if any feature was ranked
    #[must_use]
    pub fn top(&self) -> Option<&FactorScore> {
        self.ranking.first()
    }

    /// Sentence shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        self.top().map_or_else(
            || "No strongest factor found".to_string(),
            |top| {
                format!(
                    "The most important factor of death is: {} (largest difference in survival rates across groups)",
                    top.feature
                )
            },
        )
    }
}
