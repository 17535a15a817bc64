use crate::structs::{Dataset, Record, Result, Value, SURVIVED_COLUMN};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::debug;

/// Represents a parsed CSV/TSV file with headers and raw string rows
#[derive(Debug, Clone)]
pub struct CsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvData {
    /// Parse a CSV or TSV file
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or a record is malformed
    pub fn from_file(path: &Path, is_tsv: bool) -> Result<Self> {
        let delimiter = if is_tsv { b'\t' } else { b',' };

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Get number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Convert raw rows into typed records.
    ///
    /// Short rows lack their trailing columns; fields past the header are dropped.
    #[must_use]
    pub fn to_records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                if row.len() > self.headers.len() {
                    debug!(
                        row = idx + 1,
                        extra = row.len() - self.headers.len(),
                        "dropping fields beyond header"
                    );
                }
                self.headers
                    .iter()
                    .zip(row.iter())
                    .map(|(h, cell)| (h.as_str(), parse_dynamic(cell)))
                    .collect()
            })
            .collect()
    }

    /// Typed records that carry a non-empty `Survived` value
    #[must_use]
    pub fn into_dataset(self) -> Dataset {
        let records: Vec<Record> = self
            .to_records()
            .into_iter()
            .filter(|r| r.get(SURVIVED_COLUMN).is_some_and(|v| !v.is_empty()))
            .collect();
        debug!(
            kept = records.len(),
            dropped = self.rows.len() - records.len(),
            "filtered rows without Survived"
        );
        Dataset::new(records)
    }
}

/// Numbers at or beyond 2^53 in magnitude stay text
const MAX_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Coerce a raw cell the way a dynamically typed CSV reader would
#[must_use]
pub fn parse_dynamic(cell: &str) -> Value {
    match cell {
        "" => Value::Empty,
        "true" | "TRUE" => Value::Bool(true),
        "false" | "FALSE" => Value::Bool(false),
        _ if looks_numeric(cell) => cell
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| *n > -MAX_FLOAT && *n < MAX_FLOAT)
            .map_or_else(|| Value::Text(cell.to_string()), Value::Number),
        _ => Value::Text(cell.to_string()),
    }
}

/// Plain decimal float: sign, digits with optional fraction, optional exponent
fn looks_numeric(cell: &str) -> bool {
    let s = cell.trim();
    let s = s.strip_prefix('-').unwrap_or(s);

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            (!int.is_empty() || !frac.is_empty())
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => !mantissa.is_empty() && mantissa.bytes().all(|b| b.is_ascii_digit()),
    };

    let exponent_ok = exponent.map_or(true, |e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}
