//! Per-column missing-value percentages

use crate::structs::{Dataset, EdaError, MissingProfile, Result, Value};

/// Percentage of records where each column is empty or absent.
///
/// The column set is taken from the first record only; a column that first
/// appears on a later record is not profiled.
///
/// # Errors
/// Returns `EdaError::NoDataset` if the dataset is empty
#[allow(clippy::cast_precision_loss)]
pub fn compute_missing_profile(dataset: &Dataset) -> Result<MissingProfile> {
    if dataset.is_empty() {
        return Err(EdaError::NoDataset);
    }

    let columns = dataset.first_columns();
    let mut counts = vec![0usize; columns.len()];

    for record in dataset.records() {
        for (count, column) in counts.iter_mut().zip(&columns) {
            if record.get(column).map_or(true, Value::is_empty) {
                *count += 1;
            }
        }
    }

    let n = dataset.len() as f64;
    Ok(MissingProfile {
        entries: columns
            .into_iter()
            .zip(counts)
            .map(|(column, count)| (column, count as f64 / n * 100.0))
            .collect(),
    })
}
