//! Strongest-factor heuristic: rank features by the spread of group survival rates

use super::aggregate::group_by_feature;
use crate::structs::{Dataset, EdaError, FactorScore, Result};
use std::cmp::Ordering;

/// Features ranked when none are configured
pub const DEFAULT_FEATURES: [&str; 4] = ["Sex", "Pclass", "AgeGroup", "Embarked"];

/// Rank `features` by spread, descending. Ties keep their input order.
///
/// # Errors
/// Returns `EdaError::NoDataset` if the dataset is empty
pub fn rank_factors<S: AsRef<str>>(dataset: &Dataset, features: &[S]) -> Result<Vec<FactorScore>> {
    if dataset.is_empty() {
        return Err(EdaError::NoDataset);
    }

    let mut scores: Vec<FactorScore> = features
        .iter()
        .map(|feature| {
            let feature = feature.as_ref();
            FactorScore {
                feature: feature.to_string(),
                spread: group_by_feature(dataset, feature).spread(),
            }
        })
        .collect();

    // sort_by is stable
    scores.sort_by(|a, b| b.spread.partial_cmp(&a.spread).unwrap_or(Ordering::Equal));

    Ok(scores)
}
