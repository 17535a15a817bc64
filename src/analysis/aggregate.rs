//! Group-by aggregation of survival outcomes

use crate::structs::{Dataset, GroupStats, Record, SurvivalRateMap, UNKNOWN_KEY};
use std::collections::HashMap;

/// Stringified feature value, with empty or absent mapped to `"Unknown"`
#[must_use]
pub fn group_key(record: &Record, feature: &str) -> String {
    match record.get(feature) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN_KEY.to_string(),
    }
}

/// Count records and survivors per group key, in first-occurrence order
#[must_use]
pub fn group_stats(dataset: &Dataset, feature: &str) -> Vec<(String, GroupStats)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, GroupStats)> = Vec::new();

    for record in dataset.records() {
        let key = group_key(record, feature);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, GroupStats::default()));
            groups.len() - 1
        });

        let stats = &mut groups[slot].1;
        stats.total += 1;
        if record.survived() {
            stats.survived += 1;
        }
    }

    groups
}

/// Survival percentage per group of `feature`
#[must_use]
pub fn group_by_feature(dataset: &Dataset, feature: &str) -> SurvivalRateMap {
    SurvivalRateMap {
        entries: group_stats(dataset, feature)
            .into_iter()
            .map(|(key, stats)| (key, stats.survival_rate()))
            .collect(),
    }
}
