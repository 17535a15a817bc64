//! Derived columns computed from raw passenger fields

use crate::structs::{Dataset, Record, Value, UNKNOWN_KEY};

pub const AGE_COLUMN: &str = "Age";
pub const AGE_GROUP_COLUMN: &str = "AgeGroup";

/// Decade bucket for a record's age, or `"Unknown"` when age is absent or not a number
#[must_use]
pub fn age_group(record: &Record) -> Value {
    record
        .get(AGE_COLUMN)
        .and_then(Value::as_number)
        .map_or_else(
            || Value::Text(UNKNOWN_KEY.to_string()),
            |age| Value::Number((age / 10.0).floor() * 10.0),
        )
}

/// Set `AgeGroup` on every record. Record order and other columns are untouched.
pub fn derive_age_group(dataset: &mut Dataset) {
    for record in dataset.records_mut() {
        let group = age_group(record);
        record.set(AGE_GROUP_COLUMN, group);
    }
}

/// Whether every record already carries `AgeGroup`
#[must_use]
pub fn has_age_group(dataset: &Dataset) -> bool {
    dataset
        .records()
        .iter()
        .all(|r| r.get(AGE_GROUP_COLUMN).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_with_ages(ages: &[Value]) -> Dataset {
        Dataset::new(
            ages.iter()
                .map(|age| {
                    [("Survived", Value::Number(0.0)), ("Age", age.clone())]
                        .into_iter()
                        .collect()
                })
                .collect(),
        )
    }

    fn groups(dataset: &Dataset) -> Vec<Value> {
        dataset
            .records()
            .iter()
            .map(|r| r.get(AGE_GROUP_COLUMN).cloned().expect("age group set"))
            .collect()
    }

    #[test]
    fn test_decade_buckets() {
        let mut dataset = dataset_with_ages(&[
            Value::Number(5.0),
            Value::Number(15.0),
            Value::Number(25.0),
            Value::Empty,
        ]);
        derive_age_group(&mut dataset);

        assert_eq!(
            groups(&dataset),
            vec![
                Value::Number(0.0),
                Value::Number(10.0),
                Value::Number(20.0),
                Value::Text("Unknown".into()),
            ]
        );
    }

    #[test]
    fn test_fractional_and_invalid_ages() {
        let mut dataset = dataset_with_ages(&[
            Value::Number(0.42),
            Value::Number(29.99),
            Value::Text("adult".into()),
            Value::Bool(true),
        ]);
        derive_age_group(&mut dataset);

        assert_eq!(
            groups(&dataset),
            vec![
                Value::Number(0.0),
                Value::Number(20.0),
                Value::Text("Unknown".into()),
                Value::Text("Unknown".into()),
            ]
        );
    }

    #[test]
    fn test_negative_zero_age_keys_as_zero() {
        let mut dataset = dataset_with_ages(&[Value::Number(-0.0), Value::Number(0.0)]);
        derive_age_group(&mut dataset);

        let keys: Vec<String> = dataset
            .records()
            .iter()
            .map(|r| crate::analysis::aggregate::group_key(r, AGE_GROUP_COLUMN))
            .collect();
        assert_eq!(keys, vec!["0", "0"]);
    }

    #[test]
    fn test_missing_age_column() {
        let mut dataset = Dataset::new(vec![[("Survived", Value::Number(1.0))]
            .into_iter()
            .collect()]);
        derive_age_group(&mut dataset);

        assert_eq!(groups(&dataset), vec![Value::Text("Unknown".into())]);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let mut once = dataset_with_ages(&[Value::Number(42.0), Value::Empty]);
        derive_age_group(&mut once);
        let mut twice = once.clone();
        derive_age_group(&mut twice);

        assert_eq!(once, twice);
        assert_eq!(twice.records()[0].columns().count(), 3);
        assert!(has_age_group(&twice));
    }
}
