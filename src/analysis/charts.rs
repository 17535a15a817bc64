//! Chart.js-shaped bar chart builders

use crate::structs::{
    AxisRange, Chart, ChartData, ChartDataset, ChartOptions, ChartPlugins, ChartScales,
    ChartTitle, MissingProfile, SurvivalRateMap,
};

const SURVIVED_COLOR: &str = "rgba(52,152,219,0.7)";

/// A feature plotted against survival, with its chart title and output file stem
pub struct SurvivalChartSpec {
    pub feature: &'static str,
    pub title: &'static str,
    pub file_stem: &'static str,
}

pub const SURVIVAL_CHARTS: [SurvivalChartSpec; 4] = [
    SurvivalChartSpec {
        feature: "Sex",
        title: "Survival by Sex",
        file_stem: "survival_sex",
    },
    SurvivalChartSpec {
        feature: "Pclass",
        title: "Survival by Pclass",
        file_stem: "survival_pclass",
    },
    SurvivalChartSpec {
        feature: "AgeGroup",
        title: "Survival by Age Group",
        file_stem: "survival_age_group",
    },
    SurvivalChartSpec {
        feature: "Embarked",
        title: "Survival by Embarked",
        file_stem: "survival_embarked",
    },
];

/// Bar chart of missing percentage per column
#[must_use]
pub fn missing_chart(profile: &MissingProfile) -> Chart {
    Chart {
        chart_type: "bar".to_string(),
        data: ChartData {
            labels: profile.labels(),
            datasets: vec![ChartDataset {
                label: "% Missing".to_string(),
                data: profile.values(),
                background_color: None,
            }],
        },
        options: None,
    }
}

/// Bar chart of survival percentage per group, y pinned to 0..100
#[must_use]
pub fn survival_chart(title: &str, rates: &SurvivalRateMap) -> Chart {
    Chart {
        chart_type: "bar".to_string(),
        data: ChartData {
            labels: rates.labels(),
            datasets: vec![ChartDataset {
                label: "% Survived".to_string(),
                data: rates.values(),
                background_color: Some(SURVIVED_COLOR.to_string()),
            }],
        },
        options: Some(ChartOptions {
            plugins: ChartPlugins {
                title: ChartTitle {
                    display: true,
                    text: title.to_string(),
                },
            },
            scales: ChartScales {
                y: AxisRange {
                    min: 0.0,
                    max: 100.0,
                },
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_survival_chart_shape() {
        let rates = SurvivalRateMap {
            entries: vec![("male".into(), 18.9), ("female".into(), 74.2)],
        };
        let chart = survival_chart("Survival by Sex", &rates);
        let value = serde_json::to_value(&chart).expect("serialize");

        assert_eq!(value["type"], json!("bar"));
        assert_eq!(value["data"]["labels"], json!(["male", "female"]));
        assert_eq!(value["data"]["datasets"][0]["label"], json!("% Survived"));
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            json!("rgba(52,152,219,0.7)")
        );
        assert_eq!(value["options"]["plugins"]["title"]["text"], json!("Survival by Sex"));
        assert_eq!(value["options"]["scales"]["y"]["max"], json!(100.0));
    }

    #[test]
    fn test_missing_chart_has_no_options() {
        let profile = MissingProfile {
            entries: vec![("Age".into(), 19.87), ("Cabin".into(), 77.1)],
        };
        let value = serde_json::to_value(missing_chart(&profile)).expect("serialize");

        assert_eq!(value["data"]["datasets"][0]["label"], json!("% Missing"));
        assert!(value.get("options").is_none());
        assert!(value["data"]["datasets"][0].get("backgroundColor").is_none());
    }
}
