//! Session state shared by the load and analyze entry points

use crate::analysis::aggregate::group_by_feature;
use crate::analysis::charts::{missing_chart, survival_chart, SURVIVAL_CHARTS};
use crate::analysis::features::{derive_age_group, has_age_group};
use crate::analysis::missing::compute_missing_profile;
use crate::analysis::ranking::{rank_factors, DEFAULT_FEATURES};
use crate::csv_reader::CsvData;
use crate::structs::{AnalyzeReport, Dataset, EdaError, LoadReport, Result};
use std::path::Path;
use tracing::{info, warn};

/// Configuration for a session
#[derive(Debug, Clone)]
pub struct EdaConfig {
    pub preview_rows: usize,
    pub features: Vec<String>,
    pub tsv: bool,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            features: DEFAULT_FEATURES.iter().map(ToString::to_string).collect(),
            tsv: false,
        }
    }
}

/// Owns the loaded dataset between a load and later analyses
#[derive(Debug, Default)]
pub struct Session {
    config: EdaConfig,
    dataset: Option<Dataset>,
}

impl Session {
    #[must_use]
    pub const fn new(config: EdaConfig) -> Self {
        Self {
            config,
            dataset: None,
        }
    }

    /// Replace the current dataset wholesale
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    #[must_use]
    pub const fn get_dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Parse `file`, keep it as the session dataset, and build the load report.
    ///
    /// On any error the previous dataset is left in place.
    ///
    /// # Errors
    /// `NoFileSelected` without a file, `EmptyLoad` if no row has a `Survived`
    /// value, or the underlying IO/CSV error
    pub fn on_load(&mut self, file: Option<&Path>) -> Result<LoadReport> {
        let Some(path) = file else {
            warn!("load requested without a file");
            return Err(EdaError::NoFileSelected);
        };

        info!(path = %path.display(), "loading dataset");
        let csv = CsvData::from_file(path, self.config.tsv)?;
        let raw_rows = csv.row_count();
        let mut dataset = csv.into_dataset();

        if dataset.is_empty() {
            return Err(EdaError::EmptyLoad(path.display().to_string()));
        }
        info!(rows = dataset.len(), raw_rows, "dataset loaded");

        let columns = dataset.first_columns();
        let preview = dataset.head(self.config.preview_rows).to_vec();

        // Profiled before AgeGroup exists so the derived column is not reported
        let missing = compute_missing_profile(&dataset)?;

        derive_age_group(&mut dataset);

        let survival_charts = SURVIVAL_CHARTS
            .iter()
            .map(|spec| {
                let rates = group_by_feature(&dataset, spec.feature);
                (spec.file_stem.to_string(), survival_chart(spec.title, &rates))
            })
            .collect();

        let report = LoadReport {
            row_count: dataset.len(),
            columns,
            preview,
            missing_chart: missing_chart(&missing),
            survival_charts,
        };

        self.set_dataset(dataset);
        Ok(report)
    }

    /// Rank the configured features on the current dataset.
    ///
    /// # Errors
    /// `NoDataset` if nothing has been loaded
    pub fn on_analyze(&mut self) -> Result<AnalyzeReport> {
        if let Some(dataset) = self.dataset.as_mut() {
            if !has_age_group(dataset) {
                derive_age_group(dataset);
            }
        }

        let Some(dataset) = self.get_dataset() else {
            warn!("analyze requested before load");
            return Err(EdaError::NoDataset);
        };
        info!(
            rows = dataset.len(),
            features = self.config.features.len(),
            "ranking factors"
        );

        let ranking = rank_factors(dataset, &self.config.features)?;
        if let Some(top) = ranking.first() {
            info!(feature = %top.feature, spread = top.spread, "strongest factor");
        }

        Ok(AnalyzeReport { ranking })
    }
}
