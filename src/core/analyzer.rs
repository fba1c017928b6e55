// src/core/analyzer.rs
//
// High-level detection API with builder pattern.

use serde::Serialize;
use std::path::Path;

use super::band::BandFilter;
use super::columns::ResolvedColumns;
use super::detector::{detect, Detection};
use super::stats::{describe, ColumnSummary};
use super::table::{MeasurementTable, TextEncoding};
use super::threshold::Thresholds;
use crate::config::BandPreset;
use crate::error::Result;

/// Detection configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionConfig {
    /// Sigma multiplier for the baseline thresholds
    pub k_sigma: f64,
    /// Lower band bound in MHz
    pub freq_min: Option<f64>,
    /// Upper band bound in MHz
    pub freq_max: Option<f64>,
    /// Consecutive qualifying samples required for a detection
    pub n_consec: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            k_sigma: 3.0,
            freq_min: None,
            freq_max: None,
            n_consec: 1,
        }
    }
}

/// Builder for Analyzer configuration
pub struct AnalyzerBuilder {
    config: DetectionConfig,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: DetectionConfig::default(),
        }
    }

    pub fn k_sigma(mut self, k: f64) -> Self {
        self.config.k_sigma = k;
        self
    }

    pub fn freq_min(mut self, mhz: Option<f64>) -> Self {
        self.config.freq_min = mhz;
        self
    }

    pub fn freq_max(mut self, mhz: Option<f64>) -> Self {
        self.config.freq_max = mhz;
        self
    }

    /// Use a preset band. Bounds set afterwards with `freq_min`/`freq_max`
    /// replace the preset's.
    pub fn band(mut self, preset: BandPreset) -> Self {
        let band = preset.band();
        self.config.freq_min = Some(band.min_mhz);
        self.config.freq_max = Some(band.max_mhz);
        self
    }

    pub fn n_consec(mut self, n: usize) -> Self {
        self.config.n_consec = n;
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            config: self.config,
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything computed for one baseline/candidate pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    pub config: DetectionConfig,
    pub baseline: TableInfo,
    pub candidate: TableInfo,
    pub baseline_columns: ResolvedColumns,
    pub candidate_columns: ResolvedColumns,
    pub thresholds: Thresholds,
    pub band: BandFilter,
    /// Candidate pfd, power and frequency columns, in that order
    pub candidate_summary: Vec<ColumnSummary>,
    pub detection: Detection,
}

impl DetectionReport {
    pub fn detected(&self) -> bool {
        self.detection.detected
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableInfo {
    pub label: String,
    pub rows: usize,
    pub encoding: TextEncoding,
}

impl TableInfo {
    fn of(table: &MeasurementTable) -> Self {
        Self {
            label: table.label().to_string(),
            rows: table.len(),
            encoding: table.encoding(),
        }
    }
}

/// Stateless detector over a baseline/candidate pair
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: DetectionConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        AnalyzerBuilder::new().build()
    }
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Load both files and analyze them. The baseline is loaded first, so a
    /// missing baseline fails before the candidate is read.
    pub fn analyze_files(&self, baseline: &Path, candidate: &Path) -> Result<DetectionReport> {
        let baseline = MeasurementTable::load(baseline)?;
        let candidate = MeasurementTable::load(candidate)?;
        self.analyze(&baseline, &candidate)
    }

    /// Run the full detection pipeline
    pub fn analyze(
        &self,
        baseline: &MeasurementTable,
        candidate: &MeasurementTable,
    ) -> Result<DetectionReport> {
        let baseline_columns = ResolvedColumns::for_baseline(baseline)?;
        let candidate_columns = ResolvedColumns::for_candidate(candidate)?;

        let thresholds = Thresholds::from_baseline(
            baseline,
            &baseline_columns,
            &candidate_columns,
            self.config.k_sigma,
        );
        log::info!(
            "pfd threshold {:.2} from '{}' (k={})",
            thresholds.pfd.threshold.value,
            thresholds.pfd.threshold.column,
            self.config.k_sigma
        );

        let band = BandFilter::new(
            candidate_columns.freq.as_deref(),
            self.config.freq_min,
            self.config.freq_max,
        );

        let detection = detect(candidate, &thresholds, &band, self.config.n_consec);

        let candidate_summary = [
            Some(&candidate_columns.pfd),
            candidate_columns.power.as_ref(),
            candidate_columns.freq.as_ref(),
        ]
        .into_iter()
        .flatten()
        .map(|col| describe(col, &candidate.column_values(col).unwrap_or_default()))
        .collect();

        Ok(DetectionReport {
            config: self.config.clone(),
            baseline: TableInfo::of(baseline),
            candidate: TableInfo::of(candidate),
            baseline_columns,
            candidate_columns,
            thresholds,
            band,
            candidate_summary,
            detection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetectError;

    fn table(text: &str) -> MeasurementTable {
        MeasurementTable::parse_str("mem", text).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.config(), &DetectionConfig::default());
        assert_eq!(analyzer.config().k_sigma, 3.0);
        assert_eq!(analyzer.config().n_consec, 1);
    }

    #[test]
    fn test_band_preset_then_override() {
        let analyzer = Analyzer::builder()
            .band(BandPreset::Ism2400)
            .freq_max(Some(2450.0))
            .build();
        assert_eq!(analyzer.config().freq_min, Some(2400.0));
        assert_eq!(analyzer.config().freq_max, Some(2450.0));
    }

    #[test]
    fn test_missing_pfd_in_baseline() {
        let err = Analyzer::default()
            .analyze(&table("Level\n1\n"), &table("Power Flux Density\n1\n"))
            .unwrap_err();
        assert!(matches!(err, DetectError::MissingColumn { .. }));
        assert!(err.to_string().contains("baseline"));
    }

    #[test]
    fn test_power_in_baseline_only_is_ignored() {
        // power values in candidate would fail the power threshold if it applied
        let baseline = table("Power Flux Density,Total Spectrum Power\n1,10\n2,11\n3,12\n");
        let candidate = table("Power Flux Density,Level\n9,0\n");

        let report = Analyzer::default().analyze(&baseline, &candidate).unwrap();
        assert!(report.thresholds.power.is_none());
        assert!(report.detected());
    }

    #[test]
    fn test_summary_columns() {
        let baseline = table("Power Flux Density\n1\n2\n3\n");
        let candidate = table("Frequency,Power Flux Density\n2410,1\n2420,2\n");

        let report = Analyzer::default().analyze(&baseline, &candidate).unwrap();
        let names: Vec<_> = report
            .candidate_summary
            .iter()
            .map(|s| s.column.as_str())
            .collect();
        assert_eq!(names, vec!["Power Flux Density", "Frequency"]);
        assert!(!report.detected());
    }

    #[test]
    fn test_empty_candidate() {
        let baseline = table("Power Flux Density\n1\n2\n3\n");
        let candidate = table("Power Flux Density\n");

        let report = Analyzer::default().analyze(&baseline, &candidate).unwrap();
        assert!(report.detection.mask.is_empty());
        assert!(!report.detected());
    }
}
