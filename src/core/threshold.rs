// src/core/threshold.rs
//
// K-sigma thresholds calibrated from the baseline (source absent) capture.
// Candidate data never feeds back into these values.

use serde::Serialize;

use super::columns::ResolvedColumns;
use super::stats::{mean, sample_std_dev};
use super::table::MeasurementTable;

/// `mean + k * std_dev` over one baseline column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Threshold {
    /// Baseline column the statistics were taken from
    pub column: String,
    pub mean: f64,
    pub std_dev: f64,
    pub k: f64,
    pub value: f64,
    /// Non-missing baseline samples
    pub samples: usize,
}

impl Threshold {
    /// Estimate a threshold from `baseline[column]`.
    ///
    /// With fewer than two usable samples the standard deviation is undefined
    /// and the threshold comes out as NaN rather than a default.
    pub fn estimate(baseline: &MeasurementTable, column: &str, k: f64) -> Self {
        let values = baseline.column_values(column).unwrap_or_default();
        let threshold = Self::from_values(column, &values, k);

        if !threshold.is_defined() {
            log::warn!(
                "threshold for '{}' is undefined ({} usable baseline samples)",
                column,
                threshold.samples
            );
        }
        threshold
    }

    pub fn from_values(column: &str, values: &[f64], k: f64) -> Self {
        let mu = mean(values);
        let sigma = sample_std_dev(values);

        Self {
            column: column.to_string(),
            mean: mu,
            std_dev: sigma,
            k,
            value: mu + k * sigma,
            samples: values.iter().filter(|v| !v.is_nan()).count(),
        }
    }

    /// False when the baseline could not support the statistic
    pub fn is_defined(&self) -> bool {
        !self.value.is_nan()
    }

    /// Strict comparison; always false against an undefined threshold or a
    /// missing sample
    pub fn exceeded_by(&self, sample: f64) -> bool {
        sample > self.value
    }
}

/// A threshold paired with the candidate column it is applied to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub candidate_column: String,
    pub threshold: Threshold,
}

/// The detection criteria in force for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thresholds {
    pub pfd: Criterion,
    /// Only present when both tables carry a power column
    pub power: Option<Criterion>,
}

impl Thresholds {
    pub fn from_baseline(
        baseline: &MeasurementTable,
        baseline_cols: &ResolvedColumns,
        candidate_cols: &ResolvedColumns,
        k: f64,
    ) -> Self {
        let pfd = Criterion {
            candidate_column: candidate_cols.pfd.clone(),
            threshold: Threshold::estimate(baseline, &baseline_cols.pfd, k),
        };

        let power = match (&baseline_cols.power, &candidate_cols.power) {
            (Some(base), Some(cand)) => Some(Criterion {
                candidate_column: cand.clone(),
                threshold: Threshold::estimate(baseline, base, k),
            }),
            (Some(_), None) => {
                log::info!("power column missing in candidate, power criterion disabled");
                None
            }
            (None, Some(_)) => {
                log::info!("power column missing in baseline, power criterion disabled");
                None
            }
            (None, None) => None,
        };

        Self { pfd, power }
    }
}
