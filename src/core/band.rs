//! Frequency band restriction for candidate rows

use serde::Serialize;

use super::table::MeasurementTable;

/// Closed frequency interval in MHz
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyBand {
    pub min_mhz: f64,
    pub max_mhz: f64,
}

impl FrequencyBand {
    pub fn new(min_mhz: f64, max_mhz: f64) -> Self {
        Self { min_mhz, max_mhz }
    }

    /// Inclusive at both ends; NaN is never in band
    pub fn contains(&self, freq_mhz: f64) -> bool {
        freq_mhz >= self.min_mhz && freq_mhz <= self.max_mhz
    }
}

/// Band filter bound to a candidate frequency column.
///
/// The filter only restricts rows when a frequency column was resolved and
/// both bounds were configured; otherwise every row passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandFilter {
    pub column: Option<String>,
    pub band: Option<FrequencyBand>,
}

impl BandFilter {
    pub fn new(freq_column: Option<&str>, freq_min: Option<f64>, freq_max: Option<f64>) -> Self {
        let band = match (freq_min, freq_max) {
            (Some(min), Some(max)) => {
                if min > max {
                    log::warn!("band {}-{} MHz is empty, no row can qualify", min, max);
                }
                Some(FrequencyBand::new(min, max))
            }
            (None, None) => None,
            (min, max) => {
                log::warn!(
                    "band filter needs both bounds (min={:?}, max={:?}), ignoring",
                    min,
                    max
                );
                None
            }
        };

        if band.is_some() && freq_column.is_none() {
            log::info!("no frequency column in candidate, band filter disabled");
        }

        Self {
            column: freq_column.map(str::to_string),
            band,
        }
    }

    /// No-op filter that lets every row through
    pub fn pass_all() -> Self {
        Self {
            column: None,
            band: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.band.is_some()
    }

    /// Whether a row with this frequency passes the filter
    pub fn in_band(&self, freq_mhz: f64) -> bool {
        match (&self.column, &self.band) {
            (Some(_), Some(band)) => band.contains(freq_mhz),
            _ => true,
        }
    }

    /// Per-row band membership for a candidate table
    pub fn mask(&self, candidate: &MeasurementTable) -> Vec<bool> {
        let freqs = match (&self.column, &self.band) {
            (Some(col), Some(_)) => candidate.column_values(col),
            _ => None,
        };

        match freqs {
            Some(values) => values.iter().map(|&f| self.in_band(f)).collect(),
            None => vec![true; candidate.len()],
        }
    }
}
