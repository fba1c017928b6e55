// src/core/detector.rs
//
// Per-sample threshold detection with temporal hysteresis.

use serde::Serialize;

use super::band::BandFilter;
use super::threshold::{Criterion, Thresholds};
use super::table::MeasurementTable;

/// Outcome of running the detector over a candidate table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    /// Instantaneous per-row result: all criteria exceeded and in band
    pub mask: Vec<bool>,
    /// Rows completing a full window of `n_consec` qualifying samples
    pub window_hits: Vec<bool>,
    pub n_consec: usize,
    pub detected: bool,
    /// Rows passing the instantaneous criteria
    pub qualifying_rows: usize,
    pub in_band_rows: usize,
    /// Longest run of consecutive qualifying rows
    pub longest_run: usize,
    /// First row at which the hysteresis requirement was met
    pub first_hit: Option<usize>,
}

/// Instantaneous mask: `pfd > thr_pfd`, in band, and (if enabled)
/// `power > thr_power`. NaN on either side compares false.
pub fn instantaneous_mask(
    candidate: &MeasurementTable,
    thresholds: &Thresholds,
    band: &BandFilter,
) -> Vec<bool> {
    apply_criteria(band.mask(candidate), candidate, thresholds)
}

/// Narrow a band membership mask down to the rows exceeding every criterion
fn apply_criteria(
    mut mask: Vec<bool>,
    candidate: &MeasurementTable,
    thresholds: &Thresholds,
) -> Vec<bool> {
    apply_criterion(&mut mask, candidate, &thresholds.pfd);
    if let Some(power) = &thresholds.power {
        apply_criterion(&mut mask, candidate, power);
    }

    mask
}

fn apply_criterion(mask: &mut [bool], candidate: &MeasurementTable, criterion: &Criterion) {
    match candidate.column_values(&criterion.candidate_column) {
        Some(values) => {
            for (m, v) in mask.iter_mut().zip(values) {
                *m = *m && criterion.threshold.exceeded_by(v);
            }
        }
        None => mask.iter_mut().for_each(|m| *m = false),
    }
}

/// Trailing-window hits over a boolean mask.
///
/// Row `i` is a hit when the window of `window` samples ending at `i` is
/// full and holds exactly `required` true values. Rows before the first full
/// window are never hits.
pub fn window_hits(mask: &[bool], window: usize, required: usize) -> Vec<bool> {
    let window = window.max(1);
    let mut hits = Vec::with_capacity(mask.len());
    let mut count = 0usize;

    for (i, &m) in mask.iter().enumerate() {
        if m {
            count += 1;
        }
        if i >= window && mask[i - window] {
            count -= 1;
        }
        hits.push(i + 1 >= window && count == required);
    }

    hits
}

/// Apply the consecutive-sample requirement to an instantaneous mask.
///
/// Returns the per-row hit mask and the verdict. `n_consec <= 1` reduces to
/// "any row qualifies".
pub fn apply_hysteresis(mask: &[bool], n_consec: usize) -> (Vec<bool>, bool) {
    let hits = if n_consec <= 1 {
        mask.to_vec()
    } else {
        window_hits(mask, n_consec, n_consec)
    };
    let detected = hits.iter().any(|&h| h);
    (hits, detected)
}

/// Length of the longest run of consecutive `true` values
pub fn longest_run(mask: &[bool]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &m in mask {
        current = if m { current + 1 } else { 0 };
        longest = longest.max(current);
    }
    longest
}

/// Run instantaneous detection followed by hysteresis
pub fn detect(
    candidate: &MeasurementTable,
    thresholds: &Thresholds,
    band: &BandFilter,
    n_consec: usize,
) -> Detection {
    let band_mask = band.mask(candidate);
    let in_band_rows = band_mask.iter().filter(|&&b| b).count();
    let mask = apply_criteria(band_mask, candidate, thresholds);
    let (window_hits, detected) = apply_hysteresis(&mask, n_consec);

    let detection = Detection {
        qualifying_rows: mask.iter().filter(|&&m| m).count(),
        in_band_rows,
        longest_run: longest_run(&mask),
        first_hit: window_hits.iter().position(|&h| h),
        n_consec: n_consec.max(1),
        detected,
        mask,
        window_hits,
    };

    log::debug!(
        "{} of {} rows over threshold, longest run {}, n_consec {}",
        detection.qualifying_rows,
        detection.mask.len(),
        detection.longest_run,
        detection.n_consec
    );

    detection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::columns::ResolvedColumns;

    const T: bool = true;
    const F: bool = false;

    fn setup(baseline: &str, candidate: &str) -> (MeasurementTable, Thresholds, ResolvedColumns) {
        let base = MeasurementTable::parse_str("base", baseline).unwrap();
        let cand = MeasurementTable::parse_str("cand", candidate).unwrap();
        let base_cols = ResolvedColumns::for_baseline(&base).unwrap();
        let cand_cols = ResolvedColumns::for_candidate(&cand).unwrap();
        let thresholds = Thresholds::from_baseline(&base, &base_cols, &cand_cols, 3.0);
        (cand, thresholds, cand_cols)
    }

    #[test]
    fn test_hysteresis_run_of_three() {
        let (_, detected) = apply_hysteresis(&[T, T, F, T, T, T], 3);
        assert!(detected);

        let (_, detected) = apply_hysteresis(&[T, T, F, T, T, F], 3);
        assert!(!detected);
    }

    #[test]
    fn test_window_needs_full_history() {
        let hits = window_hits(&[T, T, T], 3, 3);
        assert_eq!(hits, vec![F, F, T]);

        let hits = window_hits(&[T, T], 3, 3);
        assert_eq!(hits, vec![F, F]);
    }

    #[test]
    fn test_window_counts_exact_required() {
        // 2-of-3 windows: exact count, not "at least"
        let hits = window_hits(&[T, T, T, F, T], 3, 2);
        assert_eq!(hits, vec![F, F, F, T, T]);
    }

    #[test]
    fn test_single_sample_is_any() {
        let (hits, detected) = apply_hysteresis(&[F, F, T], 1);
        assert!(detected);
        assert_eq!(hits, vec![F, F, T]);

        let (_, detected) = apply_hysteresis(&[F, F, T], 0);
        assert!(detected);
    }

    #[test]
    fn test_empty_mask() {
        let (hits, detected) = apply_hysteresis(&[], 1);
        assert!(hits.is_empty());
        assert!(!detected);

        let (_, detected) = apply_hysteresis(&[], 4);
        assert!(!detected);
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(&[T, T, F, T, T, T, F]), 3);
        assert_eq!(longest_run(&[]), 0);
    }

    #[test]
    fn test_pfd_only_detection() {
        // baseline pfd mean 2, std 1 -> threshold 5
        let (cand, thresholds, _) = setup(
            "Power Flux Density\n1\n2\n3\n",
            "Power Flux Density\n4\n5\n6\n",
        );
        let mask = instantaneous_mask(&cand, &thresholds, &BandFilter::pass_all());
        assert_eq!(mask, vec![F, F, T]);
    }

    #[test]
    fn test_power_criterion_must_also_pass() {
        // pfd threshold 5, power threshold 14
        let (cand, thresholds, _) = setup(
            "Power Flux Density,Total Spectrum Power\n1,10\n2,11\n3,12\n",
            "Power Flux Density,Total Spectrum Power\n6,14\n6,15\n4,20\n",
        );
        let mask = instantaneous_mask(&cand, &thresholds, &BandFilter::pass_all());
        assert_eq!(mask, vec![F, T, F]);
    }

    #[test]
    fn test_band_excludes_rows() {
        let (cand, thresholds, cols) = setup(
            "Power Flux Density\n1\n2\n3\n",
            "Frequency,Power Flux Density\n2410,9\n2500,9\n",
        );
        let band = BandFilter::new(cols.freq.as_deref(), Some(2400.0), Some(2483.5));
        let detection = detect(&cand, &thresholds, &band, 1);
        assert_eq!(detection.mask, vec![T, F]);
        assert_eq!(detection.in_band_rows, 1);
        assert!(detection.detected);
    }

    #[test]
    fn test_in_band_rows_counted_independently_of_thresholds() {
        let (cand, thresholds, cols) = setup(
            "Power Flux Density\n1\n2\n3\n",
            "Frequency,Power Flux Density\n2410,0\n2420,9\n2500,9\n2430,0\n",
        );
        let band = BandFilter::new(cols.freq.as_deref(), Some(2400.0), Some(2483.5));
        let detection = detect(&cand, &thresholds, &band, 1);

        assert_eq!(detection.in_band_rows, 3);
        assert_eq!(detection.mask, instantaneous_mask(&cand, &thresholds, &band));
        assert_eq!(detection.mask, vec![F, T, F, F]);
        assert_eq!(detection.qualifying_rows, 1);
    }

    #[test]
    fn test_nan_samples_never_qualify() {
        let (cand, thresholds, _) = setup(
            "Power Flux Density\n1\n2\n3\n",
            "Power Flux Density\nn/a\n-\n9\n",
        );
        let detection = detect(&cand, &thresholds, &BandFilter::pass_all(), 1);
        assert_eq!(detection.mask, vec![F, F, T]);
        assert_eq!(detection.first_hit, Some(2));
    }

    #[test]
    fn test_undefined_threshold_detects_nothing() {
        let (cand, thresholds, _) = setup(
            "Power Flux Density\n1\n",
            "Power Flux Density\n100\n200\n",
        );
        let detection = detect(&cand, &thresholds, &BandFilter::pass_all(), 1);
        assert!(!detection.detected);
        assert_eq!(detection.qualifying_rows, 0);
    }

    #[test]
    fn test_detect_is_deterministic() {
        let (cand, thresholds, _) = setup(
            "Power Flux Density\n1\n2\n3\n",
            "Power Flux Density\n9\n9\n1\n9\n9\n9\n",
        );
        let first = detect(&cand, &thresholds, &BandFilter::pass_all(), 3);
        let second = detect(&cand, &thresholds, &BandFilter::pass_all(), 3);
        assert_eq!(first, second);
        assert!(first.detected);
        assert_eq!(first.first_hit, Some(5));
    }
}
