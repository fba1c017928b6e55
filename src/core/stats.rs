//! Descriptive statistics over measurement columns
//!
//! Missing values (NaN) are skipped everywhere, matching how dataframe
//! libraries treat absent cells.

use serde::Serialize;

/// Arithmetic mean of the non-missing values; NaN if there are none
pub fn mean(data: &[f64]) -> f64 {
    let (sum, count) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));

    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Sample standard deviation (N-1 denominator) of the non-missing values.
///
/// Undefined for fewer than two values, which is reported as NaN.
pub fn sample_std_dev(data: &[f64]) -> f64 {
    let values: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if values.len() < 2 {
        return f64::NAN;
    }

    let mu = mean(&values);
    let sum_sq: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Quantile `q` in [0, 1] using linear interpolation between closest ranks
pub fn quantile(data: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Summary of one column, laid out like a dataframe `describe()` row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Describe a column's non-missing values
pub fn describe(column: &str, data: &[f64]) -> ColumnSummary {
    let count = data.iter().filter(|v| !v.is_nan()).count();

    ColumnSummary {
        column: column.to_string(),
        count,
        mean: mean(data),
        std: sample_std_dev(data),
        min: quantile(data, 0.0),
        p25: quantile(data, 0.25),
        p50: quantile(data, 0.5),
        p75: quantile(data, 0.75),
        max: quantile(data, 1.0),
    }
}
