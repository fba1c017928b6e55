//! Output formatting for CLI results

use colorful::Colorful;

use crate::core::{ColumnSummary, DetectionReport, Threshold};

/// Format the human-readable report. Statistics blocks are only included
/// when `stats` is set; the verdict is always printed, coloured only when
/// `color` is set.
pub fn format_report(report: &DetectionReport, stats: bool, color: bool) -> String {
    let mut output = String::new();

    if stats {
        output.push_str(&format_baseline(report));
        output.push_str(&format_summary_table(&report.candidate_summary));
        output.push_str(&format_detection(report));
    }

    output.push_str("\n===== RESULT =====\n");
    let verdict = match (report.detected(), color) {
        (true, true) => "Drone detected".red().to_string(),
        (false, true) => "No drone".green().to_string(),
        (true, false) => "Drone detected".to_string(),
        (false, false) => "No drone".to_string(),
    };
    output.push_str(&verdict);
    output.push('\n');

    output
}

fn format_threshold(t: &Threshold, unit: &str) -> String {
    format!(
        "{}: μ={:.2}{unit}, σ={:.2}  ->  threshold={:.2}{unit}\n",
        t.column,
        t.mean,
        t.std_dev,
        t.value,
        unit = unit
    )
}

fn format_baseline(report: &DetectionReport) -> String {
    let mut output = String::from("\n--- BASELINE ---\n");

    output.push_str(&format_threshold(&report.thresholds.pfd.threshold, ""));
    if let Some(power) = &report.thresholds.power {
        output.push_str(&format_threshold(&power.threshold, " dBm"));
    }

    let config = &report.config;
    if config.freq_min.is_some() || config.freq_max.is_some() {
        let bound = |b: Option<f64>| b.map_or_else(|| "?".to_string(), |v| v.to_string());
        output.push_str(&format!(
            "Band filter: {}-{} MHz",
            bound(config.freq_min),
            bound(config.freq_max)
        ));
        if report.band.band.is_none() {
            output.push_str(" (ignored, both bounds required)");
        } else if report.band.column.is_none() {
            output.push_str(" (ignored, no frequency column)");
        }
        output.push('\n');
    }

    output
}

fn format_summary_table(summaries: &[ColumnSummary]) -> String {
    let mut output = String::from("\n--- DATA describe() ---\n");
    let width = summaries
        .iter()
        .map(|s| s.column.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    output.push_str(&format!(
        "{:<width$} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "",
        "count",
        "mean",
        "std",
        "min",
        "25%",
        "50%",
        "75%",
        "max",
        width = width
    ));

    for s in summaries {
        output.push_str(&format!(
            "{:<width$} {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}\n",
            s.column,
            s.count,
            s.mean,
            s.std,
            s.min,
            s.p25,
            s.p50,
            s.p75,
            s.max,
            width = width
        ));
    }

    output
}

fn format_detection(report: &DetectionReport) -> String {
    let d = &report.detection;
    let mut output = String::from("\n--- DETECTION ---\n");

    output.push_str(&format!(
        "Rows: {} (in band: {})\n",
        d.mask.len(),
        d.in_band_rows
    ));
    output.push_str(&format!("Over threshold: {}\n", d.qualifying_rows));
    output.push_str(&format!(
        "Longest run: {} (required: {})\n",
        d.longest_run, d.n_consec
    ));
    match d.first_hit {
        Some(row) => output.push_str(&format!("First hit: row {}\n", row)),
        None => output.push_str("First hit: none\n"),
    }

    output
}

/// Format the report as JSON. Undefined statistics serialize as `null`.
pub fn format_json(report: &DetectionReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
