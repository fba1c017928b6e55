// tests/test_utils/mod.rs
//
// Shared fixtures: CSV measurement logs written to a temporary directory.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PFD: &str = "Power Flux Density [dBW/m2]";
pub const POWER: &str = "Total Spectrum Power [dBm]";
pub const FREQ: &str = "Frequency [MHz]";

/// Temporary directory holding measurement CSVs
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write raw bytes, e.g. Latin-1 encoded text
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// Write a CSV from a header and rows of numbers
    pub fn write_csv(&self, name: &str, headers: &[&str], rows: &[Vec<f64>]) -> PathBuf {
        let mut text = headers.join(",");
        text.push('\n');
        for row in rows {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            text.push_str(&cells.join(","));
            text.push('\n');
        }
        self.write_bytes(name, text.as_bytes())
    }

    /// Baseline with PFD mean 10, std 2 and power mean -60, std 1
    pub fn baseline(&self) -> PathBuf {
        self.write_csv(
            "baseline.csv",
            &[FREQ, PFD, POWER],
            &[
                vec![2410.0, 8.0, -61.0],
                vec![2420.0, 12.0, -59.0],
                vec![2430.0, 8.0, -61.0],
                vec![2440.0, 12.0, -59.0],
                vec![2450.0, 10.0, -60.0],
            ],
        )
    }

    /// Candidate whose PFD column follows `pfd`, with power well above
    /// threshold and every sample at 2440 MHz
    pub fn candidate(&self, pfd: &[f64]) -> PathBuf {
        let rows: Vec<Vec<f64>> = pfd.iter().map(|&p| vec![2440.0, p, -40.0]).collect();
        self.write_csv("candidate.csv", &[FREQ, PFD, POWER], &rows)
    }
}
