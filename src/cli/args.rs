//! CLI argument parsing

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::BandPreset;
use crate::core::{Analyzer, AnalyzerBuilder};
use crate::error::{DetectError, Result};

#[derive(Parser, Debug)]
#[command(name = "rfcheckr")]
#[command(about = "Detect a drone transmitter by comparing RF measurements against a noise baseline")]
pub struct Args {
    /// CSV captured with the transmitter off (calibrates thresholds)
    #[arg(required_unless_present = "list_bands")]
    pub baseline: Option<PathBuf>,

    /// CSV to analyze
    #[arg(required_unless_present = "list_bands")]
    pub datafile: Option<PathBuf>,

    /// Standard deviation multiplier for the thresholds
    #[arg(
        short = 'k',
        long = "ksigma",
        default_value_t = 3.0,
        allow_negative_numbers = true,
        env = "RFCHECKR_KSIGMA"
    )]
    pub k_sigma: f64,

    /// Lower frequency bound in MHz (requires --freq-max)
    #[arg(long, allow_negative_numbers = true)]
    pub freq_min: Option<f64>,

    /// Upper frequency bound in MHz (requires --freq-min)
    #[arg(long, allow_negative_numbers = true)]
    pub freq_max: Option<f64>,

    /// Named band preset (see --list-bands); --freq-min/--freq-max override its bounds
    #[arg(long)]
    pub band: Option<String>,

    /// Consecutive samples over threshold required for a detection (values
    /// below 1 behave as 1)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub n_consec: i64,

    /// Print thresholds and statistics
    #[arg(short, long)]
    pub stats: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// List band presets and exit
    #[arg(long)]
    pub list_bands: bool,
}

impl Args {
    /// Build the analyzer described by these arguments
    pub fn analyzer(&self) -> Result<Analyzer> {
        let mut builder = AnalyzerBuilder::new()
            .k_sigma(self.k_sigma)
            .n_consec(self.n_consec.max(1) as usize);

        if let Some(name) = &self.band {
            let preset =
                BandPreset::from_name(name).ok_or_else(|| DetectError::UnknownBand(name.clone()))?;
            builder = builder.band(preset);
        }
        if self.freq_min.is_some() {
            builder = builder.freq_min(self.freq_min);
        }
        if self.freq_max.is_some() {
            builder = builder.freq_max(self.freq_max);
        }

        Ok(builder.build())
    }

    /// Baseline and data file paths, when both were given
    pub fn inputs(&self) -> Option<(&Path, &Path)> {
        self.baseline.as_deref().zip(self.datafile.as_deref())
    }
}

/// Print available band presets
pub fn print_bands() {
    println!("Available band presets:\n");

    for preset in BandPreset::all() {
        let band = preset.band();
        println!("  {} - {}", preset.name(), preset.description());
        println!("    {} - {} MHz", band.min_mhz, band.max_mhz);
    }
}
