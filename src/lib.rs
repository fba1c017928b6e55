//! rfcheckr - Detect RF emitters against a calibrated noise baseline
//!
//! Compares a candidate RF measurement log against K-sigma thresholds derived
//! from a baseline log captured with the emitter known absent, and decides
//! whether the emitter (typically a drone link) is present.
//!
//! ## Pipeline
//!
//! 1. Load both CSV logs (UTF-8, falling back to ISO-8859-1)
//! 2. Resolve the Power Flux Density, Total Spectrum Power and Frequency
//!    columns by case-insensitive substring match, first match wins
//! 3. Derive `mean + k * std` thresholds from the baseline only
//! 4. Optionally restrict candidate rows to a frequency band
//! 5. Flag rows over every enabled threshold, then require `n_consec`
//!    consecutive flagged rows before reporting a detection
//!
//! ## Module Structure
//!
//! - `core` - Table loading, thresholds, band filter and detector
//! - `cli` - Command-line arguments and report formatting
//! - `config` - Named frequency band presets
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rfcheckr::{Analyzer, BandPreset};
//!
//! let analyzer = Analyzer::builder()
//!     .k_sigma(3.0)
//!     .band(BandPreset::Ism2400)
//!     .n_consec(3)
//!     .build();
//!
//! let report = analyzer.analyze_files(baseline, candidate)?;
//! println!("detected: {}", report.detected());
//! ```

// Core detection functionality
pub mod core;

// Command-line interface
pub mod cli;

// Band presets
pub mod config;

pub mod error;

pub use config::BandPreset;
pub use core::{
    Analyzer, AnalyzerBuilder, BandFilter, ColumnRole, Detection, DetectionConfig,
    DetectionReport, FrequencyBand, MeasurementTable, ResolvedColumns, TextEncoding, Threshold,
    Thresholds,
};
pub use error::{DetectError, Result};
