//! Core detection pipeline

pub mod analyzer;
pub mod band;
pub mod columns;
pub mod detector;
pub mod stats;
pub mod table;
pub mod threshold;

pub use analyzer::{Analyzer, AnalyzerBuilder, DetectionConfig, DetectionReport, TableInfo};
pub use band::{BandFilter, FrequencyBand};
pub use columns::{resolve_column, ColumnRole, ResolvedColumns};
pub use detector::{apply_hysteresis, detect, instantaneous_mask, window_hits, Detection};
pub use stats::ColumnSummary;
pub use table::{MeasurementTable, TextEncoding};
pub use threshold::{Criterion, Threshold, Thresholds};
