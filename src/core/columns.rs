//! Column resolution by fuzzy header match
//!
//! Capture tools decorate header names with units and channel suffixes
//! ("Power Flux Density [dBW/m²]", "Total Spectrum Power (dBm)"), so each
//! measurement role is found by a case-insensitive substring search over the
//! declared columns. When several columns match, the first one in declared
//! order wins and no ambiguity error is raised.

use serde::Serialize;

use super::table::MeasurementTable;
use crate::error::{DetectError, Result};

/// Semantic role a measurement column can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Power Flux Density, the mandatory detection signal
    Pfd,
    /// Total Spectrum Power, enables a second threshold criterion
    Power,
    /// Frequency in MHz, enables band filtering
    Frequency,
}

impl ColumnRole {
    /// Keyword searched for in column names
    pub fn keyword(&self) -> &'static str {
        match self {
            ColumnRole::Pfd => "Power Flux Density",
            ColumnRole::Power => "Total Spectrum Power",
            ColumnRole::Frequency => "Frequency",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnRole::Pfd => "pfd",
            ColumnRole::Power => "power",
            ColumnRole::Frequency => "freq",
        }
    }
}

/// Return the first column whose name contains `keyword`, ignoring case
pub fn resolve_column<'a>(headers: &'a [String], keyword: &str) -> Option<&'a str> {
    let needle = keyword.to_lowercase();
    headers
        .iter()
        .find(|h| h.to_lowercase().contains(&needle))
        .map(String::as_str)
}

/// Column names resolved for one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedColumns {
    pub pfd: String,
    pub power: Option<String>,
    pub freq: Option<String>,
}

impl ResolvedColumns {
    /// Resolve the baseline columns. Frequency is never used from the baseline.
    pub fn for_baseline(table: &MeasurementTable) -> Result<Self> {
        Ok(Self {
            pfd: required(table, ColumnRole::Pfd, "baseline")?,
            power: optional(table, ColumnRole::Power),
            freq: None,
        })
    }

    pub fn for_candidate(table: &MeasurementTable) -> Result<Self> {
        Ok(Self {
            pfd: required(table, ColumnRole::Pfd, "candidate")?,
            power: optional(table, ColumnRole::Power),
            freq: optional(table, ColumnRole::Frequency),
        })
    }
}

fn required(table: &MeasurementTable, role: ColumnRole, which: &str) -> Result<String> {
    optional(table, role).ok_or_else(|| DetectError::MissingColumn {
        role,
        table: which.to_string(),
    })
}

fn optional(table: &MeasurementTable, role: ColumnRole) -> Option<String> {
    let found = resolve_column(table.headers(), role.keyword());
    match found {
        Some(col) => log::debug!("{}: {} -> '{}'", table.label(), role.name(), col),
        None => log::debug!("{}: no column matches '{}'", table.label(), role.keyword()),
    }
    found.map(str::to_string)
}
