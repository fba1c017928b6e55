// src/core/table.rs
//
// Measurement table loading. RF capture tools frequently write Latin-1
// headers (units like "dBµV/m"), so UTF-8 decoding falls back to ISO-8859-1.

use serde::Serialize;
use std::path::Path;

use crate::error::{DetectError, Result};

/// Text encoding a table was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "iso-8859-1")]
    Latin1,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }
}

/// Tabular measurement log with a header row
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    label: String,
    headers: Vec<String>,
    records: Vec<Vec<String>>,
    encoding: TextEncoding,
}

impl MeasurementTable {
    /// Load a CSV file, trying UTF-8 first and ISO-8859-1 second
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DetectError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| DetectError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let label = path.display().to_string();
        let (text, encoding) = decode_text(bytes);
        if encoding == TextEncoding::Latin1 {
            log::warn!("{} is not valid UTF-8, decoded as {}", label, encoding.name());
        }

        let mut table = Self::parse_str(&label, &text)?;
        table.encoding = encoding;
        log::debug!(
            "loaded {}: {} columns, {} rows",
            label,
            table.headers.len(),
            table.records.len()
        );
        Ok(table)
    }

    /// Parse CSV text that is already decoded
    pub fn parse_str(label: &str, text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let csv_err = |source: csv::Error| DetectError::Csv {
            label: label.to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            label: label.to_string(),
            headers,
            records,
            encoding: TextEncoding::Utf8,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Column names in declared order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Numeric values of a column, one per row.
    ///
    /// Empty, short, or unparseable cells come back as NaN so that row
    /// alignment is preserved. Returns `None` if the column does not exist.
    pub fn column_values(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(
            self.records
                .iter()
                .map(|row| row.get(index).map_or(f64::NAN, |cell| parse_cell(cell)))
                .collect(),
        )
    }
}

fn parse_cell(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Decode raw bytes as UTF-8, falling back to ISO-8859-1
pub fn decode_text(bytes: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, TextEncoding::Utf8),
        // Every byte is a valid Latin-1 code point
        Err(err) => (
            err.into_bytes().iter().map(|&b| b as char).collect(),
            TextEncoding::Latin1,
        ),
    }
}
