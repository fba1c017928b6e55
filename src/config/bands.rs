// src/config/bands.rs
//
// Named frequency bands commonly used by drone control and video links.

use serde::{Deserialize, Serialize};

use crate::core::band::FrequencyBand;

/// Preset bands selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandPreset {
    /// 433 MHz ISM (telemetry radios)
    Ism433,
    /// 868 MHz SRD (EU long-range control links)
    Ism868,
    /// 915 MHz ISM (US long-range control links)
    Ism915,
    /// 2.4 GHz ISM (most RC and Wi-Fi links)
    Ism2400,
    /// 5.8 GHz (analog and digital FPV video)
    Ism5800,
}

impl BandPreset {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Ism433,
            Self::Ism868,
            Self::Ism915,
            Self::Ism2400,
            Self::Ism5800,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ism-433" | "433" => Some(Self::Ism433),
            "ism-868" | "868" => Some(Self::Ism868),
            "ism-915" | "915" => Some(Self::Ism915),
            "ism-2.4" | "2.4" | "2400" => Some(Self::Ism2400),
            "ism-5.8" | "5.8" | "5800" => Some(Self::Ism5800),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ism433 => "ism-433",
            Self::Ism868 => "ism-868",
            Self::Ism915 => "ism-915",
            Self::Ism2400 => "ism-2.4",
            Self::Ism5800 => "ism-5.8",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ism433 => "433 MHz ISM, telemetry radios",
            Self::Ism868 => "868 MHz SRD, EU long-range control",
            Self::Ism915 => "915 MHz ISM, US long-range control",
            Self::Ism2400 => "2.4 GHz ISM, RC control and Wi-Fi",
            Self::Ism5800 => "5.8 GHz, FPV video downlink",
        }
    }

    /// Band limits in MHz
    pub fn band(&self) -> FrequencyBand {
        match self {
            Self::Ism433 => FrequencyBand::new(433.05, 434.79),
            Self::Ism868 => FrequencyBand::new(863.0, 870.0),
            Self::Ism915 => FrequencyBand::new(902.0, 928.0),
            Self::Ism2400 => FrequencyBand::new(2400.0, 2483.5),
            Self::Ism5800 => FrequencyBand::new(5725.0, 5875.0),
        }
    }
}
