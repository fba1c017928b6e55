//! Configuration module for rfcheckr

mod bands;

pub use bands::BandPreset;
