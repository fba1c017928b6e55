// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{print_bands, Args};
pub use output::{format_json, format_report};
