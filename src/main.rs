// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::IsTerminal;

use rfcheckr::cli::{format_json, format_report, print_bands, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let (baseline, datafile) = match args.inputs() {
        Some(inputs) if !args.list_bands => inputs,
        _ => {
            print_bands();
            return Ok(());
        }
    };

    let analyzer = args.analyzer()?;
    let report = analyzer
        .analyze_files(baseline, datafile)
        .context("Detection aborted")?;

    if args.json {
        println!("{}", format_json(&report)?);
    } else {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        print!("{}", format_report(&report, args.stats, color));
    }

    Ok(())
}
