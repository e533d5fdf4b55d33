//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_recon` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_recon::export::to_pretty_json;
use ip_recon::initialization::init_logger_with;
use ip_recon::presentation::{group_fields, render_text};
use ip_recon::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file may set RUST_LOG; absence is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let json = config.json;
    let show_map = config.show_map;

    match run_scan(config).await {
        Ok(report) => {
            if json {
                println!("{}", to_pretty_json(&report.record)?);
            } else {
                print!("{}", render_text(&group_fields(&report.record)));
            }
            if show_map {
                match report.map_url.as_deref() {
                    Some(url) => println!("Map: {}", url),
                    None => println!("Map: no coordinates in this record"),
                }
            }
            if let Some(path) = report.export_path.as_ref() {
                println!("Exported to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_recon error: {:#}", e);
            process::exit(1);
        }
    }
}
