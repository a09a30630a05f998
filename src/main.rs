//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_spf` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_spf::initialization::init_logger_with;
use domain_spf::{run_enrichment, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; DOMAIN_SPF_* variables may also come from the shell
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_enrichment(config).await {
        Ok(report) => {
            println!(
                "Resolved {} row{} ({} with SPF, {} without, {} failed) in {:.1}s",
                report.total_rows,
                if report.total_rows == 1 { "" } else { "s" },
                report.found,
                report.not_found,
                report.failed,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());
            if report.interrupted {
                process::exit(130);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_spf error: {:#}", e);
            process::exit(1);
        }
    }
}
