//! domain_spf library: SPF record enrichment for lists of domains
//!
//! This library looks up the Sender Policy Framework record of every URL or
//! domain in a delimited table and writes the table back out with one extra
//! column holding the record, or the reason why there is none.
//!
//! # Example
//!
//! ```no_run
//! use domain_spf::{Config, run_enrichment};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("domains.csv"),
//!     concurrency: 4,
//!     ..Default::default()
//! };
//!
//! let report = run_enrichment(config).await?;
//! println!("{} rows, {} with SPF", report.total_rows, report.found);
//! # Ok(())
//! # }
//! ```
//!
//! Single lookups go through [`SpfResolver`]:
//!
//! ```no_run
//! use domain_spf::{HickoryLookup, SpfResolver};
//! use domain_spf::initialization::init_resolver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(&domain_spf::Config::default())?;
//! let spf = SpfResolver::new(HickoryLookup::new(resolver));
//! println!("{}", spf.resolve_raw("example.com").await);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod spf;
pub mod table;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ConfigError, InputError, InvalidUrl};
pub use run::{run_enrichment, run_enrichment_with, EnrichReport};
pub use spf::{
    normalize, HickoryLookup, Hostname, LookupFailure, Outcome, OutcomeKind, SpfResolver,
    TxtLookup,
};

// Internal run module (contains the batch driver)
mod run {
    use anyhow::{Context, Result};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use futures::{future, stream, StreamExt};
    use log::{debug, info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        log_progress, print_outcome_statistics, shutdown_gracefully, spawn_progress_logger,
    };
    use crate::config::{Config, LOGGING_INTERVAL};
    use crate::error_handling::OutcomeStats;
    use crate::initialization::{init_interrupt_token, init_resolver};
    use crate::spf::{HickoryLookup, OutcomeKind, SpfResolver, TxtLookup};
    use crate::table::{delimiter_byte, open_input, ColumnLayout, SpfWriter};

    /// Results of an enrichment run.
    #[derive(Debug, Clone)]
    pub struct EnrichReport {
        /// Rows written to the output table
        pub total_rows: usize,
        /// Rows with at least one SPF record
        pub found: usize,
        /// Rows whose domain has TXT records but no SPF record
        pub not_found: usize,
        /// Rows whose lookup failed (invalid URL, NXDOMAIN, no TXT, timeout, other)
        pub failed: usize,
        /// Whether the run was stopped before the end of the input
        pub interrupted: bool,
        /// Path of the output table
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an enrichment with the system DNS transport.
    ///
    /// Builds the resolver from `config`, installs a Ctrl-C handler and
    /// delegates to [`run_enrichment_with`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the resolver cannot be built, the input cannot be
    /// read, the URL column is missing, or the output cannot be written.
    /// Per-row lookup failures are never errors.
    pub async fn run_enrichment(config: Config) -> Result<EnrichReport> {
        let resolver = init_resolver(&config).context("Failed to initialize DNS resolver")?;
        let spf = SpfResolver::new(HickoryLookup::new(resolver));
        let cancel = init_interrupt_token();

        let report = run_enrichment_with(&config, &spf, cancel.clone()).await;
        // Releases the Ctrl-C listener task
        cancel.cancel();
        report
    }

    /// Runs an enrichment with the given resolver.
    ///
    /// Rows are resolved in input order, up to `config.concurrency` at a
    /// time, and each row is written (and flushed) as soon as it and every
    /// row before it are done. Cancelling `cancel` stops the run between
    /// rows; the output then holds every row completed so far.
    ///
    /// # Errors
    ///
    /// See [`run_enrichment`].
    pub async fn run_enrichment_with<L: TxtLookup>(
        config: &Config,
        resolver: &SpfResolver<L>,
        cancel: CancellationToken,
    ) -> Result<EnrichReport> {
        config.validate()?;
        let delimiter = delimiter_byte(config.delimiter)?;

        info!("Loading {}...", config.input.display());
        let mut reader = open_input(&config.input, delimiter)
            .with_context(|| format!("Failed to load {}", config.input.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header of {}", config.input.display()))?
            .clone();
        let layout = ColumnLayout::from_headers(&headers, &config.url_column, &config.spf_column)?;

        let mut writer = SpfWriter::create(&config.output, delimiter, layout.clone())
            .with_context(|| format!("Failed to create {}", config.output.display()))?;

        info!("Getting SPF records (this may take a while)...");

        let start_time = std::time::Instant::now();
        let stats = OutcomeStats::new();
        let completed_rows = Arc::new(AtomicUsize::new(0));

        let cancel_logging = cancel.child_token();
        let logging_task = Some(spawn_progress_logger(
            start_time,
            Arc::clone(&completed_rows),
            Duration::from_secs(LOGGING_INTERVAL),
            cancel_logging.clone(),
        ));

        let layout = &layout;
        let mut results = stream::iter(reader.records().enumerate())
            .take_while(|_| future::ready(!cancel.is_cancelled()))
            .map(|(row_idx, record)| async move {
                let record = record.with_context(|| {
                    format!("Failed to read input row {}", row_idx + 1)
                })?;
                let url = layout.url_of(&record);
                let outcome = resolver.resolve_raw(url).await;
                debug!("{url:?} -> {outcome}");
                Ok::<_, anyhow::Error>((record, outcome))
            })
            .buffered(config.concurrency);

        let mut run_result = Ok(());
        while let Some(item) = results.next().await {
            let (record, outcome) = match item {
                Ok(item) => item,
                Err(e) => {
                    run_result = Err(e);
                    break;
                }
            };
            if let Err(e) = writer.write_row(&record, &outcome.to_string()) {
                run_result = Err(anyhow::Error::new(e).context(format!(
                    "Failed to write {}",
                    config.output.display()
                )));
                break;
            }
            stats.record(&outcome);
            completed_rows.fetch_add(1, Ordering::SeqCst);

            if cancel.is_cancelled() {
                break;
            }
        }
        drop(results);
        let interrupted = cancel.is_cancelled();

        shutdown_gracefully(cancel_logging, logging_task).await;
        run_result?;

        let total_rows = writer
            .finish()
            .with_context(|| format!("Failed to write {}", config.output.display()))?;

        log_progress(start_time, &completed_rows);
        print_outcome_statistics(&stats);

        if interrupted {
            warn!(
                "Interrupted after {} rows, partial results saved to {}",
                total_rows,
                config.output.display()
            );
        } else {
            info!("Done! Saved to {}", config.output.display());
        }

        Ok(EnrichReport {
            total_rows,
            found: stats.get_count(OutcomeKind::Found),
            not_found: stats.get_count(OutcomeKind::NotFound),
            failed: stats.total_errors(),
            interrupted,
            output_path: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
