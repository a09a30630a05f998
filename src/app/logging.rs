//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Logs how many rows have been resolved and the current rate.
pub fn log_progress(start_time: Instant, completed_rows: &AtomicUsize) {
    let completed = completed_rows.load(Ordering::SeqCst);
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Resolved {} rows in {:.2} seconds (~{:.2} rows/sec)",
        completed, elapsed_secs, rate
    );
}

/// Spawns a task that logs progress every `interval` until `cancel` fires.
pub fn spawn_progress_logger(
    start_time: Instant,
    completed_rows: Arc<AtomicUsize>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => log_progress(start_time, &completed_rows),
                _ = cancel.cancelled() => break,
            }
        }
    })
}
