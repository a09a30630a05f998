//! Batch driver helpers.
//!
//! Progress logging, shutdown of background tasks, and the end-of-run
//! summary used by `run_enrichment`.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::{log_progress, spawn_progress_logger};
pub use shutdown::shutdown_gracefully;
pub use statistics::print_outcome_statistics;
