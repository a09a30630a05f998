//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, input handling and URL parsing
//! - Per-outcome statistics tracking
//!
//! Per-row lookup failures are not errors at this level: they are carried
//! as [`crate::spf::Outcome`] values and only counted here.

mod stats;
mod types;

// Re-export public API
pub use stats::OutcomeStats;
pub use types::{ConfigError, InitializationError, InputError, InvalidUrl};
