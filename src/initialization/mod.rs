//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - Ctrl-C cancellation token
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

use tokio_util::sync::CancellationToken;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_resolver, resolver_options};

/// Creates a cancellation token that is cancelled on Ctrl-C.
///
/// The batch driver checks the token between rows, so an interrupted run
/// stops after the row in progress and leaves a well-formed output file.
pub fn init_interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => {
                        log::warn!("Interrupt received, stopping after the current row");
                        signal_token.cancel();
                    }
                    Err(e) => log::warn!("Failed to listen for Ctrl-C: {e}"),
                }
            }
            _ = signal_token.cancelled() => {}
        }
    });
    token
}
