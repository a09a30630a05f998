//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigError {
    /// Name of the offending option.
    pub field: &'static str,
    /// What is wrong and what is accepted.
    pub message: String,
}

/// Error types for reading and writing the CSV tables.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The configured URL column is missing from the header row.
    #[error("Column '{column}' does not exist in the table!")]
    MissingColumn {
        /// The configured column name.
        column: String,
    },

    /// The delimiter is not a single ASCII character.
    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),

    /// Malformed CSV or an I/O failure underneath the CSV reader/writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure outside the CSV layer (e.g. flushing the output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw input that does not parse as a URL.
#[derive(Error, Debug)]
#[error("Invalid URL format: {input:?} ({source})")]
pub struct InvalidUrl {
    /// The trimmed input value.
    pub input: String,
    /// The underlying parse error.
    #[source]
    pub source: url::ParseError,
}
