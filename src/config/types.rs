//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_DELIMITER, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_SPF_COLUMN, DEFAULT_URL_COLUMN, DNS_TIMEOUT_SECS,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Every option has a default and can also be set through a `DOMAIN_SPF_*`
/// environment variable. The struct can be built programmatically as well:
///
/// ```no_run
/// use domain_spf::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("domains.csv"),
///     concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_spf",
    version,
    about = "Adds the SPF record of every domain in a CSV file as a new column."
)]
pub struct Config {
    /// CSV file to read
    #[arg(value_parser, default_value = DEFAULT_INPUT_FILE, env = "DOMAIN_SPF_INPUT")]
    pub input: PathBuf,

    /// CSV file to write (input columns plus the SPF column)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE, env = "DOMAIN_SPF_OUTPUT")]
    pub output: PathBuf,

    /// Name of the column holding URLs or domains
    #[arg(long, default_value = DEFAULT_URL_COLUMN, env = "DOMAIN_SPF_URL_COLUMN")]
    pub url_column: String,

    /// Name of the column the SPF result is written to
    #[arg(long, default_value = DEFAULT_SPF_COLUMN, env = "DOMAIN_SPF_SPF_COLUMN")]
    pub spf_column: String,

    /// Field separator of the input and output files
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER, env = "DOMAIN_SPF_DELIMITER")]
    pub delimiter: char,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..), env = "DOMAIN_SPF_DNS_TIMEOUT_SECS")]
    pub dns_timeout_secs: u64,

    /// Nameserver to query instead of the system configuration (IP or IP:PORT, repeatable)
    #[arg(long = "nameserver", value_parser = parse_nameserver, value_delimiter = ',', env = "DOMAIN_SPF_NAMESERVERS")]
    pub nameservers: Vec<SocketAddr>,

    /// Number of lookups in flight at once (output order is always preserved)
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency, env = "DOMAIN_SPF_CONCURRENCY")]
    pub concurrency: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            url_column: DEFAULT_URL_COLUMN.to_string(),
            spf_column: DEFAULT_SPF_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            nameservers: Vec::new(),
            concurrency: DEFAULT_CONCURRENCY,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks values that the CLI parsers enforce but a programmatically
    /// built `Config` may violate.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError {
                field: "concurrency",
                message: "must be greater than 0 (1 resolves rows sequentially)".to_string(),
            });
        }
        if self.dns_timeout_secs == 0 {
            return Err(ConfigError {
                field: "dns_timeout_secs",
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(ConfigError {
                field: "delimiter",
                message: format!(
                    "must be a single ASCII character other than a quote or newline, got {:?}",
                    self.delimiter
                ),
            });
        }
        if self.url_column.trim().is_empty() {
            return Err(ConfigError {
                field: "url_column",
                message: "must not be empty".to_string(),
            });
        }
        if self.spf_column.trim().is_empty() {
            return Err(ConfigError {
                field: "spf_column",
                message: "must not be empty".to_string(),
            });
        }
        if self.url_column == self.spf_column {
            return Err(ConfigError {
                field: "spf_column",
                message: format!(
                    "must differ from the URL column '{}', or the URLs would be overwritten",
                    self.url_column
                ),
            });
        }
        Ok(())
    }
}

/// Parses `IP` or `IP:PORT` (`[IPv6]:PORT`), defaulting to port 53.
fn parse_nameserver(value: &str) -> Result<SocketAddr, String> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| format!("'{value}' is not an IP address or IP:PORT"))
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
