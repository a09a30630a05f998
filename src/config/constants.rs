//! Configuration constants.
//!
//! Defaults for the CLI options and the fixed values of SPF extraction.

/// Default input file.
pub const DEFAULT_INPUT_FILE: &str = "domains.csv";
/// Default output file.
pub const DEFAULT_OUTPUT_FILE: &str = "output_with_spf.csv";
/// Default name of the column holding the URLs.
pub const DEFAULT_URL_COLUMN: &str = "url";
/// Default name of the column the SPF result is written to.
pub const DEFAULT_SPF_COLUMN: &str = "spf_record";
/// Default CSV field separator.
pub const DEFAULT_DELIMITER: char = ';';

/// Header prefix of unnamed columns (trailing separators in spreadsheet exports).
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed";

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Number of rows resolved at once; 1 keeps lookups strictly sequential.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Progress logging interval in seconds
pub const LOGGING_INTERVAL: u64 = 5;

// URL normalization
/// Scheme prefixes that are left as-is (case-sensitive).
pub const RECOGNIZED_SCHEME_PREFIXES: &[&str] = &["http://", "https://"];
/// Prefix added to input without a recognized scheme.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

// SPF extraction
/// Literal prefix of an SPF TXT record.
pub const SPF_PREFIX: &str = "v=spf1";
/// Separator used when a domain publishes more than one SPF record.
pub const SPF_JOIN_SEPARATOR: &str = "; ";
