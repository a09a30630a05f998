//! SPF record resolution.
//!
//! This module provides the per-domain core of the tool:
//! - URL normalization (raw input to hostname)
//! - TXT lookups through `hickory-resolver`
//! - SPF extraction and outcome classification
//!
//! Resolution is total: every input yields exactly one [`Outcome`].

mod lookup;
mod normalize;
mod outcome;
mod records;
mod resolution;

// Re-export public API
pub use lookup::{classify_resolve_error, HickoryLookup, LookupFailure, TxtLookup};
pub use normalize::{normalize, Hostname};
pub use outcome::{
    Outcome, OutcomeKind, DOMAIN_NOT_FOUND_TEXT, INVALID_URL_TEXT, NOT_FOUND_TEXT,
    NO_TXT_RECORDS_TEXT, OTHER_ERROR_PREFIX, TIMEOUT_TEXT,
};
pub use records::{extract_spf_records, join_txt_segments, strip_enclosing_quotes};
pub use resolution::{classify_failure, classify_records, SpfResolver};
