//! Resolution outcomes and their fixed string renderings.

use std::fmt;

use strum_macros::EnumIter as EnumIterMacro;

/// Rendering of [`Outcome::NotFound`].
pub const NOT_FOUND_TEXT: &str = "No SPF record found";
/// Rendering of [`Outcome::DomainNotFound`].
pub const DOMAIN_NOT_FOUND_TEXT: &str = "Domain not found";
/// Rendering of [`Outcome::NoTxtRecords`].
pub const NO_TXT_RECORDS_TEXT: &str = "No TXT records";
/// Rendering of [`Outcome::Timeout`].
pub const TIMEOUT_TEXT: &str = "DNS Timeout";
/// Rendering of [`Outcome::InvalidUrl`].
pub const INVALID_URL_TEXT: &str = "Invalid URL format";
/// Prefix of the [`Outcome::OtherError`] rendering.
pub const OTHER_ERROR_PREFIX: &str = "Error: ";

/// Result of looking up the SPF record for one input value.
///
/// Exactly one outcome is produced per input. `Found` and `NotFound` are
/// successful lookups; every other variant describes why no record could be
/// determined. The `Display` implementation yields the text written to the
/// output column and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One or more SPF records, joined with `"; "`.
    Found(String),
    /// TXT records exist, none of them is an SPF record.
    NotFound,
    /// The domain does not exist (NXDOMAIN).
    DomainNotFound,
    /// The domain exists but has no TXT records.
    NoTxtRecords,
    /// The query exceeded the configured timeout.
    Timeout,
    /// The input could not be parsed as a URL.
    InvalidUrl,
    /// Any other resolution failure, with the resolver's description.
    OtherError(String),
}

impl Outcome {
    /// Returns the field-less kind of this outcome.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Found(_) => OutcomeKind::Found,
            Outcome::NotFound => OutcomeKind::NotFound,
            Outcome::DomainNotFound => OutcomeKind::DomainNotFound,
            Outcome::NoTxtRecords => OutcomeKind::NoTxtRecords,
            Outcome::Timeout => OutcomeKind::Timeout,
            Outcome::InvalidUrl => OutcomeKind::InvalidUrl,
            Outcome::OtherError(_) => OutcomeKind::OtherError,
        }
    }

    /// Returns `true` for outcomes that represent a failed lookup.
    ///
    /// `Found` and `NotFound` are answers, not errors.
    pub fn is_error(&self) -> bool {
        self.kind().is_error()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(spf) => f.write_str(spf),
            Outcome::NotFound => f.write_str(NOT_FOUND_TEXT),
            Outcome::DomainNotFound => f.write_str(DOMAIN_NOT_FOUND_TEXT),
            Outcome::NoTxtRecords => f.write_str(NO_TXT_RECORDS_TEXT),
            Outcome::Timeout => f.write_str(TIMEOUT_TEXT),
            Outcome::InvalidUrl => f.write_str(INVALID_URL_TEXT),
            Outcome::OtherError(detail) => write!(f, "{OTHER_ERROR_PREFIX}{detail}"),
        }
    }
}

/// Tag of an [`Outcome`], used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeKind {
    /// See [`Outcome::Found`].
    Found,
    /// See [`Outcome::NotFound`].
    NotFound,
    /// See [`Outcome::DomainNotFound`].
    DomainNotFound,
    /// See [`Outcome::NoTxtRecords`].
    NoTxtRecords,
    /// See [`Outcome::Timeout`].
    Timeout,
    /// See [`Outcome::InvalidUrl`].
    InvalidUrl,
    /// See [`Outcome::OtherError`].
    OtherError,
}

impl OutcomeKind {
    /// Returns `true` for kinds that represent a failed lookup.
    pub fn is_error(self) -> bool {
        !matches!(self, OutcomeKind::Found | OutcomeKind::NotFound)
    }

    /// Short human-readable label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            OutcomeKind::Found => "SPF record found",
            OutcomeKind::NotFound => "no SPF record",
            OutcomeKind::DomainNotFound => "domain not found",
            OutcomeKind::NoTxtRecords => "no TXT records",
            OutcomeKind::Timeout => "DNS timeout",
            OutcomeKind::InvalidUrl => "invalid URL",
            OutcomeKind::OtherError => "other error",
        }
    }
}
