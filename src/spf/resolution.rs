//! SPF resolution: one TXT query per hostname, classified into an [`Outcome`].

use super::lookup::{LookupFailure, TxtLookup};
use super::normalize::{normalize, Hostname};
use super::outcome::Outcome;
use super::records::extract_spf_records;

/// Resolves SPF records through a [`TxtLookup`].
///
/// Stateless apart from the lookup handle: every call issues a fresh query,
/// and every call produces exactly one [`Outcome`].
pub struct SpfResolver<L> {
    lookup: L,
}

impl<L: TxtLookup> SpfResolver<L> {
    /// Creates a resolver issuing its queries through `lookup`.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Looks up the SPF record of an already normalized hostname.
    pub async fn resolve(&self, host: &Hostname) -> Outcome {
        match self.lookup.lookup_txt(host.as_str()).await {
            Ok(txt_records) => classify_records(&txt_records),
            Err(failure) => classify_failure(failure),
        }
    }

    /// Normalizes raw input and looks up its SPF record.
    ///
    /// Input that does not parse as a URL yields [`Outcome::InvalidUrl`]
    /// without any DNS traffic.
    pub async fn resolve_raw(&self, raw: &str) -> Outcome {
        match normalize(raw) {
            Ok(host) => self.resolve(&host).await,
            Err(e) => {
                log::debug!("{e}");
                Outcome::InvalidUrl
            }
        }
    }
}

/// Classifies a successful TXT answer.
///
/// An answer without any record is treated like NODATA.
pub fn classify_records(txt_records: &[String]) -> Outcome {
    if txt_records.is_empty() {
        return Outcome::NoTxtRecords;
    }
    match extract_spf_records(txt_records) {
        Some(spf) => Outcome::Found(spf),
        None => Outcome::NotFound,
    }
}

/// Classifies a failed TXT query.
pub fn classify_failure(failure: LookupFailure) -> Outcome {
    match failure {
        LookupFailure::NxDomain => Outcome::DomainNotFound,
        LookupFailure::NoData => Outcome::NoTxtRecords,
        LookupFailure::Timeout => Outcome::Timeout,
        LookupFailure::Other(detail) => Outcome::OtherError(detail),
    }
}
