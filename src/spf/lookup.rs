//! TXT lookups against the DNS transport.
//!
//! The [`TxtLookup`] trait is the seam between SPF classification and the
//! resolver library. [`HickoryLookup`] is the production implementation.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::records::join_txt_segments;

/// Why a TXT query produced no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Authoritative negative answer: the name does not exist.
    NxDomain,
    /// The name exists but has no TXT records.
    NoData,
    /// The query did not complete within the timeout.
    Timeout,
    /// Any other failure, with the resolver's description.
    Other(String),
}

/// Issues a single TXT query for a name.
///
/// Implementations return one string per TXT record, with the record's
/// character-strings already concatenated, in the order the resolver
/// returned them. They must not cache or retry.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    /// Queries the TXT records of `name`.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure>;
}

#[async_trait]
impl<T: TxtLookup + ?Sized> TxtLookup for Arc<T> {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure> {
        (**self).lookup_txt(name).await
    }
}

/// TXT lookups through a shared `hickory-resolver` instance.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    /// Wraps a resolver built by [`crate::initialization::init_resolver`].
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl TxtLookup for HickoryLookup {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure> {
        match self.resolver.lookup(name, RecordType::TXT).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(join_txt_segments(txt.txt_data()))
                    } else {
                        None
                    }
                })
                .collect()),
            Err(e) => {
                let failure = classify_resolve_error(&e);
                log::debug!("TXT lookup for {name} failed ({failure:?}): {e}");
                Err(failure)
            }
        }
    }
}

/// Maps a hickory resolver error onto a [`LookupFailure`].
///
/// `NoRecordsFound` carries the response code: NXDOMAIN means the name does
/// not exist, anything else (usually NOERROR with an empty answer) means
/// the name exists without TXT data.
pub fn classify_resolve_error(error: &ResolveError) -> LookupFailure {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                LookupFailure::NxDomain
            } else {
                LookupFailure::NoData
            }
        }
        ResolveErrorKind::Timeout => LookupFailure::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupFailure::Timeout
        }
        ResolveErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::TimedOut => {
            LookupFailure::Timeout
        }
        _ => LookupFailure::Other(error.to_string()),
    }
}
