//! URL normalization.
//!
//! Turns free-form input (bare domains, full URLs, stray whitespace) into the
//! authority component that gets queried for TXT records.

use std::fmt;

use crate::config::{DEFAULT_SCHEME_PREFIX, RECOGNIZED_SCHEME_PREFIXES};
use crate::error_handling::InvalidUrl;

/// Hostname extracted from raw input.
///
/// Holds the netloc exactly as written in the input (`[userinfo@]host[:port]`).
/// It is not checked for DNS validity; a malformed value simply fails to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Returns the hostname as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes raw input into a [`Hostname`].
///
/// Surrounding whitespace is trimmed and `http://` is prepended unless the
/// value already starts with `http://` or `https://` (case-sensitive). The
/// result must parse as a URL; the netloc is then taken verbatim from the
/// prefixed string, without lowercasing, IDNA conversion or default-port
/// stripping.
///
/// # Errors
///
/// Returns [`InvalidUrl`] if the prefixed value does not parse as a URL.
pub fn normalize(raw: &str) -> Result<Hostname, InvalidUrl> {
    let trimmed = raw.trim();

    let prefixed = if RECOGNIZED_SCHEME_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    let authority = netloc(&prefixed);
    if let Err(source) = url::Url::parse(&prefixed) {
        if !is_lenient_failure(source, authority) {
            return Err(InvalidUrl {
                input: trimmed.to_string(),
                source,
            });
        }
        log::debug!("Querying {authority:?} despite URL parse error: {source}");
    }

    Ok(Hostname(authority.to_string()))
}

/// Parse failures that are structurally fine as a generic URI and are left
/// for DNS to reject: an empty authority, or an all-digit port out of range.
fn is_lenient_failure(error: url::ParseError, authority: &str) -> bool {
    match error {
        url::ParseError::EmptyHost => authority.is_empty(),
        url::ParseError::InvalidPort => port_text(authority)
            .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())),
        _ => false,
    }
}

/// Text after the port colon of `[userinfo@]host[:port]`, if any.
fn port_text(authority: &str) -> Option<&str> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    let after_host = match host_port.rfind(']') {
        Some(idx) => &host_port[idx + 1..],
        None => host_port,
    };
    after_host.rsplit_once(':').map(|(_, port)| port)
}

/// Returns the authority text of a `scheme://authority[/?#...]` string.
fn netloc(prefixed: &str) -> &str {
    let after_scheme = prefixed
        .find("://")
        .map(|idx| &prefixed[idx + 3..])
        .unwrap_or(prefixed);
    let end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    &after_scheme[..end]
}
