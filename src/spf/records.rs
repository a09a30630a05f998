//! TXT record text handling and SPF extraction.

use crate::config::{SPF_JOIN_SEPARATOR, SPF_PREFIX};

/// Reassembles the character-strings of one TXT record into a single string.
///
/// A TXT record is one or more length-prefixed character-strings on the wire.
/// They form one logical value, so they are concatenated without a separator.
/// Invalid UTF-8 is replaced rather than dropping the record.
pub fn join_txt_segments<S: AsRef<[u8]>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|bytes| String::from_utf8_lossy(bytes.as_ref()))
        .collect()
}

/// Strips one pair of enclosing double quotes, if present.
pub fn strip_enclosing_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Extracts every SPF record from a TXT record set.
///
/// Records are unquoted and kept if they start with `v=spf1`. More than one
/// SPF record violates RFC 7208 but happens in practice; all of them are
/// joined with `"; "` in the order returned by the resolver.
///
/// Returns `None` when no record qualifies.
pub fn extract_spf_records(txt_records: &[String]) -> Option<String> {
    let spf: Vec<&str> = txt_records
        .iter()
        .map(|txt| strip_enclosing_quotes(txt))
        .filter(|txt| txt.starts_with(SPF_PREFIX))
        .collect();

    if spf.is_empty() {
        None
    } else {
        Some(spf.join(SPF_JOIN_SEPARATOR))
    }
}
