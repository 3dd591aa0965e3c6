//! PII detection and masking domain
//!
//! Three stages: structured pattern matching, person-name extraction, and
//! span reconciliation/masking. All offsets handed between stages are
//! character offsets into the original text.

pub mod names;
pub mod patterns;
pub mod ports;
pub mod reconciler;

pub use names::NameExtractor;
pub use ports::NameModel;

/// Convert a byte range produced by the regex engine into a character span.
///
/// `byte_start` must lie on a character boundary of `text`.
pub(crate) fn char_span(text: &str, byte_start: usize, byte_end: usize) -> (usize, usize) {
    let start = text[..byte_start].chars().count();
    let len = text[byte_start..byte_end].chars().count();
    (start, start + len)
}
