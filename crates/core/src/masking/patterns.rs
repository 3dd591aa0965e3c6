//! Structured PII pattern matching
//!
//! A fixed table of `(EntityKind, Regex)` pairs applied independently over
//! the input. Every non-overlapping left-to-right match of every pattern
//! produces one entity; nothing here deduplicates across patterns, so the
//! same stretch of text can legitimately yield several matches (the
//! reconciler inherits them as-is).

use mailsift_domain::{EntityKind, EntityMatch, Span};
use once_cell::sync::Lazy;
use regex::Regex;

use super::char_span;

macro_rules! pattern {
    ($kind:expr, $re:literal) => {
        ($kind, Regex::new($re).expect("built-in PII pattern should compile"))
    };
}

/// Fixed detection table. Patterns mirror the production rules for each
/// identifier family; none of them claims exclusivity over a span.
static PATTERNS: Lazy<Vec<(EntityKind, Regex)>> = Lazy::new(|| {
    vec![
        pattern!(EntityKind::Email, r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
        pattern!(
            EntityKind::PhoneNumber,
            r"(\+\d{1,3}[-.\s])?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}|\+\d{1,3}[-.\s]\d{1,4}[-.\s]\d{1,4}[-.\s]\d{1,4}"
        ),
        pattern!(EntityKind::Dob, r"\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}\b"),
        pattern!(EntityKind::AadharNum, r"\b\d{4}\s\d{4}\s\d{4}\b|\b\d{12}\b"),
        pattern!(EntityKind::CreditDebitNo, r"\b(?:\d{4}[- ]?){3}\d{4}\b|\b\d{16}\b"),
        pattern!(EntityKind::CvvNo, r"(?i)\bcvv\s*(?:number\s*)?:?\s*\d{3,4}\b"),
        pattern!(
            EntityKind::ExpiryNo,
            r"\b(0[1-9]|1[0-2])[/\-](\d{2}|\d{4})\b|\bexpiry\s*:?\s*(0[1-9]|1[0-2])[/\-](\d{2}|\d{4})\b"
        ),
    ]
});

/// Apply every structured pattern to `text`.
///
/// Returns one [`EntityMatch`] per match, spans in character offsets, in
/// pattern-table order (not text order). Absence of matches yields an empty
/// vector; there is no error path.
pub fn find_structured_entities(text: &str) -> Vec<EntityMatch> {
    let mut entities = Vec::new();

    for (kind, regex) in PATTERNS.iter() {
        for mat in regex.find_iter(text) {
            let (start, end) = char_span(text, mat.start(), mat.end());
            entities.push(EntityMatch::new(Span::new(start, end), *kind, mat.as_str()));
        }
    }

    entities
}
