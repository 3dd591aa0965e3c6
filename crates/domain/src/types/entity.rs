//! Entity types produced by PII detection
//!
//! Spans are **character** offsets into the original text, not byte offsets.
//! This matches the wire contract where `position` is a `[start, end)` pair
//! that consumers index into the email body character by character.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open character-offset interval `[start, end)` into a text.
///
/// Serialized on the wire as a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", try_from = "[usize; 2]")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. Callers are expected to uphold `start < end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self { start, end }
    }

    /// Number of characters covered by this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if this span shares at least one character position with `other`.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

impl From<Span> for [usize; 2] {
    fn from(span: Span) -> Self {
        [span.start, span.end]
    }
}

impl TryFrom<[usize; 2]> for Span {
    type Error = String;

    fn try_from(pair: [usize; 2]) -> std::result::Result<Self, Self::Error> {
        if pair[0] >= pair[1] {
            return Err(format!("invalid span [{}, {}): start must be < end", pair[0], pair[1]));
        }
        Ok(Self { start: pair[0], end: pair[1] })
    }
}

/// Closed set of PII classifications recognized by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Email,
    PhoneNumber,
    Dob,
    AadharNum,
    CreditDebitNo,
    CvvNo,
    ExpiryNo,
    FullName,
}

impl EntityKind {
    /// Wire/tag name of this kind, e.g. `credit_debit_no`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Email => "email",
            EntityKind::PhoneNumber => "phone_number",
            EntityKind::Dob => "dob",
            EntityKind::AadharNum => "aadhar_num",
            EntityKind::CreditDebitNo => "credit_debit_no",
            EntityKind::CvvNo => "cvv_no",
            EntityKind::ExpiryNo => "expiry_no",
            EntityKind::FullName => "full_name",
        }
    }

    /// Bracketed placeholder substituted for a masked entity, e.g. `[email]`.
    pub fn mask_tag(&self) -> String {
        format!("[{}]", self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected PII occurrence.
///
/// Created by the pattern matcher or the name extractor, consumed by the
/// reconciler during masking; never mutated once created.
///
/// Wire format:
/// `{ "position": [start, end], "classification": "email", "entity": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMatch {
    #[serde(rename = "position")]
    pub span: Span,
    pub classification: EntityKind,
    #[serde(rename = "entity")]
    pub value: String,
}

impl EntityMatch {
    pub fn new(span: Span, classification: EntityKind, value: impl Into<String>) -> Self {
        Self { span, classification, value: value.into() }
    }
}

/// Languages supported by the name extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    German,
}

/// Characters whose presence anywhere in a text selects the German model.
const GERMAN_MARKERS: &str = "äöüÄÖÜß";

impl Language {
    /// Coarse whole-text language heuristic: German iff any German-specific
    /// accented or ess-tsett character occurs, English otherwise.
    pub fn of_text(text: &str) -> Self {
        if text.chars().any(|c| GERMAN_MARKERS.contains(c)) {
            Language::German
        } else {
            Language::English
        }
    }
}
