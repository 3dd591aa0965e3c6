//! Port interfaces for person-name recognition
//!
//! The name extractor needs a per-language NER model. Inference is a pure,
//! read-only computation over the input text, so the port is synchronous and
//! safe to call concurrently from any number of requests.

/// Trait for language-specific person-name recognition models.
///
/// Implementations return the surface text of every person entity found,
/// in document order. Span recovery against the original text is the name
/// extractor's job, not the model's.
pub trait NameModel: Send + Sync {
    /// Surface texts of person entities detected in `text`.
    fn person_names(&self, text: &str) -> Vec<String>;
}
