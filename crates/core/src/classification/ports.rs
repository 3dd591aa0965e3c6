//! Port interfaces for email category classification

use mailsift_domain::Result;

/// Trait for predicting the support category of a masked email.
///
/// Implementations hold a pre-fitted vectorizer/model pair loaded once at
/// startup; inference is a pure computation and must be deterministic for
/// a fixed trained model, so the trait is safe for concurrent use.
pub trait CategoryClassifier: Send + Sync {
    /// Predict the category label for `masked_text`.
    fn predict(&self, masked_text: &str) -> Result<String>;
}
