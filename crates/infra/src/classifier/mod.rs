//! Email category classification adapters
//!
//! Implements the `CategoryClassifier` port with a TF-IDF + random forest
//! model trained from labeled email CSVs and persisted as JSON.

pub mod csv;
pub mod forest;
pub mod store;
pub mod trainer;
pub mod vectorizer;

pub use forest::{ForestParams, RandomForest};
pub use store::ModelStore;
pub use trainer::TrainedModel;
pub use vectorizer::TfidfVectorizer;

use mailsift_core::CategoryClassifier;
use mailsift_domain::Result;

/// `CategoryClassifier` adapter over a [`TrainedModel`].
pub struct EmailClassifier {
    model: TrainedModel,
}

impl EmailClassifier {
    pub fn new(model: TrainedModel) -> Self {
        Self { model }
    }
}

impl CategoryClassifier for EmailClassifier {
    fn predict(&self, masked_text: &str) -> Result<String> {
        self.model.predict(masked_text)
    }
}
