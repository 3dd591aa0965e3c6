//! Service bootstrap
//!
//! Builds every model once at startup: the two lexicon NER backends, the
//! classifier (loaded from disk or trained synchronously on first run),
//! and the pipeline that ties them together. After this returns, request
//! handling is lock-free.

use std::sync::Arc;

use mailsift_core::{EmailPipeline, NameExtractor};
use mailsift_domain::{Config, Result};
use mailsift_infra::classifier::ModelStore;
use mailsift_infra::{EmailClassifier, LexiconNameModel};
use tracing::info;

use crate::state::AppState;

/// Assemble the shared application state from `config`.
///
/// # Errors
/// Propagates model loading and training failures; the process should not
/// come up without a working classifier.
pub fn build_state(config: &Config) -> Result<AppState> {
    let extractor = NameExtractor::new(
        Arc::new(LexiconNameModel::english()),
        Arc::new(LexiconNameModel::german()),
    );

    let store = ModelStore::new(&config.model.model_dir);
    let model = store.load_or_train(&config.model)?;
    info!(categories = model.labels.len(), "classifier ready");

    let classifier = Arc::new(EmailClassifier::new(model));
    let pipeline = Arc::new(EmailPipeline::new(extractor, classifier));

    Ok(AppState { pipeline })
}
