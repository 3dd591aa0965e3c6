//! Model persistence
//!
//! Saves and loads the fitted vectorizer/forest pair as a single JSON file
//! under the configured model directory, and implements the load-else-train
//! startup contract: a missing file triggers synchronous training followed
//! by a save, a present file is loaded as-is.

use std::path::{Path, PathBuf};

use mailsift_domain::{MailsiftError, ModelConfig, Result};
use tracing::info;

use super::trainer::{self, TrainedModel};

const MODEL_FILE: &str = "email_classifier.json";

/// Filesystem store for the trained classifier.
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(model_dir: impl AsRef<Path>) -> Self {
        Self { path: model_dir.as_ref().join(MODEL_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist `model` as JSON, creating the model directory if needed.
    ///
    /// # Errors
    /// Returns `MailsiftError::Model` on serialization or I/O failure.
    pub fn save(&self, model: &TrainedModel) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MailsiftError::Model(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string(model)
            .map_err(|e| MailsiftError::Model(format!("cannot serialize model: {}", e)))?;
        std::fs::write(&self.path, json).map_err(|e| {
            MailsiftError::Model(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        info!(path = %self.path.display(), "saved trained model");
        Ok(())
    }

    /// Load a previously saved model.
    ///
    /// # Errors
    /// Returns `MailsiftError::Model` when the file is missing or corrupt.
    pub fn load(&self) -> Result<TrainedModel> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            MailsiftError::Model(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            MailsiftError::Model(format!("cannot parse {}: {}", self.path.display(), e))
        })
    }

    /// Load the persisted model, or train and save a fresh one.
    ///
    /// Training reads `config.training_data` (built-in fallback examples if
    /// that file is unusable) and blocks until the model is ready.
    pub fn load_or_train(&self, config: &ModelConfig) -> Result<TrainedModel> {
        if self.exists() {
            let model = self.load()?;
            info!(path = %self.path.display(), "loaded pre-trained model");
            return Ok(model);
        }

        info!("no pre-trained model found, training a new one");
        let samples = trainer::load_training_data(&config.training_data);
        let model = trainer::train(&samples, config)?;
        self.save(&model)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ModelConfig {
        ModelConfig { trees: 10, ..ModelConfig::default() }
    }

    #[test]
    fn save_then_load_round_trips_predictions() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let model = trainer::train(&trainer::builtin_examples(), &config()).unwrap();
        store.save(&model).unwrap();
        assert!(store.exists());

        let restored = store.load().unwrap();
        let text = "Requesting information about data analytics tools";
        assert_eq!(model.predict(text).unwrap(), restored.predict(text).unwrap());
    }

    #[test]
    fn load_or_train_creates_and_reuses_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        // training_data does not exist, so the built-in examples are used
        let cfg = ModelConfig {
            training_data: dir.path().join("missing.csv").display().to_string(),
            ..config()
        };

        let first = store.load_or_train(&cfg).unwrap();
        assert!(store.exists());
        let second = store.load_or_train(&cfg).unwrap();
        assert_eq!(first.labels, second.labels);
    }

    #[test]
    fn loading_a_missing_file_is_a_model_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let err = store.load().unwrap_err();
        assert!(matches!(err, MailsiftError::Model(_)));
    }

    #[test]
    fn loading_a_corrupt_file_is_a_model_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        std::fs::write(store.path(), "not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, MailsiftError::Model(_)));
    }
}
