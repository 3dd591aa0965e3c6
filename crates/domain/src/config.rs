//! Application configuration structures

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Classifier model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding the persisted classifier/vectorizer pair.
    pub model_dir: String,
    /// Training CSV with `email_text`/`email_type` columns. Missing or
    /// malformed files fall back to the built-in example set.
    pub training_data: String,
    /// Number of trees in the random forest.
    pub trees: usize,
    /// RNG seed for reproducible training.
    pub seed: u64,
    /// Vocabulary cap for the TF-IDF vectorizer.
    pub max_features: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8000 }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: ".".to_string(),
            training_data: "combined_emails_with_natural_pii.csv".to_string(),
            trees: 200,
            seed: 42,
            max_features: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.model.trees, 200);
        assert_eq!(config.model.seed, 42);
        assert_eq!(config.model.max_features, 5000);
    }
}
