//! Classifier training harness
//!
//! Loads the labeled email CSV (falling back to a small built-in bilingual
//! example set when the file is unusable), fits the vectorizer and forest
//! on a seeded 80/20 split, and reports holdout accuracy through `tracing`.

use std::collections::BTreeSet;
use std::path::Path;

use mailsift_domain::{MailsiftError, ModelConfig, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::csv;
use super::forest::{ForestParams, RandomForest};
use super::vectorizer::TfidfVectorizer;

/// A fitted vectorizer/forest pair plus the label table mapping forest
/// output indices back to category names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    pub vectorizer: TfidfVectorizer,
    pub forest: RandomForest,
    pub labels: Vec<String>,
}

impl TrainedModel {
    /// Predict the category name for `text`.
    pub fn predict(&self, text: &str) -> Result<String> {
        let features = self.vectorizer.transform(text);
        let index = self.forest.predict(&features);
        self.labels
            .get(index)
            .cloned()
            .ok_or_else(|| MailsiftError::Model(format!("predicted label index {index} out of range")))
    }
}

/// Load `(text, label)` training samples from `path`.
///
/// Accepts `email_text`/`email_type` headers, or the legacy `email`/`type`
/// pair. Any failure (missing file, malformed CSV, unknown headers, no
/// usable rows) falls back to [`builtin_examples`] so training always has
/// data to work with.
pub fn load_training_data(path: impl AsRef<Path>) -> Vec<(String, String)> {
    let path = path.as_ref();
    match load_csv(path) {
        Ok(samples) => {
            info!(path = %path.display(), samples = samples.len(), "loaded training data");
            samples
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "training data unusable, using built-in examples");
            builtin_examples()
        }
    }
}

fn load_csv(path: &Path) -> Result<Vec<(String, String)>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| MailsiftError::Training(format!("cannot read {}: {}", path.display(), e)))?;
    let rows = csv::parse(&contents)?;

    let mut rows = rows.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| MailsiftError::Training("CSV has no header row".to_string()))?;

    let text_col = column(&header, &["email_text", "email"])?;
    let label_col = column(&header, &["email_type", "type"])?;

    let samples: Vec<(String, String)> = rows
        .filter_map(|row| {
            let text = row.get(text_col)?.trim().to_string();
            let label = row.get(label_col)?.trim().to_string();
            (!text.is_empty() && !label.is_empty()).then_some((text, label))
        })
        .collect();

    if samples.is_empty() {
        return Err(MailsiftError::Training("CSV contains no usable rows".to_string()));
    }
    Ok(samples)
}

fn column(header: &[String], names: &[&str]) -> Result<usize> {
    header
        .iter()
        .position(|h| names.contains(&h.trim()))
        .ok_or_else(|| MailsiftError::Training(format!("CSV is missing a {:?} column", names)))
}

/// Fixed bilingual fallback set, enough to bootstrap a working model when
/// no CSV is available.
pub fn builtin_examples() -> Vec<(String, String)> {
    [
        (
            "Die Datenanalyse-Plattform brach unerwartet ab, da die Speicheroberfläche zu gering war",
            "Incident",
        ),
        (
            "I am contacting you to request information on data analytics tools that can be utilized with the Eclipse IDE for enhancing investment optimization.",
            "Request",
        ),
        (
            "The integration stopped working unexpectedly, causing synchronization errors between our platforms.",
            "Problem",
        ),
        ("I am seeking suggestions for tools that can aid in making data-driven decisions.", "Request"),
        ("Ein Medien-Daten-Sperrverhalten trat aufgrund unerlaubten Zugriffes auf.", "Incident"),
        (
            "Inquiring about best practices for securing medical data on a 2-in-1 Convertible Laptop.",
            "Request",
        ),
    ]
    .into_iter()
    .map(|(text, label)| (text.to_string(), label.to_string()))
    .collect()
}

/// Train a model on `samples` with a seeded 80/20 holdout split.
///
/// # Errors
/// Returns `MailsiftError::Training` for an empty sample set or a corpus
/// that yields no vocabulary.
pub fn train(samples: &[(String, String)], config: &ModelConfig) -> Result<TrainedModel> {
    if samples.is_empty() {
        return Err(MailsiftError::Training("no training samples".to_string()));
    }

    // Sorted label table so indices are stable across runs.
    let labels: Vec<String> =
        samples.iter().map(|(_, l)| l.clone()).collect::<BTreeSet<_>>().into_iter().collect();
    let label_index = |name: &str| labels.iter().position(|l| l == name);

    let mut indices: Vec<usize> = (0..samples.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);

    let mut n_test = ((samples.len() as f64) * 0.2).ceil() as usize;
    if n_test >= samples.len() {
        n_test = samples.len() - 1;
    }
    let (test_idx, train_idx) = indices.split_at(n_test);

    info!(
        samples = samples.len(),
        categories = labels.len(),
        train = train_idx.len(),
        test = test_idx.len(),
        "training email classifier"
    );

    let train_texts: Vec<String> = train_idx.iter().map(|&i| samples[i].0.clone()).collect();
    let vectorizer = TfidfVectorizer::fit(&train_texts, config.max_features)?;

    let features: Vec<Vec<f64>> = train_texts.iter().map(|t| vectorizer.transform(t)).collect();
    let targets: Vec<usize> = train_idx
        .iter()
        .map(|&i| {
            label_index(&samples[i].1).ok_or_else(|| {
                MailsiftError::Training(format!("unknown label {:?}", samples[i].1))
            })
        })
        .collect::<Result<_>>()?;

    let params = ForestParams { trees: config.trees, seed: config.seed, ..ForestParams::default() };
    let forest = RandomForest::fit(&features, &targets, labels.len(), &params)?;

    let model = TrainedModel { vectorizer, forest, labels };

    if !test_idx.is_empty() {
        let correct = test_idx
            .iter()
            .filter(|&&i| model.predict(&samples[i].0).is_ok_and(|p| p == samples[i].1))
            .count();
        let accuracy = correct as f64 / test_idx.len() as f64;
        info!(accuracy, "holdout evaluation complete");
    }

    Ok(model)
}
