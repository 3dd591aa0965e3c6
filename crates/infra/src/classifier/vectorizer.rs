//! TF-IDF text vectorizer
//!
//! Turns email text into dense feature vectors: lowercase word tokens of at
//! least two word characters, unigrams plus bigrams, vocabulary capped by
//! corpus term frequency, smoothed IDF, L2-normalized output. Deterministic
//! for a fixed fitted vocabulary, so the transform side is safe to share
//! read-only across requests.

use std::collections::{BTreeMap, BTreeSet};

use mailsift_domain::{MailsiftError, Result};
use serde::{Deserialize, Serialize};

/// Fitted TF-IDF vectorizer. Fit once on the training corpus, then
/// transform arbitrary texts into vectors of fixed dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> column index, assigned in lexicographic term order.
    vocabulary: BTreeMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit a vocabulary and IDF table on `documents`.
    ///
    /// Vocabulary is capped at `max_features` terms, keeping the most
    /// frequent terms across the corpus (ties broken lexicographically).
    ///
    /// # Errors
    /// Returns `MailsiftError::Training` when the corpus produces no terms.
    pub fn fit(documents: &[String], max_features: usize) -> Result<Self> {
        let mut term_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut doc_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let terms = ngrams(doc);
            let mut seen: BTreeSet<&str> = BTreeSet::new();
            for term in &terms {
                *term_counts.entry(term.clone()).or_insert(0) += 1;
                if seen.insert(term) {
                    *doc_frequency.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        if term_counts.is_empty() {
            return Err(MailsiftError::Training(
                "training corpus produced an empty vocabulary".to_string(),
            ));
        }

        // Keep the most frequent terms; BTreeMap iteration makes the
        // frequency tie-break lexicographic and the result deterministic.
        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let mut kept: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort();

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(kept.len());
        for (index, term) in kept.into_iter().enumerate() {
            let df = doc_frequency.get(&term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Transform one text into a dense, L2-normalized TF-IDF vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];

        for term in ngrams(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                vector[index] += self.idf[index];
            }
        }

        let norm: f64 = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }

    /// Number of feature columns produced by `transform`.
    pub fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Lowercase word tokens of at least two word characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(|token| token.to_lowercase())
        .collect()
}

/// Unigrams plus bigrams (bigram terms are space-joined token pairs).
fn ngrams(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut terms = tokens.clone();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}
