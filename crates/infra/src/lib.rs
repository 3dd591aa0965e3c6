//! # Mailsift Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Lexicon-based NER models backing the `NameModel` port
//! - TF-IDF vectorizer, random forest, and the training harness
//! - Model persistence (JSON on disk) and the `CategoryClassifier` adapter
//! - Configuration loading (environment and file)
//!
//! ## Architecture
//! - Implements traits defined in `mailsift-core`
//! - Depends on `mailsift-domain` and `mailsift-core`
//! - Contains all "impure" code (filesystem, environment, RNG)

pub mod classifier;
pub mod config;
pub mod nlp;

// Re-export commonly used items
pub use classifier::{EmailClassifier, ModelStore, TrainedModel};
pub use nlp::LexiconNameModel;
