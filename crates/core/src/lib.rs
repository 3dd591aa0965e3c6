//! # Mailsift Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - PII detection and masking (pattern matcher, name extractor, reconciler)
//! - Port/adapter interfaces (traits) for NER models and the classifier
//! - The email processing pipeline
//!
//! ## Architecture Principles
//! - Only depends on `mailsift-domain`
//! - No HTTP, filesystem, or model-training code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod classification;
pub mod masking;
pub mod pipeline;

// Re-export specific items to avoid ambiguity
pub use classification::ports::CategoryClassifier;
pub use masking::names::NameExtractor;
pub use masking::patterns::find_structured_entities;
pub use masking::ports::NameModel;
pub use masking::reconciler::mask;
pub use pipeline::EmailPipeline;
