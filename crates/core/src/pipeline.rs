//! Email processing pipeline
//!
//! Orchestrates the three masking stages and the classifier into the single
//! `process` operation exposed to the service layer. Stateless apart from
//! the shared read-only models; every request runs independently with no
//! retries and no partial results.

use std::sync::Arc;

use mailsift_domain::{EmailResult, MailsiftError, Result};
use tracing::debug;

use crate::classification::ports::CategoryClassifier;
use crate::masking::names::NameExtractor;
use crate::masking::{patterns, reconciler};

/// End-to-end email processor: mask PII, then classify the masked text.
#[derive(Clone)]
pub struct EmailPipeline {
    names: NameExtractor,
    classifier: Arc<dyn CategoryClassifier>,
}

impl EmailPipeline {
    pub fn new(names: NameExtractor, classifier: Arc<dyn CategoryClassifier>) -> Self {
        Self { names, classifier }
    }

    /// Process one email body.
    ///
    /// Empty input is rejected before any pipeline stage runs. Any fault in
    /// extraction, masking, or classification propagates unmodified; the
    /// service layer owns the single catch-all boundary.
    pub fn process(&self, email_body: &str) -> Result<EmailResult> {
        if email_body.is_empty() {
            return Err(MailsiftError::InvalidInput("Email body cannot be empty".to_string()));
        }

        let structured = patterns::find_structured_entities(email_body);
        let names = self.names.find_person_names(email_body);
        debug!(
            structured = structured.len(),
            names = names.len(),
            "extracted PII candidates"
        );

        let (masked_email, entities) = reconciler::mask(email_body, structured, names);
        let category = self.classifier.predict(&masked_email)?;

        Ok(EmailResult {
            input_email_body: email_body.to_string(),
            list_of_masked_entities: entities,
            masked_email,
            category_of_the_email: category,
        })
    }
}
