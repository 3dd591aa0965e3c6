//! Application state shared across handlers

use std::sync::Arc;

use mailsift_core::EmailPipeline;

/// Shared request-handling state. The pipeline holds only read-only,
/// pre-built models, so cloning the state is an `Arc` bump and no handler
/// ever takes a lock.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<EmailPipeline>,
}
