//! # Mailsift Server
//!
//! HTTP surface of the email masking and classification service.
//!
//! This crate contains:
//! - The axum router and request handlers
//! - Bootstrap wiring (models, classifier, pipeline, shared state)
//! - The `mailsift-train` offline training binary

pub mod bootstrap;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
