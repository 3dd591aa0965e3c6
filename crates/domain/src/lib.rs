//! # Mailsift Domain
//!
//! Business domain types and models for mailsift.
//!
//! This crate contains:
//! - Entity and email result types shared across the pipeline
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other mailsift crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
