//! Email category classification domain

pub mod ports;

pub use ports::CategoryClassifier;
