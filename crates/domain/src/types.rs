//! Domain data types shared across the masking and classification pipeline

pub mod email;
pub mod entity;

pub use email::*;
pub use entity::*;
