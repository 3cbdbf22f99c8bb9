//! Core types for the logistic regression implementation

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
