//! Rust implementation of multinomial logistic regression for the iris dataset
//!
//! Pairs a trainer and a predictor around one persisted model artifact: the
//! trainer fits on a random 70/30 split of the embedded 150-row table and
//! writes the fitted parameters to disk; the predictor reloads them to
//! classify a single 4-feature sample.

pub mod api;
pub mod core;
pub mod data;
pub mod optimizer;
pub mod persistence;

// Re-export main types for convenience
pub use crate::api::{LogisticRegression, TrainedModel};
pub use crate::core::error::*;
pub use crate::core::types::*;
pub use crate::data::{IrisDataset, N_CLASSES, N_FEATURES, TARGET_NAMES};
pub use crate::optimizer::{softmax, FittedParameters, SoftmaxOptimizer};
pub use crate::persistence::{SerializableModel, DEFAULT_MODEL_PATH};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
