//! Model serialization and persistence
//!
//! The trainer writes exactly one artifact: a JSON file holding the fitted
//! per-class weights and biases plus the feature/class counts. The predictor
//! reads it back and reconstructs a working model. There is no schema version
//! check on load, no lock on the file, and concurrent writers are not
//! coordinated; the last writer wins.

use crate::api::TrainedModel;
use crate::core::{LogRegError, Result, TrainerConfig};
use crate::optimizer::FittedParameters;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Fixed relative path of the model artifact
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// Serializable representation of a trained model
#[derive(Serialize, Deserialize)]
pub struct SerializableModel {
    /// Flattened per-class weight vectors (row-major, one row per class)
    pub weights: Vec<f64>,
    /// Per-class bias terms
    pub bias: Vec<f64>,
    /// Number of input features
    pub n_features: usize,
    /// Number of output classes
    pub n_classes: usize,
    /// Model metadata
    pub metadata: ModelMetadata,
}

/// Model metadata for tracking
#[derive(Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Library version used to create the model
    pub library_version: String,
    /// Training parameters used
    pub training_params: TrainingParams,
    /// Creation timestamp
    pub created_at: String,
}

/// Training parameters for reference
#[derive(Serialize, Deserialize)]
pub struct TrainingParams {
    pub learning_rate: f64,
    pub l2: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl From<&TrainerConfig> for TrainingParams {
    fn from(config: &TrainerConfig) -> Self {
        Self {
            learning_rate: config.learning_rate,
            l2: config.l2,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

impl SerializableModel {
    /// Create a serializable model from a trained model
    pub fn from_trained_model(model: &TrainedModel, config: &TrainerConfig) -> Self {
        let params = model.parameters();
        Self {
            weights: params.weights.clone(),
            bias: params.bias.clone(),
            n_features: params.n_features,
            n_classes: params.n_classes,
            metadata: ModelMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                training_params: config.into(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save model to file, overwriting any existing artifact
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(LogRegError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| LogRegError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load model from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(LogRegError::IoError)?;
        let reader = BufReader::new(file);
        let model = serde_json::from_reader(reader)
            .map_err(|e| LogRegError::SerializationError(e.to_string()))?;
        Ok(model)
    }

    /// Reconstruct a trained model from the stored parameters
    pub fn to_trained_model(&self) -> Result<TrainedModel> {
        let params = FittedParameters::new(
            self.weights.clone(),
            self.bias.clone(),
            self.n_features,
            self.n_classes,
        )?;
        Ok(TrainedModel::from_parameters(params))
    }

    /// Print model summary
    pub fn print_summary(&self) {
        println!("=== Model Summary ===");
        println!("Features: {}", self.n_features);
        println!("Classes: {}", self.n_classes);
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
        println!("Training Parameters:");
        println!(
            "  Learning rate: {}",
            self.metadata.training_params.learning_rate
        );
        println!("  L2: {}", self.metadata.training_params.l2);
        println!(
            "  Max Iterations: {}",
            self.metadata.training_params.max_iterations
        );
        println!("  Tolerance: {}", self.metadata.training_params.tolerance);
    }
}
