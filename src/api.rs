//! High-level API for training and using the classifier
//!
//! This module provides a user-friendly interface for the common workflow:
//! fit a model on labeled samples, evaluate held-out accuracy, and run
//! single-sample inference.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use irislr::api::LogisticRegression;
//! use irislr::data::IrisDataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = IrisDataset::load()?;
//! let (train, test) = dataset.train_test_split(0.3, Some(42))?;
//!
//! let model = LogisticRegression::new().train(&train)?;
//! println!("Accuracy: {:.2}", model.evaluate(&test));
//! # Ok(())
//! # }
//! ```

use crate::core::{Prediction, Result, Sample, TrainerConfig};
use crate::data::N_CLASSES;
use crate::optimizer::{FittedParameters, SoftmaxOptimizer};

/// Multinomial logistic regression trainer with builder-style configuration
pub struct LogisticRegression {
    config: TrainerConfig,
    n_classes: usize,
}

impl LogisticRegression {
    /// Create a trainer with default parameters for the iris problem
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            n_classes: N_CLASSES,
        }
    }

    /// Set the gradient descent learning rate
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Set the L2 regularization strength
    pub fn with_l2(mut self, l2: f64) -> Self {
        self.config.l2 = l2;
        self
    }

    /// Set the maximum number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance on the gradient infinity norm
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the number of output classes
    pub fn with_n_classes(mut self, n_classes: usize) -> Self {
        self.n_classes = n_classes;
        self
    }

    /// Fit a model on the given samples
    pub fn train(self, samples: &[Sample]) -> Result<TrainedModel> {
        let optimizer = SoftmaxOptimizer::new(self.config);
        let params = optimizer.fit(samples, self.n_classes)?;
        Ok(TrainedModel { params })
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained model with a single-sample prediction interface
pub struct TrainedModel {
    params: FittedParameters,
}

impl TrainedModel {
    /// Wrap fitted parameters, e.g. after deserializing an artifact
    pub fn from_parameters(params: FittedParameters) -> Self {
        Self { params }
    }

    /// Predict the class index and probabilities for a feature vector
    pub fn predict(&self, features: &[f64]) -> Result<Prediction> {
        self.params.predict(features)
    }

    /// Probability distribution over classes for a feature vector
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.params.predict_proba(features)
    }

    /// Predict multiple samples
    pub fn predict_batch(&self, samples: &[Sample]) -> Result<Vec<Prediction>> {
        samples
            .iter()
            .map(|sample| self.predict(&sample.features))
            .collect()
    }

    /// Fraction of samples whose predicted class matches the label
    pub fn evaluate(&self, samples: &[Sample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let correct = samples
            .iter()
            .filter(|sample| {
                self.predict(&sample.features)
                    .map(|pred| pred.class == sample.label)
                    .unwrap_or(false)
            })
            .count();
        correct as f64 / samples.len() as f64
    }

    /// Access the fitted parameters
    pub fn parameters(&self) -> &FittedParameters {
        &self.params
    }
}
