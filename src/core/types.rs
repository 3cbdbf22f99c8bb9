//! Core type definitions for multinomial logistic regression

/// Prediction result containing the class index and per-class probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class index (argmax of `probabilities`)
    pub class: usize,
    /// Probability distribution over all classes
    pub probabilities: Vec<f64>,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(class: usize, probabilities: Vec<f64>) -> Self {
        Self {
            class,
            probabilities,
        }
    }

    /// Probability assigned to the predicted class
    pub fn confidence(&self) -> f64 {
        self.probabilities
            .get(self.class)
            .copied()
            .unwrap_or(f64::NAN)
    }
}

/// Training sample with dense features and a class-index label
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Feature vector (dense representation)
    pub features: Vec<f64>,
    /// Class label as an index into the dataset's label-name table
    pub label: usize,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: Vec<f64>, label: usize) -> Self {
        Self { features, label }
    }

    /// Number of features
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// Configuration for the gradient-descent trainer
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Step size for gradient descent
    pub learning_rate: f64,
    /// L2 regularization strength
    pub l2: f64,
    /// Maximum number of full-batch iterations
    pub max_iterations: usize,
    /// Convergence threshold on the gradient infinity norm
    pub tolerance: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            l2: 1e-4,
            max_iterations: 1000,
            tolerance: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction() {
        let pred = Prediction::new(1, vec![0.2, 0.7, 0.1]);
        assert_eq!(pred.class, 1);
        assert_eq!(pred.confidence(), 0.7);
    }

    #[test]
    fn test_prediction_confidence_out_of_range() {
        let pred = Prediction::new(5, vec![0.5, 0.5]);
        assert!(pred.confidence().is_nan());
    }

    #[test]
    fn test_sample() {
        let sample = Sample::new(vec![5.1, 3.5, 1.4, 0.2], 0);
        assert_eq!(sample.label, 0);
        assert_eq!(sample.dim(), 4);
    }

    #[test]
    fn test_trainer_config_default() {
        let config = TrainerConfig::default();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.l2, 1e-4);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tolerance, 1e-3);
    }
}
