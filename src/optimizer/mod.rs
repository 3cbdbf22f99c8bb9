//! Fitting algorithm for multinomial logistic regression
//!
//! Full-batch gradient descent on the softmax cross-entropy objective with L2
//! regularization. The iteration count is bounded; reaching the bound without
//! meeting the convergence tolerance is reported as a warning, not a failure,
//! and the parameters fitted so far are still returned.

use crate::core::{LogRegError, Prediction, Result, Sample, TrainerConfig};
use log::{debug, warn};

/// Numerically stable softmax over a logit vector
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Fitted parameters of a multinomial logistic regression model
///
/// Weights are stored row-major: the weight vector for class `c` occupies
/// `weights[c * n_features .. (c + 1) * n_features]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedParameters {
    pub weights: Vec<f64>,
    pub bias: Vec<f64>,
    pub n_features: usize,
    pub n_classes: usize,
}

impl FittedParameters {
    /// Construct from raw parameter vectors, checking dimensions
    pub fn new(
        weights: Vec<f64>,
        bias: Vec<f64>,
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self> {
        if n_features == 0 || n_classes == 0 {
            return Err(LogRegError::InvalidParameter(
                "feature and class counts must be non-zero".to_string(),
            ));
        }
        if weights.len() != n_classes * n_features {
            return Err(LogRegError::InvalidParameter(format!(
                "weights length {} does not match {n_classes} classes x {n_features} features",
                weights.len()
            )));
        }
        if bias.len() != n_classes {
            return Err(LogRegError::InvalidParameter(format!(
                "bias length {} does not match {n_classes} classes",
                bias.len()
            )));
        }
        Ok(Self {
            weights,
            bias,
            n_features,
            n_classes,
        })
    }

    /// Compute per-class logits for a feature vector
    fn logits(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features {
            return Err(LogRegError::DimensionMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        let mut logits = vec![0.0; self.n_classes];
        for (c, logit) in logits.iter_mut().enumerate() {
            let row = &self.weights[c * self.n_features..(c + 1) * self.n_features];
            *logit = self.bias[c]
                + row
                    .iter()
                    .zip(features.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>();
        }
        Ok(logits)
    }

    /// Probability distribution over classes for a feature vector
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        Ok(softmax(&self.logits(features)?))
    }

    /// Predict the class index and probabilities for a feature vector
    pub fn predict(&self, features: &[f64]) -> Result<Prediction> {
        let probabilities = self.predict_proba(features)?;
        let class = argmax(&probabilities);
        Ok(Prediction::new(class, probabilities))
    }
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best = i;
        }
    }
    best
}

/// Gradient-descent optimizer for the softmax cross-entropy objective
pub struct SoftmaxOptimizer {
    config: TrainerConfig,
}

impl SoftmaxOptimizer {
    /// Create an optimizer with the given configuration
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Fit model parameters on the given samples.
    ///
    /// `n_classes` fixes the output dimensionality; every sample label must be
    /// a valid class index and every sample must have the same feature count.
    pub fn fit(&self, samples: &[Sample], n_classes: usize) -> Result<FittedParameters> {
        if samples.is_empty() {
            return Err(LogRegError::EmptyDataset);
        }
        if n_classes == 0 {
            return Err(LogRegError::InvalidParameter(
                "class count must be non-zero".to_string(),
            ));
        }
        let n_features = samples[0].dim();
        if n_features == 0 {
            return Err(LogRegError::InvalidDataset(
                "samples must have at least one feature".to_string(),
            ));
        }
        for sample in samples {
            if sample.dim() != n_features {
                return Err(LogRegError::DimensionMismatch {
                    expected: n_features,
                    actual: sample.dim(),
                });
            }
            if sample.label >= n_classes {
                return Err(LogRegError::InvalidLabel {
                    label: sample.label,
                    n_classes,
                });
            }
        }

        let lr = self.config.learning_rate;
        let l2 = self.config.l2.max(0.0);
        let inv_n = 1.0 / samples.len() as f64;

        let mut params = FittedParameters::new(
            vec![0.0; n_classes * n_features],
            vec![0.0; n_classes],
            n_features,
            n_classes,
        )?;

        let mut converged = false;
        let mut iterations = 0;

        for iter in 0..self.config.max_iterations {
            let mut grad_w = vec![0.0; n_classes * n_features];
            let mut grad_b = vec![0.0; n_classes];

            for sample in samples {
                let probs = params.predict_proba(&sample.features)?;
                for c in 0..n_classes {
                    let diff = probs[c] - if c == sample.label { 1.0 } else { 0.0 };
                    let base = c * n_features;
                    for (i, &x) in sample.features.iter().enumerate() {
                        grad_w[base + i] += diff * x;
                    }
                    grad_b[c] += diff;
                }
            }

            let mut grad_norm: f64 = 0.0;
            for (idx, g) in grad_w.iter_mut().enumerate() {
                *g = *g * inv_n + l2 * params.weights[idx];
                grad_norm = grad_norm.max(g.abs());
            }
            for g in grad_b.iter_mut() {
                *g *= inv_n;
                grad_norm = grad_norm.max(g.abs());
            }

            iterations = iter + 1;
            if grad_norm <= self.config.tolerance {
                converged = true;
                break;
            }

            for (w, g) in params.weights.iter_mut().zip(grad_w.iter()) {
                *w -= lr * g;
            }
            for (b, g) in params.bias.iter_mut().zip(grad_b.iter()) {
                *b -= lr * g;
            }
        }

        if converged {
            debug!("gradient descent converged after {iterations} iterations");
        } else {
            warn!(
                "gradient descent did not converge within {} iterations; keeping current parameters",
                self.config.max_iterations
            );
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn toy_samples() -> Vec<Sample> {
        // Two well-separated clusters in one dimension
        vec![
            Sample::new(vec![-2.0], 0),
            Sample::new(vec![-1.5], 0),
            Sample::new(vec![-1.8], 0),
            Sample::new(vec![1.5], 1),
            Sample::new(vec![1.8], 1),
            Sample::new(vec![2.0], 1),
        ]
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        assert_eq!(probs.len(), 3);
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_large_logits_stable() {
        let probs = softmax(&[1000.0, 1001.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_separable_data() {
        let optimizer = SoftmaxOptimizer::new(TrainerConfig::default());
        let params = optimizer.fit(&toy_samples(), 2).expect("fit should succeed");

        let neg = params.predict(&[-1.7]).unwrap();
        let pos = params.predict(&[1.7]).unwrap();
        assert_eq!(neg.class, 0);
        assert_eq!(pos.class, 1);
    }

    #[test]
    fn test_predict_is_argmax() {
        let optimizer = SoftmaxOptimizer::new(TrainerConfig::default());
        let params = optimizer.fit(&toy_samples(), 2).unwrap();

        let pred = params.predict(&[0.3]).unwrap();
        let max_idx = argmax(&pred.probabilities);
        assert_eq!(pred.class, max_idx);
    }

    #[test]
    fn test_fit_rejects_empty_input() {
        let optimizer = SoftmaxOptimizer::new(TrainerConfig::default());
        assert!(matches!(
            optimizer.fit(&[], 2),
            Err(LogRegError::EmptyDataset)
        ));
    }

    #[test]
    fn test_fit_rejects_out_of_range_label() {
        let optimizer = SoftmaxOptimizer::new(TrainerConfig::default());
        let samples = vec![Sample::new(vec![1.0], 0), Sample::new(vec![2.0], 5)];
        assert!(matches!(
            optimizer.fit(&samples, 2),
            Err(LogRegError::InvalidLabel { label: 5, .. })
        ));
    }

    #[test]
    fn test_fit_rejects_ragged_features() {
        let optimizer = SoftmaxOptimizer::new(TrainerConfig::default());
        let samples = vec![
            Sample::new(vec![1.0, 2.0], 0),
            Sample::new(vec![1.0], 1),
        ];
        assert!(matches!(
            optimizer.fit(&samples, 2),
            Err(LogRegError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_predict_proba_dimension_check() {
        let params = FittedParameters::new(vec![0.0; 8], vec![0.0; 2], 4, 2).unwrap();
        assert!(matches!(
            params.predict_proba(&[1.0, 2.0, 3.0]),
            Err(LogRegError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_fitted_parameters_shape_validation() {
        assert!(FittedParameters::new(vec![0.0; 7], vec![0.0; 2], 4, 2).is_err());
        assert!(FittedParameters::new(vec![0.0; 8], vec![0.0; 3], 4, 2).is_err());
        assert!(FittedParameters::new(vec![], vec![], 0, 0).is_err());
    }
}
