//! The Fisher iris dataset, embedded at compile time
//!
//! The classic 150-row table: 4 continuous features per row, one of 3 species
//! labels. The table doubles as the label-name lookup for the predictor, so
//! both binaries resolve class indices against the same ordering.

use crate::core::{LogRegError, Result, Sample};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of features per sample
pub const N_FEATURES: usize = 4;

/// Number of classes
pub const N_CLASSES: usize = 3;

/// Canonical class names, indexed by class label
pub const TARGET_NAMES: [&str; N_CLASSES] = ["setosa", "versicolor", "virginica"];

const IRIS_CSV: &str = include_str!("iris.csv");

/// The iris dataset, parsed from the embedded CSV
#[derive(Debug, Clone)]
pub struct IrisDataset {
    samples: Vec<Sample>,
}

impl IrisDataset {
    /// Load the embedded dataset
    pub fn load() -> Result<Self> {
        let mut samples = Vec::new();

        for (line_no, line) in IRIS_CSV.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != N_FEATURES + 1 {
                return Err(LogRegError::InvalidDataset(format!(
                    "line {}: expected {} fields, got {}",
                    line_no + 1,
                    N_FEATURES + 1,
                    fields.len()
                )));
            }

            let mut features = Vec::with_capacity(N_FEATURES);
            for field in &fields[..N_FEATURES] {
                let value: f64 = field.parse().map_err(|_| {
                    LogRegError::ParseError(format!(
                        "line {}: invalid feature value '{field}'",
                        line_no + 1
                    ))
                })?;
                features.push(value);
            }

            let species = fields[N_FEATURES];
            let label = TARGET_NAMES
                .iter()
                .position(|&name| name == species)
                .ok_or_else(|| {
                    LogRegError::ParseError(format!(
                        "line {}: unknown species '{species}'",
                        line_no + 1
                    ))
                })?;

            samples.push(Sample::new(features, label));
        }

        if samples.is_empty() {
            return Err(LogRegError::EmptyDataset);
        }

        Ok(Self { samples })
    }

    /// Number of samples in the dataset
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in dataset order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Class name for a label index
    pub fn target_name(&self, label: usize) -> Option<&'static str> {
        TARGET_NAMES.get(label).copied()
    }

    /// Partition the dataset into shuffled train and test subsets.
    ///
    /// `test_fraction` is the held-out share, e.g. 0.3 for a 70/30 split.
    /// With `seed: None` the shuffle is entropy-seeded and differs per run;
    /// passing a seed makes the partition reproducible.
    pub fn train_test_split(
        &self,
        test_fraction: f64,
        seed: Option<u64>,
    ) -> Result<(Vec<Sample>, Vec<Sample>)> {
        if !(0.0..1.0).contains(&test_fraction) || test_fraction == 0.0 {
            return Err(LogRegError::InvalidParameter(format!(
                "test fraction must be in (0, 1), got: {test_fraction}"
            )));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices: Vec<usize> = (0..self.samples.len()).collect();
        indices.shuffle(&mut rng);

        let n_test = ((self.samples.len() as f64) * test_fraction).round() as usize;
        let (test_idx, train_idx) = indices.split_at(n_test);

        let train = train_idx.iter().map(|&i| self.samples[i].clone()).collect();
        let test = test_idx.iter().map(|&i| self.samples[i].clone()).collect();
        Ok((train, test))
    }
}
