//! Integration tests for the irislr library
//!
//! These tests verify the end-to-end train -> persist -> load -> predict
//! contract across modules.

use approx::assert_relative_eq;
use irislr::api::LogisticRegression;
use irislr::core::TrainerConfig;
use irislr::data::{IrisDataset, N_CLASSES, TARGET_NAMES};
use irislr::persistence::SerializableModel;
use tempfile::NamedTempFile;

/// Test complete workflow: load -> split -> train -> evaluate
#[test]
fn test_complete_training_workflow() {
    let dataset = IrisDataset::load().expect("embedded dataset should load");
    assert_eq!(dataset.len(), 150);

    let (train, test) = dataset
        .train_test_split(0.3, Some(42))
        .expect("split should succeed");
    assert_eq!(train.len() + test.len(), 150);

    let model = LogisticRegression::new()
        .train(&train)
        .expect("training should succeed");

    let accuracy = model.evaluate(&test);
    assert!(
        accuracy >= 0.9,
        "held-out accuracy should be at least 0.90, got: {accuracy:.2}"
    );
}

/// Accuracy must hold across different random partitions
#[test]
fn test_accuracy_across_seeds() {
    let dataset = IrisDataset::load().unwrap();

    for seed in [1, 7, 42, 1234] {
        let (train, test) = dataset.train_test_split(0.3, Some(seed)).unwrap();
        let model = LogisticRegression::new().train(&train).unwrap();
        let accuracy = model.evaluate(&test);
        assert!(
            accuracy >= 0.9,
            "seed {seed}: accuracy {accuracy:.2} below threshold"
        );
    }
}

/// Probability vectors are well formed for arbitrary valid inputs
#[test]
fn test_probability_invariants() {
    let dataset = IrisDataset::load().unwrap();
    let (train, test) = dataset.train_test_split(0.3, Some(42)).unwrap();
    let model = LogisticRegression::new().train(&train).unwrap();

    for sample in &test {
        let pred = model.predict(&sample.features).unwrap();
        assert_eq!(pred.probabilities.len(), N_CLASSES);
        assert!(pred.probabilities.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert_relative_eq!(pred.probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-6);

        // Predicted class is the argmax
        let max = pred
            .probabilities
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(pred.probabilities[pred.class], max);
    }
}

/// The canonical setosa sample resolves to class 0 with a dominant probability
#[test]
fn test_default_sample_scenario() {
    let dataset = IrisDataset::load().unwrap();
    let (train, _) = dataset.train_test_split(0.3, Some(42)).unwrap();
    let model = LogisticRegression::new().train(&train).unwrap();

    let pred = model.predict(&[5.1, 3.5, 1.4, 0.2]).unwrap();
    assert_eq!(pred.class, 0);
    assert_eq!(TARGET_NAMES[pred.class], "setosa");
    assert!(pred.probabilities[0] > pred.probabilities[1]);
    assert!(pred.probabilities[0] > pred.probabilities[2]);
}

/// Serialize -> deserialize -> predict matches the pre-serialization model
#[test]
fn test_persistence_round_trip() {
    let dataset = IrisDataset::load().unwrap();
    let (train, test) = dataset.train_test_split(0.3, Some(42)).unwrap();
    let config = TrainerConfig::default();
    let model = LogisticRegression::new().train(&train).unwrap();

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    SerializableModel::from_trained_model(&model, &config)
        .save_to_file(temp_file.path())
        .expect("save should succeed");

    let reloaded = SerializableModel::load_from_file(temp_file.path())
        .expect("load should succeed")
        .to_trained_model()
        .expect("reconstruction should succeed");

    for sample in &test {
        let before = model.predict(&sample.features).unwrap();
        let after = reloaded.predict(&sample.features).unwrap();
        assert_eq!(before.class, after.class);
        for (p, q) in before.probabilities.iter().zip(after.probabilities.iter()) {
            assert_relative_eq!(p, q, epsilon = 1e-12);
        }
    }
}

/// Malformed inputs never silently produce a prediction
#[test]
fn test_wrong_arity_fails_visibly() {
    let dataset = IrisDataset::load().unwrap();
    let (train, _) = dataset.train_test_split(0.3, Some(42)).unwrap();
    let model = LogisticRegression::new().train(&train).unwrap();

    assert!(model.predict(&[5.1, 3.5, 1.4]).is_err());
    assert!(model.predict(&[5.1, 3.5, 1.4, 0.2, 0.9]).is_err());
    assert!(model.predict(&[]).is_err());
}
