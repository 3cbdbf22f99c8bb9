//! Predictor CLI
//!
//! Loads the model artifact written by the trainer and classifies a single
//! 4-feature sample: either the four positional arguments, or a known setosa
//! example when none are given. Prints the input, the predicted species, and
//! the per-class probability vector.

use clap::Parser;
use env_logger::Env;
use irislr::core::{LogRegError, Result};
use irislr::data::{N_FEATURES, TARGET_NAMES};
use irislr::persistence::{SerializableModel, DEFAULT_MODEL_PATH};
use log::{error, info};
use std::process;

/// Feature vector used when no arguments are given (a known setosa sample)
const DEFAULT_SAMPLE: [f64; N_FEATURES] = [5.1, 3.5, 1.4, 0.2];

#[derive(Parser)]
#[command(name = "predict")]
#[command(about = "Classify an iris sample using a trained model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Feature values: sepal length, sepal width, petal length, petal width
    features: Vec<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let sample: Vec<f64> = if cli.features.is_empty() {
        DEFAULT_SAMPLE.to_vec()
    } else if cli.features.len() == N_FEATURES {
        cli.features.clone()
    } else {
        // Wrong arity fails before the artifact is touched; the input is
        // never truncated or padded into a prediction.
        return Err(LogRegError::DimensionMismatch {
            expected: N_FEATURES,
            actual: cli.features.len(),
        });
    };

    info!("Loading model from {DEFAULT_MODEL_PATH}");
    let model = SerializableModel::load_from_file(DEFAULT_MODEL_PATH)?.to_trained_model()?;

    let prediction = model.predict(&sample)?;
    let name = TARGET_NAMES
        .get(prediction.class)
        .copied()
        .ok_or_else(|| {
            LogRegError::InvalidParameter(format!(
                "predicted class {} has no label name",
                prediction.class
            ))
        })?;

    println!("Input: {sample:?}");
    println!("Prediction: {name} (class {})", prediction.class);
    println!("Probabilities: {}", format_probabilities(&prediction.probabilities));

    Ok(())
}

/// Format probabilities rounded to 3 decimal places, e.g. `[0.982, 0.018, 0.000]`
fn format_probabilities(probabilities: &[f64]) -> String {
    let entries: Vec<String> = probabilities.iter().map(|p| format!("{p:.3}")).collect();
    format!("[{}]", entries.join(", "))
}
