//! Trainer CLI
//!
//! Fits a multinomial logistic regression model on a random 70/30 split of
//! the embedded iris dataset, prints held-out accuracy, and writes the model
//! artifact to `model.json` in the working directory.

use clap::Parser;
use env_logger::Env;
use irislr::api::LogisticRegression;
use irislr::core::{Result, TrainerConfig};
use irislr::data::IrisDataset;
use irislr::persistence::{SerializableModel, DEFAULT_MODEL_PATH};
use log::{error, info};
use std::process;

/// Held-out fraction of the dataset
const TEST_FRACTION: f64 = 0.3;

#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train an iris classifier and save it to model.json")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Seed for the train/test shuffle (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

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
    let dataset = IrisDataset::load()?;
    info!("Loaded {} samples", dataset.len());

    let (train, test) = dataset.train_test_split(TEST_FRACTION, cli.seed)?;
    info!(
        "Split into {} training and {} test samples",
        train.len(),
        test.len()
    );

    let config = TrainerConfig::default();
    let model = LogisticRegression::new()
        .with_learning_rate(config.learning_rate)
        .with_l2(config.l2)
        .with_max_iterations(config.max_iterations)
        .with_tolerance(config.tolerance)
        .train(&train)?;

    let accuracy = model.evaluate(&test);
    println!("Accuracy: {accuracy:.2}");

    let serializable = SerializableModel::from_trained_model(&model, &config);
    serializable.save_to_file(DEFAULT_MODEL_PATH)?;
    info!("Model saved to {DEFAULT_MODEL_PATH}");

    Ok(())
}
