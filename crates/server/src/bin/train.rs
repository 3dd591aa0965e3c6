//! Offline training harness
//!
//! Trains the email classifier from a labeled CSV and writes the model to
//! the configured model directory, so the service can start with a warm
//! model instead of training on first request.
//!
//! Usage: `mailsift-train [--csv <path>] [--model-dir <path>]`

use anyhow::bail;
use mailsift_infra::classifier::{trainer, ModelStore};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = mailsift_infra::config::load()?;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => match args.next() {
                Some(path) => config.model.training_data = path,
                None => bail!("--csv requires a path"),
            },
            "--model-dir" => match args.next() {
                Some(path) => config.model.model_dir = path,
                None => bail!("--model-dir requires a path"),
            },
            other => bail!("unknown argument: {other}"),
        }
    }

    let samples = trainer::load_training_data(&config.model.training_data);
    let model = trainer::train(&samples, &config.model)?;
    ModelStore::new(&config.model.model_dir).save(&model)?;

    tracing::info!(categories = model.labels.len(), "training complete");
    Ok(())
}
