//! Command-line front end for the skin lesion classification service.
//!
//! Classifies each image given on the command line, one request at a time.

mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use skinscan_client::{ClientConfig, PredictionClient, PredictionSession};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: skinscan <image>...");
        return ExitCode::from(2);
    }

    match run(&paths).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every image produced a verdict.
async fn run(paths: &[PathBuf]) -> anyhow::Result<bool> {
    let config = ClientConfig::from_env();
    info!(
        endpoint = %config.endpoint_url,
        threshold = config.malignancy_threshold,
        "Starting skinscan"
    );

    let client = PredictionClient::new(&config).context("Failed to create prediction client")?;
    let session = PredictionSession::new(client);

    let mut all_ok = true;
    for path in paths {
        println!("{}", render::heading(path));

        match session.submit_path(path).await {
            Ok(outcome) => {
                all_ok &= !outcome.is_failure();
                println!("{}", render::outcome_line(&outcome));
            }
            Err(e) => {
                all_ok = false;
                println!("{}", render::error_line(&e));
            }
        }
    }

    Ok(all_ok)
}
