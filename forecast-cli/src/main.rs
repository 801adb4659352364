//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Interactive prompts (city, unit preference)
//! - Pipeline orchestration
//! - Human-friendly output formatting

use clap::Parser;
use forecast_core::{Config, OpenWeatherProvider, resolve_api_key};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod pipeline;
mod prompt;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli::Cli {} = cli::Cli::parse();

    if let Err(err) = run().await {
        error!("pipeline aborted: {err:#}");
        eprintln!("An error has occurred - {err:#}");
        eprintln!("\tExiting program....");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    // A missing key is not validated here; the first request fails with the
    // provider's auth rejection instead.
    let api_key = resolve_api_key(std::env::var(forecast_core::API_KEY_ENV_VAR).ok(), &config);

    let provider = OpenWeatherProvider::new(api_key);

    let report = pipeline::run(&provider, prompt::prompt_city, prompt::prompt_units_line).await?;
    print!("{report}");

    Ok(())
}
