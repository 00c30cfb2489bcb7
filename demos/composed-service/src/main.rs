//! # Composed Service Demo
//!
//! Requests each configured URL through a stub client, folds the responses
//! of every chain into one, and prints either the composed body or the
//! first error.
//!
//! ```bash
//! cargo run --bin composed-service -- --config tandem.toml
//! RUST_LOG=tandem_core=trace cargo run --bin composed-service
//! ```

mod config;
mod http;
mod service;

use anyhow::Result;
use clap::Parser;
use config::DemoConfig;
use http::StubClient;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chain stubbed HTTP services into one composed response
#[derive(Parser)]
#[command(name = "composed-service", version, about)]
struct Cli {
    /// TOML file with `secret_url` and `[[chains]]`; built-in chains when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_stderr_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tandem_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_stderr_tracing();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    tracing::info!(chains = config.chains.len(), "config loaded");

    let client = StubClient::new(config.secret_url.as_str());
    for chain_config in &config.chains {
        let chain = service::build_chain(&client, chain_config)?;
        println!("{}", service::render_outcome(chain.evaluate()));
    }

    Ok(())
}
