//! setup-tweers - install the TweeRS CLI on CI runners

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use setup_cli::setup::setup;
use setup_cli::{Cli, Runner};

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries workflow commands, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = Arc::new(Runner::from_env());

    match setup(&cli, &runner).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "setup-tweers failed");
            runner.set_failed(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
