//! setup-tweers - install the TweeRS CLI on CI runners
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Resolves a TweeRS release, reuses or fills the runner tool cache, and
//! hands the install directory back to the workflow.
//!
//! # Runner contract
//!
//! ```text
//! INPUT_VERSION      → --version   (default: latest)
//! INPUT_TOKEN        → --token     (optional, sent as a bearer token)
//! RUNNER_TOOL_CACHE  → cache root
//! RUNNER_TEMP        → scratch space
//! GITHUB_OUTPUT      ← version=<resolved version>
//! GITHUB_PATH        ← <install directory>
//! ```

pub mod runner;
pub mod setup;

pub use runner::Runner;
pub use setup_core::USER_AGENT;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "setup-tweers")]
#[command(
    author,
    version = env!("SETUP_VERSION"),
    about = "Install the TweeRS CLI into the runner tool cache",
    disable_version_flag = true
)]
pub struct Cli {
    /// TweeRS version to install, or `latest`
    #[arg(long, env = "INPUT_VERSION", default_value = "latest")]
    pub version: String,

    /// Token for the release API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the detected operating system (linux, darwin, windows)
    #[arg(long)]
    pub os: Option<String>,

    /// Override the detected architecture (x86_64, aarch64)
    #[arg(long)]
    pub arch: Option<String>,

    /// Tool cache root [default: $RUNNER_TOOL_CACHE or the user cache dir]
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Scratch directory for downloads [default: $RUNNER_TEMP or the system temp dir]
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Base URL of the release API
    #[arg(long, env = "GITHUB_API_URL", default_value = setup_core::resolver::DEFAULT_API_URL)]
    pub api_url: String,

    /// Repository publishing the releases
    #[arg(long, default_value = setup_schema::REPO)]
    pub repo: String,
}

impl Cli {
    /// The token, if one was given and is not blank.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
