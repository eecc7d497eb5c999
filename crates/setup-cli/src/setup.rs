//! The `setup-tweers` flow: wire the pipeline from CLI input and publish the result.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use setup_core::{
    Acquirer, Fetcher, Installed, ReleaseResolver, Reporter, RunnerToolCache, paths,
};
use setup_schema::{Arch, Os, PlatformKey, VersionSpec};
use tracing::debug;

use crate::{Cli, Runner};

/// Acquire the requested version and publish it to the runner.
pub async fn setup(cli: &Cli, runner: &Arc<Runner>) -> Result<Installed> {
    let platform = PlatformKey::resolve(
        cli.os.as_deref().map(Os::from_label),
        cli.arch.as_deref().map(Arch::from_label),
    );
    debug!(%platform, version = env!("SETUP_VERSION"), "Starting setup-tweers");

    let client = Client::builder()
        .user_agent(crate::USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let cache_root = cli.cache_dir.clone().unwrap_or_else(paths::tool_cache_root);
    let cache = RunnerToolCache::new(cache_root, platform.arch.runner_label())
        .with_reporter(Arc::clone(runner) as Arc<dyn Reporter>);

    let resolver = ReleaseResolver::new(client.clone())
        .with_api_url(cli.api_url.as_str())
        .with_repo(cli.repo.as_str());

    let acquirer = Acquirer::new(
        resolver,
        Fetcher::new(client),
        Arc::new(cache),
        Arc::clone(runner) as Arc<dyn Reporter>,
        platform,
    )
    .with_temp_root(cli.temp_dir.clone().unwrap_or_else(paths::temp_root));

    let installed = acquirer
        .acquire(&VersionSpec::parse(&cli.version), cli.token())
        .await?;

    runner
        .set_output("version", &installed.version)
        .context("Failed to set the version output")?;
    runner
        .add_path(&installed.path)
        .context("Failed to add the install directory to PATH")?;

    Ok(installed)
}
