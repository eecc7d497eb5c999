//! The acquisition pipeline.
//!
//! ```text
//! resolve release → normalize version → cache lookup ─ hit ─────────────┐
//!                                            └ miss → select asset        │
//!                                                     → download+extract  │
//!                                                     → cache insert ─────┴→ Installed
//! ```
//!
//! Each step is its own fallible method. Nothing durable happens before the
//! cache insert, and the insert only runs after extraction produced files, so
//! a failed invocation never leaves a cache entry behind.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use setup_schema::version::normalize;
use setup_schema::{ArchiveKind, Asset, PlatformKey, Release, TOOL_NAME, VersionSpec};
use tracing::info;

use crate::cache::ToolCache;
use crate::error::AcquireError;
use crate::io::download::{DownloadError, Fetcher};
use crate::resolver::ReleaseResolver;
use crate::{Reporter, paths};

/// Outcome of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    /// Canonical version, e.g. `1.0.5`.
    pub version: String,
    /// Directory holding the tool, suitable for the executable search path.
    pub path: PathBuf,
    /// Whether the tool cache already had this version.
    pub cache_hit: bool,
}

/// Groups the collaborators of one pipeline run.
pub struct Acquirer {
    resolver: ReleaseResolver,
    fetcher: Fetcher,
    cache: Arc<dyn ToolCache>,
    reporter: Arc<dyn Reporter>,
    platform: PlatformKey,
    temp_root: PathBuf,
}

impl fmt::Debug for Acquirer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acquirer")
            .field("resolver", &self.resolver)
            .field("platform", &self.platform)
            .field("temp_root", &self.temp_root)
            .finish_non_exhaustive()
    }
}

impl Acquirer {
    pub fn new(
        resolver: ReleaseResolver,
        fetcher: Fetcher,
        cache: Arc<dyn ToolCache>,
        reporter: Arc<dyn Reporter>,
        platform: PlatformKey,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            cache,
            reporter,
            platform,
            temp_root: paths::temp_root(),
        }
    }

    /// Put scratch directories under `temp_root` instead of the default.
    pub fn with_temp_root(mut self, temp_root: impl Into<PathBuf>) -> Self {
        self.temp_root = temp_root.into();
        self
    }

    /// Run the whole pipeline for `spec`.
    pub async fn acquire(
        &self,
        spec: &VersionSpec,
        token: Option<&str>,
    ) -> Result<Installed, AcquireError> {
        self.reporter
            .info(&format!("Fetching TweeRS release: {spec}"));
        let release = self.resolver.resolve(spec, token).await?;

        let version = normalize(&release.tag_name);
        self.reporter.info(&format!("Resolved version: {version}"));

        if let Some(path) = self.cache.lookup(TOOL_NAME, &version) {
            info!(%version, path = %path.display(), "Found in tool cache");
            self.reporter.info("Found in tool cache");
            return Ok(Installed {
                version,
                path,
                cache_hit: true,
            });
        }

        let asset = self.select_asset(&release)?;
        let path = self.install(asset, &version).await?;

        info!(%version, path = %path.display(), "Installed");
        self.reporter
            .success(&format!("TweeRS {version} installed successfully"));
        Ok(Installed {
            version,
            path,
            cache_hit: false,
        })
    }

    /// The asset of `release` built for this platform.
    pub fn select_asset<'r>(&self, release: &'r Release) -> Result<&'r Asset, AcquireError> {
        let name = self.platform.asset_name()?;
        release
            .find_asset(name)
            .ok_or_else(|| AcquireError::AssetNotFound {
                asset: name.to_string(),
                tag: release.tag_name.clone(),
            })
    }

    /// Download and unpack `asset` in a scratch directory, then cache it.
    async fn install(&self, asset: &Asset, version: &str) -> Result<PathBuf, AcquireError> {
        tokio::fs::create_dir_all(&self.temp_root)
            .await
            .map_err(DownloadError::from)?;
        let work = tempfile::Builder::new()
            .prefix("setup-tweers-")
            .tempdir_in(&self.temp_root)
            .map_err(DownloadError::from)?;

        self.reporter.info(&format!("Downloading {}", asset.name));
        let archive = self
            .fetcher
            .fetch(
                &asset.browser_download_url,
                work.path(),
                self.reporter.as_ref(),
            )
            .await?;

        let extracted = work.path().join("extract");
        self.fetcher
            .extract(
                &archive,
                ArchiveKind::from_filename(&asset.name),
                &extracted,
                self.reporter.as_ref(),
            )
            .await?;

        Ok(self.cache.insert(&extracted, TOOL_NAME, version)?)
    }
}
