//! Domain-specific errors for the acquisition pipeline

use setup_schema::UnsupportedPlatform;
use thiserror::Error;

use crate::cache::CacheError;
use crate::io::download::DownloadError;
use crate::io::extract::ExtractError;
use crate::resolver::ResolveError;

/// Every way an invocation can fail. All of them are terminal.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error(transparent)]
    UnsupportedPlatform(#[from] UnsupportedPlatform),

    #[error(transparent)]
    ReleaseNotFound(#[from] ResolveError),

    #[error("Asset not found: {asset} in release {tag}")]
    AssetNotFound { asset: String, tag: String },

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error("Failed to extract archive: {0}")]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
