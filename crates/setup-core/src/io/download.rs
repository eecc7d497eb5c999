//! Async download and extraction of release assets with progress reporting.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::{Client, StatusCode};
use setup_schema::ArchiveKind;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::Reporter;
use crate::io::extract::{self, ExtractError, ExtractedFile};
use crate::paths::filename_from_url;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Failed to download {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to download {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads archives and unpacks them.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Stream `url` into `dest_dir`, named after the last URL segment.
    ///
    /// Returns the path of the downloaded file. A partially written file is
    /// removed before an error is returned.
    pub async fn fetch<R: Reporter + ?Sized>(
        &self,
        url: &str,
        dest_dir: &Path,
        reporter: &R,
    ) -> Result<PathBuf, DownloadError> {
        let name = match filename_from_url(url) {
            "" => "download",
            name => name,
        };
        let dest = dest_dir.join(name);
        debug!(%url, dest = %dest.display(), "Downloading asset");

        let http_err = |source: reqwest::Error| DownloadError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
            .send()
            .await
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let total = response.content_length();
        reporter.downloading(name, 0, total);

        tokio::fs::create_dir_all(dest_dir).await?;
        let mut file = File::create(&dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        let written: Result<(), DownloadError> = async {
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(http_err)?;
                file.write_all(&chunk).await?;
                downloaded += chunk.len() as u64;
                reporter.downloading(name, downloaded, total);
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        if let Err(e) = written {
            drop(file);
            tokio::fs::remove_file(&dest).await.ok();
            return Err(e);
        }

        debug!(bytes = downloaded, dest = %dest.display(), "Download complete");
        Ok(dest)
    }

    /// Unpack `archive` into `dest_dir` on the blocking pool.
    pub async fn extract<R: Reporter + ?Sized>(
        &self,
        archive: &Path,
        kind: ArchiveKind,
        dest_dir: &Path,
        reporter: &R,
    ) -> Result<Vec<ExtractedFile>, ExtractError> {
        let name = archive
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        reporter.extracting(&name);

        let archive = archive.to_path_buf();
        let dest = dest_dir.to_path_buf();
        let files = tokio::task::spawn_blocking(move || extract::extract(&archive, kind, &dest))
            .await
            .map_err(std::io::Error::other)??;

        debug!(files = files.len(), dest = %dest_dir.display(), "Extraction complete");
        Ok(files)
    }
}
