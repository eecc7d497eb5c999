//! Tool cache: installed directories keyed by (tool, version).
//!
//! [`RunnerToolCache`] uses the directory layout of hosted CI runners so that
//! entries written here are found by other setup actions and vice versa:
//!
//! ```text
//! $RUNNER_TOOL_CACHE/
//! └── tweers/
//!     └── 1.0.5/
//!         ├── x64/               # contents of the extracted archive
//!         └── x64.complete       # written last; an entry without it does not exist
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use crate::Reporter;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to write tool cache entry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} into the tool cache: {source}")]
    Copy {
        from: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },
}

/// Durable mapping from (tool, version) to an installed directory.
///
/// Versions are exact keys, not ranges.
pub trait ToolCache: Send + Sync {
    /// Directory of a previously completed entry.
    fn lookup(&self, tool: &str, version: &str) -> Option<PathBuf>;

    /// Copy the contents of `source` into the cache and return the cached
    /// directory. Inserting the same key again replaces the earlier entry.
    fn insert(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf, CacheError>;
}

/// [`ToolCache`] stored in the runner tool-cache layout.
#[derive(Clone)]
pub struct RunnerToolCache {
    root: PathBuf,
    arch: String,
    reporter: Option<std::sync::Arc<dyn Reporter>>,
}

impl std::fmt::Debug for RunnerToolCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunnerToolCache")
            .field("root", &self.root)
            .field("arch", &self.arch)
            .finish_non_exhaustive()
    }
}

impl RunnerToolCache {
    /// Create a cache at `root` holding entries for `arch`, a runner label
    /// such as [`Arch::runner_label`](setup_schema::Arch::runner_label).
    pub fn new(root: impl Into<PathBuf>, arch: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            arch: arch.into(),
            reporter: None,
        }
    }

    /// Report replaced entries through `reporter`.
    pub fn with_reporter(mut self, reporter: std::sync::Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Directory holding the entry for `tool` at `version`.
    pub fn entry_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.root
            .join(tool)
            .join(cache_version(version))
            .join(&self.arch)
    }

    fn marker_path(&self, tool: &str, version: &str) -> PathBuf {
        self.root
            .join(tool)
            .join(cache_version(version))
            .join(format!("{}.complete", self.arch))
    }
}

impl ToolCache for RunnerToolCache {
    fn lookup(&self, tool: &str, version: &str) -> Option<PathBuf> {
        let dir = self.entry_dir(tool, version);
        if dir.is_dir() && self.marker_path(tool, version).is_file() {
            trace!(tool, version, path = %dir.display(), "Cache hit");
            Some(dir)
        } else {
            trace!(tool, version, "Cache miss");
            None
        }
    }

    fn insert(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf, CacheError> {
        let dest = self.entry_dir(tool, version);
        let marker = self.marker_path(tool, version);
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| CacheError::Io { path, source }
        };

        if marker.exists() {
            std::fs::remove_file(&marker).map_err(io_err(&marker))?;
        }
        if dest.exists() {
            if let Some(reporter) = &self.reporter {
                reporter.warning(&format!("Replacing existing {tool} {version} in tool cache"));
            }
            std::fs::remove_dir_all(&dest).map_err(io_err(&dest))?;
        }
        std::fs::create_dir_all(&dest).map_err(io_err(&dest))?;

        let mut options = fs_extra::dir::CopyOptions::new();
        options.content_only = true;
        options.overwrite = true;
        fs_extra::dir::copy(source, &dest, &options).map_err(|source_err| CacheError::Copy {
            from: source.to_path_buf(),
            source: source_err,
        })?;

        std::fs::write(&marker, b"").map_err(io_err(&marker))?;
        debug!(tool, version, path = %dest.display(), "Stored in tool cache");
        Ok(dest)
    }
}

/// Directory name used for `version`: its semver rendering when it parses.
pub fn cache_version(version: &str) -> String {
    let version = version.trim();
    semver::Version::parse(version).map_or_else(|_| version.to_string(), |v| v.to_string())
}
