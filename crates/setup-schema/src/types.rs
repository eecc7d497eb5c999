//! Release wire format and request types.

use serde::{Deserialize, Serialize};

/// A published release as returned by the release-hosting API.
///
/// Only the fields the installer needs are decoded; everything else in the
/// response body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version-control tag of the release (e.g. `tweers-cli-v1.0.5`).
    pub tag_name: String,

    /// Downloadable files attached to the release, in API order.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Release {
    /// Find an asset by exact filename.
    pub fn find_asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// Names of all attached assets.
    pub fn asset_names(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.name.as_str()).collect()
    }
}

/// One downloadable file attached to a [`Release`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Filename (e.g. `tweers-linux-x86_64.tar.gz`).
    pub name: String,

    /// Public download URL.
    pub browser_download_url: String,
}

/// Archive format of a release asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveKind {
    /// Zip archive (`.zip`).
    Zip,
    /// Gzip-compressed tar archive (`.tar.gz`).
    #[serde(rename = "tar.gz")]
    TarGz,
}

impl ArchiveKind {
    /// Pick the archive format from an asset filename.
    ///
    /// Only the suffix is consulted: `.zip` is a zip archive and everything
    /// else is treated as a gzip-compressed tarball.
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    pub fn from_filename(name: &str) -> Self {
        if name.ends_with(".zip") {
            Self::Zip
        } else {
            Self::TarGz
        }
    }
}

/// The version a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    /// The newest published release.
    Latest,
    /// A specific version, as typed by the caller (e.g. `1.0.5`).
    Exact(String),
}

impl VersionSpec {
    /// Interpret a raw input value. Empty input means [`VersionSpec::Latest`].
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" | "latest" => Self::Latest,
            version => Self::Exact(version.to_string()),
        }
    }
}

impl std::fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Exact(version) => write!(f, "{version}"),
        }
    }
}
