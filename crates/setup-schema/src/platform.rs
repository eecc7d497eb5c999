//! Mapping from a runner platform to the release asset built for it.
//!
//! Release assets follow `tweers-<os-label>-<arch-label>.<ext>`. The labels are
//! not derivable from [`Os`]/[`Arch`] (macOS ships as `macos`, and its ARM
//! build as `arm64`), so the mapping is an explicit table.

use crate::arch::{Arch, Os};

/// Every platform a release publishes a binary for, with the asset filename.
pub const SUPPORTED_ASSETS: [(Os, Arch, &str); 5] = [
    (Os::Linux, Arch::X86_64, "tweers-linux-x86_64.tar.gz"),
    (Os::Linux, Arch::Aarch64, "tweers-linux-aarch64.tar.gz"),
    (Os::Darwin, Arch::X86_64, "tweers-macos-x86_64.tar.gz"),
    (Os::Darwin, Arch::Aarch64, "tweers-macos-arm64.tar.gz"),
    (Os::Windows, Arch::X86_64, "tweers-windows-x86_64.zip"),
];

/// The platform has no entry in [`SUPPORTED_ASSETS`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported platform: {0}")]
pub struct UnsupportedPlatform(pub PlatformKey);

/// An (operating system, architecture) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformKey {
    /// Operating system.
    pub os: Os,
    /// CPU architecture.
    pub arch: Arch,
}

impl PlatformKey {
    /// Create a platform key from explicit values.
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// The platform this process is running on.
    pub fn current() -> Self {
        Self::new(Os::current(), Arch::current())
    }

    /// Use the given values where present and the running platform otherwise.
    pub fn resolve(os: Option<Os>, arch: Option<Arch>) -> Self {
        Self::new(
            os.unwrap_or_else(Os::current),
            arch.unwrap_or_else(Arch::current),
        )
    }

    /// Asset filename for this platform.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPlatform`] when no release asset is built for it.
    pub fn asset_name(&self) -> Result<&'static str, UnsupportedPlatform> {
        select_asset(self)
    }
}

impl std::fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

/// Look up the asset filename for a platform.
///
/// Matching is exact on both components; there is no fallback between
/// architectures.
///
/// # Errors
///
/// Returns [`UnsupportedPlatform`] when the pair is not in [`SUPPORTED_ASSETS`].
pub fn select_asset(platform: &PlatformKey) -> Result<&'static str, UnsupportedPlatform> {
    SUPPORTED_ASSETS
        .iter()
        .find(|(os, arch, _)| *os == platform.os && *arch == platform.arch)
        .map(|(_, _, name)| *name)
        .ok_or_else(|| UnsupportedPlatform(platform.clone()))
}
