//! Operating system and CPU architecture of a runner.
//!
//! Both types accept the spellings used by the different ecosystems that feed
//! into a runner (`darwin`/`macos`, `win32`, `x64`/`amd64`, `arm64`), and keep
//! unknown labels around so error messages can name them.

use std::convert::Infallible;

/// Operating system a binary is built for.
///
/// # Example
///
/// ```
/// use setup_schema::Os;
///
/// let os: Os = "macos".parse().unwrap();
/// assert_eq!(os, Os::Darwin);
/// assert_eq!(os.as_str(), "darwin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux-based operating systems.
    Linux,
    /// Apple macOS.
    Darwin,
    /// Microsoft Windows.
    Windows,
    /// Any other operating system, stored lowercased.
    Other(String),
}

impl Os {
    /// Get the operating system this process is running on.
    pub fn current() -> Self {
        Self::from_label(std::env::consts::OS)
    }

    /// Interpret an operating system label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "linux" => Self::Linux,
            "darwin" | "macos" | "osx" => Self::Darwin,
            "windows" | "win32" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Os {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// CPU architecture a binary is built for.
///
/// The canonical names follow the Rust convention (`x86_64`, `aarch64`), which
/// matches `std::env::consts::ARCH`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arch {
    /// Intel/AMD 64-bit.
    X86_64,
    /// ARM 64-bit (Apple Silicon, Graviton, ...).
    Aarch64,
    /// Any other architecture, stored lowercased.
    Other(String),
}

impl Arch {
    /// Get the current architecture
    pub fn current() -> Self {
        Self::from_label(std::env::consts::ARCH)
    }

    /// Interpret an architecture label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "x86_64" | "amd64" | "x64" => Self::X86_64,
            "aarch64" | "arm64" => Self::Aarch64,
            other => Self::Other(other.to_string()),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::Other(label) => label,
        }
    }

    /// Label used by the runner tool cache (`x64`, `arm64`), shared with
    /// toolkit-based setup actions.
    pub fn runner_label(&self) -> &str {
        match self {
            Self::X86_64 => "x64",
            Self::Aarch64 => "arm64",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Arch {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}
