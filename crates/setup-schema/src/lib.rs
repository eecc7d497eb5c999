//! Shared types for setup-tweers.
//!
//! Everything in this crate is pure: platform and archive descriptions, the
//! release wire format, and the tag/version conventions. Network and
//! filesystem work lives in `setup-core`.

pub mod arch;
pub mod platform;
pub mod types;
pub mod version;

// Re-exports
pub use arch::*;
pub use platform::*;
pub use types::*;

/// Name of the installed tool, used as the tool-cache key.
pub const TOOL_NAME: &str = "tweers";

/// Default GitHub repository publishing the releases.
pub const REPO: &str = "Raven-Book/TweeRS";
