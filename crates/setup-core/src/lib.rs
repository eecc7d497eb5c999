pub mod acquire;
pub mod cache;
pub mod error;
pub mod io;
pub mod paths;
pub mod resolver;

pub mod reporter;

pub use acquire::{Acquirer, Installed};
pub use cache::{RunnerToolCache, ToolCache};
pub use error::AcquireError;
pub use io::download::Fetcher;
pub use reporter::{NullReporter, Reporter};
pub use resolver::ReleaseResolver;

/// User Agent string sent with every request
pub const USER_AGENT: &str = concat!("setup-tweers/", env!("CARGO_PKG_VERSION"));
