//! Reporter trait for dependency injection
//!
//! This trait allows the pipeline to report progress and status without
//! being coupled to a specific runner or terminal implementation.

pub trait Reporter: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Updates the progress of a download.
    fn downloading(&self, asset: &str, current: u64, total: Option<u64>);

    /// Indicates an archive is being unpacked.
    fn extracting(&self, asset: &str);

    /// Log a success message.
    fn success(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
    fn downloading(&self, asset: &str, current: u64, total: Option<u64>) {
        (**self).downloading(asset, current, total);
    }
    fn extracting(&self, asset: &str) {
        (**self).extracting(asset);
    }
    fn success(&self, msg: &str) {
        (**self).success(msg);
    }
}

/// A no-op reporter for silent operations (e.g., testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn downloading(&self, _: &str, _: u64, _: Option<u64>) {}
    fn extracting(&self, _: &str) {}
    fn success(&self, _: &str) {}
}
