/// Receives progress reports from a running export or import
pub trait ProgressListener: Send + Sync {
    /// `percent` is clamped to 0..=100 by implementations
    fn update(&self, percent: u8, message: &str);
}

/// Listener for inline runs where nobody observes progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressListener for NoopProgress {
    fn update(&self, _percent: u8, _message: &str) {}
}
