/// Archive produced by a finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResult {
    /// Path of the archive relative to the public base URL
    pub relative_path: String,
}

impl ArchiveResult {
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }
}
