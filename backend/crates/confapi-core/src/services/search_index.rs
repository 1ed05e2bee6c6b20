pub trait SearchIndex: Send + Sync {
    /// Rebuild the full-text index
    fn reindex(&self);
}
