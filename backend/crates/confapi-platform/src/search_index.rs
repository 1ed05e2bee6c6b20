use confapi_core::SearchIndex;

use std::sync::atomic::{AtomicU64, Ordering};

use log::info;

/// Stand-in index that records rebuild requests
#[derive(Debug, Default)]
pub struct LocalSearchIndex {
    reindex_count: AtomicU64,
}

impl LocalSearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reindex_count(&self) -> u64 {
        self.reindex_count.load(Ordering::SeqCst)
    }
}

impl SearchIndex for LocalSearchIndex {
    fn reindex(&self) {
        let count = self.reindex_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Search index rebuild requested (#{})", count);
    }
}
