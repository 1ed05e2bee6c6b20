use confapi_core::{ContentService, Space};

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use log::info;

/// Spaces kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryContentService {
    spaces: RwLock<BTreeMap<String, Space>>,
}

impl InMemoryContentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `space` unless its key is taken; returns whether it was added
    pub fn create_space(&self, space: Space) -> bool {
        let mut spaces = self.spaces.write().unwrap_or_else(PoisonError::into_inner);
        if spaces.contains_key(&space.key) {
            return false;
        }
        info!("Created space '{}' ({})", space.key, space.name);
        spaces.insert(space.key.clone(), space);
        true
    }

    pub fn remove_space(&self, key: &str) -> Option<Space> {
        self.spaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// All spaces ordered by key
    pub fn list_spaces(&self) -> Vec<Space> {
        self.spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}

impl ContentService for InMemoryContentService {
    fn find_space_by_key(&self, key: &str) -> Option<Space> {
        self.spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
