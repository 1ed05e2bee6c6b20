use crate::Space;

/// Read access to the platform's spaces
pub trait ContentService: Send + Sync {
    fn find_space_by_key(&self, key: &str) -> Option<Space>;
}
