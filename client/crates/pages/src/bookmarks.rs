//! Bookmarks
//!
//! Saved check ids, most recent first, persisted under
//! [`StorageKeys::BOOKMARKS`]. A corrupt entry is treated as empty and
//! overwritten on the next change.

use platform::storage::{LocalStore, StorageError, StorageKeys, StorageResult, get_json, set_json};
use std::sync::Arc;

pub struct Bookmarks {
    store: Arc<dyn LocalStore>,
}

impl Bookmarks {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StorageResult<Vec<String>> {
        match get_json::<Vec<String>, _>(self.store.as_ref(), StorageKeys::BOOKMARKS) {
            Ok(ids) => Ok(ids.unwrap_or_default()),
            Err(StorageError::Corrupt { key, source }) => {
                tracing::warn!(key = %key, error = %source, "Discarding corrupt bookmarks");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn contains(&self, check_id: &str) -> StorageResult<bool> {
        Ok(self.list()?.iter().any(|id| id == check_id))
    }

    /// Add or remove a bookmark; returns whether it is now bookmarked
    pub fn toggle(&self, check_id: &str) -> StorageResult<bool> {
        let mut ids = self.list()?;
        let bookmarked = match ids.iter().position(|id| id == check_id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.insert(0, check_id.to_string());
                true
            }
        };
        set_json(self.store.as_ref(), StorageKeys::BOOKMARKS, &ids)?;
        tracing::debug!(check_id, bookmarked, "Bookmark toggled");
        Ok(bookmarked)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove(StorageKeys::BOOKMARKS)
    }
}
