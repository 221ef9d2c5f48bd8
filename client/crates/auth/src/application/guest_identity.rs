//! Guest Identity
//!
//! The locally generated identifier of an unauthenticated visitor, persisted
//! under a well-known storage key. Created on the first guest visit, reused
//! on later visits, and removed the moment a user signs in.

use kernel::id::GuestId;
use platform::storage::{LocalStore, StorageKeys, StorageResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct GuestIdentity {
    store: Arc<dyn LocalStore>,
}

impl GuestIdentity {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Stored guest id, if a valid one exists
    pub fn current(&self) -> StorageResult<Option<GuestId>> {
        let Some(raw) = self.store.get(StorageKeys::GUEST_ID)? else {
            return Ok(None);
        };
        match raw.parse::<GuestId>() {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed stored guest id");
                Ok(None)
            }
        }
    }

    /// Stored guest id, generating and persisting a new one if missing
    pub fn load_or_create(&self) -> StorageResult<GuestId> {
        if let Some(id) = self.current()? {
            return Ok(id);
        }
        let id = GuestId::new();
        self.store.set(StorageKeys::GUEST_ID, &id.to_string())?;
        tracing::info!(guest_id = %id, "Created guest identity");
        Ok(id)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove(StorageKeys::GUEST_ID)
    }
}
