use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::session::TokenStorage;

/// In-memory TokenStorage for testing and as a fallback when nothing durable exists.
///
/// Clones share the same slot, so a clone handed to a second
/// [`crate::SessionStore`] behaves like a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().map_err(|_| StoreError::Poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.lock().map_err(|_| StoreError::Poisoned)? = None;
        Ok(())
    }
}
