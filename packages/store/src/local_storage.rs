//! # `localStorage` token storage: browser-side persistence
//!
//! [`LocalStorage`] is the [`TokenStorage`] used on the **web platform**. It
//! stores the token under one key of `window.localStorage`, so the session
//! survives page reloads and is cleared on logout.
//!
//! Like the other browser-facing stores it holds no JS handles: the
//! `Storage` object is looked up on every call, which keeps the type
//! `Send + Sync` and cheap to clone.

use crate::error::StoreError;
use crate::session::TokenStorage;

/// `window.localStorage`-backed TokenStorage for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable("no window"))?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StoreError::Unavailable("localStorage disabled"))
    }
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|_| StoreError::Unavailable("localStorage write rejected"))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|_| StoreError::Unavailable("localStorage remove rejected"))
    }
}
