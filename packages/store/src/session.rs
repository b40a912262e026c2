//! # Session store: the client's single source of "is signed in"
//!
//! [`SessionStore`] owns the bearer token for one client context. It is an
//! explicitly constructed value (cheap to clone, all clones share state) that
//! consumers receive through context instead of reading a global.
//!
//! ## Lifecycle
//!
//! 1. [`SessionStore::restore`] reads whatever token the [`TokenStorage`]
//!    persisted in a previous run.
//! 2. [`SessionStore::login`] writes the token to durable storage and memory.
//!    The new value is visible to every clone and subscriber immediately.
//! 3. [`SessionStore::logout`] clears both.
//!
//! The store never inspects the token. Expiry and signature checks belong to
//! the backend and surface only as failed requests.
//!
//! ## Storage backends
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStorage`] | tests, fallback |
//! | `FileStorage` | native, one file under the platform data directory |
//! | `LocalStorage` | `wasm32` with the `web` feature, `window.localStorage` |
//!
//! Persistence failures are logged and otherwise ignored: the in-memory
//! session still changes, it just will not survive a reload.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::StoreError;

/// Durable home for the session token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Anything that can hand out the current bearer token.
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Shared session state for one client context.
pub struct SessionStore<S> {
    storage: Arc<S>,
    token: Arc<watch::Sender<Option<String>>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            token: Arc::clone(&self.token),
        }
    }
}

impl<S> fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.token.borrow().is_some())
            .finish()
    }
}

impl<S: TokenStorage> SessionStore<S> {
    /// Start a session from whatever `storage` persisted earlier.
    pub fn restore(storage: S) -> Self {
        let persisted = storage.load().filter(|t| !t.trim().is_empty());
        if persisted.is_some() {
            tracing::debug!("restored persisted session");
        }
        let (tx, _rx) = watch::channel(persisted);
        Self {
            storage: Arc::new(storage),
            token: Arc::new(tx),
        }
    }

    pub fn login(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.storage.save(&token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
        self.token.send_replace(Some(token));
    }

    pub fn logout(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear persisted session token: {}", e);
        }
        self.token.send_replace(None);
    }

    pub fn current_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Observe every login and logout from now on.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.token.subscribe()
    }
}

impl<S: TokenStorage + Send + Sync> TokenSource for SessionStore<S> {
    fn bearer_token(&self) -> Option<String> {
        self.current_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_login_is_visible_immediately() {
        let session = SessionStore::restore(MemoryStorage::new());
        assert!(!session.is_authenticated());

        let other = session.clone();
        session.login("T1");

        assert_eq!(session.current_token().as_deref(), Some("T1"));
        assert_eq!(other.current_token().as_deref(), Some("T1"));
        assert_eq!(other.bearer_token().as_deref(), Some("T1"));
    }

    #[test]
    fn test_token_survives_reload() {
        let storage = MemoryStorage::new();
        SessionStore::restore(storage.clone()).login("T1");

        let reloaded = SessionStore::restore(storage.clone());
        assert_eq!(reloaded.current_token().as_deref(), Some("T1"));

        reloaded.logout();
        assert!(storage.load().is_none());
        assert!(SessionStore::restore(storage).current_token().is_none());
    }

    #[test]
    fn test_blank_persisted_token_is_ignored() {
        let storage = MemoryStorage::with_token("  ");
        assert!(!SessionStore::restore(storage).is_authenticated());
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let session = SessionStore::restore(storage.clone());
        session.login("T1");
        session.logout();

        assert!(session.current_token().is_none());
        assert!(storage.load().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let session = SessionStore::restore(MemoryStorage::new());
        let mut rx = session.subscribe();

        session.login("T1");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_deref(), Some("T1"));

        session.logout();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let session = SessionStore::restore(MemoryStorage::new());
        session.login("secret-token");
        assert!(!format!("{session:?}").contains("secret-token"));
    }
}
