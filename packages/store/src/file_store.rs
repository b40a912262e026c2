//! # Filesystem-backed token storage
//!
//! [`FileStorage`] keeps the session token in a single file so native builds
//! (desktop shells, the test harness) survive restarts the way a browser's
//! `localStorage` does.
//!
//! Use `dirs::data_dir()`-style platform directories for the base; the UI
//! crate picks `<data_dir>/sweet-shop/<storage_key>`.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::session::TokenStorage;

/// Filesystem-backed TokenStorage for native platforms.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStorage for FileStorage {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionStore;

    #[test]
    fn test_file_storage_survives_restart() {
        let dir = std::env::temp_dir().join(format!("sweet_shop_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("session").join("token");

        let session = SessionStore::restore(FileStorage::new(path.clone()));
        session.login("T1");

        // Re-open from the same file
        let reopened = SessionStore::restore(FileStorage::new(path.clone()));
        assert_eq!(reopened.current_token().as_deref(), Some("T1"));

        reopened.logout();
        assert!(!path.exists());
        // Clearing twice is fine
        assert!(FileStorage::new(path).clear().is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
