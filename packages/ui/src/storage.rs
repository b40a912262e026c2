//! Platform token storage for the session.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop / tests** (native): one file under `<data_dir>/sweet-shop/` via [`store::FileStorage`]
//!
//! A WASM build without the `web` feature has no durable storage and keeps
//! the token in memory only.

use store::ShopConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type ShopStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type ShopStorage = store::FileStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type ShopStorage = store::MemoryStorage;

/// Token storage for this platform, keyed by `[session] storage_key`.
pub fn make_storage(config: &ShopConfig) -> ShopStorage {
    let key = config.session.storage_key.as_str();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new(key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("sweet-shop")
            .join(key);
        store::FileStorage::new(path)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        tracing::warn!(key, "no durable token storage on this target");
        store::MemoryStorage::new()
    }
}
