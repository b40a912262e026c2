pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use cart::Cart;
pub use catalog::{Applied, Catalog, SearchView, SyncKey, Ticket};
pub use config::ShopConfig;
pub use error::{CartError, StoreError, ValidationError};
pub use models::{
    Capability, Credentials, Profile, Role, SearchCriteria, StockChange, Sweet, SweetDraft,
    SweetId,
};
pub use session::{SessionStore, TokenSource, TokenStorage};
