//! # API crate: the storefront's backend collaborator
//!
//! Everything that crosses the network lives here. The front ends hold a
//! [`store::SessionStore`], a [`store::Catalog`] and a [`store::Cart`]; this
//! crate talks to the shop backend on their behalf and feeds the answers
//! back into them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | Builds every request, attaching `Authorization: Bearer` from the session |
//! | [`backend`] | The [`Backend`] trait (one method per endpoint) and its HTTP implementation |
//! | [`auth`] | Sign-in, registration, sign-out, profile resolution |
//! | [`sync`] | Catalog and cart drivers: backend call, then the matching state transition |
//! | [`error`] | [`ApiError`] and the [`FailureKind`] taxonomy the UI reacts to |
//!
//! ## Wiring
//!
//! ```ignore
//! let session = SessionStore::restore(storage);
//! let gateway = Gateway::from_config(&config, Arc::new(session.clone()));
//! let backend = HttpBackend::new(gateway);
//! api::sign_in(&backend, &session, &credentials).await?;
//! ```

pub mod auth;
pub mod backend;
pub mod error;
pub mod gateway;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use auth::{login_failure_message, resolve_profile, sign_in, sign_out, sign_up, Registration};
pub use backend::{Backend, HttpBackend};
pub use error::{ApiError, FailureKind};
pub use gateway::Gateway;
pub use sync::StateCell;
