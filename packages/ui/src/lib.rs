//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `auth` | [`ShopProvider`] context, [`use_shop`], [`use_auth`], [`use_profile`] |
//! | [`guard`] | Route guard for protected views |
//! | [`notify`] | Notice tray replacing blocking alerts |
//! | [`catalog`] | Sweet cards, inventory table, search form |
//! | [`cart`] | Cart panel |
//! | [`admin`] | Create/edit form for sweets |

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{make_storage, ShopStorage};

mod state;
pub use state::SignalCell;

mod auth;
pub use auth::{use_auth, use_profile, use_shop, AuthState, Shop, ShopProvider, ShopSession};

pub mod guard;
pub use guard::{Access, Guarded, LOGIN_PATH};

pub mod notify;
pub use notify::{notify, use_notices, NoticeLevel, NoticeTray, Notices};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay, RestockDialog, DEFAULT_RESTOCK};

pub mod catalog;
pub use catalog::{SearchBar, SweetCard, SweetTable};

pub mod cart;
pub use cart::{CartLine, CartPanel};

pub mod admin;
pub use admin::SweetForm;
