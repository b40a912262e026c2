//! # Client configuration: `shop.toml`
//!
//! Defines the TOML file the web binary embeds at build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://sweet-shop-backend-9ly4.onrender.com"
//!
//! [session]
//! storage_key = "token"   # localStorage key / file name holding the token
//! ```
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration. The default base URL can be overridden at
//! compile time with the `SWEET_SHOP_API_URL` environment variable.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const DEFAULT_API_URL: &str = "https://sweet-shop-backend-9ly4.onrender.com";

/// Top-level configuration stored in `shop.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin every `/api/...` path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("SWEET_SHOP_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ShopConfig {
    pub fn filename() -> &'static str {
        "shop.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse `s`, logging and falling back to defaults when it is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", Self::filename(), e);
            Self::default()
        })
    }
}
