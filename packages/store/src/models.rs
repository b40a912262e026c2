//! # Domain models for the sweet shop
//!
//! Defines the records exchanged with the backend and held in the client-side
//! mirrors. These types are `Serialize + Deserialize` so they can be decoded
//! straight from the backend's JSON bodies.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`SweetId`] | Opaque product identifier. Accepts JSON numbers or strings (`id` or `_id`). |
//! | [`Sweet`] | A product as the backend last reported it. Read-only from the client's point of view. |
//! | [`SweetDraft`] | The editable fields submitted when creating or updating a sweet. |
//! | [`StockChange`] | `{quantity}` body used by purchase and restock, in both directions. |
//! | [`Profile`] | The signed-in identity (`email`, [`Role`]). |
//! | [`Role`] / [`Capability`] | Closed role set and the single check gated controls consult. |
//! | [`Credentials`] | Email/password pair for login and registration. |
//! | [`SearchCriteria`] | Ephemeral search form state, turned into query parameters. |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier assigned by the backend.
///
/// Numeric ids are kept in their decimal form so `5` and `"5"` name the same sweet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct SweetId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for SweetId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<SweetId> for String {
    fn from(id: SweetId) -> Self {
        id.0
    }
}

impl From<i64> for SweetId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for SweetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SweetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl SweetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweet {
    #[serde(alias = "_id")]
    pub id: SweetId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, alias = "image")]
    pub image_url: String,
    #[serde(default = "default_description", alias = "desc")]
    pub description: String,
}

fn default_description() -> String {
    "Delicious handcrafted sweet".to_string()
}

impl Sweet {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Fields submitted when creating or editing a sweet.
///
/// The backend answers with the canonical [`Sweet`]; a draft is never written
/// into a mirror.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub quantity: u32,
    #[serde(rename = "desc")]
    pub description: String,
}

impl SweetDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::Required("category"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }
}

/// `{quantity}` body of purchase/restock requests and responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub quantity: u32,
}

/// What a role may do in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Browse,
    Purchase,
    ManageInventory,
}

/// Role reported by `/api/auth/me`, compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Other(String),
}

impl Default for Role {
    fn default() -> Self {
        Role::Other("USER".to_string())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Other(s)
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "ADMIN".to_string(),
            Role::Other(s) => s,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::Other(s) => f.write_str(s),
        }
    }
}

impl Role {
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::Browse | Capability::Purchase => true,
            Capability::ManageInventory => matches!(self, Role::Admin),
        }
    }
}

/// The signed-in identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Profile {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.can(capability)
    }
}

/// Email/password pair for login and registration.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check both fields and return the pair with the email trimmed.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::Required("email"));
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::Required("password"));
        }
        Ok(Self {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Search form state. Blank fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub name: String,
    pub category: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchCriteria {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.category.trim().is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Query parameters for `GET /api/sweets/search`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.name.trim().is_empty() {
            pairs.push(("name", self.name.trim().to_string()));
        }
        if !self.category.trim().is_empty() {
            pairs.push(("category", self.category.trim().to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        pairs
    }
}

/// Parse a price typed into a form field; blank or malformed input is `None`.
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Parse a whole-number quantity typed into a form field.
pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}
