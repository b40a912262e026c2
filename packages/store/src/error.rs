//! Error types for client-side state.

use thiserror::Error;

use crate::models::SweetId;

/// Durable storage and configuration failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Input rejected before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("price must be a non-negative number")]
    InvalidPrice,

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("quantity must be a whole number")]
    InvalidQuantity,
}

/// Cart staging failures. None of these change the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("sweet {0} is not in the catalog")]
    UnknownSweet(SweetId),

    #[error("only {available} of sweet {id} in stock, {requested} requested")]
    ExceedsStock {
        id: SweetId,
        requested: u32,
        available: u32,
    },

    #[error("nothing staged for sweet {0}")]
    NothingStaged(SweetId),
}
