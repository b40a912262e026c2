//! # Catalog and cart drivers
//!
//! Async operations that pair a backend call with the matching
//! [`Catalog`]/[`Cart`] transition. State is reached through [`StateCell`] so
//! the same drivers run against an `Rc<RefCell<_>>` in tests and a Dioxus
//! signal in the UI; a borrow is never held across an `.await`.
//!
//! Each driver follows the same shape: take a ticket, call the backend, hand
//! the server's answer back to the catalog. A failed call returns before the
//! catalog is touched.

use std::cell::RefCell;
use std::rc::Rc;

use store::{
    Applied, Cart, Catalog, SearchCriteria, Sweet, SweetDraft, SweetId, SyncKey, ValidationError,
};

use crate::backend::Backend;
use crate::error::ApiError;

/// Shared mutable state the drivers read and write between awaits.
pub trait StateCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn with_mut<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Fetch the full collection and replace the mirror.
pub async fn load_catalog<B, C>(backend: &B, catalog: &mut C) -> Result<Applied, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    let ticket = catalog.with_mut(|c| c.begin(SyncKey::Listing));
    let sweets = backend.list_sweets().await?;
    let count = sweets.len();
    let applied = catalog.with_mut(|c| c.apply_load(ticket, sweets));
    if applied.is_fresh() {
        tracing::debug!(count, "catalog loaded");
    }
    Ok(applied)
}

/// Run a server-side search. Empty criteria reset to the full catalog.
pub async fn search_catalog<B, C>(
    backend: &B,
    catalog: &mut C,
    criteria: SearchCriteria,
) -> Result<Applied, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    if criteria.is_empty() {
        return load_catalog(backend, catalog).await;
    }
    let ticket = catalog.with_mut(|c| c.begin(SyncKey::Listing));
    let results = backend.search_sweets(&criteria).await?;
    Ok(catalog.with_mut(|c| c.apply_search(ticket, criteria, results)))
}

pub async fn create_sweet<B, C>(
    backend: &B,
    catalog: &mut C,
    draft: &SweetDraft,
) -> Result<Sweet, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    draft.validate()?;
    let created = backend.create_sweet(draft).await?;
    tracing::info!(id = %created.id, name = %created.name, "sweet created");
    catalog.with_mut(|c| c.apply_created(created.clone()));
    Ok(created)
}

/// Save `draft` over `id`; the catalog takes the record the server returns.
pub async fn update_sweet<B, C>(
    backend: &B,
    catalog: &mut C,
    id: &SweetId,
    draft: &SweetDraft,
) -> Result<Applied, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    draft.validate()?;
    let ticket = catalog.with_mut(|c| c.begin(SyncKey::Sweet(id.clone())));
    let updated = backend.update_sweet(id, draft).await?;
    Ok(catalog.with_mut(|c| c.apply_updated(ticket, updated)))
}

pub async fn delete_sweet<B, C>(backend: &B, catalog: &mut C, id: &SweetId) -> Result<(), ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    backend.delete_sweet(id).await?;
    tracing::info!(%id, "sweet deleted");
    catalog.with_mut(|c| c.apply_deleted(id));
    Ok(())
}

pub async fn purchase<B, C>(
    backend: &B,
    catalog: &mut C,
    id: &SweetId,
    quantity: u32,
) -> Result<Applied, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    if quantity == 0 {
        return Err(ValidationError::ZeroQuantity.into());
    }
    let ticket = catalog.with_mut(|c| c.begin(SyncKey::Sweet(id.clone())));
    let remaining = backend.purchase(id, quantity).await?;
    Ok(catalog.with_mut(|c| c.apply_quantity(ticket, remaining)))
}

pub async fn restock<B, C>(
    backend: &B,
    catalog: &mut C,
    id: &SweetId,
    quantity: u32,
) -> Result<Applied, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
{
    if quantity == 0 {
        return Err(ValidationError::ZeroQuantity.into());
    }
    let ticket = catalog.with_mut(|c| c.begin(SyncKey::Sweet(id.clone())));
    let stock = backend.restock(id, quantity).await?;
    tracing::info!(%id, quantity, stock, "sweet restocked");
    Ok(catalog.with_mut(|c| c.apply_quantity(ticket, stock)))
}

/// Purchase whatever is staged for `id` and clear the entry once the server accepts it.
pub async fn submit_cart<B, C, K>(
    backend: &B,
    catalog: &mut C,
    cart: &mut K,
    id: &SweetId,
) -> Result<Applied, ApiError>
where
    B: Backend,
    C: StateCell<Catalog>,
    K: StateCell<Cart>,
{
    let quantity = catalog.with(|c| cart.with_mut(|cart| cart.checkout(c, id)))?;
    let applied = purchase(backend, catalog, id, quantity).await?;
    cart.with_mut(|cart| cart.complete(id));
    Ok(applied)
}
