//! Client-only staging of purchase quantities.
//!
//! A [`Cart`] maps sweet ids to a staged quantity. Staging is checked against
//! the last-known stock in the [`Catalog`]; the cart never touches the catalog
//! itself; purchases go through the catalog drivers and only then is the
//! entry cleared.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::CartError;
use crate::models::SweetId;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    entries: BTreeMap<SweetId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage one more unit of `id`. Rejected without change if stock would be exceeded.
    pub fn add(&mut self, catalog: &Catalog, id: &SweetId) -> Result<u32, CartError> {
        let sweet = catalog
            .get(id)
            .ok_or_else(|| CartError::UnknownSweet(id.clone()))?;
        let requested = self.staged(id) + 1;
        if requested > sweet.quantity {
            return Err(CartError::ExceedsStock {
                id: id.clone(),
                requested,
                available: sweet.quantity,
            });
        }
        self.entries.insert(id.clone(), requested);
        Ok(requested)
    }

    pub fn staged(&self, id: &SweetId) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    pub fn remove(&mut self, id: &SweetId) -> Option<u32> {
        self.entries.remove(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&SweetId, u32)> + '_ {
        self.entries.iter().map(|(id, qty)| (id, *qty))
    }

    pub fn total_units(&self) -> u32 {
        self.entries.values().sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity to submit for `id`, re-checked against current stock.
    ///
    /// If stock dropped below the staged amount since it was staged, the entry
    /// is dropped and the error returned; nothing should be sent.
    pub fn checkout(&mut self, catalog: &Catalog, id: &SweetId) -> Result<u32, CartError> {
        let staged = self.staged(id);
        if staged == 0 {
            return Err(CartError::NothingStaged(id.clone()));
        }
        let Some(sweet) = catalog.get(id) else {
            self.entries.remove(id);
            return Err(CartError::UnknownSweet(id.clone()));
        };
        if staged > sweet.quantity {
            self.entries.remove(id);
            return Err(CartError::ExceedsStock {
                id: id.clone(),
                requested: staged,
                available: sweet.quantity,
            });
        }
        Ok(staged)
    }

    /// Clear the entry after the server confirmed the purchase.
    pub fn complete(&mut self, id: &SweetId) {
        self.entries.remove(id);
    }
}
