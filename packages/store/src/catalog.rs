//! # Catalog: the client's mirror of the backend's sweets
//!
//! [`Catalog`] holds the last server-confirmed state of the product
//! collection. It never performs I/O; the async drivers in the `api` crate
//! call the backend and feed results back through the `apply_*` methods.
//!
//! ## Mirror and displayed view
//!
//! Searching is done by the backend. A search result set is kept as a
//! separate [`SearchView`]; the unfiltered mirror stays intact so clearing the
//! search (or reloading) returns to it. Mutations confirmed by the server are
//! applied to the mirror and, for ids present in an active search, to the view
//! as well, so both keep agreeing with the server.
//!
//! ## Sequencing
//!
//! Responses can arrive out of order. Every request that overwrites existing
//! state first takes a [`Ticket`] from [`Catalog::begin`] for its
//! [`SyncKey`]; only the newest ticket for a key may apply its response,
//! older ones are reported as [`Applied::Stale`] and dropped.
//!
//! | Operation | Key | On success |
//! |-----------|-----|------------|
//! | load | `Listing` | replace mirror, drop search view |
//! | search | `Listing` | replace search view |
//! | create | - | prepend canonical record to mirror |
//! | update | `Sweet(id)` | replace entry with canonical record |
//! | purchase / restock | `Sweet(id)` | set quantity to server value |
//! | delete | - | remove id, invalidate tickets for it |
//!
//! Keys do not see each other, so a listing issued before a per-sweet change
//! can land after it. Every applied create, update, stock change and delete
//! advances a catalog-wide epoch that listing tickets record. A listing
//! that lands later gets the newer changes laid over it: deleted ids are
//! dropped and changed records replace what the listing says.
//!
//! Failures never reach this type, so a failed request leaves it untouched.

use std::collections::HashMap;

use crate::models::{SearchCriteria, Sweet, SweetId};

/// What a request would overwrite.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyncKey {
    /// The whole collection (load) or the displayed search results.
    Listing,
    /// A single sweet's record or stock.
    Sweet(SweetId),
}

/// Proof that a request was issued at a given generation of its key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a ticket must be handed back to an apply method"]
pub struct Ticket {
    key: SyncKey,
    generation: u64,
    epoch: u64,
}

impl Ticket {
    pub fn key(&self) -> &SyncKey {
        &self.key
    }
}

/// Whether a response was applied or discarded as out of date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Fresh,
    Stale,
}

impl Applied {
    pub fn is_fresh(self) -> bool {
        self == Applied::Fresh
    }
}

/// Results of the last server-side search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchView {
    pub criteria: SearchCriteria,
    pub results: Vec<Sweet>,
}

/// Latest confirmed outcome for one sweet. `None` means deleted.
#[derive(Clone, Debug, PartialEq)]
struct Change {
    epoch: u64,
    record: Option<Sweet>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    mirror: Vec<Sweet>,
    search: Option<SearchView>,
    generations: HashMap<SyncKey, u64>,
    epoch: u64,
    changes: HashMap<SweetId, Change>,
    loaded: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog already holding `sweets`, as if a load had completed.
    pub fn from_sweets(sweets: Vec<Sweet>) -> Self {
        Self {
            mirror: sweets,
            loaded: true,
            ..Self::default()
        }
    }

    /// Sweets to display: search results while a search is active, else the mirror.
    pub fn sweets(&self) -> &[Sweet] {
        match &self.search {
            Some(view) => &view.results,
            None => &self.mirror,
        }
    }

    /// The unfiltered collection.
    pub fn mirror(&self) -> &[Sweet] {
        &self.mirror
    }

    pub fn search(&self) -> Option<&SearchView> {
        self.search.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Whether a full load has completed at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Last-known record for `id`, preferring the displayed view.
    pub fn get(&self, id: &SweetId) -> Option<&Sweet> {
        self.search
            .as_ref()
            .and_then(|view| view.results.iter().find(|s| &s.id == id))
            .or_else(|| self.mirror.iter().find(|s| &s.id == id))
    }

    /// Start a request that will overwrite `key`; older tickets for it become stale.
    pub fn begin(&mut self, key: SyncKey) -> Ticket {
        let generation = self.bump(&key);
        Ticket {
            key,
            generation,
            epoch: self.epoch,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generations.get(&ticket.key).copied().unwrap_or(0) == ticket.generation
    }

    fn bump(&mut self, key: &SyncKey) -> u64 {
        let generation = self.generations.entry(key.clone()).or_insert(0);
        *generation += 1;
        *generation
    }

    fn record(&mut self, id: SweetId, record: Option<Sweet>) {
        self.epoch += 1;
        let epoch = self.epoch;
        self.changes.insert(id, Change { epoch, record });
    }

    /// Lay changes confirmed after `since` over a listing. `add_missing`
    /// prepends changed sweets the listing lacks.
    fn overlay(&mut self, since: u64, sweets: &mut Vec<Sweet>, add_missing: bool) {
        let mut newer: Vec<(&SweetId, &Change)> =
            self.changes.iter().filter(|(_, c)| c.epoch > since).collect();
        newer.sort_by_key(|(_, c)| c.epoch);
        for (id, change) in newer {
            match &change.record {
                None => sweets.retain(|s| &s.id != id),
                Some(record) => match sweets.iter().position(|s| &s.id == id) {
                    Some(i) => sweets[i] = record.clone(),
                    None if add_missing => sweets.insert(0, record.clone()),
                    None => {}
                },
            }
        }
        // No older listing ticket can still apply.
        self.changes.clear();
    }

    fn check(&self, ticket: &Ticket) -> Applied {
        if self.is_current(ticket) {
            Applied::Fresh
        } else {
            tracing::debug!(key = ?ticket.key, generation = ticket.generation, "discarding stale response");
            Applied::Stale
        }
    }

    /// Replace the mirror with a full listing and drop any search view.
    pub fn apply_load(&mut self, ticket: Ticket, mut sweets: Vec<Sweet>) -> Applied {
        let applied = self.check(&ticket);
        if applied.is_fresh() {
            self.overlay(ticket.epoch, &mut sweets, true);
            self.mirror = sweets;
            self.search = None;
            self.loaded = true;
        }
        applied
    }

    /// Show server search results, leaving the mirror as it was.
    pub fn apply_search(
        &mut self,
        ticket: Ticket,
        criteria: SearchCriteria,
        mut results: Vec<Sweet>,
    ) -> Applied {
        let applied = self.check(&ticket);
        if applied.is_fresh() {
            self.overlay(ticket.epoch, &mut results, false);
            self.search = Some(SearchView { criteria, results });
        }
        applied
    }

    /// Return to the mirror. Any search still in flight is invalidated.
    pub fn clear_search(&mut self) {
        self.bump(&SyncKey::Listing);
        self.search = None;
    }

    /// Prepend a newly created sweet as returned by the server.
    pub fn apply_created(&mut self, sweet: Sweet) {
        self.mirror.retain(|s| s.id != sweet.id);
        self.mirror.insert(0, sweet.clone());
        self.record(sweet.id.clone(), Some(sweet));
    }

    /// Replace the ticket's sweet with the server's canonical record.
    pub fn apply_updated(&mut self, ticket: Ticket, sweet: Sweet) -> Applied {
        let applied = self.check(&ticket);
        if let (Applied::Fresh, SyncKey::Sweet(id)) = (applied, &ticket.key) {
            self.for_each_entry(id, |entry| *entry = sweet.clone());
            self.record(id.clone(), Some(sweet));
        }
        applied
    }

    /// Set the ticket's sweet to the stock level the server reported.
    pub fn apply_quantity(&mut self, ticket: Ticket, quantity: u32) -> Applied {
        let applied = self.check(&ticket);
        if let (Applied::Fresh, SyncKey::Sweet(id)) = (applied, &ticket.key) {
            self.for_each_entry(id, |entry| entry.quantity = quantity);
            if let Some(current) = self.get(id).cloned() {
                self.record(id.clone(), Some(current));
            }
        }
        applied
    }

    /// Remove a sweet the server confirmed deleted.
    pub fn apply_deleted(&mut self, id: &SweetId) {
        self.bump(&SyncKey::Sweet(id.clone()));
        self.mirror.retain(|s| &s.id != id);
        if let Some(view) = self.search.as_mut() {
            view.results.retain(|s| &s.id != id);
        }
        self.record(id.clone(), None);
    }

    fn for_each_entry(&mut self, id: &SweetId, mut f: impl FnMut(&mut Sweet)) {
        let view = self.search.iter_mut().flat_map(|v| v.results.iter_mut());
        for entry in self.mirror.iter_mut().chain(view) {
            if &entry.id == id {
                f(entry);
            }
        }
    }
}
