//! In-memory backends for driver tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use reqwest::StatusCode;
use tokio::sync::oneshot;

use store::{Credentials, Profile, SearchCriteria, Sweet, SweetDraft, SweetId};

use crate::backend::Backend;
use crate::error::ApiError;

pub fn sweet(id: i64, quantity: u32) -> Sweet {
    Sweet {
        id: SweetId::from(id),
        name: format!("Sweet {id}"),
        category: "Mithai".into(),
        price: 10.0,
        quantity,
        image_url: String::new(),
        description: String::new(),
    }
}

/// Backend holding its own collection. Categories are upper-cased on write
/// so tests can tell a server record from the submitted draft.
#[derive(Default)]
pub struct FakeBackend {
    sweets: RefCell<Vec<Sweet>>,
    token: Option<String>,
    profile: Option<Profile>,
    failure: Cell<Option<StatusCode>>,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn with_sweets(mut self, sweets: Vec<Sweet>) -> Self {
        self.sweets = RefCell::new(sweets);
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_profile(mut self, email: &str, role: &str) -> Self {
        self.profile = Some(Profile {
            email: email.to_string(),
            role: role.into(),
        });
        self
    }

    /// Answer every following call with `status` until [`FakeBackend::recover`].
    pub fn fail_with(&self, status: StatusCode) {
        self.failure.set(Some(status));
    }

    pub fn recover(&self) {
        self.failure.set(None);
    }

    pub fn sweets(&self) -> Vec<Sweet> {
        self.sweets.borrow().clone()
    }

    pub fn set_quantity(&self, id: &SweetId, quantity: u32) {
        if let Some(s) = self.sweets.borrow_mut().iter_mut().find(|s| &s.id == id) {
            s.quantity = quantity;
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn call(&self, name: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(name.to_string());
        match self.failure.get() {
            Some(status) => Err(ApiError::from_status(status, "")),
            None => Ok(()),
        }
    }

    fn record(id: SweetId, draft: &SweetDraft) -> Sweet {
        Sweet {
            id,
            name: draft.name.trim().to_string(),
            category: draft.category.trim().to_uppercase(),
            price: draft.price,
            quantity: draft.quantity,
            image_url: draft.image_url.clone(),
            description: draft.description.clone(),
        }
    }

    fn not_found() -> ApiError {
        ApiError::from_status(StatusCode::NOT_FOUND, r#"{"message":"Sweet not found"}"#)
    }

    fn change_stock(&self, id: &SweetId, f: impl FnOnce(u32) -> Option<u32>) -> Result<u32, ApiError> {
        let mut sweets = self.sweets.borrow_mut();
        let sweet = sweets.iter_mut().find(|s| &s.id == id).ok_or_else(Self::not_found)?;
        sweet.quantity = f(sweet.quantity).ok_or_else(|| {
            ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"message":"Insufficient stock"}"#)
        })?;
        Ok(sweet.quantity)
    }
}

impl Backend for FakeBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<Option<String>, ApiError> {
        self.call("login")?;
        Ok(self.token.clone())
    }

    async fn register(&self, _credentials: &Credentials) -> Result<Option<String>, ApiError> {
        self.call("register")?;
        Ok(self.token.clone())
    }

    async fn me(&self) -> Result<Profile, ApiError> {
        self.call("me")?;
        Ok(self.profile.clone().unwrap_or_else(|| Profile {
            email: "user@example.com".into(),
            role: Default::default(),
        }))
    }

    async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        self.call("list_sweets")?;
        Ok(self.sweets())
    }

    async fn search_sweets(&self, criteria: &SearchCriteria) -> Result<Vec<Sweet>, ApiError> {
        self.call("search_sweets")?;
        let name = criteria.name.trim().to_lowercase();
        Ok(self
            .sweets
            .borrow()
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&name))
            .cloned()
            .collect())
    }

    async fn create_sweet(&self, draft: &SweetDraft) -> Result<Sweet, ApiError> {
        self.call("create_sweet")?;
        let mut sweets = self.sweets.borrow_mut();
        let id = SweetId::from(100 + sweets.len() as i64);
        let created = Self::record(id, draft);
        sweets.insert(0, created.clone());
        Ok(created)
    }

    async fn update_sweet(&self, id: &SweetId, draft: &SweetDraft) -> Result<Sweet, ApiError> {
        self.call("update_sweet")?;
        let mut sweets = self.sweets.borrow_mut();
        let entry = sweets.iter_mut().find(|s| &s.id == id).ok_or_else(Self::not_found)?;
        *entry = Self::record(id.clone(), draft);
        Ok(entry.clone())
    }

    async fn delete_sweet(&self, id: &SweetId) -> Result<(), ApiError> {
        self.call("delete_sweet")?;
        self.sweets.borrow_mut().retain(|s| &s.id != id);
        Ok(())
    }

    async fn purchase(&self, id: &SweetId, quantity: u32) -> Result<u32, ApiError> {
        self.call("purchase")?;
        self.change_stock(id, |stock| stock.checked_sub(quantity))
    }

    async fn restock(&self, id: &SweetId, quantity: u32) -> Result<u32, ApiError> {
        self.call("restock")?;
        self.change_stock(id, |stock| stock.checked_add(quantity))
    }
}

/// Backend whose list and stock responses are released by the test through
/// oneshot channels, in whatever order the test chooses. Each call takes the
/// next gate in the order the calls are issued.
#[derive(Default)]
pub struct GatedBackend {
    lists: RefCell<VecDeque<oneshot::Receiver<Vec<Sweet>>>>,
    stock: RefCell<VecDeque<oneshot::Receiver<u32>>>,
}

impl GatedBackend {
    pub fn gate_list(&self, rx: oneshot::Receiver<Vec<Sweet>>) {
        self.lists.borrow_mut().push_back(rx);
    }

    pub fn gate_stock(&self, rx: oneshot::Receiver<u32>) {
        self.stock.borrow_mut().push_back(rx);
    }

    async fn next_list(&self) -> Result<Vec<Sweet>, ApiError> {
        let rx = self.lists.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx.await.map_err(|e| ApiError::Decode(e.to_string())),
            None => Err(ApiError::Decode("no list gate".into())),
        }
    }

    async fn next_stock(&self) -> Result<u32, ApiError> {
        let rx = self.stock.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx.await.map_err(|e| ApiError::Decode(e.to_string())),
            None => Err(ApiError::Decode("no stock gate".into())),
        }
    }
}

impl Backend for GatedBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<Option<String>, ApiError> {
        Ok(None)
    }

    async fn register(&self, _credentials: &Credentials) -> Result<Option<String>, ApiError> {
        Ok(None)
    }

    async fn me(&self) -> Result<Profile, ApiError> {
        Err(ApiError::SignedOut)
    }

    async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        self.next_list().await
    }

    async fn search_sweets(&self, _criteria: &SearchCriteria) -> Result<Vec<Sweet>, ApiError> {
        self.next_list().await
    }

    async fn create_sweet(&self, _draft: &SweetDraft) -> Result<Sweet, ApiError> {
        Err(ApiError::Decode("not gated".into()))
    }

    async fn update_sweet(&self, _id: &SweetId, _draft: &SweetDraft) -> Result<Sweet, ApiError> {
        Err(ApiError::Decode("not gated".into()))
    }

    async fn delete_sweet(&self, _id: &SweetId) -> Result<(), ApiError> {
        Err(ApiError::Decode("not gated".into()))
    }

    async fn purchase(&self, _id: &SweetId, _quantity: u32) -> Result<u32, ApiError> {
        self.next_stock().await
    }

    async fn restock(&self, _id: &SweetId, _quantity: u32) -> Result<u32, ApiError> {
        self.next_stock().await
    }
}
