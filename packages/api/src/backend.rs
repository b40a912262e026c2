//! # Backend collaborator
//!
//! [`Backend`] lists every endpoint the storefront uses. [`HttpBackend`] is
//! the REST/JSON implementation on top of the [`Gateway`]; tests substitute
//! in-memory fakes.
//!
//! | Method | Endpoint | Returns |
//! |--------|----------|---------|
//! | `login` | `POST /api/auth/login {email,password}` | token |
//! | `register` | `POST /api/auth/register {email,password}` | token, if the backend signs in directly |
//! | `me` | `GET /api/auth/me` | [`Profile`] |
//! | `list_sweets` | `GET /api/sweets` | `[Sweet]` |
//! | `search_sweets` | `GET /api/sweets/search?name&category&minPrice&maxPrice` | `[Sweet]` |
//! | `create_sweet` | `POST /api/sweets` | [`Sweet`] |
//! | `update_sweet` | `PUT /api/sweets/{id}` | [`Sweet`] |
//! | `delete_sweet` | `DELETE /api/sweets/{id}` | nothing |
//! | `purchase` | `POST /api/sweets/{id}/purchase {quantity}` | remaining quantity |
//! | `restock` | `POST /api/sweets/{id}/restock {quantity}` | new quantity |
//!
//! Ids are opaque and are percent-encoded as one path segment.

use std::future::Future;

use reqwest::Method;

use store::{Credentials, Profile, SearchCriteria, StockChange, Sweet, SweetDraft, SweetId};

use crate::auth::parse_token_body;
use crate::error::ApiError;
use crate::gateway::Gateway;

/// Async interface to the shop backend.
pub trait Backend {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;
    fn me(&self) -> impl Future<Output = Result<Profile, ApiError>>;
    fn list_sweets(&self) -> impl Future<Output = Result<Vec<Sweet>, ApiError>>;
    fn search_sweets(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Sweet>, ApiError>>;
    fn create_sweet(&self, draft: &SweetDraft) -> impl Future<Output = Result<Sweet, ApiError>>;
    fn update_sweet(
        &self,
        id: &SweetId,
        draft: &SweetDraft,
    ) -> impl Future<Output = Result<Sweet, ApiError>>;
    fn delete_sweet(&self, id: &SweetId) -> impl Future<Output = Result<(), ApiError>>;
    fn purchase(
        &self,
        id: &SweetId,
        quantity: u32,
    ) -> impl Future<Output = Result<u32, ApiError>>;
    fn restock(
        &self,
        id: &SweetId,
        quantity: u32,
    ) -> impl Future<Output = Result<u32, ApiError>>;
}

/// REST/JSON backend reached through a [`Gateway`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    gateway: Gateway,
}

impl HttpBackend {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<Option<String>, ApiError> {
        let request = self.gateway.request(Method::POST, path).json(credentials);
        let body = self.gateway.send(request).await?;
        Ok(parse_token_body(&body))
    }

    async fn change_stock(&self, id: &SweetId, action: &str, quantity: u32) -> Result<u32, ApiError> {
        let request = self
            .gateway
            .request_segments(Method::POST, &["api", "sweets", id.as_str(), action])?
            .json(&StockChange { quantity });
        let change: StockChange = self.gateway.send_json(request).await?;
        Ok(change.quantity)
    }
}

/// A missing or `null` list body counts as an empty list.
fn decode_list(body: &str) -> Result<Vec<Sweet>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let sweets: Option<Vec<Sweet>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(sweets.unwrap_or_default())
}

impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<Option<String>, ApiError> {
        self.post_credentials("/api/auth/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<Option<String>, ApiError> {
        self.post_credentials("/api/auth/register", credentials)
            .await
    }

    async fn me(&self) -> Result<Profile, ApiError> {
        let request = self.gateway.request(Method::GET, "/api/auth/me");
        self.gateway.send_json(request).await
    }

    async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        let request = self.gateway.request(Method::GET, "/api/sweets");
        decode_list(&self.gateway.send(request).await?)
    }

    async fn search_sweets(&self, criteria: &SearchCriteria) -> Result<Vec<Sweet>, ApiError> {
        let request = self
            .gateway
            .request(Method::GET, "/api/sweets/search")
            .query(&criteria.query_pairs());
        decode_list(&self.gateway.send(request).await?)
    }

    async fn create_sweet(&self, draft: &SweetDraft) -> Result<Sweet, ApiError> {
        let request = self.gateway.request(Method::POST, "/api/sweets").json(draft);
        self.gateway.send_json(request).await
    }

    async fn update_sweet(&self, id: &SweetId, draft: &SweetDraft) -> Result<Sweet, ApiError> {
        let request = self
            .gateway
            .request_segments(Method::PUT, &["api", "sweets", id.as_str()])?
            .json(draft);
        self.gateway.send_json(request).await
    }

    async fn delete_sweet(&self, id: &SweetId) -> Result<(), ApiError> {
        let request = self
            .gateway
            .request_segments(Method::DELETE, &["api", "sweets", id.as_str()])?;
        self.gateway.send(request).await?;
        Ok(())
    }

    async fn purchase(&self, id: &SweetId, quantity: u32) -> Result<u32, ApiError> {
        self.change_stock(id, "purchase", quantity).await
    }

    async fn restock(&self, id: &SweetId, quantity: u32) -> Result<u32, ApiError> {
        self.change_stock(id, "restock", quantity).await
    }
}
