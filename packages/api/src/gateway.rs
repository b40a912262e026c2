//! # Authenticated request gateway
//!
//! Every request to the backend is built through [`Gateway::request`], which
//! reads the current token from a [`TokenSource`] at build time and attaches
//! it as `Authorization: Bearer <token>`. Without a token the request goes out
//! unauthenticated.
//!
//! The gateway does not retry, refresh tokens, or look at responses beyond
//! turning non-success statuses into [`ApiError`]; callers decide what a
//! failure means.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use store::{ShopConfig, TokenSource};

use crate::error::ApiError;

#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    pub fn from_config(config: &ShopConfig, tokens: Arc<dyn TokenSource>) -> Self {
        Self::new(config.api.base_url.clone(), tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request to `path`, carrying the bearer token if one is present.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(self.client.request(method, self.url(path)))
    }

    /// URL whose path is the base path followed by `segments`, each
    /// percent-encoded so it stays a single segment.
    pub fn segment_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let bad_url = || ApiError::BadUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| bad_url())?;
        url.path_segments_mut()
            .map_err(|()| bad_url())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Like [`Gateway::request`] for a path containing caller-supplied values.
    pub fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.segment_url(segments)?;
        Ok(self.authorize(self.client.request(method, url)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and return the body of a successful response.
    pub async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!(%status, "backend request failed");
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Send and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(builder).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use store::{MemoryStorage, SessionStore};

    fn gateway(session: &SessionStore<MemoryStorage>) -> Gateway {
        Gateway::new("https://shop.test/", Arc::new(session.clone()))
    }

    #[test]
    fn test_bearer_token_is_attached() {
        let session = SessionStore::restore(MemoryStorage::new());
        session.login("T1");

        let request = gateway(&session)
            .request(Method::GET, "/api/auth/me")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "https://shop.test/api/auth/me");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer T1");
    }

    #[test]
    fn test_request_without_token_is_unauthenticated() {
        let session = SessionStore::restore(MemoryStorage::new());
        let request = gateway(&session)
            .request(Method::GET, "/api/sweets")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_is_read_per_request() {
        let session = SessionStore::restore(MemoryStorage::new());
        let gateway = gateway(&session);

        session.login("T1");
        let first = gateway.request(Method::GET, "api/sweets").build().unwrap();
        session.logout();
        let second = gateway.request(Method::GET, "api/sweets").build().unwrap();

        assert_eq!(first.headers()[AUTHORIZATION], "Bearer T1");
        assert!(second.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_segments_cannot_change_the_route() {
        let session = SessionStore::restore(MemoryStorage::new());
        session.login("T1");
        let gateway = gateway(&session);

        let url = gateway.segment_url(&["api", "sweets", "a/b?c#d", "purchase"]).unwrap();
        assert_eq!(url.as_str(), "https://shop.test/api/sweets/a%2Fb%3Fc%23d/purchase");

        let request = gateway
            .request_segments(Method::DELETE, &["api", "sweets", "5"])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "https://shop.test/api/sweets/5");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer T1");
    }

    #[test]
    fn test_segments_keep_base_path() {
        let session = SessionStore::restore(MemoryStorage::new());
        let gateway = Gateway::new("https://shop.test/v2", Arc::new(session));
        let url = gateway.segment_url(&["api", "sweets"]).unwrap();
        assert_eq!(url.as_str(), "https://shop.test/v2/api/sweets");

        let gateway = Gateway::new("not a url", Arc::new(SessionStore::restore(MemoryStorage::new())));
        assert!(matches!(gateway.segment_url(&["api"]), Err(ApiError::BadUrl(_))));
    }
}
