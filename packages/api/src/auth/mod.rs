//! Sign-in, registration, sign-out and profile resolution.
//!
//! These functions are the only writers of the [`SessionStore`]: a token is
//! stored after a successful login (or a registration that returns one) and
//! removed on sign-out or when the profile fetch fails.

mod profile;
mod token;

pub use profile::resolve_profile;
pub use token::{extract_token, parse_token_body};

use store::{Credentials, SessionStore, TokenStorage};

use crate::backend::Backend;
use crate::error::ApiError;

/// Outcome of a successful registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The backend returned a token; the session is active.
    SignedIn,
    /// The account exists but the user still has to log in.
    LoginRequired,
}

/// Log in and store the returned token.
pub async fn sign_in<B: Backend, S: TokenStorage>(
    backend: &B,
    session: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    let credentials = credentials.normalized()?;
    let token = backend
        .login(&credentials)
        .await?
        .ok_or(ApiError::MissingToken)?;
    session.login(token);
    tracing::info!(email = %credentials.email, "signed in");
    Ok(())
}

/// Register, signing in directly when the backend hands back a token.
pub async fn sign_up<B: Backend, S: TokenStorage>(
    backend: &B,
    session: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<Registration, ApiError> {
    let credentials = credentials.normalized()?;
    match backend.register(&credentials).await? {
        Some(token) => {
            session.login(token);
            tracing::info!(email = %credentials.email, "registered and signed in");
            Ok(Registration::SignedIn)
        }
        None => {
            tracing::info!(email = %credentials.email, "registered");
            Ok(Registration::LoginRequired)
        }
    }
}

pub fn sign_out<S: TokenStorage>(session: &SessionStore<S>) {
    session.logout();
    tracing::info!("signed out");
}

/// Text shown on the login form: the backend's message when it sent one,
/// otherwise "Invalid credentials". Local input errors keep their own text.
pub fn login_failure_message(err: &ApiError) -> String {
    match (err, err.server_message()) {
        (_, Some(message)) => message.to_string(),
        (ApiError::Invalid(e), None) => e.to_string(),
        _ => "Invalid credentials".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use reqwest::StatusCode;
    use serde_json::json;
    use store::{MemoryStorage, Role, ValidationError};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::backend::HttpBackend;
    use crate::gateway::Gateway;
    use crate::test_support::FakeBackend;

    #[test]
    fn test_login_failure_message() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"message":"User not found"}"#);
        assert_eq!(login_failure_message(&err), "User not found");

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"Database offline"}"#);
        assert_eq!(login_failure_message(&err), "Database offline");

        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "");
        assert_eq!(login_failure_message(&err), "Invalid credentials");
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(login_failure_message(&err), "Invalid credentials");
        assert_eq!(login_failure_message(&ApiError::MissingToken), "Invalid credentials");

        let err = ApiError::from(ValidationError::Required("email"));
        assert_eq!(login_failure_message(&err), err.to_string());
    }

    #[tokio::test]
    async fn test_login_then_profile_carries_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "T1"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("authorization", "Bearer T1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"email": "a@b.com", "role": "admin"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::restore(MemoryStorage::new());
        let backend = HttpBackend::new(Gateway::new(server.uri(), Arc::new(session.clone())));

        sign_in(&backend, &session, &Credentials::new("a@b.com", "x"))
            .await
            .unwrap();
        assert_eq!(session.current_token().as_deref(), Some("T1"));

        let profile = resolve_profile(&backend, &session).await.unwrap();
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_rejected_token_ends_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = SessionStore::restore(storage.clone());
        session.login("expired");
        let backend = HttpBackend::new(Gateway::new(server.uri(), Arc::new(session.clone())));

        let err = resolve_profile(&backend, &session).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(session.current_token().is_none());
        assert!(storage.load().is_none());
    }

    #[tokio::test]
    async fn test_bad_credentials_leave_session_empty() {
        let backend = FakeBackend::default();
        backend.fail_with(StatusCode::UNAUTHORIZED);
        let session = SessionStore::restore(MemoryStorage::new());

        let err = sign_in(&backend, &session, &Credentials::new("a@b.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::Authentication);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_blank_credentials_are_not_sent() {
        let backend = FakeBackend::default();
        let session = SessionStore::restore(MemoryStorage::new());

        let err = sign_in(&backend, &session, &Credentials::new(" ", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(ValidationError::Required("email"))));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_without_token() {
        let backend = FakeBackend::default();
        let session = SessionStore::restore(MemoryStorage::new());

        let err = sign_in(&backend, &session, &Credentials::new("a@b.com", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_with_and_without_token() {
        let session = SessionStore::restore(MemoryStorage::new());
        let creds = Credentials::new("new@b.com", "pw");

        let backend = FakeBackend::default();
        assert_eq!(
            sign_up(&backend, &session, &creds).await.unwrap(),
            Registration::LoginRequired
        );
        assert!(!session.is_authenticated());

        let backend = FakeBackend::default().with_token("T2");
        assert_eq!(
            sign_up(&backend, &session, &creds).await.unwrap(),
            Registration::SignedIn
        );
        assert_eq!(session.current_token().as_deref(), Some("T2"));

        sign_out(&session);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_plain_text_registration_reply_is_not_a_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_string("Registered"))
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::restore(MemoryStorage::new());
        let backend = HttpBackend::new(Gateway::new(server.uri(), Arc::new(session.clone())));

        let outcome = sign_up(&backend, &session, &Credentials::new("new@b.com", "pw"))
            .await
            .unwrap();
        assert_eq!(outcome, Registration::LoginRequired);
        assert!(!session.is_authenticated());
    }
}
