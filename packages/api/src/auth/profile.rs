//! Profile resolution for protected views.
//!
//! Called once when a protected view mounts. A failed `/api/auth/me` is the
//! only place an invalid token is noticed, so any failure ends the session;
//! the caller then sends the user to the login view.

use store::{Profile, SessionStore, TokenStorage};

use crate::backend::Backend;
use crate::error::ApiError;

pub async fn resolve_profile<B: Backend, S: TokenStorage>(
    backend: &B,
    session: &SessionStore<S>,
) -> Result<Profile, ApiError> {
    if !session.is_authenticated() {
        return Err(ApiError::SignedOut);
    }
    match backend.me().await {
        Ok(profile) => Ok(profile),
        Err(e) => {
            tracing::warn!("Profile fetch failed, ending session: {}", e);
            session.logout();
            Err(e)
        }
    }
}
