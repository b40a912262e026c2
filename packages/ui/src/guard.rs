//! Route guard for views that need a signed-in user.
//!
//! The decision itself is a pure function of the view's [`Access`] and
//! whether a token is present, re-evaluated on every render. [`Guarded`]
//! applies it: protected content renders only with a token, otherwise the
//! history entry is replaced with [`LOGIN_PATH`] so "back" cannot return to
//! the blocked view.

use dioxus::prelude::*;

use crate::auth::use_auth;

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

pub fn decide(access: Access, signed_in: bool) -> GuardDecision {
    match (access, signed_in) {
        (Access::Protected, false) => GuardDecision::RedirectToLogin,
        _ => GuardDecision::Render,
    }
}

/// Renders `children` when `access` allows it for the current session.
#[component]
pub fn Guarded(access: Access, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Runs again whenever the session or the target's access changes, so a
    // logout anywhere bounces the view.
    use_effect(use_reactive!(|(access,)| {
        if decide(access, auth().signed_in) == GuardDecision::RedirectToLogin {
            tracing::debug!("redirecting to login");
            nav.replace(LOGIN_PATH);
        }
    }));

    match decide(access, auth().signed_in) {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::RedirectToLogin => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_needs_token() {
        assert_eq!(decide(Access::Protected, false), GuardDecision::RedirectToLogin);
        assert_eq!(decide(Access::Protected, true), GuardDecision::Render);
    }

    #[test]
    fn test_public_always_renders() {
        assert_eq!(decide(Access::Public, false), GuardDecision::Render);
        assert_eq!(decide(Access::Public, true), GuardDecision::Render);
    }
}
