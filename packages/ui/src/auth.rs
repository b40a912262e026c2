//! Session context and hooks for the UI.
//!
//! [`ShopProvider`] builds one [`Shop`] (session store plus HTTP backend) for
//! the whole app and mirrors the session into a [`Signal<AuthState>`] so
//! components re-render on every login and logout.

use std::sync::Arc;

use api::{ApiError, FailureKind, Gateway, HttpBackend};
use dioxus::prelude::*;
use store::{Profile, SessionStore, ShopConfig};

use crate::guard::LOGIN_PATH;
use crate::notify::{notify, use_notices, NoticeLevel, Notices};
use crate::storage::{make_storage, ShopStorage};

pub type ShopSession = SessionStore<ShopStorage>;

/// Everything a view needs to talk to the backend.
#[derive(Clone, Debug)]
pub struct Shop {
    pub session: ShopSession,
    pub backend: HttpBackend,
}

impl Shop {
    pub fn new(config: &ShopConfig) -> Self {
        let session = SessionStore::restore(make_storage(config));
        let gateway = Gateway::from_config(config, Arc::new(session.clone()));
        tracing::debug!(base_url = gateway.base_url(), "shop backend configured");
        Self {
            session,
            backend: HttpBackend::new(gateway),
        }
    }

    /// Surface a failed action. Authentication failures also end the session,
    /// which sends any guarded view back to login.
    pub fn report(&self, notices: &mut Signal<Notices>, err: &ApiError) {
        let kind = err.kind();
        notify(notices, NoticeLevel::for_failure(kind), &err.user_message());
        if kind == FailureKind::Authentication && self.session.is_authenticated() {
            api::sign_out(&self.session);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuthState {
    pub signed_in: bool,
}

pub fn use_shop() -> Signal<Shop> {
    use_context::<Signal<Shop>>()
}

/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Wrap the app with this component to provide the shop context.
#[component]
pub fn ShopProvider(config: ShopConfig, children: Element) -> Element {
    let shop = use_context_provider(|| Signal::new(Shop::new(&config)));
    let mut auth_state = use_context_provider(|| {
        Signal::new(AuthState {
            signed_in: shop.peek().session.is_authenticated(),
        })
    });
    use_context_provider(|| Signal::new(Notices::default()));

    use_hook(move || {
        let mut changes = shop.peek().session.subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                let signed_in = changes.borrow_and_update().is_some();
                auth_state.set(AuthState { signed_in });
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Resolve the signed-in profile once for the calling view.
///
/// On any failure the session has already been cleared by
/// [`api::resolve_profile`]; the view is sent to login.
pub fn use_profile() -> Signal<Option<Profile>> {
    let shop = use_shop();
    let nav = use_navigator();
    let mut notices = use_notices();
    let mut profile = use_signal(|| None);

    use_hook(move || {
        spawn(async move {
            let Shop { session, backend } = shop();
            match api::resolve_profile(&backend, &session).await {
                Ok(p) => profile.set(Some(p)),
                Err(ApiError::SignedOut) => {
                    nav.replace(LOGIN_PATH);
                }
                Err(e) => {
                    notify(&mut notices, NoticeLevel::Error, &e.user_message());
                    nav.replace(LOGIN_PATH);
                }
            }
        });
    });

    profile
}
