//! Login page view with email/password form.

use dioxus::prelude::*;
use store::Credentials;
use ui::{notify, use_auth, use_notices, use_shop, NoticeLevel};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let shop = use_shop();
    let auth = use_auth();
    let nav = use_navigator();
    let mut notices = use_notices();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here.
    use_effect(move || {
        if auth().signed_in && !loading() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let credentials = Credentials::new(email(), password());
            let ui::Shop { session, backend } = shop();
            match api::sign_in(&backend, &session, &credentials).await {
                Ok(()) => {
                    notify(&mut notices, NoticeLevel::Success, "Login successful");
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(api::login_failure_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Welcome Back" }
            p { class: "auth-subtitle", "Please enter your details to sign in." }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email address",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
