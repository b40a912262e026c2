//! Registration page view with email/password form.

use dioxus::prelude::*;
use api::Registration;
use store::Credentials;
use ui::{notify, use_notices, use_shop, NoticeLevel};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let shop = use_shop();
    let nav = use_navigator();
    let mut notices = use_notices();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let credentials = Credentials::new(email(), password());
            let ui::Shop { session, backend } = shop();
            match api::sign_up(&backend, &session, &credentials).await {
                Ok(Registration::SignedIn) => {
                    notify(&mut notices, NoticeLevel::Success, "Registration successful");
                    nav.replace(Route::Dashboard {});
                }
                Ok(Registration::LoginRequired) => {
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        "Registration successful. Please log in.",
                    );
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create Account" }
            p { class: "auth-subtitle", "Join us for fresh mithai and festive offers." }

            form {
                class: "auth-form",
                onsubmit: handle_register,

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
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    autocomplete: "new-password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
