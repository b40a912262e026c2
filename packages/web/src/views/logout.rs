use dioxus::prelude::*;
use ui::{use_shop, LOGIN_PATH};

/// Ends the session on mount and replaces history with the login view.
#[component]
pub fn Logout() -> Element {
    let shop = use_shop();
    let nav = use_navigator();

    use_hook(move || {
        api::sign_out(&shop.peek().session);
        nav.replace(LOGIN_PATH);
    });

    rsx! {
        p { class: "page-status", "Signing out..." }
    }
}
