//! Public landing page with the bestseller list.

use dioxus::prelude::*;
use api::Backend;
use ui::{use_shop, Navbar, SweetCard};

/// How many sweets the landing page shows.
const BESTSELLERS: usize = 8;

#[component]
pub fn Home() -> Element {
    let shop = use_shop();

    let sweets = use_resource(move || async move {
        let backend = shop.peek().backend.clone();
        backend.list_sweets().await
    });

    rsx! {
        Navbar {}
        header {
            class: "hero",
            h1 { "Taste the Tradition" }
            p { "Handcrafted mithai, made fresh every day." }
            Link { class: "btn btn-primary", to: "/shop", "Shop now" }
        }
        section {
            class: "page",
            id: "collections",
            h2 { "Bestselling Delicacies" }
            match &*sweets.read() {
                None => rsx! { p { class: "page-status", "Loading sweets..." } },
                Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
                Some(Ok(list)) if list.is_empty() => rsx! { p { class: "empty", "No sweets yet." } },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "sweet-grid",
                        for sweet in list.iter().take(BESTSELLERS).cloned() {
                            SweetCard { key: "{sweet.id}", sweet }
                        }
                    }
                },
            }
        }
    }
}
