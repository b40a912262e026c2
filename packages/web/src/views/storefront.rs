//! Shop: catalog cards with add-to-cart and the cart panel.

use dioxus::prelude::*;
use api::sync;
use store::{Cart, CartError, Catalog, SweetId};
use ui::cart::cart_lines;
use ui::{
    notify, use_notices, use_profile, use_shop, CartPanel, NoticeLevel, SignalCell, SweetCard,
};

#[component]
pub fn Storefront() -> Element {
    let shop = use_shop();
    let profile = use_profile();
    let mut notices = use_notices();
    let catalog = use_signal(Catalog::new);
    let mut cart = use_signal(Cart::new);
    let mut pending = use_signal(|| Option::<SweetId>::None);

    use_hook(move || {
        spawn(async move {
            let shop = shop();
            if let Err(e) = sync::load_catalog(&shop.backend, &mut SignalCell(catalog)).await {
                shop.report(&mut notices, &e);
            }
        });
    });

    let on_add = move |id: SweetId| {
        let added = cart.with_mut(|cart| cart.add(&catalog.read(), &id));
        if let Err(e) = added {
            let level = match e {
                CartError::ExceedsStock { .. } => NoticeLevel::Warning,
                _ => NoticeLevel::Error,
            };
            notify(&mut notices, level, &e.to_string());
        }
    };

    let on_submit = move |id: SweetId| {
        pending.set(Some(id.clone()));
        spawn(async move {
            let shop = shop();
            let result = sync::submit_cart(
                &shop.backend,
                &mut SignalCell(catalog),
                &mut SignalCell(cart),
                &id,
            )
            .await;
            pending.set(None);
            match result {
                Ok(_) => notify(&mut notices, NoticeLevel::Success, "Purchase complete"),
                Err(e) => shop.report(&mut notices, &e),
            }
        });
    };

    let on_remove = move |id: SweetId| {
        cart.write().remove(&id);
    };

    if profile().is_none() {
        return rsx! {
            p { class: "page-status", "Loading profile..." }
        };
    }

    let sweets = catalog.read().sweets().to_vec();
    let lines = cart_lines(&cart.read(), &catalog.read());

    rsx! {
        div {
            class: "shop-layout",
            section {
                class: "sweet-grid",
                if sweets.is_empty() && catalog.read().is_loaded() {
                    p { class: "empty", "No sweets available right now." }
                }
                for sweet in sweets {
                    SweetCard {
                        key: "{sweet.id}",
                        staged: cart.read().staged(&sweet.id),
                        sweet,
                        on_add,
                    }
                }
            }
            CartPanel {
                lines,
                pending: pending(),
                on_submit,
                on_remove,
            }
        }
    }
}
