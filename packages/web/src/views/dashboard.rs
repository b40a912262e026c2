//! Dashboard: profile greeting, catalog search and inventory management.

use dioxus::prelude::*;
use api::sync;
use store::{Capability, Catalog, SearchCriteria, Sweet, SweetDraft, SweetId};
use ui::{
    notify, use_notices, use_profile, use_shop, ConfirmDialog, ModalOverlay, NoticeLevel,
    RestockDialog, SearchBar, SignalCell, SweetForm, SweetTable,
};

/// Which admin dialog is open.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Create,
    Edit(Sweet),
    Delete(Sweet),
    Restock(Sweet),
}

#[component]
pub fn Dashboard() -> Element {
    let shop = use_shop();
    let profile = use_profile();
    let mut notices = use_notices();
    let catalog = use_signal(Catalog::new);
    let mut dialog = use_signal(|| Option::<Dialog>::None);
    let mut saving = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            let shop = shop();
            if let Err(e) = sync::load_catalog(&shop.backend, &mut SignalCell(catalog)).await {
                shop.report(&mut notices, &e);
            }
        });
    });

    let on_search = move |criteria: SearchCriteria| {
        spawn(async move {
            let shop = shop();
            if let Err(e) =
                sync::search_catalog(&shop.backend, &mut SignalCell(catalog), criteria).await
            {
                shop.report(&mut notices, &e);
            }
        });
    };

    let on_purchase = move |id: SweetId| {
        spawn(async move {
            let shop = shop();
            match sync::purchase(&shop.backend, &mut SignalCell(catalog), &id, 1).await {
                Ok(_) => notify(&mut notices, NoticeLevel::Success, "Purchased successfully"),
                Err(e) => shop.report(&mut notices, &e),
            }
        });
    };

    let on_save = move |draft: SweetDraft| {
        let Some(current) = dialog() else { return };
        spawn(async move {
            saving.set(true);
            let shop = shop();
            let mut cell = SignalCell(catalog);
            let result = match &current {
                Dialog::Edit(sweet) => sync::update_sweet(&shop.backend, &mut cell, &sweet.id, &draft)
                    .await
                    .map(|_| "Sweet updated"),
                _ => sync::create_sweet(&shop.backend, &mut cell, &draft)
                    .await
                    .map(|_| "Sweet added"),
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    notify(&mut notices, NoticeLevel::Success, message);
                    dialog.set(None);
                }
                Err(e) => shop.report(&mut notices, &e),
            }
        });
    };

    let mut on_delete = move |sweet: Sweet| {
        dialog.set(None);
        spawn(async move {
            let shop = shop();
            match sync::delete_sweet(&shop.backend, &mut SignalCell(catalog), &sweet.id).await {
                Ok(()) => notify(&mut notices, NoticeLevel::Success, "Sweet deleted"),
                Err(e) => shop.report(&mut notices, &e),
            }
        });
    };

    let mut on_restock = move |(sweet, quantity): (Sweet, u32)| {
        dialog.set(None);
        spawn(async move {
            let shop = shop();
            match sync::restock(&shop.backend, &mut SignalCell(catalog), &sweet.id, quantity).await {
                Ok(_) => notify(
                    &mut notices,
                    NoticeLevel::Success,
                    &format!("Restocked {} by {quantity}", sweet.name),
                ),
                Err(e) => shop.report(&mut notices, &e),
            }
        });
    };

    let Some(me) = profile() else {
        return rsx! {
            p { class: "page-status", "Loading profile..." }
        };
    };
    let can_manage = me.can(Capability::ManageInventory);
    let sweets = catalog.read().sweets().to_vec();
    let searching = catalog.read().is_searching();

    rsx! {
        section {
            class: "dashboard-header",
            h1 { "Welcome, {me.email}" }
            span { class: "role-badge", "{me.role}" }
            if can_manage {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| dialog.set(Some(Dialog::Create)),
                    "Add sweet"
                }
            }
        }

        SearchBar { on_search }
        if searching {
            p { class: "page-status", "Showing search results." }
        }

        SweetTable {
            sweets,
            can_manage,
            on_purchase,
            on_edit: move |sweet| dialog.set(Some(Dialog::Edit(sweet))),
            on_delete: move |sweet| dialog.set(Some(Dialog::Delete(sweet))),
            on_restock: move |sweet| dialog.set(Some(Dialog::Restock(sweet))),
        }

        match dialog() {
            None => rsx! {},
            Some(Dialog::Create) => rsx! {
                ModalOverlay {
                    on_close: move |_| dialog.set(None),
                    SweetForm {
                        saving: saving(),
                        on_save,
                        on_cancel: move |_| dialog.set(None),
                    }
                }
            },
            Some(Dialog::Edit(sweet)) => rsx! {
                ModalOverlay {
                    on_close: move |_| dialog.set(None),
                    SweetForm {
                        key: "{sweet.id}",
                        editing: sweet.clone(),
                        saving: saving(),
                        on_save,
                        on_cancel: move |_| dialog.set(None),
                    }
                }
            },
            Some(Dialog::Delete(sweet)) => rsx! {
                ConfirmDialog {
                    message: format!("Delete {}? This cannot be undone.", sweet.name),
                    on_confirm: move |_| on_delete(sweet.clone()),
                    on_close: move |_| dialog.set(None),
                }
            },
            Some(Dialog::Restock(sweet)) => rsx! {
                RestockDialog {
                    name: sweet.name.clone(),
                    on_confirm: move |quantity| on_restock((sweet.clone(), quantity)),
                    on_close: move |_| dialog.set(None),
                }
            },
        }
    }
}
