use dioxus::prelude::*;

use store::models::parse_quantity;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no question before a destructive action.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}

/// Default amount offered when restocking.
pub const DEFAULT_RESTOCK: u32 = 10;

/// Asks how many units to add to a sweet's stock.
#[component]
pub fn RestockDialog(name: String, on_confirm: EventHandler<u32>, on_close: EventHandler<()>) -> Element {
    let mut amount = use_signal(|| DEFAULT_RESTOCK.to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match parse_quantity(&amount()).filter(|q| *q > 0) {
            Some(quantity) => on_confirm.call(quantity),
            None => error.set(Some("Enter a whole number of at least 1".to_string())),
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-form",
                onsubmit: submit,
                label { r#for: "restock-amount", "Restock {name}" }
                input {
                    id: "restock-amount",
                    r#type: "number",
                    min: "1",
                    value: amount(),
                    oninput: move |evt: FormEvent| amount.set(evt.value()),
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Restock" }
                }
            }
        }
    }
}
