//! Catalog presentation: product cards, the inventory table and the search form.

use dioxus::prelude::*;
use store::models::parse_price;
use store::{SearchCriteria, Sweet, SweetId};

use crate::icons::{FaCartPlus, FaMagnifyingGlass, FaPen, FaTrash};
use crate::Icon;

/// Price as shown to shoppers, e.g. `₹950` or `₹12.50`.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{price:.0}")
    } else {
        format!("₹{price:.2}")
    }
}

fn stock_label(quantity: u32) -> String {
    match quantity {
        0 => "Out of stock".to_string(),
        n => format!("{n} in stock"),
    }
}

/// One sweet as a card. Without `on_add` the card is display-only.
#[component]
pub fn SweetCard(
    sweet: Sweet,
    #[props(default)] staged: u32,
    on_add: Option<EventHandler<SweetId>>,
) -> Element {
    let id = sweet.id.clone();
    let can_add = sweet.quantity > staged;

    rsx! {
        article {
            class: "sweet-card",
            if !sweet.image_url.is_empty() {
                img { class: "sweet-card-image", src: "{sweet.image_url}", alt: "{sweet.name}" }
            }
            div {
                class: "sweet-card-body",
                h3 { "{sweet.name}" }
                p { class: "sweet-card-meta", "{sweet.category} · {format_price(sweet.price)}" }
                p { class: "sweet-card-desc", "{sweet.description}" }
                p {
                    class: if sweet.in_stock() { "stock" } else { "stock stock-out" },
                    "{stock_label(sweet.quantity)}"
                }
                if let Some(on_add) = on_add {
                    div {
                        class: "sweet-card-actions",
                        if staged > 0 {
                            span { class: "staged", "{staged} in cart" }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: !can_add,
                            onclick: move |_| on_add.call(id.clone()),
                            Icon { icon: FaCartPlus, width: 14, height: 14 }
                            " Add"
                        }
                    }
                }
            }
        }
    }
}

/// Inventory table. Admin-only columns appear when `can_manage` is set.
#[component]
pub fn SweetTable(
    sweets: Vec<Sweet>,
    can_manage: bool,
    on_purchase: EventHandler<SweetId>,
    on_edit: EventHandler<Sweet>,
    on_delete: EventHandler<Sweet>,
    on_restock: EventHandler<Sweet>,
) -> Element {
    if sweets.is_empty() {
        return rsx! {
            p { class: "empty", "No sweets found." }
        };
    }

    rsx! {
        table {
            class: "sweet-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Category" }
                    th { "Price" }
                    th { "Stock" }
                    th { "Actions" }
                }
            }
            tbody {
                for sweet in sweets {
                    tr {
                        key: "{sweet.id}",
                        td { "{sweet.name}" }
                        td { "{sweet.category}" }
                        td { "{format_price(sweet.price)}" }
                        td { "{sweet.quantity}" }
                        td {
                            class: "row-actions",
                            button {
                                class: "btn btn-primary",
                                disabled: !sweet.in_stock(),
                                onclick: {
                                    let id = sweet.id.clone();
                                    move |_| on_purchase.call(id.clone())
                                },
                                "Purchase"
                            }
                            if can_manage {
                                button {
                                    class: "btn btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let sweet = sweet.clone();
                                        move |_| on_edit.call(sweet.clone())
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    onclick: {
                                        let sweet = sweet.clone();
                                        move |_| on_restock.call(sweet.clone())
                                    },
                                    "Restock"
                                }
                                button {
                                    class: "btn btn-danger",
                                    title: "Delete",
                                    onclick: {
                                        let sweet = sweet.clone();
                                        move |_| on_delete.call(sweet.clone())
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Build criteria from the raw form fields. Unparseable prices are left out.
pub fn criteria_from_fields(name: &str, category: &str, min: &str, max: &str) -> SearchCriteria {
    SearchCriteria {
        name: name.trim().to_string(),
        category: category.trim().to_string(),
        min_price: parse_price(min),
        max_price: parse_price(max),
    }
}

/// Search form. Submitting empty fields, or pressing reset, asks for the full catalog.
#[component]
pub fn SearchBar(on_search: EventHandler<SearchCriteria>) -> Element {
    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut min_price = use_signal(String::new);
    let mut max_price = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_search.call(criteria_from_fields(
            &name(),
            &category(),
            &min_price(),
            &max_price(),
        ));
    };

    let reset = move |_| {
        name.set(String::new());
        category.set(String::new());
        min_price.set(String::new());
        max_price.set(String::new());
        on_search.call(SearchCriteria::default());
    };

    rsx! {
        form {
            class: "search-bar",
            onsubmit: submit,
            input {
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                placeholder: "Category",
                value: category(),
                oninput: move |evt: FormEvent| category.set(evt.value()),
            }
            input {
                r#type: "number",
                placeholder: "Min price",
                value: min_price(),
                oninput: move |evt: FormEvent| min_price.set(evt.value()),
            }
            input {
                r#type: "number",
                placeholder: "Max price",
                value: max_price(),
                oninput: move |evt: FormEvent| max_price.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                " Search"
            }
            button { class: "btn btn-ghost", r#type: "button", onclick: reset, "Reset" }
        }
    }
}
