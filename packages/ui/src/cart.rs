//! Cart panel for the shop view.

use dioxus::prelude::*;
use store::{Cart, Catalog, SweetId};

use crate::catalog::format_price;
use crate::icons::{FaCartShopping, FaTrash};
use crate::Icon;

/// One staged entry joined with what the catalog last said about it.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub id: SweetId,
    pub name: String,
    pub price: f64,
    pub staged: u32,
    pub available: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.staged)
    }
}

/// Lines for every staged entry. Entries the catalog no longer lists keep
/// their id as name and show no stock.
pub fn cart_lines(cart: &Cart, catalog: &Catalog) -> Vec<CartLine> {
    cart.entries()
        .map(|(id, staged)| match catalog.get(id) {
            Some(sweet) => CartLine {
                id: id.clone(),
                name: sweet.name.clone(),
                price: sweet.price,
                staged,
                available: sweet.quantity,
            },
            None => CartLine {
                id: id.clone(),
                name: id.to_string(),
                price: 0.0,
                staged,
                available: 0,
            },
        })
        .collect()
}

pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::subtotal).sum()
}

#[component]
pub fn CartPanel(
    lines: Vec<CartLine>,
    /// Id of the entry whose purchase is in flight, if any.
    #[props(!optional)]
    pending: Option<SweetId>,
    on_submit: EventHandler<SweetId>,
    on_remove: EventHandler<SweetId>,
) -> Element {
    let units: u32 = lines.iter().map(|l| l.staged).sum();
    let total = format_price(cart_total(&lines));

    rsx! {
        aside {
            class: "cart-panel",
            h2 {
                Icon { icon: FaCartShopping, width: 16, height: 16 }
                " Cart ({units})"
            }
            if lines.is_empty() {
                p { class: "empty", "Your cart is empty." }
            }
            ul {
                for line in lines {
                    li {
                        key: "{line.id}",
                        class: if line.staged > line.available { "cart-line cart-line-short" } else { "cart-line" },
                        span { class: "cart-line-name", "{line.name}" }
                        span { class: "cart-line-qty", "× {line.staged}" }
                        span { class: "cart-line-price", "{format_price(line.subtotal())}" }
                        button {
                            class: "btn btn-primary",
                            disabled: pending.is_some(),
                            onclick: {
                                let id = line.id.clone();
                                move |_| on_submit.call(id.clone())
                            },
                            if pending.as_ref() == Some(&line.id) { "Buying..." } else { "Buy" }
                        }
                        button {
                            class: "btn btn-ghost",
                            title: "Remove",
                            onclick: {
                                let id = line.id.clone();
                                move |_| on_remove.call(id.clone())
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                        }
                    }
                }
            }
            if units > 0 {
                p { class: "cart-total", "Total: {total}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Sweet;

    fn sweet(id: i64, price: f64, quantity: u32) -> Sweet {
        Sweet {
            id: SweetId::from(id),
            name: format!("Sweet {id}"),
            category: "Mithai".into(),
            price,
            quantity,
            image_url: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_lines_and_total() {
        let catalog = Catalog::from_sweets(vec![sweet(1, 10.0, 5), sweet(2, 2.5, 1)]);
        let mut cart = Cart::new();
        cart.add(&catalog, &SweetId::from(1)).unwrap();
        cart.add(&catalog, &SweetId::from(1)).unwrap();
        cart.add(&catalog, &SweetId::from(2)).unwrap();

        let lines = cart_lines(&cart, &catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Sweet 1");
        assert_eq!(lines[0].staged, 2);
        assert_eq!(cart_total(&lines), 22.5);
    }
}
