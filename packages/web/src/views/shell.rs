use dioxus::prelude::*;
use ui::{Guarded, Navbar};

use crate::Route;

/// Root layout: applies the target route's access rule.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    rsx! {
        Guarded {
            access: route.access(),
            Outlet::<Route> {}
        }
    }
}

/// Navbar and page frame for the signed-in views.
#[component]
pub fn Frame() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
