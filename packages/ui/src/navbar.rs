use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaCandyCane, FaCartShopping, FaRightFromBracket};
use crate::Icon;

/// Top bar with the links that make sense for the current session.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();

    rsx! {
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                Icon { icon: FaCandyCane, width: 18, height: 18 }
                span { "Sweet Shop" }
            }
            div {
                class: "navbar-links",
                if auth().signed_in {
                    Link { to: "/dashboard", "Dashboard" }
                    Link {
                        to: "/shop",
                        Icon { icon: FaCartShopping, width: 14, height: 14 }
                        " Shop"
                    }
                    Link {
                        to: "/logout",
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        " Logout"
                    }
                } else {
                    Link { to: "/login", "Login" }
                    Link { class: "navbar-cta", to: "/register", "Register" }
                }
            }
        }
    }
}
