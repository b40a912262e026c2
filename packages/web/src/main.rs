use dioxus::prelude::*;

use store::ShopConfig;
use ui::{Access, NoticeTray, ShopProvider};
use views::{Dashboard, Frame, Home, Login, Logout, Register, Shell, Storefront};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/home")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/logout")]
        Logout {},
        #[layout(Frame)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/shop")]
            Storefront {},
}

impl Route {
    /// Whether the route needs a signed-in user.
    fn access(&self) -> Access {
        match self {
            Route::Dashboard {} | Route::Storefront {} => Access::Protected,
            Route::Home {}
            | Route::Landing {}
            | Route::Login {}
            | Route::Register {}
            | Route::Logout {} => Access::Public,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; see `store::config` for the format.
const SHOP_TOML: &str = include_str!("../shop.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ShopConfig::from_toml_or_default(SHOP_TOML));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ShopProvider {
            config,
            Router::<Route> {}
            NoticeTray {}
        }
    }
}

/// `/home` shows the same landing page as `/`.
#[component]
fn Landing() -> Element {
    rsx! { Home {} }
}
