use dioxus::prelude::*;

use crate::components::Shell;
use crate::context::use_cart_provider;
use crate::pages::{Cart, Donate, Projects};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Quick giving options (Zakat, Sadaqah, ...)
/// - `/projects` - Fundraising projects with category filter
/// - `/cart` - Line items, checkout options and totals
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Donate {},
        #[route("/projects")]
        Projects {},
        #[route("/cart")]
        Cart {},
}

/// Root application component.
///
/// Provides global styles, the cart store context, and routing.
#[component]
pub fn App() -> Element {
    use_cart_provider();

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
