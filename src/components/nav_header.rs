//! Navigation Header Component
//!
//! Horizontal header with the charity name, page links and a cart badge
//! showing the number of line items.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ToastStack;
use crate::context::use_cart;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Donate,
    Projects,
    Cart,
}

impl NavLocation {
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Donate => "Donate",
            NavLocation::Projects => "Projects",
            NavLocation::Cart => "Cart",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Donate => Route::Donate {},
            NavLocation::Projects => Route::Projects {},
            NavLocation::Cart => Route::Cart {},
        }
    }

    fn from_route(route: &Route) -> Self {
        match route {
            Route::Donate {} => NavLocation::Donate,
            Route::Projects {} => NavLocation::Projects,
            Route::Cart {} => NavLocation::Cart,
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader(current: NavLocation) -> Element {
    let cart = use_cart();
    let count = cart.read().item_count();

    let locations = [NavLocation::Donate, NavLocation::Projects, NavLocation::Cart];

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-brand", to: Route::Donate {}, "Ihsan Charity" }
            nav { class: "nav-links",
                for location in locations {
                    Link {
                        key: "{location.display_name()}",
                        class: if location == current { "nav-link active" } else { "nav-link" },
                        to: location.route(),
                        "{location.display_name()}"
                        if location == NavLocation::Cart && count > 0 {
                            span { class: "cart-badge", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

/// Page layout shared by every route: header, page body and notifications.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        NavHeader { current: NavLocation::from_route(&route) }
        main { class: "page",
            Outlet::<Route> {}
        }
        ToastStack {}
    }
}
