//! Donate page - quick giving options.
//!
//! Each option (one-time, monthly, Zakat, Sadaqah, Qurbani) adds a line item
//! with a freshly minted id, so repeated gifts stay separate rows.

use dioxus::prelude::*;
use ihsan_core::catalog::{demo_drafts, GivingOption};
use ihsan_core::format_usd;

use crate::app::Route;
use crate::components::AmountPicker;
use crate::context::use_cart;

#[component]
pub fn Donate() -> Element {
    let mut cart = use_cart();

    let add_demo = move |_| {
        for draft in demo_drafts() {
            // Rejections surface as toasts
            let _ = cart.write().add_item(draft);
        }
    };

    rsx! {
        section { class: "hero",
            h1 { class: "page-title", "Give with Ihsan" }
            p { class: "tagline", "Build your donation cart and pledge once." }
        }

        div { class: "giving-grid",
            for option in GivingOption::ALL {
                GivingCard { key: "{option.category()}", option }
            }
        }

        div { class: "page-actions",
            button { class: "btn-secondary", onclick: add_demo, "Add Demo Items" }
            Link { class: "btn-primary", to: Route::Cart {}, "Review Cart" }
        }
    }
}

#[component]
fn GivingCard(option: GivingOption) -> Element {
    let mut cart = use_cart();
    let presets = option.presets().to_vec();
    let first = presets.first().copied().map(f64::from).unwrap_or(0.0);
    let mut amount = use_signal(|| first);

    let add = move |_| {
        let _ = cart.write().add_item(option.draft(amount()));
    };

    rsx! {
        div { class: "giving-card",
            h2 { class: "card-title", "{option.title()}" }
            span { class: "card-category", "{option.category()}" }
            AmountPicker {
                presets,
                selected: amount(),
                on_change: move |value| amount.set(value),
            }
            button {
                class: "btn-primary",
                disabled: amount() <= 0.0,
                onclick: add,
                "Add {format_usd(amount())} to Cart"
            }
        }
    }
}
