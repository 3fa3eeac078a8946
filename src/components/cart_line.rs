use dioxus::prelude::*;
use ihsan_core::{format_usd, LineItem};

/// One row on the Cart page with an editable amount.
///
/// Typing zero or a negative amount removes the row; unparseable input is
/// left in the field and ignored.
#[component]
pub fn CartLine(item: LineItem, on_amount: EventHandler<f64>, on_remove: EventHandler<()>) -> Element {
    let mut draft = use_signal(|| format!("{:.2}", item.amount));

    let commit = move |_| {
        if let Ok(amount) = draft.read().trim().trim_start_matches('$').parse::<f64>() {
            on_amount.call(amount);
        }
    };

    rsx! {
        div { class: "cart-line",
            if let Some(image) = item.image.clone() {
                img { class: "cart-line-image", src: "{image}", alt: "{item.title}" }
            }
            div { class: "cart-line-info",
                span { class: "cart-line-title", "{item.title}" }
                span { class: "cart-line-category", "{item.category}" }
            }
            div { class: "cart-line-amount",
                input {
                    class: "input-field",
                    r#type: "number",
                    step: "0.01",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onchange: commit,
                }
                span { class: "cart-line-total", "{format_usd(item.amount)}" }
            }
            button {
                class: "cart-line-remove",
                onclick: move |_| on_remove.call(()),
                title: "Remove",
                "\u{00D7}"
            }
        }
    }
}
