//! Preset buttons plus a custom amount field.

use dioxus::prelude::*;
use ihsan_core::{format_usd, validate_amount, DraftAmount};

/// Amount selector used by the Donate and Projects pages.
///
/// # Props
///
/// * `presets` - Whole-dollar amounts offered as buttons
/// * `selected` - Currently chosen amount
/// * `on_change` - Called with every valid amount the user picks or types
#[component]
pub fn AmountPicker(presets: Vec<u32>, selected: f64, on_change: EventHandler<f64>) -> Element {
    let mut custom = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    let on_custom = move |e: FormEvent| {
        let raw = e.value();
        let parsed = DraftAmount::Text(raw.clone())
            .parse()
            .filter(|amount| validate_amount(*amount).is_ok());
        invalid.set(!raw.trim().is_empty() && parsed.is_none());
        if let Some(amount) = parsed {
            on_change.call(amount);
        }
        custom.set(raw);
    };

    rsx! {
        div { class: "amount-picker",
            div { class: "amount-presets",
                for preset in presets {
                    button {
                        key: "{preset}",
                        class: if f64::from(preset) == selected { "amount-btn selected" } else { "amount-btn" },
                        onclick: move |_| {
                            custom.set(String::new());
                            invalid.set(false);
                            on_change.call(f64::from(preset));
                        },
                        "${preset}"
                    }
                }
            }
            input {
                class: if invalid() { "input-field invalid" } else { "input-field" },
                placeholder: "Custom amount",
                value: "{custom}",
                oninput: on_custom,
            }
            if !custom.read().is_empty() && !invalid() {
                span { class: "amount-echo", "{format_usd(selected)}" }
            }
        }
    }
}
