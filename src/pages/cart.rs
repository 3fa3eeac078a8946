//! Cart page - line items, checkout options and totals.
//!
//! The processing fee is always shown for card payments; it is only added to
//! the total when the donor chooses to cover it.

use dioxus::prelude::*;
use ihsan_core::{
    format_usd, CartPhase, Designation, DesignationKind, EmployerMatch, PaymentMethod, PledgeReceipt,
};

use crate::app::Route;
use crate::components::CartLine;
use crate::context::use_cart;

#[component]
pub fn Cart() -> Element {
    let mut cart = use_cart();
    let mut receipt: Signal<Option<PledgeReceipt>> = use_signal(|| None);

    let store = cart.read();
    let phase = store.phase();
    let items = store.items().to_vec();
    let totals = store.compute_totals();
    let options = store.options().clone();
    drop(store);

    let checkout = move |_| {
        // Rejections surface as toasts
        if let Ok(done) = cart.write().checkout() {
            receipt.set(Some(done));
        }
    };

    if let Some(done) = receipt() {
        let recorded_at = done.created_at.format("%Y-%m-%d %H:%M UTC").to_string();
        return rsx! {
            div { class: "receipt",
                h1 { class: "page-title", "Thank you" }
                p { class: "body-text", "Your pledge has been recorded." }
                dl { class: "receipt-details",
                    dt { "Reference" }
                    dd { "{done.reference}" }
                    dt { "Date" }
                    dd { "{recorded_at}" }
                    dt { "Items" }
                    dd { "{done.items.len()}" }
                    dt { "Payment" }
                    dd { "{done.options.payment_method.label()}" }
                    dt { "Total" }
                    dd { "{format_usd(done.totals.total)}" }
                }
                button { class: "btn-primary", onclick: move |_| receipt.set(None), "Done" }
            }
        };
    }

    if phase == CartPhase::Empty {
        return rsx! {
            div { class: "empty-cart",
                h1 { class: "page-title", "Your donation cart is empty" }
                p { class: "body-text", "Choose a giving option or a project to get started." }
                Link { class: "btn-primary", to: Route::Donate {}, "Donate" }
                Link { class: "btn-secondary", to: Route::Projects {}, "Browse Projects" }
            }
        };
    }

    rsx! {
        h1 { class: "page-title", "Your Donation Cart" }

        div { class: "cart-layout",
            section { class: "cart-items",
                for item in items {
                    CartLine {
                        key: "{item.id}-{item.category}-{item.amount}",
                        item: item.clone(),
                        on_amount: {
                            let (id, category) = (item.id.clone(), item.category.clone());
                            move |amount| {
                                let _ = cart.write().update_item_amount(&id, &category, amount);
                            }
                        },
                        on_remove: {
                            let (id, category) = (item.id.clone(), item.category.clone());
                            move |_| {
                                cart.write().remove_item(&id, &category);
                            }
                        },
                    }
                }
                button { class: "btn-secondary", onclick: move |_| cart.write().clear(), "Clear Cart" }
            }

            aside { class: "cart-summary",
                OptionsForm {}

                div { class: "totals",
                    div { class: "totals-row",
                        span { "Subtotal" }
                        span { "{format_usd(totals.subtotal)}" }
                    }
                    if options.payment_method.has_fee() {
                        div { class: if options.cover_fees { "totals-row" } else { "totals-row muted" },
                            span { "Processing fee" }
                            span { "{format_usd(totals.processing_fee)}" }
                        }
                    }
                    div { class: "totals-row total",
                        span { "Total" }
                        span { "{format_usd(totals.total)}" }
                    }
                }

                button { class: "btn-primary btn-checkout", onclick: checkout, "Pledge {format_usd(totals.total)}" }
            }
        }
    }
}

/// Cover-fees, payment method, designation and employer match controls.
#[component]
fn OptionsForm() -> Element {
    let mut cart = use_cart();
    let options = cart.read().options().clone();

    let designation_kinds = [
        (DesignationKind::Personal, "Myself"),
        (DesignationKind::OnBehalfOf, "On behalf of"),
        (DesignationKind::InMemoryOf, "In memory of"),
    ];
    let methods = [PaymentMethod::Card, PaymentMethod::BankTransfer];

    let donation_for = options.donation_for.clone();
    let employer = options.employer_match.clone();

    rsx! {
        div { class: "options-form",
            label { class: "option-row",
                input {
                    r#type: "checkbox",
                    checked: options.cover_fees,
                    onchange: move |e| cart.write().set_cover_fees(e.checked()),
                }
                "Cover processing fees"
            }

            fieldset { class: "option-group",
                legend { "Payment method" }
                for method in methods {
                    label { key: "{method}", class: "option-row",
                        input {
                            r#type: "radio",
                            name: "payment-method",
                            checked: options.payment_method == method,
                            onchange: move |_| cart.write().set_payment_method(method),
                        }
                        "{method.label()}"
                    }
                }
            }

            fieldset { class: "option-group",
                legend { "This donation is for" }
                select {
                    class: "input-field",
                    value: "{donation_for.kind}",
                    onchange: {
                        let name = donation_for.name.clone();
                        move |e: FormEvent| {
                            if let Ok(kind) = e.value().parse::<DesignationKind>() {
                                cart.write().set_donation_for(Designation { kind, name: name.clone() });
                            }
                        }
                    },
                    for (kind, label) in designation_kinds {
                        option { key: "{kind}", value: "{kind}", selected: donation_for.kind == kind, "{label}" }
                    }
                }
                if donation_for.kind != DesignationKind::Personal {
                    input {
                        class: "input-field",
                        placeholder: "Name",
                        value: "{donation_for.name}",
                        onchange: move |e: FormEvent| {
                            cart.write().set_donation_for(Designation { kind: donation_for.kind, name: e.value() });
                        },
                    }
                }
            }

            fieldset { class: "option-group",
                legend { "Employer match" }
                label { class: "option-row",
                    input {
                        r#type: "checkbox",
                        checked: employer.enabled,
                        onchange: {
                            let employer = employer.clone();
                            move |e: FormEvent| {
                                let updated = EmployerMatch { enabled: e.checked(), ..employer.clone() };
                                cart.write().set_employer_match(updated);
                            }
                        },
                    }
                    "My employer matches gifts"
                }
                if employer.enabled {
                    input {
                        class: "input-field",
                        placeholder: "Company name",
                        value: "{employer.company_name}",
                        onchange: {
                            let employer = employer.clone();
                            move |e: FormEvent| {
                                let updated = EmployerMatch { company_name: e.value(), ..employer.clone() };
                                cart.write().set_employer_match(updated);
                            }
                        },
                    }
                    input {
                        class: "input-field",
                        r#type: "email",
                        placeholder: "HR contact email",
                        value: "{employer.contact_email}",
                        onchange: {
                            let employer = employer.clone();
                            move |e: FormEvent| {
                                let updated = EmployerMatch { contact_email: e.value(), ..employer.clone() };
                                cart.write().set_employer_match(updated);
                            }
                        },
                    }
                }
            }
        }
    }
}
