//! Projects page - fundraising projects with a category filter.

use dioxus::prelude::*;
use ihsan_core::catalog::{self, Project, DEFAULT_PROJECT_AMOUNT};

use crate::components::AmountPicker;
use crate::context::use_cart;

const PROJECT_PRESETS: [u32; 4] = [25, 50, 100, 250];

#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(|| "all".to_string());

    let mut categories = vec!["all"];
    categories.extend(catalog::categories());
    let visible = catalog::projects_in(&filter.read());

    rsx! {
        h1 { class: "page-title", "Projects" }

        div { class: "category-filter",
            for category in categories {
                button {
                    key: "{category}",
                    class: if *filter.read() == category { "filter-btn active" } else { "filter-btn" },
                    onclick: move |_| filter.set(category.to_string()),
                    "{category}"
                }
            }
        }

        div { class: "project-grid",
            for project in visible {
                ProjectCard { key: "{project.id}", project: *project }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let mut cart = use_cart();
    let mut amount = use_signal(|| DEFAULT_PROJECT_AMOUNT);
    let progress = project.progress_percent().min(100);

    let add = move |_| {
        let _ = cart.write().add_item(project.draft(amount()));
    };

    rsx! {
        div { class: if project.featured { "project-card featured" } else { "project-card" },
            img { class: "project-image", src: "{project.image}", alt: "{project.title}" }
            div { class: "project-body",
                span { class: "card-category", "{project.category}" }
                h2 { class: "card-title", "{project.title}" }
                p { class: "body-text", "{project.description}" }
                div { class: "progress",
                    div { class: "progress-bar", style: "width: {progress}%;" }
                }
                p { class: "progress-label",
                    "${project.raised} raised of ${project.goal} ({project.progress_percent()}%)"
                }
                AmountPicker {
                    presets: PROJECT_PRESETS.to_vec(),
                    selected: amount(),
                    on_change: move |value| amount.set(value),
                }
                button { class: "btn-primary", onclick: add, "Add to Cart" }
            }
        }
    }
}
