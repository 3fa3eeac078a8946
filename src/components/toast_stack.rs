use dioxus::prelude::*;
use ihsan_core::NoticeLevel;

use crate::context::use_toasts;

/// Transient cart notifications, newest last. Click to dismiss.
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Info => "toast toast-info",
                        NoticeLevel::Warning => "toast toast-warning",
                    },
                    onclick: move |_| toasts.write().retain(|t| t.id != toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
