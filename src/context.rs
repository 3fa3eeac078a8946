//! Cart context provider for the desktop app.
//!
//! Provides the [`CartStore`] and the notification feed to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_cart_provider();
//!
//! // In child components
//! let mut cart = use_cart();
//! cart.write().add_item(draft)?;
//! ```

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;
use ihsan_core::{CartConfig, CartRepository, CartStore, KvCartRepository, MemoryStore, NoticeLevel};
use tokio::sync::broadcast::error::RecvError;

/// How long a notification stays on screen
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Oldest notifications are dropped beyond this
const MAX_TOASTS: usize = 4;

/// Store type held in context.
///
/// Boxed so a memory-only fallback can stand in when the database
/// cannot be opened.
pub type DesktopStore = CartStore<Box<dyn CartRepository>>;

/// A transient notification rendered by the toast stack
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the persistent cart, falling back to memory if the database is unavailable.
pub fn open_store(data_dir: &std::path::Path, config: CartConfig) -> (DesktopStore, Option<String>) {
    let (repo, fallback): (Box<dyn CartRepository>, Option<String>) = match KvCartRepository::open_in(data_dir) {
        Ok(repo) => (Box::new(repo), None),
        Err(e) => {
            tracing::error!("Cart database unavailable, cart will not be saved: {}", e);
            (
                Box::new(KvCartRepository::new(MemoryStore::new())),
                Some(format!("Your cart cannot be saved on this device ({})", e)),
            )
        }
    };
    (CartStore::with_config(repo, config), fallback)
}

/// Install the cart store and notification feed for all descendants.
///
/// Store events are forwarded into the toast signal for as long as the
/// app runs.
pub fn use_cart_provider() {
    let (cart, startup_warning) = use_hook(|| {
        let (store, fallback) = open_store(&get_data_dir(), crate::get_cart_config());
        let warning = fallback.or_else(|| {
            store
                .restore_warning()
                .map(|reason| format!("Your saved cart could not be restored ({})", reason))
        });
        (Signal::new(store), warning)
    });
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);

    use_context_provider(|| cart);
    use_context_provider(|| toasts);

    use_hook(move || {
        let mut events = cart.peek().subscribe();
        let initial = startup_warning.clone();

        spawn(async move {
            let mut next_id = 0u64;
            if let Some(message) = initial {
                push_toast(toasts, &mut next_id, NoticeLevel::Warning, message);
            }

            loop {
                match events.recv().await {
                    Ok(event) if event.is_notice() => {
                        push_toast(toasts, &mut next_id, event.level(), event.to_string());
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!("Skipped {} cart notifications", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });
}

fn push_toast(mut toasts: Signal<Vec<Toast>>, next_id: &mut u64, level: NoticeLevel, message: String) {
    *next_id += 1;
    let id = *next_id;

    {
        let mut list = toasts.write();
        list.push(Toast { id, level, message });
        if list.len() > MAX_TOASTS {
            list.remove(0);
        }
    }

    spawn(async move {
        tokio::time::sleep(TOAST_LIFETIME).await;
        toasts.write().retain(|toast| toast.id != id);
    });
}

/// Hook to access the cart store from context.
pub fn use_cart() -> Signal<DesktopStore> {
    use_context::<Signal<DesktopStore>>()
}

/// Hook to access the visible notifications.
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}
