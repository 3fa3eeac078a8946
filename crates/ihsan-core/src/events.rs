//! Cart notifications for consumers.
//!
//! The store never surfaces failures by panicking into UI code. Instead every
//! mutation, rejection and persistence failure is broadcast as a
//! [`CartEvent`] which pages render as transient notifications.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CartEvent                                               │
//! │  ├── ItemAdded / ItemMerged: draft accepted              │
//! │  ├── AmountUpdated / ItemRemoved / Cleared               │
//! │  ├── OptionsChanged: checkout option setter called       │
//! │  ├── Rejected: draft or checkout refused, no change      │
//! │  ├── PersistenceFailed: memory kept, write lost          │
//! │  └── CheckedOut: pledge recorded, cart emptied           │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::totals::format_usd;

/// Receiving end handed out by [`crate::store::CartStore::subscribe`]
pub type EventReceiver = tokio::sync::broadcast::Receiver<CartEvent>;

/// Severity used when rendering a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded {
        id: String,
        category: String,
        title: String,
    },
    ItemMerged {
        id: String,
        category: String,
        title: String,
        amount: f64,
    },
    AmountUpdated {
        id: String,
        category: String,
        amount: f64,
    },
    ItemRemoved {
        id: String,
        category: String,
    },
    Cleared,
    OptionsChanged,
    Rejected {
        reason: String,
    },
    PersistenceFailed {
        message: String,
    },
    CheckedOut {
        reference: String,
        total: f64,
    },
}

impl CartEvent {
    pub fn level(&self) -> NoticeLevel {
        match self {
            CartEvent::ItemAdded { .. } | CartEvent::ItemMerged { .. } | CartEvent::CheckedOut { .. } => {
                NoticeLevel::Success
            }
            CartEvent::Rejected { .. } | CartEvent::PersistenceFailed { .. } => NoticeLevel::Warning,
            _ => NoticeLevel::Info,
        }
    }

    /// Whether the event deserves a visible notification
    pub fn is_notice(&self) -> bool {
        !matches!(self, CartEvent::OptionsChanged | CartEvent::AmountUpdated { .. })
    }
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartEvent::ItemAdded { title, .. } => write!(f, "{} added to your donation cart", title),
            CartEvent::ItemMerged { title, amount, .. } => {
                write!(f, "{} updated to {} in your donation cart", title, format_usd(*amount))
            }
            CartEvent::AmountUpdated { id, amount, .. } => {
                write!(f, "Donation {} set to {}", id, format_usd(*amount))
            }
            CartEvent::ItemRemoved { .. } => write!(f, "Item removed from donation cart"),
            CartEvent::Cleared => write!(f, "Donation cart cleared"),
            CartEvent::OptionsChanged => write!(f, "Donation options updated"),
            CartEvent::Rejected { reason } => write!(f, "Could not update donation cart: {}", reason),
            CartEvent::PersistenceFailed { message } => {
                write!(f, "Your cart could not be saved and may be lost on reload ({})", message)
            }
            CartEvent::CheckedOut { reference, total } => {
                write!(f, "Thank you! Pledge {} for {} recorded", reference, format_usd(*total))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        let added = CartEvent::ItemAdded {
            id: "w1".to_string(),
            category: "General".to_string(),
            title: "Water Well".to_string(),
        };
        assert_eq!(added.to_string(), "Water Well added to your donation cart");
        assert_eq!(added.level(), NoticeLevel::Success);
        assert_eq!(CartEvent::Cleared.to_string(), "Donation cart cleared");
    }

    #[test]
    fn test_warning_levels() {
        let failed = CartEvent::PersistenceFailed {
            message: "disk full".to_string(),
        };
        assert_eq!(failed.level(), NoticeLevel::Warning);
        assert!(failed.is_notice());
        assert!(!CartEvent::OptionsChanged.is_notice());
    }
}
