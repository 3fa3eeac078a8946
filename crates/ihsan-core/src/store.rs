//! The donation cart store.
//!
//! [`CartStore`] is the single source of truth for pledged donations. It is
//! constructed once at application start with an injected
//! [`CartRepository`] and handed to consumers by reference (or through a UI
//! context provider).
//!
//! Every mutation:
//! 1. updates the in-memory [`Cart`],
//! 2. writes the full snapshot through the repository inline,
//! 3. broadcasts a [`CartEvent`].
//!
//! A failed write never rolls back memory; it is logged and broadcast as
//! [`CartEvent::PersistenceFailed`].
//!
//! ## Example
//!
//! ```ignore
//! use ihsan_core::{CartStore, ItemDraft, KvCartRepository, MemoryStore};
//!
//! let mut store = CartStore::open(KvCartRepository::new(MemoryStore::new()));
//! store.add_item(ItemDraft::new("w1", "Well", 50.0).with_category("General"))?;
//! assert_eq!(store.compute_totals().subtotal, 50.0);
//! ```

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::cart::{AddOutcome, Cart, CartPhase, UpdateOutcome};
use crate::checkout::{self, PledgeReceipt};
use crate::config::CartConfig;
use crate::error::CartResult;
use crate::events::{CartEvent, EventReceiver};
use crate::storage::CartRepository;
use crate::totals::Totals;
use crate::types::{CartOptions, Designation, EmployerMatch, ItemDraft, LineItem, PaymentMethod};

pub struct CartStore<R> {
    cart: Cart,
    repo: R,
    config: CartConfig,
    events: broadcast::Sender<CartEvent>,
    restore_warning: Option<String>,
}

impl<R: CartRepository> CartStore<R> {
    /// Construct the store, restoring whatever the repository holds.
    pub fn open(repo: R) -> Self {
        Self::with_config(repo, CartConfig::default())
    }

    /// Construct with explicit configuration.
    ///
    /// An unreadable snapshot never blocks startup: the cart starts empty and
    /// the reason is kept in [`CartStore::restore_warning`].
    pub fn with_config(repo: R, config: CartConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        let (cart, restore_warning) = match repo.load() {
            Ok(snapshot) => {
                let cart = Cart::from_snapshot(snapshot);
                info!(items = cart.item_count(), "Restored donation cart");
                (cart, None)
            }
            Err(e) => {
                warn!(error = %e, "Starting with an empty donation cart");
                (Cart::new(), Some(e.to_string()))
            }
        };

        Self {
            cart,
            repo,
            config,
            events,
            restore_warning,
        }
    }

    /// Receive notifications for subsequent operations.
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    /// Why the persisted cart could not be restored, if it could not.
    pub fn restore_warning(&self) -> Option<&str> {
        self.restore_warning.as_deref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Line Item Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Validate a draft and add it, merging with an existing `(id, category)` row.
    pub fn add_item(&mut self, draft: ItemDraft) -> CartResult<AddOutcome> {
        let result = draft.normalize().and_then(|item| {
            let (id, category, title) = (item.id.clone(), item.category.clone(), item.title.clone());
            self.cart.add(item).map(|outcome| (outcome, id, category, title))
        });

        let (outcome, id, category, title) = match result {
            Ok(added) => added,
            Err(e) => {
                warn!(error = %e, "Rejected donation draft");
                self.emit(CartEvent::Rejected {
                    reason: e.to_string(),
                });
                return Err(e);
            }
        };

        debug!(%id, %category, ?outcome, "Added donation");
        self.persist();
        self.emit(match outcome {
            AddOutcome::Appended => CartEvent::ItemAdded { id, category, title },
            AddOutcome::Merged { amount } => CartEvent::ItemMerged {
                id,
                category,
                title,
                amount,
            },
        });
        Ok(outcome)
    }

    /// Replace an item's amount; `new_amount <= 0` removes the item.
    ///
    /// An absent item is a silent no-op and is not persisted.
    pub fn update_item_amount(&mut self, id: &str, category: &str, new_amount: f64) -> CartResult<UpdateOutcome> {
        let outcome = match self.cart.update_amount(id, category, new_amount) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(%id, %category, error = %e, "Rejected amount update");
                self.emit(CartEvent::Rejected {
                    reason: e.to_string(),
                });
                return Err(e);
            }
        };

        debug!(%id, %category, ?outcome, "Updated donation amount");
        match outcome {
            UpdateOutcome::Updated { amount } => {
                self.persist();
                self.emit(CartEvent::AmountUpdated {
                    id: id.to_string(),
                    category: category.to_string(),
                    amount,
                });
            }
            UpdateOutcome::Removed => {
                self.persist();
                self.emit(CartEvent::ItemRemoved {
                    id: id.to_string(),
                    category: category.to_string(),
                });
            }
            UpdateOutcome::NotFound => {}
        }
        Ok(outcome)
    }

    /// Remove the matching item. Absent items are a silent no-op.
    ///
    /// Returns whether an item was removed.
    pub fn remove_item(&mut self, id: &str, category: &str) -> bool {
        let removed = self.cart.remove(id, category).is_some();
        debug!(%id, %category, removed, "Remove donation");
        if removed {
            self.persist();
            self.emit(CartEvent::ItemRemoved {
                id: id.to_string(),
                category: category.to_string(),
            });
        }
        removed
    }

    /// Empty the cart and reset cover-fees, designation and employer match.
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("Cleared donation cart");
        self.persist();
        self.emit(CartEvent::Cleared);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Derived State
    // ═══════════════════════════════════════════════════════════════════════

    pub fn compute_totals(&self) -> Totals {
        self.cart.totals(&self.config.fees)
    }

    /// Number of line items (not the sum of amounts)
    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn options(&self) -> &CartOptions {
        self.cart.options()
    }

    pub fn phase(&self) -> CartPhase {
        self.cart.phase()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Option Setters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_cover_fees(&mut self, cover_fees: bool) {
        self.update_options(|options| options.cover_fees = cover_fees);
    }

    pub fn set_donation_for(&mut self, designation: Designation) {
        self.update_options(|options| options.donation_for = designation);
    }

    pub fn set_employer_match(&mut self, employer_match: EmployerMatch) {
        self.update_options(|options| options.employer_match = employer_match);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.update_options(|options| options.payment_method = method);
    }

    fn update_options(&mut self, apply: impl FnOnce(&mut CartOptions)) {
        apply(self.cart.options_mut());
        debug!(options = ?self.cart.options(), "Updated cart options");
        self.persist();
        self.emit(CartEvent::OptionsChanged);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Checkout
    // ═══════════════════════════════════════════════════════════════════════

    /// Record a pledge for the current cart and empty it.
    pub fn checkout(&mut self) -> CartResult<PledgeReceipt> {
        if let Err(e) = checkout::validate(&self.cart) {
            warn!(error = %e, "Checkout rejected");
            self.emit(CartEvent::Rejected {
                reason: e.to_string(),
            });
            return Err(e);
        }

        let receipt = PledgeReceipt::for_cart(&self.cart, &self.config.fees);
        info!(
            reference = %receipt.reference,
            items = receipt.items.len(),
            total = receipt.totals.total,
            "Recorded donation pledge"
        );

        self.cart.clear();
        self.persist();
        self.emit(CartEvent::CheckedOut {
            reference: receipt.reference.clone(),
            total: receipt.totals.total,
        });
        Ok(receipt)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.cart.snapshot()) {
            warn!(error = %e, "Donation cart kept in memory only");
            self.emit(CartEvent::PersistenceFailed {
                message: e.to_string(),
            });
        }
    }

    fn emit(&self, event: CartEvent) {
        // No receivers is fine
        let _ = self.events.send(event);
    }
}
