//! In-memory donation cart state.
//!
//! [`Cart`] holds the line items and checkout options and enforces the merge
//! invariant: at most one line item per `(id, category)` pair. It performs no
//! I/O; [`crate::store::CartStore`] layers persistence and notifications on
//! top of it.

use crate::error::{CartError, CartResult};
use crate::totals::{FeeSchedule, Totals};
use crate::types::{validate_amount, CartOptions, LineItem};

/// Observable phase of the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
    Empty,
    Populated,
}

/// What `add` did with an incoming item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOutcome {
    /// A new row was appended
    Appended,
    /// An existing row absorbed the amount; carries the new amount
    Merged { amount: f64 },
}

/// What `update_amount` did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Updated { amount: f64 },
    /// The new amount was not positive so the row was removed
    Removed,
    NotFound,
}

/// Persistable view of a cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub options: CartOptions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    options: CartOptions,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a snapshot, merging rows that share a key.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let mut cart = Self {
            items: Vec::with_capacity(snapshot.items.len()),
            options: snapshot.options,
        };
        for item in snapshot.items {
            if let Err(e) = cart.add(item) {
                tracing::warn!(error = %e, "Dropping restored line item");
            }
        }
        cart
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            options: self.options.clone(),
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn options(&self) -> &CartOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CartOptions {
        &mut self.options
    }

    pub fn get(&self, id: &str, category: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.matches(id, category))
    }

    fn position(&self, id: &str, category: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches(id, category))
    }

    /// Add a validated item, merging into an existing row with the same key.
    ///
    /// Fails only if the merged amount would stop being finite.
    pub fn add(&mut self, item: LineItem) -> CartResult<AddOutcome> {
        validate_amount(item.amount)?;

        match self.position(&item.id, &item.category) {
            Some(index) => {
                let merged = self.items[index].amount + item.amount;
                if !merged.is_finite() {
                    return Err(CartError::InvalidItem(format!(
                        "merged amount for '{}' overflows",
                        item.id
                    )));
                }
                self.items[index].amount = merged;
                Ok(AddOutcome::Merged { amount: merged })
            }
            None => {
                self.items.push(item);
                Ok(AddOutcome::Appended)
            }
        }
    }

    /// Replace the amount of the matching row; `amount <= 0` removes it.
    pub fn update_amount(&mut self, id: &str, category: &str, amount: f64) -> CartResult<UpdateOutcome> {
        if amount.is_nan() || amount.is_infinite() {
            return Err(CartError::InvalidItem(format!("amount {} is not finite", amount)));
        }

        let Some(index) = self.position(id, category) else {
            return Ok(UpdateOutcome::NotFound);
        };

        if amount <= 0.0 {
            self.items.remove(index);
            return Ok(UpdateOutcome::Removed);
        }

        self.items[index].amount = amount;
        Ok(UpdateOutcome::Updated { amount })
    }

    /// Remove the matching row, returning it if one existed.
    pub fn remove(&mut self, id: &str, category: &str) -> Option<LineItem> {
        self.position(id, category).map(|index| self.items.remove(index))
    }

    /// Empty the cart and reset options (payment method is kept).
    pub fn clear(&mut self) {
        self.items.clear();
        self.options.reset();
    }

    pub fn totals(&self, fees: &FeeSchedule) -> Totals {
        Totals::compute(
            &self.items,
            self.options.payment_method,
            self.options.cover_fees,
            fees,
        )
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self) -> CartPhase {
        if self.is_empty() {
            CartPhase::Empty
        } else {
            CartPhase::Populated
        }
    }
}
