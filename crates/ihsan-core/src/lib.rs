//! Ihsan Charity Core Library
//!
//! Donation cart store with durable persistence and fee-aware totals.
//!
//! ## Overview
//!
//! Visitors pledge several donations (project gifts, Zakat, Sadaqah, ...)
//! into a cart and check out once. The cart is owned by a [`CartStore`]
//! constructed at application start; pages add, update and remove line
//! items through it and render the [`CartEvent`]s it broadcasts.
//!
//! ## Core Rules
//!
//! - **One row per `(id, category)`**: adding a matching donation grows the
//!   existing amount
//! - **Validated at the boundary**: drafts with no id/title or a non-positive
//!   amount are rejected and never stored
//! - **Persist after every mutation**: a write failure keeps the in-memory
//!   cart and is reported, never rolled back
//!
//! ## Quick Start
//!
//! ```ignore
//! use ihsan_core::{CartStore, KvCartRepository, PaymentMethod};
//! use ihsan_core::catalog::{find_project, DEFAULT_PROJECT_AMOUNT};
//!
//! let repo = KvCartRepository::open_in("~/.local/share/ihsan")?;
//! let mut store = CartStore::open(repo);
//!
//! let well = find_project("water-well-somalia").unwrap();
//! store.add_item(well.draft(DEFAULT_PROJECT_AMOUNT))?;
//! store.set_cover_fees(true);
//! store.set_payment_method(PaymentMethod::Card);
//!
//! let totals = store.compute_totals();
//! println!("Total: ${:.2}", totals.total);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod events;
pub mod storage;
pub mod store;
pub mod totals;
pub mod types;

// Re-exports
pub use cart::{AddOutcome, Cart, CartPhase, CartSnapshot, UpdateOutcome};
pub use checkout::PledgeReceipt;
pub use config::CartConfig;
pub use error::{CartError, CartResult};
pub use events::{CartEvent, EventReceiver, NoticeLevel};
pub use storage::{CartRepository, FileStore, KeyValueStore, KvCartRepository, MemoryStore, RedbStore};
pub use store::CartStore;
pub use totals::{format_usd, round_cents, FeeSchedule, Totals};
pub use types::*;
