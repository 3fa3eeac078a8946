//! Durable cart persistence.
//!
//! Two layers:
//! - [`KeyValueStore`]: a string-keyed slot store in the spirit of browser
//!   local storage. Backends: [`MemoryStore`], [`FileStore`], [`RedbStore`].
//! - [`CartRepository`]: loads and saves a whole [`CartSnapshot`]. The
//!   [`KvCartRepository`] maps a snapshot onto two keys of a key-value store.
//!
//! ## Layout
//!
//! ```text
//! donationCart         [{"id":"w1","title":"Well","type":"General","amount":50.0}, ...]
//! donationCartOptions  {"cover_fees":false,"donation_for":{...},"employer_match":{...},"payment_method":"card"}
//! ```
//!
//! The items slot is a plain JSON array with no schema version. Restoring is
//! fail-safe: a row missing its id, title or amount is dropped on its own,
//! an unparseable options slot falls back to defaults.

use std::path::Path;

use tracing::{debug, warn};

use crate::cart::CartSnapshot;
use crate::error::{CartError, CartResult};
use crate::types::{CartOptions, ItemDraft, LineItem};

mod file;
mod memory;
mod redb_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redb_store::RedbStore;

/// Key holding the JSON array of line items
pub const ITEMS_KEY: &str = "donationCart";

/// Key holding the JSON object of cart options
pub const OPTIONS_KEY: &str = "donationCartOptions";

/// Database file name used inside a data directory
pub const CART_DB_FILE: &str = "cart.redb";

/// String-keyed durable slots
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CartResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CartResult<()>;
    fn remove(&self, key: &str) -> CartResult<()>;
}

/// Loads and saves whole cart snapshots
pub trait CartRepository {
    /// Read the persisted snapshot, or an empty one if nothing was saved.
    fn load(&self) -> CartResult<CartSnapshot>;

    /// Overwrite the persisted snapshot.
    fn save(&self, snapshot: &CartSnapshot) -> CartResult<()>;
}

impl<R: CartRepository + ?Sized> CartRepository for Box<R> {
    fn load(&self) -> CartResult<CartSnapshot> {
        (**self).load()
    }

    fn save(&self, snapshot: &CartSnapshot) -> CartResult<()> {
        (**self).save(snapshot)
    }
}

/// Cart repository over any [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct KvCartRepository<S> {
    store: S,
    items_key: String,
    options_key: String,
}

impl<S: KeyValueStore> KvCartRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, ITEMS_KEY, OPTIONS_KEY)
    }

    pub fn with_keys(store: S, items_key: impl Into<String>, options_key: impl Into<String>) -> Self {
        Self {
            store,
            items_key: items_key.into(),
            options_key: options_key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Delete both persisted slots.
    pub fn forget(&self) -> CartResult<()> {
        self.store.remove(&self.items_key)?;
        self.store.remove(&self.options_key)
    }

    fn load_items(&self) -> CartResult<Vec<LineItem>> {
        let Some(raw) = self.store.get(&self.items_key)? else {
            return Ok(Vec::new());
        };
        decode_items(&raw)
    }

    fn load_options(&self) -> CartResult<CartOptions> {
        let Some(raw) = self.store.get(&self.options_key)? else {
            return Ok(CartOptions::default());
        };
        match serde_json::from_str(&raw) {
            Ok(options) => Ok(options),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable cart options");
                Ok(CartOptions::default())
            }
        }
    }
}

impl KvCartRepository<RedbStore> {
    /// Open the redb-backed repository inside `data_dir`.
    pub fn open_in(data_dir: impl AsRef<Path>) -> CartResult<Self> {
        let store = RedbStore::new(data_dir.as_ref().join(CART_DB_FILE))?;
        Ok(Self::new(store))
    }
}

impl<S: KeyValueStore> CartRepository for KvCartRepository<S> {
    fn load(&self) -> CartResult<CartSnapshot> {
        let items = self
            .load_items()
            .map_err(|e| CartError::PersistenceRead(e.to_string()))?;
        let options = self
            .load_options()
            .map_err(|e| CartError::PersistenceRead(e.to_string()))?;
        debug!(items = items.len(), "Loaded donation cart snapshot");
        Ok(CartSnapshot { items, options })
    }

    fn save(&self, snapshot: &CartSnapshot) -> CartResult<()> {
        let items = serde_json::to_string(&snapshot.items)
            .map_err(|e| CartError::Serialization(e.to_string()))?;
        let options = serde_json::to_string(&snapshot.options)
            .map_err(|e| CartError::Serialization(e.to_string()))?;

        self.store
            .set(&self.items_key, &items)
            .and_then(|_| self.store.set(&self.options_key, &options))
            .map_err(|e| CartError::PersistenceWrite(e.to_string()))
    }
}

/// Decode the items slot, dropping rows that do not normalize.
///
/// Only a slot that is not a JSON array at all is an error.
pub fn decode_items(raw: &str) -> CartResult<Vec<LineItem>> {
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| CartError::Serialization(e.to_string()))?;

    let mut items = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let normalized = serde_json::from_value::<ItemDraft>(row)
            .map_err(|e| CartError::InvalidItem(e.to_string()))
            .and_then(ItemDraft::normalize);
        match normalized {
            Ok(item) => items.push(item),
            Err(e) => warn!(index, error = %e, "Dropping unreadable saved donation"),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Designation, PaymentMethod};

    #[test]
    fn test_decode_items_drops_incomplete_rows() {
        let raw = r#"[
            {"id":"w1","title":"Well","type":"General","amount":50},
            {"id":"","title":"No id","amount":5},
            {"id":"x","amount":5},
            {"id":"y","title":"Bad","amount":-3},
            {"id":"z","name":"Named","category":"Zakat","amount":"12.5"},
            "not an object"
        ]"#;
        let items = decode_items(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "w1");
        assert_eq!(items[1].title, "Named");
        assert_eq!(items[1].category, "Zakat");
        assert_eq!(items[1].amount, 12.5);
    }

    #[test]
    fn test_decode_items_rejects_non_array() {
        assert!(decode_items("{oops").is_err());
        assert!(decode_items(r#"{"id":"w1"}"#).is_err());
    }

    #[test]
    fn test_repository_missing_keys_load_empty() {
        let repo = KvCartRepository::new(MemoryStore::new());
        assert_eq!(repo.load().unwrap(), CartSnapshot::default());
    }

    #[test]
    fn test_repository_writes_plain_item_array() {
        let repo = KvCartRepository::new(MemoryStore::new());
        let snapshot = CartSnapshot {
            items: vec![ItemDraft::new("w1", "Well", 50.0).normalize().unwrap()],
            options: CartOptions {
                payment_method: PaymentMethod::BankTransfer,
                donation_for: Designation::on_behalf_of("Maryam"),
                ..Default::default()
            },
        };
        repo.save(&snapshot).unwrap();

        let raw = repo.store().get(ITEMS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["type"], "General");

        assert_eq!(repo.load().unwrap(), snapshot);
    }

    #[test]
    fn test_repository_bad_options_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(OPTIONS_KEY, "{not json").unwrap();
        let repo = KvCartRepository::new(store);
        assert_eq!(repo.load().unwrap().options, CartOptions::default());
    }

    #[test]
    fn test_forget_removes_slots() {
        let repo = KvCartRepository::new(MemoryStore::new());
        repo.save(&CartSnapshot::default()).unwrap();
        assert!(repo.store().get(ITEMS_KEY).unwrap().is_some());
        repo.forget().unwrap();
        assert!(repo.store().get(ITEMS_KEY).unwrap().is_none());
        assert!(repo.store().get(OPTIONS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_repository_bad_items_is_read_error() {
        let store = MemoryStore::new();
        store.set(ITEMS_KEY, "garbage").unwrap();
        let repo = KvCartRepository::new(store);
        assert!(matches!(repo.load(), Err(CartError::PersistenceRead(_))));
    }
}
