//! Cart Store Integration Tests
//!
//! End-to-end behaviour of the store against real storage backends:
//! merge rules, totals, clearing, restore fail-safety and write failures.

use ihsan_core::storage::{ITEMS_KEY, OPTIONS_KEY};
use ihsan_core::{
    CartError, CartEvent, CartPhase, CartResult, CartStore, Designation, EmployerMatch, FileStore,
    ItemDraft, KeyValueStore, KvCartRepository, MemoryStore, PaymentMethod,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn memory_store() -> (CartStore<KvCartRepository<MemoryStore>>, MemoryStore) {
    let slots = MemoryStore::new();
    let store = CartStore::open(KvCartRepository::new(slots.clone()));
    (store, slots)
}

fn well(amount: f64) -> ItemDraft {
    ItemDraft::new("w1", "Well", amount).with_category("General")
}

/// Key-value store whose writes always fail, like a full or disabled disk
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> CartResult<()> {
        Err(CartError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "quota exceeded",
        )))
    }

    fn remove(&self, key: &str) -> CartResult<()> {
        self.inner.remove(key)
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_add_to_empty_cart() {
    let (mut store, _slots) = memory_store();
    assert_eq!(store.phase(), CartPhase::Empty);

    store.add_item(well(50.0)).unwrap();

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.compute_totals().subtotal, 50.0);
    assert_eq!(store.phase(), CartPhase::Populated);
}

#[test]
fn test_scenario_merge_same_id_and_category() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(50.0)).unwrap();
    store.add_item(well(25.0)).unwrap();

    assert_eq!(store.item_count(), 1);
    assert_eq!(store.items()[0].amount, 75.0);
}

#[test]
fn test_scenario_card_fee_covered() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(100.0)).unwrap();
    store.set_cover_fees(true);
    store.set_payment_method(PaymentMethod::Card);

    let totals = store.compute_totals();
    assert_eq!(totals.processing_fee, 3.20);
    assert_eq!(totals.total, 103.20);
}

#[test]
fn test_scenario_bank_transfer_has_no_fee() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(100.0)).unwrap();
    store.set_payment_method(PaymentMethod::BankTransfer);

    for cover in [false, true] {
        store.set_cover_fees(cover);
        let totals = store.compute_totals();
        assert_eq!(totals.processing_fee, 0.0);
        assert_eq!(totals.total, 100.0);
    }
}

#[test]
fn test_scenario_remove_missing_is_silent() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(50.0)).unwrap();
    let before = store.items().to_vec();
    let mut rx = store.subscribe();

    assert!(!store.remove_item("w1", "Zakat"));
    assert!(!store.remove_item("nope", "General"));

    assert_eq!(store.items(), before.as_slice());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_scenario_clear_resets_options() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(50.0)).unwrap();
    store
        .add_item(ItemDraft::new("z1", "Zakat", 100.0).with_category("Zakat"))
        .unwrap();
    store.set_cover_fees(true);
    store.set_donation_for(Designation::on_behalf_of("Fatima"));
    store.set_employer_match(EmployerMatch::new("Acme", "giving@acme.test"));

    store.clear();

    assert_eq!(store.items().len(), 0);
    assert_eq!(store.phase(), CartPhase::Empty);
    assert!(!store.options().cover_fees);
    assert_eq!(store.options().donation_for, Designation::default());
    assert_eq!(store.options().employer_match, EmployerMatch::default());
}

// ============================================================================
// Boundary Validation
// ============================================================================

#[test]
fn test_invalid_drafts_never_change_items() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(10.0)).unwrap();

    let bad = [
        ItemDraft::new("w2", "Well", 0.0),
        ItemDraft::new("w2", "Well", -10.0),
        ItemDraft::new("w2", "Well", "ten"),
        ItemDraft::new("w2", "Well", f64::NAN),
        ItemDraft::new("", "Well", 10.0),
        ItemDraft::new("w2", "", 10.0),
    ];
    for draft in bad {
        let err = store.add_item(draft).unwrap_err();
        assert!(matches!(err, CartError::InvalidItem(_)));
        assert_eq!(store.item_count(), 1);
    }
    assert_eq!(store.items()[0].amount, 10.0);
}

#[test]
fn test_removing_last_item_returns_to_empty() {
    let (mut store, _slots) = memory_store();
    store.add_item(well(10.0)).unwrap();
    assert!(store.remove_item("w1", "General"));
    assert_eq!(store.phase(), CartPhase::Empty);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_every_mutation_is_persisted() {
    let (mut store, slots) = memory_store();
    store.add_item(well(50.0)).unwrap();

    let reopened = CartStore::open(KvCartRepository::new(slots.clone()));
    assert_eq!(reopened.items(), store.items());

    store.update_item_amount("w1", "General", 20.0).unwrap();
    let reopened = CartStore::open(KvCartRepository::new(slots.clone()));
    assert_eq!(reopened.items()[0].amount, 20.0);

    store.clear();
    let reopened = CartStore::open(KvCartRepository::new(slots));
    assert!(reopened.is_empty());
}

#[test]
fn test_file_backed_cart_survives_restart() {
    let temp = TempDir::new().unwrap();

    {
        let repo = KvCartRepository::new(FileStore::new(temp.path()).unwrap());
        let mut store = CartStore::open(repo);
        store.add_item(well(50.0)).unwrap();
        store.set_donation_for(Designation::in_memory_of("Ibrahim"));
    }

    let repo = KvCartRepository::new(FileStore::new(temp.path()).unwrap());
    let store = CartStore::open(repo);
    assert_eq!(store.item_count(), 1);
    assert_eq!(store.options().donation_for.name, "Ibrahim");
    assert!(temp.path().join("donationCart.json").exists());
}

#[test]
fn test_redb_backed_cart_survives_restart() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = CartStore::open(KvCartRepository::open_in(temp.path()).unwrap());
        store.add_item(well(30.0)).unwrap();
        store.set_payment_method(PaymentMethod::BankTransfer);
    }

    let store = CartStore::open(KvCartRepository::open_in(temp.path()).unwrap());
    assert_eq!(store.items()[0].amount, 30.0);
    assert_eq!(store.options().payment_method, PaymentMethod::BankTransfer);
    assert!(store.restore_warning().is_none());
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let slots = MemoryStore::new();
    slots.set(ITEMS_KEY, "{{{ definitely not json").unwrap();

    let mut store = CartStore::open(KvCartRepository::new(slots.clone()));
    assert!(store.is_empty());
    assert!(store.restore_warning().is_some());

    // The next mutation overwrites the bad slot
    store.add_item(well(5.0)).unwrap();
    let reopened = CartStore::open(KvCartRepository::new(slots));
    assert_eq!(reopened.item_count(), 1);
}

#[test]
fn test_legacy_snapshot_rows_are_normalized_or_dropped() {
    let slots = MemoryStore::new();
    slots
        .set(
            ITEMS_KEY,
            r#"[
                {"id":"water-well-somalia","name":"Water Well in Somalia","category":"water","amount":50},
                {"id":"orphan-care-syria","title":"Orphan Care"},
                {"id":"general-1","title":"General Donation","type":"One-Time","amount":"25"},
                {"id":"water-well-somalia","title":"Water Well in Somalia","type":"water","amount":10}
            ]"#,
        )
        .unwrap();
    slots.set(OPTIONS_KEY, "null").unwrap();

    let store = CartStore::open(KvCartRepository::new(slots));
    assert_eq!(store.item_count(), 2);
    assert_eq!(store.items()[0].amount, 60.0);
    assert_eq!(store.items()[1].category, "One-Time");
    assert!(store.restore_warning().is_none());
}

#[test]
fn test_write_failure_keeps_memory_and_reports() {
    let mut store = CartStore::open(KvCartRepository::new(ReadOnlyStore::default()));
    let mut rx = store.subscribe();

    store.add_item(well(50.0)).unwrap();

    assert_eq!(store.item_count(), 1);
    match rx.try_recv().unwrap() {
        CartEvent::PersistenceFailed { message } => assert!(message.contains("quota exceeded")),
        other => panic!("expected persistence failure, got {:?}", other),
    }
    assert!(matches!(rx.try_recv().unwrap(), CartEvent::ItemAdded { .. }));
}

// ============================================================================
// Checkout
// ============================================================================

#[test]
fn test_checkout_records_pledge_and_empties_cart() {
    let (mut store, slots) = memory_store();
    store.add_item(well(100.0)).unwrap();
    store.set_cover_fees(true);

    let receipt = store.checkout().unwrap();
    assert_eq!(receipt.totals.total, 103.20);
    assert_eq!(receipt.items.len(), 1);
    assert!(receipt.options.cover_fees);

    assert!(store.is_empty());
    assert!(CartStore::open(KvCartRepository::new(slots)).is_empty());
}

#[test]
fn test_checkout_rejections_leave_cart_alone() {
    let (mut store, _slots) = memory_store();
    assert!(matches!(store.checkout(), Err(CartError::EmptyCart)));

    store.add_item(well(10.0)).unwrap();
    store.set_donation_for(Designation::on_behalf_of(""));
    assert!(matches!(store.checkout(), Err(CartError::InvalidCheckout(_))));
    assert_eq!(store.item_count(), 1);
}
