//! Property-based tests for the donation cart
//!
//! Uses proptest to verify the merge invariant, boundary rejection, pure
//! totals and persist/restore round-trips over arbitrary operation sequences.

use std::collections::HashSet;

use ihsan_core::{
    CartStore, Designation, EmployerMatch, ItemDraft, KvCartRepository, MemoryStore, PaymentMethod,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Small id space so merges actually happen
fn id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["w1", "w2", "zakat-1", "orphan-care-syria"]).prop_map(String::from)
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["General", "Zakat", "Sadaqah"]).prop_map(String::from)
}

/// Whole cents between $0.01 and $10,000
fn amount_strategy() -> impl Strategy<Value = f64> {
    (1u32..1_000_000).prop_map(|cents| f64::from(cents) / 100.0)
}

fn invalid_amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        (1u32..1_000_000).prop_map(|cents| -f64::from(cents) / 100.0),
    ]
}

/// Operations that can be performed on a CartStore
#[derive(Debug, Clone)]
enum CartOp {
    Add(String, String, f64),
    Update(String, String, f64),
    Remove(String, String),
    CoverFees(bool),
    Payment(bool),
    Designate(Option<String>),
    Employer(bool),
    Clear,
}

fn cart_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => (id_strategy(), category_strategy(), amount_strategy())
                .prop_map(|(id, cat, amount)| CartOp::Add(id, cat, amount)),
            2 => (id_strategy(), category_strategy(), -100.0f64..500.0)
                .prop_map(|(id, cat, amount)| CartOp::Update(id, cat, amount)),
            2 => (id_strategy(), category_strategy()).prop_map(|(id, cat)| CartOp::Remove(id, cat)),
            1 => any::<bool>().prop_map(CartOp::CoverFees),
            1 => any::<bool>().prop_map(CartOp::Payment),
            1 => prop::option::of("[A-Za-z ]{1,20}").prop_map(CartOp::Designate),
            1 => any::<bool>().prop_map(CartOp::Employer),
            1 => Just(CartOp::Clear),
        ],
        0..max_ops,
    )
}

fn new_store(slots: &MemoryStore) -> CartStore<KvCartRepository<MemoryStore>> {
    CartStore::open(KvCartRepository::new(slots.clone()))
}

fn apply(store: &mut CartStore<KvCartRepository<MemoryStore>>, op: CartOp) {
    match op {
        CartOp::Add(id, cat, amount) => {
            store
                .add_item(ItemDraft::new(id, "Project", amount).with_category(cat))
                .unwrap();
        }
        CartOp::Update(id, cat, amount) => {
            store.update_item_amount(&id, &cat, amount).unwrap();
        }
        CartOp::Remove(id, cat) => {
            store.remove_item(&id, &cat);
        }
        CartOp::CoverFees(cover) => store.set_cover_fees(cover),
        CartOp::Payment(card) => store.set_payment_method(if card {
            PaymentMethod::Card
        } else {
            PaymentMethod::BankTransfer
        }),
        CartOp::Designate(name) => store.set_donation_for(match name {
            Some(name) => Designation::in_memory_of(name),
            None => Designation::default(),
        }),
        CartOp::Employer(enabled) => store.set_employer_match(if enabled {
            EmployerMatch::new("Acme", "match@acme.test")
        } else {
            EmployerMatch::default()
        }),
        CartOp::Clear => store.clear(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Two valid adds with the same key leave one row holding the sum
    #[test]
    fn same_key_adds_merge(id in id_strategy(), cat in category_strategy(), a in amount_strategy(), b in amount_strategy()) {
        let mut store = new_store(&MemoryStore::new());
        store.add_item(ItemDraft::new(id.clone(), "Project", a).with_category(cat.clone())).unwrap();
        store.add_item(ItemDraft::new(id, "Project", b).with_category(cat)).unwrap();

        prop_assert_eq!(store.item_count(), 1);
        prop_assert_eq!(store.items()[0].amount, a + b);
    }

    /// Adds with a different id or category stay distinct
    #[test]
    fn distinct_keys_stay_distinct(
        (id_a, cat_a) in (id_strategy(), category_strategy()),
        (id_b, cat_b) in (id_strategy(), category_strategy()),
        amount in amount_strategy(),
    ) {
        prop_assume!(id_a != id_b || cat_a != cat_b);
        let mut store = new_store(&MemoryStore::new());
        store.add_item(ItemDraft::new(id_a, "A", amount).with_category(cat_a)).unwrap();
        store.add_item(ItemDraft::new(id_b, "B", amount).with_category(cat_b)).unwrap();
        prop_assert_eq!(store.item_count(), 2);
    }

    /// Invalid amounts never change the number of items
    #[test]
    fn invalid_amounts_are_rejected(ops in cart_ops_strategy(20), bad in invalid_amount_strategy(), id in id_strategy()) {
        let mut store = new_store(&MemoryStore::new());
        for op in ops {
            apply(&mut store, op);
        }
        let before = store.items().to_vec();

        prop_assert!(store.add_item(ItemDraft::new(id, "Project", bad)).is_err());
        prop_assert_eq!(store.items(), before.as_slice());
    }

    /// No reachable cart holds two rows with the same key or a bad amount
    #[test]
    fn merge_invariant_holds(ops in cart_ops_strategy(60)) {
        let mut store = new_store(&MemoryStore::new());
        for op in ops {
            apply(&mut store, op);
        }

        let mut keys = HashSet::new();
        for item in store.items() {
            prop_assert!(keys.insert((item.id.clone(), item.category.clone())));
            prop_assert!(item.amount.is_finite() && item.amount > 0.0);
        }
    }

    /// Reading totals twice without mutation yields identical results
    #[test]
    fn totals_are_pure(ops in cart_ops_strategy(40)) {
        let mut store = new_store(&MemoryStore::new());
        for op in ops {
            apply(&mut store, op);
        }
        let first = store.compute_totals();
        let second = store.compute_totals();
        prop_assert_eq!(first, second);
        prop_assert!(first.total >= first.subtotal - 0.005);
    }

    /// Restoring from what was persisted yields the same cart
    #[test]
    fn persist_restore_roundtrip(ops in cart_ops_strategy(40)) {
        let slots = MemoryStore::new();
        let mut store = new_store(&slots);
        for op in ops {
            apply(&mut store, op);
        }

        let restored = new_store(&slots);
        prop_assert_eq!(restored.cart(), store.cart());
        prop_assert_eq!(restored.compute_totals(), store.compute_totals());
    }
}
