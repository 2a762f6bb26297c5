//! Black-box exercise of the store through its public surface, with a
//! bus-backed notifier standing in for the toast layer.

use std::sync::Arc;

use orchard_core::ProductId;
use orchard_events::{BusNotifier, Severity};
use orchard_inventory::{InventoryStore, StockStatus, parse_catalog};
use uuid::Uuid;

#[test]
fn checkout_reservation_lifecycle() {
    let catalog = r#"[
        { "product_id": "00000000-0000-0000-0000-000000000001",
          "stock": 15, "reserved": 2, "low_stock_threshold": 5 }
    ]"#;
    let seeds = parse_catalog(catalog).unwrap();
    let product = seeds[0].product_id;

    let notifier = Arc::new(BusNotifier::new());
    let toasts = notifier.subscribe();
    let store = InventoryStore::with_catalog(seeds, notifier).unwrap();

    // Freshly seeded: 13 purchasable, nothing announced.
    assert_eq!(store.available(product), 13);
    assert_eq!(
        store.snapshot(product).unwrap().status(),
        StockStatus::InStock
    );
    assert!(toasts.drain_pending().is_empty());

    // A shopper grabs everything that's left.
    assert!(store.reserve(product, 13));
    assert_eq!(store.available(product), 0);
    let announced = toasts.drain_pending();
    assert_eq!(announced.len(), 1);
    assert!(announced[0].message.contains("out of stock"));
    assert_eq!(announced[0].severity, Severity::Error);

    // The next shopper is turned away without side effects.
    assert!(!store.reserve(product, 1));
    assert!(toasts.drain_pending().is_empty());

    // Cart expiry hands everything back.
    store.release(product, 15);
    assert_eq!(store.available(product), 15);
    let announced = toasts.drain_pending();
    assert_eq!(announced.len(), 1);
    assert!(announced[0].message.contains("back in stock"));
    assert_eq!(announced[0].severity, Severity::Success);

    // A stock correction leaves only a handful on the shelf.
    store.set_stock(product, 3);
    assert_eq!(
        store.snapshot(product).unwrap().status(),
        StockStatus::LowStock
    );
    let announced = toasts.drain_pending();
    assert_eq!(announced.len(), 1);
    assert!(announced[0].message.contains("running low"));
    assert_eq!(announced[0].severity, Severity::Warning);

    // Operations against a product nobody seeded fall through quietly.
    let unknown = ProductId::from_uuid(Uuid::from_u128(999));
    store.set_stock(unknown, 50);
    assert!(!store.reserve(unknown, 1));
    assert_eq!(store.available(unknown), 0);
    assert!(store.snapshot(unknown).is_none());
    assert!(toasts.drain_pending().is_empty());
}

#[test]
fn listing_reflects_mutations_without_exposing_internals() {
    let catalog = r#"[
        { "product_id": "00000000-0000-0000-0000-000000000002",
          "stock": 8, "low_stock_threshold": 2 },
        { "product_id": "00000000-0000-0000-0000-000000000001",
          "stock": 40, "low_stock_threshold": 10 }
    ]"#;
    let seeds = parse_catalog(catalog).unwrap();

    let notifier = Arc::new(BusNotifier::new());
    let store = InventoryStore::with_catalog(seeds, notifier).unwrap();

    let first = ProductId::from_uuid(Uuid::from_u128(1));
    assert!(store.reserve(first, 5));

    let listing = store.list();
    assert_eq!(listing.len(), 2);
    // Listing order is by product id, not seed order.
    assert_eq!(listing[0].product_id, first);
    assert_eq!(listing[0].reserved, 5);
    assert_eq!(listing[0].available(), 35);

    // Mutating a listed copy changes nothing inside the store.
    let mut copy = listing[0].clone();
    copy.stock = 0;
    assert_eq!(copy.available(), 0);
    assert_eq!(store.available(first), 35);
}
