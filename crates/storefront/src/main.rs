//! Storefront process entry point: owns the inventory store lifecycle.
//!
//! Seeds the store from a JSON catalog, wires the notification bus, walks a
//! scripted checkout flow, and drains toasts on a consumer thread. The toast
//! consumer stands in for the presentation layer, which only ever calls the
//! store's public operations and renders what the side-channel delivers.

use std::sync::Arc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use anyhow::Context;

use orchard_events::{BusNotifier, Notification, Severity, Subscription};
use orchard_inventory::{InventoryStore, parse_catalog};

/// Built-in catalog used when `ORCHARD_CATALOG` is not set.
const DEFAULT_CATALOG: &str = include_str!("../catalog.json");

fn main() -> anyhow::Result<()> {
    orchard_observability::init();

    let catalog_json = match std::env::var("ORCHARD_CATALOG") {
        Ok(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read catalog file {path}"))?,
        Err(_) => DEFAULT_CATALOG.to_string(),
    };
    let seeds = parse_catalog(&catalog_json).context("invalid seed catalog")?;
    tracing::info!(products = seeds.len(), "seed catalog loaded");

    let notifier = Arc::new(BusNotifier::new());
    let toasts = spawn_toast_consumer(notifier.subscribe());

    let store = InventoryStore::with_catalog(seeds, notifier.clone())
        .context("failed to seed inventory store")?;

    run_checkout_exercise(&store);

    // Dropping the store and the notifier tears the bus down, which lets the
    // consumer loop observe the disconnect and wind down.
    drop(store);
    drop(notifier);
    toasts
        .join()
        .map_err(|_| anyhow::anyhow!("toast consumer panicked"))?;

    Ok(())
}

/// Drain notifications the way a toast component would: render and move on.
fn spawn_toast_consumer(subscription: Subscription<Notification>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        loop {
            match subscription.recv_timeout(Duration::from_millis(200)) {
                Ok(notification) => match notification.severity {
                    Severity::Success => {
                        tracing::info!(message = %notification.message, "toast")
                    }
                    Severity::Warning => {
                        tracing::warn!(message = %notification.message, "toast")
                    }
                    Severity::Error => {
                        tracing::error!(message = %notification.message, "toast")
                    }
                },
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Scripted stand-in for the checkout flow.
fn run_checkout_exercise(store: &InventoryStore) {
    for record in store.list() {
        tracing::info!(
            product_id = %record.product_id,
            stock = record.stock,
            reserved = record.reserved,
            available = record.available(),
            status = ?record.status(),
            "seeded product"
        );
    }

    let Some(first) = store.list().into_iter().next() else {
        tracing::warn!("catalog is empty, nothing to exercise");
        return;
    };
    let product_id = first.product_id;

    // A shopper puts two units in the cart...
    let held = store.reserve(product_id, 2);
    tracing::info!(%product_id, held, "cart reservation");

    // ...a bulk order larger than the shelf is turned away...
    let rejected = !store.reserve(product_id, first.available() + 100);
    tracing::info!(%product_id, rejected, "bulk reservation");

    // ...one unit is dropped from the cart again...
    store.release(product_id, 1);

    // ...the warehouse corrects the count downward, sells out, and then a
    // delivery lands. Each boundary crossing surfaces as a toast.
    store.set_stock(product_id, first.low_stock_threshold.max(1));
    store.set_stock(product_id, 0);
    store.set_stock(product_id, first.stock + 25);

    tracing::info!(
        %product_id,
        available = store.available(product_id),
        "exercise finished"
    );
}
