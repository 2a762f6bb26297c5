use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use orchard_core::ProductId;
use orchard_events::{BusNotifier, Notifier, NullNotifier};
use orchard_inventory::{InventoryStore, StockSeed};
use uuid::Uuid;

fn product(n: u128) -> ProductId {
    ProductId::from_uuid(Uuid::from_u128(n))
}

fn seeded_store(products: u128, notifier: Arc<dyn Notifier>) -> InventoryStore {
    let seeds = (1..=products)
        .map(|n| StockSeed {
            product_id: product(n),
            stock: 1_000_000_000,
            reserved: 0,
            low_stock_threshold: 10,
        })
        .collect();
    InventoryStore::with_catalog(seeds, notifier).expect("valid seed catalog")
}

fn bench_reservation_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservation_cycle");
    group.throughput(Throughput::Elements(1));

    // Stock is deep enough that the status class never changes, so this
    // measures the pure check-and-increment path.
    group.bench_function("reserve_release_null_notifier", |b| {
        let store = seeded_store(1, Arc::new(NullNotifier));
        b.iter(|| {
            black_box(store.reserve(product(1), 1));
            store.release(product(1), 1);
        });
    });

    group.bench_function("reserve_release_bus_notifier", |b| {
        // No subscribers attached; measures notifier plumbing overhead only.
        let store = seeded_store(1, Arc::new(BusNotifier::new()));
        b.iter(|| {
            black_box(store.reserve(product(1), 1));
            store.release(product(1), 1);
        });
    });

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("availability_reads");

    for size in [1u128, 100, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let store = seeded_store(size, Arc::new(NullNotifier));
            b.iter(|| black_box(store.available(product(size))));
        });
    }

    group.finish();
}

fn bench_status_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_transitions");

    // Worst case for the alert path: every correction crosses a status
    // boundary and renders a message.
    group.bench_function("alternating_out_and_back", |b| {
        let store = seeded_store(1, Arc::new(BusNotifier::new()));
        b.iter(|| {
            store.set_stock(product(1), 0);
            store.set_stock(product(1), 1_000_000_000);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_reservation_cycle,
    bench_reads,
    bench_status_transitions
);
criterion_main!(benches);
