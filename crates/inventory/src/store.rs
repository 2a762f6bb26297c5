//! In-memory inventory store: the only component that mutates stock records.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use orchard_core::{DomainError, DomainResult, ProductId};
use orchard_events::Notifier;

use crate::alert::{StockAlert, StockTransition};
use crate::catalog::StockSeed;
use crate::stock::StockRecord;

/// In-memory mapping of product to stock record.
///
/// The store owns every record; callers only ever receive copies. All
/// operations are synchronous, and mutations run the status check and the
/// update under one write lock, so the reservation check-and-increment
/// holds up with concurrent callers.
///
/// Operations never return errors: unknown products are no-ops (or zero
/// reads), and a rejected reservation is an expected outcome reported
/// through the `bool` return, not a fault.
pub struct InventoryStore {
    records: RwLock<HashMap<ProductId, StockRecord>>,
    notifier: Arc<dyn Notifier>,
}

impl InventoryStore {
    /// Build a store from seed entries.
    ///
    /// Seeding is the only way records come into existence; products are
    /// never created or deleted after startup. Each seed is validated and
    /// duplicate product ids are rejected.
    pub fn with_catalog(
        seeds: Vec<StockSeed>,
        notifier: Arc<dyn Notifier>,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        let mut records = HashMap::with_capacity(seeds.len());

        for seed in seeds {
            seed.validate()?;
            let record = StockRecord {
                product_id: seed.product_id,
                stock: seed.stock,
                reserved: seed.reserved,
                low_stock_threshold: seed.low_stock_threshold,
                last_updated: now,
            };
            if records.insert(seed.product_id, record).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate product {} in seed catalog",
                    seed.product_id
                )));
            }
        }

        Ok(Self {
            records: RwLock::new(records),
            notifier,
        })
    }

    /// Units purchasable right now, or 0 for unknown products. Never fails.
    pub fn available(&self, product_id: ProductId) -> i64 {
        match self.records.read() {
            Ok(records) => records
                .get(&product_id)
                .map(StockRecord::available)
                .unwrap_or(0),
            // A poisoned lock means a writer panicked mid-update; fail closed.
            Err(_) => 0,
        }
    }

    /// Attempt to hold `quantity` units against available stock.
    ///
    /// Succeeds only if `available >= quantity` at call time; the check and
    /// the increment happen atomically. Returns `false` (and mutates
    /// nothing) for unknown products, non-positive quantities, and
    /// insufficient availability.
    pub fn reserve(&self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }

        let transition = match self.records.write() {
            Ok(mut records) => {
                let Some(record) = records.get_mut(&product_id) else {
                    return false;
                };
                if record.available() < quantity {
                    tracing::debug!(
                        %product_id,
                        quantity,
                        available = record.available(),
                        "reservation rejected"
                    );
                    return false;
                }
                let before = record.status();
                record.reserved += quantity;
                record.last_updated = Utc::now();
                StockTransition::from_status_change(before, record.status())
            }
            Err(_) => return false,
        };

        self.emit(product_id, transition);
        true
    }

    /// Return `quantity` previously reserved units to the available pool.
    ///
    /// Used when a checkout step is abandoned. Over-release floors
    /// `reserved` at zero rather than going negative; unknown products and
    /// non-positive quantities are no-ops.
    pub fn release(&self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            return;
        }

        let transition = match self.records.write() {
            Ok(mut records) => {
                let Some(record) = records.get_mut(&product_id) else {
                    return;
                };
                let before = record.status();
                record.reserved = (record.reserved - quantity).max(0);
                record.last_updated = Utc::now();
                StockTransition::from_status_change(before, record.status())
            }
            Err(_) => return,
        };

        self.emit(product_id, transition);
    }

    /// Administrative restock or correction: set total stock outright.
    ///
    /// Negative input clamps to zero. Reservations are left untouched, which
    /// can leave `reserved` above `stock` until holders release;
    /// `StockRecord::available` floors at zero for exactly that case.
    /// Unknown products are a no-op.
    pub fn set_stock(&self, product_id: ProductId, new_stock: i64) {
        let transition = match self.records.write() {
            Ok(mut records) => {
                let Some(record) = records.get_mut(&product_id) else {
                    return;
                };
                let before = record.status();
                record.stock = new_stock.max(0);
                record.last_updated = Utc::now();
                StockTransition::from_status_change(before, record.status())
            }
            Err(_) => return,
        };

        self.emit(product_id, transition);
    }

    /// Owned copy of one record, if the product is known.
    pub fn snapshot(&self, product_id: ProductId) -> Option<StockRecord> {
        self.records
            .read()
            .ok()
            .and_then(|records| records.get(&product_id).cloned())
    }

    /// Owned copies of every record, ordered by product id.
    pub fn list(&self) -> Vec<StockRecord> {
        let mut records: Vec<StockRecord> = match self.records.read() {
            Ok(records) => records.values().cloned().collect(),
            Err(_) => Vec::new(),
        };
        records.sort_by_key(|r| *r.product_id.as_uuid().as_bytes());
        records
    }

    /// Render and deliver the alert for a status-class change, if any.
    ///
    /// Runs after the record lock is released so a notifier can never block
    /// or re-enter the store mid-mutation.
    fn emit(&self, product_id: ProductId, transition: Option<StockTransition>) {
        let Some(transition) = transition else {
            return;
        };
        let alert = StockAlert {
            product_id,
            transition,
            occurred_at: Utc::now(),
        };
        tracing::info!(%product_id, ?transition, "stock status changed");
        self.notifier.notify(&alert.message(), transition.severity());
    }
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let products = self.records.read().map(|r| r.len()).unwrap_or(0);
        f.debug_struct("InventoryStore")
            .field("products", &products)
            .finish_non_exhaustive()
    }
}
