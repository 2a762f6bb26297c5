use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orchard_core::ProductId;

/// Availability bucket derived from a record. Never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

/// Per-product stock record.
///
/// Owned exclusively by the `InventoryStore`; callers only ever see copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: ProductId,
    /// Total units physically held. Never negative.
    pub stock: i64,
    /// Units provisionally held against in-flight orders. Never negative.
    pub reserved: i64,
    /// At or below this many available units the product counts as running low.
    pub low_stock_threshold: i64,
    /// Set on every mutation.
    pub last_updated: DateTime<Utc>,
}

impl StockRecord {
    /// Units purchasable right now: `stock - reserved`, floored at zero.
    ///
    /// An administrative correction may drop `stock` below `reserved`
    /// without touching reservations, so the floor is load-bearing.
    pub fn available(&self) -> i64 {
        (self.stock - self.reserved).max(0)
    }

    /// Derive the availability bucket from available units and the threshold.
    pub fn status(&self) -> StockStatus {
        let available = self.available();
        if available == 0 {
            StockStatus::OutOfStock
        } else if available <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stock: i64, reserved: i64, threshold: i64) -> StockRecord {
        StockRecord {
            product_id: ProductId::new(),
            stock,
            reserved,
            low_stock_threshold: threshold,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn available_subtracts_reserved() {
        assert_eq!(record(15, 2, 5).available(), 13);
    }

    #[test]
    fn available_floors_at_zero_when_stock_undercuts_reserved() {
        assert_eq!(record(3, 5, 5).available(), 0);
    }

    #[test]
    fn status_out_of_stock_at_zero_available() {
        assert_eq!(record(10, 10, 5).status(), StockStatus::OutOfStock);
        assert_eq!(record(0, 0, 5).status(), StockStatus::OutOfStock);
    }

    #[test]
    fn status_low_stock_at_or_below_threshold() {
        assert_eq!(record(5, 0, 5).status(), StockStatus::LowStock);
        assert_eq!(record(6, 5, 5).status(), StockStatus::LowStock);
    }

    #[test]
    fn status_in_stock_above_threshold() {
        assert_eq!(record(6, 0, 5).status(), StockStatus::InStock);
    }

    #[test]
    fn zero_threshold_never_reports_low_stock() {
        // With threshold 0 the only non-in-stock state is out-of-stock.
        assert_eq!(record(1, 0, 0).status(), StockStatus::InStock);
        assert_eq!(record(1, 1, 0).status(), StockStatus::OutOfStock);
    }
}
