use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orchard_core::ProductId;
use orchard_events::Severity;

use crate::stock::StockStatus;

/// Status-class change that warrants telling the user about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockTransition {
    BackInStock,
    RunningLow,
    OutOfStock,
}

impl StockTransition {
    /// Map a status change to its alert, if the change names one.
    ///
    /// Recovering from low stock to in stock is a status change with no
    /// alert: shoppers are told when a product comes back or runs out, not
    /// when it climbs back over the threshold.
    pub fn from_status_change(before: StockStatus, after: StockStatus) -> Option<Self> {
        match (before, after) {
            (StockStatus::OutOfStock, StockStatus::InStock | StockStatus::LowStock) => {
                Some(Self::BackInStock)
            }
            (StockStatus::InStock, StockStatus::LowStock) => Some(Self::RunningLow),
            (StockStatus::InStock | StockStatus::LowStock, StockStatus::OutOfStock) => {
                Some(Self::OutOfStock)
            }
            (StockStatus::LowStock, StockStatus::InStock)
            | (StockStatus::OutOfStock, StockStatus::OutOfStock)
            | (StockStatus::LowStock, StockStatus::LowStock)
            | (StockStatus::InStock, StockStatus::InStock) => None,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::BackInStock => Severity::Success,
            Self::RunningLow => Severity::Warning,
            Self::OutOfStock => Severity::Error,
        }
    }
}

/// Alert emitted when a product crosses a status boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlert {
    pub product_id: ProductId,
    pub transition: StockTransition,
    pub occurred_at: DateTime<Utc>,
}

impl StockAlert {
    /// Human-readable message for the toast layer.
    pub fn message(&self) -> String {
        match self.transition {
            StockTransition::BackInStock => format!("product {} is back in stock", self.product_id),
            StockTransition::RunningLow => format!("product {} is running low", self.product_id),
            StockTransition::OutOfStock => format!("product {} is out of stock", self.product_id),
        }
    }
}
