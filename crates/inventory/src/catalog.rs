//! Seed catalog: the static configuration the store is loaded from at startup.
//!
//! Records come into existence here and nowhere else; there is no dynamic
//! product creation and nothing is persisted back out.

use serde::{Deserialize, Serialize};

use orchard_core::{DomainError, DomainResult, ProductId};

/// One product entry in the seed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSeed {
    pub product_id: ProductId,
    pub stock: i64,
    #[serde(default)]
    pub reserved: i64,
    #[serde(default)]
    pub low_stock_threshold: i64,
}

impl StockSeed {
    /// Validate construction-time invariants.
    ///
    /// Rejection here is the only enforcement point for `reserved <= stock`
    /// outside the reservation path itself.
    pub fn validate(&self) -> DomainResult<()> {
        if self.stock < 0 {
            return Err(DomainError::validation(format!(
                "product {}: stock cannot be negative",
                self.product_id
            )));
        }
        if self.reserved < 0 {
            return Err(DomainError::validation(format!(
                "product {}: reserved cannot be negative",
                self.product_id
            )));
        }
        if self.low_stock_threshold < 0 {
            return Err(DomainError::validation(format!(
                "product {}: low stock threshold cannot be negative",
                self.product_id
            )));
        }
        if self.reserved > self.stock {
            return Err(DomainError::invariant(format!(
                "product {}: reserved ({}) exceeds stock ({})",
                self.product_id, self.reserved, self.stock
            )));
        }
        Ok(())
    }
}

/// Parse and validate a JSON seed catalog.
pub fn parse_catalog(json: &str) -> DomainResult<Vec<StockSeed>> {
    let seeds: Vec<StockSeed> = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed seed catalog: {e}")))?;

    for seed in &seeds {
        seed.validate()?;
    }

    Ok(seeds)
}
