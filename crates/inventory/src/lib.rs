//! Inventory availability model.
//!
//! This crate contains the stock/reservation business rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! store is the only component that mutates stock records; everything else
//! reads snapshots and calls its public operations.

pub mod alert;
pub mod catalog;
pub mod stock;
pub mod store;

pub use alert::{StockAlert, StockTransition};
pub use catalog::{StockSeed, parse_catalog};
pub use stock::{StockRecord, StockStatus};
pub use store::InventoryStore;
