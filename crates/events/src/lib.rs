//! Notification side-channel: events, pub/sub distribution, notifier contract.
//!
//! Nothing in this crate knows about inventory. It carries the generic
//! fan-out mechanics that domain crates publish into and UI-facing consumers
//! (toast components, log sinks) drain from.

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod notify;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use notify::{BusNotifier, Notification, Notifier, NullNotifier, Severity};
