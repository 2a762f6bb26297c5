//! Notifier contract: the fire-and-forget side-channel toward the UI.
//!
//! Domain code calls [`Notifier::notify`] when something user-visible
//! happened. Whatever sits on the other end (a toast component, a log sink,
//! nothing at all) is invisible to the caller: a notifier can never fail the
//! operation that triggered it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bus::{EventBus, Subscription};
use crate::event::Event;
use crate::in_memory_bus::InMemoryEventBus;

/// Severity of a user-facing notification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A user-facing notification (toast payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub occurred_at: DateTime<Utc>,
}

impl Event for Notification {
    fn event_type(&self) -> &'static str {
        match self.severity {
            Severity::Success => "notify.toast.success",
            Severity::Warning => "notify.toast.warning",
            Severity::Error => "notify.toast.error",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Fire-and-forget notification sink.
///
/// Implementations swallow their own failures; `notify` has no return value
/// to observe.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

/// Notifier that drops everything (tests, headless runs).
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

/// Notifier backed by the in-memory bus.
///
/// Each call publishes one [`Notification`]; subscribers drain them at their
/// own pace. With no subscribers attached, notifications evaporate, which is
/// the correct behavior for a side-channel.
#[derive(Debug, Default)]
pub struct BusNotifier {
    bus: InMemoryEventBus<Notification>,
}

impl BusNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a consumer (toast component, test harness).
    pub fn subscribe(&self) -> Subscription<Notification> {
        self.bus.subscribe()
    }
}

impl Notifier for BusNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let notification = Notification {
            message: message.to_string(),
            severity,
            occurred_at: Utc::now(),
        };

        // A failed publish must never surface to the caller.
        if let Err(err) = self.bus.publish(notification) {
            tracing::warn!(?err, message, "dropping notification");
        }
    }
}
