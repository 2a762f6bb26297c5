//! Event publishing/subscription abstraction (mechanics only).
//!
//! A pub/sub mechanism for distributing messages to multiple consumers.
//! The bus is intentionally lightweight:
//!
//! - **Transport-agnostic**: in-memory channels today, anything later.
//! - **Broadcast semantics**: every subscriber gets a copy of every message.
//! - **Fire-and-forget**: publishers do not learn whether anyone consumed
//!   the message. Consumers that lag or disappear lose messages; that is
//!   acceptable for UI-facing notifications, which carry no state of record.
//! - **No persistence**: the store that emitted a message remains the
//!   source of truth for current state. A missed toast can always be
//!   reconstructed by reading the store.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a message stream.
///
/// Each subscription receives a copy of every message published after it was
/// created. Intended for single-threaded consumption: one subscription, one
/// consumer loop.
///
/// Typical consumer loop:
///
/// ```ignore
/// let subscription = bus.subscribe();
/// loop {
///     match subscription.recv_timeout(Duration::from_millis(200)) {
///         Ok(message) => render(message),
///         Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue, // check for shutdown
///         Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break, // bus dropped
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Collect everything already queued without blocking.
    ///
    /// Publishers on this bus deliver synchronously, so after an operation
    /// returns, its messages are guaranteed to be in the queue.
    pub fn drain_pending(&self) -> Vec<M> {
        let mut drained = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            drained.push(message);
        }
        drained
    }
}

/// Domain-agnostic pub/sub bus.
///
/// `publish()` can fail (implementation-specific), but callers on a
/// fire-and-forget path are expected to log and move on rather than let a
/// distribution failure infect the operation that triggered it.
///
/// Implementations must be `Send + Sync`; multiple threads may publish
/// concurrently.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
