use chrono::{DateTime, Utc};

/// A fact that already happened, fanned out to interested consumers.
///
/// Implementations are immutable payloads: cheap to clone, safe to hand to
/// any number of subscribers, stamped with business time.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "notify.toast.warning").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
