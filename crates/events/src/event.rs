use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts produced by an aggregate's `handle` and consumed by
/// its `apply`. They are never edited after the fact.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "inventory.stock.received").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
