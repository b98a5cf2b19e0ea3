//! Entity trait: records that keep their identity while attributes change.

/// A record addressed by a stable identifier.
///
/// Products and movement records both implement this; the ledger relies on it to
/// look records up without caring which collection they live in.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when this record carries the given identifier.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
