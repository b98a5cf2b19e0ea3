//! String key/value storage boundary.
//!
//! The ledger snapshot is stored as two JSON documents under fixed keys. Hosts
//! choose the backing store: in-memory for tests and embedding, a directory of
//! JSON files for native processes.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::DirectoryStore;
pub use in_memory::InMemoryStore;
pub use r#trait::{KeyValueStore, StoreError};
