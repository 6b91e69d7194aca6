//! geraete-storage
//!
//! Local key/value persistence for check records. The [`KeyValueStore`]
//! capability is what the workflow writes through; [`FileStore`] and
//! [`MemoryStore`] are the two implementations.

pub mod error;
pub mod fs;
pub mod record;
pub mod store;

pub use crate::error::StorageError;
pub use crate::fs::FileStore;
pub use crate::store::{KeyValueStore, MemoryStore};
