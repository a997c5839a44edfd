//! Jobtrack storage: durable single-key slots and the persistence adapter
//! that keeps them in step with the in-memory store.
mod adapter;
mod codec;
mod error;
mod slot;

pub use adapter::PersistenceAdapter;
pub use codec::{decode_applications, encode_applications};
pub use error::StorageError;
pub use slot::{FileSlot, MemorySlot, StorageSlot};
