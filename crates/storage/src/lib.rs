#![forbid(unsafe_code)]

pub mod json_store;
pub mod repository;

pub use json_store::JsonFileStore;
pub use repository::{MemoryStore, ProgressStore, SnapshotStore, StorageError, StoreKey};
