//! Credential store implementations.

pub mod file_store;
pub mod memory_store;

pub use file_store::JsonFileCredentialStore;
pub use memory_store::MemoryCredentialStore;
