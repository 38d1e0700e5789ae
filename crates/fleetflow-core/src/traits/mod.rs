//! Trait definitions implemented by the provider crates.

pub mod storage;

pub use storage::KeyValueStore;
