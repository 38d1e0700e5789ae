//! # fleetflow-storage
//!
//! Key-value persistence providers for FleetFlow. The [`KeyValueStore`]
//! trait lives in `fleetflow-core`; this crate supplies the local
//! filesystem provider (the durable analog of the browser's
//! `localStorage`) and an in-memory provider for tests and
//! storage-less runs.

pub mod providers;

pub use fleetflow_core::traits::KeyValueStore;
pub use providers::local::LocalKeyValueStore;
pub use providers::memory::MemoryKeyValueStore;
