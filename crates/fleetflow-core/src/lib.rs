//! # fleetflow-core
//!
//! Core crate for FleetFlow. Contains the key-value storage trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FleetFlow crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
