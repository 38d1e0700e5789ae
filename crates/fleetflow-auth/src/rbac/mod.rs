//! Role-based module access.

pub mod policy;

pub use policy::{AccessPolicy, RoleAccessConfig};
