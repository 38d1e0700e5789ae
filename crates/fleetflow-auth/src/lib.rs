//! # fleetflow-auth
//!
//! Authentication, authorization, and session management for the FleetFlow
//! demo dashboard.
//!
//! ## Modules
//!
//! - `store` — the account roster with seed accounts and best-effort persistence
//! - `session` — session lifecycle (login, quick login, auto-login, logout)
//! - `rbac` — role-based module access resolution
//! - `password` — plaintext credential comparison and strength classification
//! - `flow` — the orchestrating state machine the presentation layer drives

pub mod flow;
pub mod password;
pub mod rbac;
pub mod session;
pub mod store;

pub use flow::{AuthFlow, AuthState, RegistrationIssues, RegistrationRequest};
pub use password::{PasswordPolicy, PasswordStrength};
pub use rbac::{AccessPolicy, RoleAccessConfig};
pub use session::SessionManager;
pub use store::UserStore;
