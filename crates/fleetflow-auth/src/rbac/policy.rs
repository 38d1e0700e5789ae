//! Role-to-module access mapping.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fleetflow_core::result::AppResult;
use fleetflow_entity::module::Module;
use fleetflow_entity::user::Role;

/// The allow/deny module mapping for a single role.
///
/// `allowed` and `locked` are disjoint for every role. The Manager role
/// covers the full catalog; Dispatcher and Safety get strictly smaller
/// allowed sets with the remainder explicitly locked. Attempting a locked
/// module is a reportable, non-fatal event the presentation layer
/// surfaces, not a system error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAccessConfig {
    /// The role this config belongs to.
    pub role: Role,
    /// Modules the role may open.
    pub allowed: HashSet<Module>,
    /// Modules shown locked for the role.
    pub locked: HashSet<Module>,
}

impl RoleAccessConfig {
    /// Whether the role may open the given module.
    pub fn is_allowed(&self, module: Module) -> bool {
        self.allowed.contains(&module)
    }

    /// Whether the module is explicitly locked for the role.
    pub fn is_locked(&self, module: Module) -> bool {
        self.locked.contains(&module)
    }
}

/// Maps a role to its permitted and locked module sets.
///
/// Stateless: the mapping is an exhaustive `match` over the closed role
/// enum, so adding or misnaming a role is a compile-time error rather
/// than a silent lookup miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }

    /// Resolve the access config for a role.
    pub fn resolve(&self, role: Role) -> RoleAccessConfig {
        let (allowed, locked): (&[Module], &[Module]) = match role {
            // Superuser: the entire catalog, nothing locked.
            Role::Manager => (&Module::CATALOG, &[]),
            // Dispatcher's locked list reproduces the original config,
            // which leaves `drivers` out of both sets; `is_allowed` is
            // still false for it.
            Role::Dispatcher => (
                &[
                    Module::Overview,
                    Module::Vehicles,
                    Module::Routes,
                    Module::Dispatch,
                ],
                &[
                    Module::Maintenance,
                    Module::Compliance,
                    Module::Reports,
                    Module::Settings,
                    Module::Users,
                ],
            ),
            Role::Safety => (
                &[Module::Overview, Module::Drivers, Module::Compliance],
                &[
                    Module::Vehicles,
                    Module::Routes,
                    Module::Dispatch,
                    Module::Maintenance,
                    Module::Reports,
                    Module::Settings,
                    Module::Users,
                ],
            ),
        };

        RoleAccessConfig {
            role,
            allowed: allowed.iter().copied().collect(),
            locked: locked.iter().copied().collect(),
        }
    }

    /// Resolve by role name, for stringly-typed callers.
    ///
    /// This is the defensive `UnknownRole` path; it cannot be reached
    /// through [`resolve`](Self::resolve) because the role enum is closed.
    pub fn resolve_named(&self, role: &str) -> AppResult<RoleAccessConfig> {
        Ok(self.resolve(Role::from_str(role)?))
    }

    /// Whether `role` may open `module`.
    pub fn is_module_allowed(&self, role: Role, module: Module) -> bool {
        self.resolve(role).is_allowed(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetflow_core::error::ErrorKind;

    #[test]
    fn test_manager_covers_full_catalog() {
        let config = AccessPolicy::new().resolve(Role::Manager);
        assert_eq!(config.allowed.len(), Module::CATALOG.len());
        assert!(config.locked.is_empty());
    }

    #[test]
    fn test_allowed_and_locked_disjoint() {
        let policy = AccessPolicy::new();
        for role in Role::ALL {
            let config = policy.resolve(role);
            assert!(config.allowed.is_disjoint(&config.locked), "role {role}");
        }
    }

    #[test]
    fn test_non_manager_sets_strictly_smaller() {
        let policy = AccessPolicy::new();
        for role in [Role::Dispatcher, Role::Safety] {
            assert!(policy.resolve(role).allowed.len() < Module::CATALOG.len());
        }
    }

    #[test]
    fn test_module_gates() {
        let policy = AccessPolicy::new();
        assert!(!policy.is_module_allowed(Role::Dispatcher, Module::Users));
        assert!(policy.is_module_allowed(Role::Manager, Module::Users));
        assert!(policy.is_module_allowed(Role::Safety, Module::Compliance));
        assert!(!policy.is_module_allowed(Role::Safety, Module::Dispatch));
    }

    #[test]
    fn test_dispatcher_drivers_gap_preserved() {
        // The original role config leaves `drivers` out of both of the
        // dispatcher's sets; the module is denied but not shown locked.
        let config = AccessPolicy::new().resolve(Role::Dispatcher);
        assert!(!config.is_allowed(Module::Drivers));
        assert!(!config.is_locked(Module::Drivers));
    }

    #[test]
    fn test_resolve_named() {
        let policy = AccessPolicy::new();
        assert!(policy.resolve_named("safety").is_ok());
        let err = policy.resolve_named("intern").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownRole);
    }
}
