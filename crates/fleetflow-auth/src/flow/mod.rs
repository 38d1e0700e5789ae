//! The authentication flow state machine.
//!
//! Orchestrates login, registration, quick login, auto-login, and logout
//! against the [`UserStore`] and [`SessionManager`], and exposes the
//! surface the presentation layer consumes: `current_session`, `login`,
//! `register`, `quick_login`, `logout`, `access_for`.

pub mod validate;

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use fleetflow_core::config::auth::AuthConfig;
use fleetflow_core::error::AppError;
use fleetflow_core::result::AppResult;
use fleetflow_entity::module::Module;
use fleetflow_entity::session::Session;
use fleetflow_entity::user::Role;

use crate::password::PasswordStrength;
use crate::rbac::{AccessPolicy, RoleAccessConfig};
use crate::session::SessionManager;
use crate::store::UserStore;

pub use validate::{RegistrationIssues, RegistrationRequest};

/// Where the flow currently stands in the session lifecycle.
///
/// `Unauthenticated → Authenticating → Authenticated → Unauthenticated`
/// (on logout); registration is an alternate entry edge into
/// `Authenticating` that lands in `Authenticated` on success. There are
/// no other terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No session; login and registration are available.
    Unauthenticated,
    /// An attempt is in flight; no second attempt is accepted.
    Authenticating,
    /// A session is established.
    Authenticated,
}

/// Orchestrates a single session lifecycle.
///
/// "Authenticating" is an artificially delayed window purely for UX
/// pacing, not a real I/O boundary. The delay always runs to completion
/// (no cancellation), and while it is outstanding any further attempt is
/// rejected — the state check mirrors the disabled submit control.
#[derive(Debug)]
pub struct AuthFlow {
    /// The account roster.
    users: UserStore,
    /// The session and remembered-identity owner.
    sessions: SessionManager,
    /// Role-to-module access mapping.
    policy: AccessPolicy,
    /// Validation thresholds and pacing delays.
    config: AuthConfig,
    /// Current lifecycle state.
    state: AuthState,
}

impl AuthFlow {
    /// Create a flow over the given stores.
    pub fn new(users: UserStore, sessions: SessionManager, config: AuthConfig) -> Self {
        Self {
            users,
            sessions,
            policy: AccessPolicy::new(),
            config,
            state: AuthState::Unauthenticated,
        }
    }

    /// Startup hook: load the persisted roster, if any.
    pub async fn restore(&mut self) {
        self.users.restore().await;
    }

    /// Startup edge: attempt login from the remembered identity.
    pub async fn try_auto_login(&mut self) -> AppResult<Option<Session>> {
        let session = self.sessions.try_auto_login(&self.users).await?;
        if session.is_some() {
            self.state = AuthState::Authenticated;
        }
        Ok(session)
    }

    /// Credential login with the configured pacing delay.
    pub async fn login(
        &mut self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> AppResult<Session> {
        self.ensure_not_authenticating()?;

        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AppError::validation_field(
                "identifier",
                "Enter your username or email",
            ));
        }
        if password.is_empty() {
            return Err(AppError::validation_field("password", "Enter your password"));
        }

        self.state = AuthState::Authenticating;
        sleep(Duration::from_millis(self.config.login_delay_ms)).await;

        let result = self
            .sessions
            .login(&self.users, identifier, password, remember)
            .await;
        self.settle(&result);
        result
    }

    /// Validate a registration request without submitting it, reporting
    /// every failing field. Backs the live per-field form validation.
    pub fn validate_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<(), RegistrationIssues> {
        validate::validate_registration(request, &self.users, &self.config).map(|_| ())
    }

    /// Register a new account and log it in.
    ///
    /// All field validations must pass before `Authenticating` is entered;
    /// a failure keeps the flow in `Unauthenticated` and reports which
    /// field(s) failed. A successful registration establishes the session
    /// directly — no separate login step.
    pub async fn register(&mut self, request: RegistrationRequest) -> AppResult<Session> {
        self.ensure_not_authenticating()?;

        let candidate = validate::validate_registration(&request, &self.users, &self.config)
            .map_err(AppError::from)?;

        if let Some(strength) = PasswordStrength::classify(&candidate.password) {
            debug!(strength = %strength, "Password strength at registration");
        }

        self.state = AuthState::Authenticating;
        sleep(Duration::from_millis(self.config.register_delay_ms)).await;

        let result = match self.users.register(candidate).await {
            Ok(account) => Ok(self.sessions.establish(account, false)),
            Err(e) => Err(e),
        };
        self.settle(&result);
        result
    }

    /// Demo shortcut: establish a session for the role's seed account with
    /// no credential check and no pacing delay.
    pub async fn quick_login(&mut self, role: Role) -> AppResult<Session> {
        self.ensure_not_authenticating()?;

        let result = self.sessions.quick_login(&self.users, role).await;
        self.settle(&result);
        result
    }

    /// Destroy the active session. The remembered identity survives.
    pub fn logout(&mut self) {
        self.sessions.logout();
        self.state = AuthState::Unauthenticated;
    }

    /// Explicitly clear the remembered identity.
    pub async fn clear_remembered(&self) {
        self.sessions.clear_remembered().await;
    }

    /// The active session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.sessions.current_session()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AuthState {
        self.state
    }

    /// The account roster, for the user-management view.
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Resolve the module access config for a role.
    pub fn access_for(&self, role: Role) -> RoleAccessConfig {
        self.policy.resolve(role)
    }

    /// Whether `role` may open `module`.
    pub fn is_module_allowed(&self, role: Role, module: Module) -> bool {
        self.policy.is_module_allowed(role, module)
    }

    fn ensure_not_authenticating(&self) -> AppResult<()> {
        if self.state == AuthState::Authenticating {
            return Err(AppError::conflict(
                "An authentication attempt is already in progress",
            ));
        }
        Ok(())
    }

    fn settle(&mut self, result: &AppResult<Session>) {
        self.state = match result {
            Ok(_) => AuthState::Authenticated,
            Err(_) => AuthState::Unauthenticated,
        };
    }
}
