//! Session lifecycle manager — login, quick login, auto-login, logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use fleetflow_core::config::storage::StorageConfig;
use fleetflow_core::error::AppError;
use fleetflow_core::result::AppResult;
use fleetflow_core::traits::KeyValueStore;
use fleetflow_entity::session::Session;
use fleetflow_entity::user::{Account, Role};

use crate::password::verify_password;
use crate::store::UserStore;

/// Owns the single active session and the remembered identity.
///
/// At most one session exists per running instance. The remembered
/// identity is a durable hint written on login-with-remember and read at
/// startup to re-establish a session without credential re-entry; it is an
/// intentional trust decision equivalent to a long-lived, unsigned
/// "remember me" token. Logout never clears it.
#[derive(Debug)]
pub struct SessionManager {
    /// The active session, if any.
    current: Option<Session>,
    /// Persistence backend for the remembered identity.
    store: Arc<dyn KeyValueStore>,
    /// Storage key for the remembered identity.
    remember_key: String,
}

impl SessionManager {
    /// Create a manager with no active session.
    pub fn new(store: Arc<dyn KeyValueStore>, config: &StorageConfig) -> Self {
        Self {
            current: None,
            store,
            remember_key: config.remember_key.clone(),
        }
    }

    /// The active session, if one is established.
    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Credential login.
    ///
    /// Looks up the account by username or email, then requires an exact
    /// password match. On success the session is established and the
    /// remembered identity is written (remember) or cleared (no remember),
    /// both best-effort. On failure nothing changes: no session, no
    /// remembered-identity side effect.
    pub async fn login(
        &mut self,
        users: &UserStore,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> AppResult<Session> {
        let account = users
            .find_by_identifier(identifier)
            .filter(|a| verify_password(password, &a.password))
            .ok_or_else(|| AppError::invalid_credentials("Invalid username or password"))?
            .clone();

        if remember {
            self.remember(&account).await;
        } else {
            self.forget().await;
        }

        Ok(self.establish(account, remember))
    }

    /// Trusted demo shortcut: establish a session for the seed account of
    /// the given role without any credential check.
    ///
    /// Always succeeds while the role has a roster entry; the `NotFound`
    /// arm is defensive only, since every role is seeded.
    pub async fn quick_login(&mut self, users: &UserStore, role: Role) -> AppResult<Session> {
        let account = users
            .find_by_role(role)
            .ok_or_else(|| AppError::not_found(format!("No seed account for role '{role}'")))?
            .clone();

        info!(role = %role, username = %account.username, "Quick login");
        Ok(self.establish(account, false))
    }

    /// Attempt automatic login from the remembered identity.
    ///
    /// Returns `None` when no identity is remembered or it no longer
    /// resolves to an account. A storage read failure also degrades to
    /// `None`: auto-login is a convenience, not a requirement.
    pub async fn try_auto_login(&mut self, users: &UserStore) -> AppResult<Option<Session>> {
        let identifier = match self.store.get(&self.remember_key).await {
            Ok(Some(identifier)) => identifier,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "Failed to read remembered identity; skipping auto-login");
                return Ok(None);
            }
        };

        match users.find_by_identifier(&identifier) {
            Some(account) => {
                let account = account.clone();
                info!(username = %account.username, "Auto-login from remembered identity");
                Ok(Some(self.establish(account, true)))
            }
            None => {
                debug!("Remembered identity does not resolve to an account");
                Ok(None)
            }
        }
    }

    /// Destroy the active session.
    ///
    /// Deliberately leaves the remembered identity in place (a restart
    /// will auto-login again) and never touches the roster.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            info!(session_id = %session.id, "Signed out");
        }
    }

    /// Explicitly clear the remembered identity.
    pub async fn clear_remembered(&self) {
        self.forget().await;
    }

    /// Install the account as the active session. Crate-internal: the
    /// registration path uses it for auto-login after a new account is
    /// appended.
    pub(crate) fn establish(&mut self, account: Account, remembered: bool) -> Session {
        let session = Session::establish(account, remembered);
        info!(
            session_id = %session.id,
            username = %session.account.username,
            role = %session.account.role,
            "Session established"
        );
        self.current = Some(session.clone());
        session
    }

    /// Persist the remembered identity: the account email, falling back to
    /// the username for accounts without one. Best-effort.
    async fn remember(&self, account: &Account) {
        let identifier = if account.email.is_empty() {
            &account.username
        } else {
            &account.email
        };
        if let Err(e) = self.store.set(&self.remember_key, identifier).await {
            warn!(error = %e, "Failed to persist remembered identity");
        }
    }

    /// Clear the remembered identity. Best-effort.
    async fn forget(&self) {
        if let Err(e) = self.store.remove(&self.remember_key).await {
            warn!(error = %e, "Failed to clear remembered identity");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetflow_core::error::ErrorKind;
    use fleetflow_storage::MemoryKeyValueStore;

    fn fixtures() -> (Arc<MemoryKeyValueStore>, UserStore, SessionManager) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let config = StorageConfig::default();
        let users = UserStore::new(kv.clone(), &config);
        let sessions = SessionManager::new(kv.clone(), &config);
        (kv, users, sessions)
    }

    #[tokio::test]
    async fn test_login_by_username_and_email() {
        let (_kv, users, mut sessions) = fixtures();

        let session = sessions
            .login(&users, "admin", "Fleet@2024", false)
            .await
            .unwrap();
        assert_eq!(session.account.role, Role::Manager);

        let session = sessions
            .login(&users, "safety@fleetflow.io", "Fleet@2024", false)
            .await
            .unwrap();
        assert_eq!(session.account.role, Role::Safety);
    }

    #[tokio::test]
    async fn test_failed_login_has_no_side_effects() {
        let (kv, users, mut sessions) = fixtures();

        // Seed a remembered identity, then fail a login with remember=false;
        // the failure must not clear it nor establish a session.
        kv.set("FF_REMEMBER", "admin").await.unwrap();

        let err = sessions
            .login(&users, "admin", "wrong-password", false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
        assert!(sessions.current_session().is_none());
        assert_eq!(kv.get("FF_REMEMBER").await.unwrap().as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_remember_then_auto_login_after_restart() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let config = StorageConfig::default();
        let users = UserStore::new(kv.clone(), &config);

        let mut sessions = SessionManager::new(kv.clone(), &config);
        sessions
            .login(&users, "dispatch", "Fleet@2024", true)
            .await
            .unwrap();

        // Simulated restart: a fresh manager over the same backend.
        let mut restarted = SessionManager::new(kv, &config);
        let session = restarted.try_auto_login(&users).await.unwrap().unwrap();
        assert_eq!(session.account.username, "dispatch");
        assert!(session.remembered);
    }

    #[tokio::test]
    async fn test_login_without_remember_clears_identity() {
        let (kv, users, mut sessions) = fixtures();

        sessions.login(&users, "admin", "Fleet@2024", true).await.unwrap();
        assert!(kv.get("FF_REMEMBER").await.unwrap().is_some());

        sessions.login(&users, "admin", "Fleet@2024", false).await.unwrap();
        assert!(kv.get("FF_REMEMBER").await.unwrap().is_none());

        let mut restarted = SessionManager::new(kv, &StorageConfig::default());
        assert!(restarted.try_auto_login(&users).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_quick_login_ignores_passwords() {
        let (_kv, users, mut sessions) = fixtures();
        let session = sessions.quick_login(&users, Role::Manager).await.unwrap();
        assert_eq!(session.account.username, "admin");
        assert_eq!(session.account.display_name, "Alex Manager");
    }

    #[tokio::test]
    async fn test_logout_preserves_remembered_identity() {
        let (kv, users, mut sessions) = fixtures();

        sessions.login(&users, "admin", "Fleet@2024", true).await.unwrap();
        sessions.logout();
        assert!(sessions.current_session().is_none());

        // The prior remember=true still yields a successful auto-login.
        assert!(kv.get("FF_REMEMBER").await.unwrap().is_some());
        let session = sessions.try_auto_login(&users).await.unwrap().unwrap();
        assert_eq!(session.account.username, "admin");
    }

    #[tokio::test]
    async fn test_stale_remembered_identity_yields_none() {
        let (kv, users, mut sessions) = fixtures();
        kv.set("FF_REMEMBER", "ghost@fleetflow.io").await.unwrap();
        assert!(sessions.try_auto_login(&users).await.unwrap().is_none());
        assert!(sessions.current_session().is_none());
    }
}
