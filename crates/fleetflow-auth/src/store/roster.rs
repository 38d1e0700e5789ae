//! The registered-account roster with best-effort persistence.

use std::sync::Arc;

use tracing::{debug, info, warn};

use fleetflow_core::config::storage::StorageConfig;
use fleetflow_core::error::AppError;
use fleetflow_core::result::AppResult;
use fleetflow_core::traits::KeyValueStore;
use fleetflow_entity::user::{Account, NewAccount, Role};

use super::seed::seed_roster;

/// Owns the roster of registered accounts.
///
/// The roster starts from the built-in seed accounts and is replaced by a
/// previously persisted roster on [`restore`](Self::restore). Accounts are
/// append-only: registration appends, nothing mutates or deletes.
///
/// Persistence is an optimization, never a correctness requirement:
/// storage failures are logged and swallowed so account creation never
/// blocks on the storage medium.
#[derive(Debug)]
pub struct UserStore {
    /// All registered accounts, seed accounts first.
    accounts: Vec<Account>,
    /// Persistence backend.
    store: Arc<dyn KeyValueStore>,
    /// Storage key for the serialized roster.
    users_key: String,
}

impl UserStore {
    /// Create a store holding the seed roster.
    pub fn new(store: Arc<dyn KeyValueStore>, config: &StorageConfig) -> Self {
        Self::with_accounts(store, config, seed_roster())
    }

    /// Create a store with an explicit initial roster.
    pub fn with_accounts(
        store: Arc<dyn KeyValueStore>,
        config: &StorageConfig,
        accounts: Vec<Account>,
    ) -> Self {
        Self {
            accounts,
            store,
            users_key: config.users_key.clone(),
        }
    }

    /// All accounts, in roster order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Find an account by username OR email. Case-sensitive exact match.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.username == identifier || a.email == identifier)
    }

    /// Find the first account with the given role.
    ///
    /// Seed accounts sit at the front of the roster, so for the demo roles
    /// this resolves the seed account even after registrations.
    pub fn find_by_role(&self, role: Role) -> Option<&Account> {
        self.accounts.iter().find(|a| a.role == role)
    }

    /// Whether an account with this exact email exists.
    pub fn email_registered(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.email == email)
    }

    /// Register a new account.
    ///
    /// Fails with `DuplicateEmail` when the email is already registered,
    /// leaving the roster unchanged. The username is derived from the
    /// email local part; usernames are deliberately not unique-checked
    /// here (only email uniqueness is enforced for registration).
    ///
    /// The uniqueness check and the append happen inside this single
    /// `&mut self` call, so no caller can interleave between them.
    pub async fn register(&mut self, candidate: NewAccount) -> AppResult<Account> {
        if self.email_registered(&candidate.email) {
            return Err(AppError::duplicate_email(format!(
                "This email is already registered: {}",
                candidate.email
            )));
        }

        let username = candidate
            .email
            .split('@')
            .next()
            .unwrap_or(&candidate.email)
            .to_string();

        let account = Account {
            username,
            email: candidate.email,
            password: candidate.password,
            display_name: candidate.display_name,
            role: candidate.role,
        };

        self.accounts.push(account.clone());
        info!(
            username = %account.username,
            role = %account.role,
            "Registered new account"
        );

        self.persist().await;
        Ok(account)
    }

    /// Serialize the full roster to storage. Best-effort: failures are
    /// logged and never surfaced.
    pub async fn persist(&self) {
        let payload = match serde_json::to_string(&self.accounts) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize roster; skipping persist");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.users_key, &payload).await {
            warn!(error = %e, "Failed to persist roster; continuing without storage");
        }
    }

    /// Load a previously persisted roster, replacing the seed roster when
    /// the payload is a well-formed account array. Absent or malformed
    /// data is ignored.
    pub async fn restore(&mut self) {
        let payload = match self.store.get(&self.users_key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("No persisted roster; keeping seed accounts");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read persisted roster; keeping seed accounts");
                return;
            }
        };

        match serde_json::from_str::<Vec<Account>>(&payload) {
            Ok(accounts) => {
                info!(count = accounts.len(), "Restored persisted roster");
                self.accounts = accounts;
            }
            Err(e) => {
                warn!(error = %e, "Ignoring malformed persisted roster");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetflow_core::error::ErrorKind;
    use fleetflow_storage::MemoryKeyValueStore;

    fn store() -> UserStore {
        UserStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            &StorageConfig::default(),
        )
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            display_name: "Riley Ops".to_string(),
            email: email.to_string(),
            password: "Depot#2024".to_string(),
            role: Role::Dispatcher,
        }
    }

    #[test]
    fn test_find_by_identifier_exact_case() {
        let store = store();
        assert!(store.find_by_identifier("admin").is_some());
        assert!(store.find_by_identifier("manager@fleetflow.io").is_some());
        assert!(store.find_by_identifier("Admin").is_none());
        assert!(store.find_by_identifier("manager@Fleetflow.io").is_none());
    }

    #[tokio::test]
    async fn test_register_round_trip() {
        let mut store = store();
        let account = store.register(new_account("riley@depot.example")).await.unwrap();
        assert_eq!(account.username, "riley");

        let found = store.find_by_identifier("riley@depot.example").unwrap();
        assert_eq!(found, &account);
    }

    #[tokio::test]
    async fn test_duplicate_email_leaves_roster_unchanged() {
        let mut store = store();
        let before = store.accounts().len();
        let err = store
            .register(new_account("dispatcher@fleetflow.io"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
        assert_eq!(store.accounts().len(), before);
    }

    #[tokio::test]
    async fn test_duplicate_email_check_is_case_sensitive() {
        // Exact-match semantics: a differently-cased domain is a distinct
        // email as far as the roster is concerned.
        let mut store = store();
        assert!(store.register(new_account("dispatcher@Fleet.io")).await.is_ok());
        let err = store
            .register(new_account("dispatcher@Fleet.io"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
    }

    #[tokio::test]
    async fn test_duplicate_usernames_tolerated() {
        // Usernames derive from the email local part and are deliberately
        // not unique-checked for self-registration (relaxed invariant).
        let mut store = store();
        let first = store.register(new_account("dana@depot.example")).await.unwrap();
        let second = store.register(new_account("dana@hub.example")).await.unwrap();
        assert_eq!(first.username, "dana");
        assert_eq!(second.username, "dana");
    }

    #[tokio::test]
    async fn test_emails_pairwise_distinct_after_registrations() {
        let mut store = store();
        store.register(new_account("a@ops.example")).await.unwrap();
        store.register(new_account("b@ops.example")).await.unwrap();
        let emails: Vec<_> = store.accounts().iter().map(|a| &a.email).collect();
        for (i, a) in emails.iter().enumerate() {
            for b in &emails[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[tokio::test]
    async fn test_restore_round_trips_registration() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let config = StorageConfig::default();

        let mut store = UserStore::new(kv.clone(), &config);
        store.register(new_account("riley@depot.example")).await.unwrap();

        // Simulated restart: a fresh store over the same backend.
        let mut restarted = UserStore::new(kv, &config);
        assert!(restarted.find_by_identifier("riley@depot.example").is_none());
        restarted.restore().await;
        assert!(restarted.find_by_identifier("riley@depot.example").is_some());
        assert_eq!(restarted.accounts().len(), 4);
    }

    #[tokio::test]
    async fn test_restore_ignores_malformed_payload() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let config = StorageConfig::default();
        kv.set(&config.users_key, "{\"not\":\"an array\"}").await.unwrap();

        let mut store = UserStore::new(kv, &config);
        store.restore().await;
        assert_eq!(store.accounts().len(), 3);
        assert!(store.find_by_identifier("admin").is_some());
    }
}
