//! FleetFlow demo bootstrap.
//!
//! Performs the dashboard's page-load sequence without a browser: load
//! configuration, initialize tracing, restore the persisted roster, and
//! attempt auto-login from the remembered identity. The resulting session
//! (or its absence) is reported through the log.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use fleetflow_auth::{AuthFlow, SessionManager, UserStore};
use fleetflow_core::config::AppConfig;
use fleetflow_core::error::AppError;
use fleetflow_fleet::{FleetRegistry, ServiceLogBook, TripBoard};
use fleetflow_storage::LocalKeyValueStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("FLEETFLOW_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Startup error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// The page-load sequence.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FleetFlow v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(LocalKeyValueStore::new(&config.storage.data_dir).await?);

    let users = UserStore::new(store.clone(), &config.storage);
    let sessions = SessionManager::new(store, &config.storage);
    let mut flow = AuthFlow::new(users, sessions, config.auth);

    flow.restore().await;
    tracing::info!(accounts = flow.users().accounts().len(), "Roster ready");

    let fleet = FleetRegistry::seeded();
    let board = TripBoard::new(&config.fleet);
    let logbook = ServiceLogBook::seeded();
    let stats = fleet.vehicle_stats();
    tracing::info!(
        vehicles = stats.total,
        available = stats.available,
        drivers = fleet.drivers().len(),
        trips = board.trips().len(),
        service_logs = logbook.stats().total,
        "Fleet registry ready"
    );

    match flow.try_auto_login().await? {
        Some(session) => {
            let access = flow.access_for(session.account.role);
            tracing::info!(
                user = %session.account.display_name,
                role = %session.account.role.label(),
                modules = access.allowed.len(),
                "Welcome back"
            );
        }
        None => {
            tracing::info!("No remembered identity; showing the login screen");
        }
    }

    Ok(())
}
