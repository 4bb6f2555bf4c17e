// ==========================================
// Support Stock - application state
// ==========================================
// Owns the single SQLite connection for the process lifetime
// and the API instances built on it. Dropped at shutdown.
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{DashboardApi, ExportApi, LedgerApi};
use crate::config::ConfigManager;
use crate::db::{ensure_schema, open_sqlite_connection};
use crate::repository::MovementRepository;

/// Env var overriding the database location
pub const DB_PATH_ENV: &str = "SUPPORT_STOCK_DB_PATH";

/// Database file name (same as the legacy tool)
pub const DB_FILE_NAME: &str = "supporti.db";

pub struct AppState {
    /// Database path
    pub db_path: String,

    /// Registration / undo
    pub ledger_api: Arc<LedgerApi>,

    /// Balances, history, report
    pub dashboard_api: Arc<DashboardApi>,

    /// CSV export / restore
    pub export_api: Arc<ExportApi>,

    /// Settings
    pub config: Arc<ConfigManager>,
}

impl AppState {
    /// Open the database and wire every API on one shared connection
    ///
    /// # Returns
    /// - Ok(AppState)
    /// - Err(String): the database could not be opened or initialized
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("initializing AppState, database: {}", db_path);

        let conn = open_sqlite_connection(&db_path)
            .map_err(|e| format!("cannot open database: {}", e))?;
        ensure_schema(&conn).map_err(|e| format!("cannot initialize schema: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        let movement_repo = Arc::new(
            MovementRepository::from_connection(conn.clone())
                .map_err(|e| format!("cannot create MovementRepository: {}", e))?,
        );
        let config = Arc::new(
            ConfigManager::from_connection(conn)
                .map_err(|e| format!("cannot create ConfigManager: {}", e))?,
        );

        match config.locale() {
            Ok(locale) => crate::i18n::set_locale(&locale),
            Err(e) => tracing::warn!("locale not readable, keeping default: {}", e),
        }

        let ledger_api = Arc::new(LedgerApi::new(movement_repo.clone()));
        let dashboard_api = Arc::new(DashboardApi::new(movement_repo.clone(), config.clone()));
        let export_api = Arc::new(ExportApi::new(movement_repo, config.clone()));

        tracing::info!("AppState ready");

        Ok(Self {
            db_path,
            ledger_api,
            dashboard_api,
            export_api,
            config,
        })
    }
}

/// Default database path
///
/// 1. `SUPPORT_STOCK_DB_PATH` when set
/// 2. `<data_dir>/support-stock/supporti.db`
/// 3. `./supporti.db`
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from(".").join(DB_FILE_NAME);

    if let Some(data_dir) = dirs::data_dir() {
        let dir = if cfg!(debug_assertions) {
            data_dir.join("support-stock-dev")
        } else {
            data_dir.join("support-stock")
        };

        match std::fs::create_dir_all(&dir) {
            Ok(()) => path = dir.join(DB_FILE_NAME),
            Err(e) => tracing::warn!("cannot create {}: {}, using working directory", dir.display(), e),
        }
    }

    path.to_string_lossy().to_string()
}
