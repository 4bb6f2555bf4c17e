// ==========================================
// Support Stock - configuration manager
// ==========================================
// Storage: config_kv table (key, value)
// Missing keys fall back to built-in defaults
// ==========================================

use crate::db::{ensure_schema, open_sqlite_connection};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Known configuration keys
pub mod config_keys {
    /// UI language ("it" / "en")
    pub const UI_LOCALE: &str = "ui.locale";
    /// Default CSV export file name
    pub const EXPORT_FILE_NAME: &str = "export.file_name";
    /// Rows shown in the latest-movements table
    pub const HISTORY_LATEST_LIMIT: &str = "history.latest_limit";
}

pub const DEFAULT_LOCALE: &str = "it";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "movimenti_supporti.csv";
pub const DEFAULT_LATEST_LIMIT: usize = 150;

/// Locales with a translation file
pub const SUPPORTED_LOCALES: [&str; 2] = ["it", "en"];

/// Effective settings handed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    pub locale: String,
    pub export_file_name: String,
    pub latest_limit: usize,
}

pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let manager = Self { conn };
        {
            let conn = manager.get_conn()?;
            ensure_schema(&conn)?;
        }
        Ok(manager)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Raw access
    // ==========================================

    pub fn get_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO config_kv (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        tracing::info!(key, value, "config updated");
        Ok(())
    }

    /// All stored overrides, sorted by key
    pub fn snapshot(&self) -> RepositoryResult<BTreeMap<String, String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT key, value FROM config_kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut map = BTreeMap::new();
        for row in rows {
            let (k, v) = row?;
            map.insert(k, v);
        }
        Ok(map)
    }

    // ==========================================
    // Typed getters
    // ==========================================

    pub fn locale(&self) -> RepositoryResult<String> {
        Ok(self
            .get_value(config_keys::UI_LOCALE)?
            .filter(|v| SUPPORTED_LOCALES.contains(&v.as_str()))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string()))
    }

    pub fn export_file_name(&self) -> RepositoryResult<String> {
        Ok(self
            .get_value(config_keys::EXPORT_FILE_NAME)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_FILE_NAME.to_string()))
    }

    /// Unparseable or zero values fall back to the default
    pub fn latest_limit(&self) -> RepositoryResult<usize> {
        let raw = self.get_value(config_keys::HISTORY_LATEST_LIMIT)?;
        let parsed = raw.as_deref().and_then(|v| v.trim().parse::<usize>().ok());
        match parsed {
            Some(n) if n > 0 => Ok(n),
            Some(_) | None => {
                if let Some(v) = raw {
                    tracing::warn!(value = %v, "invalid history.latest_limit, using default");
                }
                Ok(DEFAULT_LATEST_LIMIT)
            }
        }
    }

    pub fn ui_config(&self) -> RepositoryResult<UiConfig> {
        Ok(UiConfig {
            locale: self.locale()?,
            export_file_name: self.export_file_name()?,
            latest_limit: self.latest_limit()?,
        })
    }

    // ==========================================
    // Typed setters
    // ==========================================

    pub fn set_locale(&self, locale: &str) -> RepositoryResult<()> {
        let locale = locale.trim();
        if !SUPPORTED_LOCALES.contains(&locale) {
            return Err(RepositoryError::ValidationError(format!(
                "unsupported locale '{}'",
                locale
            )));
        }
        self.set_value(config_keys::UI_LOCALE, locale)
    }

    pub fn set_export_file_name(&self, name: &str) -> RepositoryResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RepositoryError::ValidationError(
                "export file name must not be empty".to_string(),
            ));
        }
        self.set_value(config_keys::EXPORT_FILE_NAME, name)
    }

    pub fn set_latest_limit(&self, limit: usize) -> RepositoryResult<()> {
        if limit == 0 {
            return Err(RepositoryError::ValidationError(
                "history limit must be at least 1".to_string(),
            ));
        }
        self.set_value(config_keys::HISTORY_LATEST_LIMIT, &limit.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = memory_manager();
        let ui = config.ui_config().unwrap();
        assert_eq!(ui.locale, "it");
        assert_eq!(ui.export_file_name, "movimenti_supporti.csv");
        assert_eq!(ui.latest_limit, 150);
        assert!(config.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_setters_persist() {
        let config = memory_manager();
        config.set_locale("en").unwrap();
        config.set_export_file_name("backup.csv").unwrap();
        config.set_latest_limit(20).unwrap();

        let ui = config.ui_config().unwrap();
        assert_eq!(ui.locale, "en");
        assert_eq!(ui.export_file_name, "backup.csv");
        assert_eq!(ui.latest_limit, 20);
        assert_eq!(config.snapshot().unwrap().len(), 3);
    }

    #[test]
    fn test_setters_validate() {
        let config = memory_manager();
        assert!(config.set_locale("fr").is_err());
        assert!(config.set_export_file_name("  ").is_err());
        assert!(config.set_latest_limit(0).is_err());
    }

    #[test]
    fn test_garbage_limit_falls_back() {
        let config = memory_manager();
        config
            .set_value(config_keys::HISTORY_LATEST_LIMIT, "many")
            .unwrap();
        assert_eq!(config.latest_limit().unwrap(), DEFAULT_LATEST_LIMIT);
    }
}
