// ==========================================
// Support Stock - movement ledger repository
// ==========================================
// Table: movimenti (append-mostly, source of truth)
// Only deletion: the highest id (undo-last)
// Every write is committed before returning
// ==========================================

use crate::db::{ensure_schema, open_sqlite_connection};
use crate::domain::movement::{Movement, NewMovement, MAX_QUANTITY};
use crate::domain::types::{Direction, Item, Location};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex, MutexGuard};

/// Date layout of the `data` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str = "SELECT id, data, articolo, direzione, magazzino, quantita FROM movimenti";

pub struct MovementRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MovementRepository {
    /// Open a dedicated connection on `db_path`
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// Share a connection owned by the application state
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        {
            let conn = repo.get_conn()?;
            ensure_schema(&conn)?;
        }
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Writes
    // ==========================================

    /// Persist one movement
    ///
    /// # Returns
    /// - Ok(Movement): the stored movement with its new id
    /// - Err(ValidationError): quantity outside 1..=MAX_QUANTITY, or OUTBOUND on a forced-inbound location
    pub fn append(&self, movement: &NewMovement) -> RepositoryResult<Movement> {
        movement
            .validate()
            .map_err(|v| RepositoryError::ValidationError(v.to_string()))?;

        let conn = self.get_conn()?;
        let id = insert_row(&conn, movement)?;
        tracing::debug!(
            id,
            item = %movement.item,
            direction = %movement.direction,
            location = %movement.location,
            quantity = movement.quantity,
            "movement appended"
        );
        Ok(stored(id, movement))
    }

    /// Persist several movements in one transaction (all or nothing)
    ///
    /// Every movement is validated before the first insert.
    pub fn append_batch(&self, movements: &[NewMovement]) -> RepositoryResult<Vec<Movement>> {
        for m in movements {
            m.validate()
                .map_err(|v| RepositoryError::ValidationError(v.to_string()))?;
        }
        if movements.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let mut created = Vec::with_capacity(movements.len());
        for m in movements {
            let id = insert_row(&tx, m)?;
            created.push(stored(id, m));
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tracing::debug!(count = created.len(), "movement batch appended");
        Ok(created)
    }

    /// Remove the most recently created movement
    ///
    /// # Returns
    /// - Ok(Some(Movement)): the removed movement
    /// - Ok(None): the ledger was empty, nothing changed
    pub fn delete_last(&self) -> RepositoryResult<Option<Movement>> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let last = tx
            .query_row(
                &format!("{} ORDER BY id DESC LIMIT 1", SELECT_COLUMNS),
                [],
                map_movement_row,
            )
            .optional()?;

        let Some(last) = last else {
            return Ok(None);
        };

        tx.execute("DELETE FROM movimenti WHERE id = ?1", params![last.id])?;
        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tracing::debug!(id = last.id, "last movement deleted");
        Ok(Some(last))
    }

    // ==========================================
    // Reads
    // ==========================================

    /// Every movement, ascending by id
    pub fn list_all(&self) -> RepositoryResult<Vec<Movement>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
        let rows = stmt
            .query_map([], map_movement_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// Movements recorded on `date`, ascending by id
    pub fn list_recent(&self, date: NaiveDate) -> RepositoryResult<Vec<Movement>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{} WHERE data = ?1 ORDER BY id ASC", SELECT_COLUMNS))?;
        let rows = stmt
            .query_map(params![date.format(DATE_FORMAT).to_string()], map_movement_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// Newest `limit` movements, descending by id
    pub fn list_latest(&self, limit: usize) -> RepositoryResult<Vec<Movement>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id DESC LIMIT ?1", SELECT_COLUMNS))?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt
            .query_map(params![limit], map_movement_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// Number of stored movements
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM movimenti", [], |row| row.get(0))?;
        Ok(n)
    }
}

// ==========================================
// Row helpers
// ==========================================

fn insert_row(conn: &Connection, m: &NewMovement) -> RepositoryResult<i64> {
    conn.execute(
        r#"
        INSERT INTO movimenti (data, articolo, direzione, magazzino, quantita)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            m.date.format(DATE_FORMAT).to_string(),
            m.item.to_db_str(),
            m.direction.to_db_str(),
            m.location.to_db_str(),
            m.quantity,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn stored(id: i64, m: &NewMovement) -> Movement {
    Movement {
        id,
        date: m.date,
        item: m.item,
        direction: m.direction,
        location: m.location,
        quantity: m.quantity,
    }
}

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, message.into())
}

fn map_movement_row(row: &Row<'_>) -> SqliteResult<Movement> {
    let id: i64 = row.get(0)?;

    let raw_date: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT)
        .map_err(|e| conversion_error(1, format!("id={} date '{}': {}", id, raw_date, e)))?;

    let raw_item: String = row.get(2)?;
    let item: Item = raw_item
        .parse()
        .map_err(|e| conversion_error(2, format!("id={} {}", id, e)))?;

    let raw_direction: String = row.get(3)?;
    let direction: Direction = raw_direction
        .parse()
        .map_err(|e| conversion_error(3, format!("id={} {}", id, e)))?;

    let raw_location: String = row.get(4)?;
    let location: Location = raw_location
        .parse()
        .map_err(|e| conversion_error(4, format!("id={} {}", id, e)))?;

    // Rows written by other tools are not validated on insert
    let quantity: i64 = row.get(5)?;
    if quantity.abs() > MAX_QUANTITY {
        return Err(conversion_error(
            5,
            format!("id={} quantity {} out of range", id, quantity),
        ));
    }

    Ok(Movement {
        id,
        date,
        item,
        direction,
        location,
        quantity,
    })
}
