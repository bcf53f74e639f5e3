//! Database module for storing the API's resources

mod error;

pub use error::DbError;

use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::entities::Entity;

const SCHEMA_SQL: &str = include_str!("../../../../sql/init_schema.sql");

/// Data-access contract for one entity type.
pub trait Repository<E: Entity>: Send + Sync {
    /// Returns every stored record, ordered by key.
    fn find_all(&self) -> Result<Vec<E>, DbError>;

    fn find_by_id(&self, id: &E::Key) -> Result<Option<E>, DbError>;

    /// Persists `entity` and returns it as stored, including a freshly
    /// assigned key when it had none.
    fn save(&self, entity: E) -> Result<E, DbError>;

    /// Returns whether a row was removed.
    fn delete_by_id(&self, id: &E::Key) -> Result<bool, DbError>;
}

pub struct Database {
    db: Mutex<Connection>,
}

impl Database {
    /// Opens (or creates) the database file at `db_path` and initializes the
    /// schema
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, DbError> {
        Self::with_connection(Connection::open(db_path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, DbError> {
        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DbError> {
        self.db.lock().map_err(|_| DbError::Poisoned)
    }
}

fn select_sql<E: Entity>() -> String {
    format!(
        "SELECT {}, {} FROM {}",
        E::KEY_COLUMN,
        E::COLUMNS.join(", "),
        E::TABLE
    )
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl<E: Entity> Repository<E> for Database {
    fn find_all(&self) -> Result<Vec<E>, DbError> {
        let db = self.lock()?;
        let mut stmt = db.prepare(&format!(
            "{} ORDER BY {}",
            select_sql::<E>(),
            E::KEY_COLUMN
        ))?;

        let rows = stmt.query_map([], |row| E::from_row(row))?;

        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn find_by_id(&self, id: &E::Key) -> Result<Option<E>, DbError> {
        let db = self.lock()?;
        let found = db
            .query_row(
                &format!("{} WHERE {} = ?1", select_sql::<E>(), E::KEY_COLUMN),
                params![id],
                |row| E::from_row(row),
            )
            .optional()?;

        Ok(found)
    }

    fn save(&self, mut entity: E) -> Result<E, DbError> {
        let db = self.lock()?;

        match entity.key() {
            Some(key) => {
                let sql = format!(
                    "INSERT OR REPLACE INTO {} ({}, {}) VALUES ({})",
                    E::TABLE,
                    E::KEY_COLUMN,
                    E::COLUMNS.join(", "),
                    placeholders(E::COLUMNS.len() + 1)
                );
                let mut values: Vec<&dyn ToSql> = vec![&key];
                values.extend(entity.values());
                db.execute(&sql, params_from_iter(values))?;
            }
            None => {
                let sql = format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    E::TABLE,
                    E::COLUMNS.join(", "),
                    placeholders(E::COLUMNS.len())
                );
                db.execute(&sql, params_from_iter(entity.values()))?;

                let rowid = db.last_insert_rowid();
                debug!("Assigned {} id {}", E::NAME, rowid);
                entity.assign_rowid(rowid);
            }
        }

        Ok(entity)
    }

    fn delete_by_id(&self, id: &E::Key) -> Result<bool, DbError> {
        let db = self.lock()?;
        let removed = db.execute(
            &format!("DELETE FROM {} WHERE {} = ?1", E::TABLE, E::KEY_COLUMN),
            params![id],
        )?;

        Ok(removed > 0)
    }
}
