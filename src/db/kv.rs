//! SQLite-backed [`Storage`]: one row per key in `kv_store`.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::Storage;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStorage {
    pool: DbPool,
    applied: Vec<&'static str>,
}

impl SqliteStorage {
    /// Open the database file and make sure the schema is current.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        let applied = init_db(&pool.conn)?;
        Ok(Self { pool, applied })
    }

    /// Migrations applied while opening this database.
    pub fn applied_migrations(&self) -> &[&'static str] {
        &self.applied
    }

    /// Connection shared with the audit log.
    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl Storage for SqliteStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, now],
        )?;
        Ok(())
    }
}
