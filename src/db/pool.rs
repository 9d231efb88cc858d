//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating its parent directory.
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(p)?;
        Ok(Self { conn })
    }

    /// In-memory database, handy for tests of the SQLite backend.
    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}
