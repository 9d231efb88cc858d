//! Durable key-value storage behind the race store.
//!
//! The race list lives under a single key as serialized JSON.
//! `SqliteStorage` (in `db::kv`) backs the CLI; `MemoryStorage` backs tests.

use crate::errors::AppResult;
use std::collections::HashMap;

pub trait Storage {
    /// Value stored under `key`, or `None` if the key was never written.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Insert or replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one key, e.g. a previous session's data.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut s = Self::new();
        s.entries.insert(key.to_string(), value.to_string());
        s
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
