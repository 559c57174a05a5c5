//! Key-value persistence abstraction
//!
//! The record store reads and writes whole serialized collections through a
//! minimal string key-value interface. Production uses the file-backed
//! implementation in [`super::file_store`]; tests inject [`MemoryStore`].

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

/// Collection key for transactions
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Collection key for budgets
pub const BUDGETS_KEY: &str = "budgets";
/// Collection key for goals
pub const GOALS_KEY: &str = "goals";

/// A durable string key-value store.
///
/// Absent keys are not an error; `get` returns `None` and callers treat the
/// collection as empty.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;
}

/// In-memory key-value store for tests and ephemeral use
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("transactions").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("budgets", "[]").unwrap();
        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("goals", "[1]").unwrap();
        store.set("goals", "[2]").unwrap();
        assert_eq!(store.get("goals").unwrap().as_deref(), Some("[2]"));
    }
}
