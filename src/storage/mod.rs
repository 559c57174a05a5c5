//! Storage layer for Ledgerly
//!
//! The record store keeps each entity collection in memory and persists it as
//! one serialized value in a key-value store. The store itself is injected:
//! file-backed in production, in-memory in tests.

pub mod budgets;
pub mod file_store;
pub mod goals;
pub mod kv;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_store::FileStore;
pub use goals::GoalRepository;
pub use kv::{KeyValueStore, MemoryStore};
pub use transactions::TransactionRepository;

use std::sync::Arc;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a Storage instance over an injected key-value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transactions: TransactionRepository::new(store.clone()),
            budgets: BudgetRepository::new(store.clone()),
            goals: GoalRepository::new(store),
        }
    }

    /// Create a file-backed Storage instance rooted at the configured data dir
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(Arc::new(FileStore::new(paths.data_dir()))))
    }

    /// Create an in-memory Storage instance (tests, dry runs)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Load all collections from the store
    pub fn load_all(&self) -> LedgerResult<()> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all collections to the store
    pub fn save_all(&self) -> LedgerResult<()> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        Ok(())
    }
}
