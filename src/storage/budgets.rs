//! Budget repository
//!
//! Budgets are few; lookups scan the in-memory map. The (category, month)
//! uniqueness invariant is enforced by the service layer, which consults
//! `find_by_category_month` before inserting.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, BudgetId, Category, Month};

use super::kv::{KeyValueStore, BUDGETS_KEY};

/// Repository for budget persistence
pub struct BudgetRepository {
    store: Arc<dyn KeyValueStore>,
    data: RwLock<HashMap<BudgetId, Budget>>,
}

fn lock_err(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(format!("Failed to acquire lock: {}", e))
}

impl BudgetRepository {
    /// Create a new budget repository backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read_data(&self) -> LedgerResult<RwLockReadGuard<'_, HashMap<BudgetId, Budget>>> {
        self.data.read().map_err(lock_err)
    }

    fn write_data(&self) -> LedgerResult<RwLockWriteGuard<'_, HashMap<BudgetId, Budget>>> {
        self.data.write().map_err(lock_err)
    }

    /// Load budgets from the store.
    ///
    /// Fails soft: a missing key or an undecodable payload yields an empty
    /// collection rather than an error.
    pub fn load(&self) -> LedgerResult<()> {
        let budgets: Vec<Budget> = self
            .store
            .get(BUDGETS_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut data = self.write_data()?;
        data.clear();
        for budget in budgets {
            data.insert(budget.id, budget);
        }
        Ok(())
    }

    /// Persist the whole collection to the store
    pub fn save(&self) -> LedgerResult<()> {
        let data = self.read_data()?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| {
            a.month
                .to_string()
                .cmp(&b.month.to_string())
                .then(a.category.name().cmp(b.category.name()))
        });

        let raw = serde_json::to_string_pretty(&budgets)?;
        self.store.set(BUDGETS_KEY, &raw)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> LedgerResult<Option<Budget>> {
        Ok(self.read_data()?.get(&id).cloned())
    }

    /// Get all budgets, ordered by month then category
    pub fn get_all(&self) -> LedgerResult<Vec<Budget>> {
        let data = self.read_data()?;
        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| {
            a.month
                .to_string()
                .cmp(&b.month.to_string())
                .then(a.category.name().cmp(b.category.name()))
        });
        Ok(budgets)
    }

    /// Get the budgets of one month
    pub fn get_by_month(&self, month: &Month) -> LedgerResult<Vec<Budget>> {
        let mut budgets = self.get_all()?;
        budgets.retain(|b| b.month == *month);
        Ok(budgets)
    }

    /// Find the budget covering a (category, month) pair, if one exists
    pub fn find_by_category_month(
        &self,
        category: Category,
        month: &Month,
    ) -> LedgerResult<Option<Budget>> {
        let data = self.read_data()?;
        Ok(data.values().find(|b| b.covers(category, month)).cloned())
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> LedgerResult<()> {
        let mut data = self.write_data()?;
        data.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget. Returns whether anything was removed.
    pub fn delete(&self, id: BudgetId) -> LedgerResult<bool> {
        let mut data = self.write_data()?;
        Ok(data.remove(&id).is_some())
    }

    /// Count budgets
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read_data()?.len())
    }
}
