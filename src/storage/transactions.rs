//! Transaction repository
//!
//! Keeps the transaction collection in memory with category and goal indexes,
//! persisting the whole collection to the key-value store on save.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, GoalId, Month, Transaction, TransactionId};

use super::kv::{KeyValueStore, TRANSACTIONS_KEY};

/// Repository for transaction persistence with indexing
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: category -> transaction ids
    by_category: RwLock<HashMap<Category, Vec<TransactionId>>>,
    /// Index: goal id -> transaction ids
    by_goal: RwLock<HashMap<GoalId, Vec<TransactionId>>>,
}

fn lock_err(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(format!("Failed to acquire lock: {}", e))
}

impl TransactionRepository {
    /// Create a new transaction repository backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
            by_goal: RwLock::new(HashMap::new()),
        }
    }

    fn read_data(&self) -> LedgerResult<RwLockReadGuard<'_, HashMap<TransactionId, Transaction>>> {
        self.data.read().map_err(lock_err)
    }

    fn write_data(
        &self,
    ) -> LedgerResult<RwLockWriteGuard<'_, HashMap<TransactionId, Transaction>>> {
        self.data.write().map_err(lock_err)
    }

    /// Load transactions from the store and rebuild indexes.
    ///
    /// Fails soft: a missing key or an undecodable payload yields an empty
    /// collection rather than an error.
    pub fn load(&self) -> LedgerResult<()> {
        let transactions: Vec<Transaction> = self
            .store
            .get(TRANSACTIONS_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut data = self.write_data()?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;
        let mut by_goal = self.by_goal.write().map_err(lock_err)?;

        data.clear();
        by_category.clear();
        by_goal.clear();

        for txn in transactions {
            by_category.entry(txn.category).or_default().push(txn.id);
            if let Some(goal_id) = txn.goal_id {
                by_goal.entry(goal_id).or_default().push(txn.id);
            }
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Persist the whole collection to the store
    pub fn save(&self) -> LedgerResult<()> {
        let data = self.read_data()?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let raw = serde_json::to_string_pretty(&transactions)?;
        self.store.set(TRANSACTIONS_KEY, &raw)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        Ok(self.read_data()?.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> LedgerResult<Vec<Transaction>> {
        let data = self.read_data()?;
        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Get transactions for a category, newest first
    pub fn get_by_category(&self, category: Category) -> LedgerResult<Vec<Transaction>> {
        let data = self.read_data()?;
        let by_category = self.by_category.read().map_err(lock_err)?;

        let ids = by_category
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Get transactions contributing to a goal
    pub fn get_by_goal(&self, goal_id: GoalId) -> LedgerResult<Vec<Transaction>> {
        let data = self.read_data()?;
        let by_goal = self.by_goal.read().map_err(lock_err)?;

        let ids = by_goal.get(&goal_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Get transactions dated inside a month, newest first
    pub fn get_by_month(&self, month: &Month) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = self.get_all()?;
        transactions.retain(|t| month.contains(t.date));
        Ok(transactions)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> LedgerResult<()> {
        let mut data = self.write_data()?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;
        let mut by_goal = self.by_goal.write().map_err(lock_err)?;

        // Drop stale index entries when updating
        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_category.get_mut(&old.category) {
                ids.retain(|&id| id != txn.id);
            }
            if let Some(goal_id) = old.goal_id {
                if let Some(ids) = by_goal.get_mut(&goal_id) {
                    ids.retain(|&id| id != txn.id);
                }
            }
        }

        by_category.entry(txn.category).or_default().push(txn.id);
        if let Some(goal_id) = txn.goal_id {
            by_goal.entry(goal_id).or_default().push(txn.id);
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction. Returns whether anything was removed.
    pub fn delete(&self, id: TransactionId) -> LedgerResult<bool> {
        let mut data = self.write_data()?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;
        let mut by_goal = self.by_goal.write().map_err(lock_err)?;

        match data.remove(&id) {
            Some(txn) => {
                if let Some(ids) = by_category.get_mut(&txn.category) {
                    ids.retain(|&tid| tid != id);
                }
                if let Some(goal_id) = txn.goal_id {
                    if let Some(ids) = by_goal.get_mut(&goal_id) {
                        ids.retain(|&tid| tid != id);
                    }
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Count transactions
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read_data()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::kv::MemoryStore;
    use chrono::NaiveDate;

    fn repo_with_store() -> (Arc<MemoryStore>, TransactionRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = TransactionRepository::new(store.clone());
        repo.load().unwrap();
        (store, repo)
    }

    fn txn(cents: i64, category: Category, day: u32) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            category,
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_store, repo) = repo_with_store();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_load_tolerates_corrupt_payload() {
        let store = Arc::new(MemoryStore::new());
        store.set(TRANSACTIONS_KEY, "not valid json").unwrap();

        let repo = TransactionRepository::new(store);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_store, repo) = repo_with_store();
        let t = txn(-5000, Category::Food, 15);
        let id = t.id;

        repo.upsert(t).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), -5000);
    }

    #[test]
    fn test_get_by_category_index() {
        let (_store, repo) = repo_with_store();

        repo.upsert(txn(-100, Category::Food, 1)).unwrap();
        repo.upsert(txn(-200, Category::Food, 2)).unwrap();
        repo.upsert(txn(-300, Category::Transport, 3)).unwrap();

        assert_eq!(repo.get_by_category(Category::Food).unwrap().len(), 2);
        assert_eq!(repo.get_by_category(Category::Transport).unwrap().len(), 1);
        assert_eq!(repo.get_by_category(Category::Health).unwrap().len(), 0);
    }

    #[test]
    fn test_get_by_goal_index() {
        let (_store, repo) = repo_with_store();
        let goal_id = GoalId::new();

        let mut a = txn(-100, Category::GoalContribution, 1);
        a.goal_id = Some(goal_id);
        repo.upsert(a).unwrap();
        repo.upsert(txn(-200, Category::Food, 2)).unwrap();

        assert_eq!(repo.get_by_goal(goal_id).unwrap().len(), 1);
        assert_eq!(repo.get_by_goal(GoalId::new()).unwrap().len(), 0);
    }

    #[test]
    fn test_upsert_moves_index_entries() {
        let (_store, repo) = repo_with_store();

        let mut t = txn(-100, Category::Food, 1);
        let id = t.id;
        repo.upsert(t.clone()).unwrap();

        t.category = Category::Transport;
        repo.upsert(t).unwrap();

        assert!(repo.get_by_category(Category::Food).unwrap().is_empty());
        let moved = repo.get_by_category(Category::Transport).unwrap();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].id, id);
    }

    #[test]
    fn test_get_by_month() {
        let (_store, repo) = repo_with_store();

        repo.upsert(txn(-100, Category::Food, 10)).unwrap();
        let mut other = txn(-200, Category::Food, 10);
        other.date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        repo.upsert(other).unwrap();

        let month: Month = "2024-05".parse().unwrap();
        let in_month = repo.get_by_month(&month).unwrap();
        assert_eq!(in_month.len(), 1);
        assert_eq!(in_month[0].amount.cents(), -100);
    }

    #[test]
    fn test_save_and_reload() {
        let (store, repo) = repo_with_store();
        let t = txn(-5000, Category::Food, 15);
        let id = t.id;

        repo.upsert(t).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(store);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), -5000);
    }

    #[test]
    fn test_delete() {
        let (_store, repo) = repo_with_store();
        let t = txn(-5000, Category::Food, 15);
        let id = t.id;

        repo.upsert(t).unwrap();
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_category(Category::Food).unwrap().is_empty());

        // Deleting again reports nothing removed
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_get_all_sorted_newest_first() {
        let (_store, repo) = repo_with_store();

        repo.upsert(txn(-100, Category::Food, 1)).unwrap();
        repo.upsert(txn(-200, Category::Food, 20)).unwrap();
        repo.upsert(txn(-300, Category::Food, 10)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].amount.cents(), -200);
        assert_eq!(all[2].amount.cents(), -100);
    }
}
