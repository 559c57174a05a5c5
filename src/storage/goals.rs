//! Goal repository

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Goal, GoalId};

use super::kv::{KeyValueStore, GOALS_KEY};

/// Repository for goal persistence
pub struct GoalRepository {
    store: Arc<dyn KeyValueStore>,
    data: RwLock<HashMap<GoalId, Goal>>,
}

fn lock_err(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(format!("Failed to acquire lock: {}", e))
}

impl GoalRepository {
    /// Create a new goal repository backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read_data(&self) -> LedgerResult<RwLockReadGuard<'_, HashMap<GoalId, Goal>>> {
        self.data.read().map_err(lock_err)
    }

    fn write_data(&self) -> LedgerResult<RwLockWriteGuard<'_, HashMap<GoalId, Goal>>> {
        self.data.write().map_err(lock_err)
    }

    /// Load goals from the store.
    ///
    /// Fails soft: a missing key or an undecodable payload yields an empty
    /// collection rather than an error.
    pub fn load(&self) -> LedgerResult<()> {
        let goals: Vec<Goal> = self
            .store
            .get(GOALS_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut data = self.write_data()?;
        data.clear();
        for goal in goals {
            data.insert(goal.id, goal);
        }
        Ok(())
    }

    /// Persist the whole collection to the store
    pub fn save(&self) -> LedgerResult<()> {
        let data = self.read_data()?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.name.cmp(&b.name)));

        let raw = serde_json::to_string_pretty(&goals)?;
        self.store.set(GOALS_KEY, &raw)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> LedgerResult<Option<Goal>> {
        Ok(self.read_data()?.get(&id).cloned())
    }

    /// Get all goals, nearest deadline first
    pub fn get_all(&self) -> LedgerResult<Vec<Goal>> {
        let data = self.read_data()?;
        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.name.cmp(&b.name)));
        Ok(goals)
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: Goal) -> LedgerResult<()> {
        let mut data = self.write_data()?;
        data.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal. Returns whether anything was removed.
    pub fn delete(&self, id: GoalId) -> LedgerResult<bool> {
        let mut data = self.write_data()?;
        Ok(data.remove(&id).is_some())
    }

    /// Count goals
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read_data()?.len())
    }
}
