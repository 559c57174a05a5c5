//! Goal service
//!
//! Create/delete for savings goals and the contribution wrapper that records
//! progress as ordinary transactions.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Goal, GoalId, Money, Transaction, TransactionKind};
use crate::storage::Storage;

use super::transaction::{TransactionDraft, TransactionService};

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a goal
    pub fn add(
        &self,
        name: impl Into<String>,
        target: Money,
        deadline: NaiveDate,
    ) -> LedgerResult<Goal> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::Validation("Goal name must not be empty".into()));
        }
        if !target.is_positive() {
            return Err(LedgerError::Validation(
                "Goal target must be positive".into(),
            ));
        }

        let goal = Goal::new(name, target, deadline);
        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;
        Ok(goal)
    }

    /// Record a contribution toward a goal.
    ///
    /// Creates a "Goal Contribution" expense transaction referencing the
    /// goal. The goal must exist; a blank description defaults to
    /// "Goal Contribution".
    pub fn contribute(
        &self,
        goal_id: GoalId,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> LedgerResult<Transaction> {
        if self.storage.goals.get(goal_id)?.is_none() {
            return Err(LedgerError::goal_not_found(goal_id.to_string()));
        }

        let description = description.into();
        let description = if description.trim().is_empty() {
            "Goal Contribution".to_string()
        } else {
            description
        };

        let mut draft = TransactionDraft::new(
            amount,
            Category::GoalContribution,
            TransactionKind::Expense,
            date,
        );
        draft.description = description;
        draft.goal_id = Some(goal_id);

        let (txn, _) = TransactionService::new(self.storage).add(draft)?;
        Ok(txn)
    }

    /// Delete a goal. Deleting an unknown id is a no-op.
    ///
    /// The goal's transactions are left in place with their now-dangling
    /// goal reference; they keep counting toward totals as ordinary
    /// expenses.
    pub fn delete(&self, id: GoalId) -> LedgerResult<()> {
        self.storage.goals.delete(id)?;
        self.storage.goals.save()
    }

    /// List all goals, nearest deadline first
    pub fn list(&self) -> LedgerResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> Storage {
        let storage = Storage::in_memory();
        storage.load_all().unwrap();
        storage
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_add_goal() {
        let storage = storage();
        let service = GoalService::new(&storage);

        let goal = service
            .add("Vacation", Money::from_cents(100_000), date("2024-12-31"))
            .unwrap();
        assert_eq!(goal.name, "Vacation");
        assert_eq!(storage.goals.count().unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_blank_name_and_bad_target() {
        let storage = storage();
        let service = GoalService::new(&storage);

        assert!(service
            .add("  ", Money::from_cents(100), date("2024-12-31"))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add("Vacation", Money::zero(), date("2024-12-31"))
            .unwrap_err()
            .is_validation());
        assert_eq!(storage.goals.count().unwrap(), 0);
    }

    #[test]
    fn test_contribute_creates_goal_contribution_expense() {
        let storage = storage();
        let service = GoalService::new(&storage);

        let goal = service
            .add("Vacation", Money::from_cents(100_000), date("2024-12-31"))
            .unwrap();
        let txn = service
            .contribute(goal.id, Money::from_cents(-5000), date("2024-05-01"), "")
            .unwrap();

        assert_eq!(txn.category, Category::GoalContribution);
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.goal_id, Some(goal.id));
        assert_eq!(txn.description, "Goal Contribution");
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_contribute_to_unknown_goal_fails() {
        let storage = storage();
        let service = GoalService::new(&storage);

        let err = service
            .contribute(GoalId::new(), Money::from_cents(-5000), date("2024-05-01"), "")
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_orphans_contributions() {
        let storage = storage();
        let service = GoalService::new(&storage);

        let goal = service
            .add("Vacation", Money::from_cents(100_000), date("2024-12-31"))
            .unwrap();
        service
            .contribute(goal.id, Money::from_cents(-5000), date("2024-05-01"), "")
            .unwrap();

        service.delete(goal.id).unwrap();
        assert_eq!(storage.goals.count().unwrap(), 0);

        // The contribution transaction stays, goal reference intact
        let orphans = storage.transactions.get_by_goal(goal.id).unwrap();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].goal_id, Some(goal.id));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let storage = storage();
        let service = GoalService::new(&storage);

        let goal = service
            .add("Vacation", Money::from_cents(100_000), date("2024-12-31"))
            .unwrap();
        service.delete(goal.id).unwrap();
        service.delete(goal.id).unwrap();
        assert_eq!(storage.goals.count().unwrap(), 0);
    }
}
