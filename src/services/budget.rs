//! Budget service
//!
//! Create/edit/delete for monthly category budgets, enforcing the one-budget-
//! per-(category, month) invariant.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, BudgetId, Category, Money, Month};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a budget for a (category, month) pair.
    ///
    /// Fails with a duplicate error when a budget for the pair already
    /// exists; the collection is left unchanged.
    pub fn add(&self, category: Category, limit: Money, month: Month) -> LedgerResult<Budget> {
        validate_limit(limit)?;

        if self
            .storage
            .budgets
            .find_by_category_month(category, &month)?
            .is_some()
        {
            return Err(LedgerError::duplicate_budget(format!(
                "{} {}",
                category, month
            )));
        }

        let budget = Budget::new(category, limit, month);
        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;
        Ok(budget)
    }

    /// Replace a budget's limit
    pub fn edit(&self, id: BudgetId, limit: Money) -> LedgerResult<Budget> {
        validate_limit(limit)?;

        let mut budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))?;

        budget.set_limit(limit);
        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;
        Ok(budget)
    }

    /// Delete a budget. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: BudgetId) -> LedgerResult<()> {
        self.storage.budgets.delete(id)?;
        self.storage.budgets.save()
    }

    /// List all budgets
    pub fn list(&self) -> LedgerResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// List the budgets of one month
    pub fn list_month(&self, month: &Month) -> LedgerResult<Vec<Budget>> {
        self.storage.budgets.get_by_month(month)
    }
}

fn validate_limit(limit: Money) -> LedgerResult<()> {
    // Blank limit input coerces to zero; both blank and zero are refused
    if !limit.is_positive() {
        return Err(LedgerError::Validation(
            "Budget limit must be positive".into(),
        ));
    }
    Ok(())
}
