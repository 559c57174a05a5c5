//! Transaction service
//!
//! Validated create/edit/delete over the transaction collection. Every
//! mutation persists the full collection immediately; adds re-evaluate the
//! matching budget and surface an overrun alert.

use chrono::{NaiveDate, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, GoalId, Money, Month, Transaction, TransactionId, TransactionKind};
use crate::reports::budgets::{budget_status, BudgetAlert};
use crate::storage::Storage;

/// Input fields for creating or replacing a transaction
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub amount: Money,
    pub category: Category,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub description: String,
    pub goal_id: Option<GoalId>,
}

impl TransactionDraft {
    /// Draft with an empty description and no goal reference
    pub fn new(amount: Money, category: Category, kind: TransactionKind, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            kind,
            date,
            description: String::new(),
            goal_id: None,
        }
    }

    fn validate(&self) -> LedgerResult<()> {
        // An empty amount field coerces to zero in the entry form; both are refused
        if self.amount.is_zero() {
            return Err(LedgerError::Validation(
                "Transaction amount must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a transaction.
    ///
    /// On success the transaction is persisted and the budget covering its
    /// (category, month) is re-evaluated; an alert is returned when that
    /// budget exists and is now exceeded.
    pub fn add(&self, draft: TransactionDraft) -> LedgerResult<(Transaction, Option<BudgetAlert>)> {
        draft.validate()?;

        let mut txn = Transaction::with_description(
            draft.amount,
            draft.category,
            draft.kind,
            draft.date,
            draft.description,
        );
        txn.goal_id = draft.goal_id;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        let alert = self.evaluate_alert(txn.category, Month::of(txn.date))?;
        Ok((txn, alert))
    }

    /// Replace a transaction's fields wholesale, preserving its identity
    pub fn edit(&self, id: TransactionId, draft: TransactionDraft) -> LedgerResult<Transaction> {
        draft.validate()?;

        let existing = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let txn = Transaction {
            id: existing.id,
            amount: draft.amount,
            category: draft.category,
            kind: draft.kind,
            date: draft.date,
            description: draft.description,
            goal_id: draft.goal_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        Ok(txn)
    }

    /// Delete a transaction. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: TransactionId) -> LedgerResult<()> {
        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()
    }

    /// List all transactions, newest first
    pub fn list(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// List the transactions of one month, newest first
    pub fn list_month(&self, month: &Month) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_by_month(month)
    }

    fn evaluate_alert(&self, category: Category, month: Month) -> LedgerResult<Option<BudgetAlert>> {
        let budget = match self.storage.budgets.find_by_category_month(category, &month)? {
            Some(budget) => budget,
            None => return Ok(None),
        };

        let transactions = self.storage.transactions.get_all()?;
        let status = budget_status(&budget, &transactions);
        Ok(status
            .exceeded
            .then_some(BudgetAlert { category, month }))
    }
}
