//! Transaction model
//!
//! A transaction records a single expense or income in one of the fixed
//! categories, optionally tied to a savings goal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{GoalId, TransactionId};
use super::money::Money;

/// Whether a transaction is an expense or an income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(format!("Unknown transaction kind: {}", other)),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount (sign is preserved as entered; aggregation uses absolute values)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Expense or income
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// The savings goal this transaction contributes to, if any.
    /// Weak reference: deleting the goal leaves this in place.
    pub goal_id: Option<GoalId>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(amount: Money, category: Category, kind: TransactionKind, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            category,
            kind,
            date,
            description: String::new(),
            goal_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with a description
    pub fn with_description(
        amount: Money,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(amount, category, kind, date);
        txn.description = description.into();
        txn
    }

    /// Create a goal contribution transaction
    pub fn contribution(
        goal_id: GoalId,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::with_description(
            amount,
            Category::GoalContribution,
            TransactionKind::Expense,
            date,
            description,
        );
        txn.goal_id = Some(goal_id);
        txn
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if this is an income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}
