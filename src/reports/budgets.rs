//! Budget status derivation
//!
//! Computes spent/percent/exceeded for budgets against the transaction
//! collection, and the overrun alert raised after mutations.

use std::fmt;

use crate::error::LedgerResult;
use crate::models::{Budget, Category, Money, Month, Transaction};
use crate::storage::Storage;

use super::spending::monthly_spend;

/// Derived status of one budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    /// Absolute expense total for the budget's (category, month)
    pub spent: Money,
    /// Spent as a percentage of the limit, capped at 100
    pub percent: u8,
    /// Whether spending exceeds the limit
    pub exceeded: bool,
}

/// Compute the status of a budget from the transaction collection.
///
/// A non-positive limit yields `percent = 0`; the `exceeded` flag still
/// reports any overspend.
pub fn budget_status(budget: &Budget, transactions: &[Transaction]) -> BudgetStatus {
    let spent = monthly_spend(transactions, budget.category, &budget.month);

    let percent = if budget.limit.cents() <= 0 {
        0
    } else {
        let ratio = spent.cents() as f64 / budget.limit.cents() as f64 * 100.0;
        ratio.round().min(100.0) as u8
    };

    BudgetStatus {
        spent,
        percent,
        exceeded: spent > budget.limit,
    }
}

/// Raised when a mutation pushes a category over its monthly budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    pub category: Category,
    pub month: Month,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alert: You have exceeded your {} budget for this month!",
            self.category
        )
    }
}

/// One row of the budget report
#[derive(Debug, Clone)]
pub struct BudgetStatusRow {
    pub budget: Budget,
    pub status: BudgetStatus,
}

/// Month-scoped budget report
#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub month: Month,
    pub rows: Vec<BudgetStatusRow>,
}

impl BudgetReport {
    /// Generate the budget report for a month
    pub fn generate(storage: &Storage, month: Month) -> LedgerResult<Self> {
        let budgets = storage.budgets.get_by_month(&month)?;
        let transactions = storage.transactions.get_all()?;

        let rows = budgets
            .into_iter()
            .map(|budget| {
                let status = budget_status(&budget, &transactions);
                BudgetStatusRow { budget, status }
            })
            .collect();

        Ok(Self { month, rows })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return format!("No budgets for {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!("Budgets: {}\n", self.month));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>6}  {}\n",
            "Category", "Limit", "Spent", "%", "Status"
        ));

        for row in &self.rows {
            let status = if row.status.exceeded { "OVER" } else { "ok" };
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>5}%  {}\n",
                row.budget.category.name(),
                row.budget.limit.to_string(),
                row.status.spent.to_string(),
                row.status.percent,
                status
            ));
        }

        output
    }
}
