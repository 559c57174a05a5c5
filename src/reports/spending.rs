//! Spending aggregation
//!
//! Pure derivation functions over the transaction collection, recomputed from
//! source on every call, plus a month-scoped report for terminal display.

use crate::error::LedgerResult;
use crate::models::{Category, Money, Month, Transaction};
use crate::storage::Storage;

/// Sum of absolute expense amounts for one category in one month.
///
/// Income transactions and transactions outside the month are excluded.
pub fn monthly_spend(transactions: &[Transaction], category: Category, month: &Month) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category && month.contains(t.date))
        .map(|t| t.amount.abs())
        .sum()
}

/// Per-category spend for one month over the full category list.
///
/// Categories with no activity are included with a zero amount.
pub fn category_breakdown(transactions: &[Transaction], month: &Month) -> Vec<(Category, Money)> {
    Category::ALL
        .into_iter()
        .map(|category| (category, monthly_spend(transactions, category, month)))
        .collect()
}

/// One row of the spending report
#[derive(Debug, Clone)]
pub struct CategorySpend {
    pub category: Category,
    pub spent: Money,
}

/// Month-scoped spending report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// The month the report covers
    pub month: Month,
    /// Per-category spend, every category present
    pub rows: Vec<CategorySpend>,
    /// Total expense activity in the month
    pub total_spent: Money,
    /// Total income activity in the month
    pub total_income: Money,
}

impl SpendingReport {
    /// Generate a spending report for a month
    pub fn generate(storage: &Storage, month: Month) -> LedgerResult<Self> {
        let transactions = storage.transactions.get_all()?;

        let rows: Vec<CategorySpend> = category_breakdown(&transactions, &month)
            .into_iter()
            .map(|(category, spent)| CategorySpend { category, spent })
            .collect();

        let total_spent = rows.iter().map(|r| r.spent).sum();
        let total_income = transactions
            .iter()
            .filter(|t| t.is_income() && month.contains(t.date))
            .map(|t| t.amount.abs())
            .sum();

        Ok(Self {
            month,
            rows,
            total_spent,
            total_income,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by category: {}\n", self.month));
        output.push_str(&"=".repeat(48));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12}\n",
                row.category.name(),
                row.spent.to_string()
            ));
        }

        output.push_str(&"-".repeat(48));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "Total spent",
            self.total_spent.to_string()
        ));
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "Total income",
            self.total_income.to_string()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: Category, kind: TransactionKind, date: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            category,
            kind,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    #[test]
    fn test_monthly_spend_excludes_income_and_other_months() {
        let transactions = vec![
            txn(-2000, Category::Food, TransactionKind::Expense, "2024-05-03"),
            txn(10000, Category::Food, TransactionKind::Income, "2024-05-04"),
            txn(-999, Category::Food, TransactionKind::Expense, "2024-06-01"),
            txn(
                -500,
                Category::Transport,
                TransactionKind::Expense,
                "2024-05-10",
            ),
        ];

        let spent = monthly_spend(&transactions, Category::Food, &month("2024-05"));
        assert_eq!(spent.cents(), 2000);
    }

    #[test]
    fn test_monthly_spend_uses_absolute_amounts() {
        // Amount sign does not matter, only kind does
        let transactions = vec![
            txn(-2000, Category::Food, TransactionKind::Expense, "2024-05-03"),
            txn(1500, Category::Food, TransactionKind::Expense, "2024-05-05"),
        ];

        let spent = monthly_spend(&transactions, Category::Food, &month("2024-05"));
        assert_eq!(spent.cents(), 3500);
    }

    #[test]
    fn test_category_breakdown_zero_fills() {
        let transactions = vec![txn(
            -2000,
            Category::Food,
            TransactionKind::Expense,
            "2024-05-03",
        )];

        let breakdown = category_breakdown(&transactions, &month("2024-05"));
        assert_eq!(breakdown.len(), Category::ALL.len());

        let food = breakdown.iter().find(|(c, _)| *c == Category::Food).unwrap();
        assert_eq!(food.1.cents(), 2000);

        let health = breakdown
            .iter()
            .find(|(c, _)| *c == Category::Health)
            .unwrap();
        assert!(health.1.is_zero());
    }

    #[test]
    fn test_generate_report_totals() {
        let storage = Storage::in_memory();
        storage.load_all().unwrap();

        storage
            .transactions
            .upsert(txn(
                -2000,
                Category::Food,
                TransactionKind::Expense,
                "2024-05-03",
            ))
            .unwrap();
        storage
            .transactions
            .upsert(txn(
                200_000,
                Category::Salary,
                TransactionKind::Income,
                "2024-05-01",
            ))
            .unwrap();

        let report = SpendingReport::generate(&storage, month("2024-05")).unwrap();
        assert_eq!(report.total_spent.cents(), 2000);
        assert_eq!(report.total_income.cents(), 200_000);
        assert_eq!(report.rows.len(), Category::ALL.len());
    }

    #[test]
    fn test_format_terminal_lists_every_category() {
        let storage = Storage::in_memory();
        storage.load_all().unwrap();

        let report = SpendingReport::generate(&storage, month("2024-05")).unwrap();
        let text = report.format_terminal();
        for category in Category::ALL {
            assert!(text.contains(category.name()));
        }
        assert!(text.contains("Total spent"));
    }
}
