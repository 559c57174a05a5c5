//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Format budgets as a table
pub fn format_budget_table(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets yet.".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.short(),
            month: b.month.to_string(),
            category: b.category.name().to_string(),
            limit: b.limit.format_with_symbol(&settings.currency_symbol),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
