//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions yet.".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id.short(),
            date: t.date.format(&settings.date_format).to_string(),
            amount: t.amount.format_with_symbol(&settings.currency_symbol),
            category: t.category.name().to_string(),
            kind: t.kind.to_string(),
            description: t.description.clone(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
