//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{GoalId, TransactionId};
use crate::services::{TransactionDraft, TransactionService};
use crate::storage::Storage;

use super::{parse_category, parse_date, parse_kind, parse_money, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g. "-12.50"; negative for money going out)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Transaction kind: expense or income
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Goal id this transaction contributes to
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// List transactions
    List {
        /// Only show transactions in this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Replace a transaction's fields
    Edit {
        /// Transaction id
        id: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// New category
        category: String,
        /// New kind: expense or income
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// New date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// New goal reference
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Delete a transaction (no-op if the id is unknown)
    Delete {
        /// Transaction id
        id: String,
    },
}

fn parse_txn_id(s: &str) -> LedgerResult<TransactionId> {
    s.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid transaction id: {}", s)))
}

fn parse_goal_id(s: &str) -> LedgerResult<GoalId> {
    s.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid goal id: {}", s)))
}

fn build_draft(
    amount: &str,
    category: &str,
    kind: &str,
    date: Option<&str>,
    description: Option<String>,
    goal: Option<&str>,
) -> LedgerResult<TransactionDraft> {
    let mut draft = TransactionDraft::new(
        parse_money(amount)?,
        parse_category(category)?,
        parse_kind(kind)?,
        parse_date(date)?,
    );
    draft.description = description.unwrap_or_default();
    draft.goal_id = goal.map(parse_goal_id).transpose()?;
    Ok(draft)
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            date,
            description,
            goal,
        } => {
            let draft = build_draft(
                &amount,
                &category,
                &kind,
                date.as_deref(),
                description,
                goal.as_deref(),
            )?;
            let (txn, alert) = service.add(draft)?;

            println!("Added transaction {}: {}", txn.id, txn);
            if let Some(alert) = alert {
                println!("{}", alert);
            }
        }

        TransactionCommands::List { month, limit } => {
            let transactions = match month {
                Some(raw) => service.list_month(&parse_month(Some(raw.as_str()))?)?,
                None => service.list()?,
            };
            let shown: Vec<_> = transactions.into_iter().take(limit).collect();
            println!("{}", format_transaction_table(&shown, settings));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
            description,
            goal,
        } => {
            let draft = build_draft(
                &amount,
                &category,
                &kind,
                date.as_deref(),
                description,
                goal.as_deref(),
            )?;
            let txn = service.edit(parse_txn_id(&id)?, draft)?;
            println!("Updated transaction {}: {}", txn.id, txn);
        }

        TransactionCommands::Delete { id } => {
            service.delete(parse_txn_id(&id)?)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}
