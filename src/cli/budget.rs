//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::BudgetId;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_category, parse_money, parse_month};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Add a budget for a category and month
    Add {
        /// Category name
        category: String,
        /// Spending limit (e.g. "250" or "250.00")
        limit: String,
        /// Month the budget applies to (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets
    List {
        /// Only show budgets for this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },

    /// Replace a budget's limit
    Edit {
        /// Budget id
        id: String,
        /// New spending limit
        limit: String,
    },

    /// Delete a budget (no-op if the id is unknown)
    Delete {
        /// Budget id
        id: String,
    },
}

fn parse_budget_id(s: &str) -> LedgerResult<BudgetId> {
    s.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid budget id: {}", s)))
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Add {
            category,
            limit,
            month,
        } => {
            let budget = service.add(
                parse_category(&category)?,
                parse_money(&limit)?,
                parse_month(month.as_deref())?,
            )?;
            println!("Added budget {}: {}", budget.id, budget);
        }

        BudgetCommands::List { month } => {
            let budgets = match month {
                Some(raw) => service.list_month(&parse_month(Some(raw.as_str()))?)?,
                None => service.list()?,
            };
            println!("{}", format_budget_table(&budgets, settings));
        }

        BudgetCommands::Edit { id, limit } => {
            let budget = service.edit(parse_budget_id(&id)?, parse_money(&limit)?)?;
            println!("Updated budget {}: {}", budget.id, budget);
        }

        BudgetCommands::Delete { id } => {
            service.delete(parse_budget_id(&id)?)?;
            println!("Deleted budget {}", id);
        }
    }

    Ok(())
}
