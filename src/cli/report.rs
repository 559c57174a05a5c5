//! Report CLI commands

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::reports::{BudgetReport, GoalReport, SpendingReport};
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-category spending for a month
    Spending {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Budget status for a month
    Budgets {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Progress toward every savings goal
    Goals,
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Spending { month } => {
            let report = SpendingReport::generate(storage, parse_month(month.as_deref())?)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Budgets { month } => {
            let report = BudgetReport::generate(storage, parse_month(month.as_deref())?)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Goals => {
            let report = GoalReport::generate(storage)?;
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}
