//! Goal CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_goal_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::GoalId;
use crate::services::GoalService;
use crate::storage::Storage;

use super::{parse_date, parse_money};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g. "1000")
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
    },

    /// Record a contribution toward a goal
    Contribute {
        /// Goal id
        goal: String,
        /// Contribution amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Contribution date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description (defaults to "Goal Contribution")
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List goals
    List,

    /// Delete a goal, leaving its contributions in the ledger
    Delete {
        /// Goal id
        id: String,
    },
}

fn parse_goal_id(s: &str) -> LedgerResult<GoalId> {
    s.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid goal id: {}", s)))
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let goal = service.add(
                name,
                parse_money(&target)?,
                parse_date(Some(deadline.as_str()))?,
            )?;
            println!("Added goal {}: {}", goal.id, goal);
        }

        GoalCommands::Contribute {
            goal,
            amount,
            date,
            description,
        } => {
            let txn = service.contribute(
                parse_goal_id(&goal)?,
                parse_money(&amount)?,
                parse_date(date.as_deref())?,
                description.unwrap_or_default(),
            )?;
            println!("Recorded contribution {}: {}", txn.id, txn);
        }

        GoalCommands::List => {
            let goals = service.list()?;
            println!("{}", format_goal_table(&goals, settings));
        }

        GoalCommands::Delete { id } => {
            service.delete(parse_goal_id(&id)?)?;
            println!("Deleted goal {}", id);
        }
    }

    Ok(())
}
