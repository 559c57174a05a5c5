//! Goal progress derivation

use crate::error::LedgerResult;
use crate::models::{Goal, GoalId, Money, Transaction};
use crate::storage::Storage;

/// Total saved toward a goal: sum of absolute amounts of every transaction
/// referencing it. No date or kind filter applies.
pub fn goal_saved(transactions: &[Transaction], goal_id: GoalId) -> Money {
    transactions
        .iter()
        .filter(|t| t.goal_id == Some(goal_id))
        .map(|t| t.amount.abs())
        .sum()
}

/// Derived progress of one goal
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: Goal,
    pub saved: Money,
    /// Saved as a percentage of the target, capped at 100
    pub percent: u8,
    /// Amount still missing (never negative)
    pub remaining: Money,
}

impl GoalProgress {
    /// Compute progress for a goal from the transaction collection
    pub fn compute(goal: Goal, transactions: &[Transaction]) -> Self {
        let saved = goal_saved(transactions, goal.id);

        let percent = if goal.target.cents() <= 0 {
            0
        } else {
            let ratio = saved.cents() as f64 / goal.target.cents() as f64 * 100.0;
            ratio.round().min(100.0) as u8
        };

        let remaining = Money::from_cents((goal.target.cents() - saved.cents()).max(0));

        Self {
            goal,
            saved,
            percent,
            remaining,
        }
    }
}

/// Progress report over all goals
#[derive(Debug, Clone)]
pub struct GoalReport {
    pub rows: Vec<GoalProgress>,
}

impl GoalReport {
    /// Generate the goal progress report
    pub fn generate(storage: &Storage) -> LedgerResult<Self> {
        let goals = storage.goals.get_all()?;
        let transactions = storage.transactions.get_all()?;

        let rows = goals
            .into_iter()
            .map(|goal| GoalProgress::compute(goal, &transactions))
            .collect();

        Ok(Self { rows })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No goals yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Goals\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12} {:>6}\n",
            "Goal", "Target", "Saved", "Remaining", "%"
        ));

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>12} {:>5}%\n",
                row.goal.name,
                row.goal.target.to_string(),
                row.saved.to_string(),
                row.remaining.to_string(),
                row.percent
            ));
        }

        output
    }
}
