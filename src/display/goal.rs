//! Goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Goal;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

/// Format goals as a table
pub fn format_goal_table(goals: &[Goal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No goals yet.".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            id: g.id.short(),
            name: g.name.clone(),
            target: g.target.format_with_symbol(&settings.currency_symbol),
            deadline: g.deadline.format(&settings.date_format).to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
