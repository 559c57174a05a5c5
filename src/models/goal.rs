//! Savings goal model
//!
//! A goal has a name, a target amount, and a deadline. Progress is never
//! stored; it is derived by summing the transactions that reference the goal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Target amount to save
    pub target: Money,

    /// Date the goal should be reached by
    pub deadline: NaiveDate,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal
    pub fn new(name: impl Into<String>, target: Money, deadline: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            deadline,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (target {} by {})",
            self.name,
            self.target,
            self.deadline.format("%Y-%m-%d")
        )
    }
}
