//! The fixed spending category enumeration
//!
//! Categories are a closed set shared by transactions and budgets; there is
//! no user-defined category management. `GoalContribution` is reserved for
//! transactions created through goal contributions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending/income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Entertainment,
    Transport,
    Utilities,
    Shopping,
    Health,
    Salary,
    Other,
    #[serde(rename = "Goal Contribution")]
    GoalContribution,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Entertainment,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Health,
        Category::Salary,
        Category::Other,
        Category::GoalContribution,
    ];

    /// The category name as shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Salary => "Salary",
            Category::Other => "Other",
            Category::GoalContribution => "Goal Contribution",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase() == normalized)
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(f, "Unknown category: {}", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
