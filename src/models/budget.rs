//! Budget model
//!
//! A budget caps spending for one category in one calendar month. At most one
//! budget may exist per (category, month) pair; the service layer enforces
//! this on creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use super::month::Month;

/// How often a budget repeats. Only monthly budgets are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCadence {
    #[default]
    Monthly,
}

impl fmt::Display for BudgetCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// A spending limit for a category in a given month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this budget caps
    pub category: Category,

    /// Spending limit for the month
    pub limit: Money,

    /// Budget cadence
    #[serde(default)]
    pub period: BudgetCadence,

    /// The month this budget applies to
    pub month: Month,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new monthly budget
    pub fn new(category: Category, limit: Money, month: Month) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category,
            limit,
            period: BudgetCadence::Monthly,
            month,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this budget covers the given (category, month) pair
    pub fn covers(&self, category: Category, month: &Month) -> bool {
        self.category == category && self.month == *month
    }

    /// Replace the spending limit
    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} limit {}", self.month, self.category, self.limit)
    }
}
