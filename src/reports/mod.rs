//! Aggregation layer for Ledgerly
//!
//! Pure derivation functions and report structs computing spending, budget
//! status, and goal progress from the raw collections. Nothing here caches;
//! every report is recomputed from source on demand.

pub mod budgets;
pub mod goals;
pub mod spending;

pub use budgets::{budget_status, BudgetAlert, BudgetReport, BudgetStatus};
pub use goals::{goal_saved, GoalProgress, GoalReport};
pub use spending::{category_breakdown, monthly_spend, SpendingReport};
