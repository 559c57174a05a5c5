//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{NaiveDate, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Month, TransactionKind};

/// Parse an amount argument
pub(crate) fn parse_money(s: &str) -> LedgerResult<Money> {
    s.parse()
        .map_err(|e: crate::models::money::MoneyParseError| LedgerError::Validation(e.to_string()))
}

/// Parse a category argument
pub(crate) fn parse_category(s: &str) -> LedgerResult<Category> {
    s.parse()
        .map_err(|e: crate::models::category::CategoryParseError| {
            LedgerError::Validation(e.to_string())
        })
}

/// Parse a transaction kind argument
pub(crate) fn parse_kind(s: &str) -> LedgerResult<TransactionKind> {
    s.parse().map_err(LedgerError::Validation)
}

/// Parse a date argument (YYYY-MM-DD), defaulting to today
pub(crate) fn parse_date(s: Option<&str>) -> LedgerResult<NaiveDate> {
    match s {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| LedgerError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", raw))),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Parse a month argument (YYYY-MM), defaulting to the current month
pub(crate) fn parse_month(s: Option<&str>) -> LedgerResult<Month> {
    match s {
        Some(raw) => raw
            .parse()
            .map_err(|e: crate::models::month::MonthParseError| {
                LedgerError::Validation(e.to_string())
            }),
        None => Ok(Month::current()),
    }
}
