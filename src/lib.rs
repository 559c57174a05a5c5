//! Ledgerly - Terminal-based personal finance ledger
//!
//! This library provides the core functionality for the Ledgerly application:
//! a transaction ledger with monthly category budgets and savings goals,
//! persisted through an injected key-value store and aggregated on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, goals, value types)
//! - `storage`: Key-value record store and per-collection repositories
//! - `services`: Validated mutation surface (the business logic layer)
//! - `reports`: Derived aggregation (spending, budget status, goal progress)
//! - `display`: Table rendering for terminal output
//! - `cli`: clap command definitions and handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
