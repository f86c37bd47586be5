//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Expense models and fixed-pattern timestamp handling
//! - Aggregation engine (category totals, rolling forecast, month/year overview)
//! - Record store trait with SQLite and in-memory implementations
//! - Store-backed reports for the CLI and server

pub mod aggregate;
pub mod db;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
pub mod timestamp;

pub use aggregate::{
    category_totals, forecast, grand_total, monthly_overview, round_cents, trailing_totals,
    ParsedExpense, SkipReason,
};
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    parse_amount, CategoryTotal, ExpenseRecord, Forecast, MonthBucket, MonthKey, MonthlyOverview,
    NewExpense, OverviewFilter, TrailingTotals,
};
pub use reports::Reports;
pub use store::{ExpenseStore, MemoryStore};
pub use timestamp::{format_timestamp, now_local, parse_timestamp, TIMESTAMP_FORMAT};
