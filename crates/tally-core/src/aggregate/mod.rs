//! Aggregation Engine - pure views over an expense snapshot
//!
//! Every function here takes a borrowed slice of records and returns a fresh
//! value. Nothing is cached and no input is mutated, so calling any of them
//! twice on the same snapshot yields the same result.
//!
//! ## Views
//!
//! - **Category summary** - total per category, ignores dates
//! - **Forecast** - linear projection from trailing 7/30-day windows
//! - **Monthly overview** - month/year buckets plus filter navigation sets
//!
//! Records are screened once per view by [`ParsedExpense::try_from_record`]:
//! a bad amount excludes a record everywhere, a bad or missing date only
//! excludes it from the date-based views.

pub mod forecast;
pub mod overview;
pub mod summary;

pub use forecast::{forecast, round_cents, trailing_totals, FORECAST_MONTH_DAYS};
pub use overview::monthly_overview;
pub use summary::{category_totals, grand_total};

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::debug;

use crate::models::ExpenseRecord;
use crate::timestamp::parse_timestamp;

/// Why a record was left out of an aggregation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("no timestamp")]
    MissingDate,

    #[error("unparseable timestamp '{0}'")]
    MalformedDate(String),

    #[error("non-numeric amount")]
    InvalidAmount,
}

/// A record whose amount and timestamp both checked out
#[derive(Debug, Clone, Copy)]
pub struct ParsedExpense<'a> {
    pub record: &'a ExpenseRecord,
    pub at: NaiveDateTime,
    pub amount: f64,
}

impl<'a> ParsedExpense<'a> {
    pub fn try_from_record(record: &'a ExpenseRecord) -> Result<Self, SkipReason> {
        let amount = checked_amount(record)?;
        let raw = record.date.as_deref().ok_or(SkipReason::MissingDate)?;
        let at = parse_timestamp(raw).ok_or_else(|| SkipReason::MalformedDate(raw.to_string()))?;
        Ok(Self { record, at, amount })
    }
}

/// The record's amount, if it is a usable number
pub fn checked_amount(record: &ExpenseRecord) -> Result<f64, SkipReason> {
    if record.amount.is_finite() {
        Ok(record.amount)
    } else {
        Err(SkipReason::InvalidAmount)
    }
}

/// Records with a valid amount and timestamp, in input order
///
/// Skipped records are reported at debug level only.
pub fn dated(records: &[ExpenseRecord]) -> impl Iterator<Item = ParsedExpense<'_>> {
    records
        .iter()
        .filter_map(|record| match ParsedExpense::try_from_record(record) {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                debug!(id = record.id, %reason, "Skipping expense in date-based view");
                None
            }
        })
}
