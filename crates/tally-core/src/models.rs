//! Domain models for Tally

use chrono::{Month, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timestamp::now_local;

/// A stored expense, exactly as the store hands it back
///
/// `date` is kept as raw text; parsing happens in the aggregation layer so a
/// bad value only excludes the record from date-based views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub description: String,
    pub category: String,
    /// `NaN` when the stored value was not a number
    pub amount: f64,
    /// Expected layout: `YYYY-MM-DD HH:MM:SS`
    pub date: Option<String>,
}

impl ExpenseRecord {
    pub fn new(
        id: i64,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            amount,
            date: Some(date.into()),
        }
    }
}

/// A new expense to be stored (before an id is assigned)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDateTime,
}

impl NewExpense {
    /// Create an expense stamped with the current local time
    pub fn now(description: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self::at(description, category, amount, now_local())
    }

    /// Create an expense with an explicit timestamp
    pub fn at(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }

    /// Strict validation used for interactive entry
    ///
    /// The HTTP path skips this and stores whatever it was given.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::InvalidData("Description cannot be empty.".into()));
        }
        if self.category.trim().is_empty() {
            return Err(Error::InvalidData("Category cannot be empty.".into()));
        }
        if self.amount < 0.0 {
            return Err(Error::InvalidData("Amount cannot be negative.".into()));
        }
        Ok(())
    }
}

/// Parse user-entered amount text into a finite number
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidAmount(trimmed.to_string())),
    }
}

// ============================================================================
// Report types
// ============================================================================

/// Total spend for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Raw sums over the trailing 7- and 30-day windows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailingTotals {
    pub week_total: f64,
    pub month_total: f64,
}

/// Linear spend projection, each figure rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// Calendar month bucket key
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    /// English month name, e.g. "January"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// Display label, e.g. "January 2025"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Expenses that fall in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub key: MonthKey,
    pub label: String,
    /// In the order the records were supplied
    pub expenses: Vec<ExpenseRecord>,
}

impl MonthBucket {
    pub fn total(&self) -> f64 {
        self.expenses
            .iter()
            .map(|e| e.amount)
            .filter(|a| a.is_finite())
            .sum()
    }
}

/// Optional month/year selection for the overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewFilter {
    /// Month name, e.g. "January"
    pub month: Option<String>,
    /// Four-digit year as text, e.g. "2025"
    pub year: Option<String>,
}

impl OverviewFilter {
    pub fn new(month: Option<&str>, year: Option<&str>) -> Self {
        Self {
            month: month.map(str::to_string),
            year: year.map(str::to_string),
        }
    }

    /// Selected month, treating an empty string as "no filter"
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref().filter(|m| !m.is_empty())
    }

    /// Selected year, treating an empty string as "no filter"
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref().filter(|y| !y.is_empty())
    }
}

/// Month/year browsing view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOverview {
    /// Most recent month first
    pub buckets: Vec<MonthBucket>,
    /// Distinct month names across all dated records, alphabetical
    pub months: Vec<String>,
    /// Distinct years across all dated records, newest first
    pub years: Vec<String>,
}
