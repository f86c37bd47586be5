//! Rolling-window forecast
//!
//! A naive linear extrapolation: the last 30 days of spend give a daily
//! average, which is scaled to a week, a 30-day month and a 365-day year.

use chrono::{Duration, NaiveDateTime};

use super::dated;
use crate::models::{ExpenseRecord, Forecast, TrailingTotals};

/// Length of the short trailing window
pub const FORECAST_WEEK_DAYS: i64 = 7;

/// Length of the long trailing window; a fixed month, not calendar-aware
pub const FORECAST_MONTH_DAYS: i64 = 30;

const DAYS_PER_YEAR: f64 = 365.0;

/// Sum spend inside the trailing 7- and 30-day windows ending at `now`
///
/// Window starts are inclusive. The two windows are accumulated
/// independently, so a recent record lands in both totals.
pub fn trailing_totals(records: &[ExpenseRecord], now: NaiveDateTime) -> TrailingTotals {
    let week_ago = now - Duration::days(FORECAST_WEEK_DAYS);
    let month_ago = now - Duration::days(FORECAST_MONTH_DAYS);

    dated(records).fold(TrailingTotals::default(), |mut acc, expense| {
        if expense.at >= week_ago {
            acc.week_total += expense.amount;
        }
        if expense.at >= month_ago {
            acc.month_total += expense.amount;
        }
        acc
    })
}

impl TrailingTotals {
    /// Average spend per day over the 30-day window
    pub fn daily_average(&self) -> f64 {
        if self.month_total == 0.0 {
            0.0
        } else {
            self.month_total / FORECAST_MONTH_DAYS as f64
        }
    }

    /// Project the daily average forward
    pub fn forecast(&self) -> Forecast {
        let daily = self.daily_average();
        Forecast {
            weekly: round_cents(daily * FORECAST_WEEK_DAYS as f64),
            monthly: round_cents(daily * FORECAST_MONTH_DAYS as f64),
            yearly: round_cents(daily * DAYS_PER_YEAR),
        }
    }
}

/// Forecast weekly, monthly and yearly spend as of `now`
pub fn forecast(records: &[ExpenseRecord], now: NaiveDateTime) -> Forecast {
    trailing_totals(records, now).forecast()
}

/// Round to two decimals, halves away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
