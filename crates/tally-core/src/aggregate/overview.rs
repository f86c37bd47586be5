//! Month/year overview

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;

use super::{dated, ParsedExpense};
use crate::models::{ExpenseRecord, MonthBucket, MonthKey, MonthlyOverview, OverviewFilter};

fn month_key(expense: &ParsedExpense<'_>) -> MonthKey {
    MonthKey {
        year: expense.at.year(),
        month: expense.at.month(),
    }
}

fn matches(filter: &OverviewFilter, key: &MonthKey) -> bool {
    let month_ok = filter.month().map_or(true, |m| m == key.month_name());
    let year_ok = filter.year().map_or(true, |y| y == key.year.to_string());
    month_ok && year_ok
}

/// Bucket expenses by calendar month, newest month first
///
/// The filter narrows the buckets only. The `months` and `years` navigation
/// lists always describe the whole snapshot so a UI can offer every choice.
/// Month names are sorted alphabetically (April before January), years
/// numerically descending.
pub fn monthly_overview(records: &[ExpenseRecord], filter: &OverviewFilter) -> MonthlyOverview {
    let mut grouped: BTreeMap<Reverse<MonthKey>, Vec<ExpenseRecord>> = BTreeMap::new();
    let mut months: BTreeSet<&'static str> = BTreeSet::new();
    let mut years: BTreeSet<Reverse<i32>> = BTreeSet::new();

    for expense in dated(records) {
        let key = month_key(&expense);
        months.insert(key.month_name());
        years.insert(Reverse(key.year));

        if matches(filter, &key) {
            grouped
                .entry(Reverse(key))
                .or_default()
                .push(expense.record.clone());
        }
    }

    MonthlyOverview {
        buckets: grouped
            .into_iter()
            .map(|(Reverse(key), expenses)| MonthBucket {
                key,
                label: key.label(),
                expenses,
            })
            .collect(),
        months: months.into_iter().map(str::to_string).collect(),
        years: years
            .into_iter()
            .map(|Reverse(year)| year.to_string())
            .collect(),
    }
}
