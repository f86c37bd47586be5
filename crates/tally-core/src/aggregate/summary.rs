//! Category summary

use std::collections::BTreeMap;

use tracing::debug;

use super::checked_amount;
use crate::models::{CategoryTotal, ExpenseRecord};

/// Sum amounts per category
///
/// Dates are not consulted, so a record with a malformed timestamp still
/// counts here even though the forecast and overview drop it. Categories
/// are compared exactly; the empty string is a category like any other.
/// Output is ordered by category name.
pub fn category_totals(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records {
        match checked_amount(record) {
            Ok(amount) => *totals.entry(record.category.as_str()).or_insert(0.0) += amount,
            Err(reason) => debug!(id = record.id, %reason, "Skipping expense in category summary"),
        }
    }

    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}

/// Sum of all category totals
pub fn grand_total(totals: &[CategoryTotal]) -> f64 {
    totals.iter().map(|t| t.total).sum()
}
