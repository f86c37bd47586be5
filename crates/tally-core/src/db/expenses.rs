//! Expense operations

use rusqlite::types::ValueRef;
use rusqlite::{params, Row};
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::{ExpenseRecord, NewExpense};
use crate::store::ExpenseStore;
use crate::timestamp::format_timestamp;

const SELECT_EXPENSES: &str = r#"
    SELECT id, description, category, amount, date
    FROM expenses
    ORDER BY date DESC, id DESC
"#;

/// Read a loosely typed `amount` cell
///
/// Numeric text is accepted; anything else becomes `NaN` so the aggregation
/// layer can skip the row instead of the query failing.
fn amount_from_cell(cell: ValueRef<'_>) -> f64 {
    match cell {
        ValueRef::Real(v) => v,
        ValueRef::Integer(v) => v as f64,
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(f64::NAN),
        ValueRef::Null | ValueRef::Blob(_) => f64::NAN,
    }
}

/// Read a text cell that may hold NULL or a non-text value
fn text_from_cell(cell: ValueRef<'_>) -> Option<String> {
    match cell {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(v) => Some(v.to_string()),
        ValueRef::Real(v) => Some(v.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    Ok(ExpenseRecord {
        id: row.get(0)?,
        description: text_from_cell(row.get_ref(1)?).unwrap_or_default(),
        category: text_from_cell(row.get_ref(2)?).unwrap_or_default(),
        amount: amount_from_cell(row.get_ref(3)?),
        date: text_from_cell(row.get_ref(4)?),
    })
}

impl Database {
    /// Insert an expense and return its id
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO expenses (description, category, amount, date) VALUES (?, ?, ?, ?)",
            params![
                expense.description,
                expense.category,
                expense.amount,
                format_timestamp(&expense.date),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List expenses newest first, optionally capped
    pub fn list_expenses_limited(&self, limit: Option<usize>) -> Result<Vec<ExpenseRecord>> {
        let conn = self.conn()?;

        let expenses = match limit {
            Some(limit) => {
                let sql = format!("{SELECT_EXPENSES} LIMIT ?");
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(params![limit as i64], row_to_expense)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(SELECT_EXPENSES)?;
                let rows = stmt.query_map([], row_to_expense)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
        };

        Ok(expenses)
    }

    /// Count stored expenses
    pub fn count_expenses(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete every expense
    pub fn delete_all_expenses(&self) -> Result<usize> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM expenses", [])?;
        info!(removed, "Cleared all expenses");
        Ok(removed)
    }
}

impl ExpenseStore for Database {
    fn add_expense(&self, expense: &NewExpense) -> Result<i64> {
        self.insert_expense(expense)
    }

    fn list_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        self.list_expenses_limited(None)
    }

    fn recent_expenses(&self, limit: usize) -> Result<Vec<ExpenseRecord>> {
        self.list_expenses_limited(Some(limit))
    }

    fn clear_expenses(&self) -> Result<usize> {
        self.delete_all_expenses()
    }
}
