//! Record store abstraction
//!
//! The aggregation engine never reaches into storage itself. Callers hand a
//! store to [`crate::Reports`], which fetches one snapshot per query.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::{ExpenseRecord, NewExpense};
use crate::timestamp::format_timestamp;

/// Append/query interface over stored expenses
pub trait ExpenseStore {
    /// Store a new expense, returning its assigned id
    fn add_expense(&self, expense: &NewExpense) -> Result<i64>;

    /// Every stored expense, newest first
    fn list_expenses(&self) -> Result<Vec<ExpenseRecord>>;

    /// The `limit` newest expenses
    fn recent_expenses(&self, limit: usize) -> Result<Vec<ExpenseRecord>>;

    /// Delete every expense, returning how many were removed
    fn clear_expenses(&self) -> Result<usize>;
}

/// Newest first by timestamp text, then by id
pub(crate) fn sort_newest_first(records: &mut [ExpenseRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}

/// Process-local store, used for ephemeral sessions and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ExpenseRecord>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with already-built records (kept verbatim)
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            records: Mutex::new(records),
            next_id: AtomicI64::new(max_id),
        }
    }
}

impl ExpenseStore for MemoryStore {
    fn add_expense(&self, expense: &NewExpense) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = ExpenseRecord {
            id,
            description: expense.description.clone(),
            category: expense.category.clone(),
            amount: expense.amount,
            date: Some(format_timestamp(&expense.date)),
        };
        self.records.lock().map_err(|_| Error::Poisoned)?.push(record);
        Ok(id)
    }

    fn list_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        let mut records = self.records.lock().map_err(|_| Error::Poisoned)?.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }

    fn recent_expenses(&self, limit: usize) -> Result<Vec<ExpenseRecord>> {
        let mut records = self.list_expenses()?;
        records.truncate(limit);
        Ok(records)
    }

    fn clear_expenses(&self) -> Result<usize> {
        let mut records = self.records.lock().map_err(|_| Error::Poisoned)?;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_memory_store_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.add_expense(&NewExpense::at("a", "x", 1.0, at(1))).unwrap();
        let b = store.add_expense(&NewExpense::at("b", "x", 1.0, at(2))).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn test_memory_store_lists_newest_first() {
        let store = MemoryStore::new();
        store.add_expense(&NewExpense::at("old", "x", 1.0, at(1))).unwrap();
        store.add_expense(&NewExpense::at("new", "x", 1.0, at(20))).unwrap();
        store.add_expense(&NewExpense::at("mid", "x", 1.0, at(10))).unwrap();

        let list = store.list_expenses().unwrap();
        let names: Vec<&str> = list.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);

        let recent = store.recent_expenses(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].description, "new");
    }

    #[test]
    fn test_memory_store_same_timestamp_orders_by_id() {
        let store = MemoryStore::new();
        store.add_expense(&NewExpense::at("first", "x", 1.0, at(5))).unwrap();
        store.add_expense(&NewExpense::at("second", "x", 1.0, at(5))).unwrap();
        let list = store.list_expenses().unwrap();
        assert_eq!(list[0].description, "second");
    }

    #[test]
    fn test_memory_store_clear() {
        let store = MemoryStore::new();
        store.add_expense(&NewExpense::at("a", "x", 1.0, at(1))).unwrap();
        store.add_expense(&NewExpense::at("b", "x", 1.0, at(2))).unwrap();
        assert_eq!(store.clear_expenses().unwrap(), 2);
        assert!(store.list_expenses().unwrap().is_empty());
        assert_eq!(store.clear_expenses().unwrap(), 0);
    }

    #[test]
    fn test_with_records_continues_id_sequence() {
        let store = MemoryStore::with_records(vec![ExpenseRecord::new(
            41,
            "seed",
            "x",
            1.0,
            "not-a-date",
        )]);
        let id = store.add_expense(&NewExpense::at("next", "x", 1.0, at(1))).unwrap();
        assert_eq!(id, 42);
        // Seeded rows are kept verbatim, bad date included
        let list = store.list_expenses().unwrap();
        assert!(list.iter().any(|r| r.date.as_deref() == Some("not-a-date")));
    }
}
