//! Database tests

use super::*;
use crate::models::NewExpense;
use crate::store::ExpenseStore;
use chrono::NaiveDate;
use rusqlite::params;

fn at(y: i32, m: u32, d: u32, h: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_expenses().unwrap().is_empty());
    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_expenses_schema_exists() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('expenses') WHERE name IN ('id', 'description', 'category', 'amount', 'date')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 5, "expenses table should have 5 expected columns");
}

#[test]
fn test_insert_and_list_roundtrip() {
    let db = Database::in_memory().unwrap();

    let id = db
        .insert_expense(&NewExpense::at("Lunch", "Food", 12.5, at(2025, 1, 15, 10)))
        .unwrap();
    assert!(id > 0);

    let all = db.list_expenses().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].description, "Lunch");
    assert_eq!(all[0].category, "Food");
    assert_eq!(all[0].amount, 12.5);
    assert_eq!(all[0].date.as_deref(), Some("2025-01-15 10:00:00"));
}

#[test]
fn test_ids_increase_monotonically() {
    let db = Database::in_memory().unwrap();
    let a = db.add_expense(&NewExpense::at("a", "x", 1.0, at(2025, 1, 1, 0))).unwrap();
    let b = db.add_expense(&NewExpense::at("b", "x", 1.0, at(2024, 1, 1, 0))).unwrap();
    assert!(b > a);
}

#[test]
fn test_list_orders_newest_first() {
    let db = Database::in_memory().unwrap();
    db.add_expense(&NewExpense::at("old", "x", 1.0, at(2024, 12, 1, 8))).unwrap();
    db.add_expense(&NewExpense::at("new", "x", 1.0, at(2025, 2, 1, 8))).unwrap();
    db.add_expense(&NewExpense::at("mid", "x", 1.0, at(2025, 1, 1, 8))).unwrap();

    let names: Vec<String> = db
        .list_expenses()
        .unwrap()
        .into_iter()
        .map(|e| e.description)
        .collect();
    assert_eq!(names, vec!["new", "mid", "old"]);
}

#[test]
fn test_recent_expenses_respects_limit() {
    let db = Database::in_memory().unwrap();
    for day in 1..=15 {
        db.add_expense(&NewExpense::at(
            format!("day {day}"),
            "x",
            1.0,
            at(2025, 1, day, 12),
        ))
        .unwrap();
    }

    let recent = db.recent_expenses(10).unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].description, "day 15");
    assert_eq!(recent[9].description, "day 6");
}

#[test]
fn test_empty_description_is_stored_verbatim() {
    let db = Database::in_memory().unwrap();
    db.add_expense(&NewExpense::at("", "", 0.0, at(2025, 1, 1, 0))).unwrap();
    let all = db.list_expenses().unwrap();
    assert_eq!(all[0].description, "");
    assert_eq!(all[0].category, "");
}

#[test]
fn test_clear_expenses() {
    let db = Database::in_memory().unwrap();
    db.add_expense(&NewExpense::at("a", "x", 1.0, at(2025, 1, 1, 0))).unwrap();
    db.add_expense(&NewExpense::at("b", "x", 2.0, at(2025, 1, 2, 0))).unwrap();

    assert_eq!(db.clear_expenses().unwrap(), 2);
    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_loosely_typed_rows_are_read_without_error() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();
    conn.execute(
        "INSERT INTO expenses (description, category, amount, date) VALUES (?1, ?2, ?3, ?4)",
        params!["Text amount", "Food", "twelve", "2025-01-01 00:00:00"],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO expenses (description, category, amount, date) VALUES (?1, ?2, ?3, ?4)",
        params!["Numeric text", "Food", " 4.5 ", "not-a-date"],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO expenses (description, category, amount, date) VALUES (NULL, NULL, NULL, NULL)",
        [],
    )
    .unwrap();
    drop(conn);

    let all = db.list_expenses().unwrap();
    assert_eq!(all.len(), 3);

    let text = all.iter().find(|e| e.description == "Text amount").unwrap();
    assert!(text.amount.is_nan());

    let numeric = all.iter().find(|e| e.description == "Numeric text").unwrap();
    assert_eq!(numeric.amount, 4.5);
    assert_eq!(numeric.date.as_deref(), Some("not-a-date"));

    let nulls = all.iter().find(|e| e.date.is_none()).unwrap();
    assert_eq!(nulls.description, "");
    assert!(nulls.amount.is_nan());
}

#[test]
fn test_reopen_file_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::new(path).unwrap();
        db.add_expense(&NewExpense::at("kept", "x", 3.0, at(2025, 3, 3, 3))).unwrap();
    }

    let db = Database::new(path).unwrap();
    assert_eq!(db.path(), path);
    assert_eq!(db.list_expenses().unwrap()[0].description, "kept");
}
