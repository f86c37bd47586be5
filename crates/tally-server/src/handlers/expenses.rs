//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::{AppError, AppState, MAX_PAGE_LIMIT, RECENT_LIMIT};
use tally_core::{
    format_timestamp, parse_amount, store::ExpenseStore, ExpenseRecord, NewExpense,
};

/// Maximum accepted request body for expense creation
const MAX_BODY_BYTES: usize = 1024 * 10;

/// Query parameters for listing expenses
#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    pub limit: Option<i64>,
}

/// Body for creating an expense
///
/// `amount` may be a JSON number or numeric text.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub category: String,
    pub amount: Value,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub deleted: usize,
}

fn amount_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_amount(s).ok(),
        _ => None,
    }
}

/// GET /api/expenses - List expenses newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpenseQuery>,
) -> Result<Json<Vec<ExpenseRecord>>, AppError> {
    // Input validation: clamp pagination parameters
    let limit = params
        .limit
        .map(|limit| limit.max(1).min(MAX_PAGE_LIMIT) as usize);

    let expenses = state.db.list_expenses_limited(limit)?;
    Ok(Json(expenses))
}

/// GET /api/expenses/recent - The most recent expenses
pub async fn recent_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ExpenseRecord>>, AppError> {
    let expenses = state.db.recent_expenses(RECENT_LIMIT)?;
    Ok(Json(expenses))
}

/// POST /api/expenses - Record a new expense stamped with the current time
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<ExpenseRecord>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: CreateExpenseRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let amount =
        amount_from_value(&req.amount).ok_or_else(|| AppError::bad_request("Invalid amount."))?;

    let expense = NewExpense::now(req.description, req.category, amount);
    let id = state.db.add_expense(&expense)?;

    info!(id, category = %expense.category, "Expense added");

    Ok(Json(ExpenseRecord::new(
        id,
        expense.description,
        expense.category,
        expense.amount,
        format_timestamp(&expense.date),
    )))
}

/// POST /api/reset - Delete every expense
pub async fn reset_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResetResponse>, AppError> {
    let deleted = state.db.clear_expenses()?;
    Ok(Json(ResetResponse { deleted }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_from_number() {
        assert_eq!(amount_from_value(&json!(12.5)), Some(12.5));
        assert_eq!(amount_from_value(&json!(3)), Some(3.0));
    }

    #[test]
    fn test_amount_from_text() {
        assert_eq!(amount_from_value(&json!(" 7.25 ")), Some(7.25));
        assert_eq!(amount_from_value(&json!("abc")), None);
        assert_eq!(amount_from_value(&json!("inf")), None);
    }

    #[test]
    fn test_amount_from_other_json() {
        assert_eq!(amount_from_value(&json!(null)), None);
        assert_eq!(amount_from_value(&json!(true)), None);
        assert_eq!(amount_from_value(&json!([1])), None);
    }
}
