//! Liveness handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub expenses: i64,
}

/// GET /api/health - Liveness check that also touches the store
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, AppError> {
    let expenses = state.db.count_expenses()?;
    Ok(Json(HealthResponse {
        status: "ok",
        expenses,
    }))
}
