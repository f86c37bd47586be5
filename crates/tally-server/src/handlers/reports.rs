//! Report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use tally_core::{CategoryTotal, Forecast, MonthBucket, OverviewFilter, Reports};

/// Query parameters for the monthly overview
#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Monthly overview plus the filters it was built with
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub buckets: Vec<MonthBucket>,
    pub months: Vec<String>,
    pub years: Vec<String>,
    pub selected_month: Option<String>,
    pub selected_year: Option<String>,
}

/// GET /api/summary - Total spend per category
pub async fn category_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryTotal>>, AppError> {
    let summary = Reports::new(&state.db).category_summary()?;
    Ok(Json(summary))
}

/// GET /api/forecast - Weekly, monthly and yearly spending forecast
pub async fn forecast(State(state): State<Arc<AppState>>) -> Result<Json<Forecast>, AppError> {
    let forecast = Reports::new(&state.db).forecast()?;
    Ok(Json(forecast))
}

/// GET /api/monthly-overview - Expenses grouped by calendar month
pub async fn monthly_overview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OverviewQuery>,
) -> Result<Json<OverviewResponse>, AppError> {
    let filter = OverviewFilter::new(params.month.as_deref(), params.year.as_deref());
    let overview = Reports::new(&state.db).monthly_overview(&filter)?;

    Ok(Json(OverviewResponse {
        buckets: overview.buckets,
        months: overview.months,
        years: overview.years,
        selected_month: filter.month().map(String::from),
        selected_year: filter.year().map(String::from),
    }))
}
