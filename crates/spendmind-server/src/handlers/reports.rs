//! Report handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use spendmind_core::models::{CategoryTotal, DailyTotal, MonthlyReportRow};

/// GET /reports/monthly - Total spent per month (YYYY-MM), oldest first
pub async fn report_monthly(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlyReportRow>>, AppError> {
    let monthly = state.db.monthly_totals()?;
    Ok(Json(monthly.iter().map(MonthlyReportRow::from).collect()))
}

/// GET /reports/by-category - Total spent per category, largest first
pub async fn report_by_category(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryTotal>>, AppError> {
    let totals = state.db.category_totals()?;
    Ok(Json(totals))
}

/// GET /reports/daily - Days with the highest spending
pub async fn report_daily(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DailyTotal>>, AppError> {
    let days = state.db.top_daily_totals(state.reports.top_days)?;
    Ok(Json(days))
}
