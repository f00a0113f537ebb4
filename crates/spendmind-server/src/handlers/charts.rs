//! Chart handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{AppError, AppState};
use spendmind_core::render_monthly_chart;

/// GET /charts/monthly-expenses - PNG line chart of monthly totals
pub async fn monthly_expenses_chart(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let monthly = state.db.monthly_totals()?;
    let png = render_monthly_chart(&monthly, state.config.chart_size)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
