//! Insight handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};

/// Response body for the insights endpoint
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

/// GET /insights/ - Generated statements about spending
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InsightsResponse>, AppError> {
    let monthly = state.db.monthly_totals()?;
    let categories = state.db.category_totals()?;

    let insights = state.engine.messages(&monthly, &categories);
    tracing::debug!(count = insights.len(), "Generated insights");

    Ok(Json(InsightsResponse { insights }))
}
