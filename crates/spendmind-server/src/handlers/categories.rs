//! Category handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use spendmind_core::models::{Category, NewCategory};

/// POST /categories/ - Create a category
///
/// Returns 400 with "Category already exists" when the name is taken.
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewCategory>,
) -> Result<Json<Category>, AppError> {
    let category = state.db.create_category(&body)?;
    Ok(Json(category))
}

/// GET /categories/ - List categories ordered by name
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.db.list_categories()?;
    Ok(Json(categories))
}
