//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState, MAX_PAGE_LIMIT};
use spendmind_core::models::{
    Expense, ExpenseFilter, ExpenseWithCategory, NewExpense, DEFAULT_EXPENSE_LIMIT,
};

/// Query parameters for listing expenses
#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    /// Start of the date range (YYYY-MM-DD), only used together with end_date
    pub start_date: Option<String>,
    /// End of the date range (YYYY-MM-DD), only used together with start_date
    pub end_date: Option<String>,
    pub category_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_EXPENSE_LIMIT
}

fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    value
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .map_err(|_| AppError::bad_request(&format!("Invalid {} format (use YYYY-MM-DD)", field)))
}

/// POST /expenses/ - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewExpense>,
) -> Result<Json<Expense>, AppError> {
    let expense = state.db.create_expense(&body)?;
    Ok(Json(expense))
}

/// GET /expenses/ - List expenses newest first, with category names
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpenseQuery>,
) -> Result<Json<Vec<ExpenseWithCategory>>, AppError> {
    let filter = ExpenseFilter {
        start_date: parse_date(params.start_date.as_deref(), "start_date")?,
        end_date: parse_date(params.end_date.as_deref(), "end_date")?,
        category_id: params.category_id,
        limit: params.limit.clamp(1, MAX_PAGE_LIMIT),
    };

    let expenses = state.db.list_expenses(&filter)?;
    Ok(Json(expenses))
}
