//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{AppError, AppState};
use outlay_core::{Expense, NewExpense};

/// GET /api/expenses - List all expenses
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.expenses().to_vec()))
}

/// POST /api/expenses - Add an expense
///
/// The date may arrive in any supported input format; it is stored
/// canonically and echoed back as `YYYY-MM-DD`.
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let mut store = state.store.write().await;
    let expense = store.add_expense(new)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// DELETE /api/expenses/:id - Delete an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    store.delete_expense(id)?;
    Ok(StatusCode::NO_CONTENT)
}
