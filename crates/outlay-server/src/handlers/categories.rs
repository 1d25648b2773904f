//! Category handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct NewCategory {
    pub category: String,
}

/// GET /api/categories - List all categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.categories().to_vec()))
}

/// POST /api/categories - Add a category
///
/// Duplicates answer 409 so the client can tell "already there" apart
/// from a malformed request.
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewCategory>,
) -> Result<(StatusCode, Json<Vec<String>>), AppError> {
    let mut store = state.store.write().await;
    store.add_category(&new.category)?;
    Ok((StatusCode::CREATED, Json(store.categories().to_vec())))
}

/// DELETE /api/categories/:name - Delete a category
///
/// Expenses already recorded under the category are left untouched.
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    store.delete_category(&name)?;
    Ok(StatusCode::NO_CONTENT)
}
