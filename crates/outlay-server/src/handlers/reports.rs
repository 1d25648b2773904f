//! Report handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::{AppError, AppState};
use outlay_core::{ReportKind, ReportRequest, ReportResult};

/// Report request with the kind still raw, so an unknown kind maps to a
/// 400 with a meaningful message instead of a body rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReportRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// POST /api/reports - Generate a report
///
/// Comparison reports are evaluated against today's calendar date.
pub async fn generate_report(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawReportRequest>,
) -> Result<Json<ReportResult>, AppError> {
    let kind: ReportKind = raw.kind.parse()?;
    let request = ReportRequest {
        kind,
        category: raw.category,
        start_date: raw.start_date,
        end_date: raw.end_date,
    };

    let today = Utc::now().date_naive();
    let store = state.store.read().await;
    let result = store.generate_report(&request, today)?;
    Ok(Json(result))
}
