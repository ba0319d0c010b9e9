use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::BudgetReport;
use crate::services::report;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackQuery {
    pub uuid: Option<String>,
}

/// Analyze a stored session and return its budget report.
///
/// The record is consumed on the way out, so a second request for the same
/// UUID answers 404 even if this analysis fails.
pub async fn get_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> AppResult<Json<BudgetReport>> {
    let raw = query
        .uuid
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("UUID parameter is required".to_string()))?;

    let uuid = Uuid::parse_str(&raw)
        .map_err(|_| AppError::Validation("Invalid UUID format".to_string()))?;

    let record = state
        .store
        .take(&uuid)
        .ok_or_else(|| AppError::NotFound("No data found for the provided UUID".to_string()))?;

    let budget_report = report::analyze_budget(uuid, &record)?;

    info!(session_id = %uuid, "Served budget analysis");

    Ok(Json(budget_report))
}
