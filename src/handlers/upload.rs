use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::CategorySpending;
use crate::services::csv_parser;
use crate::state::AppState;
use crate::store::SessionRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub uuid: Uuid,
    pub message: String,
    pub csv_row_count: usize,
    pub category_count: usize,
}

/// Body for the JSON upload variant. Both fields are checked by hand so
/// that a missing one reports the same message as the multipart route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonUpload {
    #[serde(default)]
    pub csv_data: Option<String>,
    #[serde(default)]
    pub category_spending: Option<Value>,
}

/// Accept a CSV export and category totals as multipart form fields
/// (`csv` and `categorySpending`, the latter a JSON-encoded array).
pub async fn upload_multipart(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut csv_text: Option<String> = None;
    let mut category_json: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() == Some("csv") {
            csv_text = Some(
                field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?,
            );
        } else if field.name() == Some("categorySpending") {
            category_json = Some(
                field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?,
            );
        }
    }

    let csv_text = csv_text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("No CSV file provided".to_string()))?;
    let category_json = category_json
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("No category spending data provided".to_string()))?;

    let value: Value = serde_json::from_str(&category_json)
        .map_err(|_| AppError::Validation("Invalid category spending JSON format".to_string()))?;
    let category_spending = validate_category_spending(&value)?;

    store_upload(&state, &csv_text, category_spending).map(Json)
}

/// Accept the same payload as a JSON body: `{csvData, categorySpending}`.
pub async fn upload_json(
    State(state): State<AppState>,
    Json(body): Json<JsonUpload>,
) -> AppResult<Json<UploadResponse>> {
    let csv_text = body
        .csv_data
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("No CSV file provided".to_string()))?;
    let value = body
        .category_spending
        .ok_or_else(|| AppError::Validation("No category spending data provided".to_string()))?;

    let category_spending = validate_category_spending(&value)?;

    store_upload(&state, &csv_text, category_spending).map(Json)
}

fn store_upload(
    state: &AppState,
    csv_text: &str,
    category_spending: Vec<CategorySpending>,
) -> AppResult<UploadResponse> {
    let rows = csv_parser::parse_csv(csv_text)?;
    if rows.is_empty() {
        return Err(AppError::Validation("Empty CSV file".to_string()));
    }
    csv_parser::validate_structure(&rows)?;

    let uuid = Uuid::new_v4();
    let csv_row_count = rows.len();
    let category_count = category_spending.len();

    state.store.put(
        uuid,
        SessionRecord {
            rows,
            category_spending,
        },
    );

    info!(
        session_id = %uuid,
        csv_row_count, category_count, "Stored uploaded session"
    );

    Ok(UploadResponse {
        uuid,
        message: "CSV data and category spending uploaded successfully".to_string(),
        csv_row_count,
        category_count,
    })
}

/// Check the user-supplied category list item by item. Messages name the
/// failing index so the client can point at the bad entry.
fn validate_category_spending(value: &Value) -> AppResult<Vec<CategorySpending>> {
    let items = value
        .as_array()
        .ok_or_else(|| AppError::Validation("Category spending must be an array".to_string()))?;

    if items.is_empty() {
        return Err(AppError::Validation(
            "Category spending array cannot be empty".to_string(),
        ));
    }

    let mut spending = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let entry = item.as_object().ok_or_else(|| {
            AppError::Validation(format!("Category spending item {} must be an object", i))
        })?;

        let category = entry.get("category").and_then(Value::as_str).ok_or_else(|| {
            AppError::Validation(format!(
                "Category spending item {} must have a 'category' string property",
                i
            ))
        })?;

        let sum = entry.get("sum").and_then(Value::as_f64).ok_or_else(|| {
            AppError::Validation(format!(
                "Category spending item {} must have a 'sum' number property",
                i
            ))
        })?;

        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::Validation(format!(
                "Category spending item {} category cannot be empty",
                i
            )));
        }

        spending.push(CategorySpending {
            category: category.to_string(),
            sum,
        });
    }

    Ok(spending)
}
