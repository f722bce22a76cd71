//! Spreadsheet export handler.

use axum::{extract::State, routing::get, Router};

use crate::api::AppState;
use crate::config::EXPORT_USERS_FAILED;
use crate::errors::AppResult;
use crate::types::XlsxAttachment;

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/", get(export_users))
}

/// Download all user records as `users.xlsx`
#[utoipa::path(
    get,
    path = "/export",
    tag = "Export",
    responses(
        (status = 200, description = "users.xlsx attachment with columns Name, Email, Phone, Date Added"),
        (status = 500, description = "Failed to export users")
    )
)]
pub async fn export_users(State(state): State<AppState>) -> AppResult<XlsxAttachment> {
    let workbook = state
        .directory
        .export_users()
        .await
        .map_err(|e| e.or_fail_with(EXPORT_USERS_FAILED))?;

    Ok(XlsxAttachment(workbook))
}
