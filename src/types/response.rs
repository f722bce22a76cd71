use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::config::{EXPORT_CONTENT_DISPOSITION, XLSX_CONTENT_TYPE};

/// Standard API response envelope (`success` plus either `data` or `error`)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// 200 response wrapping `data` in the success envelope
pub struct Success<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(ApiResponse::success(self.0))).into_response()
    }
}

/// 201 response wrapping `data` in the success envelope
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}

/// Spreadsheet download served as `users.xlsx`
pub struct XlsxAttachment(pub Vec<u8>);

impl IntoResponse for XlsxAttachment {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
                (header::CONTENT_DISPOSITION, EXPORT_CONTENT_DISPOSITION),
            ],
            self.0,
        )
            .into_response()
    }
}
