//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion into the
//! `{ "success": false, "error": "..." }` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::config::DUPLICATE_EMAIL_MESSAGE;
use crate::types::ApiResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    // Store errors
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(DbErr),

    // Export
    #[error("Export error: {0}")]
    Export(String),

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Server-side failure replaced by the operation's public message.
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::StoreUnavailable(_)
            | AppError::Database(_)
            | AppError::Export(_)
            | AppError::Config(_)
            | AppError::Internal(_)
            | AppError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the caller can correct this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Failed { message, .. } => (*message).to_string(),
            other => {
                tracing::error!("Unhandled server error: {:?}", other);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Replace a server-side error with the operation's fixed message.
    ///
    /// Client errors (400, 409) pass through untouched. Everything else is
    /// logged here, once, with its full detail.
    pub fn or_fail_with(self, message: &'static str) -> Self {
        if self.is_client_error() || matches!(self, AppError::Failed { .. }) {
            return self;
        }

        tracing::error!(error = ?self, "{}", message);
        AppError::Failed {
            message,
            source: Box::new(self),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            tracing::debug!("Unique constraint violated: {}", detail);
            return AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string());
        }

        match err {
            DbErr::ConnectionAcquire(e) => AppError::StoreUnavailable(e.to_string()),
            DbErr::Conn(e) => AppError::StoreUnavailable(e.to_string()),
            other => AppError::Database(other),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiResponse::<()>::error(self.user_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        AppError::Export(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    use crate::config::FETCH_USERS_FAILED;

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::validation("Please provide all required fields")
            .or_fail_with(FETCH_USERS_FAILED);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Please provide all required fields");
    }

    #[test]
    fn server_errors_are_replaced_by_operation_message() {
        let err = AppError::StoreUnavailable("connection refused".to_string())
            .or_fail_with(FETCH_USERS_FAILED);

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), FETCH_USERS_FAILED);
        assert!(!err.user_message().contains("refused"));
    }

    #[test]
    fn first_operation_message_wins() {
        let err = AppError::internal("boom")
            .or_fail_with("Failed to create user")
            .or_fail_with(FETCH_USERS_FAILED);

        assert_eq!(err.user_message(), "Failed to create user");
    }

    #[test]
    fn connection_errors_map_to_store_unavailable() {
        let err = AppError::from(DbErr::Conn(RuntimeErr::Internal("down".to_string())));
        assert!(matches!(err, AppError::StoreUnavailable(_)));

        let err = AppError::from(DbErr::Custom("bad query".to_string()));
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn error_response_uses_envelope() {
        let response = AppError::conflict(DUPLICATE_EMAIL_MESSAGE).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], DUPLICATE_EMAIL_MESSAGE);
        assert!(body.get("data").is_none());
    }
}
