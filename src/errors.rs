use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ValidationError(String),
    NotFound(String),
    Conflict(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::UnsupportedMediaType(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::InternalError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Empty-collection lookups answer with a "message" key rather than "error".
        let body = match self {
            AppError::NotFound(msg) => serde_json::json!({"message": msg}),
            _ => serde_json::json!({"error": self.to_string()}),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Swaps the client-facing text of an `InternalError`; other variants pass through.
    pub fn with_internal_message(self, message: &str) -> Self {
        match self {
            AppError::InternalError(_) => AppError::InternalError(message.to_string()),
            other => other,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database query failed");
        AppError::InternalError("Database error".into())
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        tracing::error!(error = %err, "Failed to store uploaded file");
        AppError::InternalError("Failed to store uploaded file".into())
    }
}

/// Failures while persisting an uploaded file.
#[derive(Debug, Display)]
pub enum UploadError {
    #[display("Failed to create upload directory: {_0}")]
    CreateDir(std::io::Error),

    #[display("Failed to write uploaded file: {_0}")]
    Write(std::io::Error),
}

impl std::error::Error for UploadError {}
