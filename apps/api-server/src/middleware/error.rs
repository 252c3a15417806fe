//! Error translation - maps application errors onto HTTP responses.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::error::RepoError;
use quill_shared::ErrorBody;
use std::fmt;

/// Application-level error type that converts to HTTP responses.
///
/// Validation failures carry a descriptive message back to the caller;
/// store failures are logged and reported as a generic server error.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(Vec<String>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                HttpResponse::NotFound().json(ErrorBody::not_found())
            }
            AppError::BadRequest(message) => {
                HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
            }
            // Field errors go out as plain text, one entry per field.
            AppError::Validation(errors) => HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(errors.join(", ")),
            AppError::Internal(detail) => {
                // The cause is for the operator; the caller only sees a
                // generic message.
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorBody::server_error())
            }
        }
    }
}

// Conversion from repository errors
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("record not found".to_string()),
            RepoError::InvalidId(id) => AppError::Internal(format!("invalid record id: {}", id)),
            RepoError::Connection(msg) => {
                AppError::Internal(format!("database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("database query error: {}", msg)),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
