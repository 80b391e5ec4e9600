use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventario_core::error::CoreError;
use serde_json::{json, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventario_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Body rejections (malformed JSON, a non-object body, a missing
/// `Content-Type`) are answered as JSON 400s like every other client error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Status, machine-readable code, message, and an optional extra body field.
type ErrorParts = (StatusCode, &'static str, String, Option<(&'static str, Value)>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, extra) = match self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let (Some((key, value)), Some(obj)) = (extra, body.as_object_mut()) {
            obj.insert(key.to_string(), value);
        }

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: CoreError) -> ErrorParts {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
            None,
        ),
        CoreError::InvalidFields(violations) => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Validation failed".to_string(),
            Some(("errors", json!(violations))),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None),
        CoreError::InvalidSearchMode(mode) => (
            StatusCode::BAD_REQUEST,
            "INVALID_SEARCH_MODE",
            format!("Invalid search type '{mode}', expected id, nome or categoria"),
            None,
        ),
        CoreError::DeleteRestricted {
            entity,
            dependents,
            ids,
        } => (
            StatusCode::BAD_REQUEST,
            "DELETE_RESTRICTED",
            format!("Cannot delete {entity} while {dependents} reference it"),
            Some((dependents, json!(ids))),
        ),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key (`23503`), check (`23514`) and numeric range (`22003`)
///   violations map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::warn!(constraint, "Foreign key violation");
                (
                    StatusCode::BAD_REQUEST,
                    "FOREIGN_KEY_VIOLATION",
                    format!("Referenced record is missing or still in use: {constraint}"),
                    None,
                )
            }
            Some("23514") => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!(
                    "Value violates check constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                ),
                None,
            ),
            Some("22003") => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Numeric value out of range".to_string(),
                None,
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}
