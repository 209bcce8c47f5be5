use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::documents::StoreError;
use crate::import::ImportError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only the collaborators (persistence, AI, import) produce these; rendering
/// never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("AI assistance is not configured")]
    LlmUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Llm(err.to_string())
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::TooShort { .. } => AppError::Validation(err.to_string()),
            ImportError::Llm(e) => e.into(),
            ImportError::Task(msg) => AppError::Internal(anyhow::anyhow!(msg)),
            ImportError::Pdf(_) | ImportError::Malformed(_) => {
                AppError::UnprocessableEntity(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Store(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The document could not be saved or loaded".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::LlmUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "LLM_UNAVAILABLE",
                "AI assistance is not configured on this server".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_collaborator_failures_map_to_documented_statuses() {
        assert_eq!(status_of(AppError::Llm("boom".into())), StatusCode::BAD_GATEWAY);
        assert_eq!(status_of(AppError::LlmUnavailable), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status_of(AppError::UnprocessableEntity("bad".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_of(AppError::NotFound("x".into())), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_import_errors_are_classified() {
        let short: AppError = ImportError::TooShort { min: 50, found: 3 }.into();
        assert!(matches!(short, AppError::Validation(_)));

        let malformed: AppError =
            ImportError::Malformed(serde_json::from_str::<u8>("x").unwrap_err()).into();
        assert!(matches!(malformed, AppError::UnprocessableEntity(_)));

        let pdf: AppError = ImportError::Pdf("no text layer".into()).into();
        assert!(matches!(pdf, AppError::UnprocessableEntity(_)));

        let llm: AppError = ImportError::Llm(LlmError::EmptyContent).into();
        assert!(matches!(llm, AppError::Llm(_)));
    }
}
