use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::extraction::error::{ExtractionError, ExtractionErrorKind, NoticeSeverity};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction(e) if e.kind == ExtractionErrorKind::LibraryNotLoaded => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error: Value = match &self {
            AppError::Validation(msg) => json!({
                "code": "VALIDATION_ERROR",
                "message": msg,
            }),
            AppError::UnsupportedMediaType(msg) => json!({
                "code": "INVALID_FILE_TYPE",
                "title": "Invalid File Type",
                "message": msg,
                "severity": NoticeSeverity::Error,
            }),
            AppError::PayloadTooLarge(msg) => json!({
                "code": "FILE_TOO_LARGE",
                "title": "File Too Large",
                "message": msg,
                "severity": NoticeSeverity::Error,
            }),
            AppError::Extraction(e) => {
                tracing::warn!(kind = ?e.kind, "Extraction failed: {e}");
                let notice = e.notice();
                json!({
                    "code": e.kind,
                    "title": notice.title,
                    "message": notice.message,
                    "severity": notice.severity,
                })
            }
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let (status, body) = body_of(AppError::Validation("bad".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "bad");
    }

    #[tokio::test]
    async fn test_extraction_error_body() {
        let err = ExtractionError::new(ExtractionErrorKind::NoText, "No text found in PDF");
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "NO_TEXT");
        assert_eq!(body["error"]["title"], "No Text Found");
        assert_eq!(body["error"]["severity"], "warning");
    }

    #[tokio::test]
    async fn test_disabled_upload_is_503() {
        let err = ExtractionError::new(ExtractionErrorKind::LibraryNotLoaded, "disabled");
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["title"], "PDF Upload Unavailable");
    }
}
