//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Domain errors (`AppError`, `StorageError`)
//! convert into `HttpAppError` with `?`, and are rendered here as a status code plus a
//! `{"error": "..."}` body. Anything else arriving as `anyhow::Error` becomes `Unknown`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filedrop_core::{AppError, ErrorMetadata, LogLevel};
use filedrop_storage::StorageError;
use serde::Serialize;
use std::any::Any;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from filedrop-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = ?err, "Unexpected internal error");
        HttpAppError(AppError::Unknown)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::InvalidKey(msg) => AppError::InvalidFilename(msg),
            StorageError::UploadFailed(msg)
            | StorageError::DownloadFailed(msg)
            | StorageError::NotFound(msg)
            | StorageError::ConfigError(msg) => AppError::WriteFailure(msg),
            StorageError::IoError(err) => AppError::WriteFailure(err.to_string()),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
        });

        (status, body).into_response()
    }
}

/// Render a handler panic as an `Unknown` error instead of dropping the connection.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "non-string panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    HttpAppError(AppError::Unknown).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[test]
    fn test_from_storage_error_invalid_key() {
        let storage_err = StorageError::InvalidKey("path traversal is not allowed".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::InvalidFilename(msg) => assert_eq!(msg, "path traversal is not allowed"),
            _ => panic!("Expected InvalidFilename variant"),
        }
    }

    #[test]
    fn test_from_storage_error_upload_failed() {
        let storage_err = StorageError::UploadFailed("disk full".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::WriteFailure(msg) => assert_eq!(msg, "disk full"),
            _ => panic!("Expected WriteFailure variant"),
        }
    }

    #[test]
    fn test_from_storage_error_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let HttpAppError(app_err) = StorageError::IoError(io_err).into();
        match app_err {
            AppError::WriteFailure(msg) => assert!(msg.contains("denied")),
            _ => panic!("Expected WriteFailure variant"),
        }
    }

    #[tokio::test]
    async fn test_anyhow_error_is_unknown_and_hides_cause() {
        let err = anyhow::anyhow!("connection pool exhausted");
        let HttpAppError(app_err) = err.into();
        assert!(matches!(app_err, AppError::Unknown));

        let response = HttpAppError(app_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Unknown error" })
        );
    }

    #[tokio::test]
    async fn test_missing_file_response() {
        let response = HttpAppError(AppError::MissingFile).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "No file part in the request" })
        );
    }

    #[tokio::test]
    async fn test_write_failure_response() {
        let response =
            HttpAppError(AppError::WriteFailure("No space left on device".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "No space left on device" })
        );
    }

    #[tokio::test]
    async fn test_panic_response_is_unknown_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Unknown error" })
        );
    }
}
