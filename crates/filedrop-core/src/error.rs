//! Error types module
//!
//! Every failure the upload flow can report is a variant of [`AppError`]. The HTTP
//! layer turns an `AppError` into a status code and a `{"error": ...}` body using
//! [`ErrorMetadata`]; nothing below the transport boundary knows about status codes.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for noise such as malformed requests
    Debug,
    /// Warning level - for client mistakes
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_FILE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message, rendered as the `error` field
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file part in the request")]
    MissingFile,

    #[error("No selected file")]
    NoFilename,

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Failed to read multipart form: {0}")]
    MalformedMultipart(String),

    #[error("{0}")]
    WriteFailure(String),

    #[error("Unknown error")]
    Unknown,
}

impl AppError {
    /// Get the error type name (for logging)
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::NoFilename => "NoFilename",
            AppError::InvalidFilename(_) => "InvalidFilename",
            AppError::MalformedMultipart(_) => "MalformedMultipart",
            AppError::WriteFailure(_) => "WriteFailure",
            AppError::Unknown => "Unknown",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFile
            | AppError::NoFilename
            | AppError::InvalidFilename(_)
            | AppError::MalformedMultipart(_) => 400,
            AppError::WriteFailure(_) | AppError::Unknown => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MISSING_FILE",
            AppError::NoFilename => "NO_FILENAME",
            AppError::InvalidFilename(_) => "INVALID_FILENAME",
            AppError::MalformedMultipart(_) => "MALFORMED_MULTIPART",
            AppError::WriteFailure(_) => "WRITE_FAILURE",
            AppError::Unknown => "UNKNOWN_ERROR",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MalformedMultipart(_) => LogLevel::Debug,
            AppError::MissingFile | AppError::NoFilename | AppError::InvalidFilename(_) => {
                LogLevel::Warn
            }
            AppError::WriteFailure(_) | AppError::Unknown => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages_match_wire_contract() {
        assert_eq!(
            AppError::MissingFile.client_message(),
            "No file part in the request"
        );
        assert_eq!(AppError::NoFilename.client_message(), "No selected file");
        assert_eq!(AppError::Unknown.client_message(), "Unknown error");
    }

    #[test]
    fn test_write_failure_carries_description_verbatim() {
        let err = AppError::WriteFailure("Permission denied (os error 13)".to_string());
        assert_eq!(err.client_message(), "Permission denied (os error 13)");
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingFile.http_status_code(), 400);
        assert_eq!(AppError::NoFilename.http_status_code(), 400);
        assert_eq!(
            AppError::InvalidFilename("..".to_string()).http_status_code(),
            400
        );
        assert_eq!(
            AppError::MalformedMultipart("eof".to_string()).http_status_code(),
            400
        );
        assert_eq!(AppError::Unknown.http_status_code(), 500);
    }

    #[test]
    fn test_error_type_and_code() {
        assert_eq!(AppError::NoFilename.error_type(), "NoFilename");
        assert_eq!(AppError::NoFilename.error_code(), "NO_FILENAME");
    }
}
