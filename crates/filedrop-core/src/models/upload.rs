use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::UPLOAD_SUCCESS_MESSAGE;
use crate::error::AppError;

/// The `file` part of an upload form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename exactly as the client sent it (may be empty)
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// A decoded multipart upload form
///
/// `file` is only set for a part named `file` that carried a `filename` parameter;
/// every other part lands in `form_fields`.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub file: Option<UploadedFile>,
    pub form_fields: BTreeMap<String, String>,
}

impl UploadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plain form field. Repeated keys keep their first value.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.form_fields
            .entry(name.into())
            .or_insert_with(|| value.into());
    }

    /// Record the file part. Returns `false` (and keeps the existing file) if one
    /// was already recorded.
    pub fn set_file(&mut self, file: UploadedFile) -> bool {
        if self.file.is_some() {
            return false;
        }
        self.file = Some(file);
        true
    }

    /// Check the form carries a usable file and split it from the metadata.
    pub fn into_parts(self) -> Result<(UploadedFile, BTreeMap<String, String>), AppError> {
        let file = self.file.ok_or(AppError::MissingFile)?;
        if file.file_name.is_empty() {
            return Err(AppError::NoFilename);
        }
        Ok((file, self.form_fields))
    }
}

/// Confirmation returned by `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadResult {
    /// Always "File successfully uploaded"
    pub message: String,
    /// Filename as supplied by the client
    pub file_name: String,
    /// Every non-file form field, echoed back
    pub metadata: BTreeMap<String, String>,
}

impl UploadResult {
    pub fn new(file_name: impl Into<String>, metadata: BTreeMap<String, String>) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            file_name: file_name.into(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, data: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: Some("text/plain".to_string()),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let mut request = UploadRequest::new();
        request.add_field("author", "alice");
        assert!(matches!(request.into_parts(), Err(AppError::MissingFile)));
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        let mut request = UploadRequest::new();
        request.set_file(file("", b"hello"));
        assert!(matches!(request.into_parts(), Err(AppError::NoFilename)));
    }

    #[test]
    fn test_first_file_and_first_field_value_win() {
        let mut request = UploadRequest::new();
        assert!(request.set_file(file("a.txt", b"first")));
        assert!(!request.set_file(file("b.txt", b"second")));
        request.add_field("author", "alice");
        request.add_field("author", "bob");

        let (file, metadata) = request.into_parts().unwrap();
        assert_eq!(file.file_name, "a.txt");
        assert_eq!(&file.data[..], b"first");
        assert_eq!(metadata.get("author").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_upload_result_shape() {
        let mut metadata = BTreeMap::new();
        metadata.insert("author".to_string(), "alice".to_string());
        let json = serde_json::to_value(UploadResult::new("report.txt", metadata)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "File successfully uploaded",
                "file_name": "report.txt",
                "metadata": { "author": "alice" }
            })
        );
    }
}
