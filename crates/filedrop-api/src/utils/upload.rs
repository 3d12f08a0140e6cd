//! Multipart decoding for the upload handler

use axum::extract::Multipart;
use filedrop_core::constants::FILE_FIELD;
use filedrop_core::models::{UploadRequest, UploadedFile};
use filedrop_core::AppError;

/// Read every part of a multipart form into an [`UploadRequest`].
///
/// A part is the upload file when it is named `file` and carries a `filename`
/// parameter, even an empty one. Parts without a `filename` are metadata. Further
/// file parts (another `file`, or files under other names) are skipped unread.
pub async fn extract_upload_request(mut multipart: Multipart) -> Result<UploadRequest, AppError> {
    let mut request = UploadRequest::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedMultipart(e.to_string()))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field.file_name().map(|s: &str| s.to_string()) {
            Some(file_name) => {
                if field_name != FILE_FIELD || request.file.is_some() {
                    tracing::debug!(
                        field = %field_name,
                        file_name = %file_name,
                        "Skipping extra file part"
                    );
                    continue;
                }

                let content_type = field.content_type().map(|s: &str| s.to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::MalformedMultipart(format!("Failed to read file data: {}", e))
                })?;

                request.set_file(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            None => {
                let value = field.text().await.map_err(|e| {
                    AppError::MalformedMultipart(format!(
                        "Failed to read field '{}': {}",
                        field_name, e
                    ))
                })?;
                request.add_field(field_name, value);
            }
        }
    }

    Ok(request)
}
