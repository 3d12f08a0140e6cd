use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload_request;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use filedrop_core::models::{UploadRequest, UploadResult};
use filedrop_storage::key_for_filename;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadResult),
        (status = 400, description = "No file part, empty filename, or unusable filename", body = ErrorResponse),
        (status = 500, description = "File could not be written", body = ErrorResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResult>, HttpAppError> {
    // A body that is not multipart at all simply has no file part
    let request = match multipart {
        Ok(multipart) => extract_upload_request(multipart).await?,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Upload body is not a multipart form");
            UploadRequest::new()
        }
    };

    let (file, metadata) = request.into_parts()?;
    let key = key_for_filename(&file.file_name)?;
    let size_bytes = file.data.len();

    let location = state.storage.put(&key, file.data).await.map_err(|e| {
        tracing::error!(error = %e, file_name = %file.file_name, "Error uploading file");
        HttpAppError::from(e)
    })?;

    tracing::info!(
        file_name = %file.file_name,
        key = %key,
        location = %location,
        size_bytes,
        content_type = file.content_type.as_deref().unwrap_or("unknown"),
        metadata_fields = metadata.len(),
        "File uploaded successfully"
    );

    let result = UploadResult::new(file.file_name, metadata);
    tracing::info!(response = ?result, "Upload response");

    Ok(Json(result))
}
