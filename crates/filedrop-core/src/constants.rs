//! Shared constants.

/// Release version reported when `RELEASE_VERSION` is unset.
pub const UNKNOWN_RELEASE_VERSION: &str = "unknown";

/// Default storage directory, relative to the working directory.
pub const DEFAULT_UPLOAD_FOLDER: &str = "./uploads";

/// Multipart field that carries the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Status reported by `/health` and `/test`.
pub const STATUS_OK: &str = "ok";

/// Confirmation message returned after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File successfully uploaded";
