//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use filedrop_core::models::{HealthResponse, LoadTestResponse, UploadResult};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filedrop API",
        description = "Health check, simulated-latency test route, and multipart file upload to local storage."
    ),
    paths(
        handlers::health::health_check,
        handlers::load_test::load_test,
        handlers::upload::upload_file,
    ),
    components(schemas(HealthResponse, LoadTestResponse, UploadResult, ErrorResponse)),
    tags(
        (name = "health", description = "Liveness and load-test routes"),
        (name = "upload", description = "File upload")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
