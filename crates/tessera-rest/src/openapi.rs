//! OpenAPI documentation, served as JSON at `/api-docs/openapi.json`.

use crate::controllers::{CheckResult, HealthResponse, ReadinessResponse};
use axum::Json;
use tessera_core::{ErrorResponse, Insurance, InsuranceId, User, UserId};
use utoipa::OpenApi;

/// Path of the generated document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for the Tessera API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tessera API",
        description = "User and insurance records over HTTP",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::add_user,
        crate::controllers::user_controller::list_files,
        crate::controllers::insurance_controller::list_insurances,
        crate::controllers::insurance_controller::add_insurance,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            User,
            UserId,
            Insurance,
            InsuranceId,
            ErrorResponse,
            HealthResponse,
            ReadinessResponse,
            CheckResult,
        )
    ),
    tags(
        (name = "users", description = "User endpoints under /demo"),
        (name = "insurance", description = "Insurance endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Serves the generated document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
