//! Insurance controller, mounted at `/insurance`.

use crate::{
    extractors::RequestParams,
    responses::{ok, ApiResult, AppError, SAVED},
    state::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tessera_core::{Insurance, NewInsurance};
use tracing::debug;

/// Creates the insurance router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_insurances))
        .route("/add", post(add_insurance))
}

/// List every stored insurance record.
#[utoipa::path(
    get,
    path = "/insurance/all",
    tag = "insurance",
    responses(
        (status = 200, description = "All insurance records", body = [Insurance]),
        (status = 500, description = "Storage failure", body = tessera_core::ErrorResponse)
    )
)]
pub async fn list_insurances(State(state): State<AppState>) -> ApiResult<Vec<Insurance>> {
    debug!("List insurances request");
    ok(state.insurances.find_all().await?)
}

/// Store a new insurance record from `name` and `type`.
#[utoipa::path(
    post,
    path = "/insurance/add",
    tag = "insurance",
    params(NewInsurance),
    responses(
        (status = 200, description = "Insurance stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing parameter", body = tessera_core::ErrorResponse),
        (status = 500, description = "Storage failure", body = tessera_core::ErrorResponse)
    )
)]
pub async fn add_insurance(
    State(state): State<AppState>,
    RequestParams(draft): RequestParams<NewInsurance>,
) -> Result<&'static str, AppError> {
    debug!("Add insurance request: {} ({})", draft.name, draft.kind);
    state.insurances.save(&draft).await?;
    Ok(SAVED)
}
