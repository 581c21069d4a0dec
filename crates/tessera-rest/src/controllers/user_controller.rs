//! User controller, mounted at `/demo`.

use crate::{
    extractors::RequestParams,
    listing,
    responses::{ok, ApiResult, AppError, SAVED},
    state::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tessera_core::{NewUser, User};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_users))
        .route("/add", post(add_user))
        .route("/info", get(list_files))
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/demo/all",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Storage failure", body = tessera_core::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    debug!("List users request");
    ok(state.users.find_all().await?)
}

/// Store a new user. Values are not validated.
#[utoipa::path(
    post,
    path = "/demo/add",
    tag = "users",
    params(NewUser),
    responses(
        (status = 200, description = "User stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing parameter", body = tessera_core::ErrorResponse),
        (status = 500, description = "Storage failure", body = tessera_core::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    RequestParams(draft): RequestParams<NewUser>,
) -> Result<&'static str, AppError> {
    debug!("Add user request: {}", draft.name);
    state.users.save(&draft).await?;
    Ok(SAVED)
}

/// List the regular files under the configured listing root.
#[utoipa::path(
    get,
    path = "/demo/info",
    tag = "users",
    responses(
        (status = 200, description = "Bracketed, comma-separated file paths", body = String, content_type = "text/plain"),
        (status = 500, description = "Listing root missing or unreadable", body = tessera_core::ErrorResponse)
    )
)]
pub async fn list_files(State(state): State<AppState>) -> Result<String, AppError> {
    debug!("File listing request: {}", state.listing_root().display());
    let files = listing::regular_files_blocking(state.listing_root().to_path_buf()).await?;
    Ok(listing::render(&files))
}
