//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tessera_core::{ErrorResponse, TesseraError};
use tracing::{error, warn};

/// Body returned by every successful add operation.
pub const SAVED: &str = "Saved";

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub TesseraError);

impl From<TesseraError> for AppError {
    fn from(err: TesseraError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for JSON handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a JSON success response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_maps_to_404_json() {
        let response = AppError(TesseraError::not_found("User", 3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_database_error_maps_to_500() {
        let response = AppError(TesseraError::database("connection lost")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::from(TesseraError::validation("missing name")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
