//! Main application router.

use crate::{
    controllers::{health_controller, insurance_controller, user_controller},
    middleware::logging_middleware,
    openapi::{openapi_json, OPENAPI_PATH},
    state::AppState,
};
use axum::{
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tessera_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(health_controller::router())
        .nest("/demo", user_controller::router())
        .nest("/insurance", insurance_controller::router())
        .route(OPENAPI_PATH, get(openapi_json))
        .with_state(state)
        // Layers run bottom-up: the request id is set before logging sees it
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(create_timeout_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with /demo, /insurance and OpenAPI at {}", OPENAPI_PATH);
    router
}

/// Answers 408 when a request outlives `request_timeout_secs`.
fn create_timeout_layer(server_config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, server_config.request_timeout())
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
