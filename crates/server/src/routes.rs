use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use service::errors::ServiceError;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{debug, Level};
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

const JSON_CONTENT_TYPE: [(header::HeaderName, &str); 1] = [(header::CONTENT_TYPE, "application/json")];

/// Liveness probe; independent of the store.
#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is alive", body = crate::openapi::LivenessDoc)))]
pub async fn health(State(state): State<AppState>) -> Response {
    metrics::HEALTH_CHECKS_TOTAL.inc();
    (JSON_CONTENT_TYPE, state.users.ping()).into_response()
}

/// Create a user and echo the request body back unchanged.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body(content = crate::openapi::CreateUserDoc, content_type = "application/json"),
    responses(
        (status = 200, description = "Created; the request body is echoed", body = crate::openapi::CreateUserDoc),
        (status = 400, description = "Invalid JSON format", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Database error", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body?;
    let record = state.users.record_user(&body).await?;
    metrics::USERS_CREATED_TOTAL.inc();
    debug!(name = %record.name, "echoing create request");
    Ok((JSON_CONTENT_TYPE, body).into_response())
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All stored users", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Database error or JSON conversion error", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state.users.list_users().await?;
    let json = serde_json::to_vec(&users).map_err(ServiceError::from)?;
    Ok((JSON_CONTENT_TYPE, json).into_response())
}

async fn metrics_handler() -> impl IntoResponse {
    metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    metrics::init();

    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route("/metrics", get(metrics_handler))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged as failures
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
