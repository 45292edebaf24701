//! # API REST
//!
//! REST API implementation for the symptom relay.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! All relay behaviour lives in `symptom-core`; this crate only translates.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod health;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use symptom_core::{AnalysisRequest, AnalysisResult, RelayError, RelayService};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub use error::{ApiError, ErrorRes};
pub use health::{HealthRes, HealthService};

/// Application state for the REST API server
///
/// The relay is stateless across requests; cloning the state only clones `Arc`s.
#[derive(Clone)]
pub struct AppState {
    relay: RelayService,
}

/// Request body of `POST /check-symptoms` as published in the OpenAPI document.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckSymptomsReq {
    /// Free-text symptom description; must not be blank.
    pub symptoms: String,
}

/// One candidate condition as published in the OpenAPI document.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConditionRes {
    pub name: String,
    /// `high`, `medium`, `low`, or `unknown` for fallback results.
    pub likelihood: String,
    pub description: String,
}

/// Successful response of `POST /check-symptoms` as published in the OpenAPI document.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckSymptomsRes {
    pub probable_conditions: Vec<ConditionRes>,
    pub recommendations: String,
    pub disclaimer: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, check_symptoms),
    components(schemas(HealthRes, CheckSymptomsReq, CheckSymptomsRes, ConditionRes, ErrorRes))
)]
pub struct ApiDoc;

/// Build the REST router around a relay service.
///
/// CORS is fully permissive: any origin, and `OPTIONS` preflights are answered by the
/// CORS layer before reaching a handler.
pub fn router(relay: RelayService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/check-symptoms", post(check_symptoms))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { relay })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/check-symptoms",
    request_body = CheckSymptomsReq,
    responses(
        (status = 200, description = "Possible conditions, recommendations and disclaimer", body = CheckSymptomsRes),
        (status = 400, description = "Symptoms missing, null or blank", body = ErrorRes),
        (status = 402, description = "Completion service billing or quota exhausted", body = ErrorRes),
        (status = 429, description = "Completion service rate limit", body = ErrorRes),
        (status = 500, description = "Any other failure, including a body that is not JSON", body = ErrorRes)
    )
)]
/// Analyse free-text symptoms
///
/// Forwards the symptoms to the completion API and returns the normalised result. Model
/// output that is not valid JSON still yields `200` with a single fallback condition.
///
/// # Errors
/// Returns the status mapped from the relay failure (see `error::status_for`).
#[axum::debug_handler]
async fn check_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| RelayError::MalformedRequest(rejection.body_text()))?;

    let result = state.relay.analyze_request(request).await?;
    Ok(Json(result))
}
