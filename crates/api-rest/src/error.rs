//! Relay error to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use symptom_core::RelayError;
use utoipa::ToSchema;

/// Error response body: `{ "error": message }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// A [`RelayError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

/// HTTP status for each relay failure.
pub fn status_for(err: &RelayError) -> StatusCode {
    match err {
        RelayError::InvalidInput => StatusCode::BAD_REQUEST,
        RelayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        RelayError::ServiceUnavailable => StatusCode::PAYMENT_REQUIRED,
        RelayError::MalformedRequest(_)
        | RelayError::UpstreamError { .. }
        | RelayError::EmptyUpstreamResponse
        | RelayError::Misconfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!("Error in check-symptoms: {:?}", self.0);
        }
        let body = ErrorRes {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: RelayError) -> (StatusCode, String) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: ErrorRes = serde_json::from_slice(&body).unwrap();
        (status, json.error)
    }

    #[tokio::test]
    async fn test_invalid_input_returns_400() {
        assert_eq!(
            render(RelayError::InvalidInput).await,
            (StatusCode::BAD_REQUEST, "Symptoms cannot be empty".into())
        );
    }

    #[tokio::test]
    async fn test_rate_limited_returns_429() {
        assert_eq!(
            render(RelayError::RateLimited).await,
            (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.".into()
            )
        );
    }

    #[tokio::test]
    async fn test_service_unavailable_returns_402() {
        assert_eq!(
            render(RelayError::ServiceUnavailable).await,
            (
                StatusCode::PAYMENT_REQUIRED,
                "Service temporarily unavailable. Please contact support.".into()
            )
        );
    }

    #[tokio::test]
    async fn test_upstream_failures_return_500_without_upstream_body() {
        let (status, message) = render(RelayError::UpstreamError {
            status: Some(503),
            body: "secret upstream detail".into(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "AI gateway error");

        assert_eq!(
            render(RelayError::EmptyUpstreamResponse).await,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No content received from AI".into()
            )
        );
    }

    #[tokio::test]
    async fn test_malformed_request_returns_500_with_message() {
        let (status, message) =
            render(RelayError::MalformedRequest("expected value at line 1".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Invalid request body: expected value at line 1");
    }

    #[tokio::test]
    async fn test_misconfiguration_returns_500_with_message() {
        assert_eq!(
            render(RelayError::Misconfiguration("COMPLETION_API_KEY is not configured".into())).await,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMPLETION_API_KEY is not configured".into()
            )
        );
    }
}
