//! HTTP adapters - REST API implementations.
//!
//! `build_app` assembles the full router: the payment endpoints, the root
//! liveness route, and the tower-http layers configured from `ServerConfig`.

pub mod payment;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use payment::payment_router;
pub use payment::PaymentAppState;

use payment::dto::ErrorResponse;

/// Plain-text body served at `GET /`.
pub const LIVENESS_MESSAGE: &str = "Payment gateway backend is running";

/// Message returned when a request exceeds `request_timeout_secs`.
pub const REQUEST_TIMED_OUT: &str = "Request timed out.";

/// GET / - Liveness check
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Build the complete application router.
pub fn build_app(state: PaymentAppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(liveness))
        .merge(payment_router())
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(map_response(timeout_envelope))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Replaces the timeout layer's empty 408 with the standard error envelope.
async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::error!("Request exceeded the configured timeout");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(REQUEST_TIMED_OUT)),
    )
        .into_response()
}

/// CORS policy. An empty origin list allows any origin.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use secrecy::SecretString;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::events::InMemoryEventPublisher;
    use crate::adapters::razorpay::MockPaymentGateway;
    use crate::domain::payment::{CheckoutSignatureVerifier, Order, OrderDraft};
    use crate::ports::{GatewayError, PaymentGateway};

    /// Gateway that answers only after the request budget is spent.
    struct StalledGateway;

    #[async_trait]
    impl PaymentGateway for StalledGateway {
        async fn create_order(&self, _draft: &OrderDraft) -> Result<Order, GatewayError> {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Err(GatewayError::timeout("No response within 3s"))
        }
    }

    fn state() -> PaymentAppState {
        PaymentAppState::new(
            Arc::new(MockPaymentGateway::new()),
            Arc::new(CheckoutSignatureVerifier::new(SecretString::new(
                "s3cret".to_string(),
            ))),
            Arc::new(InMemoryEventPublisher::new()),
            "rzp_test_abc123",
            "INR",
        )
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let app = build_app(state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn any_origin_allowed_by_default() {
        let app = build_app(state(), &ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/payment/checkout-config")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn configured_origins_are_enforced() {
        let config = ServerConfig {
            cors_origins: Some("https://shop.example.com".to_string()),
            ..ServerConfig::default()
        };
        let app = build_app(state(), &config);

        let allowed = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://shop.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let denied = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("https://shop.example.com"))
        );
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn request_timeout_returns_error_envelope() {
        let state = PaymentAppState::new(
            Arc::new(StalledGateway),
            Arc::new(CheckoutSignatureVerifier::new(SecretString::new(
                "s3cret".to_string(),
            ))),
            Arc::new(InMemoryEventPublisher::new()),
            "rzp_test_abc123",
            "INR",
        );
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let app = build_app(state, &config);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/payment/create-order")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"amount": 500, "currency": "INR"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "message": REQUEST_TIMED_OUT})
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = build_app(state(), &ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/payment/refund")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
