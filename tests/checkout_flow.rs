//! Integration tests for the checkout handshake.
//!
//! These tests drive the assembled application end to end:
//! 1. `POST /api/payment/create-order` mints an order through the real
//!    Razorpay adapter, pointed at a fake Orders API
//! 2. The hosted checkout is simulated by signing `orderId|paymentId`
//! 3. `POST /api/payment/verify-payment` accepts or rejects the result
//! 4. Payment events are published for each step

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use storefront_payments::adapters::events::InMemoryEventPublisher;
use storefront_payments::adapters::http::{build_app, PaymentAppState};
use storefront_payments::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use storefront_payments::config::ServerConfig;
use storefront_payments::domain::foundation::{OrderId, PaymentId};
use storefront_payments::domain::payment::CheckoutSignatureVerifier;

const KEY_ID: &str = "rzp_test_abc123";
const KEY_SECRET: &str = "test_secret";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Orders API stand-in: records request bodies and mints `order_test123`.
#[derive(Clone, Default)]
struct FakeOrdersApi {
    received: Arc<Mutex<Vec<Value>>>,
}

async fn fake_create_order(State(api): State<FakeOrdersApi>, Json(body): Json<Value>) -> Json<Value> {
    api.received.lock().unwrap().push(body.clone());
    Json(json!({
        "id": "order_test123",
        "entity": "order",
        "amount": body["amount"],
        "amount_paid": 0,
        "amount_due": body["amount"],
        "currency": body["currency"],
        "receipt": body["receipt"],
        "status": "created",
        "attempts": 0,
        "notes": [],
        "created_at": 1705276800
    }))
}

async fn spawn_fake_orders_api() -> (String, FakeOrdersApi) {
    let api = FakeOrdersApi::default();
    let router = Router::new()
        .route("/v1/orders", post(fake_create_order))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), api)
}

struct TestApp {
    router: Router,
    events: Arc<InMemoryEventPublisher>,
    orders_api: FakeOrdersApi,
}

async fn test_app() -> TestApp {
    let (base_url, orders_api) = spawn_fake_orders_api().await;
    let gateway =
        RazorpayGateway::new(RazorpayConfig::new(KEY_ID, KEY_SECRET).with_base_url(base_url))
            .unwrap();
    let events = Arc::new(InMemoryEventPublisher::new());

    let state = PaymentAppState::new(
        Arc::new(gateway),
        Arc::new(CheckoutSignatureVerifier::new(SecretString::new(
            KEY_SECRET.to_string(),
        ))),
        events.clone(),
        KEY_ID,
        "INR",
    );

    TestApp {
        router: build_app(state, &ServerConfig::default()),
        events,
        orders_api,
    }
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// What the hosted checkout hands the browser on success.
fn widget_signature(order_id: &str, payment_id: &str) -> String {
    CheckoutSignatureVerifier::new(SecretString::new(KEY_SECRET.to_string())).sign(
        &OrderId::new(order_id).unwrap(),
        &PaymentId::new(payment_id).unwrap(),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_handshake_succeeds() {
    let app = test_app().await;

    // 1. Create the order
    let (status, order) = post_json(
        &app.router,
        "/api/payment/create-order",
        json!({"amount": 500.5, "currency": "INR"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["success"], true);
    assert_eq!(order["orderId"], "order_test123");
    assert_eq!(order["amount"], 50050);
    assert_eq!(order["currency"], "INR");

    let sent = app.orders_api.received.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["amount"], 50050);
    assert!(sent[0]["receipt"].as_str().unwrap().starts_with("receipt_"));

    // 2. Checkout widget signs the result
    let order_id = order["orderId"].as_str().unwrap();
    let signature = widget_signature(order_id, "pay_test456");
    assert_eq!(
        signature,
        "80c5e4f6be6e2acc8efac61036a58f99b47ead0f6b93feff0ca5cfd41054f0f0"
    );

    // 3. Verify it, using the widget's own field names
    let (status, verified) = post_json(
        &app.router,
        "/api/payment/verify-payment",
        json!({
            "razorpay_order_id": order_id,
            "razorpay_payment_id": "pay_test456",
            "razorpay_signature": signature
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        verified,
        json!({"success": true, "message": "Payment verified successfully."})
    );

    // 4. Both steps were published
    assert!(app.events.has_event("payment.order_created"));
    assert!(app.events.has_event("payment.verified"));
    assert_eq!(app.events.event_count(), 2);
}

#[tokio::test]
async fn signature_for_another_payment_is_rejected() {
    let app = test_app().await;
    let signature = widget_signature("order_test123", "pay_other");

    let (status, body) = post_json(
        &app.router,
        "/api/payment/verify-payment",
        json!({
            "orderId": "order_test123",
            "paymentId": "pay_test456",
            "signature": signature
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "message": "Payment verification failed."})
    );
    assert!(app.events.has_event("payment.verification_failed"));
}

#[tokio::test]
async fn invalid_amount_never_reaches_gateway() {
    let app = test_app().await;

    for amount in [json!(0), json!(-5), json!("")] {
        let (status, body) = post_json(
            &app.router,
            "/api/payment/create-order",
            json!({"amount": amount, "currency": "INR"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    assert!(app.orders_api.received.lock().unwrap().is_empty());
    assert_eq!(app.events.event_count(), 0);
}
