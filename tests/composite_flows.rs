//! Scenario tests for the composite gateway against stub backends.
//!
//! Each stub backend is a throwaway axum router bound to an ephemeral
//! port, so every failure mode (error statuses, garbage bodies, a dead
//! backend) is exercised over a real HTTP round trip.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use product_composite::composite::CompositeService;
use product_composite::gateway::{build_router, state::AppState};
use product_composite::integration::{
    CompositeIntegration, IntegrationError, ProductService, RecommendationService, RestClient,
    ReviewService,
};
use product_composite::models::{Product, Recommendation};

// ============================================================
// Stub backend plumbing
// ============================================================

async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A port nothing listens on: bind, read the address, drop the listener.
async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

fn integration_for(product: SocketAddr, rec: SocketAddr, rev: SocketAddr) -> CompositeIntegration {
    let http = http_client();
    CompositeIntegration::new(
        RestClient::new(http.clone(), "127.0.0.1", product.port(), "product"),
        RestClient::new(http.clone(), "127.0.0.1", rec.port(), "recommendation"),
        RestClient::new(http, "127.0.0.1", rev.port(), "review"),
    )
}

fn error_body(path: &str, status: u16, message: &str) -> Value {
    json!({
        "timestamp": "2024-05-01T10:00:00Z",
        "path": path,
        "status": status,
        "message": message,
    })
}

fn ipad_json() -> Value {
    json!({
        "productId": 1,
        "name": "iPad",
        "weight": 200,
        "serviceAddress": "pro-1:7001",
    })
}

fn happy_product_backend() -> Router {
    Router::new().route(
        "/product/{product_id}",
        get(|| async { Json(ipad_json()) }),
    )
}

fn happy_review_backend() -> Router {
    Router::new().route(
        "/review",
        get(|| async {
            Json(json!([{
                "productId": 1,
                "reviewId": 1,
                "author": "bob",
                "subject": "nice",
                "content": "works",
                "serviceAddress": "rev-1:7003",
            }]))
        }),
    )
}

// ============================================================
// Single-item operations
// ============================================================

#[tokio::test]
async fn get_product_preserves_backend_record() {
    let product = spawn_backend(happy_product_backend()).await;
    let integration = integration_for(
        product,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let found = integration.get_product(1).await.unwrap();
    assert_eq!(found.product_id, 1);
    assert_eq!(found.name, "iPad");
    assert_eq!(found.weight, 200);
}

#[tokio::test]
async fn product_404_carries_backend_message_verbatim() {
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(error_body(
                    "/product/13",
                    404,
                    "No product found for productId: 13",
                )),
            )
        }),
    ))
    .await;
    let integration = integration_for(
        product,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let err = integration.get_product(13).await.unwrap_err();
    match err {
        IntegrationError::NotFound(msg) => {
            assert_eq!(msg, "No product found for productId: 13")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn product_422_becomes_invalid_input() {
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        get(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(error_body("/product/-1", 422, "Invalid productId: -1")),
            )
        }),
    ))
    .await;
    let integration = integration_for(
        product,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let err = integration.get_product(-1).await.unwrap_err();
    match err {
        IntegrationError::InvalidInput(msg) => assert_eq!(msg, "Invalid productId: -1"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[tokio::test]
async fn unexpected_status_keeps_code_and_raw_body() {
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
    ))
    .await;
    let integration = integration_for(
        product,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let err = integration.get_product(1).await.unwrap_err();
    match err {
        IntegrationError::UnexpectedStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "<html>boom</html>");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn unparsable_error_body_does_not_cause_secondary_failure() {
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        get(|| async { (StatusCode::NOT_FOUND, "not json") }),
    ))
    .await;
    let integration = integration_for(
        product,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let err = integration.get_product(1).await.unwrap_err();
    match err {
        IntegrationError::NotFound(msg) => assert_eq!(msg, "not json"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn dead_backend_is_a_transport_failure_for_single_item_ops() {
    let integration = integration_for(
        unreachable_addr().await,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let err = integration.get_product(1).await.unwrap_err();
    assert!(
        matches!(err, IntegrationError::Transport(_)),
        "expected Transport, got {:?}",
        err
    );
}

#[tokio::test]
async fn create_product_round_trips_through_backend() {
    // Echo backend: returns whatever was posted.
    let product = spawn_backend(Router::new().route(
        "/product",
        post(|Json(body): Json<Value>| async move { Json(body) }),
    ))
    .await;
    let integration = integration_for(
        product,
        unreachable_addr().await,
        unreachable_addr().await,
    );

    let created = integration
        .create_product(Product {
            product_id: 42,
            name: "Lamp".into(),
            weight: 7,
            service_address: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(created.product_id, 42);
    assert_eq!(created.name, "Lamp");
}

// ============================================================
// Degrade-to-empty list retrieval
// ============================================================

#[tokio::test]
async fn list_retrieval_degrades_to_empty_for_each_failure_mode() {
    for status in [
        StatusCode::NOT_FOUND,
        StatusCode::UNPROCESSABLE_ENTITY,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let rec = spawn_backend(Router::new().route(
            "/recommendation",
            get(move || async move {
                (
                    status,
                    Json(error_body("/recommendation", status.as_u16(), "failed")),
                )
            }),
        ))
        .await;
        let integration = integration_for(unreachable_addr().await, rec, unreachable_addr().await);

        let recommendations: Vec<Recommendation> = integration.get_recommendations(1).await;
        assert!(
            recommendations.is_empty(),
            "expected empty list for status {}",
            status
        );
    }

    // And a backend that is not even reachable.
    let integration = integration_for(
        unreachable_addr().await,
        unreachable_addr().await,
        unreachable_addr().await,
    );
    assert!(integration.get_recommendations(1).await.is_empty());
    assert!(integration.get_reviews(1).await.is_empty());
}

// ============================================================
// Aggregate fan-out
// ============================================================

async fn composite_service(
    product: SocketAddr,
    rec: SocketAddr,
    rev: SocketAddr,
) -> CompositeService {
    let integration = Arc::new(integration_for(product, rec, rev));
    CompositeService::new(
        integration.clone(),
        integration.clone(),
        integration,
        "composite:7000".into(),
    )
}

#[tokio::test]
async fn aggregate_survives_unreachable_recommendation_backend() {
    let product = spawn_backend(happy_product_backend()).await;
    let rev = spawn_backend(happy_review_backend()).await;
    let service = composite_service(product, unreachable_addr().await, rev).await;

    let aggregate = service.get_product_aggregate(1).await.unwrap();
    assert_eq!(aggregate.product_id, 1);
    assert_eq!(aggregate.name, "iPad");
    assert!(aggregate.recommendations.is_empty());
    assert_eq!(aggregate.reviews.len(), 1);
    assert_eq!(aggregate.service_addresses.review, "rev-1:7003");
}

#[tokio::test]
async fn aggregate_fails_when_product_backend_fails() {
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(error_body("/product/13", 404, "No product found for productId: 13")),
            )
        }),
    ))
    .await;
    let rev = spawn_backend(happy_review_backend()).await;
    let service = composite_service(product, unreachable_addr().await, rev).await;

    let err = service.get_product_aggregate(13).await.unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================
// Idempotent delete
// ============================================================

#[tokio::test]
async fn double_delete_is_idempotent_for_the_caller() {
    // Stateful stub: first delete succeeds, later deletes answer 404.
    let deleted = Arc::new(AtomicBool::new(false));
    let flag = deleted.clone();
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        delete(move || {
            let flag = flag.clone();
            async move {
                if flag.swap(true, Ordering::SeqCst) {
                    (
                        StatusCode::NOT_FOUND,
                        Json(error_body(
                            "/product/13",
                            404,
                            "No product found for productId: 13",
                        )),
                    )
                        .into_response()
                } else {
                    StatusCode::OK.into_response()
                }
            }
        }),
    ))
    .await;
    let service = composite_service(product, unreachable_addr().await, unreachable_addr().await).await;

    service.delete_product(13).await.unwrap();
    service.delete_product(13).await.unwrap();
    assert!(deleted.load(Ordering::SeqCst));
}

// ============================================================
// Gateway surface
// ============================================================

#[tokio::test]
async fn gateway_renders_error_info_wire_shape() {
    let product = spawn_backend(Router::new().route(
        "/product/{product_id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(error_body("/product/13", 404, "No product found for productId: 13")),
            )
        }),
    ))
    .await;
    let service = composite_service(product, unreachable_addr().await, unreachable_addr().await).await;

    let gateway = spawn_backend(build_router(AppState::new(Arc::new(service)))).await;

    let response = http_client()
        .get(format!("http://127.0.0.1:{}/product-composite/13", gateway.port()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["path"], "/product-composite/13");
    assert_eq!(body["message"], "No product found for productId: 13");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn gateway_serves_the_aggregate() {
    let product = spawn_backend(happy_product_backend()).await;
    let rev = spawn_backend(happy_review_backend()).await;
    let service = composite_service(product, unreachable_addr().await, rev).await;

    let gateway = spawn_backend(build_router(AppState::new(Arc::new(service)))).await;

    let body: Value = http_client()
        .get(format!("http://127.0.0.1:{}/product-composite/1", gateway.port()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["productId"], 1);
    assert_eq!(body["name"], "iPad");
    assert_eq!(body["recommendations"], json!([]));
    assert_eq!(body["reviews"][0]["author"], "bob");
    assert_eq!(body["serviceAddresses"]["composite"], "composite:7000");
}
