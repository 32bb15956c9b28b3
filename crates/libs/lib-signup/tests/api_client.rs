//! # API Client Tests
//!
//! Exercises the reqwest client against an in-process axum server.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lib_signup::api::ApiClient;
use lib_signup::{SignupApi, SignupConfig, SignupError};
use shared::{JoinAirdropRequest, JoinAirdropResponse};

const VALID_WALLET: &str = "0x1234567890123456789012345678901234567890";

type Received = Arc<Mutex<Vec<JoinAirdropRequest>>>;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{}", addr)
}

/// Join endpoint that refuses wallets it has already seen.
fn join_router(received: Received) -> Router {
    Router::new()
        .route(
            "/join-airdrop",
            post(|State(received): State<Received>, Json(req): Json<JoinAirdropRequest>| async move {
                let mut received = received.lock().unwrap();
                let duplicate = received.iter().any(|r| r.wallet_address == req.wallet_address);
                received.push(req);
                if duplicate {
                    Json(JoinAirdropResponse::declined("Wallet already registered"))
                } else {
                    Json(JoinAirdropResponse {
                        success: true,
                        message: "Successfully joined airdrop! Redirecting to tasks...".to_string(),
                        referral_code: Some("K3J9QZ2M".to_string()),
                    })
                }
            }),
        )
        .with_state(received)
}

fn client_for(base: &str) -> ApiClient {
    let config = SignupConfig {
        api_base: base.to_string(),
        ..SignupConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

fn request() -> JoinAirdropRequest {
    JoinAirdropRequest {
        wallet_address: VALID_WALLET.to_string(),
        email: "alice@example.com".to_string(),
        twitter_handle: "@alice".to_string(),
        referral_code: String::new(),
    }
}

#[tokio::test]
async fn test_join_success_then_duplicate() {
    // Arrange
    let received = Received::default();
    let base = spawn_server(join_router(received.clone())).await;
    let client = client_for(&base);

    // Act
    let first = client.join_airdrop(&request()).await.unwrap();
    let second = client.join_airdrop(&request()).await.unwrap();

    // Assert
    assert!(first.success);
    assert_eq!(first.referral_code.as_deref(), Some("K3J9QZ2M"));
    assert_eq!(second, JoinAirdropResponse::declined("Wallet already registered"));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], request());
}

#[tokio::test]
async fn test_declined_body_parsed_on_error_status() {
    let router = Router::new().route(
        "/join-airdrop",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(JoinAirdropResponse::declined("No data received")),
            )
        }),
    );
    let base = spawn_server(router).await;

    let response = client_for(&base).join_airdrop(&request()).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "No data received");
}

#[tokio::test]
async fn test_success_without_message_still_joins() {
    let router = Router::new().route(
        "/join-airdrop",
        post(|| async { Json(serde_json::json!({ "success": true })) }),
    );
    let base = spawn_server(router).await;

    let response = client_for(&base).join_airdrop(&request()).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "");
}

#[tokio::test]
async fn test_non_json_body_is_api_error() {
    let router = Router::new().route(
        "/join-airdrop",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Internal Server Error</h1>") }),
    );
    let base = spawn_server(router).await;

    let result = client_for(&base).join_airdrop(&request()).await;

    assert!(matches!(result, Err(SignupError::Api(msg)) if msg.starts_with("Failed to parse response")));
}

#[tokio::test]
async fn test_unreachable_server_is_api_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(&format!("http://{}", addr)).join_airdrop(&request()).await;

    assert!(matches!(result, Err(SignupError::Api(msg)) if msg.starts_with("Network error")));
}

#[test]
fn test_empty_base_rejected() {
    let result = ApiClient::new(&SignupConfig::default());
    assert!(matches!(result, Err(SignupError::Config(_))));
}
