//! Integration tests for the HTTP client against a fake backend.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{ClientError, FailureCause};
use domain::{BookingStats, User, UserRole};
use golf_client::{SessionManager, StoredSession};

use support::{api, http_client, spawn, AuthLog};

fn stats_json() -> Value {
    json!({ "total_bookings": 4, "upcoming_bookings": 1, "total_spent": 180.0 })
}

async fn session_with(token: &str, refresh: Option<&str>) -> Arc<SessionManager> {
    let session = Arc::new(SessionManager::in_memory());
    let user = User::new("7", "ann@club.test", "Ann Lee", UserRole::Member);
    session
        .begin(token.to_string(), refresh.map(str::to_string), Some(user))
        .await
        .unwrap();
    session
}

// =============================================================================
// Envelope normalisation
// =============================================================================

#[tokio::test]
async fn test_unauthorized_without_token_is_a_failure_envelope() {
    let router = Router::new().route(
        &api("/bookings/stats"),
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Missing token" }))) }),
    );
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Missing token"));
    assert_eq!(response.status(), Some(401));
}

#[tokio::test]
async fn test_body_without_success_is_wrapped() {
    let router = Router::new().route(&api("/bookings/stats"), get(|| async { Json(stats_json()) }));
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(response.success);
    let stats = response.data.unwrap();
    assert_eq!(stats.total_bookings, 4);
    assert_eq!(stats.total_spent, 180.0);
}

#[tokio::test]
async fn test_body_with_success_passes_through() {
    let router = Router::new().route(
        &api("/bookings/stats"),
        get(|| async {
            Json(json!({ "success": true, "data": stats_json(), "message": "ok" }))
        }),
    );
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("ok"));
    assert_eq!(response.data.unwrap().upcoming_bookings, 1);
}

#[tokio::test]
async fn test_success_false_body_is_reported_as_failure() {
    let router = Router::new().route(
        &api("/bookings/stats"),
        get(|| async { Json(json!({ "success": false, "error": "Stats unavailable" })) }),
    );
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(response.error_message(), "Stats unavailable");
}

#[tokio::test]
async fn test_auth_endpoints_are_always_wrapped() {
    let router = Router::new().route(
        &api("/auth/profile"),
        get(|| async { Json(json!({ "success": true, "id": 7 })) }),
    );
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<Value>("/auth/profile").await;

    assert!(response.success);
    assert_eq!(response.data, Some(json!({ "success": true, "id": 7 })));
}

#[tokio::test]
async fn test_status_line_when_error_body_has_no_message() {
    let router = Router::new().route(
        &api("/bookings/stats"),
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(response.error_message(), "HTTP 500: Internal Server Error");
    assert_eq!(response.status(), Some(500));
}

#[tokio::test]
async fn test_error_body_message_field_is_used() {
    let router = Router::new().route(
        &api("/bookings/tee-time"),
        post(|| async {
            (StatusCode::CONFLICT, Json(json!({ "message": "Slot already taken" })))
        }),
    );
    let origin = spawn(router).await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.post::<Value, _>("/bookings/tee-time", &json!({})).await;

    assert_eq!(response.error_message(), "Slot already taken");
    assert_eq!(
        response.into_result().unwrap_err(),
        ClientError::Api {
            status: 409,
            message: "Slot already taken".to_string()
        }
    );
}

// =============================================================================
// Transport
// =============================================================================

#[tokio::test]
async fn test_bearer_token_is_attached_when_present() {
    let log = AuthLog::default();
    let seen = log.clone();
    let router = Router::new().route(
        &api("/bookings/stats"),
        get(move |headers: HeaderMap| {
            let seen = seen.clone();
            async move {
                seen.record(&headers);
                Json(stats_json())
            }
        }),
    );
    let origin = spawn(router).await;

    let anonymous = http_client(&origin, Arc::new(SessionManager::in_memory()));
    assert!(anonymous.get::<BookingStats>("/bookings/stats").await.success);

    let signed_in = http_client(&origin, session_with("abc", None).await);
    assert!(signed_in.get::<BookingStats>("/bookings/stats").await.success);

    assert_eq!(log.entries(), vec![None, Some("Bearer abc".to_string())]);
}

#[tokio::test]
async fn test_timeout_becomes_failure_envelope() {
    let router = Router::new().route(
        &api("/bookings/stats"),
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(stats_json())
        }),
    );
    let origin = spawn(router).await;
    let config = support::config(&origin).with_timeout(Duration::from_millis(100));
    let http = golf_client::HttpClient::new(config, Arc::new(SessionManager::in_memory())).unwrap();

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(response.error_message(), "Request timed out");
    assert_eq!(response.cause, Some(FailureCause::Timeout));
}

#[tokio::test]
async fn test_connection_failure_becomes_failure_envelope() {
    let origin = support::closed_origin().await;
    let http = http_client(&origin, Arc::new(SessionManager::in_memory()));

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(response.cause, Some(FailureCause::Network));
}

#[tokio::test]
async fn test_query_values_are_url_encoded() {
    let router = Router::new().route(
        &api("/courses/search"),
        get(|RawQuery(query): RawQuery| async move { Json(json!([{ "id": 1, "name": query }])) }),
    );
    let origin = spawn(router).await;
    let services = support::services(&origin, Arc::new(SessionManager::in_memory()));

    let courses = services
        .courses
        .search_courses("pine & oak")
        .await
        .into_result()
        .unwrap();

    assert_eq!(courses[0].name, "q=pine%20%26%20oak");
}

// =============================================================================
// Refresh policy
// =============================================================================

fn refreshing_backend(refresh_ok: bool, accept: &'static str) -> (Router, Arc<AtomicUsize>) {
    let refreshes = Arc::new(AtomicUsize::new(0));
    let counter = refreshes.clone();

    let router = Router::new()
        .route(
            &api("/bookings/stats"),
            get(move |headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                if auth == accept {
                    (StatusCode::OK, Json(stats_json()))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Token expired" })))
                }
            }),
        )
        .route(
            &api("/auth/refresh"),
            post(move |Json(body): Json<Value>| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    if refresh_ok && body["refresh_token"] == "r1" {
                        (
                            StatusCode::OK,
                            Json(json!({ "token": "fresh", "refresh_token": "r2" })),
                        )
                    } else {
                        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Refresh rejected" })))
                    }
                }
            }),
        );

    (router, refreshes)
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_request_retried_once() {
    let (router, refreshes) = refreshing_backend(true, "Bearer fresh");
    let origin = spawn(router).await;
    let session = session_with("stale", Some("r1")).await;
    let http = http_client(&origin, session.clone());

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(response.success);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(session.token().await.as_deref(), Some("fresh"));
    assert_eq!(session.refresh_token().await.as_deref(), Some("r2"));
    assert_eq!(session.user().await.map(|u| u.id), Some("7".to_string()));
}

#[tokio::test]
async fn test_failed_refresh_clears_session() {
    let (router, refreshes) = refreshing_backend(false, "Bearer fresh");
    let origin = spawn(router).await;
    let session = session_with("stale", Some("r1")).await;
    let http = http_client(&origin, session.clone());

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(response.status(), Some(401));
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_second_unauthorized_after_refresh_clears_session() {
    let (router, refreshes) = refreshing_backend(true, "Bearer never");
    let origin = spawn(router).await;
    let session = session_with("stale", Some("r1")).await;
    let http = http_client(&origin, session.clone());

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(session.snapshot().await, None::<StoredSession>);
}

#[tokio::test]
async fn test_unauthorized_without_refresh_token_keeps_session() {
    let (router, refreshes) = refreshing_backend(true, "Bearer fresh");
    let origin = spawn(router).await;
    let session = session_with("stale", None).await;
    let http = http_client(&origin, session.clone());

    let response = http.get::<BookingStats>("/bookings/stats").await;

    assert!(!response.success);
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    assert_eq!(session.token().await.as_deref(), Some("stale"));
}

#[tokio::test]
async fn test_auth_endpoints_never_trigger_refresh() {
    let (router, refreshes) = refreshing_backend(true, "Bearer fresh");
    let router = router.route(
        &api("/auth/profile"),
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Token expired" }))) }),
    );
    let origin = spawn(router).await;
    let session = session_with("stale", Some("r1")).await;
    let http = http_client(&origin, session.clone());

    let response = http.get::<User>("/auth/profile").await;

    assert!(!response.success);
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    assert!(session.is_authenticated().await);
}
