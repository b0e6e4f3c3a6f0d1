//! Shared helpers: an in-process fake backend and client builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{HeaderMap, Method, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use common::ClientConfig;
use golf_client::{HttpClient, Services, SessionManager};

pub const PREFIX: &str = "/api/v1";

/// Serve `router` on an ephemeral local port and return its origin
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Origin of a port nobody listens on
pub async fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn config(origin: &str) -> ClientConfig {
    ClientConfig::default()
        .with_api_url(origin)
        .with_timeout(Duration::from_secs(2))
}

pub fn http_client(origin: &str, session: Arc<SessionManager>) -> HttpClient {
    HttpClient::new(config(origin), session).unwrap()
}

pub fn services(origin: &str, session: Arc<SessionManager>) -> Services {
    Services::new(http_client(origin, session))
}

/// Route path under the API prefix
pub fn api(path: &str) -> String {
    format!("{}{}", PREFIX, path)
}

/// Records the `Authorization` header of every request it sees
#[derive(Clone, Default)]
pub struct AuthLog(Arc<Mutex<Vec<Option<String>>>>);

impl AuthLog {
    pub fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.0.lock().unwrap().push(value);
    }

    pub fn entries(&self) -> Vec<Option<String>> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// One request as the fake backend saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    /// Path and query
    pub uri: String,
    /// JSON body, `None` when the request had none
    pub body: Option<Value>,
}

/// Every request reaching a [`recorder`] backend, in arrival order
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<Recorded>>>);

impl RequestLog {
    pub fn entries(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    /// The only request seen; panics unless exactly one arrived
    pub fn single(&self) -> Recorded {
        let entries = self.entries();
        assert_eq!(entries.len(), 1, "expected one request, got {:?}", entries);
        entries[0].clone()
    }
}

/// Backend answering every request with `reply` and logging what it received
pub fn recorder(reply: Value) -> (Router, RequestLog) {
    let log = RequestLog::default();
    let seen = log.clone();

    let router = Router::new().fallback(move |method: Method, uri: Uri, body: String| {
        let seen = seen.clone();
        let reply = reply.clone();
        async move {
            seen.0.lock().unwrap().push(Recorded {
                method,
                uri: uri.to_string(),
                body: serde_json::from_str(&body).ok(),
            });
            Json(reply)
        }
    });

    (router, log)
}

pub fn member_json(tier: &str) -> Value {
    json!({
        "id": 7,
        "email": "ann@club.test",
        "name": "Ann Lee",
        "role": "member",
        "status": "active",
        "membership_type": tier
    })
}

pub fn admin_json() -> Value {
    json!({
        "id": "a-1",
        "email": "pro@club.test",
        "name": "Club Pro",
        "role": "admin",
        "can_manage_users": true
    })
}

pub fn tee_time_json(id: u32, status: &str) -> Value {
    json!({
        "id": id,
        "course_id": 3,
        "user_id": 7,
        "date": "2026-05-02",
        "time": "08:40",
        "players": 2,
        "status": status,
        "total_amount": 90.0,
        "payment_status": "paid"
    })
}

pub fn range_booking_json(id: u32) -> Value {
    json!({
        "id": id,
        "course_id": 3,
        "user_id": 7,
        "date": "2026-05-02",
        "start_time": "17:00",
        "duration": 60,
        "bucket_size": "large",
        "bucket_count": 2
    })
}
